//! # Content Store API
//!
//! The command interface of the content store.
//!
//! This crate provides:
//! - [`Executor`] - dispatches commands to the engine
//! - [`Command`]/[`Output`]/[`Error`] - the serializable instruction set
//! - [`Collaborators`] - the external systems the executor writes through
//!
//! ## Quick Start
//!
//! ```
//! use content_store_api::{Collaborators, Command, Executor, Output, WriteStatus};
//! use content_store_core::ContentStoreConfig;
//!
//! let executor = Executor::new(Collaborators::in_memory(), ContentStoreConfig::default());
//! let body = r#"{
//!     "title": "VAT rates",
//!     "format": "answer",
//!     "public_updated_at": "2014-05-14T13:00:06Z",
//!     "rendering_app": "frontend",
//!     "update_type": "major",
//!     "routes": [{"path": "/vat-rates", "type": "exact"}]
//! }"#;
//! let output = executor
//!     .execute(Command::PutContentItem {
//!         base_path: "/vat-rates".into(),
//!         body: body.into(),
//!     })
//!     .unwrap();
//! assert_eq!(
//!     output,
//!     Output::Written {
//!         base_path: "/vat-rates".into(),
//!         status: WriteStatus::Created
//!     }
//! );
//! ```

#![warn(missing_docs)]

pub(crate) mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;
pub mod presenter;
mod types;


pub use command::Command;
pub use error::Error;
pub use executor::{Collaborators, Executor};
pub use output::Output;
pub use types::*;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
