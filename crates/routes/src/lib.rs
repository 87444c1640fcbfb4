//! Route sets for the content store
//!
//! This crate turns stored routing data into something the routing tier can
//! act on:
//! - RegisterableRoute / RegisterableRedirect: independently valid values
//! - RegisterableRouteSet: derived from a document or a publish intent
//! - Route-set validation (containment, uniqueness, redirect exclusivity)
//! - RoutingTier: the routing-tier collaborator
//! - RouteRegistrationCoordinator: stage everything, commit once
//! - InMemoryRouter: an in-process routing table with commit semantics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod registration;
pub mod route;
pub mod route_set;
pub mod router;
pub mod validator;

pub use memory::{InMemoryRouter, RouteTarget, RouterCall};
pub use registration::{RegistrationError, RouteRegistrationCoordinator};
pub use route::{MatchType, RegisterableRedirect, RegisterableRoute, RouteKind};
pub use route_set::RegisterableRouteSet;
pub use router::{RouterError, RouterResult, RoutingTier};
pub use validator::{REDIRECTS_FIELD, ROUTES_FIELD};
