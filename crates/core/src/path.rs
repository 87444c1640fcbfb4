//! URL path rules
//!
//! Every `base_path`, route path and redirect destination must be an
//! absolute URL path:
//! - begins with exactly one `/` (a leading `//` would parse as a host)
//! - no whitespace, no query (`?`) and no fragment (`#`)
//! - only URI path characters; non-ASCII must arrive percent-encoded
//! - every `%` introduces two hex digits
//!
//! Percent-encoded paths are stored exactly as given, never decoded.

/// Message attached to a field holding an invalid path
pub const INVALID_PATH_MESSAGE: &str = "is not a valid absolute URL path";

/// Check whether `path` is an absolute URL path
///
/// # Examples
///
/// ```
/// use content_store_core::path::is_absolute_path;
///
/// assert!(is_absolute_path("/vat-rates"));
/// assert!(is_absolute_path("/government/world/%D8%A7%D9%84%D8%B9%D8%B1%D8%A8%D9%8A%D8%A9"));
/// assert!(!is_absolute_path("vat-rates"));
/// assert!(!is_absolute_path("/vat rates"));
/// assert!(!is_absolute_path("/search?q=tax"));
/// ```
pub fn is_absolute_path(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") {
        return false;
    }

    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3);
                match hex {
                    Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => i += 3,
                    _ => return false,
                }
            }
            b if is_path_byte(b) => i += 1,
            _ => return false,
        }
    }
    true
}

fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=:@/".contains(&b)
}

/// Split a path into its non-empty `/`-delimited segments
///
/// ```
/// use content_store_core::path::segments;
///
/// assert_eq!(segments("/a//b/c/"), vec!["a", "b", "c"]);
/// assert!(segments("/").is_empty());
/// ```
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// True when `candidate`'s segments start with all of `base`'s segments
///
/// The root path `/` contains every path.
pub fn is_beneath(base: &str, candidate: &str) -> bool {
    let base_segments = segments(base);
    let candidate_segments = segments(candidate);
    candidate_segments.len() >= base_segments.len()
        && candidate_segments[..base_segments.len()] == base_segments[..]
}

/// True when `candidate` is `base` followed by `.` and a word token, e.g. `.json`
pub fn is_extension_of(base: &str, candidate: &str) -> bool {
    match candidate
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        Some(token) => {
            !token.is_empty()
                && token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}
