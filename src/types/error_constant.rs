//! String-backed sentinel errors.
//!
//! ```
//! use error_strata::{is, CompositeError, ErrorConstant};
//!
//! static NOT_FOUND: ErrorConstant = ErrorConstant::from_static("not found");
//!
//! let err = CompositeError::wrap(NOT_FOUND.clone()).with_code(404);
//! assert!(is(&err, &NOT_FOUND));
//! ```

use core::fmt;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Error made of a single message, comparable by value.
///
/// Chain matching treats two constants with the same text as the same error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorConstant(Cow<'static, str>);

impl ErrorConstant {
    /// Creates a constant usable in `static` and `const` items.
    pub const fn from_static(message: &'static str) -> Self {
        Self(Cow::Borrowed(message))
    }

    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::error::Error for ErrorConstant {}

impl From<&'static str> for ErrorConstant {
    fn from(message: &'static str) -> Self {
        Self::from_static(message)
    }
}

impl From<String> for ErrorConstant {
    fn from(message: String) -> Self {
        Self(Cow::Owned(message))
    }
}
