//! Macros for building [`CompositeError`](crate::CompositeError)s.
//!
//! - [`macro@crate::errorf`] - Formats a message and captures the stack at the
//!   macro's call site.
//!
//! # Examples
//!
//! ```
//! use error_strata::errorf;
//!
//! let user_id = 42;
//! let err = errorf!("user {} not found", user_id).with_status(404);
//!
//! assert_eq!(err.message(), "user 42 not found");
//! assert_eq!(err.status(), 404);
//! ```

/// Creates a [`CompositeError`](crate::CompositeError) from a format string.
///
/// Accepts the same arguments as [`format!`]. The new error has status 500,
/// no code and no cause.
///
/// # Examples
///
/// ```
/// use error_strata::errorf;
///
/// let err = errorf!("connection to {}:{} refused", "db-1", 5432);
/// assert_eq!(err.to_string(), "message: connection to db-1:5432 refused");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::CompositeError::new(format!($($arg)*))
    };
}
