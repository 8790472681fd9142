//! Extension trait for turning any `Result` into a `Result<T, CompositeError>`.
//!
//! # Examples
//!
//! ```
//! use error_strata::traits::ResultExt;
//! use error_strata::CompositeError;
//!
//! fn load_config() -> Result<String, CompositeError> {
//!     std::fs::read_to_string("config.toml").wrap_err_msg("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.message(), "loading configuration file");
//! assert!(err.cause().is_some());
//! ```

use crate::types::CompositeError;
use core::error::Error as StdError;

/// Wraps the error of a `Result` into a [`CompositeError`].
///
/// Every method goes through [`CompositeError::wrap`], so an error that already
/// is, or already wraps, a `CompositeError` keeps its original stack trace.
pub trait ResultExt<T, E> {
    /// Wraps the error without adding anything to it.
    fn wrap_err(self) -> Result<T, CompositeError>;

    /// Wraps the error and sets the message.
    fn wrap_err_msg<M: Into<String>>(self, message: M) -> Result<T, CompositeError>;

    /// Wraps the error and sets a lazily built message.
    ///
    /// The closure only runs on the error path.
    fn wrap_err_with<F>(self, f: F) -> Result<T, CompositeError>
    where
        F: FnOnce() -> String;

    /// Wraps the error and sets the code.
    fn wrap_err_code(self, code: u32) -> Result<T, CompositeError>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline(never)]
    fn wrap_err(self) -> Result<T, CompositeError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CompositeError::wrap(err)),
        }
    }

    #[inline(never)]
    fn wrap_err_msg<M: Into<String>>(self, message: M) -> Result<T, CompositeError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CompositeError::wrap(err).with_message(message)),
        }
    }

    #[inline(never)]
    fn wrap_err_with<F>(self, f: F) -> Result<T, CompositeError>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CompositeError::wrap(err).with_message(f())),
        }
    }

    #[inline(never)]
    fn wrap_err_code(self, code: u32) -> Result<T, CompositeError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CompositeError::wrap(err).with_code(code)),
        }
    }
}
