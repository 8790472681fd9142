//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_strata::prelude::*;
//!
//! fn load_config() -> Result<String, CompositeError> {
//!     std::fs::read_to_string("config.toml").wrap_err_msg("loading configuration")
//! }
//!
//! assert_eq!(code(&load_config().unwrap_err()), 0);
//! ```

// Macros
pub use crate::errorf;

// Core types
pub use crate::types::{CompositeError, ErrorCollector, ErrorConstant, Map, Render, Style};

// Traits and accessors
pub use crate::traits::{cause, code, context, details, find, is, message, status, Facets, ResultExt};

/// Result alias for functions failing with a [`CompositeError`].
pub type CompositeResult<T> = Result<T, CompositeError>;
