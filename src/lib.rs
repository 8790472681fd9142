//! Structured errors with codes, statuses, details, context and stack traces.
//!
//! The central type is [`CompositeError`], an immutable builder that carries a
//! numeric code, an HTTP-like status, a message, free-form details, a key/value
//! context, the stack captured where it was created and an optional cause.
//! [`ErrorCollector`] groups several independent errors into one.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_strata::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and Rendering
//!
//! ```
//! use error_strata::CompositeError;
//! use std::io;
//!
//! let err = CompositeError::new("failed")
//!     .with_code(404)
//!     .with_error(io::Error::other("oh no"));
//!
//! assert_eq!(err.to_string(), "code: 404 message: failed cause: oh no");
//! assert!(format!("{:#}", err).starts_with("    code: 404\n message: failed\n   cause: oh no"));
//! ```
//!
//! ## Structured Encoding
//!
//! ```
//! use error_strata::CompositeError;
//!
//! let err = CompositeError::new("oh no")
//!     .with_code(200)
//!     .with_context_value("user_id", 42);
//!
//! assert_eq!(
//!     err.to_json().unwrap(),
//!     r#"{"error_code":200,"error_message":"oh no","user_id":42}"#
//! );
//! ```
//!
//! ## Collecting Errors
//!
//! ```
//! use error_strata::{find, CompositeError, ErrorCollector};
//!
//! let mut errors = ErrorCollector::new();
//! errors.wrap(CompositeError::new("name is required").with_code(1));
//! errors.wrap(CompositeError::new("age must be positive").with_code(2));
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(find::<CompositeError>(&errors).map(|err| err.code()), Some(1));
//! assert!(errors.into_result().is_err());
//! ```

/// Macros for creating errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Chain walking, facet accessors and `Result` extensions
pub mod traits;
/// CompositeError, ErrorCollector, stack traces and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    install_resolver, with_resolver, CompositeError, DetailList, EncodeError, ErrorCollector,
    ErrorConstant, ErrorData, ErrorVec, Field, Map, Render, ResolverInstalled, SharedError,
    StackFrame, StackTrace, StdResolver, Style, SymbolResolver, DEFAULT_STATUS, MAX_DEPTH,
};
