//! Error types and utilities.
//!
//! This module provides the values this crate is built around: the
//! [`CompositeError`], the [`ErrorCollector`], and the [`StackTrace`] captured
//! when an error is created.
//!
//! # Examples
//!
//! ```
//! use error_strata::CompositeError;
//!
//! let err = CompositeError::new("database connection failed")
//!     .with_code(17)
//!     .with_status(503)
//!     .with_detail("host=db-1");
//!
//! assert_eq!(err.to_string(), "code: 17 message: database connection failed details: [host=db-1]");
//! ```
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::sync::Arc;

pub mod composite_error;
pub mod detail_list;
pub mod encode_error;
pub mod error_collector;
pub mod error_constant;
pub mod error_formatter;
pub mod stack_trace;
#[cfg(feature = "xml")]
pub(crate) mod xml;

pub use composite_error::*;
pub use detail_list::DetailList;
pub use encode_error::EncodeError;
pub use error_collector::ErrorCollector;
pub use error_constant::ErrorConstant;
pub use error_formatter::{Render, Style};
pub use stack_trace::{
    install_resolver, with_resolver, ResolverInstalled, StackFrame, StackTrace, StdResolver,
    SymbolResolver, MAX_DEPTH,
};

/// SmallVec-backed collection used for details and collected errors.
///
/// Uses inline storage for a single element, the common case for both.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Shared handle to an arbitrary error, used for causes and collected errors.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Key/value context attached to a [`CompositeError`]. Keys iterate in sorted order.
pub type Map = BTreeMap<String, serde_json::Value>;
