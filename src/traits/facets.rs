//! Facet accessors for arbitrary errors.
//!
//! The free functions look up each capability of an error through [`Facets`]
//! and return a neutral value when the error does not expose it, so call
//! sites never need to know the concrete type they hold.
//!
//! Custom errors opt in by implementing the `Has*` traits they support and
//! pointing the matching [`Facets`] hooks at themselves. Trait objects such as
//! `&dyn Error` expose the facets of this crate's own error types.
//!
//! # Examples
//!
//! ```
//! use error_strata::{code, message, status, CompositeError};
//! use std::io;
//!
//! let err = CompositeError::new("failed").with_code(200).with_status(409);
//! assert_eq!(code(&err), 200);
//! assert_eq!(status(&err), 409);
//! assert_eq!(message(&err), "failed");
//!
//! let plain = io::Error::other("oh no");
//! assert_eq!(code(&plain), 0);
//! assert_eq!(message(&plain), "");
//! ```
//!
//! ```
//! use error_strata::{code, message, Facets, HasCode};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct RateLimited;
//!
//! impl fmt::Display for RateLimited {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("rate limited")
//!     }
//! }
//!
//! impl std::error::Error for RateLimited {}
//!
//! impl HasCode for RateLimited {
//!     fn code(&self) -> u32 {
//!         429
//!     }
//! }
//!
//! impl Facets for RateLimited {
//!     fn as_code(&self) -> Option<&dyn HasCode> {
//!         Some(self)
//!     }
//! }
//!
//! assert_eq!(code(&RateLimited), 429);
//! assert_eq!(message(&RateLimited), "");
//! ```

use crate::types::{CompositeError, ErrorCollector, ErrorConstant, Map};
use core::error::Error as StdError;

/// Errors that carry a numeric code.
pub trait HasCode {
    fn code(&self) -> u32;
}

/// Errors that carry an HTTP-like status.
pub trait HasStatus {
    fn status(&self) -> u16;
}

/// Errors that carry a human-readable message separate from their display form.
pub trait HasMessage {
    fn message(&self) -> &str;
}

pub trait HasDetails {
    fn details(&self) -> &[String];
}

pub trait HasContext {
    fn context(&self) -> &Map;
}

/// Errors that expose the error they wrap.
pub trait HasCause {
    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)>;
}

impl HasCode for CompositeError {
    #[inline]
    fn code(&self) -> u32 {
        CompositeError::code(self)
    }
}

impl HasStatus for CompositeError {
    #[inline]
    fn status(&self) -> u16 {
        CompositeError::status(self)
    }
}

impl HasMessage for CompositeError {
    #[inline]
    fn message(&self) -> &str {
        CompositeError::message(self)
    }
}

impl HasDetails for CompositeError {
    #[inline]
    fn details(&self) -> &[String] {
        CompositeError::details(self).as_slice()
    }
}

impl HasContext for CompositeError {
    #[inline]
    fn context(&self) -> &Map {
        CompositeError::context(self)
    }
}

impl HasCause for CompositeError {
    #[inline]
    fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        CompositeError::cause(self)
    }
}

/// Views a value as a `'static` error trait object.
///
/// Implemented for every sized error type and for the common `dyn Error`
/// trait objects.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static);
}

impl<E: StdError + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

/// Capability lookup used by the free accessor functions.
///
/// Each hook returns the error's view of one facet, or `None` when the error
/// does not carry it. Every hook defaults to `None`, so an empty impl opts a
/// type into the accessors with all facets reported as absent.
pub trait Facets: AsDynError {
    fn as_code(&self) -> Option<&dyn HasCode> {
        None
    }

    fn as_status(&self) -> Option<&dyn HasStatus> {
        None
    }

    fn as_message(&self) -> Option<&dyn HasMessage> {
        None
    }

    fn as_details(&self) -> Option<&dyn HasDetails> {
        None
    }

    fn as_context(&self) -> Option<&dyn HasContext> {
        None
    }

    fn as_cause(&self) -> Option<&dyn HasCause> {
        None
    }
}

impl Facets for CompositeError {
    fn as_code(&self) -> Option<&dyn HasCode> {
        Some(self)
    }

    fn as_status(&self) -> Option<&dyn HasStatus> {
        Some(self)
    }

    fn as_message(&self) -> Option<&dyn HasMessage> {
        Some(self)
    }

    fn as_details(&self) -> Option<&dyn HasDetails> {
        Some(self)
    }

    fn as_context(&self) -> Option<&dyn HasContext> {
        Some(self)
    }

    fn as_cause(&self) -> Option<&dyn HasCause> {
        Some(self)
    }
}

impl Facets for ErrorCollector {}

impl Facets for ErrorConstant {}

impl Facets for std::io::Error {}

/// Recovers the facets of this crate's error types from behind a trait object.
fn crate_facets<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Facets> {
    if let Some(error) = err.downcast_ref::<CompositeError>() {
        return Some(error);
    }
    if let Some(collector) = err.downcast_ref::<ErrorCollector>() {
        return Some(collector);
    }
    err.downcast_ref::<ErrorConstant>().map(|constant| constant as &dyn Facets)
}

macro_rules! impl_facets_for_dyn {
    ($($object:ty),+ $(,)?) => {$(
        impl Facets for $object {
            fn as_code(&self) -> Option<&dyn HasCode> {
                crate_facets(self)?.as_code()
            }

            fn as_status(&self) -> Option<&dyn HasStatus> {
                crate_facets(self)?.as_status()
            }

            fn as_message(&self) -> Option<&dyn HasMessage> {
                crate_facets(self)?.as_message()
            }

            fn as_details(&self) -> Option<&dyn HasDetails> {
                crate_facets(self)?.as_details()
            }

            fn as_context(&self) -> Option<&dyn HasContext> {
                crate_facets(self)?.as_context()
            }

            fn as_cause(&self) -> Option<&dyn HasCause> {
                crate_facets(self)?.as_cause()
            }
        }
    )+};
}

impl_facets_for_dyn!(
    dyn StdError + 'static,
    dyn StdError + Send + 'static,
    dyn StdError + Send + Sync + 'static,
);

static EMPTY_CONTEXT: Map = Map::new();

/// Code of `err`, or 0.
pub fn code<E: Facets + ?Sized>(err: &E) -> u32 {
    match err.as_code() {
        Some(facet) => facet.code(),
        None => 0,
    }
}

/// Status of `err`, or 0.
pub fn status<E: Facets + ?Sized>(err: &E) -> u16 {
    match err.as_status() {
        Some(facet) => facet.status(),
        None => 0,
    }
}

/// Message of `err`, or an empty string.
pub fn message<E: Facets + ?Sized>(err: &E) -> &str {
    match err.as_message() {
        Some(facet) => facet.message(),
        None => "",
    }
}

/// Details of `err`, or an empty slice.
pub fn details<E: Facets + ?Sized>(err: &E) -> &[String] {
    match err.as_details() {
        Some(facet) => facet.details(),
        None => &[],
    }
}

/// Context of `err`, or an empty map.
pub fn context<E: Facets + ?Sized>(err: &E) -> &Map {
    match err.as_context() {
        Some(facet) => facet.context(),
        None => &EMPTY_CONTEXT,
    }
}

/// Cause of `err`.
///
/// Errors without a cause facet are their own cause; a [`CompositeError`]
/// without a cause yields `None`.
pub fn cause<E: Facets + ?Sized>(err: &E) -> Option<&(dyn StdError + 'static)> {
    match err.as_cause() {
        Some(facet) => facet.cause().map(|source| source as &(dyn StdError + 'static)),
        None => Some(err.as_dyn_error()),
    }
}
