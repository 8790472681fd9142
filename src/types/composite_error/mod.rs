//! Structured error value with code, status, message, details, context, stack and cause.
//!
//! [`CompositeError`] is an immutable builder: every `with_*` method returns a new
//! error and leaves the receiver untouched, so a base error can be shared and
//! specialised freely. The single in-place mutator is [`CompositeError::set_cause`],
//! for errors that are built up imperatively before being returned.
//!
//! # Examples
//!
//! ```
//! use error_strata::CompositeError;
//! use std::io;
//!
//! let base = CompositeError::new("failed").with_code(404);
//! let err = base.with_error(io::Error::other("oh no"));
//!
//! assert_eq!(err.to_string(), "code: 404 message: failed cause: oh no");
//! assert!(base.cause().is_none());
//! ```

use crate::traits::chain;
use crate::types::{DetailList, Map, SharedError, StackTrace};
use core::error::Error as StdError;
use std::sync::Arc;

pub(crate) mod encode;
mod render;
mod traits;

pub use encode::{ErrorData, WithStack, KEY_CAUSE, KEY_CODE, KEY_DETAILS, KEY_MESSAGE, KEY_STACK, RESERVED_KEYS};
pub use render::Field;

/// Symbol prefix of the functions that capture a stack on behalf of their caller.
pub(crate) const CONSTRUCTOR_FRAMES: &str = concat!(module_path!(), "::CompositeError");

/// Status assigned to new errors: an unclassified server-side failure.
pub const DEFAULT_STATUS: u16 = 500;

/// Error carrying a code, status, message, details, context, stack trace and cause.
#[must_use]
#[derive(Clone)]
pub struct CompositeError {
    pub(crate) code: u32,
    pub(crate) status: u16,
    pub(crate) message: String,
    pub(crate) details: DetailList,
    pub(crate) context: Map,
    pub(crate) stack: StackTrace,
    pub(crate) cause: Option<SharedError>,
}

impl CompositeError {
    /// Creates an error with the given message and captures the caller's stack.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::assemble(message.into(), None, StackTrace::capture())
    }

    /// Creates an error with a message and initial details.
    #[inline(never)]
    pub fn new_with_details<I, S>(message: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut error = Self::assemble(message.into(), None, StackTrace::capture());
        error.details.extend(details);
        error
    }

    /// Wraps `err` as the cause of a new error.
    ///
    /// Wrapping is idempotent: when `err` is a `CompositeError` it is returned
    /// unchanged, and when one appears in its source chain that error is returned
    /// instead of adding another layer.
    #[inline(never)]
    pub fn wrap<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap_boxed(Box::new(err))
    }

    /// Like [`wrap`](Self::wrap), for errors that are already boxed.
    #[inline(never)]
    pub fn wrap_boxed(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        match Self::unwrap_existing(err) {
            Ok(existing) => existing,
            Err(cause) => Self::assemble(String::new(), Some(cause), StackTrace::capture()),
        }
    }

    /// Like [`wrap`](Self::wrap), for shared errors.
    ///
    /// A `CompositeError` found in the chain is cloned out of the shared handle.
    #[inline(never)]
    pub fn wrap_shared(err: SharedError) -> Self {
        if let Some(existing) = chain::find::<CompositeError>(&*err) {
            return existing.clone();
        }
        Self::assemble(String::new(), Some(err), StackTrace::capture())
    }

    /// Like [`wrap`](Self::wrap), using `stack` instead of capturing one when it is not empty.
    #[inline(never)]
    pub fn wrap_with_stack<E>(err: E, stack: StackTrace) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match Self::unwrap_existing(Box::new(err)) {
            Ok(existing) => existing,
            Err(cause) if stack.is_empty() => {
                Self::assemble(String::new(), Some(cause), StackTrace::capture())
            },
            Err(cause) => Self::assemble(String::new(), Some(cause), stack),
        }
    }

    fn unwrap_existing(err: Box<dyn StdError + Send + Sync + 'static>) -> Result<Self, SharedError> {
        let err = match err.downcast::<CompositeError>() {
            Ok(existing) => return Ok(*existing),
            Err(other) => other,
        };

        if let Some(existing) = chain::find::<CompositeError>(&*err) {
            return Ok(existing.clone());
        }
        Err(Arc::from(err))
    }

    fn assemble(message: String, cause: Option<SharedError>, stack: StackTrace) -> Self {
        Self {
            code: 0,
            status: DEFAULT_STATUS,
            message,
            details: DetailList::new(),
            context: Map::new(),
            stack,
            cause,
        }
    }

    /// Returns a copy with the given code.
    pub fn with_code(&self, code: u32) -> Self {
        let mut next = self.clone();
        next.code = code;
        next
    }

    /// Returns a copy with the given status.
    pub fn with_status(&self, status: u16) -> Self {
        let mut next = self.clone();
        next.status = status;
        next
    }

    /// Returns a copy with the given message.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.message = message.into();
        next
    }

    /// Returns a copy caused by `err`, with the stack re-captured at the call site.
    #[inline(never)]
    pub fn with_error<E>(&self, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let mut next = self.clone();
        next.cause = Some(Arc::new(err));
        next.stack = StackTrace::capture();
        next
    }

    /// Like [`with_error`](Self::with_error), for shared errors.
    #[inline(never)]
    pub fn with_shared_error(&self, err: SharedError) -> Self {
        let mut next = self.clone();
        next.cause = Some(err);
        next.stack = StackTrace::capture();
        next
    }

    /// Returns a copy with `details` appended to the existing ones.
    pub fn with_details<I, S>(&self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.details.extend(details);
        next
    }

    /// Returns a copy with one detail appended.
    pub fn with_detail(&self, detail: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.details.push(detail);
        next
    }

    /// Returns a copy whose context is replaced by `context`.
    ///
    /// Keys reserved for structured encoding (see [`RESERVED_KEYS`]) are dropped.
    pub fn with_context(&self, context: Map) -> Self {
        let mut next = self.clone();
        next.context = encode::without_reserved(context);
        next
    }

    /// Returns a copy with one context entry added or replaced.
    pub fn with_context_value(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        let mut next = self.clone();
        next.context.extend(encode::without_reserved(Map::from([(key.into(), value.into())])));
        next
    }

    /// Replaces the cause in place and re-captures the stack.
    ///
    /// Unlike the `with_*` builders this mutates the receiver; it is meant for
    /// errors still being assembled by their owner.
    #[inline(never)]
    pub fn set_cause<E>(&mut self, err: E)
    where
        E: StdError + Send + Sync + 'static,
    {
        self.stack = StackTrace::capture();
        self.cause = Some(Arc::new(err));
    }

    /// Like [`set_cause`](Self::set_cause), for shared errors.
    #[inline(never)]
    pub fn set_cause_shared(&mut self, err: SharedError) {
        self.stack = StackTrace::capture();
        self.cause = Some(err);
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn details(&self) -> &DetailList {
        &self.details
    }

    #[inline]
    pub fn context(&self) -> &Map {
        &self.context
    }

    /// Stack captured when the error was created or its cause last replaced.
    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }

    /// Returns the underlying cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the shared handle of the cause, if any.
    #[inline]
    pub fn shared_cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Single step of the cause chain; same as [`cause`](Self::cause).
    #[inline]
    pub fn unwrap(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause()
    }
}
