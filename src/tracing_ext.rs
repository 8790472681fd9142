//! Tracing integration.
//!
//! Emits errors as structured `tracing` events and records the active span's
//! name in an error's context.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-strata = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::{code, message, status};
use crate::types::CompositeError;
use core::error::Error as StdError;
use tracing::Span;

/// Context key holding the name of the span an error was instrumented in.
pub const SPAN_KEY: &str = "span";

/// Emits an `ERROR` event carrying the error's code, status and message.
///
/// Errors that are not [`CompositeError`]s are recorded with code and status 0.
pub fn record(err: &(dyn StdError + 'static)) {
    tracing::error!(
        code = code(err),
        status = status(err),
        error_message = %message(err),
        error = %err,
        "error recorded"
    );
}

fn span_name(span: &Span) -> &'static str {
    match span.metadata() {
        Some(metadata) => metadata.name(),
        None => "unknown",
    }
}

/// Extension trait for `Result` types to record the span an error occurred in.
pub trait ResultSpanExt<T, E> {
    /// Wraps the error and records the current span's name under [`SPAN_KEY`].
    fn with_current_span(self) -> Result<T, CompositeError>;

    /// Wraps the error and records `span`'s name under [`SPAN_KEY`].
    fn with_span(self, span: &Span) -> Result<T, CompositeError>;
}

impl<T, E> ResultSpanExt<T, E> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline(never)]
    fn with_current_span(self) -> Result<T, CompositeError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(instrument_error(err)),
        }
    }

    #[inline(never)]
    fn with_span(self, span: &Span) -> Result<T, CompositeError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CompositeError::wrap(err).with_context_value(SPAN_KEY, span_name(span))),
        }
    }
}

/// Wraps `error` and records the current span's name under [`SPAN_KEY`].
#[inline(never)]
pub fn instrument_error<E>(error: E) -> CompositeError
where
    E: StdError + Send + Sync + 'static,
{
    let span = Span::current();
    CompositeError::wrap(error).with_context_value(SPAN_KEY, span_name(&span))
}
