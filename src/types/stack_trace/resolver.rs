//! Symbol resolution for stack capture.
//!
//! A [`SymbolResolver`] turns the calling thread's stack into resolved
//! [`StackFrame`]s. The crate ships [`StdResolver`], backed by
//! [`std::backtrace::Backtrace`]; tests and embedders can swap it out either
//! process-wide with [`install_resolver`] or for a scope with [`with_resolver`].
//!
//! # Examples
//!
//! ```
//! use error_strata::{with_resolver, StackFrame, StackTrace};
//! use std::sync::Arc;
//!
//! let resolver = Arc::new(|| vec![StackFrame::new("src/app.rs", 7, "app::run")]);
//! let stack = with_resolver(resolver, StackTrace::capture);
//! assert_eq!(stack.to_string(), "[app.rs:7]");
//! ```

use super::{StackFrame, UNKNOWN};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

/// Host facility resolving the current call stack into frames.
pub trait SymbolResolver: Send + Sync {
    /// Returns the calling thread's frames, innermost first.
    ///
    /// Frames that cannot be resolved must be reported as [`StackFrame::unknown`]
    /// rather than failing the whole call.
    fn resolve(&self) -> Vec<StackFrame>;
}

impl<F> SymbolResolver for F
where
    F: Fn() -> Vec<StackFrame> + Send + Sync,
{
    fn resolve(&self) -> Vec<StackFrame> {
        self()
    }
}

/// Resolver backed by `std::backtrace::Backtrace::force_capture`.
///
/// Std does not expose raw return addresses, so `pc` holds the frame ordinal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdResolver;

impl SymbolResolver for StdResolver {
    fn resolve(&self) -> Vec<StackFrame> {
        let backtrace = Backtrace::force_capture();
        match backtrace.status() {
            BacktraceStatus::Captured => parse_backtrace(&backtrace.to_string()),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!("backtrace capture is not supported on this platform");
                Vec::new()
            },
        }
    }
}

/// Returned by [`install_resolver`] when a global resolver is already set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a global symbol resolver is already installed")]
pub struct ResolverInstalled;

static GLOBAL_RESOLVER: OnceLock<Arc<dyn SymbolResolver>> = OnceLock::new();

thread_local! {
    static SCOPED_RESOLVER: RefCell<Option<Arc<dyn SymbolResolver>>> = const { RefCell::new(None) };
}

/// Installs the process-wide resolver. Only the first call succeeds.
pub fn install_resolver(resolver: Arc<dyn SymbolResolver>) -> Result<(), ResolverInstalled> {
    GLOBAL_RESOLVER.set(resolver).map_err(|_| ResolverInstalled)
}

/// Runs `f` with `resolver` used for every capture made on this thread.
///
/// The previous scoped resolver is restored afterwards, even if `f` panics.
pub fn with_resolver<R>(resolver: Arc<dyn SymbolResolver>, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Arc<dyn SymbolResolver>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            SCOPED_RESOLVER.with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = SCOPED_RESOLVER.with(|slot| slot.borrow_mut().replace(resolver));
    let _restore = Restore(previous);
    f()
}

/// Resolves the current stack with the scoped, global or default resolver, in that order.
pub(crate) fn resolve_current() -> Vec<StackFrame> {
    let scoped = SCOPED_RESOLVER.with(|slot| slot.borrow().clone());
    match scoped {
        Some(resolver) => resolver.resolve(),
        None => match GLOBAL_RESOLVER.get() {
            Some(resolver) => resolver.resolve(),
            None => StdResolver.resolve(),
        },
    }
}

/// Parses the `Display` output of a captured backtrace.
///
/// Each symbol line (`  3: crate::module::function`) opens a frame, including
/// the unnumbered lines std prints for inlined symbols; an `at path:line:col`
/// line fills in the location of the frame above it.
pub(crate) fn parse_backtrace(text: &str) -> Vec<StackFrame> {
    let mut frames: Vec<StackFrame> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                let (file, number) = split_location(location);
                frame.file = file;
                frame.line = number;
            }
            continue;
        }

        let symbol = match line.split_once(": ") {
            Some((index, symbol)) if index.chars().all(|c| c.is_ascii_digit()) => symbol,
            _ => line,
        };
        let function = if symbol == "<unknown>" { UNKNOWN } else { symbol };

        let pc = frames.len();
        frames.push(StackFrame::unknown().with_function(function).with_pc(pc));
    }

    frames
}

fn split_location(location: &str) -> (String, u32) {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next();
    let middle = parts.next();
    let rest = parts.next();

    // path:line:column
    if let (Some(file), Some(Ok(line)), Some(_)) = (rest, middle.map(str::parse::<u32>), last) {
        return (file.to_string(), line);
    }

    // path:line
    if let Some((file, line)) = location.rsplit_once(':') {
        if let Ok(line) = line.parse::<u32>() {
            return (file.to_string(), line);
        }
    }

    (location.to_string(), 0)
}
