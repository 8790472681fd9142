//! Call stacks captured when an error is created.
//!
//! A [`StackTrace`] is an ordered list of [`StackFrame`]s, innermost first. It is
//! captured once through the current [`SymbolResolver`] and afterwards can only
//! shrink, through [`StackTrace::skip`].
//!
//! # Examples
//!
//! ```
//! use error_strata::{StackFrame, StackTrace};
//!
//! let stack = StackTrace::from(vec![
//!     StackFrame::new("/src/app/runner.rs", 12, "app::runner::Runner::run"),
//!     StackFrame::new("/src/app/main.rs", 3, "app::main"),
//! ]);
//!
//! assert_eq!(format!("{}", stack), "[runner.rs:12, main.rs:3]");
//! assert_eq!(
//!     format!("{:#}", stack),
//!     " --- /src/app/runner.rs:12 (runner::Runner::run)\n --- /src/app/main.rs:3 (main)"
//! );
//! ```

use crate::types::error_formatter::{bracketed, bulleted, Render, Style};
use core::fmt;
use serde::{Serialize, Serializer};

pub mod resolver;

pub use resolver::{install_resolver, with_resolver, ResolverInstalled, StdResolver, SymbolResolver};

/// Maximum number of frames kept by a capture.
pub const MAX_DEPTH: usize = 32;

pub(crate) const UNKNOWN: &str = "unknown";

/// One resolved call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    file: String,
    line: u32,
    function: String,
    pc: usize,
}

impl StackFrame {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self { file: file.into(), line, function: function.into(), pc: 0 }
    }

    /// Frame reported for addresses the resolver could not symbolize.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, 0, UNKNOWN)
    }

    /// Parses the encoded form `path:line (function)`, as written by `Serialize`.
    ///
    /// Only the shortened function name survives encoding.
    pub fn parse_text(text: &str) -> Self {
        if text == UNKNOWN {
            return Self::unknown();
        }

        let (location, function) = match text.rsplit_once(" (") {
            Some((location, rest)) => (location, rest.strip_suffix(')').unwrap_or(rest)),
            None => (text, UNKNOWN),
        };

        match location.rsplit_once(':').map(|(file, line)| (file, line.parse::<u32>())) {
            Some((file, Ok(line))) => Self::new(file, line, function),
            _ => Self::new(location, 0, function),
        }
    }

    #[must_use]
    pub fn with_pc(mut self, pc: usize) -> Self {
        self.pc = pc;
        self
    }

    #[must_use]
    pub(crate) fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.function == UNKNOWN
    }

    /// Full source path as reported by the resolver.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Base name of the source path.
    pub fn short_file(&self) -> &str {
        self.file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(&self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fully qualified function name.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Function name without its package qualifier, e.g. `Runner.RunSync` for
    /// `github.com/acme/app.(*Runner).RunSync`.
    pub fn short_function(&self) -> String {
        shorten_function(&self.function)
    }

    /// Opaque, resolver-specific program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }
}

/// `{}` prints `file.rs:10`, `{:#}` prints `/full/path/file.rs:10 (function)`.
impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}:{} ({})", self.file, self.line, self.short_function())
        } else {
            write!(f, "{}:{}", self.short_file(), self.line)
        }
    }
}

impl Serialize for StackFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_unknown() {
            return serializer.serialize_str(UNKNOWN);
        }
        serializer.collect_str(&format_args!("{:#}", self))
    }
}

/// Frames from innermost (point of capture) to outermost.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Captures the caller's stack, at most [`MAX_DEPTH`] frames deep.
    ///
    /// Frames belonging to the capture machinery itself (std's backtrace code,
    /// this module and the [`CompositeError`](crate::CompositeError) constructors)
    /// are dropped, so index 0 is the code that asked for the capture.
    #[inline(never)]
    pub fn capture() -> Self {
        Self::capture_at(0)
    }

    /// Captures the caller's stack and drops `skip` more frames from the front.
    #[inline(never)]
    pub fn capture_at(skip: usize) -> Self {
        let mut trace = Self::from_resolved(resolver::resolve_current());
        trace.skip(skip);

        #[cfg(feature = "tracing")]
        tracing::trace!(frames = trace.len(), "captured stack trace");

        trace
    }

    fn from_resolved(frames: Vec<StackFrame>) -> Self {
        let frames =
            frames.into_iter().skip_while(|frame| is_internal(&frame.function)).take(MAX_DEPTH).collect();
        Self { frames }
    }

    /// Removes the first `n` frames when `0 < n < len`; otherwise does nothing.
    pub fn skip(&mut self, n: usize) {
        if n > 0 && n < self.frames.len() {
            self.frames.drain(..n);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, StackFrame> {
        self.frames.iter()
    }

    #[inline]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }
}

impl Render for StackTrace {
    fn render(&self, style: Style) -> String {
        match style {
            Style::Compact => bracketed(self.iter()),
            Style::Verbose => bulleted(self.iter().map(|frame| format!("{:#}", frame))),
            Style::Raw => format!("{:?}", self.frames),
        }
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::from_alternate(f.alternate())))
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<StackFrame>> for StackTrace {
    fn from(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }
}

impl FromIterator<StackFrame> for StackTrace {
    fn from_iter<I: IntoIterator<Item = StackFrame>>(iter: I) -> Self {
        Self { frames: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a StackFrame;
    type IntoIter = core::slice::Iter<'a, StackFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

fn is_internal(function: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "std::backtrace",
        "std::sys::backtrace",
        module_path!(),
        crate::types::composite_error::CONSTRUCTOR_FRAMES,
    ];
    // Blanket extension impls show up as `<core::result::Result<T, E> as crate::...>::method`.
    const ADAPTERS: &[&str] = &[
        concat!(env!("CARGO_CRATE_NAME"), "::traits::result_ext"),
        concat!(env!("CARGO_CRATE_NAME"), "::tracing_ext"),
    ];

    let trimmed = function.trim_start_matches('<');
    PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
        || ADAPTERS.iter().any(|adapter| function.contains(adapter))
}

pub(crate) fn shorten_function(name: &str) -> String {
    let name = strip_symbol_hash(name);
    let name = &name[name.rfind('/').map_or(0, |index| index + 1)..];

    let rewritten = qualified_self(name);
    let name = rewritten.as_deref().unwrap_or(name);

    let name = match name.find("::") {
        Some(index) => &name[index + 2..],
        None => match name.find('.') {
            Some(index) => &name[index + 1..],
            None => name,
        },
    };

    name.chars().filter(|c| !matches!(c, '(' | ')' | '*' | '&')).collect()
}

fn strip_symbol_hash(name: &str) -> &str {
    if let Some(index) = name.rfind("::h") {
        let hash = &name[index + 3..];
        if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return &name[..index];
        }
    }
    name
}

/// `<T as Trait>::method` becomes `T::method`.
fn qualified_self(name: &str) -> Option<String> {
    let inner = name.strip_prefix('<')?;
    let mut depth = 0usize;
    let mut self_end = None;

    for (index, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' if depth == 0 => {
                let self_type = &inner[..self_end.unwrap_or(index)];
                return Some(format!("{}{}", self_type, &inner[index + 1..]));
            },
            '>' => depth -= 1,
            ' ' if depth == 0 && self_end.is_none() && inner[index..].starts_with(" as ") => {
                self_end = Some(index);
            },
            _ => {},
        }
    }

    None
}
