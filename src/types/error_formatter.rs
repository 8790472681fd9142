//! Shared rendering primitives.
//!
//! Every renderable value in this crate (stack traces, detail lists, collectors and
//! composite errors) follows the same contract: a compact single-line form, a verbose
//! bulleted or multi-line form, and a raw debug form. The helpers here implement the
//! pieces those renderings have in common.

use core::fmt::Display;

/// Selects the output shape of a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Single line, e.g. `[a, b]` or `code: 1 message: boom`.
    #[default]
    Compact,
    /// Multi-line, bulleted lists and aligned labels.
    Verbose,
    /// Language-native debug representation. Not stability-guaranteed.
    Raw,
}

impl Style {
    /// Picks `Verbose` for the alternate flag (`{:#}`) and `Compact` otherwise.
    #[inline]
    pub fn from_alternate(alternate: bool) -> Self {
        if alternate {
            Style::Verbose
        } else {
            Style::Compact
        }
    }
}

/// Types that render themselves in every [`Style`].
pub trait Render {
    fn render(&self, style: Style) -> String;
}

/// Prefix used for each entry of a verbose list.
pub const BULLET: &str = " --- ";

/// Writes `[a, b, c]`.
pub(crate) fn bracketed<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::from("[");
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out.push(']');
    out
}

/// Writes one ` --- item` line per entry with no trailing newline.
pub(crate) fn bulleted<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(BULLET);
        out.push_str(&item.to_string());
    }
    out
}

enum Row {
    Cell { label: &'static str, value: String },
    Text(String),
}

/// Label/value sheet with right-aligned labels.
///
/// Consecutive labelled rows form a block; every label in a block is padded on
/// the left to one column wider than the block's longest label. A free text row,
/// or a value spanning several lines, closes the current block.
#[derive(Default)]
pub(crate) struct Sheet {
    rows: Vec<Row>,
}

impl Sheet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cell(&mut self, label: &'static str, value: impl Into<String>) {
        self.rows.push(Row::Cell { label, value: value.into() });
    }

    pub(crate) fn text(&mut self, text: impl Into<String>) {
        self.rows.push(Row::Text(text.into()));
    }

    pub(crate) fn finish(self) -> String {
        let widths = self.block_widths();
        let mut lines: Vec<String> = Vec::with_capacity(self.rows.len());

        for (row, width) in self.rows.iter().zip(widths) {
            match row {
                Row::Cell { label, value } => {
                    lines.push(format!("{:>width$} {}", label, value, width = width));
                },
                Row::Text(text) => lines.push(text.clone()),
            }
        }

        lines.join("\n")
    }

    fn block_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.rows.len()];
        let mut start = 0;

        while start < self.rows.len() {
            if let Row::Text(_) = self.rows[start] {
                start += 1;
                continue;
            }

            let mut end = start;
            let mut widest = 0;
            while let Some(Row::Cell { label, value }) = self.rows.get(end) {
                widest = widest.max(label.chars().count());
                end += 1;
                if value.contains('\n') {
                    break;
                }
            }

            for width in &mut widths[start..end] {
                *width = widest + 1;
            }
            start = end;
        }

        widths
    }
}
