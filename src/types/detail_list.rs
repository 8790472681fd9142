//! Ordered free-form detail strings attached to a [`CompositeError`](crate::CompositeError).

use crate::types::error_formatter::{bracketed, bulleted, Render, Style};
use crate::types::ErrorVec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Ordered list of detail strings. Insertion order is kept and duplicates are allowed.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailList {
    items: ErrorVec<String>,
}

impl DetailList {
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    #[inline]
    pub fn push(&mut self, detail: impl Into<String>) {
        self.items.push(detail.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl Render for DetailList {
    fn render(&self, style: Style) -> String {
        match style {
            Style::Compact => bracketed(self.iter()),
            Style::Verbose => bulleted(self.iter()),
            Style::Raw => format!("{:?}", self.as_slice()),
        }
    }
}

impl fmt::Display for DetailList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::from_alternate(f.alternate())))
    }
}

impl fmt::Debug for DetailList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for DetailList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { items: iter.into_iter().map(Into::into).collect() }
    }
}

impl<S: Into<String>> Extend<S> for DetailList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a DetailList {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
