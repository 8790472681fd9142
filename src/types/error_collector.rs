//! Ordered collection of independent errors that is itself an error.
//!
//! # Examples
//!
//! ```
//! use error_strata::{ErrorCollector, ErrorConstant};
//!
//! let mut errors = ErrorCollector::new();
//! errors.wrap(ErrorConstant::new("oh no"));
//! errors.wrap(ErrorConstant::new("oh yes"));
//!
//! assert_eq!(format!("{}", errors), "[oh no, oh yes]");
//! assert_eq!(format!("{:#}", errors), " --- oh no\n --- oh yes");
//! ```

use crate::traits::chain;
use crate::types::composite_error::encode::ErrorValue;
use crate::types::error_formatter::{bracketed, bulleted, Render, Style};
use crate::types::{EncodeError, ErrorVec, SharedError};
use core::error::Error as StdError;
use core::fmt;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Ordered, heterogeneous list of errors.
///
/// Errors are kept in insertion order without deduplication; that order drives
/// both rendering and matching.
#[derive(Clone, Default)]
pub struct ErrorCollector {
    errors: ErrorVec<SharedError>,
}

impl ErrorCollector {
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Appends an error.
    pub fn wrap<E>(&mut self, err: E)
    where
        E: StdError + Send + Sync + 'static,
    {
        self.errors.push(Arc::new(err));
    }

    /// Appends an already shared error.
    pub fn wrap_shared(&mut self, err: SharedError) {
        self.errors.push(err);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SharedError> {
        self.errors.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&SharedError> {
        self.errors.get(index)
    }

    /// Returns the sole error when exactly one has been collected.
    pub fn unwrap(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self.errors.as_slice() {
            [only] => Some(&**only),
            _ => None,
        }
    }

    /// Reports whether this collector matches `target` position by position.
    ///
    /// A collector target must have the same length and every child must match
    /// the target's child at the same index through [`chain::is`]. Any other
    /// target is treated as a collector of one.
    pub fn is(&self, target: &(dyn StdError + 'static)) -> bool {
        match target.downcast_ref::<ErrorCollector>() {
            Some(targets) => {
                self.len() == targets.len()
                    && self.iter().zip(targets.iter()).all(|(child, target)| chain::is(&**child, &**target))
            },
            None => match self.errors.as_slice() {
                [only] => chain::is(&**only, target),
                _ => false,
            },
        }
    }

    /// Returns the first error of type `T` found in any child's chain, in order.
    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.iter().find_map(|child| chain::find::<T>(&**child))
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes as an `<Errors>` document with one `<Error>` element per child.
    #[cfg(feature = "xml")]
    pub fn to_xml(&self) -> Result<String, EncodeError> {
        let items = match serde_json::to_value(self)? {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        };
        crate::types::xml::to_list_document("Errors", "Error", &items)
    }
}

impl Render for ErrorCollector {
    fn render(&self, style: Style) -> String {
        match style {
            Style::Compact => bracketed(self.iter()),
            Style::Verbose => bulleted(self.iter()),
            Style::Raw => format!("{:?}", self),
        }
    }
}

impl fmt::Display for ErrorCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::from_alternate(f.alternate())))
    }
}

/// Lists the children's messages, e.g. `["oh no", "oh yes"]`.
impl fmt::Debug for ErrorCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|child| child.to_string())).finish()
    }
}

impl StdError for ErrorCollector {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.unwrap() {
            Some(only) => Some(only),
            None => None,
        }
    }
}

impl Serialize for ErrorCollector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|child| ErrorValue(&**child)))
    }
}

impl FromIterator<SharedError> for ErrorCollector {
    fn from_iter<I: IntoIterator<Item = SharedError>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

impl Extend<SharedError> for ErrorCollector {
    fn extend<I: IntoIterator<Item = SharedError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl From<Vec<SharedError>> for ErrorCollector {
    fn from(errors: Vec<SharedError>) -> Self {
        Self { errors: ErrorVec::from_vec(errors) }
    }
}

impl IntoIterator for ErrorCollector {
    type Item = SharedError;
    type IntoIter = smallvec::IntoIter<[SharedError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorCollector {
    type Item = &'a SharedError;
    type IntoIter = core::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
