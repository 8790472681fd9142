//! Walking and matching error source chains.
//!
//! # Examples
//!
//! ```
//! use error_strata::{chain, find, is, CompositeError, ErrorConstant};
//!
//! static TIMEOUT: ErrorConstant = ErrorConstant::from_static("timeout");
//!
//! let err = CompositeError::new("request failed").with_error(TIMEOUT.clone());
//!
//! assert_eq!(chain(&err).count(), 2);
//! assert!(is(&err, &TIMEOUT));
//! assert_eq!(find::<ErrorConstant>(&err).map(ErrorConstant::as_str), Some("timeout"));
//! ```

use crate::types::{ErrorCollector, ErrorConstant};
use core::error::Error as StdError;

/// Iterates over `err` followed by every error reachable through `source()`.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    core::iter::successors(Some(err), |&node| node.source())
}

/// Reports whether any error in `err`'s chain matches `target`.
///
/// A node matches when it is the very same value as `target`, when both are
/// [`ErrorConstant`]s with equal text, or when the node is an [`ErrorCollector`]
/// that matches `target` (see [`ErrorCollector::is`]).
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|node| matches(node, target))
}

/// Returns the first error of type `T` in `err`'s chain.
///
/// Collectors are searched child by child, so an error nested inside any of
/// them is found too.
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    for node in chain(err) {
        if let Some(found) = node.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(collector) = node.downcast_ref::<ErrorCollector>() {
            if let Some(found) = collector.find::<T>() {
                return Some(found);
            }
        }
    }
    None
}

fn matches(node: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    if core::ptr::addr_eq(node, target) {
        return true;
    }

    if let (Some(left), Some(right)) =
        (node.downcast_ref::<ErrorConstant>(), target.downcast_ref::<ErrorConstant>())
    {
        return left == right;
    }

    match node.downcast_ref::<ErrorCollector>() {
        Some(collector) => collector.is(target),
        None => false,
    }
}
