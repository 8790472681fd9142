//! Free functions and traits for inspecting errors.
//!
//! - [`chain`], [`is`] and [`find`] walk an error's source chain.
//! - [`code`], [`status`], [`message`], [`details`], [`context`] and [`cause`]
//!   read facets from any error that opts in through [`Facets`], including
//!   `&dyn Error` trait objects.
//! - [`ResultExt`] wraps the error side of a `Result` into a
//!   [`CompositeError`](crate::CompositeError).

pub mod chain;
pub mod facets;
pub mod result_ext;

pub use chain::{chain, find, is};
pub use facets::{
    cause, code, context, details, message, status, AsDynError, Facets, HasCause, HasCode, HasContext,
    HasDetails, HasMessage, HasStatus,
};
pub use result_ext::ResultExt;
