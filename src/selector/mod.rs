//! Building CSS selector strings part by part.
//!
//! A chain starts from [`SELECTOR`] (or [`SelectorBuilder::new`]), appends
//! parts in element, id, class, attribute, pseudo-class, pseudo-element order,
//! and ends with [`SelectorBuilder::stringify`]. Two finished chains can be
//! joined with [`combine`].

mod builder;
mod combinator;
mod part;

pub use builder::{combine, SelectorBuilder, SELECTOR};
pub use combinator::Combinator;
pub use part::{PartKind, UnknownPartKind};
