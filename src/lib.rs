pub use crate::errors::{JsonError, PartSpecError, SelectorError};
pub use crate::selector::{combine, Combinator, PartKind, SelectorBuilder, SELECTOR};

pub mod cli;
pub mod errors;
pub mod json;
pub mod selector;
pub mod shapes;
