//! cssel error handling.
//!
//! Every failure the crate can produce is a `thiserror` enum with a
//! hand-written `miette::Diagnostic` impl, so the CLI can hand any of them to
//! `miette::Report` and get a code, a help line and (for part specs) a
//! labelled source span.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::selector::PartKind;

// ============================================================================
// SELECTOR ERRORS - Raised by the builder on an invalid append
// ============================================================================

/// The two ways appending a part to a selector chain can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// `element`, `id` or `pseudo-element` appended a second time in one chain.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateSingularPart { kind: PartKind },

    /// A part appended after a kind that must come later.
    /// `after` is `None` when the chain is a combined selector.
    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element")]
    OutOfOrderPart {
        kind: PartKind,
        after: Option<PartKind>,
    },
}

impl SelectorError {
    /// The kind of part whose append was rejected.
    pub fn kind(&self) -> PartKind {
        match self {
            Self::DuplicateSingularPart { kind } | Self::OutOfOrderPart { kind, .. } => *kind,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::DuplicateSingularPart { .. } => "duplicate_part",
            Self::OutOfOrderPart { .. } => "out_of_order",
        }
    }

    fn help_text(&self) -> String {
        match self {
            Self::DuplicateSingularPart { kind } => {
                format!("{kind} may appear only once per selector; start a new chain instead")
            }
            Self::OutOfOrderPart {
                kind,
                after: Some(after),
            } => format!("{kind} cannot follow {after}"),
            Self::OutOfOrderPart { kind, after: None } => {
                format!("a combined selector only supports stringify, not a further {kind}")
            }
        }
    }
}

impl Diagnostic for SelectorError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("cssel::selector::{}", self.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.help_text()))
    }
}

// ============================================================================
// PART SPEC ERRORS - Raised when a `kind:value` argument cannot be parsed
// ============================================================================

/// A `kind:value` command-line part that could not be understood.
#[derive(Debug, Error)]
pub enum PartSpecError {
    #[error("selector part '{spec}' has no ':' between kind and value")]
    MissingSeparator {
        spec: String,
        input: Arc<NamedSource<String>>,
    },
    #[error("unknown selector part kind '{kind}'")]
    UnknownKind {
        kind: String,
        input: Arc<NamedSource<String>>,
        span: SourceSpan,
    },
}

impl PartSpecError {
    fn input(&self) -> &Arc<NamedSource<String>> {
        match self {
            Self::MissingSeparator { input, .. } | Self::UnknownKind { input, .. } => input,
        }
    }
}

impl Diagnostic for PartSpecError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let suffix = match self {
            Self::MissingSeparator { .. } => "missing_separator",
            Self::UnknownKind { .. } => "unknown_kind",
        };
        Some(Box::new(format!("cssel::part_spec::{suffix}")))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "write parts as kind:value, where kind is one of element, id, class, attribute, pseudo-class, pseudo-element",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&**self.input())
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match self {
            Self::MissingSeparator { spec, .. } => {
                LabeledSpan::new(Some("expected kind:value".into()), 0, spec.len().max(1))
            }
            Self::UnknownKind { span, .. } => {
                LabeledSpan::new_with_span(Some("unknown kind".into()), *span)
            }
        };
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// JSON ERRORS - Raised by the JSON helpers
// ============================================================================

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object for the {role}, found {found}")]
    NotAnObject {
        role: &'static str,
        found: &'static str,
    },
}

impl Diagnostic for JsonError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let suffix = match self {
            Self::Malformed(_) => "malformed",
            Self::NotAnObject { .. } => "not_an_object",
        };
        Some(Box::new(format!("cssel::json::{suffix}")))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::NotAnObject { .. } => Some(Box::new(
                "only objects can be merged onto a base value, e.g. {\"width\": 2}",
            )),
            Self::Malformed(_) => None,
        }
    }
}
