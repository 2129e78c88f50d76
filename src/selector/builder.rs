//! # Selector Builder
//!
//! ## Purpose
//! Accumulates a compound CSS selector one part at a time, rejecting parts that
//! would break the element, id, class, attribute, pseudo-class, pseudo-element
//! order or repeat a singular part.
//!
//! ## Invariants
//! - Never mutates `self`: every append returns a new builder, so a partially
//!   built selector can be reused as a prefix for several continuations.
//! - The part history is an `im::Vector`; branches share structure and never
//!   observe each other's appends.
//! - A combined builder is terminal: it only supports `stringify`.

use std::fmt;

use im::Vector;
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::errors::SelectorError;
use crate::selector::PartKind;

/// The shared, empty entry point. Every chain started from it is independent.
///
/// ```rust
/// use cssel::selector::SELECTOR;
/// let nav = SELECTOR.element("nav").unwrap().class("main").unwrap();
/// assert_eq!(nav.stringify(), "nav.main");
/// assert_eq!(SELECTOR.id("main").unwrap().stringify(), "#main");
/// ```
pub static SELECTOR: Lazy<SelectorBuilder> = Lazy::new(SelectorBuilder::new);

// ============================================================================
// CHAIN STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Chain {
    /// Still accepting parts; holds every kind accepted so far, in call order.
    Open(Vector<PartKind>),
    /// Result of `combine`; no further parts.
    Combined,
}

impl Default for Chain {
    fn default() -> Self {
        Chain::Open(Vector::new())
    }
}

// ============================================================================
// SELECTOR BUILDER
// ============================================================================

/// An immutable, validating selector builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorBuilder {
    text: String,
    chain: Chain,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Element, value)
    }

    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Id, value)
    }

    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Class, value)
    }

    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Attribute, value)
    }

    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoClass, value)
    }

    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoElement, value)
    }

    /// Appends a part of any kind. `value` is spliced in verbatim.
    pub fn append(&self, kind: PartKind, value: &str) -> Result<Self, SelectorError> {
        let parts = self.check(kind).map_err(|err| {
            debug!(%kind, value, code = err.code_suffix(), "rejected selector part");
            err
        })?;

        let mut parts = parts.clone();
        parts.push_back(kind);
        let mut text = String::with_capacity(self.text.len() + value.len() + 3);
        text.push_str(&self.text);
        text.push_str(&kind.render(value));

        trace!(%kind, value, selector = %text, "appended selector part");
        Ok(Self {
            text,
            chain: Chain::Open(parts),
        })
    }

    /// Joins two built selectors: `left + " " + combinator + " " + right`.
    ///
    /// The combinator is not validated. A descendant combinator (`" "`)
    /// therefore yields three spaces between the operands.
    pub fn combine(
        left: &SelectorBuilder,
        combinator: impl AsRef<str>,
        right: &SelectorBuilder,
    ) -> SelectorBuilder {
        let combinator = combinator.as_ref();
        let text = format!("{} {} {}", left.text, combinator, right.text);
        debug!(combinator, selector = %text, "combined selectors");
        SelectorBuilder {
            text,
            chain: Chain::Combined,
        }
    }

    /// Returns the selector text built so far. Repeatable, side-effect free.
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Part kinds accepted in this chain, in call order. Empty once combined.
    pub fn parts(&self) -> Vec<PartKind> {
        match &self.chain {
            Chain::Open(parts) => parts.iter().copied().collect(),
            Chain::Combined => Vec::new(),
        }
    }

    pub fn occurrences(&self, kind: PartKind) -> usize {
        match &self.chain {
            Chain::Open(parts) => parts.iter().filter(|k| **k == kind).count(),
            Chain::Combined => 0,
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self.chain, Chain::Combined)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && !self.is_combined()
    }

    /// Cardinality before ordering; a combined chain rejects everything.
    fn check(&self, kind: PartKind) -> Result<&Vector<PartKind>, SelectorError> {
        let Chain::Open(parts) = &self.chain else {
            return Err(SelectorError::OutOfOrderPart { kind, after: None });
        };
        if kind.is_singular() && self.occurrences(kind) > 0 {
            return Err(SelectorError::DuplicateSingularPart { kind });
        }
        // Parts are accepted in non-decreasing kind order, so the last one is the highest.
        match parts.last() {
            Some(&last) if last > kind => Err(SelectorError::OutOfOrderPart {
                kind,
                after: Some(last),
            }),
            _ => Ok(parts),
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Shorthand for [`SelectorBuilder::combine`].
pub fn combine(
    left: &SelectorBuilder,
    combinator: impl AsRef<str>,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::combine(left, combinator, right)
}
