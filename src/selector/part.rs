//! Selector part kinds and how each one renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kinds of part a compound selector is made of.
///
/// The declaration order is the order parts must appear in a selector, so the
/// derived `Ord` is the ordering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl PartKind {
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Singular kinds may occur at most once per chain.
    pub const fn is_singular(self) -> bool {
        matches!(
            self,
            PartKind::Element | PartKind::Id | PartKind::PseudoElement
        )
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            PartKind::Element => "",
            PartKind::Id => "#",
            PartKind::Class => ".",
            PartKind::Attribute => "[",
            PartKind::PseudoClass => ":",
            PartKind::PseudoElement => "::",
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            PartKind::Attribute => "]",
            _ => "",
        }
    }

    /// Renders `value` as this kind of part, e.g. `Class` + `"nav"` -> `".nav"`.
    pub fn render(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 3);
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
        out
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known part kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selector part kind '{0}'")]
pub struct UnknownPartKind(pub String);

impl FromStr for PartKind {
    type Err = UnknownPartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "element" => Ok(PartKind::Element),
            "id" => Ok(PartKind::Id),
            "class" => Ok(PartKind::Class),
            "attribute" | "attr" => Ok(PartKind::Attribute),
            "pseudo-class" | "pseudoClass" => Ok(PartKind::PseudoClass),
            "pseudo-element" | "pseudoElement" => Ok(PartKind::PseudoElement),
            other => Err(UnknownPartKind(other.to_string())),
        }
    }
}
