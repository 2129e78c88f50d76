use std::fmt;

use serde::{Deserialize, Serialize};

/// The four CSS combinators.
///
/// `SelectorBuilder::combine` takes any `AsRef<str>`; these are the tokens
/// callers normally pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

impl Combinator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }

    /// Looks up a combinator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Combinator::Descendant),
            ">" => Some(Combinator::Child),
            "+" => Some(Combinator::AdjacentSibling),
            "~" => Some(Combinator::GeneralSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for c in [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::AdjacentSibling,
            Combinator::GeneralSibling,
        ] {
            assert_eq!(Combinator::from_symbol(c.as_str()), Some(c));
        }
        assert_eq!(Combinator::from_symbol("||"), None);
    }
}
