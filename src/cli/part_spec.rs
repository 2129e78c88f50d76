//! Parsing of `kind:value` selector parts given on the command line.

use std::sync::Arc;

use miette::NamedSource;

use crate::errors::{PartSpecError, SelectorError};
use crate::selector::{PartKind, SelectorBuilder};

/// One `kind:value` argument. Only the first `:` separates kind from value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpec {
    pub kind: PartKind,
    pub value: String,
}

impl PartSpec {
    pub fn parse(spec: &str) -> Result<Self, PartSpecError> {
        let input = || Arc::new(NamedSource::new("part", spec.to_string()));
        let Some((kind, value)) = spec.split_once(':') else {
            return Err(PartSpecError::MissingSeparator {
                spec: spec.to_string(),
                input: input(),
            });
        };
        let kind = kind
            .parse::<PartKind>()
            .map_err(|_| PartSpecError::UnknownKind {
                kind: kind.to_string(),
                input: input(),
                span: (0..kind.len()).into(),
            })?;
        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }
}

/// Parses every spec and appends it to a fresh chain.
pub fn build_chain(specs: &[String]) -> miette::Result<SelectorBuilder> {
    let parts = specs
        .iter()
        .map(|s| PartSpec::parse(s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(append_all(&SelectorBuilder::new(), &parts)?)
}

fn append_all(start: &SelectorBuilder, parts: &[PartSpec]) -> Result<SelectorBuilder, SelectorError> {
    parts
        .iter()
        .try_fold(start.clone(), |sel, part| sel.append(part.kind, &part.value))
}
