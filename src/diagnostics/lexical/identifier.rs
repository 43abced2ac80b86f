use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::{
    diagnostics::diagnostic::{DiagnosticBase, DiagnosticKind},
    errors::errors::Error,
    source::range::SourceCoordinateRange,
    EXPECTS, IMPL_DIAGNOSTIC,
};

pub const RAW_IDENTIFIER_PREFIX: &str = "r#";

lazy_static! {
    /// Keywords that keep their meaning even behind `r#`.
    pub static ref PROHIBITED_RAW_IDENTIFIERS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("crate");
        set.insert("extern");
        set.insert("self");
        set.insert("super");
        set.insert("Self");
        set
    };
}

/// A raw identifier naming one of the keywords that cannot be raw, e.g. `r#self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifier {
    base: DiagnosticBase,
}

impl InvalidIdentifier {
    pub fn new(identifier: &str, coordinates: SourceCoordinateRange) -> Result<Self, Error> {
        EXPECTS!(identifier.starts_with(RAW_IDENTIFIER_PREFIX));
        EXPECTS!(is_prohibited_identifier(identifier));

        let help_message = format!("`{}` is not allowed as a raw identifier.", identifier);
        Ok(InvalidIdentifier {
            base: DiagnosticBase::new(DiagnosticKind::InvalidIdentifier, coordinates, help_message),
        })
    }
}

fn is_prohibited_identifier(identifier: &str) -> bool {
    identifier
        .strip_prefix(RAW_IDENTIFIER_PREFIX)
        .is_some_and(|name| PROHIBITED_RAW_IDENTIFIERS.contains(name))
}

IMPL_DIAGNOSTIC!(InvalidIdentifier, _this => DiagnosticKind::InvalidIdentifier);
