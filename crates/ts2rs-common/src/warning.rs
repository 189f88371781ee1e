//! Non-fatal diagnostics accumulated during a Resolver run.
//!
//! The external contract (the Convert façade's `warnings` output) is a flat
//! `Vec<String>`, matching `tsz_common::Diagnostic`'s pattern of keeping a
//! structured reason internally and only flattening to text at the
//! reporting boundary.

use std::fmt;

use crate::error::SourceLocation;

/// Why the Resolver fell back to `json_value`, or some other condition
/// worth surfacing to the caller without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningReason {
    /// An occurrence of an unbound generic type parameter.
    TypeParameterUnresolved { name: String },
    /// A property/alias/reference fell through every classification rule.
    Fallthrough { of: String },
    /// An `Object`, `Function`, or `__`-prefixed well-known name.
    InternalSymbol { name: String },
    /// An inline union with two or more non-null members.
    AmbiguousInlineUnion,
    /// A pure literal union that appeared inline rather than as a named
    /// alias, so it can't be turned into a nominal enum.
    UnnamedLiteralUnion,
    /// A named union alias where at least one variant could not be
    /// resolved; the alias itself was not collected, and every use site
    /// falls back instead.
    UnresolvableNamedUnion { alias: String, using_field: String },
}

impl fmt::Display for WarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeParameterUnresolved { name } => {
                write!(f, "type parameter '{name}' unresolved")
            }
            Self::Fallthrough { of } => write!(f, "'{of}' has no nominal representation"),
            Self::InternalSymbol { name } => write!(f, "'{name}' is an internal symbol"),
            Self::AmbiguousInlineUnion => {
                write!(f, "anonymous multi-variant union cannot be named")
            }
            Self::UnnamedLiteralUnion => {
                write!(f, "literal union must be a named type")
            }
            Self::UnresolvableNamedUnion { alias, using_field } => write!(
                f,
                "'{alias}' has an unresolvable variant; '{using_field}' falls back to json_value"
            ),
        }
    }
}

/// A single accumulated warning: a reason plus the surface-source location
/// it was raised at, when the Host Query API could supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub reason: WarningReason,
    pub location: Option<SourceLocation>,
}

impl Warning {
    pub fn new(reason: WarningReason) -> Self {
        Self {
            reason,
            location: None,
        }
    }

    pub fn at(reason: WarningReason, location: SourceLocation) -> Self {
        Self {
            reason,
            location: Some(location),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{} ({loc})", self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}
