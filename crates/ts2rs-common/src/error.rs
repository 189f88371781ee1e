//! The converter's fatal error type.
//!
//! Every variant here corresponds to one of the failure modes enumerated in
//! the Resolver's design: a missing declaration, a categorically
//! unrepresentable construct, a strict-mode fallback refusal, or a failure
//! surfaced unchanged from the Host Query API. All four are fatal to the
//! run; see `ts2rs_common::Warning` for the non-fatal counterpart.

use std::fmt;

/// Fatal error raised by the Resolver, Emitter, or Convert façade.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A named type could not be located anywhere reachable from the entry
    /// module (own declarations, transitive imports, previously loaded
    /// modules).
    #[error("type '{name}' not found")]
    TypeNotFound { name: String },

    /// A construct that is categorically unrepresentable in JSON, such as
    /// `Promise<T>` or a function type.
    #[error("'{name}' cannot be represented in JSON")]
    NonSerializable { name: String },

    /// Strict mode turned a would-be fallback into a fatal refusal, or some
    /// other explicit refusal to convert a type.
    #[error("cannot convert '{type_name}': {reason}")]
    TypeConversion {
        type_name: String,
        reason: String,
        location: Option<SourceLocation>,
    },

    /// A failure from the Host Query API, propagated without translation.
    #[error("host query failed: {0}")]
    HostQueryFailure(String),
}

/// A file + line pointer into the surface source, attached to errors and
/// warnings when the Host Query API can supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
