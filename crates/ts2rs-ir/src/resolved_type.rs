//! `ResolvedType`: the tagged IR node described in spec §3.1.
//!
//! Exactly one tag is set per value — this is a plain Rust enum, so that's
//! enforced by the type system rather than documented as a runtime
//! invariant. The two invariants the spec calls out by name (§3.2) that
//! *aren't* free from the enum shape alone are option normal form and
//! recursion boxing; both are enforced by the constructors below rather
//! than left to call sites to get right.

use crate::literal::LiteralValue;

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedType {
    Primitive(PrimitiveKind),
    Array(Box<ResolvedType>),
    Tuple(Vec<ResolvedType>),
    /// Arbitrary-key mapping (rendered as the target's hash map).
    Record(Box<ResolvedType>, Box<ResolvedType>),
    /// Semantically identical to `Record`; kept distinct only so the
    /// Emitter can honor a deliberate source-side choice of `Map` over
    /// `Record` (spec §3.1).
    Map(Box<ResolvedType>, Box<ResolvedType>),
    Set(Box<ResolvedType>),
    /// Nullable wrapper. Never constructed with an `Option` inner — see
    /// `ResolvedType::option`.
    Option(Box<ResolvedType>),
    /// Explicit heap indirection, inserted only to break recursion.
    Box(Box<ResolvedType>),
    Literal(LiteralValue),
    /// The fallback sentinel: "could not be expressed nominally".
    JsonValue,
    /// A reference to a nominally collected `CollectedType` by name.
    StructRef(String),
    /// An unbound generic parameter occurrence; erased to `JsonValue` at
    /// emission (spec §4.3's render table, and §9 design notes).
    TypeParameter(String),
}

impl ResolvedType {
    /// Construct an `option(inner)`, collapsing `option(option(X))` to
    /// `option(X)` so the normal form in invariant 2 (spec §3.2) can never
    /// be violated by a caller forgetting to check.
    pub fn option(inner: ResolvedType) -> ResolvedType {
        match inner {
            ResolvedType::Option(_) => inner,
            other => ResolvedType::Option(Box::new(other)),
        }
    }

    /// Wrap `inner` in `option` unless it is already `option(_)` — the rule
    /// applied to every optional field and property (spec §4.2.3, §4.2.4).
    pub fn option_if_absent(self) -> ResolvedType {
        ResolvedType::option(self)
    }

    pub fn is_option(&self) -> bool {
        matches!(self, ResolvedType::Option(_))
    }

    /// `struct_ref(name)` wrapped in `box`, unless it already is one. Used
    /// by the recursion rule (spec invariant 3): a direct self-reference
    /// gets exactly one layer of indirection, never nested `box(box(...))`.
    pub fn boxed(inner: ResolvedType) -> ResolvedType {
        match inner {
            ResolvedType::Box(_) => inner,
            other => ResolvedType::Box(Box::new(other)),
        }
    }

    /// The six constructors the spec lists (invariant 2 / §9) as supplying
    /// indirection in any plausible target language, so a `struct_ref`
    /// reachable only through one of these does *not* need boxing.
    pub fn provides_indirection(&self) -> bool {
        matches!(
            self,
            ResolvedType::Option(_)
                | ResolvedType::Array(_)
                | ResolvedType::Box(_)
                | ResolvedType::Record(_, _)
                | ResolvedType::Map(_, _)
                | ResolvedType::Set(_)
        )
    }
}
