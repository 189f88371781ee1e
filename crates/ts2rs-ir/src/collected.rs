//! `CollectedType`: a top-level, emittable IR declaration (spec §3.1).

use crate::literal::EnumMemberValue;
use crate::resolved_type::ResolvedType;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: ResolvedType,
    pub optional: bool,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    pub name: String,
    pub value: Option<EnumMemberValue>,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionVariant {
    pub name: String,
    /// `None` for a unit variant with zero payload fields.
    pub ty: Option<ResolvedType>,
    pub discriminator_value: Option<crate::literal::LiteralValue>,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectedType {
    Struct {
        name: String,
        fields: Vec<Field>,
        documentation: Option<String>,
        type_parameters: Vec<String>,
    },
    Enum {
        name: String,
        variants: Vec<EnumVariant>,
        is_string_enum: bool,
        documentation: Option<String>,
    },
    Union {
        name: String,
        variants: Vec<UnionVariant>,
        discriminator: Option<String>,
        documentation: Option<String>,
    },
    TypeAlias {
        name: String,
        aliased: ResolvedType,
        documentation: Option<String>,
    },
}

impl CollectedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Struct { name, .. }
            | Self::Enum { name, .. }
            | Self::Union { name, .. }
            | Self::TypeAlias { name, .. } => name,
        }
    }
}
