//! `MemoryHost`: an in-memory `HostQuery` implementation backing this
//! workspace's own test suite.
//!
//! No real type-checker collaborator is part of this workspace's scope
//! (spec §1); a production integration would implement `HostQuery` on top
//! of a structural checker such as `tsz-checker`. This double supports
//! declaring interfaces/aliases/enums across multiple named modules with
//! import edges, enough to exercise cross-module resolution (spec §8.4
//! scenario 5) without a parser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use indexmap::IndexMap;
use ts2rs_ir::LiteralValue;

use crate::traits::{
    AliasSymbol, Declaration, DeclarationKind, EnumMemberDecl, HostQuery, PropertySignature,
    SyntacticTypeNode, TypeHandle,
};

/// A builder-friendly, in-memory `TypeHandle`. Every predicate the trait
/// exposes is backed by one variant here rather than by a concrete checker
/// type, since this double's whole point is to be cheap to construct from
/// test fixtures.
#[derive(Debug, Clone)]
pub enum MemType {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Any,
    Unknown,
    StringLiteral(String),
    NumberLiteral(f64),
    BooleanLiteral(bool),
    Array(Rc<MemType>),
    Tuple(Vec<Rc<MemType>>),
    Union(Vec<Rc<MemType>>),
    /// An anonymous object type: properties plus optional index signatures.
    Object {
        properties: Vec<PropertySignature>,
        string_index: Option<Rc<MemType>>,
        number_index: Option<Rc<MemType>>,
    },
    TypeParameter(String),
    /// A reference written as a named alias/interface/enum occurrence.
    /// `type_arguments` covers generic well-known aliases (`Array<T>`,
    /// `Record<K, V>`, ...) and user generics alike.
    NamedRef {
        alias: AliasSymbol,
        type_arguments: Vec<Rc<MemType>>,
        /// When the reference denotes an external-package object type with
        /// its own properties (spec §4.2.5 rule 10), carry them directly
        /// so the Resolver can materialize it structurally without a
        /// round-trip through `find_declaration`.
        external_properties: Option<Vec<PropertySignature>>,
        /// True when this occurrence was syntactically written as a
        /// reference to a named `type` alias (spec §4.1: "set only when
        /// the type was written as a reference to a named alias") —
        /// controls whether `alias_symbol()` or only `symbol()` reports
        /// this name. A direct reference to an `interface` or `enum`
        /// declaration (not through an alias) sets `via_alias: false`.
        via_alias: bool,
    },
}

impl MemType {
    pub fn string() -> Rc<Self> {
        Rc::new(Self::String)
    }
    pub fn number() -> Rc<Self> {
        Rc::new(Self::Number)
    }
    pub fn boolean() -> Rc<Self> {
        Rc::new(Self::Boolean)
    }
    pub fn null() -> Rc<Self> {
        Rc::new(Self::Null)
    }
    pub fn undefined() -> Rc<Self> {
        Rc::new(Self::Undefined)
    }
    pub fn any() -> Rc<Self> {
        Rc::new(Self::Any)
    }
    pub fn unknown() -> Rc<Self> {
        Rc::new(Self::Unknown)
    }
    pub fn string_literal(v: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::StringLiteral(v.into()))
    }
    pub fn number_literal(v: f64) -> Rc<Self> {
        Rc::new(Self::NumberLiteral(v))
    }
    pub fn boolean_literal(v: bool) -> Rc<Self> {
        Rc::new(Self::BooleanLiteral(v))
    }
    pub fn array(el: Rc<MemType>) -> Rc<Self> {
        Rc::new(Self::Array(el))
    }
    pub fn tuple(els: Vec<Rc<MemType>>) -> Rc<Self> {
        Rc::new(Self::Tuple(els))
    }
    pub fn union(members: Vec<Rc<MemType>>) -> Rc<Self> {
        Rc::new(Self::Union(members))
    }
    pub fn object(properties: Vec<PropertySignature>) -> Rc<Self> {
        Rc::new(Self::Object {
            properties,
            string_index: None,
            number_index: None,
        })
    }
    pub fn string_index(value: Rc<MemType>) -> Rc<Self> {
        Rc::new(Self::Object {
            properties: Vec::new(),
            string_index: Some(value),
            number_index: None,
        })
    }
    pub fn number_index(value: Rc<MemType>) -> Rc<Self> {
        Rc::new(Self::Object {
            properties: Vec::new(),
            string_index: None,
            number_index: Some(value),
        })
    }
    pub fn type_parameter(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::TypeParameter(name.into()))
    }

    /// A direct reference to a user-declared `interface` or `enum` (not
    /// written through a `type` alias): `alias_symbol()` is unset,
    /// `symbol()` carries the name (spec §4.2.5 step 12).
    pub fn named(name: impl Into<String>, module: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::NamedRef {
            alias: AliasSymbol {
                name: name.into(),
                declaring_module: module.into(),
                is_external_package: false,
            },
            type_arguments: Vec::new(),
            external_properties: None,
            via_alias: false,
        })
    }

    /// A reference written as an occurrence of a named `type` alias:
    /// `alias_symbol()` is set (spec §4.2.5 step 2).
    pub fn named_alias(name: impl Into<String>, module: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::NamedRef {
            alias: AliasSymbol {
                name: name.into(),
                declaring_module: module.into(),
                is_external_package: false,
            },
            type_arguments: Vec::new(),
            external_properties: None,
            via_alias: true,
        })
    }

    /// A reference to a well-known or user generic alias with type
    /// arguments, e.g. `Record<string, Foo>` — written as an alias
    /// occurrence, so `alias_symbol()` is set.
    pub fn named_generic(
        name: impl Into<String>,
        module: impl Into<String>,
        type_arguments: Vec<Rc<MemType>>,
    ) -> Rc<Self> {
        Rc::new(Self::NamedRef {
            alias: AliasSymbol {
                name: name.into(),
                declaring_module: module.into(),
                is_external_package: false,
            },
            type_arguments,
            external_properties: None,
            via_alias: true,
        })
    }

    /// A reference to a named object type declared in a third-party
    /// package (spec §4.2.5 rule 10).
    pub fn external_named(
        name: impl Into<String>,
        module: impl Into<String>,
        properties: Vec<PropertySignature>,
    ) -> Rc<Self> {
        Rc::new(Self::NamedRef {
            alias: AliasSymbol {
                name: name.into(),
                declaring_module: module.into(),
                is_external_package: true,
            },
            type_arguments: Vec::new(),
            external_properties: Some(properties),
            via_alias: false,
        })
    }
}

impl TypeHandle for MemType {
    fn is_string(&self) -> bool {
        matches!(self, Self::String | Self::StringLiteral(_))
    }
    fn is_number(&self) -> bool {
        matches!(self, Self::Number | Self::NumberLiteral(_))
    }
    fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean | Self::BooleanLiteral(_))
    }
    fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
    fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
    fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
    fn is_string_literal(&self) -> bool {
        matches!(self, Self::StringLiteral(_))
    }
    fn is_number_literal(&self) -> bool {
        matches!(self, Self::NumberLiteral(_))
    }
    fn is_boolean_literal(&self) -> bool {
        matches!(self, Self::BooleanLiteral(_))
    }
    fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
    fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple(_))
    }
    fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }
    fn is_object(&self) -> bool {
        matches!(self, Self::Object { .. })
    }
    fn is_type_parameter(&self) -> bool {
        matches!(self, Self::TypeParameter(_))
    }

    fn literal_value(&self) -> Option<LiteralValue> {
        match self {
            Self::StringLiteral(s) => Some(LiteralValue::Str(s.clone())),
            Self::NumberLiteral(n) => Some(LiteralValue::Num(*n)),
            Self::BooleanLiteral(b) => Some(LiteralValue::Bool(*b)),
            _ => None,
        }
    }

    fn array_element(&self) -> Option<Rc<dyn TypeHandle>> {
        match self {
            Self::Array(el) => Some(el.clone() as Rc<dyn TypeHandle>),
            _ => None,
        }
    }

    fn tuple_elements(&self) -> Vec<Rc<dyn TypeHandle>> {
        match self {
            Self::Tuple(els) => els.iter().map(|e| e.clone() as Rc<dyn TypeHandle>).collect(),
            _ => Vec::new(),
        }
    }

    fn union_members(&self) -> Vec<Rc<dyn TypeHandle>> {
        match self {
            Self::Union(members) => members
                .iter()
                .map(|m| m.clone() as Rc<dyn TypeHandle>)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn type_arguments(&self) -> Vec<Rc<dyn TypeHandle>> {
        match self {
            Self::NamedRef { type_arguments, .. } => type_arguments
                .iter()
                .map(|a| a.clone() as Rc<dyn TypeHandle>)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn string_index_value_type(&self) -> Option<Rc<dyn TypeHandle>> {
        match self {
            Self::Object { string_index, .. } => {
                string_index.clone().map(|v| v as Rc<dyn TypeHandle>)
            }
            _ => None,
        }
    }

    fn number_index_value_type(&self) -> Option<Rc<dyn TypeHandle>> {
        match self {
            Self::Object { number_index, .. } => {
                number_index.clone().map(|v| v as Rc<dyn TypeHandle>)
            }
            _ => None,
        }
    }

    fn property_names(&self) -> Vec<String> {
        match self {
            Self::Object { properties, .. } => {
                properties.iter().map(|p| p.name.clone()).collect()
            }
            Self::NamedRef {
                external_properties: Some(props),
                ..
            } => props.iter().map(|p| p.name.clone()).collect(),
            _ => Vec::new(),
        }
    }

    fn property_type(&self, name: &str) -> Option<Rc<dyn TypeHandle>> {
        let props = match self {
            Self::Object { properties, .. } => properties,
            Self::NamedRef {
                external_properties: Some(props),
                ..
            } => props,
            _ => return None,
        };
        props
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.ty.clone())
    }

    fn property_is_optional(&self, name: &str) -> bool {
        let props = match self {
            Self::Object { properties, .. } => properties,
            Self::NamedRef {
                external_properties: Some(props),
                ..
            } => props,
            _ => return false,
        };
        props
            .iter()
            .find(|p| p.name == name)
            .is_some_and(|p| p.optional)
    }

    fn property_type_node(&self, name: &str) -> SyntacticTypeNode {
        let props = match self {
            Self::Object { properties, .. } => properties,
            Self::NamedRef {
                external_properties: Some(props),
                ..
            } => props,
            _ => return SyntacticTypeNode::Other,
        };
        props
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.type_node.clone())
            .unwrap_or(SyntacticTypeNode::Other)
    }

    fn alias_symbol(&self) -> Option<AliasSymbol> {
        match self {
            Self::NamedRef {
                alias,
                via_alias: true,
                ..
            } => Some(alias.clone()),
            _ => None,
        }
    }

    fn symbol(&self) -> Option<AliasSymbol> {
        match self {
            Self::NamedRef { alias, .. } => Some(alias.clone()),
            Self::TypeParameter(name) => Some(AliasSymbol {
                name: name.clone(),
                declaring_module: String::new(),
                is_external_package: false,
            }),
            _ => None,
        }
    }
}

/// An in-memory interface/type-alias/enum declaration.
pub struct MemDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub documentation: Option<String>,
    pub source_path: String,
    pub type_parameters: Vec<String>,
    pub extends_list: Vec<Rc<dyn TypeHandle>>,
    pub own_properties: Vec<PropertySignature>,
    pub aliased_type: Option<Rc<dyn TypeHandle>>,
    pub enum_members: Vec<EnumMemberDecl>,
}

impl Declaration for MemDeclaration {
    fn kind(&self) -> DeclarationKind {
        self.kind
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
    fn source_path(&self) -> &str {
        &self.source_path
    }
    fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }
    fn extends_list(&self) -> Vec<Rc<dyn TypeHandle>> {
        self.extends_list.clone()
    }
    fn own_properties(&self) -> &[PropertySignature] {
        &self.own_properties
    }
    fn aliased_type(&self) -> Option<Rc<dyn TypeHandle>> {
        self.aliased_type.clone()
    }
    fn enum_members(&self) -> &[EnumMemberDecl] {
        &self.enum_members
    }
}

/// A property signature builder, so fixtures can skip the syntactic-node
/// noise unless a test actually exercises the nullable-reference
/// refinement (spec §4.2.5).
pub fn prop(name: &str, ty: Rc<dyn TypeHandle>, optional: bool) -> PropertySignature {
    PropertySignature {
        name: name.to_string(),
        optional,
        ty,
        type_node: SyntacticTypeNode::Other,
    }
}

/// Same as [`prop`], but tags the property's syntactic type node as
/// `T | null` written as a bare reference to `N` — the one shape
/// `resolve_type_with_node` treats specially.
pub fn nullable_ref_prop(name: &str, ty: Rc<dyn TypeHandle>, referenced: &str) -> PropertySignature {
    PropertySignature {
        name: name.to_string(),
        optional: false,
        ty,
        type_node: SyntacticTypeNode::NullableReference(referenced.to_string()),
    }
}

/// Same as [`prop`], tagging `N[] | null`.
pub fn nullable_array_ref_prop(
    name: &str,
    ty: Rc<dyn TypeHandle>,
    referenced: &str,
) -> PropertySignature {
    PropertySignature {
        name: name.to_string(),
        optional: false,
        ty,
        type_node: SyntacticTypeNode::NullableArrayOfReference(referenced.to_string()),
    }
}

/// An in-memory module: declarations plus the modules it imports from.
#[derive(Default)]
struct MemModule {
    declarations: IndexMap<String, Rc<MemDeclaration>>,
    imports: Vec<String>,
}

/// In-memory `HostQuery` double used by this workspace's own test suite.
///
/// Interior mutability matches the trait's `&self` methods (`load_module`
/// must be callable without a `&mut` threaded through the Resolver).
#[derive(Default)]
pub struct MemoryHost {
    modules: RefCell<HashMap<String, MemModule>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `decl` in `module`, creating the module if it doesn't exist
    /// yet. Panics on a duplicate name within one module — that would be a
    /// fixture bug, not a runtime condition the Resolver needs to handle.
    pub fn declare(&self, module: &str, decl: MemDeclaration) -> &Self {
        let mut modules = self.modules.borrow_mut();
        let entry = modules.entry(module.to_string()).or_default();
        let previous = entry.declarations.insert(decl.name.clone(), Rc::new(decl));
        assert!(
            previous.is_none(),
            "MemoryHost fixture declared '{module}' twice in the same module"
        );
        self
    }

    /// Record that `module` imports from `imported`, so `find_declaration`
    /// can follow the edge during its transitive-import search.
    pub fn add_import(&self, module: &str, imported: &str) -> &Self {
        self.modules
            .borrow_mut()
            .entry(module.to_string())
            .or_default()
            .imports
            .push(imported.to_string());
        self
    }

}

impl HostQuery for MemoryHost {
    fn find_declaration(&self, module: &str, name: &str) -> Option<Rc<dyn Declaration>> {
        let modules = self.modules.borrow();
        let mut seen = std::collections::HashSet::new();
        let mut queue = vec![module.to_string()];
        while let Some(current) = queue.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            let Some(m) = modules.get(&current) else {
                continue;
            };
            if let Some(decl) = m.declarations.get(name) {
                return Some(decl.clone() as Rc<dyn Declaration>);
            }
            queue.extend(m.imports.iter().cloned());
        }
        None
    }

    fn load_module(&self, path: &str) {
        self.modules
            .borrow_mut()
            .entry(path.to_string())
            .or_default();
    }

    fn exported_names(&self, module: &str) -> Vec<String> {
        self.modules
            .borrow()
            .get(module)
            .map(|m| m.declarations.keys().cloned().collect())
            .unwrap_or_default()
    }
}
