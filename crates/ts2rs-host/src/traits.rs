//! Trait definitions for the Host Query API (spec §4.1). These are the
//! *only* surface the Resolver depends on; everything upstream of them
//! (scanning, parsing, binding, type checking) is an external collaborator.

use std::rc::Rc;

use ts2rs_ir::EnumMemberValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Interface,
    TypeAlias,
    Enum,
}

/// One member of an `enum` declaration (spec §4.1: "sequence of
/// `{member_name, member_value, documentation}`").
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMemberDecl {
    pub name: String,
    pub value: Option<EnumMemberValue>,
    pub documentation: Option<String>,
}

/// A property signature on an interface or anonymous object type.
#[derive(Debug, Clone)]
pub struct PropertySignature {
    pub name: String,
    pub optional: bool,
    pub ty: Rc<dyn TypeHandle>,
    /// The syntactic form of this property's declared type, used only for
    /// the nullable-reference refinement in `resolve_type_with_node`
    /// (spec §4.2.5).
    pub type_node: SyntacticTypeNode,
}

/// The narrow syntactic shape the Resolver needs from a property's type
/// *node* (as opposed to its checked `TypeHandle`) — just enough to
/// recognize `T | null`, `N[] | null`, and nothing else, so a named
/// reference survives a nullable wrapper even when the checker would
/// otherwise have widened or unified it away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntacticTypeNode {
    /// `N | null` where `N` is a bare reference to a named type.
    NullableReference(String),
    /// `N[] | null` (or `Array<N> | null`).
    NullableArrayOfReference(String),
    /// Anything else; the refinement does not apply.
    Other,
}

/// `name` + the declaration an aliased reference resolves to, set only
/// when the occurrence was syntactically written as a reference to a
/// named alias (spec §4.1: "set only when the type was written as a
/// reference to a named alias").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSymbol {
    pub name: String,
    pub declaring_module: String,
    /// True when `declaring_module` lives outside the user's own sources
    /// (spec §4.2.5 rule 10: "a third-party package").
    pub is_external_package: bool,
}

/// One interface, type alias, or enum declaration.
///
/// Interfaces, aliases, and enums share this single trait rather than three
/// separate ones because the spec's own Host Query API describes them this
/// way (§4.1): a `Declaration` carries a `kind` and the accessors relevant
/// to that kind return real data; the rest default to empty/`None`.
pub trait Declaration {
    fn kind(&self) -> DeclarationKind;
    fn name(&self) -> &str;
    fn documentation(&self) -> Option<&str> {
        None
    }
    fn source_path(&self) -> &str;
    fn type_parameters(&self) -> &[String] {
        &[]
    }

    // --- interface ---
    fn extends_list(&self) -> Vec<Rc<dyn TypeHandle>> {
        Vec::new()
    }
    fn own_properties(&self) -> &[PropertySignature] {
        &[]
    }

    // --- type alias ---
    fn aliased_type(&self) -> Option<Rc<dyn TypeHandle>> {
        None
    }

    // --- enum ---
    fn enum_members(&self) -> &[EnumMemberDecl] {
        &[]
    }
}

/// A checked type, as reported by the surface language's type checker.
///
/// Every predicate here mirrors one bullet of spec §4.1's "For a Type
/// handle" list; the Resolver's dispatcher (`resolve_type`, spec §4.2.5)
/// calls these in a fixed order and never inspects a concrete
/// implementation directly, so any structural type checker can back this
/// trait.
pub trait TypeHandle {
    fn is_string(&self) -> bool {
        false
    }
    fn is_number(&self) -> bool {
        false
    }
    fn is_boolean(&self) -> bool {
        false
    }
    fn is_null(&self) -> bool {
        false
    }
    fn is_undefined(&self) -> bool {
        false
    }
    fn is_any(&self) -> bool {
        false
    }
    fn is_unknown(&self) -> bool {
        false
    }
    fn is_string_literal(&self) -> bool {
        false
    }
    fn is_number_literal(&self) -> bool {
        false
    }
    fn is_boolean_literal(&self) -> bool {
        false
    }
    fn is_array(&self) -> bool {
        false
    }
    fn is_tuple(&self) -> bool {
        false
    }
    fn is_union(&self) -> bool {
        false
    }
    fn is_object(&self) -> bool {
        false
    }
    fn is_type_parameter(&self) -> bool {
        false
    }

    fn literal_value(&self) -> Option<ts2rs_ir::LiteralValue> {
        None
    }

    fn array_element(&self) -> Option<Rc<dyn TypeHandle>> {
        None
    }
    fn tuple_elements(&self) -> Vec<Rc<dyn TypeHandle>> {
        Vec::new()
    }
    fn union_members(&self) -> Vec<Rc<dyn TypeHandle>> {
        Vec::new()
    }
    fn type_arguments(&self) -> Vec<Rc<dyn TypeHandle>> {
        Vec::new()
    }

    fn string_index_value_type(&self) -> Option<Rc<dyn TypeHandle>> {
        None
    }
    fn number_index_value_type(&self) -> Option<Rc<dyn TypeHandle>> {
        None
    }

    fn property_names(&self) -> Vec<String> {
        Vec::new()
    }
    fn property_type(&self, _name: &str) -> Option<Rc<dyn TypeHandle>> {
        None
    }
    fn property_is_optional(&self, _name: &str) -> bool {
        false
    }
    /// The syntactic form of this property's declared type, when this
    /// object type carries that information (anonymous object literals and
    /// type-alias right-hand sides, same as `PropertySignature::type_node`).
    /// Backs the nullable-reference refinement (spec §4.2.5) at every field
    /// entry point, not just `own_properties` on an interface.
    fn property_type_node(&self, _name: &str) -> SyntacticTypeNode {
        SyntacticTypeNode::Other
    }

    /// Set only when this occurrence was written as a reference to a named
    /// alias (spec §4.1).
    fn alias_symbol(&self) -> Option<AliasSymbol> {
        None
    }
    /// Name + origin declaration for this type's own symbol, independent of
    /// whether it was referenced via an alias.
    fn symbol(&self) -> Option<AliasSymbol> {
        None
    }
}

/// The query surface injected into the Resolver (spec §4.1).
pub trait HostQuery {
    /// Search `module`, its transitive imports, and previously-loaded
    /// modules for the first matching interface/type-alias/enum named
    /// `name`.
    fn find_declaration(&self, module: &str, name: &str) -> Option<Rc<dyn Declaration>>;

    /// Add a module to the project so subsequent queries see it.
    fn load_module(&self, path: &str);

    /// Names of every exported interface/type-alias/enum declared directly
    /// in `module`, in declaration order. Backs the Resolver's entry point
    /// (spec §4.2.1) when no root type names are configured: "enumerate
    /// every exported interface/type-alias/enum of entry_module". Not
    /// spelled out as a separate bullet in spec §4.1's query list, but
    /// required for that behavior to be implementable at all; a production
    /// Host Query API backed by a real type checker derives it from the
    /// module's export table.
    fn exported_names(&self, module: &str) -> Vec<String>;
}
