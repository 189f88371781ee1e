//! `resolve_interface` (spec §4.2.3): flattens `extends_list` into the
//! derived record, then resolves own properties — including the
//! syntactic nullable-reference refinement available only at this
//! property-field entry point (spec §4.2.5's "syntactic refinement").

use std::rc::Rc;

use indexmap::IndexMap;
use ts2rs_common::ConvertError;
use ts2rs_host::{Declaration, PropertySignature, SyntacticTypeNode, TypeHandle};
use ts2rs_ir::{CollectedType, Field, ResolvedType};

use crate::resolver::Resolver;

impl<'h> Resolver<'h> {
    pub(crate) fn resolve_interface(
        &mut self,
        decl: &Rc<dyn Declaration>,
        module: &str,
    ) -> Result<CollectedType, ConvertError> {
        let saved_scope = self.type_params_in_scope.clone();
        for tp in decl.type_parameters() {
            self.type_params_in_scope.insert(tp.clone());
        }

        // Keyed by name so a later own-property occurrence overwrites an
        // earlier inherited one (spec §4.2.3: "later own-property
        // occurrences of the same name overwrite earlier ones by textual
        // position"), while preserving first-seen insertion order for
        // names that are never overwritten.
        let mut fields: IndexMap<String, Field> = IndexMap::new();

        for base in decl.extends_list() {
            for name in base.property_names() {
                let ty = base
                    .property_type(&name)
                    .expect("property_names()/property_type() mismatch");
                let optional = base.property_is_optional(&name);
                let field = self.resolve_field(&name, &ty, optional, None, module)?;
                fields.insert(name, field);
            }
        }

        for prop in decl.own_properties() {
            let field = self.resolve_own_property(prop, module)?;
            fields.insert(prop.name.clone(), field);
        }

        self.type_params_in_scope = saved_scope;

        Ok(CollectedType::Struct {
            name: decl.name().to_string(),
            fields: fields.into_values().collect(),
            documentation: decl.documentation().map(|s| s.to_string()),
            type_parameters: decl.type_parameters().to_vec(),
        })
    }

    /// `resolve_type_with_node` (spec §4.2.5): applies the nullable-named-
    /// reference refinement when the property's syntactic type node is
    /// `T | null` (or `T[] | null`) with a bare reference as the
    /// non-null branch; otherwise resolves the checked `TypeHandle`
    /// normally.
    pub(crate) fn resolve_own_property(
        &mut self,
        prop: &PropertySignature,
        module: &str,
    ) -> Result<Field, ConvertError> {
        self.resolve_property_with_node(&prop.name, &prop.type_node, &prop.ty, prop.optional, module)
    }

    /// Shared by `resolve_own_property` (interface own-properties, which
    /// carry a `PropertySignature` directly) and `resolve_anonymous_fields`
    /// (anonymous object literals and type-alias object right-hand sides,
    /// which only expose a syntactic node per-name via
    /// `TypeHandle::property_type_node`). Spec §4.2.4 item 2 calls for the
    /// same `resolve_type_with_node` refinement on alias-RHS object
    /// properties as on interface own-properties.
    pub(crate) fn resolve_property_with_node(
        &mut self,
        name: &str,
        type_node: &SyntacticTypeNode,
        ty: &Rc<dyn TypeHandle>,
        optional: bool,
        module: &str,
    ) -> Result<Field, ConvertError> {
        match type_node {
            SyntacticTypeNode::NullableReference(referenced) => {
                self.resolve_by_name(module, referenced)?;
                let inner = self.apply_recursion_rule(ResolvedType::StructRef(referenced.clone()));
                Ok(Field {
                    name: name.to_string(),
                    ty: ResolvedType::option(inner),
                    optional,
                    documentation: None,
                })
            }
            SyntacticTypeNode::NullableArrayOfReference(referenced) => {
                self.resolve_by_name(module, referenced)?;
                // an array already supplies indirection (spec invariant 3),
                // so the reference inside it is never boxed.
                Ok(Field {
                    name: name.to_string(),
                    ty: ResolvedType::option(ResolvedType::Array(Box::new(
                        ResolvedType::StructRef(referenced.clone()),
                    ))),
                    optional,
                    documentation: None,
                })
            }
            SyntacticTypeNode::Other => self.resolve_field(name, ty, optional, None, module),
        }
    }

    /// Resolve one field end to end: dispatch, apply the recursion-box
    /// rule, then wrap in `option` if the property is optional and the
    /// result isn't already `option` (spec §4.2.3).
    pub(crate) fn resolve_field(
        &mut self,
        name: &str,
        ty: &Rc<dyn TypeHandle>,
        optional: bool,
        documentation: Option<String>,
        module: &str,
    ) -> Result<Field, ConvertError> {
        let saved_field = std::mem::replace(&mut self.current_field, name.to_string());
        let resolved = self.resolve_type(ty, module);
        self.current_field = saved_field;
        let resolved = self.apply_recursion_rule(resolved?);
        let resolved = if optional && !resolved.is_option() {
            ResolvedType::option(resolved)
        } else {
            resolved
        };
        Ok(Field {
            name: name.to_string(),
            ty: resolved,
            optional,
            documentation,
        })
    }
}
