//! `resolve_type_alias` (spec §4.2.4): dispatches on the aliased type in a
//! fixed priority order — tuple, non-array object, union (split further
//! into literal-union-as-enum / discriminated / general), then any other
//! named nominal reference.

use std::rc::Rc;

use ts2rs_common::naming::{numeric_variant_name, to_variant_name};
use ts2rs_common::ConvertError;
use ts2rs_host::{Declaration, TypeHandle};
use ts2rs_ir::{CollectedType, EnumMemberValue, EnumVariant, LiteralValue, ResolvedType, UnionVariant};

use crate::resolver::Resolver;

fn is_literal_or_nullish(m: &Rc<dyn TypeHandle>) -> bool {
    m.is_string_literal() || m.is_number_literal() || m.is_boolean_literal() || m.is_null() || m.is_undefined()
}

/// spec §4.2.6: the first property name, in insertion order of the first
/// object member's properties, that is declared as a literal type on every
/// object member in the union.
fn find_discriminator(members: &[Rc<dyn TypeHandle>]) -> Option<String> {
    let object_members: Vec<&Rc<dyn TypeHandle>> = members.iter().filter(|m| m.is_object()).collect();
    if object_members.len() < 2 {
        return None;
    }
    let first = object_members[0];
    for candidate in first.property_names() {
        let all_literal_tagged = object_members.iter().all(|m| {
            m.property_type(&candidate)
                .is_some_and(|t| t.literal_value().is_some())
        });
        if all_literal_tagged {
            return Some(candidate);
        }
    }
    None
}

fn literal_variant_key(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Str(s) => s.clone(),
        LiteralValue::Num(n) => format_number(*n),
        LiteralValue::Bool(b) => b.to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A general (non-discriminated, non-literal) union variant's name: the
/// referenced struct's own name when the variant resolves to one, or a
/// positional placeholder otherwise — the spec does not name a convention
/// for this case, see DESIGN.md.
fn general_variant_name(resolved: &ResolvedType, index: usize) -> String {
    match resolved {
        ResolvedType::StructRef(name) => name.clone(),
        _ => format!("Variant{index}"),
    }
}

impl<'h> Resolver<'h> {
    pub(crate) fn resolve_type_alias(
        &mut self,
        decl: &Rc<dyn Declaration>,
        module: &str,
    ) -> Result<Option<CollectedType>, ConvertError> {
        let aliased = decl
            .aliased_type()
            .expect("a TypeAlias declaration must carry an aliased_type");
        let documentation = decl.documentation().map(|s| s.to_string());

        // 1. Tuple.
        if aliased.is_tuple() {
            let mut elements = Vec::new();
            for el in aliased.tuple_elements() {
                elements.push(self.resolve_type(&el, module)?);
            }
            return Ok(Some(CollectedType::TypeAlias {
                name: decl.name().to_string(),
                aliased: ResolvedType::Tuple(elements),
                documentation,
            }));
        }

        // 2. Non-array object with at least one own property.
        if aliased.is_object() && !aliased.property_names().is_empty() {
            let fields = self.resolve_anonymous_fields(&aliased, module)?;
            return Ok(Some(CollectedType::Struct {
                name: decl.name().to_string(),
                fields,
                documentation,
                type_parameters: decl.type_parameters().to_vec(),
            }));
        }

        // 3. Union.
        if aliased.is_union() {
            let members = aliased.union_members();
            if members.iter().all(is_literal_or_nullish) {
                return Ok(Some(self.resolve_literal_union_as_enum(decl, &members)));
            }
            if let Some(discriminator) = find_discriminator(&members) {
                return self
                    .resolve_discriminated_union(decl, &members, &discriminator, module)
                    .map(Some);
            }
            // Unresolvable general unions are deliberately not collected
            // (spec §4.2.4 item 3 / §9 open question 1); use sites fall
            // back to json_value via `struct_ref_or_unresolvable`.
            return self.resolve_general_union(decl, &members, module);
        }

        // 4. Other aliased type: a reference to a named struct/enum/union,
        // or some other structural type. Collect under the alias's own
        // name when the result is nominal.
        let resolved = self.resolve_type(&aliased, module)?;
        Ok(Some(CollectedType::TypeAlias {
            name: decl.name().to_string(),
            aliased: resolved,
            documentation,
        }))
    }

    /// §4.2.4 item 3, first branch: every member is a literal, `null`, or
    /// `undefined`. String literals make the whole enum string-valued;
    /// numeric literals get positional `Value<n>` names (spec §4.2.9's
    /// sibling convention in `ts2rs_common::naming::numeric_variant_name`).
    /// A boolean literal has no natural spelling of its own either, so it's
    /// named and carried the same way a string literal is (there is no
    /// `EnumMemberValue::Bool` in the closed IR — see DESIGN.md).
    fn resolve_literal_union_as_enum(&mut self, decl: &Rc<dyn Declaration>, members: &[Rc<dyn TypeHandle>]) -> CollectedType {
        let mut variants = Vec::new();
        let mut is_string_enum = false;
        let mut ordinal = 0usize;
        for member in members {
            // Stripped per invariant 5 — null/undefined never appear in the
            // resulting IR.
            if member.is_null() || member.is_undefined() {
                continue;
            }
            let Some(lit) = member.literal_value() else {
                continue;
            };
            let (name, value) = match &lit {
                LiteralValue::Str(s) => (to_variant_name(s), EnumMemberValue::Str(s.clone())),
                LiteralValue::Num(n) => (numeric_variant_name(ordinal), EnumMemberValue::Num(*n as i64)),
                LiteralValue::Bool(b) => {
                    is_string_enum = true;
                    (to_variant_name(&b.to_string()), EnumMemberValue::Str(b.to_string()))
                }
            };
            if matches!(lit, LiteralValue::Str(_)) {
                is_string_enum = true;
            }
            ordinal += 1;
            variants.push(EnumVariant {
                name,
                value: Some(value),
                documentation: None,
            });
        }

        CollectedType::Enum {
            name: decl.name().to_string(),
            variants,
            is_string_enum,
            documentation: decl.documentation().map(|s| s.to_string()),
        }
    }

    /// §4.2.8: variants of a discriminated union omit the discriminator
    /// field from their payload when the tag is a string literal (it's
    /// reconstructed from the variant tag at serialization time), but
    /// retain it when the tag is numeric or boolean (spec §9's
    /// "discriminator omission asymmetry").
    fn resolve_discriminated_union(
        &mut self,
        decl: &Rc<dyn Declaration>,
        members: &[Rc<dyn TypeHandle>],
        discriminator: &str,
        module: &str,
    ) -> Result<CollectedType, ConvertError> {
        let mut variants = Vec::new();
        for member in members {
            if !member.is_object() {
                // null/undefined stripped per invariant 5; anything else
                // mixed into a "discriminated" union is malformed input a
                // real type checker would already have rejected.
                continue;
            }
            let disc_value = member
                .property_type(discriminator)
                .and_then(|t| t.literal_value())
                .expect("find_discriminator only selects properties that are literal on every member");
            let variant_name = to_variant_name(&literal_variant_key(&disc_value));
            let keep_discriminator = !matches!(disc_value, LiteralValue::Str(_));

            let mut fields = Vec::new();
            for name in member.property_names() {
                if name == discriminator && !keep_discriminator {
                    continue;
                }
                let prop_ty = member
                    .property_type(&name)
                    .expect("property_names()/property_type() mismatch");
                let optional = member.property_is_optional(&name);
                let type_node = member.property_type_node(&name);
                let mut field = self.resolve_property_with_node(&name, &type_node, &prop_ty, optional, module)?;
                field.ty = self.apply_recursion_rule(field.ty);
                fields.push(field);
            }

            let ty = if fields.is_empty() {
                None
            } else {
                Some(ResolvedType::StructRef(self.collect_anonymous_struct(fields)))
            };

            variants.push(UnionVariant {
                name: variant_name,
                ty,
                discriminator_value: Some(disc_value),
                documentation: None,
            });
        }

        Ok(CollectedType::Union {
            name: decl.name().to_string(),
            variants,
            discriminator: Some(discriminator.to_string()),
            documentation: decl.documentation().map(|s| s.to_string()),
        })
    }

    /// §4.2.4 item 3, final branch: a named union that is neither a pure
    /// literal union nor discriminated. Returns `Ok(None)` (the alias is
    /// not collected) the moment any variant is unresolvable, matching the
    /// observed-source behavior spec §9 open question 1 calls out.
    fn resolve_general_union(
        &mut self,
        decl: &Rc<dyn Declaration>,
        members: &[Rc<dyn TypeHandle>],
        module: &str,
    ) -> Result<Option<CollectedType>, ConvertError> {
        let mut variants = Vec::new();
        let mut unresolvable = false;
        let mut index = 0usize;
        for member in members {
            if member.is_null() || member.is_undefined() {
                continue;
            }
            let resolved = self.resolve_type(member, module)?;
            let resolved = self.apply_recursion_rule(resolved);
            if matches!(resolved, ResolvedType::JsonValue) {
                unresolvable = true;
            }
            let name = general_variant_name(&resolved, index);
            index += 1;
            variants.push(UnionVariant {
                name,
                ty: Some(resolved),
                discriminator_value: None,
                documentation: None,
            });
        }

        if unresolvable {
            return Ok(None);
        }

        Ok(Some(CollectedType::Union {
            name: decl.name().to_string(),
            variants,
            discriminator: None,
            documentation: decl.documentation().map(|s| s.to_string()),
        }))
    }
}
