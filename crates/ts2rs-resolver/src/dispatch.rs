//! `resolve_type`: the core dispatcher (spec §4.2.5), applied in a fixed
//! order where the first matching rule wins.

use std::rc::Rc;

use ts2rs_common::{ConvertError, WarningReason};
use ts2rs_host::TypeHandle;
use ts2rs_ir::{CollectedType, Field, PrimitiveKind, ResolvedType};

use crate::resolver::Resolver;
use crate::well_known::{is_internal_symbol, is_well_known_alias, is_well_known_container};

impl<'h> Resolver<'h> {
    /// `resolve_type(type, in_module)` (spec §4.2.5). `module` is the
    /// module the occurrence was written in — used to resolve any named
    /// reference found inside `ty`.
    pub(crate) fn resolve_type(
        &mut self,
        ty: &Rc<dyn TypeHandle>,
        module: &str,
    ) -> Result<ResolvedType, ConvertError> {
        self.enter_type()?;
        let result = self.resolve_type_inner(ty, module);
        self.exit_type();
        result
    }

    fn resolve_type_inner(
        &mut self,
        ty: &Rc<dyn TypeHandle>,
        module: &str,
    ) -> Result<ResolvedType, ConvertError> {
        // Step 1: bare type-parameter occurrence.
        if ty.is_type_parameter() {
            let name = ty
                .symbol()
                .map(|s| s.name)
                .unwrap_or_else(|| "<type parameter>".to_string());
            return self.handle_value_fallback(
                WarningReason::TypeParameterUnresolved { name: name.clone() },
                &name,
            );
        }

        // Step 2: user-named alias reference (built-ins excluded).
        if let Some(alias) = ty.alias_symbol() {
            if !is_well_known_alias(&alias.name) {
                self.load_and_resolve_named(&alias.name, &alias.declaring_module)?;
                return self.struct_ref_or_unresolvable(alias.name);
            }
        }

        // Step 3: null / undefined.
        if ty.is_null() {
            return Ok(ResolvedType::Primitive(PrimitiveKind::Null));
        }
        if ty.is_undefined() {
            return Ok(ResolvedType::Primitive(PrimitiveKind::Undefined));
        }

        // Step 4: primitive string/number/boolean, including their literal
        // forms — a bare literal collapses to its ground primitive unless
        // it participates in a named literal union (handled separately by
        // `resolve_literal_union_as_enum`) or a discriminated-union tag
        // (built directly from `literal_value()`, never through here).
        if ty.is_string() {
            return Ok(ResolvedType::Primitive(PrimitiveKind::String));
        }
        if ty.is_number() {
            return Ok(ResolvedType::Primitive(PrimitiveKind::Number));
        }
        if ty.is_boolean() {
            return Ok(ResolvedType::Primitive(PrimitiveKind::Boolean));
        }

        // Step 5: explicit `any`/`unknown` fallback, no warning.
        if ty.is_any() || ty.is_unknown() {
            return Ok(ResolvedType::JsonValue);
        }

        // Step 6: array.
        if ty.is_array() {
            let element = ty
                .array_element()
                .expect("is_array() implies array_element() is Some");
            let resolved = self.resolve_type(&element, module)?;
            return Ok(ResolvedType::Array(Box::new(resolved)));
        }

        // Step 7: tuple.
        if ty.is_tuple() {
            let mut elements = Vec::new();
            for element in ty.tuple_elements() {
                elements.push(self.resolve_type(&element, module)?);
            }
            return Ok(ResolvedType::Tuple(elements));
        }

        // Step 8: inline union.
        if ty.is_union() {
            return self.resolve_inline_union(ty, module);
        }

        // Step 9: index signature without own properties.
        if ty.property_names().is_empty() {
            if let Some(value) = ty.string_index_value_type() {
                let value = self.resolve_type(&value, module)?;
                return Ok(ResolvedType::Record(
                    Box::new(ResolvedType::Primitive(PrimitiveKind::String)),
                    Box::new(value),
                ));
            }
            if let Some(value) = ty.number_index_value_type() {
                let value = self.resolve_type(&value, module)?;
                return Ok(ResolvedType::Record(
                    Box::new(ResolvedType::Primitive(PrimitiveKind::Number)),
                    Box::new(value),
                ));
            }
        }

        // Step 10: named object from an external package, materialized
        // structurally under its own alias name.
        if let Some(symbol) = ty.alias_symbol().or_else(|| ty.symbol()) {
            if symbol.is_external_package && !ty.property_names().is_empty() {
                self.materialize_external_struct(&symbol.name, ty, module)?;
                return Ok(ResolvedType::StructRef(symbol.name));
            }
        }

        // Step 11: well-known symbol names.
        if let Some(alias) = ty.alias_symbol().or_else(|| ty.symbol()) {
            if is_internal_symbol(&alias.name) {
                return self.handle_value_fallback(
                    WarningReason::InternalSymbol { name: alias.name.clone() },
                    &alias.name,
                );
            }
            if is_well_known_container(&alias.name) {
                return self.resolve_well_known_container(&alias.name, ty, module);
            }
        }

        // Step 12: other named nominal type from user sources (referenced
        // directly, not through an alias — e.g. a bare interface/enum
        // reference where `alias_symbol()` is unset but `symbol()` is).
        if let Some(symbol) = ty.symbol() {
            self.load_and_resolve_named(&symbol.name, &symbol.declaring_module)?;
            return Ok(ResolvedType::StructRef(symbol.name));
        }

        // Step 13: anonymous object with properties.
        if ty.is_object() && !ty.property_names().is_empty() {
            let fields = self.resolve_anonymous_fields(ty, module)?;
            return Ok(ResolvedType::StructRef(
                self.collect_anonymous_struct(fields),
            ));
        }

        // Step 14: fallthrough.
        self.handle_value_fallback(WarningReason::Fallthrough { of: "<type>".to_string() }, "<type>")
    }

    /// Render one of the well-known container aliases (spec §4.2.5 step
    /// 11): `Array`/`ReadonlyArray`, `Record`, `Map`, `Set`, `Date`, or
    /// `Promise` (fatal — categorically unrepresentable in JSON).
    fn resolve_well_known_container(
        &mut self,
        name: &str,
        ty: &Rc<dyn TypeHandle>,
        module: &str,
    ) -> Result<ResolvedType, ConvertError> {
        let args = ty.type_arguments();
        match name {
            "Array" | "ReadonlyArray" => {
                let element = self.type_argument_or_json(&args, 0, module)?;
                Ok(ResolvedType::Array(Box::new(element)))
            }
            "Record" => {
                let key = self.type_argument_or_json(&args, 0, module)?;
                let value = self.type_argument_or_json(&args, 1, module)?;
                Ok(ResolvedType::Record(Box::new(key), Box::new(value)))
            }
            "Map" => {
                let key = self.type_argument_or_json(&args, 0, module)?;
                let value = self.type_argument_or_json(&args, 1, module)?;
                Ok(ResolvedType::Map(Box::new(key), Box::new(value)))
            }
            "Set" => {
                let element = self.type_argument_or_json(&args, 0, module)?;
                Ok(ResolvedType::Set(Box::new(element)))
            }
            "Date" => Ok(ResolvedType::Primitive(PrimitiveKind::String)),
            "Promise" => Err(ConvertError::NonSerializable {
                name: "Promise".to_string(),
            }),
            _ => unreachable!("is_well_known_container guards this match"),
        }
    }

    /// Resolve `args[index]`, falling back to `json_value` with a warning
    /// if a well-known generic was used without the type argument its
    /// rendering needs (malformed input the type checker would normally
    /// have already rejected).
    fn type_argument_or_json(
        &mut self,
        args: &[Rc<dyn TypeHandle>],
        index: usize,
        module: &str,
    ) -> Result<ResolvedType, ConvertError> {
        match args.get(index) {
            Some(arg) => self.resolve_type(arg, module),
            None => self.handle_value_fallback(
                WarningReason::Fallthrough {
                    of: "<missing type argument>".to_string(),
                },
                "<missing type argument>",
            ),
        }
    }

    /// After resolving a named alias, report `struct_ref(name)` if it was
    /// collected (or is still on the `processing` stack — the in-progress
    /// owner will finish it), otherwise fall back to `json_value` naming
    /// both the alias and the field that used it (spec §4.2.4 item 3's
    /// "uses become json_value" and §8.4 scenario 6).
    pub(crate) fn struct_ref_or_unresolvable(&mut self, name: String) -> Result<ResolvedType, ConvertError> {
        if self.collected.contains_key(&name) || self.processing.contains(&name) {
            return Ok(ResolvedType::StructRef(name));
        }
        let using_field = self.current_field.clone();
        self.handle_value_fallback(
            WarningReason::UnresolvableNamedUnion { alias: name.clone(), using_field },
            &name,
        )
    }

    pub(crate) fn load_and_resolve_named(&mut self, name: &str, declaring_module: &str) -> Result<(), ConvertError> {
        let module = if declaring_module.is_empty() {
            self.entry_module.clone()
        } else {
            declaring_module.to_string()
        };
        self.host.load_module(&module);
        self.resolve_by_name(&module, name)
    }

    fn materialize_external_struct(
        &mut self,
        name: &str,
        ty: &Rc<dyn TypeHandle>,
        module: &str,
    ) -> Result<(), ConvertError> {
        if self.collected.contains_key(name) {
            return Ok(());
        }
        let fields = self.resolve_anonymous_fields(ty, module)?;
        self.collected.insert(
            name.to_string(),
            CollectedType::Struct {
                name: name.to_string(),
                fields,
                documentation: None,
                type_parameters: Vec::new(),
            },
        );
        Ok(())
    }

    /// Resolve every property of an object-shaped `TypeHandle` into
    /// `Field`s, applying the optional-wrap and recursion-box rules per
    /// field (shared by steps 10 and 13, and by the anonymous-struct
    /// branches of `resolve_type_alias`).
    pub(crate) fn resolve_anonymous_fields(
        &mut self,
        ty: &Rc<dyn TypeHandle>,
        module: &str,
    ) -> Result<Vec<Field>, ConvertError> {
        let mut fields = Vec::new();
        for name in ty.property_names() {
            let prop_ty = ty
                .property_type(&name)
                .expect("property_names()/property_type() mismatch");
            let optional = ty.property_is_optional(&name);
            let type_node = ty.property_type_node(&name);
            let mut field = self.resolve_property_with_node(&name, &type_node, &prop_ty, optional, module)?;
            field.ty = self.apply_recursion_rule(field.ty);
            fields.push(field);
        }
        Ok(fields)
    }

    /// Collect an inline anonymous object literal (spec §4.2.5 step 13;
    /// §9 open question 3: "emitted inline and not named or deduplicated").
    /// This workspace still needs *some* stable name to hang a
    /// `struct_ref` off of in the IR, so it mints one from a counter; the
    /// Emitter is responsible for inlining it rather than rendering it as
    /// a standalone top-level declaration.
    pub(crate) fn collect_anonymous_struct(&mut self, fields: Vec<Field>) -> String {
        let name = format!("__Anonymous{}", self.collected.len());
        self.collected.insert(
            name.clone(),
            CollectedType::Struct {
                name: name.clone(),
                fields,
                documentation: None,
                type_parameters: Vec::new(),
            },
        );
        name
    }

    /// Apply the recursion-box rule (spec invariant 3 / §4.2.3) to a fully
    /// resolved type: any `struct_ref(N)` reachable without passing
    /// through one of the six indirection-providing constructors, where
    /// `N` is currently on the resolution stack, is wrapped in `box`.
    pub(crate) fn apply_recursion_rule(&self, ty: ResolvedType) -> ResolvedType {
        Self::rewrite_boxing(ty, &self.processing, false)
    }

    fn rewrite_boxing(
        ty: ResolvedType,
        processing: &rustc_hash::FxHashSet<String>,
        protected: bool,
    ) -> ResolvedType {
        match ty {
            ResolvedType::StructRef(name) => {
                if !protected && processing.contains(&name) {
                    ResolvedType::Box(Box::new(ResolvedType::StructRef(name)))
                } else {
                    ResolvedType::StructRef(name)
                }
            }
            ResolvedType::Option(inner) => {
                ResolvedType::Option(Box::new(Self::rewrite_boxing(*inner, processing, true)))
            }
            ResolvedType::Array(inner) => {
                ResolvedType::Array(Box::new(Self::rewrite_boxing(*inner, processing, true)))
            }
            ResolvedType::Box(inner) => {
                ResolvedType::Box(Box::new(Self::rewrite_boxing(*inner, processing, true)))
            }
            ResolvedType::Record(k, v) => ResolvedType::Record(
                Box::new(Self::rewrite_boxing(*k, processing, true)),
                Box::new(Self::rewrite_boxing(*v, processing, true)),
            ),
            ResolvedType::Map(k, v) => ResolvedType::Map(
                Box::new(Self::rewrite_boxing(*k, processing, true)),
                Box::new(Self::rewrite_boxing(*v, processing, true)),
            ),
            ResolvedType::Set(inner) => {
                ResolvedType::Set(Box::new(Self::rewrite_boxing(*inner, processing, true)))
            }
            ResolvedType::Tuple(elements) => ResolvedType::Tuple(
                elements
                    .into_iter()
                    .map(|e| Self::rewrite_boxing(e, processing, protected))
                    .collect(),
            ),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use ts2rs_host::MemoryHost;
    use ts2rs_ir::PrimitiveKind;

    use super::*;
    use crate::options::ResolverOptions;

    fn resolver(host: &MemoryHost) -> Resolver<'_> {
        Resolver::new(host, "entry", ResolverOptions::new())
    }

    #[test]
    fn boxing_only_touches_names_still_on_the_processing_stack() {
        let host = MemoryHost::new();
        let mut r = resolver(&host);
        r.processing.insert("Node".to_string());

        let boxed = r.apply_recursion_rule(ResolvedType::StructRef("Node".to_string()));
        assert_eq!(boxed, ResolvedType::Box(Box::new(ResolvedType::StructRef("Node".to_string()))));

        let untouched = r.apply_recursion_rule(ResolvedType::StructRef("Other".to_string()));
        assert_eq!(untouched, ResolvedType::StructRef("Other".to_string()));
    }

    #[test]
    fn boxing_does_not_descend_through_option_array_or_map() {
        let host = MemoryHost::new();
        let mut r = resolver(&host);
        r.processing.insert("Node".to_string());

        let via_option = ResolvedType::option(ResolvedType::StructRef("Node".to_string()));
        assert_eq!(r.apply_recursion_rule(via_option.clone()), via_option);

        let via_array = ResolvedType::Array(Box::new(ResolvedType::StructRef("Node".to_string())));
        assert_eq!(r.apply_recursion_rule(via_array.clone()), via_array);

        let via_map = ResolvedType::Map(
            Box::new(ResolvedType::Primitive(PrimitiveKind::String)),
            Box::new(ResolvedType::StructRef("Node".to_string())),
        );
        assert_eq!(r.apply_recursion_rule(via_map.clone()), via_map);
    }

    #[test]
    fn boxing_descends_into_tuple_elements_without_protection() {
        let host = MemoryHost::new();
        let mut r = resolver(&host);
        r.processing.insert("Node".to_string());

        let tuple = ResolvedType::Tuple(vec![ResolvedType::StructRef("Node".to_string())]);
        assert_eq!(
            r.apply_recursion_rule(tuple),
            ResolvedType::Tuple(vec![ResolvedType::Box(Box::new(ResolvedType::StructRef("Node".to_string())))])
        );
    }
}
