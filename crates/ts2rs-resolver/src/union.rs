//! `resolve_inline_union` (spec §4.2.7): a union that appears inline at a
//! use site rather than as the right-hand side of a named alias.

use std::rc::Rc;

use ts2rs_common::{ConvertError, WarningReason};
use ts2rs_host::TypeHandle;
use ts2rs_ir::ResolvedType;

use crate::resolver::Resolver;

fn is_nullish(m: &Rc<dyn TypeHandle>) -> bool {
    m.is_null() || m.is_undefined()
}

fn is_literal(m: &Rc<dyn TypeHandle>) -> bool {
    m.is_string_literal() || m.is_number_literal() || m.is_boolean_literal()
}

impl<'h> Resolver<'h> {
    pub(crate) fn resolve_inline_union(
        &mut self,
        ty: &Rc<dyn TypeHandle>,
        module: &str,
    ) -> Result<ResolvedType, ConvertError> {
        // Rule 1: an inline union written through a named alias is treated
        // as a reference to that name, unless it carries type arguments
        // (a generic alias instantiation falls through to structural
        // handling below).
        if let Some(alias) = ty.alias_symbol() {
            if ty.type_arguments().is_empty() {
                self.load_and_resolve_named(&alias.name, &alias.declaring_module)?;
                return self.struct_ref_or_unresolvable(alias.name);
            }
        }

        // Rule 2: partition into {null, undefined} and the rest.
        let members = ty.union_members();
        let (nullish, rest): (Vec<_>, Vec<_>) = members.into_iter().partition(is_nullish);
        let has_nullish = !nullish.is_empty();

        match rest.len() {
            // Rule 3: exactly one non-null member.
            1 => {
                let inner = self.resolve_type(&rest[0], module)?;
                let inner = self.apply_recursion_rule(inner);
                if has_nullish {
                    Ok(ResolvedType::option(inner))
                } else {
                    Ok(inner)
                }
            }
            // Boundary: a pure null|undefined union at an inline use site
            // (spec §8.3) — nothing concrete to name, falls back the same
            // way rule 4 does.
            0 => {
                let fallback = self.handle_value_fallback(WarningReason::AmbiguousInlineUnion, "<inline union>")?;
                Ok(ResolvedType::option(fallback))
            }
            // Rule 5: a pure literal union with no null/undefined case
            // applied — can't be turned into a nominal enum inline.
            _ if !has_nullish && rest.iter().all(is_literal) => {
                self.handle_value_fallback(WarningReason::UnnamedLiteralUnion, "<inline union>")
            }
            // Rule 4 / 6: two or more non-null members — anonymous
            // multi-variant unions cannot be named.
            _ => {
                let fallback = self.handle_value_fallback(WarningReason::AmbiguousInlineUnion, "<inline union>")?;
                Ok(ResolvedType::option(fallback))
            }
        }
    }
}
