//! `resolve_enum` (spec §4.2.9): preserves declared member order; numeric
//! values keep their declared integers, falling back to positional
//! auto-numbering when the surface language's own enum left a member's
//! value implicit.

use std::rc::Rc;

use ts2rs_common::ConvertError;
use ts2rs_host::Declaration;
use ts2rs_ir::{CollectedType, EnumMemberValue, EnumVariant};

use crate::resolver::Resolver;

impl<'h> Resolver<'h> {
    pub(crate) fn resolve_enum(&mut self, decl: &Rc<dyn Declaration>) -> Result<CollectedType, ConvertError> {
        let members = decl.enum_members();
        let is_string_enum = members
            .iter()
            .any(|m| matches!(m.value, Some(EnumMemberValue::Str(_))));

        let variants = members
            .iter()
            .enumerate()
            .map(|(position, member)| EnumVariant {
                name: member.name.clone(),
                value: Some(
                    member
                        .value
                        .clone()
                        .unwrap_or(EnumMemberValue::Num(position as i64)),
                ),
                documentation: member.documentation.clone(),
            })
            .collect();

        Ok(CollectedType::Enum {
            name: decl.name().to_string(),
            variants,
            is_string_enum,
            documentation: decl.documentation().map(|s| s.to_string()),
        })
    }
}
