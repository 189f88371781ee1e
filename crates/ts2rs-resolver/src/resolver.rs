//! The Resolver's state and entry points (spec §4.2.1–§4.2.2).

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::{Level, span};

use ts2rs_common::limits::{MAX_TYPE_RESOLUTION_DEPTH, MAX_WARNINGS};
use ts2rs_common::{ConvertError, Warning, WarningReason};
use ts2rs_host::{Declaration, DeclarationKind, HostQuery};
use ts2rs_ir::CollectedType;

use crate::options::ResolverOptions;

/// The outcome of a completed `resolve()` run: the collected types in
/// insertion order (spec §4.2.1, invariant 1), plus every accumulated
/// warning.
#[derive(Debug)]
pub struct ResolveOutcome {
    pub collected: Vec<CollectedType>,
    pub warnings: Vec<Warning>,
}

/// Drives discovery, recursion control, classification, and fallback
/// accounting over the surface type graph (spec §4.2). Owns the
/// `collected` map for exactly one run; a fresh `Resolver` is constructed
/// per conversion (spec §5: "No shared mutable state exists across
/// runs").
pub struct Resolver<'h> {
    pub(crate) host: &'h dyn HostQuery,
    pub(crate) entry_module: String,
    pub(crate) options: ResolverOptions,
    pub(crate) collected: IndexMap<String, CollectedType>,
    pub(crate) processing: FxHashSet<String>,
    pub(crate) type_params_in_scope: FxHashSet<String>,
    pub(crate) warnings: Vec<Warning>,
    pub(crate) depth: usize,
    /// Name of the field currently being resolved, tracked only so an
    /// unresolvable-named-union fallback at a use site (spec §8.4 scenario
    /// 6) can name "both the alias and the using field" in its warning.
    /// Updated around top-level field resolution, not threaded through
    /// every nested `resolve_type` call.
    pub(crate) current_field: String,
}

impl<'h> Resolver<'h> {
    pub fn new(host: &'h dyn HostQuery, entry_module: impl Into<String>, options: ResolverOptions) -> Self {
        Self {
            host,
            entry_module: entry_module.into(),
            options,
            collected: IndexMap::new(),
            processing: FxHashSet::default(),
            type_params_in_scope: FxHashSet::default(),
            warnings: Vec::new(),
            depth: 0,
            current_field: String::from("<root>"),
        }
    }

    /// Entry point (spec §4.2.1). Resolves either the configured root type
    /// names, or (when none were given) every exported declaration of the
    /// entry module.
    pub fn resolve(mut self) -> Result<ResolveOutcome, ConvertError> {
        let type_names = self.options.type_names.clone();
        if !type_names.is_empty() {
            for name in &type_names {
                self.resolve_by_name(&self.entry_module.clone(), name)?;
            }
        } else {
            let exported = self.host.exported_names(&self.entry_module);
            for name in &exported {
                self.resolve_by_name(&self.entry_module.clone(), name)?;
            }
        }

        Ok(ResolveOutcome {
            collected: self.collected.into_values().collect(),
            warnings: self.warnings,
        })
    }

    /// Resolve a single declaration by name, memoizing on `collected` and
    /// short-circuiting on `processing` (spec §4.2.2).
    pub(crate) fn resolve_by_name(&mut self, module: &str, name: &str) -> Result<(), ConvertError> {
        if self.collected.contains_key(name) {
            return Ok(());
        }
        if self.processing.contains(name) {
            return Ok(());
        }

        let _span = span!(Level::DEBUG, "resolve_by_name", name = %name, module = %module).entered();

        let decl = self
            .host
            .find_declaration(module, name)
            .ok_or_else(|| ConvertError::TypeNotFound { name: name.to_string() })?;

        self.processing.insert(name.to_string());
        let result = self.dispatch_declaration(&decl);
        self.processing.remove(name);

        if let Some(collected) = result? {
            self.collected.insert(collected.name().to_string(), collected);
        }
        Ok(())
    }

    fn dispatch_declaration(
        &mut self,
        decl: &std::rc::Rc<dyn Declaration>,
    ) -> Result<Option<CollectedType>, ConvertError> {
        let module = decl.source_path().to_string();
        match decl.kind() {
            DeclarationKind::Interface => self.resolve_interface(decl, &module).map(Some),
            DeclarationKind::TypeAlias => self.resolve_type_alias(decl, &module),
            DeclarationKind::Enum => self.resolve_enum(decl).map(Some),
        }
    }

    /// Guard against pathological nesting that never revisits a name (the
    /// `processing` sentinel can't see deeply nested anonymous object
    /// literals, for instance). Purely a backstop; see `ts2rs_common::limits`.
    pub(crate) fn enter_type(&mut self) -> Result<(), ConvertError> {
        self.depth += 1;
        if self.depth > MAX_TYPE_RESOLUTION_DEPTH {
            return Err(ConvertError::TypeConversion {
                type_name: "<nested type>".to_string(),
                reason: "exceeded maximum type resolution depth".to_string(),
                location: None,
            });
        }
        Ok(())
    }

    pub(crate) fn exit_type(&mut self) {
        self.depth -= 1;
    }

    /// `handle_value_fallback` (spec §4.2.10): in strict mode, raise;
    /// otherwise record a warning and return the `json_value` sentinel.
    pub(crate) fn handle_value_fallback(
        &mut self,
        reason: WarningReason,
        origin: &str,
    ) -> Result<ts2rs_ir::ResolvedType, ConvertError> {
        if self.options.strict {
            return Err(ConvertError::TypeConversion {
                type_name: origin.to_string(),
                reason: reason.to_string(),
                location: None,
            });
        }
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(Warning::new(reason));
        }
        Ok(ts2rs_ir::ResolvedType::JsonValue)
    }

    pub(crate) fn push_warning(&mut self, reason: WarningReason) {
        if self.warnings.len() < MAX_WARNINGS {
            self.warnings.push(Warning::new(reason));
        }
    }
}
