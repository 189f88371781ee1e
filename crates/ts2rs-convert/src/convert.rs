//! The Convert façade (spec §4.4): composes the Resolver and Emitter behind
//! a single entry point, the same shape `tsz-cli` wraps its checker pipeline
//! in for callers that just want "check this project and give me the
//! result" without touching the Checker or Binder directly.

use std::fs;

use anyhow::Context;
use tracing::{Level, span};
use ts2rs_common::ConvertError;
use ts2rs_emitter::Emitter;
use ts2rs_host::HostQuery;
use ts2rs_resolver::Resolver;

use crate::options::ConvertOptions;

/// The façade's result: rendered source text, the names actually emitted
/// (in emission order), and every warning accumulated along the way (spec
/// §4.4: "returns `{ text, emitted_names, warnings }`"; §6.3 defines
/// `warnings` as an ordered list of strings, each `Warning` flattened to
/// text at this boundary — the structured reason stays internal to the
/// Resolver).
pub struct ConvertOutput {
    pub text: String,
    pub emitted_names: Vec<String>,
    pub warnings: Vec<String>,
}

/// Run the full Resolver → Emitter pipeline against `host` and `options`,
/// optionally writing the rendered text to `options.output_path`.
pub fn convert(options: &ConvertOptions, host: &dyn HostQuery) -> anyhow::Result<ConvertOutput> {
    let _span = span!(Level::DEBUG, "convert", entry = %options.entry_file).entered();

    validate_entry_module(options, host)?;

    let resolver = Resolver::new(host, options.entry_file.clone(), options.resolver.clone());
    let outcome = resolver.resolve()?;

    let emitter = Emitter::new(options.emitter.clone());
    let emitted = emitter.emit(&outcome.collected);

    if let Some(path) = &options.output_path {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output directory '{}'", parent.display()))?;
            }
        }
        fs::write(path, &emitted.text).with_context(|| format!("writing output file '{}'", path.display()))?;
    }

    Ok(ConvertOutput {
        text: emitted.text,
        emitted_names: emitted.emitted_names,
        warnings: outcome.warnings.iter().map(|w| w.to_string()).collect(),
    })
}

/// Spec §4.4's first validation step: fail fast with a clear message rather
/// than let a missing entry module surface only as an empty output or, when
/// root type names are configured, as an opaque `TypeNotFound` for the first
/// name tried.
fn validate_entry_module(options: &ConvertOptions, host: &dyn HostQuery) -> Result<(), ConvertError> {
    if !options.resolver.type_names.is_empty() {
        return Ok(());
    }
    if host.exported_names(&options.entry_file).is_empty() {
        return Err(ConvertError::HostQueryFailure(format!(
            "entry module '{}' exports no interfaces, type aliases, or enums",
            options.entry_file
        )));
    }
    Ok(())
}
