//! Batch assembly of generated main-source blocks.
//!
//! # Responsibility
//! - Derive the forward-declaration and init blocks for a linked module set.
//! - Substitute both blocks into a caller-supplied main-source template.
//!
//! # Invariants
//! - Block order follows input order.
//! - Duplicate importable names are rejected before any rendering.

use crate::codegen::module_init::render_module_init;
use crate::codegen::template::substitute;
use crate::codegen::CodegenError;
use crate::module::registration::ModuleRegistration;
use log::info;
use std::collections::BTreeSet;

/// Placeholder name for the forward-declaration block.
pub const DECLARE_PLACEHOLDER: &str = "declare";
/// Placeholder name for the registration block.
pub const INIT_PLACEHOLDER: &str = "init";

/// Indent applied to registration-block continuation lines, matching the
/// enclosing function body of the main-source template.
const INIT_BLOCK_INDENT: &str = "    ";

/// Returns one `MOD_INIT(<name>);` forward declaration per module.
pub fn declare_block(registrations: &[ModuleRegistration]) -> Result<String, CodegenError> {
    ensure_unique_importable_names(registrations)?;

    let mut lines = Vec::with_capacity(registrations.len());
    for registration in registrations {
        registration.validate().map_err(CodegenError::Validation)?;
        lines.push(format!("MOD_INIT({});", registration.importable_name));
    }
    Ok(lines.join("\n"))
}

/// Returns the concatenated per-module registrar fragments.
///
/// Continuation lines are re-indented for the enclosing function body, so
/// the block can be substituted at an already-indented placeholder.
pub fn init_block(registrations: &[ModuleRegistration]) -> Result<String, CodegenError> {
    ensure_unique_importable_names(registrations)?;

    let separator = format!("\n{INIT_BLOCK_INDENT}");
    let mut fragments = Vec::with_capacity(registrations.len());
    for registration in registrations {
        let rendered = render_module_init(registration)?;
        fragments.push(rendered.lines().collect::<Vec<_>>().join(separator.as_str()));
    }
    Ok(fragments.join(separator.as_str()))
}

/// Renders a caller-supplied main-source template for the given modules.
///
/// The template is expected to carry `{declare}` at file scope and `{init}`
/// inside a routine that declares `res` and returns non-zero on failure.
/// The template itself comes from the external build step; only the blocks
/// are produced here.
pub fn render_main_source(
    template: &str,
    registrations: &[ModuleRegistration],
) -> Result<String, CodegenError> {
    let declare = declare_block(registrations)?;
    let init = init_block(registrations)?;
    let rendered = substitute(
        template,
        &[
            (DECLARE_PLACEHOLDER, declare.as_str()),
            (INIT_PLACEHOLDER, init.as_str()),
        ],
    )
    .map_err(CodegenError::Template)?;

    info!(
        "event=render_main_source module=codegen status=ok modules={}",
        registrations.len()
    );
    Ok(rendered)
}

fn ensure_unique_importable_names(
    registrations: &[ModuleRegistration],
) -> Result<(), CodegenError> {
    let mut seen = BTreeSet::new();
    for registration in registrations {
        if !seen.insert(registration.importable_name.as_str()) {
            return Err(CodegenError::DuplicateImportableName(
                registration.importable_name.clone(),
            ));
        }
    }
    Ok(())
}
