//! Registrar fragment emission for one module.
//!
//! The template appends the module constructor to the built-in module
//! table, checks the result code and, on failure, prints the diagnostic
//! naming both identifiers and returns a non-zero status from the
//! enclosing routine. The fragment assumes the embedding program declares
//! `res` and the `MOD_INIT_FUNC` lookup macro.

use crate::codegen::template::substitute;
use crate::codegen::CodegenError;
use crate::module::registration::ModuleRegistration;

/// Registrar template with `{ext}` and `{fullname}` placeholders.
pub const MODULE_INIT_TEMPLATE: &str = include_str!("module_init.c.tmpl");

/// Renders the registration statements for one module.
pub fn render_module_init(registration: &ModuleRegistration) -> Result<String, CodegenError> {
    registration.validate().map_err(CodegenError::Validation)?;
    substitute(
        MODULE_INIT_TEMPLATE,
        &[
            ("ext", registration.importable_name.as_str()),
            ("fullname", registration.full_name.as_str()),
        ],
    )
    .map_err(CodegenError::Template)
}
