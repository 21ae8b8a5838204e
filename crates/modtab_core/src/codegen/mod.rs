//! C source generation for statically linked extension modules.
//!
//! # Responsibility
//! - Emit the per-module registrar fragment from the shipped template.
//! - Assemble declaration and init blocks for a whole linked module set.
//!
//! # Invariants
//! - Every registration is validated before any text is rendered.
//! - Generated blocks preserve input module order.

use crate::codegen::template::TemplateError;
use crate::module::registration::RegistrationValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod main_source;
pub mod module_init;
pub mod template;

/// Code generation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    Validation(RegistrationValidationError),
    /// Two modules in one batch would produce the same constructor symbol.
    DuplicateImportableName(String),
    Template(TemplateError),
}

impl Display for CodegenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid module registration: {err}"),
            Self::DuplicateImportableName(value) => {
                write!(f, "duplicate importable name in module set: {value}")
            }
            Self::Template(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodegenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateImportableName(_) => None,
            Self::Template(err) => Some(err),
        }
    }
}
