//! Module registration record shared by the table model and code generation.
//!
//! # Responsibility
//! - Define the canonical (importable name, full name) pair for one
//!   statically linked extension module.
//! - Validate identifier constraints before table or codegen use.
//!
//! # Invariants
//! - `importable_name` is identifier-safe and used as the unique table key.
//! - `full_name` is display-only and may contain arbitrary text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static IMPORTABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid importable name regex"));

/// Registration record for one extension module linked as a builtin.
///
/// The pair has no runtime representation of its own: it is consumed once
/// while the built-in module table is populated, strictly before the first
/// import, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRegistration {
    /// Identifier-safe name used as the table lookup key and to form the
    /// constructor reference, e.g. `ext`.
    pub importable_name: String,
    /// Dotted human-readable name used only in diagnostics, e.g.
    /// `pkglib.tests.integration.gcov_ext`.
    pub full_name: String,
}

impl ModuleRegistration {
    /// Creates a registration from both names.
    ///
    /// This constructor does not validate; call [`ModuleRegistration::validate`].
    pub fn new(importable_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            importable_name: importable_name.into(),
            full_name: full_name.into(),
        }
    }

    /// Creates a registration deriving the importable name from the last
    /// dot-separated segment of `full_name`.
    pub fn from_full_name(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let importable_name = short_name(&full_name).to_string();
        Self {
            importable_name,
            full_name,
        }
    }

    /// Validates declaration-level registration invariants.
    ///
    /// # Errors
    /// - Returns an error when `importable_name` is empty or not
    ///   identifier-shaped.
    /// - Returns an error when `full_name` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), RegistrationValidationError> {
        if self.importable_name.is_empty() {
            return Err(RegistrationValidationError::EmptyImportableName);
        }
        if !IMPORTABLE_NAME_RE.is_match(self.importable_name.as_str()) {
            return Err(RegistrationValidationError::InvalidImportableName(
                self.importable_name.clone(),
            ));
        }
        if self.full_name.trim().is_empty() {
            return Err(RegistrationValidationError::EmptyFullName);
        }
        Ok(())
    }

    /// Returns the textual constructor lookup emitted into generated init
    /// code, e.g. `MOD_INIT_FUNC(ext)`.
    pub fn constructor_reference(&self) -> String {
        format!("MOD_INIT_FUNC({})", self.importable_name)
    }
}

/// Returns the last dot-separated segment of a dotted module path.
///
/// The whole input is returned when it contains no dot.
pub fn short_name(full_name: &str) -> &str {
    match full_name.rsplit_once('.') {
        Some((_, tail)) => tail,
        None => full_name,
    }
}

/// Registration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    EmptyImportableName,
    InvalidImportableName(String),
    EmptyFullName,
}

impl Display for RegistrationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImportableName => write!(f, "importable name must not be empty"),
            Self::InvalidImportableName(value) => {
                write!(f, "importable name is not identifier-safe: `{value}`")
            }
            Self::EmptyFullName => write!(f, "full name must not be empty"),
        }
    }
}

impl Error for RegistrationValidationError {}
