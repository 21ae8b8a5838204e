//! In-process registry modeling the interpreter's built-in module table.

use crate::module::registration::{ModuleRegistration, RegistrationValidationError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One table entry, visible after successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredModule {
    pub registration: ModuleRegistration,
}

impl RegisteredModule {
    /// Returns the constructor lookup recorded for this entry.
    pub fn constructor_reference(&self) -> String {
        self.registration.constructor_reference()
    }
}

/// Append seam for the built-in module table.
///
/// The table is process-global in a real embedding. Keeping it behind a
/// trait makes the dependency explicit at the startup call site and lets
/// the batch be exercised against failing doubles.
pub trait ModuleTable {
    fn append(&mut self, registration: &ModuleRegistration) -> Result<(), InittabError>;
}

/// Registry of module constructors consulted before filesystem import.
///
/// Entries are append-only: there is deliberately no removal API.
#[derive(Debug, Default)]
pub struct InittabRegistry {
    entries: BTreeMap<String, RegisteredModule>,
}

impl InittabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry consulted the next time `importable_name` is
    /// imported.
    pub fn lookup(&self, importable_name: &str) -> Option<&RegisteredModule> {
        self.entries.get(importable_name)
    }

    /// Returns sorted importable names.
    pub fn importable_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl ModuleTable for InittabRegistry {
    /// Appends one module constructor after registration validation.
    ///
    /// Double registration of the same importable name is rejected rather
    /// than silently replacing the earlier constructor.
    fn append(&mut self, registration: &ModuleRegistration) -> Result<(), InittabError> {
        registration.validate().map_err(InittabError::Validation)?;
        if self
            .entries
            .contains_key(registration.importable_name.as_str())
        {
            return Err(InittabError::DuplicateImportableName(
                registration.importable_name.clone(),
            ));
        }

        self.entries.insert(
            registration.importable_name.clone(),
            RegisteredModule {
                registration: registration.clone(),
            },
        );
        Ok(())
    }
}

/// Built-in module table registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InittabError {
    Validation(RegistrationValidationError),
    DuplicateImportableName(String),
}

impl Display for InittabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid module registration: {err}"),
            Self::DuplicateImportableName(value) => {
                write!(f, "importable name already registered: {value}")
            }
        }
    }
}

impl Error for InittabError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateImportableName(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InittabError, InittabRegistry, ModuleTable};
    use crate::module::registration::ModuleRegistration;

    #[test]
    fn appends_and_looks_up_module() {
        let mut table = InittabRegistry::new();
        table
            .append(&ModuleRegistration::from_full_name(
                "pkglib.tests.integration.gcov_ext",
            ))
            .expect("registration");

        assert_eq!(table.len(), 1);
        let entry = table.lookup("gcov_ext").expect("registered module");
        assert_eq!(
            entry.registration.full_name,
            "pkglib.tests.integration.gcov_ext"
        );
        assert_eq!(entry.constructor_reference(), "MOD_INIT_FUNC(gcov_ext)");
    }

    #[test]
    fn rejects_duplicate_importable_name() {
        let mut table = InittabRegistry::new();
        let registration = ModuleRegistration::new("ext", "pkg.a.ext");
        table.append(&registration).expect("first registration");

        let err = table
            .append(&ModuleRegistration::new("ext", "pkg.b.ext"))
            .expect_err("duplicate registration must fail");
        assert_eq!(err, InittabError::DuplicateImportableName("ext".to_string()));
        // The first entry stays authoritative.
        let entry = table.lookup("ext").expect("registered module");
        assert_eq!(entry.registration.full_name, "pkg.a.ext");
    }

    #[test]
    fn rejects_invalid_registration_before_insert() {
        let mut table = InittabRegistry::new();
        let err = table
            .append(&ModuleRegistration::new("not an identifier", "pkg.ext"))
            .expect_err("invalid registration must fail");
        assert!(matches!(err, InittabError::Validation(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn lists_sorted_importable_names() {
        let mut table = InittabRegistry::new();
        table
            .append(&ModuleRegistration::from_full_name("pkg.zeta"))
            .expect("zeta registration");
        table
            .append(&ModuleRegistration::from_full_name("pkg.alpha"))
            .expect("alpha registration");

        assert_eq!(table.importable_names(), vec!["alpha", "zeta"]);
    }
}
