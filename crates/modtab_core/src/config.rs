//! Link manifest for the static module set.
//!
//! # Responsibility
//! - Parse the JSON manifest naming the modules to link as builtins.
//! - Produce validated registrations for table and codegen use.
//!
//! # Invariants
//! - A manifest names at least one module.
//! - Every derived registration passes `ModuleRegistration::validate`.

use crate::module::registration::{ModuleRegistration, RegistrationValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

/// Manifest of extension modules to be linked as builtins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkManifest {
    pub modules: Vec<LinkedModule>,
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedModule {
    /// Dotted full module name, e.g. `pkglib.tests.integration.gcov_ext`.
    pub full_name: String,
    /// Table key override; defaults to the last segment of `full_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importable_name: Option<String>,
}

impl LinkedModule {
    /// Returns the registration declared by this entry.
    pub fn registration(&self) -> ModuleRegistration {
        match &self.importable_name {
            Some(name) => ModuleRegistration::new(name.clone(), self.full_name.clone()),
            None => ModuleRegistration::from_full_name(self.full_name.clone()),
        }
    }
}

impl LinkManifest {
    /// Parses and validates a manifest from raw JSON.
    pub fn from_json_str(raw: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(raw).map_err(ManifestError::Parse)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Loads and validates a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path).map_err(ManifestError::Io)?;
        Self::from_json_str(raw.as_str())
    }

    /// Validates declaration-level manifest invariants.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.modules.is_empty() {
            return Err(ManifestError::NoModules);
        }
        for module in &self.modules {
            module
                .registration()
                .validate()
                .map_err(ManifestError::Registration)?;
        }
        Ok(())
    }

    /// Returns validated registrations in manifest order.
    pub fn registrations(&self) -> Result<Vec<ModuleRegistration>, ManifestError> {
        self.validate()?;
        Ok(self.modules.iter().map(LinkedModule::registration).collect())
    }
}

/// Link manifest errors.
#[derive(Debug)]
pub enum ManifestError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NoModules,
    Registration(RegistrationValidationError),
}

impl Display for ManifestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read link manifest: {err}"),
            Self::Parse(err) => write!(f, "failed to parse link manifest: {err}"),
            Self::NoModules => write!(f, "link manifest names no modules"),
            Self::Registration(err) => write!(f, "invalid link manifest entry: {err}"),
        }
    }
}

impl Error for ManifestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::NoModules => None,
            Self::Registration(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkManifest, ManifestError};

    #[test]
    fn parses_manifest_with_derived_short_names() {
        let manifest = LinkManifest::from_json_str(
            r#"{"modules": [{"full_name": "pkglib.tests.integration.gcov_ext"}]}"#,
        )
        .expect("manifest parse");

        let registrations = manifest.registrations().expect("registrations");
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].importable_name, "gcov_ext");
        assert_eq!(
            registrations[0].full_name,
            "pkglib.tests.integration.gcov_ext"
        );
    }

    #[test]
    fn honors_importable_name_override() {
        let manifest = LinkManifest::from_json_str(
            r#"{"modules": [{"full_name": "pkg.sub.mod_v2", "importable_name": "ext"}]}"#,
        )
        .expect("manifest parse");

        let registrations = manifest.registrations().expect("registrations");
        assert_eq!(registrations[0].importable_name, "ext");
    }

    #[test]
    fn rejects_empty_module_list() {
        let err = LinkManifest::from_json_str(r#"{"modules": []}"#)
            .expect_err("empty module list must fail");
        assert!(matches!(err, ManifestError::NoModules));
    }

    #[test]
    fn rejects_entry_with_invalid_derived_name() {
        let err = LinkManifest::from_json_str(r#"{"modules": [{"full_name": "pkg.bad-name"}]}"#)
            .expect_err("invalid derived name must fail");
        assert!(matches!(err, ManifestError::Registration(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LinkManifest::from_json_str("{").expect_err("malformed JSON must fail");
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
