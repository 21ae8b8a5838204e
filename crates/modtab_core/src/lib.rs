//! Core registration model and C code generation for coverage-instrumented
//! static interpreter builds.
//! This crate is the single source of truth for registration invariants.

pub mod codegen;
pub mod config;
pub mod inittab;
pub mod logging;
pub mod module;

pub use codegen::main_source::{
    declare_block, init_block, render_main_source, DECLARE_PLACEHOLDER, INIT_PLACEHOLDER,
};
pub use codegen::module_init::{render_module_init, MODULE_INIT_TEMPLATE};
pub use codegen::template::{substitute, TemplateError};
pub use codegen::CodegenError;
pub use config::{LinkManifest, LinkedModule, ManifestError};
pub use inittab::registry::{InittabError, InittabRegistry, ModuleTable, RegisteredModule};
pub use inittab::startup::{register_builtin_modules, startup_status, StartupError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use module::registration::{short_name, ModuleRegistration, RegistrationValidationError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
