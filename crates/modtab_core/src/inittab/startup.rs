//! Pre-startup registration batch for statically linked modules.
//!
//! # Responsibility
//! - Append each module constructor to the table before interpreter start.
//! - Surface the first failed registration as a fatal, non-retried
//!   condition with its diagnostic on the error stream.
//!
//! # Invariants
//! - Registrations run strictly in input order.
//! - Nothing after the first failure executes.
//! - The diagnostics stream stays untouched on the success path.

use crate::inittab::registry::{InittabError, ModuleTable};
use crate::module::registration::ModuleRegistration;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// Registers every module into the table, aborting at the first failure.
///
/// A partially initialized table would surface later as a confusing
/// import-time failure far from its cause, so the whole batch is treated
/// as one fatal unit.
///
/// # Side effects
/// - Writes `Error initialising module: <name> (fullname: <full name>)` to
///   `diagnostics` for the failing registration, and nothing otherwise.
/// - Emits `startup_register` logging events.
pub fn register_builtin_modules<T, W>(
    table: &mut T,
    registrations: &[ModuleRegistration],
    diagnostics: &mut W,
) -> Result<(), StartupError>
where
    T: ModuleTable + ?Sized,
    W: Write + ?Sized,
{
    info!(
        "event=startup_register module=startup status=start count={}",
        registrations.len()
    );

    for registration in registrations {
        if let Err(source) = table.append(registration) {
            error!(
                "event=startup_register module=startup status=error importable_name={} error={}",
                registration.importable_name, source
            );
            writeln!(
                diagnostics,
                "Error initialising module: {} (fullname: {})",
                registration.importable_name, registration.full_name
            )
            .map_err(StartupError::Diagnostics)?;
            return Err(StartupError::Registration {
                importable_name: registration.importable_name.clone(),
                full_name: registration.full_name.clone(),
                source,
            });
        }
    }

    info!(
        "event=startup_register module=startup status=ok count={}",
        registrations.len()
    );
    Ok(())
}

/// Runs the registration batch and reports it as a process-style status.
///
/// Returns `0` when every module registered, `1` after the first failure
/// once its diagnostic has been written.
pub fn startup_status<T, W>(
    table: &mut T,
    registrations: &[ModuleRegistration],
    diagnostics: &mut W,
) -> i32
where
    T: ModuleTable + ?Sized,
    W: Write + ?Sized,
{
    match register_builtin_modules(table, registrations, diagnostics) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Startup registration errors.
#[derive(Debug)]
pub enum StartupError {
    /// One registration was rejected by the table; the batch stopped here.
    Registration {
        importable_name: String,
        full_name: String,
        source: InittabError,
    },
    /// The failure diagnostic itself could not be written.
    Diagnostics(std::io::Error),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration {
                importable_name,
                full_name,
                source,
            } => write!(
                f,
                "module registration failed: {importable_name} (fullname: {full_name}): {source}"
            ),
            Self::Diagnostics(err) => write!(f, "failed to write registration diagnostic: {err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registration { source, .. } => Some(source),
            Self::Diagnostics(err) => Some(err),
        }
    }
}
