//! Built-in module table contracts.
//!
//! # Responsibility
//! - Model the process-wide built-in module table as an explicit registry.
//! - Drive the pre-startup registration batch with fatal-on-first-failure
//!   semantics.
//!
//! # Invariants
//! - The table is append-only for the process lifetime.
//! - Registration runs once, single-threaded, before the first import.

pub mod registry;
pub mod startup;
