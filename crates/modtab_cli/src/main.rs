//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `modtab_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use modtab_core::{render_module_init, ModuleRegistration};

fn main() {
    println!("modtab_core ping={}", modtab_core::ping());
    println!("modtab_core version={}", modtab_core::core_version());

    let sample = ModuleRegistration::from_full_name("pkglib.tests.integration.gcov_ext");
    match render_module_init(&sample) {
        Ok(fragment) => print!("{fragment}"),
        Err(err) => eprintln!("sample fragment render failed: {err}"),
    }
}
