use modtab_core::{
    register_builtin_modules, startup_status, InittabRegistry, LinkManifest, ModuleRegistration,
    ModuleTable, StartupError,
};

#[test]
fn registers_manifest_modules_through_table() {
    let manifest = LinkManifest::from_json_str(
        r#"{
            "modules": [
                {"full_name": "pkglib.tests.integration.gcov_ext"},
                {"full_name": "pkglib.tests.integration.gcov_ext_cython", "importable_name": "ext"}
            ]
        }"#,
    )
    .expect("manifest parse");
    let registrations = manifest.registrations().expect("registrations");

    let mut table = InittabRegistry::new();
    let mut diagnostics = Vec::new();
    register_builtin_modules(&mut table, &registrations, &mut diagnostics)
        .expect("batch registration");

    assert!(diagnostics.is_empty());
    assert_eq!(table.importable_names(), vec!["ext", "gcov_ext"]);
    let entry = table.lookup("ext").expect("registered module");
    assert_eq!(
        entry.registration.full_name,
        "pkglib.tests.integration.gcov_ext_cython"
    );
}

#[test]
fn conflicting_registration_emits_exact_diagnostic_and_status_one() {
    let mut table = InittabRegistry::new();
    // A module with the same importable name is already linked in.
    table
        .append(&ModuleRegistration::new("ext", "elsewhere.ext"))
        .expect("pre-registration");

    let registrations = vec![ModuleRegistration::new(
        "ext",
        "pkglib.tests.integration.gcov_ext",
    )];
    let mut diagnostics = Vec::new();

    let status = startup_status(&mut table, &registrations, &mut diagnostics);

    assert_eq!(status, 1);
    assert_eq!(
        String::from_utf8(diagnostics).expect("utf-8 diagnostics"),
        "Error initialising module: ext (fullname: pkglib.tests.integration.gcov_ext)\n"
    );
    // The earlier table entry is untouched.
    let entry = table.lookup("ext").expect("registered module");
    assert_eq!(entry.registration.full_name, "elsewhere.ext");
}

#[test]
fn successful_batch_reports_status_zero() {
    let mut table = InittabRegistry::new();
    let registrations = vec![
        ModuleRegistration::from_full_name("pkg.first"),
        ModuleRegistration::from_full_name("pkg.second"),
    ];
    let mut diagnostics = Vec::new();

    assert_eq!(
        startup_status(&mut table, &registrations, &mut diagnostics),
        0
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn batch_stops_before_modules_sequenced_after_failure() {
    let mut table = InittabRegistry::new();
    let registrations = vec![
        ModuleRegistration::from_full_name("pkg.a.shared"),
        ModuleRegistration::from_full_name("pkg.b.shared"),
        ModuleRegistration::from_full_name("pkg.c.tail"),
    ];
    let mut diagnostics = Vec::new();

    let err = register_builtin_modules(&mut table, &registrations, &mut diagnostics)
        .expect_err("duplicate short name must abort the batch");

    match err {
        StartupError::Registration {
            importable_name,
            full_name,
            ..
        } => {
            assert_eq!(importable_name, "shared");
            assert_eq!(full_name, "pkg.b.shared");
        }
        other => panic!("unexpected startup error: {other}"),
    }
    assert_eq!(table.len(), 1);
    assert!(table.lookup("tail").is_none());
}
