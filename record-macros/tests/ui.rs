#[test]
fn record_macro_expansion() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_basic.rs");
    t.pass("tests/ui/record_debug_off.rs");
    t.pass("tests/ui/record_existing_base.rs");
}

#[test]
fn record_macro_rejects_bad_collection() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/record_missing_collection.rs");
    t.compile_fail("tests/ui/record_empty_collection.rs");
    t.compile_fail("tests/ui/record_unset_collection.rs");
    t.compile_fail("tests/ui/record_duplicate_collection.rs");
    t.compile_fail("tests/ui/record_unknown_key.rs");
}
