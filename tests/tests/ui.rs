#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/derive_record.rs");
    t.pass("tests/ui/derive_silent_gaps.rs");
}
