//! trybuild compile-time tests for inject_macros

#[test]
fn trybuild_injectable_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/injectable_ok.rs");
    t.pass("tests/trybuild/generic_ok.rs");
}
