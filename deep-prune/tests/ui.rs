//! Compile tests for `#[derive(Prune)]`.
//!
//! These tests check that the derive expands to valid code for the shapes
//! users actually write: generic containers, enums with every variant kind,
//! and fields with `skip`, `with`, and `rename`.

#![cfg(feature = "derive")]

#[test]
fn derive_expansion_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
