//! Type-check generated files with the Go toolchain.
//!
//! Skipped when `go` is not installed.

use valctx_codegen::{
    generate,
    testing::{GoChecker, go_available},
};
use valctx_manifest::parse_fields;

fn assert_compiles(fields: &[&str]) {
    if !go_available() {
        eprintln!("go toolchain not found, skipping");
        return;
    }

    let descriptors = parse_fields(fields).unwrap();
    let source = generate("gen", "v0.3.0", &descriptors).unwrap();
    if let Err(e) = GoChecker.check_source("ctx_gen.go", &source) {
        panic!("generated code does not compile:\n{source}\n{e}");
    }
}

#[test]
fn test_untyped_and_builtin_fields_compile() {
    assert_compiles(&[
        "UserID",
        "field1:int",
        "Tags:[]string",
        "Scores:map[string]float64",
        "Done:<-chan struct{}",
        "Hook:func(int, string) (bool, error)",
    ]);
}

#[test]
fn test_standard_library_types_compile() {
    assert_compiles(&[
        "Started:time.Time",
        "Timeout:time.Duration",
        "Request:net/http.Request",
        "Parent:context.Context",
    ]);
}
