use std::path::PathBuf;

use implgen_lib::BodyStyle;

use super::*;
use crate::cli::commands::{interfaces_command, stub_command};
use crate::commands::stub::StubArgs;

#[test]
fn interfaces_params() {
    let m = interfaces_command()
        .try_get_matches_from(["interfaces", "kv.json", "--json"])
        .unwrap();
    let params = InterfacesParams::from_matches(&m);
    assert_eq!(params.module_path, PathBuf::from("kv.json"));
    assert!(params.json);
}

#[test]
fn interfaces_requires_module() {
    let result = interfaces_command().try_get_matches_from(["interfaces"]);
    assert!(result.is_err());
}

#[test]
fn stub_defaults() {
    let m = stub_command()
        .try_get_matches_from(["stub", "kv.json", "--type", "Stub"])
        .unwrap();
    let params = StubParams::from_matches(&m);
    assert_eq!(params.type_name, "Stub");
    assert_eq!(params.receiver, "s");
    assert!(!params.pointer);
    assert!(params.interfaces.is_empty());
    assert_eq!(params.body, BodyStyle::Panic);
    assert_eq!(params.message, "not implemented");
    assert!(!params.declare_type);
    assert_eq!(params.package, None);
    assert_eq!(params.output, None);

    let args: StubArgs = params.into();
    assert!(args.header);
}

#[test]
fn stub_all_flags() {
    let m = stub_command()
        .try_get_matches_from([
            "stub",
            "kv.json",
            "-t",
            "Fake",
            "-r",
            "f",
            "--pointer",
            "-i",
            "Store",
            "--interface",
            "Closer",
            "--body",
            "zero",
            "-m",
            "todo",
            "--declare-type",
            "-p",
            "kvfake",
            "--package-path",
            "example.com/kvfake",
            "--no-header",
            "-o",
            "fake.go",
        ])
        .unwrap();
    let params = StubParams::from_matches(&m);
    assert_eq!(params.type_name, "Fake");
    assert_eq!(params.receiver, "f");
    assert!(params.pointer);
    assert_eq!(params.interfaces, ["Store", "Closer"]);
    assert_eq!(params.body, BodyStyle::Zero);
    assert_eq!(params.message, "todo");
    assert!(params.declare_type);
    assert_eq!(params.package.as_deref(), Some("kvfake"));
    assert_eq!(params.package_path.as_deref(), Some("example.com/kvfake"));
    assert_eq!(params.output, Some(PathBuf::from("fake.go")));

    let args: StubArgs = params.into();
    assert!(!args.header);
}

#[test]
fn stub_requires_type() {
    let result = stub_command().try_get_matches_from(["stub", "kv.json"]);
    assert!(result.is_err());
}

#[test]
fn stub_rejects_unknown_body() {
    let result =
        stub_command().try_get_matches_from(["stub", "kv.json", "-t", "Stub", "--body", "todo"]);
    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["implgen"]);
    assert!(result.is_err());
}
