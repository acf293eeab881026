use indoc::indoc;

use super::*;
use crate::{BasicKind, Interface, Method, Signature, Type, Var};

#[test]
fn from_json_reads_declarations_in_order() {
    let json = indoc! {r#"
        {
            "path": "example.com/kv",
            "name": "kv",
            "types": {
                "Store": {
                    "kind": "interface",
                    "methods": [
                        {
                            "name": "Close",
                            "type": {
                                "kind": "signature",
                                "results": [{ "type": { "kind": "named", "name": "error" } }]
                            }
                        }
                    ]
                },
                "Key": { "kind": "basic", "name": "string" }
            }
        }
    "#};

    let module = Module::from_json(json).unwrap();
    assert_eq!(module.path, ModulePath::new("example.com/kv"));
    assert_eq!(module.name, "kv");
    assert_eq!(module.types.keys().collect::<Vec<_>>(), ["Store", "Key"]);

    let expected = Interface::new([Method::new(
        "Close",
        Signature::new([], [Var::unnamed(Type::universe("error"))]),
    )]);
    assert_eq!(module.lookup("Store"), Some(&Type::Interface(expected)));
    assert_eq!(module.lookup("Key"), Some(&Type::basic(BasicKind::String)));
}

#[test]
fn from_json_defaults_package_name_to_last_segment() {
    let module = Module::from_json(r#"{ "path": "example.com/net/proto" }"#).unwrap();
    assert_eq!(module.name, "proto");
    assert!(module.types.is_empty());
}

#[test]
fn from_json_default_name_is_an_identifier() {
    let module = Module::from_json(r#"{ "path": "example.com/kv/v2" }"#).unwrap();
    assert_eq!(module.name, "kv");

    let module = Module::from_json(r#"{ "path": "gopkg.in/yaml.v3" }"#).unwrap();
    assert_eq!(module.name, "yaml");

    let module = Module::from_json(r#"{ "path": "github.com/mattn/go-sqlite3" }"#).unwrap();
    assert_eq!(module.name, "sqlite3");
}

#[test]
fn from_json_rejects_empty_path() {
    let err = Module::from_json(r#"{ "path": "" }"#).unwrap_err();
    assert!(matches!(err, ModuleError::EmptyPath));
}

#[test]
fn from_json_rejects_unknown_shape() {
    let json = r#"{ "path": "p", "types": { "T": { "kind": "tuple_struct" } } }"#;
    let err = Module::from_json(json).unwrap_err();
    assert!(matches!(err, ModuleError::Json(_)));
    assert!(err.to_string().starts_with("invalid module description"));
}

#[test]
fn names_are_sorted() {
    let module = Module::new("p", "p")
        .with_type("Zeta", Type::basic(BasicKind::Int))
        .with_type("Alpha", Type::basic(BasicKind::Int))
        .with_type("mid", Type::basic(BasicKind::Int));
    assert_eq!(module.names(), ["Alpha", "Zeta", "mid"]);
}

#[test]
fn to_json_round_trips() {
    let module = Module::new("example.com/a", "a").with_type(
        "Handler",
        Interface::new([Method::new("Serve", Signature::default())]),
    );
    let back = Module::from_json(&module.to_json().unwrap()).unwrap();
    assert_eq!(back, module);
}

#[test]
fn exported_names() {
    assert!(is_exported("Reader"));
    assert!(is_exported("Ωmega"));
    assert!(!is_exported("reader"));
    assert!(!is_exported("_Reader"));
    assert!(!is_exported(""));
}
