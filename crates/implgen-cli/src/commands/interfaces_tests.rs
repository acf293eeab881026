use implgen_core::{BasicKind, Interface, Method, Module, Signature, Type, Var};

use super::interfaces::render_listing;

fn module() -> Module {
    let close = Method::new(
        "Close",
        Signature::new([], [Var::unnamed(Type::universe("error"))]),
    );
    let get = Method::new(
        "Get",
        Signature::new([Var::new("key", Type::basic(BasicKind::String))], []),
    );
    Module::new("example.com/kv", "kv")
        .with_type("Store", Interface::new([get, close.clone()]))
        .with_type("Closer", Interface::new([close]))
        .with_type("Key", Type::basic(BasicKind::String))
}

#[test]
fn text_listing() {
    let listing = render_listing(&module(), false).unwrap();
    insta::assert_snapshot!(listing, @r"
    Closer  1 method
    Store   2 methods
    ");
}

#[test]
fn json_listing() {
    let listing = render_listing(&module(), true).unwrap();
    insta::assert_snapshot!(listing, @r#"
    [
      {
        "name": "Closer",
        "methods": 1
      },
      {
        "name": "Store",
        "methods": 2
      }
    ]
    "#);
}

#[test]
fn empty_listing() {
    let module = Module::new("example.com/empty", "empty");
    assert_eq!(render_listing(&module, false).unwrap(), "");
    assert_eq!(render_listing(&module, true).unwrap(), "[]\n");
}
