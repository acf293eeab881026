use implgen_core::{BasicKind, Field, Interface, Method, Module, Signature, Struct, Type, Var};

use crate::reflect::missing_names;
use crate::{InterfaceEntry, filter_by_name, find_interfaces};

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
        .with_type("Closer", Interface::new([close.clone()]))
        .with_type("closer", Interface::new([close]))
        .with_type("Options", Struct::new([Field::new("Path", Type::basic(BasicKind::String))]))
        .with_type("Key", Type::basic(BasicKind::String))
        .with_type("Any", Interface::default())
}

fn names<'m>(entries: &[InterfaceEntry<'m>]) -> Vec<&'m str> {
    entries.iter().map(|entry| entry.name).collect()
}

#[test]
fn finds_exported_interfaces_sorted() {
    let module = module();
    let entries = find_interfaces(&module);
    assert_eq!(names(&entries), ["Any", "Closer", "Store"]);
    assert_eq!(entries[2].interface.len(), 2);
    assert!(entries[0].interface.is_empty());
}

#[test]
fn module_without_interfaces() {
    let module = Module::new("example.com/empty", "empty")
        .with_type("Key", Type::basic(BasicKind::String));
    assert!(find_interfaces(&module).is_empty());
}

#[test]
fn filter_keeps_entry_order() {
    let module = module();
    let entries = filter_by_name(find_interfaces(&module), &["Store", "Closer"]);
    assert_eq!(names(&entries), ["Closer", "Store"]);
}

#[test]
fn filter_drops_absent_names() {
    let module = module();
    let entries = filter_by_name(find_interfaces(&module), &["Missing", "Store"]);
    assert_eq!(names(&entries), ["Store"]);

    let none = filter_by_name(find_interfaces(&module), &["Missing"]);
    assert!(none.is_empty());
}

#[test]
fn filter_matches_exact_names() {
    let module = module();
    let wanted = vec!["store".to_string(), "Store".to_string(), "Store".to_string()];
    let entries = filter_by_name(find_interfaces(&module), wanted.as_slice());
    assert_eq!(names(&entries), ["Store"]);
}

#[test]
fn filter_with_no_names_is_empty() {
    let module = module();
    let none: [&str; 0] = [];
    assert!(filter_by_name(find_interfaces(&module), &none).is_empty());
}

#[test]
fn missing_names_follow_request_order() {
    let module = module();
    let wanted = ["Zulu", "Store", "Alpha", "Zulu", "Mike"];
    let kept = filter_by_name(find_interfaces(&module), &wanted);
    assert_eq!(missing_names(&kept, &wanted), ["Zulu", "Alpha", "Mike"]);
}
