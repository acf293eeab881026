use crate::{ImportTable, guess_package_name};

#[test]
fn guess_uses_last_segment() {
    assert_eq!(guess_package_name("io"), "io");
    assert_eq!(guess_package_name("net/http"), "http");
    assert_eq!(guess_package_name("example.com/kv/"), "kv");
}

#[test]
fn guess_skips_major_version() {
    assert_eq!(guess_package_name("github.com/jackc/pgx/v5"), "pgx");
    assert_eq!(guess_package_name("example.com/v2"), "example");
    assert_eq!(guess_package_name("example.com/mod/version"), "version");
}

#[test]
fn guess_normalizes_segment() {
    assert_eq!(guess_package_name("gopkg.in/yaml.v3"), "yaml");
    assert_eq!(guess_package_name("github.com/mattn/go-sqlite3"), "sqlite3");
    assert_eq!(guess_package_name("github.com/foo/bar-go"), "bar");
    assert_eq!(guess_package_name("example.com/Multi-Word"), "multiword");
    assert_eq!(guess_package_name("example.com/9lives"), "pkg9lives");
}

#[test]
fn add_assigns_unique_aliases() {
    let mut imports = ImportTable::new();
    assert_eq!(imports.add("example.com/a/log"), Some("log"));
    assert_eq!(imports.add("example.com/b/log"), Some("log2"));
    assert_eq!(imports.add("example.com/c/log"), Some("log3"));
    assert_eq!(imports.add("example.com/a/log"), Some("log"));
    assert_eq!(imports.len(), 3);
}

#[test]
fn add_named_uses_declared_name() {
    let mut imports = ImportTable::new();
    assert_eq!(imports.add_named("example.com/go-kv", "kvstore"), Some("kvstore"));
    assert_eq!(imports.add("example.com/go-kv"), Some("kvstore"));
    assert_eq!(imports.add("example.com/other/kvstore"), Some("kvstore2"));
    assert_eq!(imports.add_named("example.com/go-kv", "kv"), Some("kvstore"));
    assert_eq!(imports.add_named("example.com/app", "app"), Some("app"));
}

#[test]
fn local_path_is_never_imported() {
    let mut imports = ImportTable::for_package("example.com/app");
    assert!(imports.is_local("example.com/app"));
    assert_eq!(imports.add("example.com/app"), None);
    assert!(imports.is_empty());
    assert_eq!(imports.alias("example.com/app"), None);
}

#[test]
fn iter_is_sorted_by_path() {
    let mut imports = ImportTable::new();
    imports.add("time");
    imports.add("context");
    imports.add("example.com/kv");
    let paths: Vec<_> = imports.iter().map(|(path, _)| path).collect();
    assert_eq!(paths, ["context", "example.com/kv", "time"]);
}
