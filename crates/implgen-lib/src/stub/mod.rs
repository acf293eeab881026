//! Complete stub files.
//!
//! Ties discovery, import collection and synthesis together and prints one
//! Go source file per call.

mod config;


pub use config::{DEFAULT_HEADER, StubConfig};

use std::collections::HashSet;

use tracing::{debug, debug_span};

use implgen_core::{Interface, Module};
use implgen_syntax::{Code, File};

use crate::{
    BodyStyle, ImportSet, InterfaceEntry, Result, collect_signature_imports, filter_by_name,
    find_interfaces, panic_body, synthesize_methods, zero_body,
};

/// Generate a Go file implementing the named interfaces of `module`.
///
/// With no names, every exported interface is implemented. A method that
/// several interfaces share is declared once.
pub fn generate_file<S: AsRef<str>>(
    module: &Module,
    names: &[S],
    config: &StubConfig,
) -> Result<String> {
    let _span = debug_span!("generate_file", module = %module.path).entered();

    let mut entries = find_interfaces(module);
    if !names.is_empty() {
        entries = filter_by_name(entries, names);
    }

    let mut file = new_file(module, config);

    let mut imports = ImportSet::new();
    for entry in &entries {
        for sig in entry.interface.methods.iter().filter_map(|m| m.signature()) {
            collect_signature_imports(sig, &mut imports);
        }
    }
    for path in &imports {
        if *path == module.path && !module.name.is_empty() {
            file.import_as(path.as_str(), &module.name);
        } else {
            file.import(path.as_str());
        }
    }

    if config.declare_type {
        file.push(Code::type_decl(
            config.receiver.type_name.as_str(),
            Code::structure([]),
        ));
    }

    let mut seen = HashSet::new();
    for entry in &entries {
        let methods = entry
            .interface
            .methods
            .iter()
            .filter(|method| method.signature().is_some())
            .filter(|method| {
                let fresh = seen.insert(method.name.as_str());
                if !fresh {
                    debug!(interface = entry.name, method = %method.name, "already declared");
                }
                fresh
            })
            .cloned();
        let interface = Interface::new(methods);
        file.extend(synthesize_entry(entry, &interface, config)?);
    }

    debug!(interfaces = entries.len(), imports = imports.len(), "generated file");
    Ok(file.render(&config.syntax))
}

fn new_file(module: &Module, config: &StubConfig) -> File {
    let package = config
        .package
        .clone()
        .unwrap_or_else(|| module.name.clone());
    let local = match (&config.package_path, &config.package) {
        (Some(path), _) => Some(path.clone()),
        (None, None) => Some(module.path.to_string()),
        (None, Some(_)) => None,
    };

    let file = match local {
        Some(path) => File::for_package(package, path),
        None => File::new(package),
    };
    match &config.header {
        Some(header) => file.header(header.as_str()),
        None => file,
    }
}

fn synthesize_entry(
    entry: &InterfaceEntry<'_>,
    interface: &Interface,
    config: &StubConfig,
) -> Result<Vec<Code>> {
    let _span = debug_span!("interface", name = entry.name).entered();

    let mut failed = None;
    let decls = synthesize_methods(&config.receiver, interface, |_, sig| match config.body {
        BodyStyle::Panic => panic_body(&config.message),
        BodyStyle::Zero => zero_body(sig).unwrap_or_else(|err| {
            failed.get_or_insert(err);
            Code::Empty
        }),
    })?;
    match failed {
        Some(err) => Err(err),
        None => Ok(decls),
    }
}
