//! Whole Go source files.

use crate::imports::{ImportTable, guess_package_name};
use crate::printer::quote;
use crate::{Code, Config, Printer};

/// A Go source file: package clause, imports and top-level declarations.
///
/// Imports registered with [`File::import`] are printed even if unused.
/// Qualified references found in declarations are registered on render.
#[derive(Clone, Debug)]
pub struct File {
    package: String,
    header: Option<String>,
    imports: ImportTable,
    decls: Vec<Code>,
}

impl File {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            header: None,
            imports: ImportTable::new(),
            decls: Vec::new(),
        }
    }

    /// File that belongs to the package at `path`; its own types print bare.
    pub fn for_package(package: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            imports: ImportTable::for_package(path),
            ..Self::new(package)
        }
    }

    /// Comment printed above the package clause.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn import(&mut self, path: &str) -> Option<&str> {
        self.imports.add(path)
    }

    /// Import `path` as package `name`; printed with an alias if the name
    /// differs from the one guessed from the path.
    pub fn import_as(&mut self, path: &str, name: &str) -> Option<&str> {
        self.imports.add_named(path, name)
    }

    pub fn push(&mut self, decl: Code) {
        self.decls.push(decl);
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = Code>) {
        self.decls.extend(decls);
    }

    pub fn imports(&self) -> &ImportTable {
        &self.imports
    }

    pub fn render(&self, config: &Config) -> String {
        let mut imports = self.imports.clone();
        for decl in &self.decls {
            decl.walk_quals(&mut |path, _| {
                imports.add(path);
            });
        }

        let mut printer = Printer::new(config, Some(&imports));
        if let Some(header) = &self.header {
            printer.write(&Code::comment(header.as_str()));
            printer.push_str("\n\n");
        }
        printer.push_str("package ");
        printer.push_str(&self.package);
        printer.push_str("\n");

        match imports.len() {
            0 => {}
            1 => {
                printer.push_str("\nimport ");
                for (path, alias) in imports.iter() {
                    printer.push_str(&import_spec(path, alias));
                }
                printer.push_str("\n");
            }
            _ => {
                printer.push_str("\nimport (\n");
                for (path, alias) in imports.iter() {
                    printer.push_str(&config.indent);
                    printer.push_str(&import_spec(path, alias));
                    printer.push_str("\n");
                }
                printer.push_str(")\n");
            }
        }

        for decl in &self.decls {
            printer.push_str("\n");
            printer.write(decl);
            printer.push_str("\n");
        }
        printer.finish()
    }
}

fn import_spec(path: &str, alias: &str) -> String {
    if guess_package_name(path) == alias {
        quote(path)
    } else {
        format!("{alias} {}", quote(path))
    }
}
