#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Go syntax fragments and their printer.
//!
//! This crate contains:
//! - `Code`, a tree of Go syntax fragments (types, declarations, statements)
//! - `Printer`, which serializes fragments with gofmt spacing
//! - `ImportTable` and `File` for complete source files

mod code;
mod file;
mod imports;
mod printer;

#[cfg(test)]
mod imports_tests;

pub use code::{ChanDir, Code, Func, Lit};
pub use file::File;
pub use imports::{ImportTable, guess_package_name};
pub use printer::{Config, Printer, quote};
