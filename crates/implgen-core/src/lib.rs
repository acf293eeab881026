#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for reflected Go types.
//!
//! Two layers:
//! - **Type model**: a closed `Type` union covering every shape the generator handles
//! - **Modules**: passive containers of declared named types, loaded from JSON
//!
//! Nothing here is mutated after construction; consumers only walk it.

mod basic;
mod module;
mod types;

#[cfg(test)]
mod module_tests;

pub use basic::BasicKind;
pub use module::{Module, ModuleError, ModulePath, is_exported};
pub use types::{ChanDir, Field, Interface, Method, Named, Signature, Struct, Tuple, Type, Var};
