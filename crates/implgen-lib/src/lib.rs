#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Go interface stub generation.
//!
//! Walks reflected types from `implgen-core` and produces `implgen-syntax`
//! fragments: type expressions, import sets and method declarations that
//! satisfy an interface.
//!
//! # Example
//!
//! ```
//! use implgen_core::{Interface, Method, Signature, Type, Var};
//! use implgen_lib::{Receiver, panic_body, synthesize_methods};
//!
//! let closer = Interface::new([Method::new(
//!     "Close",
//!     Signature::new([], [Var::unnamed(Type::universe("error"))]),
//! )]);
//! let receiver = Receiver::new("s", "Stub");
//! let methods = synthesize_methods(&receiver, &closer, |_, _| panic_body("todo")).unwrap();
//! assert_eq!(
//!     methods[0].render(),
//!     "func (s Stub) Close() error {\n\tpanic(\"todo\")\n}",
//! );
//! ```

mod body;
mod imports;
mod reflect;
mod render;
mod stub;
mod synth;

#[cfg(test)]
mod body_tests;
#[cfg(test)]
mod reflect_tests;

pub use body::{BodyStyle, panic_body, zero_body, zero_value};
pub use imports::{ImportSet, collect_imports, collect_signature_imports};
pub use reflect::{InterfaceEntry, filter_by_name, find_interfaces};
pub use render::{render_basic, render_params, render_results, render_signature, render_type};
pub use stub::{DEFAULT_HEADER, StubConfig, generate_file};
pub use synth::{Receiver, generate_method, synthesize_methods};

use implgen_core::BasicKind;

/// Errors raised while turning reflected types into syntax.
///
/// Both variants mean the input holds a shape the generator cannot express.
/// Generation stops at the first one; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Basic kind without type syntax (untyped constants, `unsafe.Pointer`, invalid).
    #[error("unsupported basic type `{0}`")]
    UnsupportedBasic(BasicKind),

    #[error("unsupported type shape: {0}")]
    UnsupportedShape(String),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
