//! Ready-made method bodies.

use implgen_core::{BasicKind, Signature, Type};
use implgen_syntax::Code;

use crate::render::{render_named, render_type};
use crate::{Error, Result};

/// Which body generated methods get.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyStyle {
    /// `panic("message")`
    #[default]
    Panic,
    /// `return` with the zero value of every result
    Zero,
}

pub fn panic_body(message: &str) -> Code {
    Code::id("panic").call([Code::str(message)])
}

/// `return` followed by a zero value per result.
///
/// Bare `return` when the results are named (they are already zeroed) or
/// there are none.
pub fn zero_body(sig: &Signature) -> Result<Code> {
    if sig.results.is_empty() || sig.results.any_named() {
        return Ok(Code::ret([]));
    }
    let values = sig
        .results
        .iter()
        .map(|var| zero_value(&var.ty))
        .collect::<Result<Vec<_>>>()?;
    Ok(Code::ret(values))
}

/// Zero value expression of a type.
pub fn zero_value(ty: &Type) -> Result<Code> {
    match ty {
        Type::Basic { name } => zero_basic(*name),
        // `error` and `any` are interfaces.
        Type::Named(named) if named.module.is_none() && is_nilable_universe(&named.name) => {
            Ok(Code::nil())
        }
        // The underlying type is unknown here; `*new(T)` is valid for any T.
        Type::Named(named) => Ok(Code::id("new").call([render_named(named)]).deref()),
        Type::Pointer { .. }
        | Type::Slice { .. }
        | Type::Map { .. }
        | Type::Chan { .. }
        | Type::Signature(_)
        | Type::Interface(_) => Ok(Code::nil()),
        Type::Array { .. } | Type::Struct(_) => Ok(render_type(ty)?.composite()),
        Type::Tuple { .. } => Err(Error::UnsupportedShape(
            "tuple has no zero value".to_string(),
        )),
    }
}

fn zero_basic(kind: BasicKind) -> Result<Code> {
    match kind {
        BasicKind::Bool | BasicKind::UntypedBool => Ok(Code::bool(false)),
        BasicKind::String | BasicKind::UntypedString => Ok(Code::str("")),
        BasicKind::UnsafePointer | BasicKind::UntypedNil => Ok(Code::nil()),
        BasicKind::Invalid => Err(Error::UnsupportedBasic(kind)),
        kind if kind.is_numeric() => Ok(Code::int(0)),
        kind => Err(Error::UnsupportedBasic(kind)),
    }
}

fn is_nilable_universe(name: &str) -> bool {
    matches!(name, "error" | "any")
}
