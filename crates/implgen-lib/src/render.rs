//! Type to Go syntax conversion.

use implgen_core::{BasicKind, ChanDir, Interface, Named, Signature, Struct, Tuple, Type, Var};
use implgen_syntax::{self as syntax, Code};

use crate::{Error, Result};

/// Render a type as a Go type expression.
///
/// Named types become references (qualified unless predeclared) and are
/// never expanded. A standalone tuple renders as a bare comma-separated list.
pub fn render_type(ty: &Type) -> Result<Code> {
    match ty {
        Type::Basic { name } => render_basic(*name).map(Code::id),
        Type::Named(named) => Ok(render_named(named)),
        Type::Pointer { elem } => Ok(render_type(elem)?.pointer()),
        Type::Slice { elem } => Ok(render_type(elem)?.slice()),
        Type::Array { len, elem } => Ok(render_type(elem)?.array(*len)),
        Type::Map { key, value } => Ok(Code::map(render_type(key)?, render_type(value)?)),
        Type::Chan { dir, elem } => Ok(render_type(elem)?.chan(chan_dir(*dir))),
        Type::Tuple { vars } => Ok(Code::List(render_types(vars)?)),
        Type::Signature(sig) => render_signature(sig),
        Type::Struct(s) => render_struct(s),
        Type::Interface(iface) => render_interface(iface),
    }
}

/// Go spelling of a basic kind.
///
/// Kinds without type syntax are rejected rather than approximated.
pub fn render_basic(kind: BasicKind) -> Result<&'static str> {
    let name = match kind {
        BasicKind::Bool => "bool",
        BasicKind::Int => "int",
        BasicKind::Int8 => "int8",
        BasicKind::Int16 => "int16",
        BasicKind::Int32 => "int32",
        BasicKind::Int64 => "int64",
        BasicKind::Uint => "uint",
        BasicKind::Uint8 => "uint8",
        BasicKind::Uint16 => "uint16",
        BasicKind::Uint32 => "uint32",
        BasicKind::Uint64 => "uint64",
        BasicKind::Uintptr => "uintptr",
        BasicKind::Float32 => "float32",
        BasicKind::Float64 => "float64",
        BasicKind::Complex64 => "complex64",
        BasicKind::Complex128 => "complex128",
        BasicKind::String => "string",
        BasicKind::Byte => "byte",
        BasicKind::Rune => "rune",
        BasicKind::UnsafePointer
        | BasicKind::UntypedBool
        | BasicKind::UntypedInt
        | BasicKind::UntypedRune
        | BasicKind::UntypedFloat
        | BasicKind::UntypedComplex
        | BasicKind::UntypedString
        | BasicKind::UntypedNil
        | BasicKind::Invalid => return Err(Error::UnsupportedBasic(kind)),
    };
    Ok(name)
}

pub(crate) fn render_named(named: &Named) -> Code {
    match &named.module {
        Some(module) => Code::qual(module.as_str(), named.name.as_str()),
        None => Code::id(named.name.as_str()),
    }
}

/// `func(params) results`
pub fn render_signature(sig: &Signature) -> Result<Code> {
    Ok(Code::func_type(
        render_params(sig)?,
        render_results(&sig.results)?,
    ))
}

/// Parenthesized parameter list.
///
/// For a variadic signature the last parameter is rendered as `...E`, where
/// its declared type is `[]E`.
pub fn render_params(sig: &Signature) -> Result<Code> {
    let last = sig.params.len().checked_sub(1);
    let mut params = Vec::with_capacity(sig.params.len());
    for (i, var) in sig.params.iter().enumerate() {
        let ty = if sig.variadic && Some(i) == last {
            render_variadic(&var.ty)?
        } else {
            render_type(&var.ty)?
        };
        params.push(with_name(var, ty));
    }
    Ok(Code::Params(params))
}

/// Result list: nothing, a bare type, or a parenthesized list.
///
/// Only a single unnamed result is printed without parentheses.
pub fn render_results(results: &Tuple) -> Result<Code> {
    match results.vars.as_slice() {
        [] => Ok(Code::Empty),
        [var] if var.name().is_none() => render_type(&var.ty),
        vars => {
            let items = vars
                .iter()
                .map(|var| Ok(with_name(var, render_type(&var.ty)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Code::Params(items))
        }
    }
}

fn render_variadic(ty: &Type) -> Result<Code> {
    match ty {
        Type::Slice { elem } => Ok(render_type(elem)?.ellipsis()),
        other => Err(Error::UnsupportedShape(format!(
            "variadic parameter of type `{other}` is not a slice"
        ))),
    }
}

fn render_types(vars: &Tuple) -> Result<Vec<Code>> {
    vars.iter().map(|var| render_type(&var.ty)).collect()
}

fn with_name(var: &Var, ty: Code) -> Code {
    match var.name() {
        Some(name) => Code::field(name, ty),
        None => ty,
    }
}

fn render_struct(s: &Struct) -> Result<Code> {
    let fields = s
        .fields
        .iter()
        .map(|field| Ok(Code::field(field.name.as_str(), render_type(&field.ty)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Code::Struct(fields))
}

fn render_interface(iface: &Interface) -> Result<Code> {
    let mut members = Vec::with_capacity(iface.len());
    for method in &iface.methods {
        let member = match &method.ty {
            Type::Named(named) => render_named(named),
            Type::Signature(sig) => Code::method_spec(
                method.name.as_str(),
                render_params(sig)?,
                render_results(&sig.results)?,
            ),
            other => {
                return Err(Error::UnsupportedShape(format!(
                    "interface method `{}` declared as {}",
                    method.name,
                    other.kind_name()
                )));
            }
        };
        members.push(member);
    }
    Ok(Code::Interface(members))
}

fn chan_dir(dir: ChanDir) -> syntax::ChanDir {
    match dir {
        ChanDir::Both => syntax::ChanDir::Both,
        ChanDir::Send => syntax::ChanDir::Send,
        ChanDir::Recv => syntax::ChanDir::Recv,
    }
}
