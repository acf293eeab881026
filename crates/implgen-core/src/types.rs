//! Type model definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BasicKind, ModulePath};

/// A reflected Go type.
///
/// The union is closed: every consumer matches it exhaustively. Named types
/// are references only; their definitions live in the declaring `Module`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// Predeclared primitive.
    Basic { name: BasicKind },
    /// Reference to a declared type.
    Named(Named),
    /// `*T`
    Pointer { elem: Box<Type> },
    /// `[]T`
    Slice { elem: Box<Type> },
    /// `[N]T`
    Array { len: u64, elem: Box<Type> },
    /// `map[K]V`
    Map { key: Box<Type>, value: Box<Type> },
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<Type>,
    },
    /// Parameter or result list.
    Tuple { vars: Tuple },
    Signature(Signature),
    Struct(Struct),
    Interface(Interface),
}

impl Type {
    pub fn basic(kind: BasicKind) -> Self {
        Self::Basic { name: kind }
    }

    /// Named type declared in `module`.
    pub fn named(module: impl Into<ModulePath>, name: impl Into<String>) -> Self {
        Self::Named(Named::new(module, name))
    }

    /// Predeclared named type such as `error` or `any`.
    pub fn universe(name: impl Into<String>) -> Self {
        Self::Named(Named::universe(name))
    }

    pub fn pointer(elem: Type) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Type) -> Self {
        Self::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u64, elem: Type) -> Self {
        Self::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: Type) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn tuple(vars: impl IntoIterator<Item = Var>) -> Self {
        Self::Tuple {
            vars: Tuple::new(vars),
        }
    }

    /// Short variant name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::Named(_) => "named",
            Self::Pointer { .. } => "pointer",
            Self::Slice { .. } => "slice",
            Self::Array { .. } => "array",
            Self::Map { .. } => "map",
            Self::Chan { .. } => "chan",
            Self::Tuple { .. } => "tuple",
            Self::Signature(_) => "signature",
            Self::Struct(_) => "struct",
            Self::Interface(_) => "interface",
        }
    }

    pub fn as_named(&self) -> Option<&Named> {
        match self {
            Self::Named(named) => Some(named),
            _ => None,
        }
    }

    pub fn as_signature(&self) -> Option<&Signature> {
        match self {
            Self::Signature(sig) => Some(sig),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&Interface> {
        match self {
            Self::Interface(iface) => Some(iface),
            _ => None,
        }
    }
}

impl From<Named> for Type {
    fn from(named: Named) -> Self {
        Self::Named(named)
    }
}

impl From<Signature> for Type {
    fn from(sig: Signature) -> Self {
        Self::Signature(sig)
    }
}

impl From<Struct> for Type {
    fn from(s: Struct) -> Self {
        Self::Struct(s)
    }
}

impl From<Interface> for Type {
    fn from(iface: Interface) -> Self {
        Self::Interface(iface)
    }
}

/// Channel direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    /// `chan T`
    #[default]
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// Reference to a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Named {
    /// Declaring module; `None` for predeclared types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModulePath>,
    pub name: String,
}

impl Named {
    pub fn new(module: impl Into<ModulePath>, name: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            name: name.into(),
        }
    }

    pub fn universe(name: impl Into<String>) -> Self {
        Self {
            module: None,
            name: name.into(),
        }
    }
}

/// One slot of a tuple: an optional name and a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: Type) -> Self {
        Self { name: None, ty }
    }

    /// Name, treating the blank string as absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Ordered parameter or result list. Order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple {
    pub vars: Vec<Var>,
}

impl Tuple {
    pub fn new(vars: impl IntoIterator<Item = Var>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Var> {
        self.vars.iter()
    }

    pub fn any_named(&self) -> bool {
        self.vars.iter().any(|var| var.name().is_some())
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Var;
    type IntoIter = std::slice::Iter<'a, Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// Function signature.
///
/// When `variadic` is set the last parameter has slice type `[]E` and stands
/// for `...E`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Tuple,
    #[serde(default)]
    pub results: Tuple,
    #[serde(default)]
    pub variadic: bool,
}

impl Signature {
    pub fn new(
        params: impl IntoIterator<Item = Var>,
        results: impl IntoIterator<Item = Var>,
    ) -> Self {
        Self {
            params: Tuple::new(params),
            results: Tuple::new(results),
            variadic: false,
        }
    }

    /// Mark the last parameter as variadic.
    pub fn variadic(mut self, value: bool) -> Self {
        self.variadic = value;
        self
    }
}

/// Struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Struct {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }
}

/// Interface method.
///
/// The declared type is normally a `Signature`. A `Named` declared type is an
/// embedded interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Method {
    pub fn new(name: impl Into<String>, sig: Signature) -> Self {
        Self {
            name: name.into(),
            ty: Type::Signature(sig),
        }
    }

    /// Embedded interface, named after the referenced type.
    pub fn embedded(named: Named) -> Self {
        Self {
            name: named.name.clone(),
            ty: Type::Named(named),
        }
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.ty.as_signature()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Interface {
    pub fn new(methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

// Go-style spelling, for logs and error messages.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { name } => write!(f, "{name}"),
            Self::Named(named) => write!(f, "{named}"),
            Self::Pointer { elem } => write!(f, "*{elem}"),
            Self::Slice { elem } => write!(f, "[]{elem}"),
            Self::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {elem}"),
                ChanDir::Send => write!(f, "chan<- {elem}"),
                ChanDir::Recv => write!(f, "<-chan {elem}"),
            },
            Self::Tuple { vars } => write!(f, "({vars})"),
            Self::Signature(sig) => write!(f, "func{sig}"),
            Self::Struct(s) => {
                f.write_str("struct{")?;
                for (i, field) in s.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                f.write_str("}")
            }
            Self::Interface(iface) => {
                f.write_str("interface{")?;
                for (i, method) in iface.methods.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    match &method.ty {
                        Type::Signature(sig) => write!(f, "{}{sig}", method.name)?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{module}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match var.name() {
                Some(name) => write!(f, "{name} {}", var.ty)?,
                None => write!(f, "{}", var.ty)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let last = self.params.len().saturating_sub(1);
        for (i, var) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(name) = var.name() {
                write!(f, "{name} ")?;
            }
            match &var.ty {
                Type::Slice { elem } if self.variadic && i == last => write!(f, "...{elem}")?,
                ty => write!(f, "{ty}")?,
            }
        }
        f.write_str(")")?;
        match self.results.vars.as_slice() {
            [] => Ok(()),
            [single] if single.name().is_none() => write!(f, " {}", single.ty),
            _ => write!(f, " ({})", self.results),
        }
    }
}
