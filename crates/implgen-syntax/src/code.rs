//! Go syntax fragment tree.

use std::fmt;

/// Channel direction marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

/// Literal value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lit {
    Int(u64),
    Str(String),
    Bool(bool),
}

/// A fragment of Go source.
///
/// Fragments nest freely; the printer decides spacing and indentation.
/// `Empty` prints nothing and is used for absent result lists and bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Code {
    #[default]
    Empty,
    Ident(String),
    /// Package-qualified identifier. Printed with the import alias of `path`,
    /// or bare when `path` is the file's own package.
    Qual {
        path: String,
        name: String,
    },
    Lit(Lit),
    /// `*T`
    Pointer(Box<Code>),
    /// `[]T`
    Slice(Box<Code>),
    /// `[N]T`
    Array {
        len: Box<Code>,
        elem: Box<Code>,
    },
    /// `map[K]V`
    Map {
        key: Box<Code>,
        value: Box<Code>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<Code>,
    },
    /// `...T`
    Ellipsis(Box<Code>),
    /// `name T`: a parameter, result or struct field.
    Field {
        name: String,
        ty: Box<Code>,
    },
    /// `(a, b)`
    Params(Vec<Code>),
    /// `a, b`
    List(Vec<Code>),
    /// `func(params) results`
    FuncType {
        params: Box<Code>,
        results: Box<Code>,
    },
    Struct(Vec<Code>),
    Interface(Vec<Code>),
    /// `Name(params) results` inside an interface.
    MethodSpec {
        name: String,
        params: Box<Code>,
        results: Box<Code>,
    },
    Func(Box<Func>),
    /// `type Name T`
    TypeDecl {
        name: String,
        ty: Box<Code>,
    },
    /// Statement list in braces.
    Block(Vec<Code>),
    Return(Vec<Code>),
    Call {
        func: Box<Code>,
        args: Vec<Code>,
    },
    /// `*x`
    Deref(Box<Code>),
    /// `T{}`
    Composite(Box<Code>),
    Comment(String),
}

/// Function or method declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Func {
    /// Receiver parameter list, e.g. `(s *Stub)`.
    pub receiver: Option<Code>,
    pub name: String,
    pub params: Code,
    pub results: Code,
    pub body: Code,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            receiver: None,
            name: name.into(),
            params: Code::Params(Vec::new()),
            results: Code::Empty,
            body: Code::Empty,
        }
    }

    pub fn receiver(mut self, receiver: Code) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn params(mut self, params: Code) -> Self {
        self.params = params;
        self
    }

    pub fn results(mut self, results: Code) -> Self {
        self.results = results;
        self
    }

    pub fn body(mut self, body: Code) -> Self {
        self.body = body;
        self
    }
}

impl From<Func> for Code {
    fn from(func: Func) -> Self {
        Code::Func(Box::new(func))
    }
}

impl Code {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn qual(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qual {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn int(value: u64) -> Self {
        Self::Lit(Lit::Int(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Lit(Lit::Str(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Self::Lit(Lit::Bool(value))
    }

    pub fn nil() -> Self {
        Self::id("nil")
    }

    pub fn pointer(self) -> Self {
        Self::Pointer(Box::new(self))
    }

    pub fn slice(self) -> Self {
        Self::Slice(Box::new(self))
    }

    pub fn array(self, len: u64) -> Self {
        Self::Array {
            len: Box::new(Self::int(len)),
            elem: Box::new(self),
        }
    }

    pub fn map(key: Code, value: Code) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(self, dir: ChanDir) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(self),
        }
    }

    pub fn ellipsis(self) -> Self {
        Self::Ellipsis(Box::new(self))
    }

    pub fn field(name: impl Into<String>, ty: Code) -> Self {
        Self::Field {
            name: name.into(),
            ty: Box::new(ty),
        }
    }

    pub fn params(items: impl IntoIterator<Item = Code>) -> Self {
        Self::Params(items.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = Code>) -> Self {
        Self::List(items.into_iter().collect())
    }

    pub fn func_type(params: Code, results: Code) -> Self {
        Self::FuncType {
            params: Box::new(params),
            results: Box::new(results),
        }
    }

    pub fn structure(fields: impl IntoIterator<Item = Code>) -> Self {
        Self::Struct(fields.into_iter().collect())
    }

    pub fn interface(methods: impl IntoIterator<Item = Code>) -> Self {
        Self::Interface(methods.into_iter().collect())
    }

    pub fn method_spec(name: impl Into<String>, params: Code, results: Code) -> Self {
        Self::MethodSpec {
            name: name.into(),
            params: Box::new(params),
            results: Box::new(results),
        }
    }

    pub fn type_decl(name: impl Into<String>, ty: Code) -> Self {
        Self::TypeDecl {
            name: name.into(),
            ty: Box::new(ty),
        }
    }

    pub fn block(stmts: impl IntoIterator<Item = Code>) -> Self {
        Self::Block(stmts.into_iter().collect())
    }

    pub fn ret(values: impl IntoIterator<Item = Code>) -> Self {
        Self::Return(values.into_iter().collect())
    }

    pub fn call(self, args: impl IntoIterator<Item = Code>) -> Self {
        Self::Call {
            func: Box::new(self),
            args: args.into_iter().collect(),
        }
    }

    pub fn deref(self) -> Self {
        Self::Deref(Box::new(self))
    }

    pub fn composite(self) -> Self {
        Self::Composite(Box::new(self))
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Visit every qualified reference, depth first.
    pub fn walk_quals<'a>(&'a self, f: &mut impl FnMut(&'a str, &'a str)) {
        match self {
            Self::Qual { path, name } => f(path.as_str(), name.as_str()),
            Self::Empty | Self::Ident(_) | Self::Lit(_) | Self::Comment(_) => {}
            Self::Pointer(inner)
            | Self::Slice(inner)
            | Self::Ellipsis(inner)
            | Self::Deref(inner)
            | Self::Composite(inner) => inner.walk_quals(f),
            Self::Chan { elem, .. } => elem.walk_quals(f),
            Self::Field { ty, .. } | Self::TypeDecl { ty, .. } => ty.walk_quals(f),
            Self::Array { len, elem } => {
                len.walk_quals(f);
                elem.walk_quals(f);
            }
            Self::Map { key, value } => {
                key.walk_quals(f);
                value.walk_quals(f);
            }
            Self::FuncType { params, results } | Self::MethodSpec { params, results, .. } => {
                params.walk_quals(f);
                results.walk_quals(f);
            }
            Self::Params(items)
            | Self::List(items)
            | Self::Struct(items)
            | Self::Interface(items)
            | Self::Block(items)
            | Self::Return(items) => {
                for item in items {
                    item.walk_quals(f);
                }
            }
            Self::Call { func, args } => {
                func.walk_quals(f);
                for arg in args {
                    arg.walk_quals(f);
                }
            }
            Self::Func(func) => {
                if let Some(receiver) = &func.receiver {
                    receiver.walk_quals(f);
                }
                func.params.walk_quals(f);
                func.results.walk_quals(f);
                func.body.walk_quals(f);
            }
        }
    }

    /// Print with default settings and guessed package names.
    pub fn render(&self) -> String {
        crate::Printer::new(&crate::Config::default(), None).print(self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
