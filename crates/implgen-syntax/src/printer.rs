//! Serialization of `Code` to gofmt-style text.

use crate::imports::{ImportTable, guess_package_name};
use crate::{ChanDir, Code, Func, Lit};

/// Printer configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// One level of indentation
    pub(crate) indent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string used for one indentation level.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }
}

/// Writes fragments into a string buffer.
///
/// Qualified names resolve through `imports` when given; otherwise the
/// package name is guessed from the import path.
pub struct Printer<'a> {
    config: &'a Config,
    imports: Option<&'a ImportTable>,
    out: String,
    depth: usize,
}

impl<'a> Printer<'a> {
    pub fn new(config: &'a Config, imports: Option<&'a ImportTable>) -> Self {
        Self {
            config,
            imports,
            out: String::new(),
            depth: 0,
        }
    }

    /// Print a single fragment and return the text.
    pub fn print(mut self, code: &Code) -> String {
        self.write(code);
        self.out
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(&self.config.indent);
        }
    }

    pub(crate) fn write(&mut self, code: &Code) {
        match code {
            Code::Empty => {}
            Code::Ident(name) => self.out.push_str(name),
            Code::Qual { path, name } => self.write_qual(path, name),
            Code::Lit(lit) => self.write_lit(lit),
            Code::Pointer(elem) | Code::Deref(elem) => {
                self.out.push('*');
                self.write(elem);
            }
            Code::Slice(elem) => {
                self.out.push_str("[]");
                self.write(elem);
            }
            Code::Array { len, elem } => {
                self.out.push('[');
                self.write(len);
                self.out.push(']');
                self.write(elem);
            }
            Code::Map { key, value } => {
                self.out.push_str("map[");
                self.write(key);
                self.out.push(']');
                self.write(value);
            }
            Code::Chan { dir, elem } => self.write_chan(*dir, elem),
            Code::Ellipsis(elem) => {
                self.out.push_str("...");
                self.write(elem);
            }
            Code::Field { name, ty } => {
                self.out.push_str(name);
                if !ty.is_empty() {
                    self.out.push(' ');
                    self.write(ty);
                }
            }
            Code::Params(items) => {
                self.out.push('(');
                self.write_list(items);
                self.out.push(')');
            }
            Code::List(items) => self.write_list(items),
            Code::FuncType { params, results } => {
                self.out.push_str("func");
                self.write_signature(params, results);
            }
            Code::Struct(fields) => self.write_members("struct", fields),
            Code::Interface(methods) => self.write_members("interface", methods),
            Code::MethodSpec {
                name,
                params,
                results,
            } => {
                self.out.push_str(name);
                self.write_signature(params, results);
            }
            Code::Func(func) => self.write_func(func),
            Code::TypeDecl { name, ty } => {
                self.out.push_str("type ");
                self.out.push_str(name);
                self.out.push(' ');
                self.write(ty);
            }
            Code::Block(stmts) => self.write_block(stmts),
            Code::Return(values) => {
                self.out.push_str("return");
                if !values.is_empty() {
                    self.out.push(' ');
                    self.write_list(values);
                }
            }
            Code::Call { func, args } => {
                self.write(func);
                self.out.push('(');
                self.write_list(args);
                self.out.push(')');
            }
            Code::Composite(ty) => {
                self.write(ty);
                self.out.push_str("{}");
            }
            Code::Comment(text) => {
                for (i, line) in text.lines().enumerate() {
                    if i > 0 {
                        self.newline();
                    }
                    self.out.push_str("//");
                    if !line.is_empty() {
                        self.out.push(' ');
                        self.out.push_str(line);
                    }
                }
            }
        }
    }

    fn write_qual(&mut self, path: &str, name: &str) {
        let package = match self.imports {
            Some(imports) if imports.is_local(path) => None,
            Some(imports) => Some(
                imports
                    .alias(path)
                    .map(str::to_string)
                    .unwrap_or_else(|| guess_package_name(path)),
            ),
            None => Some(guess_package_name(path)),
        };
        if let Some(package) = package {
            self.out.push_str(&package);
            self.out.push('.');
        }
        self.out.push_str(name);
    }

    fn write_lit(&mut self, lit: &Lit) {
        match lit {
            Lit::Int(value) => self.out.push_str(&value.to_string()),
            Lit::Bool(value) => self.out.push_str(if *value { "true" } else { "false" }),
            Lit::Str(value) => {
                let quoted = quote(value);
                self.out.push_str(&quoted);
            }
        }
    }

    fn write_chan(&mut self, dir: ChanDir, elem: &Code) {
        match dir {
            ChanDir::Both => self.out.push_str("chan "),
            ChanDir::Send => self.out.push_str("chan<- "),
            ChanDir::Recv => self.out.push_str("<-chan "),
        }
        // `chan (<-chan T)` would otherwise parse as `chan<- chan T`.
        let needs_parens = matches!(
            (dir, elem),
            (
                ChanDir::Both,
                Code::Chan {
                    dir: ChanDir::Recv,
                    ..
                }
            )
        );
        if needs_parens {
            self.out.push('(');
            self.write(elem);
            self.out.push(')');
        } else {
            self.write(elem);
        }
    }

    fn write_list(&mut self, items: &[Code]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write(item);
        }
    }

    fn write_signature(&mut self, params: &Code, results: &Code) {
        self.write(params);
        if !results.is_empty() {
            self.out.push(' ');
            self.write(results);
        }
    }

    fn write_members(&mut self, keyword: &str, members: &[Code]) {
        self.out.push_str(keyword);
        if members.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str(" {");
        self.depth += 1;
        for member in members {
            self.newline();
            self.write(member);
        }
        self.depth -= 1;
        self.newline();
        self.out.push('}');
    }

    fn write_func(&mut self, func: &Func) {
        self.out.push_str("func ");
        if let Some(receiver) = &func.receiver {
            self.write(receiver);
            self.out.push(' ');
        }
        self.out.push_str(&func.name);
        self.write_signature(&func.params, &func.results);
        self.out.push(' ');
        match &func.body {
            Code::Block(stmts) => self.write_block(stmts),
            Code::Empty => self.write_block(&[]),
            stmt => self.write_block(std::slice::from_ref(stmt)),
        }
    }

    fn write_block(&mut self, stmts: &[Code]) {
        self.out.push('{');
        self.depth += 1;
        for stmt in stmts.iter().filter(|stmt| !stmt.is_empty()) {
            self.newline();
            self.write(stmt);
        }
        self.depth -= 1;
        self.newline();
        self.out.push('}');
    }
}

/// Quote a string as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
