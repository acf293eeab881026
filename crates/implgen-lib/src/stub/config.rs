//! Configuration for stub file generation.

use crate::{BodyStyle, Receiver};

pub const DEFAULT_HEADER: &str = "Code generated by implgen. DO NOT EDIT.";

/// Configuration for stub file generation.
#[derive(Clone, Debug)]
pub struct StubConfig {
    /// Receiver of every generated method
    pub(crate) receiver: Receiver,
    /// Body of every generated method
    pub(crate) body: BodyStyle,
    /// Panic message for `BodyStyle::Panic`
    pub(crate) message: String,
    /// Whether to emit `type <Receiver> struct{}`
    pub(crate) declare_type: bool,
    /// Output package name; defaults to the module's package
    pub(crate) package: Option<String>,
    /// Output package import path; types from it print unqualified
    pub(crate) package_path: Option<String>,
    /// Comment above the package clause
    pub(crate) header: Option<String>,
    /// Printer settings
    pub(crate) syntax: implgen_syntax::Config,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            receiver: Receiver::new("s", "Stub"),
            body: BodyStyle::default(),
            message: "not implemented".to_string(),
            declare_type: false,
            package: None,
            package_path: None,
            header: Some(DEFAULT_HEADER.to_string()),
            syntax: implgen_syntax::Config::default(),
        }
    }
}

impl StubConfig {
    /// Create a new StubConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the receiver type name.
    pub fn receiver_type(mut self, name: impl Into<String>) -> Self {
        self.receiver.type_name = name.into();
        self
    }

    /// Set the receiver binding name.
    pub fn binding(mut self, name: impl Into<String>) -> Self {
        self.receiver.binding = name.into();
        self
    }

    /// Set whether methods take a pointer receiver.
    pub fn pointer(mut self, value: bool) -> Self {
        self.receiver.pointer = value;
        self
    }

    /// Set the method body style.
    pub fn body(mut self, value: BodyStyle) -> Self {
        self.body = value;
        self
    }

    /// Set the panic message.
    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.message = value.into();
        self
    }

    /// Set whether to declare the receiver type.
    pub fn declare_type(mut self, value: bool) -> Self {
        self.declare_type = value;
        self
    }

    /// Set the output package name.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = Some(name.into());
        self
    }

    /// Set the output package import path.
    pub fn package_path(mut self, path: impl Into<String>) -> Self {
        self.package_path = Some(path.into());
        self
    }

    /// Set or clear the header comment.
    pub fn header(mut self, text: Option<String>) -> Self {
        self.header = text;
        self
    }

    /// Set the string used for one indentation level.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.syntax = self.syntax.indent(value);
        self
    }

    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }
}
