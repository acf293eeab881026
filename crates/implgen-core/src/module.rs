//! Modules: passive containers of declared types.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Type;

/// Unique module (import) path, e.g. `io` or `example.com/kv`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModulePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for ModulePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for ModulePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error while loading a module description.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// Malformed JSON, unknown type kind or unknown basic name.
    #[error("invalid module description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("module path must not be empty")]
    EmptyPath,
}

/// A reflected module: its path, package name and declared types.
///
/// `types` maps each declared name to its underlying type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub path: ModulePath,
    /// Package name; guessed from the path when absent.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: IndexMap<String, Type>,
}

impl Module {
    pub fn new(path: impl Into<ModulePath>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            types: IndexMap::new(),
        }
    }

    /// Declare a named type. Builder-style, for constructing fixtures.
    pub fn with_type(mut self, name: impl Into<String>, underlying: impl Into<Type>) -> Self {
        self.types.insert(name.into(), underlying.into());
        self
    }

    /// Parse a module from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, ModuleError> {
        let mut module: Module = serde_json::from_str(json)?;
        if module.path.as_str().is_empty() {
            return Err(ModuleError::EmptyPath);
        }
        if module.name.is_empty() {
            module.name = implgen_syntax::guess_package_name(module.path.as_str());
        }
        Ok(module)
    }

    pub fn to_json(&self) -> Result<String, ModuleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Underlying type of a declared name.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Declared names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Whether a Go identifier is exported (starts with an upper-case letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
