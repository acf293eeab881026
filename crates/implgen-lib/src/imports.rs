//! Transitive import collection.

use indexmap::IndexSet;
use tracing::trace;

use implgen_core::{ModulePath, Signature, Type};

/// Distinct modules referenced by a set of types, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSet {
    modules: IndexSet<ModulePath>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports of a single root type.
    pub fn of(ty: &Type) -> Self {
        let mut imports = Self::new();
        collect_imports(ty, &mut imports);
        imports
    }

    /// Returns `true` if the module was not present yet.
    pub fn insert(&mut self, module: ModulePath) -> bool {
        self.modules.insert(module)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.modules.iter().any(|module| module.as_str() == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModulePath> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a ModulePath;
    type IntoIter = indexmap::set::Iter<'a, ModulePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

/// Add the module of every named type reachable from `ty` to `imports`.
///
/// Named types are references: their definitions are never entered, which
/// also keeps self-referential types finite.
pub fn collect_imports(ty: &Type, imports: &mut ImportSet) {
    match ty {
        Type::Basic { .. } => {}
        Type::Named(named) => {
            // Universe types (`error`, `any`) need no import.
            if let Some(module) = &named.module {
                if imports.insert(module.clone()) {
                    trace!(module = %module, via = %named.name, "import");
                }
            }
        }
        Type::Pointer { elem } | Type::Slice { elem } | Type::Array { elem, .. } => {
            collect_imports(elem, imports)
        }
        Type::Chan { elem, .. } => collect_imports(elem, imports),
        Type::Map { key, value } => {
            collect_imports(key, imports);
            collect_imports(value, imports);
        }
        Type::Tuple { vars } => {
            for var in vars {
                collect_imports(&var.ty, imports);
            }
        }
        Type::Signature(sig) => collect_signature_imports(sig, imports),
        Type::Struct(s) => {
            for field in &s.fields {
                collect_imports(&field.ty, imports);
            }
        }
        Type::Interface(iface) => {
            for method in &iface.methods {
                collect_imports(&method.ty, imports);
            }
        }
    }
}

/// Parameters first, then results.
pub fn collect_signature_imports(sig: &Signature, imports: &mut ImportSet) {
    for var in sig.params.iter().chain(sig.results.iter()) {
        collect_imports(&var.ty, imports);
    }
}
