//! Interface discovery in a module.

use std::collections::HashSet;

use tracing::debug;

use implgen_core::{Interface, Module, is_exported};

/// An exported interface declared by a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterfaceEntry<'m> {
    pub name: &'m str,
    pub interface: &'m Interface,
}

/// Exported names whose underlying type is an interface, in ascending name order.
pub fn find_interfaces(module: &Module) -> Vec<InterfaceEntry<'_>> {
    let entries: Vec<_> = module
        .names()
        .into_iter()
        .filter(|name| is_exported(name))
        .filter_map(|name| {
            let interface = module.lookup(name)?.as_interface()?;
            Some(InterfaceEntry { name, interface })
        })
        .collect();
    debug!(module = %module.path, count = entries.len(), "found interfaces");
    entries
}

/// Keep the entries named in `names`, in the order of `entries`.
///
/// Names that match no entry are ignored.
pub fn filter_by_name<'m, S: AsRef<str>>(
    entries: impl IntoIterator<Item = InterfaceEntry<'m>>,
    names: &[S],
) -> Vec<InterfaceEntry<'m>> {
    let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
    let kept: Vec<_> = entries
        .into_iter()
        .filter(|entry| wanted.contains(entry.name))
        .collect();
    for name in missing_names(&kept, names) {
        debug!(name, "no such interface");
    }
    kept
}

/// Names that match no entry, deduplicated, in the order they were asked for.
pub(crate) fn missing_names<'n, S: AsRef<str>>(
    kept: &[InterfaceEntry<'_>],
    names: &'n [S],
) -> Vec<&'n str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| seen.insert(*name))
        .filter(|name| !kept.iter().any(|entry| entry.name == *name))
        .collect()
}
