//! Import alias assignment.

use std::collections::{BTreeMap, BTreeSet};

/// Import paths of a file and the package names they are referred to by.
#[derive(Clone, Debug, Default)]
pub struct ImportTable {
    /// The file's own import path; references to it stay unqualified.
    local: Option<String>,
    /// Import path -> alias, sorted by path
    aliases: BTreeMap<String, String>,
    /// Aliases already taken (for collision avoidance)
    used: BTreeSet<String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for a file whose own import path is `path`.
    pub fn for_package(path: impl Into<String>) -> Self {
        Self {
            local: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn is_local(&self, path: &str) -> bool {
        self.local.as_deref() == Some(path)
    }

    /// Register an import path and return its alias.
    ///
    /// Returns `None` for the file's own path, which is never imported.
    pub fn add(&mut self, path: &str) -> Option<&str> {
        let name = guess_package_name(path);
        self.add_named(path, &name)
    }

    /// Register an import path whose package name is known.
    ///
    /// The alias is `name`, numbered on collision. A path that is already
    /// registered keeps its alias.
    pub fn add_named(&mut self, path: &str, name: &str) -> Option<&str> {
        if self.is_local(path) {
            return None;
        }
        if !self.aliases.contains_key(path) {
            let alias = self.unique_alias(name);
            self.aliases.insert(path.to_string(), alias);
        }
        self.aliases.get(path).map(String::as_str)
    }

    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    /// `(path, alias)` pairs, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn unique_alias(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }

        let mut counter = 2;
        loop {
            let alias = format!("{}{}", base, counter);
            if self.used.insert(alias.clone()) {
                return alias;
            }
            counter += 1;
        }
    }
}

/// Guess the package name declared by the module at `path`.
///
/// Uses the last path segment, skipping a major version suffix (`/v2`),
/// dropping a `.vN`-style extension and `go-`/`-go` affixes, and keeping
/// only identifier characters.
///
/// # Examples
/// ```
/// use implgen_syntax::guess_package_name;
/// assert_eq!(guess_package_name("net/http"), "http");
/// assert_eq!(guess_package_name("gopkg.in/yaml.v3"), "yaml");
/// assert_eq!(guess_package_name("github.com/jackc/pgx/v5"), "pgx");
/// ```
pub fn guess_package_name(path: &str) -> String {
    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
    let mut last = segments.next().unwrap_or(path);
    if is_major_version(last) {
        if let Some(prev) = segments.next() {
            last = prev;
        }
    }

    let last = last.split('.').next().unwrap_or(last);
    let last = last.strip_prefix("go-").unwrap_or(last);
    let last = last.strip_suffix("-go").unwrap_or(last);

    let name: String = last
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("pkg{name}")
    } else {
        name
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}
