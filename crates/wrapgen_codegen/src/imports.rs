use std::collections::HashMap;
use wrapgen_reflect::simple_name;

const JAVA_LANG: &str = "java.lang.";

/// Per-file registry mapping simple names to fully-qualified names.
///
/// The first fully-qualified name to claim a simple name wins the
/// abbreviation; any later name that collides on the simple name is
/// rendered fully qualified. Bindings persist for the whole file.
#[derive(Debug, Default, Clone)]
pub struct ImportTable {
    bindings: HashMap<String, String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortens a fully-qualified name when unambiguous.
    ///
    /// Unqualified names (primitives, `void`, bare type variables passed
    /// through) are returned as-is. Direct members of `java.lang` are
    /// always abbreviated without entering the table; nested types under
    /// `java.lang` do not qualify.
    pub fn resolve(&mut self, full_name: &str) -> String {
        if !full_name.contains('.') {
            return full_name.to_string();
        }
        if let Some(rest) = full_name.strip_prefix(JAVA_LANG) {
            if !rest.contains('.') {
                return rest.to_string();
            }
        }
        let simple = simple_name(full_name);
        match self.bindings.get(simple) {
            Some(bound) if bound == full_name => simple.to_string(),
            Some(_) => full_name.to_string(),
            None => {
                self.bindings
                    .insert(simple.to_string(), full_name.to_string());
                simple.to_string()
            }
        }
    }

    pub fn lookup(&self, simple: &str) -> Option<&str> {
        self.bindings.get(simple).map(String::as_str)
    }

    /// The import section: one line per distinct qualified name,
    /// lexicographically sorted, with a blank line whenever the leading
    /// namespace segment changes.
    pub fn import_lines(&self) -> Vec<String> {
        let mut names: Vec<&String> = self.bindings.values().collect();
        names.sort();

        let mut lines = Vec::with_capacity(names.len());
        let mut previous_root: Option<&str> = None;
        for name in names {
            let root = name.split('.').next().unwrap_or(name);
            if let Some(previous) = previous_root {
                if previous != root {
                    lines.push(String::new());
                }
            }
            lines.push(format!("import {};", name));
            previous_root = Some(root);
        }
        lines
    }
}
