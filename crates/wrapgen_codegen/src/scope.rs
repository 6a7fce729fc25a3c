use std::collections::HashSet;

/// Chain of lexically-nested scopes tracking which type-variable
/// identifiers have already been declared.
///
/// A type variable's bound clause is emitted only the first time the
/// variable is seen; nested renders (a bound, a compound-type member) open
/// a child frame so identifiers they introduce never leak into the
/// enclosing declaration. Lookups walk up the chain; declarations mutate
/// only the current frame.
#[derive(Debug, Default)]
pub struct ScopeChain<'p> {
    parent: Option<&'p ScopeChain<'p>>,
    declared: HashSet<String>,
}

impl<'p> ScopeChain<'p> {
    /// Opens the root frame for one top-level render.
    pub fn root() -> ScopeChain<'static> {
        ScopeChain {
            parent: None,
            declared: HashSet::new(),
        }
    }

    /// Opens a nested frame; the parent stays immutable for its lifetime.
    pub fn child(&self) -> ScopeChain<'_> {
        ScopeChain {
            parent: Some(self),
            declared: HashSet::new(),
        }
    }

    pub fn is_declared(&self, id: &str) -> bool {
        if self.declared.contains(id) {
            return true;
        }
        match self.parent {
            Some(parent) => parent.is_declared(id),
            None => false,
        }
    }

    pub fn declare(&mut self, id: impl Into<String>) {
        self.declared.insert(id.into());
    }
}
