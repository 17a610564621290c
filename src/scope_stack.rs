use crate::variable::ScopeEntry;

/// Declarations in the order they were made, newest on top. Only used to
/// know which symbols to drop when a scope closes.
pub struct ScopeStack(Vec<ScopeEntry>);

impl ScopeStack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entry: ScopeEntry) -> () {
        self.0.push(entry)
    }

    pub fn pop(&mut self) -> Option<ScopeEntry> {
        self.0.pop()
    }

    pub fn peek(&self) -> Option<&ScopeEntry> {
        self.0.last()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
