use std::fmt;

/// Nesting level of open `START` blocks. -1 means no block is open.
pub type ScopeDepth = i32;

pub const GLOBAL_DEPTH: ScopeDepth = -1;

/// A declared variable as held by the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRecord {
    pub scope_depth: ScopeDepth,
    pub value: f64,
    pub name: String,
}

impl VariableRecord {
    pub fn new(scope_depth: ScopeDepth, value: f64, name: &str) -> Self {
        Self {
            scope_depth,
            value,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for VariableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.scope_depth, self.value, self.name)
    }
}

/// Identity of a declaration, kept on the scope-order stack. It carries no
/// value so assignments only ever touch the symbol table's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    pub name: String,
    pub scope_depth: ScopeDepth,
}

impl From<&VariableRecord> for ScopeEntry {
    fn from(record: &VariableRecord) -> Self {
        Self {
            name: record.name.clone(),
            scope_depth: record.scope_depth,
        }
    }
}
