//! Hash-bucketed symbol table.
//!
//! Each bucket is a chain of records ordered oldest to newest, so the head of
//! a chain (the most recent declaration) is the last element. Lookups scan
//! from the head, which is what makes inner declarations shadow outer ones.

use std::fmt;

use crate::variable::{ScopeEntry, VariableRecord};

pub const TABLE_SIZE: usize = 12;

pub struct SymbolTable {
    buckets: Vec<Vec<VariableRecord>>,
}

/// Sum of byte values weighted by their 1-based position, modulo the bucket count.
pub fn hash(name: &str) -> usize {
    name.bytes()
        .enumerate()
        .fold(0usize, |acc, (i, b)| acc.wrapping_add(b as usize * (i + 1)))
        % TABLE_SIZE
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            buckets: (0..TABLE_SIZE).map(|_| Vec::new()).collect(),
        }
    }

    pub fn insert(&mut self, record: VariableRecord) -> () {
        let index = hash(&record.name);
        self.buckets[index].push(record);
    }

    /// Removes the most recent record matching `entry` by name and depth.
    ///
    /// Scope teardown always hands entries back in reverse declaration
    /// order, so the match is the bucket's head in practice.
    pub fn remove(&mut self, entry: &ScopeEntry) -> Option<VariableRecord> {
        let chain = &mut self.buckets[hash(&entry.name)];
        let position = chain
            .iter()
            .rposition(|r| r.name == entry.name && r.scope_depth == entry.scope_depth)?;
        if position + 1 != chain.len() {
            tracing::warn!(
                name = %entry.name,
                depth = entry.scope_depth,
                "removing a record that is not at the head of its bucket"
            );
        }
        Some(chain.remove(position))
    }

    pub fn lookup(&self, name: &str) -> Option<&VariableRecord> {
        self.buckets[hash(name)].iter().rev().find(|r| r.name == name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut VariableRecord> {
        self.buckets[hash(name)]
            .iter_mut()
            .rev()
            .find(|r| r.name == name)
    }

    #[cfg(test)]
    pub fn bucket(&self, index: usize) -> &[VariableRecord] {
        &self.buckets[index]
    }
}

/// One line per bucket, head first; `[]` for an empty bucket.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chain in &self.buckets {
            if chain.is_empty() {
                writeln!(f, "[]")?;
                continue;
            }
            let records: Vec<String> = chain.iter().rev().map(|r| r.to_string()).collect();
            writeln!(f, "{}", records.join(" "))?;
        }
        Ok(())
    }
}
