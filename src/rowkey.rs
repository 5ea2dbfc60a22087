//! Row identity assignment for the table renderer.
//!
//! The renderer needs a key per row that is unique within a render pass and,
//! when the record carries a natural identifier, stable across renders.
//! Records without an identifier get a memoized synthetic key: generated once
//! for the row's slot and reused on every subsequent pass until the list is
//! replaced.

use crate::types::PostRecord;
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Per-row identity token consumed by the rendering layer. Never persisted
/// and never sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(String);

impl RowKey {
    pub fn natural(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn synthetic(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of synthetic key material. Injectable so tests stay deterministic.
pub trait KeyGenerator: Send {
    fn generate(&mut self) -> String;
}

/// Production generator backed by random UUIDs.
#[derive(Debug, Default)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

pub struct RowKeyAssigner {
    generator: Box<dyn KeyGenerator>,
    synthetic: Vec<Option<RowKey>>,
}

impl RowKeyAssigner {
    pub fn new(generator: Box<dyn KeyGenerator>) -> Self {
        Self {
            generator,
            synthetic: Vec::new(),
        }
    }

    /// Forget memoized synthetic keys. Called when the list is replaced.
    pub fn reset(&mut self) {
        self.synthetic.clear();
    }

    /// Assign a key to every row of one render pass.
    ///
    /// Natural identifiers win; a duplicate or missing identifier falls back
    /// to the slot's memoized synthetic key. The returned keys are pairwise
    /// distinct.
    pub fn keys_for(&mut self, rows: &[PostRecord]) -> Vec<RowKey> {
        if self.synthetic.len() < rows.len() {
            self.synthetic.resize(rows.len(), None);
        }

        let mut seen: HashSet<RowKey> = HashSet::with_capacity(rows.len());
        let mut keys = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let natural = row
                .natural_id()
                .map(RowKey::natural)
                .filter(|key| !seen.contains(key));
            let key = match natural {
                Some(key) => key,
                None => self.synthetic_for(index, &seen),
            };
            seen.insert(key.clone());
            keys.push(key);
        }
        keys
    }

    fn synthetic_for(&mut self, index: usize, seen: &HashSet<RowKey>) -> RowKey {
        if let Some(existing) = &self.synthetic[index] {
            if !seen.contains(existing) {
                return existing.clone();
            }
        }
        let mut key = RowKey::synthetic(self.generator.generate());
        while seen.contains(&key) {
            key = RowKey::synthetic(self.generator.generate());
        }
        self.synthetic[index] = Some(key.clone());
        key
    }
}

impl Default for RowKeyAssigner {
    fn default() -> Self {
        Self::new(Box::new(UuidKeyGenerator))
    }
}

#[cfg(test)]
pub mod testing {
    use super::KeyGenerator;

    /// Deterministic generator producing "syn-0", "syn-1", ...
    #[derive(Debug, Default)]
    pub struct SequentialKeyGenerator {
        next: u64,
    }

    impl KeyGenerator for SequentialKeyGenerator {
        fn generate(&mut self) -> String {
            let token = format!("syn-{}", self.next);
            self.next += 1;
            token
        }
    }
}
