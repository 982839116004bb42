//! Fuzzy resolution of free-text employee names.
//!
//! Defect events reference employees by name string rather than foreign
//! key, so the aggregator has to link "alice", "Alice Smith", or a partial
//! spelling back to a canonical employee record. Matching is
//! case-insensitive: exact full-name lookup first, then an ordered
//! substring scan. The first candidate in source-list order wins; there is
//! no scoring and no ambiguity error.

use std::collections::HashMap;

use crate::types::DbId;

/// Lookup index built once per aggregation from the employee reference list.
pub struct NameIndex {
    exact: HashMap<String, DbId>,
    entries: Vec<IndexEntry>,
}

struct IndexEntry {
    id: DbId,
    full: String,
    first: String,
}

impl NameIndex {
    /// Build the index from `(id, first_name, last_name)` triples in
    /// reference-list order.
    pub fn build<'a, I>(employees: I) -> Self
    where
        I: IntoIterator<Item = (DbId, &'a str, &'a str)>,
    {
        let mut exact = HashMap::new();
        let mut entries = Vec::new();

        for (id, first_name, last_name) in employees {
            let first = normalize(first_name);
            let full = normalize(&format!("{} {}", first_name.trim(), last_name.trim()));

            // On duplicate full names the earliest entry wins.
            exact.entry(full.clone()).or_insert(id);
            entries.push(IndexEntry { id, full, first });
        }

        Self { exact, entries }
    }

    /// Resolve a free-text name to an employee id, or `None` if no
    /// candidate matches. Callers treat `None` as a silent skip.
    pub fn resolve(&self, raw: &str) -> Option<DbId> {
        let query = normalize(raw);
        if query.is_empty() {
            return None;
        }

        if let Some(&id) = self.exact.get(&query) {
            return Some(id);
        }

        // Partial match: substring containment in either direction against
        // the full name or the first name, first hit in list order.
        self.entries
            .iter()
            .find(|e| contains_either(&query, &e.full) || contains_either(&query, &e.first))
            .map(|e| e.id)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn contains_either(query: &str, candidate: &str) -> bool {
    !candidate.is_empty() && (query.contains(candidate) || candidate.contains(query))
}
