//! Country lookup injected by the caller
//!
//! The ledger only ever stores codes. Display names come from a directory the
//! host application provides, usually loaded from a JSON file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

/// Read-only dictionary keyed by country code
pub trait CountryDirectory: Send + Sync {
    /// Display name for a code, if known
    fn name(&self, code: &str) -> Option<&str>;

    /// Countries whose name contains `query` or whose code equals it
    fn search(&self, query: &str) -> Vec<&Country>;

    /// Display name, falling back to the code itself
    fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }
}

/// In-memory country directory
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    countries: Vec<Country>,
    by_code: HashMap<String, usize>,
}

impl CountryTable {
    pub fn new(countries: Vec<Country>) -> Self {
        let by_code = countries
            .iter()
            .enumerate()
            .map(|(idx, country)| (country.code.to_uppercase(), idx))
            .collect();

        Self { countries, by_code }
    }

    /// Load a JSON array of `{ "code", "name" }` objects
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read country table {}", path.display()))?;
        let countries: Vec<Country> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid country table {}", path.display()))?;
        Ok(Self::new(countries))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl CountryDirectory for CountryTable {
    fn name(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&code.to_uppercase())
            .map(|&idx| self.countries[idx].name.as_str())
    }

    fn search(&self, query: &str) -> Vec<&Country> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&Country> = self
            .countries
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query) || c.code.to_lowercase() == query)
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }
}
