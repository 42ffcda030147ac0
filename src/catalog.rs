//! A set of independently loaded locale tables.
//!
//! The UI keeps one directory per locale, named after the language
//! code and containing the locale file of the same name
//! (`locale/fr_CA/fr_CA.js`). The catalog loads that layout and
//! indexes the tables by their declared language code. Tables stay
//! independent of each other: there is no fallback chain and no
//! notion of an active locale here, both are consumer policy.

use std::collections::HashMap;
use std::collections::hash_map;
use std::path::Path;

use crate::error::MalformedTable;
use crate::loader;
use crate::table::LocaleTable;

/// Locale tables indexed by language code.
#[derive(Debug, Default)]
pub struct LocaleCatalog {
    /// Declared language code → its table.
    tables: HashMap<String, LocaleTable>,
}

impl LocaleCatalog {
    /// Build a catalog from already-loaded tables.
    ///
    /// # Errors
    /// Returns [`MalformedTable::DuplicateLocale`] if two tables
    /// declare the same language code.
    pub fn from_tables<I>(tables: I) -> Result<Self, MalformedTable>
    where
        I: IntoIterator<Item = LocaleTable>,
    {
        let mut catalog = Self::default();
        for table in tables {
            catalog.insert(table)?;
        }
        Ok(catalog)
    }

    /// Load every locale directory under `root`.
    ///
    /// A subdirectory `<code>/` is expected to contain `<code>.js` or
    /// `<code>.json`; subdirectories without either are skipped with a
    /// debug log. Any malformed locale file fails the whole load, so a
    /// catalog never holds a partially usable set silently.
    ///
    /// # Errors
    /// Returns [`MalformedTable`] on an unreadable directory, a
    /// malformed locale file or two tables claiming one language code.
    pub fn load_dir(root: &Path) -> Result<Self, MalformedTable> {
        tracing::debug!("Loading locale catalog from: {:?}", root);
        let mut catalog = Self::default();

        let mut dirs: Vec<_> = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        // Deterministic load order, so duplicate-locale errors are stable.
        dirs.sort();

        for dir in dirs {
            let Some(name) = dir.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            let Some(file) = ["js", "json"]
                .iter()
                .map(|ext| dir.join(format!("{name}.{ext}")))
                .find(|candidate| candidate.is_file())
            else {
                tracing::debug!("No locale file in directory, skipping: {:?}", dir);
                continue;
            };
            catalog.insert(loader::load_path(&file)?)?;
        }

        tracing::debug!("Loaded {} locale(s)", catalog.len());
        Ok(catalog)
    }

    /// Register a table under its declared language code.
    fn insert(&mut self, table: LocaleTable) -> Result<(), MalformedTable> {
        match self.tables.entry(table.language_code().to_string()) {
            hash_map::Entry::Vacant(slot) => {
                slot.insert(table);
                Ok(())
            }
            hash_map::Entry::Occupied(slot) => {
                Err(MalformedTable::DuplicateLocale { language: slot.key().clone() })
            }
        }
    }

    /// The table for an exact language code, if loaded.
    #[must_use]
    pub fn table(&self, language_code: &str) -> Option<&LocaleTable> {
        self.tables.get(language_code)
    }

    /// Loaded language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of loaded locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no locale is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
