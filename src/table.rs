//! Immutable locale table: one target language, exact-match lookup.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::error::MalformedTable;

/// An immutable mapping from canonical (English) UI strings to their
/// translations for one target locale.
///
/// A table carries two scalar metadata fields next to its entries: the
/// language code (e.g. `fr_CA`) and the name of an auxiliary datatable
/// localization file consumed by the UI's table widget.
///
/// Once constructed a table is never mutated, so it can be shared
/// across any number of concurrent readers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    /// Locale identifier as declared in the source (`lang`).
    language_code: String,
    /// Auxiliary resource filename (`datatable_lang`).
    datatable_lang: String,
    /// Source string → translated string.
    entries: HashMap<String, String>,
}

impl LocaleTable {
    /// Build a table from its metadata and an entry sequence.
    ///
    /// The entry sequence is validated as it is consumed: a repeated
    /// source string aborts construction, so a malformed source can
    /// never yield a partially-loaded table.
    ///
    /// # Errors
    /// - [`MalformedTable::MissingField`] if `language_code` or
    ///   `datatable_lang` is empty
    /// - [`MalformedTable::DuplicateKey`] on a repeated source string
    pub fn from_entries<I>(
        language_code: impl Into<String>,
        datatable_lang: impl Into<String>,
        entries: I,
    ) -> Result<Self, MalformedTable>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let language_code = language_code.into();
        if language_code.is_empty() {
            return Err(MalformedTable::MissingField { field: "lang" });
        }
        let datatable_lang = datatable_lang.into();
        if datatable_lang.is_empty() {
            return Err(MalformedTable::MissingField { field: "datatable_lang" });
        }

        let iter = entries.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            match map.entry(key) {
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                hash_map::Entry::Occupied(slot) => {
                    return Err(MalformedTable::DuplicateKey { key: slot.key().clone() });
                }
            }
        }

        Ok(Self { language_code, datatable_lang, entries: map })
    }

    /// Look up the translation for an exact key.
    ///
    /// Matching is exact and case-sensitive on the full string,
    /// including punctuation and embedded markup. A miss returns
    /// `None`; whether to fall back to the key itself or to another
    /// locale is the caller's policy, not this crate's.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Locale identifier, e.g. `fr_CA`.
    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Name of the auxiliary datatable localization file associated
    /// with this locale, e.g. `fr_datatable.txt`. Consumers that embed
    /// the table widget load this file themselves.
    #[must_use]
    pub fn auxiliary_resource(&self) -> &str {
        &self.datatable_lang
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an exact key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the source strings, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(source, translation)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn sample() -> LocaleTable {
        LocaleTable::from_entries(
            "fr_CA",
            "fr_datatable.txt",
            [
                ("Cancel".to_string(), "Annuler".to_string()),
                ("OK".to_string(), "OK".to_string()),
            ],
        )
        .unwrap()
    }

    #[googletest::test]
    fn test_get_exact_match() {
        let table = sample();

        expect_that!(table.get("Cancel"), some(eq("Annuler")));
        expect_that!(table.get("OK"), some(eq("OK")));
    }

    #[googletest::test]
    fn test_get_miss_is_none() {
        let table = sample();

        expect_that!(table.get("nonexistent-key"), none());
        // Case-sensitive: no normalization of any kind.
        expect_that!(table.get("cancel"), none());
        expect_that!(table.get("Cancel "), none());
    }

    #[googletest::test]
    fn test_metadata_is_constant() {
        let table = sample();

        for _ in 0..3 {
            expect_that!(table.language_code(), eq("fr_CA"));
            expect_that!(table.auxiliary_resource(), eq("fr_datatable.txt"));
        }
    }

    #[googletest::test]
    fn test_duplicate_key_rejected() {
        let result = LocaleTable::from_entries(
            "fr_CA",
            "fr_datatable.txt",
            [
                ("Close".to_string(), "Fermer".to_string()),
                ("Close".to_string(), "Clore".to_string()),
            ],
        );

        assert!(matches!(result, Err(MalformedTable::DuplicateKey { key }) if key == "Close"));
    }

    #[googletest::test]
    fn test_empty_metadata_rejected() {
        let result = LocaleTable::from_entries("", "fr_datatable.txt", []);
        assert!(matches!(result, Err(MalformedTable::MissingField { field: "lang" })));

        let result = LocaleTable::from_entries("fr_CA", "", []);
        assert!(matches!(result, Err(MalformedTable::MissingField { field: "datatable_lang" })));
    }

    #[googletest::test]
    fn test_empty_translation_is_kept() {
        // An explicitly empty translation is representable; only
        // metadata emptiness is fatal.
        let table = LocaleTable::from_entries(
            "fr_CA",
            "fr_datatable.txt",
            [("style".to_string(), String::new())],
        )
        .unwrap();

        expect_that!(table.get("style"), some(eq("")));
    }

    #[googletest::test]
    fn test_len_and_iter() {
        let table = sample();

        expect_that!(table.len(), eq(2));
        expect_that!(table.is_empty(), eq(false));
        expect_that!(table.contains_key("OK"), eq(true));

        let mut keys: Vec<&str> = table.keys().collect();
        keys.sort_unstable();
        expect_that!(keys, elements_are![eq(&"Cancel"), eq(&"OK")]);
    }
}
