//! Loader for the JSON form of a locale document.
//!
//! The document mirrors the legacy source one-to-one:
//!
//! ```json
//! {
//!   "lang": "fr_CA",
//!   "datatable_lang": "fr_datatable.txt",
//!   "locale": { "Cancel": "Annuler" }
//! }
//! ```
//!
//! The entry map gets a hand-written `Deserialize` so repeated keys are
//! collected rather than silently collapsed last-wins, letting the
//! table constructor reject them like it does for the legacy form.

use std::fmt;

use serde::Deserialize;
use serde::de::{
    self,
    MapAccess,
    Visitor,
};

use crate::error::MalformedTable;
use crate::table::LocaleTable;

/// Parse a JSON locale document into a validated table.
pub(super) fn parse(source: &str) -> Result<LocaleTable, MalformedTable> {
    let document: LocaleDocument = serde_json::from_str(source)?;
    LocaleTable::from_entries(document.lang, document.datatable_lang, document.locale.0)
}

/// Top-level document shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocaleDocument {
    /// Locale identifier.
    lang: String,
    /// Auxiliary datatable localization filename.
    datatable_lang: String,
    /// The translation entries.
    locale: Entries,
}

/// Entry pairs in document order, duplicates included.
#[derive(Debug)]
struct Entries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        /// Collects every `"key": "value"` pair without de-duplicating.
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of source strings to translated strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(Entries(pairs))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
