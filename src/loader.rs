//! Typed locale file loading.
//!
//! The UI's locale files come in two shapes: the legacy source form
//! (two scalar assignments followed by a `locale` object literal) and
//! the same document as plain JSON. Both are parsed into a validated
//! [`LocaleTable`]; malformed data fails the whole load, so a partially
//! populated table is never observable.

/// Legacy source scanner
mod js;
/// JSON document loader
mod json;

use std::path::Path;

use crate::error::MalformedTable;
use crate::placeholder;
use crate::table::LocaleTable;

/// Parse a locale table from legacy source text.
///
/// # Errors
/// Returns [`MalformedTable`] on a scan failure, a duplicate key or a
/// missing field.
pub fn from_js_str(source: &str) -> Result<LocaleTable, MalformedTable> {
    js::parse(source)
}

/// Parse a locale table from a JSON document.
///
/// # Errors
/// Returns [`MalformedTable`] on a parse failure, a duplicate key or a
/// missing field.
pub fn from_json_str(source: &str) -> Result<LocaleTable, MalformedTable> {
    json::parse(source)
}

/// Load a locale table from a file, dispatching on its extension
/// (`.json` for the JSON document form, anything else for the legacy
/// source form).
///
/// After a successful load the declared language code is cross-checked
/// against the file path and the table is checked for dropped
/// placeholder tokens; both findings are logged as warnings, neither
/// fails the load.
///
/// # Errors
/// Returns [`MalformedTable`] if the file cannot be read or its
/// content does not form a valid table.
pub fn load_path(path: &Path) -> Result<LocaleTable, MalformedTable> {
    tracing::debug!("Loading locale file: {:?}", path);
    let content = std::fs::read_to_string(path)?;

    let table = if path.extension().is_some_and(|ext| ext == "json") {
        json::parse(&content)?
    } else {
        js::parse(&content)?
    };

    if !path_declares_language(path, table.language_code()) {
        tracing::warn!(
            "Locale file {:?} declares language {:?}, which does not appear in its path",
            path,
            table.language_code()
        );
    }

    for violation in placeholder::violations(&table) {
        tracing::warn!(
            "Translation of {:?} drops placeholder token {:?}",
            violation.key,
            violation.token
        );
    }

    tracing::debug!(
        "Loaded locale {:?} with {} entries",
        table.language_code(),
        table.len()
    );
    Ok(table)
}

/// Normalize a language code for comparison (lowercase, `-` → `_`).
fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

/// Whether any path component (split by `/` and `.`) matches the
/// declared language code.
///
/// The on-disk convention names both the locale directory and the file
/// after the code (`locale/fr_CA/fr_CA.js`), so a mismatch usually
/// means a copy-paste error in the source's `lang` assignment.
fn path_declares_language(path: &Path, language_code: &str) -> bool {
    let normalized = normalize_language_code(language_code);
    let path_str = path.to_string_lossy();
    path_str
        .split(['/', '\\', '.'])
        .any(|part| normalize_language_code(part) == normalized)
}
