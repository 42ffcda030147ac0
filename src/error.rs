//! Load-time error definitions.

use thiserror::Error;

/// Defines errors that may occur while constructing a locale table.
///
/// A lookup miss is not an error: [`crate::table::LocaleTable::get`]
/// returns `None` for unknown keys. This type only covers conditions
/// that make the source data unusable, in which case no table is
/// produced at all.
#[derive(Error, Debug)]
pub enum MalformedTable {
    /// The legacy locale source could not be scanned.
    #[error("syntax error at line {line}: {message}")]
    Syntax {
        /// 1-based line in the source where scanning stopped.
        line: u32,
        /// Description of what was expected.
        message: String,
    },

    /// The same source string appears twice in one table.
    #[error("duplicate key: {key:?}")]
    DuplicateKey {
        /// The offending source string.
        key: String,
    },

    /// Two tables in a catalog declare the same language code.
    #[error("duplicate locale: {language:?}")]
    DuplicateLocale {
        /// The language code claimed by more than one table.
        language: String,
    },

    /// A required scalar field is absent or empty.
    #[error("missing or empty field: {field}")]
    MissingField {
        /// Field name as it appears in the source (`lang`,
        /// `datatable_lang` or `locale`).
        field: &'static str,
    },

    /// Error when failing to read a locale file.
    #[error("failed to read locale file: {0}")]
    Io(#[from] std::io::Error),

    /// Error when failing to parse a JSON locale document.
    #[error("failed to parse locale JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MalformedTable {
    /// Shorthand for a [`MalformedTable::Syntax`] error.
    pub(crate) fn syntax(line: u32, message: impl Into<String>) -> Self {
        Self::Syntax { line, message: message.into() }
    }
}
