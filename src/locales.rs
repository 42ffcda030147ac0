//! Locale tables bundled with the crate.
//!
//! The data files live under `locales/` in the source tree, one
//! directory per locale, and are embedded at compile time. Parsing
//! still goes through the regular loader, so the bundled data is
//! subject to the same validation as any external file.

use crate::error::MalformedTable;
use crate::loader;
use crate::table::LocaleTable;

/// Legacy source of the French-Canadian table.
const FR_CA_SOURCE: &str = include_str!("../locales/fr_CA/fr_CA.js");

/// The French-Canadian (`fr_CA`) table shipped with the UI.
///
/// # Errors
/// Returns [`MalformedTable`] if the bundled source fails validation;
/// with an unmodified crate this does not happen.
pub fn fr_ca() -> Result<LocaleTable, MalformedTable> {
    loader::from_js_str(FR_CA_SOURCE)
}
