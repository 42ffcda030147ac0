//! selfservice-locale
//!
//! Validated locale tables for the cloud self-service web UI.
//!
//! The UI translates its labels by exact lookup: the canonical English
//! string is the key, the translated string the value. This crate
//! provides the immutable [`LocaleTable`] behind that lookup, typed
//! loaders for the on-disk locale formats, a [`LocaleCatalog`] over a
//! directory of locales and the bundled `fr_CA` data.
//!
//! ```
//! let table = selfservice_locale::locales::fr_ca()?;
//! assert_eq!(table.get("Cancel"), Some("Annuler"));
//! assert_eq!(table.get("no such label"), None);
//! # Ok::<(), selfservice_locale::MalformedTable>(())
//! ```

pub mod catalog;
pub mod error;
pub mod loader;
pub mod locales;
pub mod placeholder;
pub mod table;

pub use catalog::LocaleCatalog;
pub use error::MalformedTable;
pub use placeholder::PlaceholderViolation;
pub use table::LocaleTable;
