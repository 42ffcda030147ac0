//! Placeholder token checks for translated strings.
//!
//! Some UI strings carry tokens that the consumer substitutes after
//! lookup: `%i` (per-instance wildcard, replaced with a running number
//! when several machines are created at once) and `#` (count marker in
//! batch-action labels like `Create # VMs`). A translation that drops
//! such a token breaks the substitution step, so translations are
//! checked for token preservation at load time.

use crate::table::LocaleTable;

/// Tokens the consuming UI substitutes after lookup.
const TOKENS: [&str; 2] = ["%i", "#"];

/// A key whose translation lost a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderViolation {
    /// The source string carrying the token.
    pub key: String,
    /// The token missing from the translation.
    pub token: &'static str,
}

/// Which placeholder tokens appear in `text`.
#[must_use]
pub fn tokens(text: &str) -> Vec<&'static str> {
    TOKENS.into_iter().filter(|token| text.contains(token)).collect()
}

/// Entries whose key carries a placeholder token that the translated
/// value does not.
///
/// Violations are not fatal (the table stays loadable and the affected
/// entries still resolve); callers decide whether to surface them.
/// [`crate::loader`] logs each one as a warning.
#[must_use]
pub fn violations(table: &LocaleTable) -> Vec<PlaceholderViolation> {
    let mut found = Vec::new();
    for (key, value) in table.iter() {
        for token in tokens(key) {
            if !value.contains(token) {
                found.push(PlaceholderViolation { key: key.to_string(), token });
            }
        }
    }
    found
}
