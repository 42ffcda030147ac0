//! Scanner for the legacy locale source format.
//!
//! The format is a fragment of script source, but regular enough to
//! scan directly: `//` comment lines, two scalar string assignments
//! (`lang`, `datatable_lang`) and one `locale` assignment whose value
//! is a brace-delimited object of `"key":"value"` pairs, each
//! optionally followed by a trailing comma and the whole assignment by
//! a `;`. String escapes follow script rules: `\n`, `\t` and `\r`
//! produce control characters, any other escaped character stands for
//! itself (which covers the `\'` and `\"` sequences the translations
//! use). HTML entities and markup fragments are plain text to the
//! scanner and pass through verbatim.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::MalformedTable;
use crate::table::LocaleTable;

/// Parse legacy source text into a validated table.
pub(super) fn parse(source: &str) -> Result<LocaleTable, MalformedTable> {
    let mut scanner = Scanner::new(source);
    let mut lang: Option<String> = None;
    let mut datatable_lang: Option<String> = None;
    let mut entries: Option<Vec<(String, String)>> = None;

    loop {
        scanner.skip_trivia()?;
        if scanner.peek().is_none() {
            break;
        }
        let line = scanner.line;
        let field = scanner.read_ident()?;
        scanner.skip_trivia()?;
        scanner.expect('=')?;
        scanner.skip_trivia()?;
        match field.as_str() {
            "lang" => assign_scalar(&mut lang, "lang", scanner.read_string()?, line)?,
            "datatable_lang" => {
                assign_scalar(&mut datatable_lang, "datatable_lang", scanner.read_string()?, line)?;
            }
            "locale" => {
                if entries.is_some() {
                    return Err(MalformedTable::syntax(line, "field \"locale\" assigned twice"));
                }
                entries = Some(scanner.read_object()?);
            }
            other => {
                return Err(MalformedTable::syntax(line, format!("unknown field {other:?}")));
            }
        }
        scanner.skip_trivia()?;
        if scanner.peek() == Some(';') {
            scanner.bump();
        }
    }

    let lang = lang.ok_or(MalformedTable::MissingField { field: "lang" })?;
    let datatable_lang =
        datatable_lang.ok_or(MalformedTable::MissingField { field: "datatable_lang" })?;
    let entries = entries.ok_or(MalformedTable::MissingField { field: "locale" })?;
    LocaleTable::from_entries(lang, datatable_lang, entries)
}

/// Store a scalar assignment, rejecting reassignment.
fn assign_scalar(
    slot: &mut Option<String>,
    field: &'static str,
    value: String,
    line: u32,
) -> Result<(), MalformedTable> {
    if slot.is_some() {
        return Err(MalformedTable::syntax(line, format!("field {field:?} assigned twice")));
    }
    *slot = Some(value);
    Ok(())
}

/// Character cursor over locale source, tracking the current line for
/// error reporting.
struct Scanner<'src> {
    /// Remaining input.
    chars: Peekable<Chars<'src>>,
    /// 1-based line of the next character.
    line: u32,
}

impl<'src> Scanner<'src> {
    /// Cursor at the start of `source`.
    fn new(source: &'src str) -> Self {
        Self { chars: source.chars().peekable(), line: 1 }
    }

    /// Consume and return the next character.
    fn bump(&mut self) -> Option<char> {
        let next = self.chars.next();
        if next == Some('\n') {
            self.line += 1;
        }
        next
    }

    /// Next character without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Skip whitespace and `//` line comments.
    fn skip_trivia(&mut self) -> Result<(), MalformedTable> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    self.bump();
                    if self.peek() == Some('/') {
                        while let Some(c) = self.bump() {
                            if c == '\n' {
                                break;
                            }
                        }
                    } else {
                        return Err(MalformedTable::syntax(self.line, "unexpected '/'"));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Read an identifier (`[A-Za-z0-9_]+`).
    fn read_ident(&mut self) -> Result<String, MalformedTable> {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if ident.is_empty() {
            return Err(MalformedTable::syntax(self.line, "expected identifier"));
        }
        Ok(ident)
    }

    /// Consume exactly `expected`.
    fn expect(&mut self, expected: char) -> Result<(), MalformedTable> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(MalformedTable::syntax(
                self.line,
                format!("expected {expected:?}, found {c:?}"),
            )),
            None => Err(MalformedTable::syntax(
                self.line,
                format!("expected {expected:?}, found end of input"),
            )),
        }
    }

    /// Read a double-quoted string, resolving escapes.
    fn read_string(&mut self) -> Result<String, MalformedTable> {
        self.expect('"')?;
        let start_line = self.line;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                Some('\n') | None => {
                    return Err(MalformedTable::syntax(start_line, "unterminated string"));
                }
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    // Identity escape: the escaped character stands for
                    // itself (covers \' and \").
                    Some(c) => value.push(c),
                    None => {
                        return Err(MalformedTable::syntax(start_line, "unterminated string"));
                    }
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// Read a `{ "key":"value", ... }` object into ordered pairs.
    ///
    /// Pairs are returned unde-duplicated; the table constructor is
    /// responsible for rejecting repeated keys.
    fn read_object(&mut self) -> Result<Vec<(String, String)>, MalformedTable> {
        self.expect('{')?;
        let mut pairs = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                break;
            }
            let key = self.read_string()?;
            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;
            let value = self.read_string()?;
            pairs.push((key, value));
            self.skip_trivia()?;
            match self.bump() {
                Some(',') => {}
                Some('}') => break,
                Some(c) => {
                    return Err(MalformedTable::syntax(
                        self.line,
                        format!("expected ',' or '}}', found {c:?}"),
                    ));
                }
                None => {
                    return Err(MalformedTable::syntax(self.line, "unterminated object"));
                }
            }
        }
        Ok(pairs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_parse_minimal_source() {
        let source = r#"//Translated by somebody
lang="fr_CA"
datatable_lang="fr_datatable.txt"
locale={
    "Cancel":"Annuler",
    "Close":"Fermer"
};
"#;

        let table = parse(source).unwrap();

        expect_that!(table.language_code(), eq("fr_CA"));
        expect_that!(table.auxiliary_resource(), eq("fr_datatable.txt"));
        expect_that!(table.len(), eq(2));
        expect_that!(table.get("Cancel"), some(eq("Annuler")));
        expect_that!(table.get("Close"), some(eq("Fermer")));
    }

    #[googletest::test]
    fn test_parse_trailing_comma_and_empty_object() {
        let source = r#"
lang="en_US"
datatable_lang="en_datatable.txt"
locale={
    "OK":"OK",
};
"#;
        let table = parse(source).unwrap();
        expect_that!(table.len(), eq(1));

        let source = r#"
lang="en_US"
datatable_lang="en_datatable.txt"
locale={};
"#;
        let table = parse(source).unwrap();
        expect_that!(table.is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_parse_escapes() {
        let source = r#"
lang="fr_CA"
datatable_lang="fr_datatable.txt"
locale={
    "Confirmation of action":"Confirmation de l\'action",
    "Take a \'snapshot\'":"Prendre un \"instantané\"",
    "Tab":"a\tb"
};
"#;

        let table = parse(source).unwrap();

        expect_that!(
            table.get("Confirmation of action"),
            some(eq("Confirmation de l'action"))
        );
        expect_that!(table.get("Take a 'snapshot'"), some(eq("Prendre un \"instantané\"")));
        expect_that!(table.get("Tab"), some(eq("a\tb")));
    }

    #[googletest::test]
    fn test_parse_entities_verbatim() {
        let source = r#"
lang="fr_CA"
datatable_lang="fr_datatable.txt"
locale={
    "Compute":"Machines&nbsp;virtuelles"
};
"#;

        let table = parse(source).unwrap();

        expect_that!(table.get("Compute"), some(eq("Machines&nbsp;virtuelles")));
    }

    #[googletest::test]
    fn test_parse_duplicate_key() {
        let source = r#"
lang="fr_CA"
datatable_lang="fr_datatable.txt"
locale={
    "Close":"Fermer",
    "Close":"Clore"
};
"#;

        let result = parse(source);

        assert!(matches!(result, Err(MalformedTable::DuplicateKey { key }) if key == "Close"));
    }

    #[rstest]
    #[case("datatable_lang=\"x\"\nlocale={};\n", "lang")]
    #[case("lang=\"fr_CA\"\nlocale={};\n", "datatable_lang")]
    #[case("lang=\"fr_CA\"\ndatatable_lang=\"x\"\n", "locale")]
    fn test_parse_missing_field(#[case] source: &str, #[case] field: &str) {
        let result = parse(source);

        assert!(
            matches!(result, Err(MalformedTable::MissingField { field: found }) if found == field)
        );
    }

    #[rstest]
    // Unterminated string on line 2
    #[case("lang=\"fr_CA\ndatatable_lang=\"x\"\nlocale={};\n", 1)]
    // Unknown field
    #[case("language=\"fr_CA\"\n", 1)]
    // Missing '=' on line 2
    #[case("lang=\"fr_CA\"\ndatatable_lang \"x\"\nlocale={};\n", 2)]
    // Bare word instead of a quoted key on line 3
    #[case("lang=\"fr_CA\"\ndatatable_lang=\"x\"\nlocale={ key:\"v\" };\n", 3)]
    fn test_parse_syntax_error_lines(#[case] source: &str, #[case] expected_line: u32) {
        let result = parse(source);

        assert!(
            matches!(result, Err(MalformedTable::Syntax { line, .. }) if line == expected_line)
        );
    }

    #[googletest::test]
    fn test_parse_reassigned_scalar() {
        let source = "lang=\"fr_CA\"\nlang=\"en_US\"\ndatatable_lang=\"x\"\nlocale={};\n";

        let result = parse(source);

        assert!(matches!(result, Err(MalformedTable::Syntax { line: 2, .. })));
    }
}
