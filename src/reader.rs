//! INI reading.
//!
//! [`Reader`] scans flat key/value configuration text and feeds one
//! `(key, value)` pair per field occurrence into any [`Recorder`]. It owns
//! everything about the INI surface so the recorders never have to: prefix
//! joining, case transformation, the valueless-field rule, comments, and
//! quoted values.
//!
//! ## Accepted input
//!
//! - `key = value` records one occurrence; the key is everything left of
//!   the first `=`, trimmed.
//! - A bare `key` line, or `key =` with nothing after the `=`, records the
//!   configured true token (default `true`).
//! - `[section]` starts a prefix: subsequent keys record as
//!   `section<separator>key`. `[]` returns to top level.
//! - Values starting with `"` are quoted: backslash escapes are resolved
//!   and the text between the quotes is recorded exactly.
//! - Full-line comments start with `;` or `#`. There are no inline
//!   comments; a `;` inside a value is value text.
//! - Blank lines are skipped, CRLF line endings are accepted.
//!
//! ## Examples
//!
//! ```rust
//! use ini2json::{Reader, TypedValues};
//!
//! let ini = "\
//! ; server settings
//! port = 8080
//! [db]
//! host = localhost
//! ";
//!
//! let mut values = TypedValues::new();
//! Reader::new().read_str(ini, &mut values).unwrap();
//! assert!(values.get("port").is_some());
//! assert!(values.get("db.host").is_some());
//! ```

use crate::{Error, ReaderOptions, Recorder, Result};
use std::io;

/// Scans INI text and records every field occurrence into a [`Recorder`].
///
/// The reader holds no storage of its own; it can be reused across any
/// number of inputs, which is how multi-file merging works.
///
/// # Examples
///
/// ```rust
/// use ini2json::{Reader, ReaderOptions, TypedValues};
///
/// let reader = Reader::with_options(ReaderOptions::new().with_separator("/"));
/// let mut values = TypedValues::new();
/// reader.read_str("[a]\nb = 1\n", &mut values).unwrap();
/// assert!(values.get("a/b").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Reader {
    options: ReaderOptions,
}

impl Reader {
    /// Creates a reader with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ReaderOptions::default())
    }

    /// Creates a reader with the given options.
    #[must_use]
    pub fn with_options(options: ReaderOptions) -> Self {
        Reader { options }
    }

    /// Returns the reader's options.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Reads INI text from an I/O stream into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input is not valid INI.
    pub fn read<R, D>(&self, mut input: R, dest: &mut D) -> Result<()>
    where
        R: io::Read,
        D: Recorder + ?Sized,
    {
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .map_err(|e| Error::io(&e.to_string()))?;
        self.read_str(&text, dest)
    }

    /// Reads INI text from a string into `dest`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error with line/column information if the input is
    /// not valid INI.
    pub fn read_str<D>(&self, input: &str, dest: &mut D) -> Result<()>
    where
        D: Recorder + ?Sized,
    {
        let mut prefix = String::new();
        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            let col_base = raw.len() - raw.trim_start().len() + 1;
            if let Some(body) = line.strip_prefix('[') {
                prefix = self.parse_section(body, line_no, col_base)?;
                continue;
            }
            self.record_field(line, line_no, col_base, &prefix, dest)?;
        }
        Ok(())
    }

    /// Parses the remainder of a `[section]` line, returning the new prefix.
    fn parse_section(&self, body: &str, line: usize, col: usize) -> Result<String> {
        let Some(end) = body.find(']') else {
            return Err(Error::syntax(line, col, "unterminated section header"));
        };
        let rest = body[end + 1..].trim();
        if !rest.is_empty() {
            return Err(Error::syntax(
                line,
                col + end + 2,
                "unexpected characters after section header",
            ));
        }
        Ok(body[..end].trim().to_string())
    }

    /// Splits one field line, resolves its value, and records it.
    fn record_field<D>(
        &self,
        line: &str,
        line_no: usize,
        col_base: usize,
        prefix: &str,
        dest: &mut D,
    ) -> Result<()>
    where
        D: Recorder + ?Sized,
    {
        let (key, value_part) = match line.find('=') {
            None => (line, None),
            Some(at) => {
                let rest = &line[at + 1..];
                let pad = rest.len() - rest.trim_start().len();
                (
                    line[..at].trim_end(),
                    Some((rest.trim(), col_base + at + 1 + pad)),
                )
            }
        };
        if key.is_empty() {
            return Err(Error::syntax(line_no, col_base, "field has an empty key"));
        }
        let value = match value_part {
            // The valueless-field rule: bare keys and empty values record
            // the configured true token.
            None | Some(("", _)) => self.options.true_value.clone(),
            Some((text, col)) if text.starts_with('"') => self.parse_quoted(text, line_no, col)?,
            Some((text, _)) => text.to_string(),
        };
        let key = self.qualify(prefix, key);
        dest.add(&key, &value);
        Ok(())
    }

    /// Resolves a double-quoted value, including backslash escapes.
    fn parse_quoted(&self, text: &str, line: usize, col: usize) -> Result<String> {
        let mut out = String::new();
        let mut chars = text.char_indices();
        chars.next(); // opening quote
        while let Some((at, ch)) = chars.next() {
            match ch {
                '"' => {
                    let rest = text[at + 1..].trim();
                    if !rest.is_empty() {
                        return Err(Error::syntax(
                            line,
                            col + at + 1,
                            "unexpected characters after quoted value",
                        ));
                    }
                    return Ok(out);
                }
                '\\' => match chars.next() {
                    Some((_, '\\')) => out.push('\\'),
                    Some((_, '"')) => out.push('"'),
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, '0')) => out.push('\0'),
                    Some((_, 'u')) => {
                        // Unicode escape: \uXXXX
                        let mut hex = String::new();
                        for _ in 0..4 {
                            match chars.next() {
                                Some((_, digit)) if digit.is_ascii_hexdigit() => hex.push(digit),
                                _ => {
                                    return Err(Error::syntax(
                                        line,
                                        col,
                                        "invalid unicode escape sequence (expected 4 hex digits)",
                                    ))
                                }
                            }
                        }
                        let code_point = u32::from_str_radix(&hex, 16).map_err(|_| {
                            Error::syntax(line, col, "invalid hex in unicode escape")
                        })?;
                        let escaped = char::from_u32(code_point).ok_or_else(|| {
                            Error::syntax(line, col, "invalid unicode code point")
                        })?;
                        out.push(escaped);
                    }
                    // Unknown escape - preserve literally (lenient parsing)
                    Some((_, other)) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => return Err(Error::syntax(line, col, "unterminated quoted value")),
                },
                other => out.push(other),
            }
        }
        Err(Error::syntax(line, col, "unterminated quoted value"))
    }

    /// Joins the active prefix to a key and applies the case transform.
    fn qualify(&self, prefix: &str, key: &str) -> String {
        let joined = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", prefix, self.options.separator, key)
        };
        self.options.casing.apply(joined)
    }
}
