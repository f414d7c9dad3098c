//! Configuration options for INI reading.
//!
//! This module provides types that shape how keys are constructed while
//! the input is scanned:
//!
//! - [`ReaderOptions`]: main configuration struct
//! - [`Casing`]: case transformation applied to fully joined keys
//!
//! ## Examples
//!
//! ```rust
//! use ini2json::{parse_str_with_options, Casing, ReaderOptions};
//!
//! let options = ReaderOptions::new()
//!     .with_separator("/")
//!     .with_casing(Casing::Lower)
//!     .with_true_value("yes");
//!
//! let values = parse_str_with_options("Verbose\n[DB]\nHost = local\n", options).unwrap();
//! assert_eq!(values.get("verbose").unwrap()[0].as_str(), Some("yes"));
//! assert!(values.get("db/host").is_some());
//! ```

/// Case transformation applied to fully joined keys.
///
/// The transform covers the whole key, section prefix included.
///
/// # Examples
///
/// ```rust
/// use ini2json::Casing;
///
/// assert_eq!(Casing::Preserve.apply("Db.Host".to_string()), "Db.Host");
/// assert_eq!(Casing::Lower.apply("Db.Host".to_string()), "db.host");
/// assert_eq!(Casing::Upper.apply("Db.Host".to_string()), "DB.HOST");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Casing {
    /// Keys pass through untouched
    #[default]
    Preserve,
    /// Lowercase all keys (including prefix)
    Lower,
    /// Uppercase all keys (including prefix)
    Upper,
}

impl Casing {
    /// Applies this transformation to a joined key.
    #[must_use]
    pub fn apply(self, key: String) -> String {
        match self {
            Casing::Preserve => key,
            Casing::Lower => key.to_lowercase(),
            Casing::Upper => key.to_uppercase(),
        }
    }
}

/// Configuration options for the INI [`Reader`](crate::Reader).
///
/// Controls prefix joining, key casing, and the token recorded for
/// valueless fields.
///
/// # Examples
///
/// ```rust
/// use ini2json::{Casing, ReaderOptions};
///
/// // Defaults: "." separator, no case transform, "true" for bare keys
/// let options = ReaderOptions::new();
/// assert_eq!(options.separator, ".");
///
/// // Custom configuration
/// let options = ReaderOptions::new()
///     .with_separator(":")
///     .with_casing(Casing::Upper)
///     .with_true_value("1");
/// ```
#[derive(Clone, Debug)]
pub struct ReaderOptions {
    /// Separator joining a `[section]` prefix to field names
    pub separator: String,
    /// Case transformation for joined keys
    pub casing: Casing,
    /// Value recorded for fields that appear without one
    pub true_value: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            separator: ".".to_string(),
            casing: Casing::default(),
            true_value: "true".to_string(),
        }
    }
}

impl ReaderOptions {
    /// Creates default options (`.` separator, preserved case, `true` token).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator joining section prefixes to field names.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the case transformation for joined keys.
    #[must_use]
    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    /// Sets the value recorded for fields that appear without one.
    ///
    /// A bare key line, or a key whose value is empty after trimming,
    /// records this token instead. Note the substitution happens in the
    /// reader: a token other than `true` reaches the typed recorder as
    /// ordinary text and is classified like any other value.
    #[must_use]
    pub fn with_true_value(mut self, true_value: impl Into<String>) -> Self {
        self.true_value = true_value.into();
        self
    }
}
