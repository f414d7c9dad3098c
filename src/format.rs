//! Input Format Reference
//!
//! This module documents the INI dialect accepted by this library and the
//! typing rules applied to values on their way into JSON.
//!
//! # Overview
//!
//! Input is line-oriented UTF-8 text. Each field occurrence becomes one
//! `(key, value)` pair; occurrences sharing a key accumulate in input
//! order. The output is always a JSON object whose members are arrays.
//!
//! # Lines
//!
//! | Line | Meaning |
//! |------|---------|
//! | `key = value` | One field occurrence |
//! | `key` | Field with the configured true token as its value |
//! | `key =` | Same as a bare key |
//! | `[section]` | Start prefixing keys with `section` |
//! | `[]` | Return to top level |
//! | `; text` or `# text` | Comment, ignored |
//! | blank | Ignored |
//!
//! **Rules**:
//! - Surrounding whitespace is trimmed from lines, keys, and unquoted
//!   values; CRLF line endings are accepted
//! - The key is everything left of the *first* `=`; later `=` characters
//!   belong to the value
//! - An empty key (`= value`) is a syntax error
//! - Comments are whole lines only; `;` inside a value is value text
//!
//! # Sections and key construction
//!
//! A section heading sets the prefix for subsequent keys. The full key is
//! `prefix` + separator + `key` (separator configurable, default `.`),
//! and the configured case transformation is then applied to the whole
//! joined key:
//!
//! ```text
//! [db]
//! host = localhost    ; records key "db.host"
//! ```
//!
//! Repeating a section heading simply resumes that prefix; occurrences
//! keep accumulating.
//!
//! # Quoted values
//!
//! A value starting with `"` runs to the closing quote. Escapes: `\\`,
//! `\"`, `\n`, `\r`, `\t`, `\0`, and `\uXXXX`. Unknown escapes are kept
//! literally. Quoting preserves surrounding whitespace and keeps the
//! quote characters out of the recorded text; the recorded text is still
//! classified like any other value. Non-whitespace after the closing
//! quote is a syntax error.
//!
//! # Value typing
//!
//! Typed mode classifies each recorded value in priority order; the first
//! match wins:
//!
//! | Priority | Shape | Accepts | Example |
//! |----------|-------|---------|---------|
//! | 1 | Integer | Optional sign, base-10 digits, unbounded magnitude | `8080`, `-42` |
//! | 2 | Decimal | Decimal literal, optional fraction and `e` exponent | `3.14`, `1e10` |
//! | 3 | Boolean | Exactly `true` or `false` | `true` |
//! | 4 | JSON | One standalone JSON document | `[1,2]`, `null`, `{"a":1}` |
//! | 5 | String | Anything else, verbatim | `0x10`, `127.0.0.1` |
//!
//! Numbers are carried at full precision end to end: integers never pass
//! through a float, and decimals serialize from their exact decimal text.
//! Classification is total; there is no such thing as an untypable value.
//!
//! Raw mode skips classification entirely and records every value as a
//! string.
//!
//! # The valueless-field rule
//!
//! Fields without a value record the configured true token (default
//! `true`). The substitution happens during reading, before
//! classification, so a custom token is typed like any other text: with
//! `--true-value yes` a bare `debug` line becomes the JSON string
//! `"yes"`, not a boolean.
