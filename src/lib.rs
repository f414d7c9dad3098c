//! # ini2json
//!
//! Convert flat key/value configuration text (INI) into typed JSON
//! documents.
//!
//! ## What it does
//!
//! INI files are untyped: every value is a string. This crate reads them
//! and decides, per value, which JSON shape the string should become —
//! integer, decimal, boolean, embedded JSON, or plain string — while
//! preserving arbitrary-precision numbers exactly (no value is ever
//! squeezed through an `f64` on its way to the output).
//!
//! ## Key Features
//!
//! - **Typed values**: `8080` becomes a JSON number, `true` a boolean,
//!   `[1,2]` an array, `0x10` stays the string `"0x10"`
//! - **Precision-Preserving**: integers of unbounded magnitude and
//!   decimals with any number of digits survive byte-for-byte
//! - **Multi-valued keys**: repeated keys accumulate into arrays in input
//!   order; every field renders as an array, so consumers never
//!   special-case cardinality
//! - **Raw mode**: an alternate recorder keeps every value verbatim when
//!   type inference is unwanted
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ini2json = "0.1"
//! ```
//!
//! ### Converting a string
//!
//! ```rust
//! use ini2json::{parse_str, to_json};
//!
//! let ini = "\
//! port = 8080
//! debug
//! [db]
//! host = localhost
//! ";
//!
//! let values = parse_str(ini).unwrap();
//! let json = to_json(&values).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"port":[8080],"debug":[true],"db.host":["localhost"]}"#
//! );
//! ```
//!
//! ### Raw mode
//!
//! ```rust
//! use ini2json::{to_json, RawValues, Reader};
//!
//! let mut values = RawValues::new();
//! Reader::new().read_str("port = 8080\n", &mut values).unwrap();
//! assert_eq!(to_json(&values).unwrap(), r#"{"port":["8080"]}"#);
//! ```
//!
//! ### Recording values directly
//!
//! The reader is one producer of `(key, value)` pairs; anything that can
//! call [`Recorder::add`] works:
//!
//! ```rust
//! use ini2json::{Recorder, TypedValues};
//!
//! let mut values = TypedValues::new();
//! values.add("tags", "a");
//! values.add("tags", "b");
//! assert_eq!(values.get("tags").map(<[_]>::len), Some(2));
//! ```
//!
//! ## Precision Guarantees
//!
//! - Integer-looking strings parse at unbounded magnitude and never touch
//!   a float path
//! - Decimal values are held exactly and serialized as raw JSON number
//!   tokens; a 40-digit decimal reserializes unchanged
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Value classification is total and never panics
//! - Proper error propagation with `Result` types for I/O and syntax
//!   failures

pub mod error;
pub mod format;
pub mod number;
pub mod options;
pub mod reader;
pub mod record;
pub mod value;

pub use error::{Error, Result};
pub use number::BigNumber;
pub use options::{Casing, ReaderOptions};
pub use reader::Reader;
pub use record::{RawValues, Recorder, TypedValues};
pub use value::Value;

use serde::Serialize;
use std::io;

/// Parses INI text into a typed value collection with default options.
///
/// # Examples
///
/// ```rust
/// use ini2json::parse_str;
///
/// let values = parse_str("port = 8080\n").unwrap();
/// assert!(values.get("port").unwrap()[0].is_int());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(input: &str) -> Result<TypedValues> {
    parse_str_with_options(input, ReaderOptions::default())
}

/// Parses INI text into a typed value collection with custom options.
///
/// # Examples
///
/// ```rust
/// use ini2json::{parse_str_with_options, Casing, ReaderOptions};
///
/// let options = ReaderOptions::new().with_casing(Casing::Lower);
/// let values = parse_str_with_options("PORT = 8080\n", options).unwrap();
/// assert!(values.get("port").is_some());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(input: &str, options: ReaderOptions) -> Result<TypedValues> {
    let mut values = TypedValues::new();
    Reader::with_options(options).read_str(input, &mut values)?;
    Ok(values)
}

/// Parses INI text from an I/O stream into a typed value collection.
///
/// # Examples
///
/// ```rust
/// use ini2json::parse_reader;
/// use std::io::Cursor;
///
/// let values = parse_reader(Cursor::new(b"port = 8080\n")).unwrap();
/// assert!(values.get("port").is_some());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(input: R) -> Result<TypedValues>
where
    R: io::Read,
{
    parse_reader_with_options(input, ReaderOptions::default())
}

/// Parses INI text from an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid INI.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader_with_options<R>(input: R, options: ReaderOptions) -> Result<TypedValues>
where
    R: io::Read,
{
    let mut values = TypedValues::new();
    Reader::with_options(options).read(input, &mut values)?;
    Ok(values)
}

/// Serializes a value collection to a compact JSON string.
///
/// Decimal and big-integer values are emitted as raw number tokens via
/// their own serialization hooks; nothing is rounded through `f64`.
///
/// # Examples
///
/// ```rust
/// use ini2json::{parse_str, to_json};
///
/// let values = parse_str("x = 1\n").unwrap();
/// assert_eq!(to_json(&values).unwrap(), r#"{"x":[1]}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json<T>(values: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(values).map_err(Error::encode)
}

/// Serializes a value collection to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_pretty<T>(values: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(values).map_err(Error::encode)
}

/// Serializes a value collection as compact JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_writer<W, T>(writer: W, values: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    serde_json::to_writer(writer, values).map_err(Error::encode)
}

/// Serializes a value collection as pretty-printed JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_writer_pretty<W, T>(writer: W, values: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    serde_json::to_writer_pretty(writer, values).map_err(Error::encode)
}
