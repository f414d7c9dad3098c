//! Value recording: the capability INI readers write into.
//!
//! A [`Recorder`] accepts repeated `(key, value)` string pairs, one call
//! per field occurrence in the input. Two interchangeable implementations
//! are provided and selected once at startup:
//!
//! - [`TypedValues`]: classifies each value with [`Value::infer`] before
//!   storing it (the default mode)
//! - [`RawValues`]: stores every value verbatim as a string, for operators
//!   who want the input text preserved with no type inference
//!
//! Both are insertion-ordered multimaps. Recording the same key twice is
//! the expected way multi-valued fields are produced, not an overwrite:
//! every key maps to an ordered sequence of values in call order, and the
//! JSON output renders every field as an array even when it holds a single
//! occurrence, so consumers never special-case cardinality.
//!
//! ## Examples
//!
//! ```rust
//! use ini2json::{Recorder, TypedValues};
//!
//! let mut values = TypedValues::new();
//! values.add("tags", "a");
//! values.add("tags", "b");
//! values.add("port", "8080");
//!
//! assert_eq!(values.get("tags").map(<[_]>::len), Some(2));
//! assert_eq!(
//!     serde_json::to_string(&values).unwrap(),
//!     r#"{"tags":["a","b"],"port":[8080]}"#
//! );
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Accepts repeated `(key, value)` pairs from an INI reader.
///
/// `add` never fails: any key (including the empty string) and any value
/// (including the empty string) are representable. Each call appends to
/// the key's sequence; the collection is never left partially updated.
pub trait Recorder {
    /// Records one occurrence of `key` with the raw text `value`.
    ///
    /// The key arrives fully qualified (prefix joining and case
    /// transformation already applied by the reader), and the value
    /// arrives with no surrounding whitespace.
    fn add(&mut self, key: &str, value: &str);
}

/// A recorder that classifies values into their typed JSON forms.
///
/// Each recorded value passes through [`Value::infer`]; each key holds its
/// occurrences in call order. Serializes as a JSON object mapping every
/// key to an array.
///
/// # Examples
///
/// ```rust
/// use ini2json::{Recorder, TypedValues};
///
/// let mut values = TypedValues::new();
/// values.add("port", "8080");
/// assert!(values.get("port").unwrap()[0].is_int());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedValues(IndexMap<String, Vec<Value>>);

/// A recorder that stores every value verbatim.
///
/// No coercion: the JSON output contains only strings. Selected when the
/// operator wants value text preserved exactly as it appeared.
///
/// # Examples
///
/// ```rust
/// use ini2json::{RawValues, Recorder};
///
/// let mut values = RawValues::new();
/// values.add("port", "8080");
/// assert_eq!(
///     serde_json::to_string(&values).unwrap(),
///     r#"{"port":["8080"]}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawValues(IndexMap<String, Vec<String>>);

impl TypedValues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        TypedValues(IndexMap::new())
    }

    /// Returns the recorded sequence for `key`, in call order.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the number of distinct keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over `(key, occurrences)` pairs, in
    /// first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl Recorder for TypedValues {
    fn add(&mut self, key: &str, value: &str) {
        let value = Value::infer(value);
        self.0.entry(key.to_string()).or_default().push(value);
    }
}

impl Serialize for TypedValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, occurrences) in &self.0 {
            map.serialize_entry(key, occurrences)?;
        }
        map.end()
    }
}

impl IntoIterator for TypedValues {
    type Item = (String, Vec<Value>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Vec<Value>)> for TypedValues {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Value>)>>(iter: T) -> Self {
        TypedValues(IndexMap::from_iter(iter))
    }
}

impl RawValues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        RawValues(IndexMap::new())
    }

    /// Returns the recorded sequence for `key`, in call order.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the number of distinct keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over `(key, occurrences)` pairs, in
    /// first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl Recorder for RawValues {
    fn add(&mut self, key: &str, value: &str) {
        self.0
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
}

impl Serialize for RawValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, occurrences) in &self.0 {
            map.serialize_entry(key, occurrences)?;
        }
        map.end()
    }
}

impl IntoIterator for RawValues {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Vec<String>)> for RawValues {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        RawValues(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_accumulate_in_call_order() {
        let mut values = TypedValues::new();
        values.add("k", "1");
        values.add("k", "two");
        let recorded = values.get("k").unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], Value::from(1));
        assert_eq!(recorded[1], Value::from("two"));
    }

    #[test]
    fn test_single_occurrence_is_still_a_sequence() {
        let mut values = TypedValues::new();
        values.add("k", "1");
        assert_eq!(values.get("k").map(<[_]>::len), Some(1));
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"{"k":[1]}"#
        );
    }

    #[test]
    fn test_empty_key_and_empty_value_are_accepted() {
        let mut values = TypedValues::new();
        values.add("", "");
        assert_eq!(values.get("").unwrap(), &[Value::String(String::new())]);

        let mut raw = RawValues::new();
        raw.add("", "");
        assert_eq!(raw.get("").unwrap(), &[String::new()]);
    }

    #[test]
    fn test_keys_keep_first_insertion_order() {
        let mut values = TypedValues::new();
        values.add("b", "1");
        values.add("a", "2");
        values.add("b", "3");
        let keys: Vec<_> = values.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_raw_mode_never_coerces() {
        let mut raw = RawValues::new();
        raw.add("port", "8080");
        raw.add("debug", "true");
        raw.add("data", "[1,2]");
        assert_eq!(
            serde_json::to_string(&raw).unwrap(),
            r#"{"port":["8080"],"debug":["true"],"data":["[1,2]"]}"#
        );
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut values = TypedValues::new();
        assert!(values.is_empty());
        values.add("a", "1");
        values.add("a", "2");
        assert_eq!(values.len(), 1);
        assert!(!values.is_empty());
    }

    #[test]
    fn test_into_iterator_yields_sequences() {
        let mut values = TypedValues::new();
        values.add("a", "1");
        values.add("a", "2");
        let collected: Vec<_> = values.into_iter().collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].1.len(), 2);
    }
}
