//! The query-string mutator every results-page control builds its
//! navigation target with.
//!
//! A query string is parsed once into an ordered list of pairs, changed with
//! [`QueryString::set`] / [`QueryString::remove`], then serialized. Pairs that
//! a change does not touch are written back exactly as they were read, so a
//! mutation never re-encodes the rest of the address bar.

use crate::encode::{decode_component, encode_component_into};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    key: String,
    value: String,
    /// Segment text as read from the address bar; `None` once rewritten.
    raw: Option<String>,
}

impl Pair {
    fn parse(segment: &str) -> Self {
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(segment), String::new()),
        };
        Self {
            key,
            value,
            raw: Some(segment.to_owned()),
        }
    }

    fn write_into(&self, buffer: &mut String) {
        if let Some(raw) = &self.raw {
            buffer.push_str(raw);
            return;
        }
        encode_component_into(buffer, &self.key);
        buffer.push('=');
        encode_component_into(buffer, &self.value);
    }
}

/// Ordered `key=value` pairs of a page's query component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<Pair>,
}

impl QueryString {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    /// Empty segments such as `&&` are dropped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        if query.is_empty() {
            return Self::new();
        }

        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(Pair::parse)
            .collect();

        Self { pairs }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|pair| pair.key == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|pair| (pair.key.as_str(), pair.value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.key.as_str())
    }

    /// Set a key to a single value.
    ///
    /// The first existing occurrence is overwritten in place and any later
    /// occurrences are dropped; an absent key is appended at the end. An
    /// occurrence already holding `value` keeps its original text.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found_first = false;
        self.pairs.retain_mut(|pair| {
            if pair.key != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            if pair.value != value {
                value.clone_into(&mut pair.value);
                pair.raw = None;
            }
            true
        });
        if !found_first {
            self.pairs.push(Pair {
                key: key.to_owned(),
                value: value.to_owned(),
                raw: None,
            });
        }
    }

    /// Remove every pair with the given key. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|pair| pair.key != key);
        self.pairs.len() != before
    }

    /// Apply a single [`ParamChange`].
    pub fn apply(&mut self, change: &ParamChange) {
        match change {
            ParamChange::Set { key, value } => self.set(key, value),
            ParamChange::Remove { key } => {
                self.remove(key);
            }
        }
    }

    /// Convert to query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            pair.write_into(&mut result);
        }
        result
    }
}

impl core::fmt::Display for QueryString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for QueryString {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// A request to set or remove one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamChange {
    Set { key: String, value: String },
    Remove { key: String },
}

impl ParamChange {
    /// An empty or missing value means removal.
    pub fn new<'a>(key: &str, value: impl Into<Option<&'a str>>) -> Self {
        match value.into() {
            Some(value) if !value.is_empty() => Self::Set {
                key: key.to_owned(),
                value: value.to_owned(),
            },
            _ => Self::Remove {
                key: key.to_owned(),
            },
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Set { key, .. } | Self::Remove { key } => key,
        }
    }

    /// Compute the query string that results from applying this change to `current`.
    pub fn apply_to(&self, current: &str) -> String {
        match self {
            Self::Set { key, value } => {
                let mut query = QueryString::parse(current);
                query.set(key, value);
                query.serialize()
            }
            Self::Remove { key } => {
                let result = remove(current, key);
                // no parameter left, so no question mark either
                if result == "?" { String::new() } else { result }
            }
        }
    }
}

/// Compute the query string to navigate to after setting `key` to `value`.
///
/// `current` is the page's query component (`""` or starting with `?`). An
/// empty or `None` value removes the key. The result is empty or starts
/// with `?`, holds `key` at most once and keeps every other pair in order.
///
/// ```
/// assert_eq!(serp::change("?q=cats&p=2", "p", "3"), "?q=cats&p=3");
/// assert_eq!(serp::change("?p=2", "p", ""), "");
/// ```
pub fn change<'a>(current: &str, key: &str, value: impl Into<Option<&'a str>>) -> String {
    ParamChange::new(key, value).apply_to(current)
}

/// Remove `key` from `current`. An absent key returns `current` unchanged.
pub fn remove(current: &str, key: &str) -> String {
    let mut query = QueryString::parse(current);
    if query.remove(key) {
        query.serialize()
    } else {
        current.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(QueryString::parse("").is_empty());
        assert!(QueryString::parse("?").is_empty());
    }

    #[test]
    fn test_parse_decodes() {
        let query = QueryString::parse("?q=big+cats&safe=f");
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("q"), Some("big cats"));
        assert_eq!(query.get("safe"), Some("f"));
        assert_eq!(query.get("p"), None);
    }

    #[test]
    fn test_parse_no_value() {
        let query = QueryString::parse("?debug&q=x");
        assert_eq!(query.get("debug"), Some(""));
        assert_eq!(query.serialize(), "?debug&q=x");
    }

    #[test]
    fn test_set_keeps_position() {
        let mut query = QueryString::parse("?q=cats&p=2&t=images");
        query.set("p", "3");
        assert_eq!(query.serialize(), "?q=cats&p=3&t=images");
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let mut query = QueryString::parse("?p=1&q=cats&p=2");
        query.set("p", "5");
        assert_eq!(query.serialize(), "?p=5&q=cats");
    }

    #[test]
    fn test_set_encodes_new_value() {
        let mut query = QueryString::parse("?q=cats");
        query.set("q", "!w big cats");
        assert_eq!(query.serialize(), "?q=%21w+big+cats");
        assert_eq!(query.get("q"), Some("!w big cats"));
    }

    #[test]
    fn test_set_same_value_keeps_raw_text() {
        let mut query = QueryString::parse("?q=big%20cats");
        query.set("q", "big cats");
        assert_eq!(query.serialize(), "?q=big%20cats");

        let mut query = QueryString::parse("?q=big+cats");
        query.set("q", "big cats");
        assert_eq!(query.serialize(), "?q=big+cats");
    }

    #[test]
    fn test_untouched_pairs_keep_raw_text() {
        let mut query = QueryString::parse("?q=caf%C3%A9%20au%20lait&p=2");
        query.set("p", "3");
        assert_eq!(query.serialize(), "?q=caf%C3%A9%20au%20lait&p=3");
    }

    #[test]
    fn test_remove_all_occurrences() {
        let mut query = QueryString::parse("?f=a&q=x&f=b");
        assert!(query.remove("f"));
        assert_eq!(query.serialize(), "?q=x");
        assert!(!query.remove("f"));
    }

    #[test]
    fn test_param_change_new() {
        assert_eq!(
            ParamChange::new("q", "cats"),
            ParamChange::Set {
                key: "q".into(),
                value: "cats".into()
            }
        );
        assert_eq!(ParamChange::new("q", ""), ParamChange::Remove { key: "q".into() });
        assert_eq!(ParamChange::new("q", None), ParamChange::Remove { key: "q".into() });
    }

    #[test]
    fn test_change() {
        assert_eq!(change("", "q", "cats"), "?q=cats");
        assert_eq!(change("?q=cats", "q", "dogs"), "?q=dogs");
        assert_eq!(change("?q=cats&p=2", "p", "3"), "?q=cats&p=3");
        assert_eq!(change("?q=cats", "p", "2"), "?q=cats&p=2");
        assert_eq!(change("?q=cats&p=2", "p", ""), "?q=cats");
        assert_eq!(change("?p=2", "p", ""), "");
    }

    #[test]
    fn test_change_empty_current_and_empty_value() {
        assert_eq!(change("", "t", ""), "");
        assert_eq!(change("?", "t", None), "");
        assert_eq!(remove("?", "t"), "?");
        assert_eq!(change("?", "q", "x"), "?q=x");
    }

    #[test]
    fn test_change_exact_key_match() {
        // "q" must not match "query"
        assert_eq!(change("?query=a", "q", "b"), "?query=a&q=b");
        assert_eq!(remove("?query=a", "q"), "?query=a");
    }

    #[test]
    fn test_remove() {
        assert_eq!(remove("?q=cats&p=2&t=images", "p"), "?q=cats&t=images");
        assert_eq!(remove("?p=2&q=cats", "p"), "?q=cats");
        assert_eq!(remove("?q=cats&p=2", "p"), "?q=cats");
        assert_eq!(remove("?p=2", "p"), "");
    }

    #[test]
    fn test_remove_absent_is_identity() {
        assert_eq!(remove("", "p"), "");
        assert_eq!(remove("?q=cats&&x", "p"), "?q=cats&&x");
    }
}
