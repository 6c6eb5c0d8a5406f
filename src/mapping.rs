//! Key/value mapping combinator.
//!
//! [`MappingCodec`] renders an ordered sequence of `(key, value)` pairs as
//! `key: value, key: value, …`. It is built from the other two combinators: a
//! [`ListCodec`] of identity strings supplies the item layer, a [`TupleCodec`]
//! supplies the pair layer. Input order is preserved in both directions:
//! callers control presentation order, and callers needing name-keyed lookup
//! post-process with [`parse_lookup`](MappingCodec::parse_lookup).
//!
//! ## Examples
//!
//! ```rust
//! use numform::{Codec, IdentityCodec, MappingCodec, NumberCodec, ParseableCodec};
//!
//! let codec = MappingCodec::new(IdentityCodec, NumberCodec::<i32>::new());
//! let pairs = vec![("A".to_string(), 10), ("B".to_string(), 20)];
//! assert_eq!(codec.format(&pairs), "A: 10, B: 20");
//! assert_eq!(codec.parse("A:10, B:20").unwrap(), pairs);
//! ```

use indexmap::IndexMap;

use crate::{
    Codec, CountRange, Error, IdentityCodec, ListCodec, ParseableCodec, Result, TupleCodec,
};

/// Formats and parses an ordered sequence of `(key, value)` pairs.
///
/// Keys and values each have their own codec; the key/value separator defaults
/// to `":"` (formatted as `": "`) and items are joined with `", "`. Parsed keys
/// carry no incidental surrounding whitespace: each item is trimmed before the
/// pair split runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingCodec<K, V> {
    pair: TupleCodec<K, V>,
    items: ListCodec<IdentityCodec>,
}

impl<K, V> MappingCodec<K, V> {
    /// Creates a mapping codec with `":"` between key and value and `", "`
    /// between items.
    #[must_use]
    pub fn new(key: K, value: V) -> Self {
        MappingCodec {
            pair: TupleCodec::new(key, value, ": "),
            items: ListCodec::new(IdentityCodec),
        }
    }

    /// Sets the key/value separator (format emits it followed by a space).
    #[must_use]
    pub fn with_key_separator(mut self, separator: &str) -> Self {
        self.pair = self.pair.with_separator(&format!("{separator} "));
        self
    }

    /// Sets the separator between items.
    #[must_use]
    pub fn with_item_separator(mut self, separator: &str) -> Self {
        self.items = self.items.with_separator(separator);
        self
    }

    /// Constrains how many pairs a parse may yield.
    #[must_use]
    pub fn with_count(mut self, count: CountRange) -> Self {
        self.items = self.items.with_count(count);
        self
    }
}

impl<K: Codec, V: Codec> MappingCodec<K, V> {
    /// Formats a slice of pairs without requiring an owned `Vec`.
    pub fn format_pairs(&self, pairs: &[(K::Value, V::Value)]) -> String {
        let items: Vec<String> = pairs.iter().map(|pair| self.pair.format(pair)).collect();
        self.items.format(&items)
    }
}

impl<K: Codec, V: Codec> Codec for MappingCodec<K, V> {
    type Value = Vec<(K::Value, V::Value)>;

    fn format(&self, value: &Self::Value) -> String {
        self.format_pairs(value)
    }
}

impl<K: ParseableCodec, V: ParseableCodec> ParseableCodec for MappingCodec<K, V> {
    /// Yields pairs in textual order.
    fn parse(&self, input: &str) -> Result<Self::Value> {
        self.items
            .parse(input)?
            .iter()
            .map(|item| self.pair.parse(item.trim()))
            .collect()
    }
}

impl<V: ParseableCodec> MappingCodec<IdentityCodec, V> {
    /// Parses into an ordered name → value lookup table.
    ///
    /// Later occurrences of a duplicate key overwrite earlier ones, keeping the
    /// original position, which is [`IndexMap`] insertion behavior.
    pub fn parse_lookup(&self, input: &str) -> Result<IndexMap<String, V::Value>> {
        Ok(self
            .parse(input)?
            .into_iter()
            .map(|(key, value)| (key.trim().to_string(), value))
            .collect())
    }
}

/// Extracts `names` from a parsed lookup table in order, failing with a
/// [`MissingKeys`](Error::MissingKeys) error that lists every absent name.
/// Extra keys in `map` are ignored.
pub fn require_keys<T: Clone>(map: &IndexMap<String, T>, names: &[&str]) -> Result<Vec<T>> {
    let missing: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| !map.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(Error::missing_keys(missing));
    }
    Ok(names.iter().map(|name| map[*name].clone()).collect())
}
