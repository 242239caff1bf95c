//! A cache of parsed specs keyed by their source strings.
//!
//! Parsing is cheap but not free, and callers that format tables or logs
//! tend to reuse a handful of spec strings over and over. [`SpecCache`]
//! memoizes the parsed form. It wraps an [`IndexMap`] so iteration order is
//! the order specs were first seen, which keeps debugging output and
//! serialized snapshots deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use specfmt::{Renderer, SpecCache, Value};
//!
//! let renderer = Renderer::new();
//! let mut cache = SpecCache::new();
//!
//! for n in [4127_i64, 4098, 7678] {
//!     let spec = cache.get_or_parse("10,d").unwrap();
//!     let line = renderer.render(&Value::Int(n), spec).unwrap();
//!     assert_eq!(line.chars().count(), 10);
//! }
//! assert_eq!(cache.len(), 1);
//! ```

use indexmap::IndexMap;

use crate::error::ParseError;
use crate::spec::FormatSpec;

/// An insertion-ordered map from spec strings to their parsed form.
#[derive(Clone, Debug, Default)]
pub struct SpecCache(IndexMap<String, FormatSpec>);

impl SpecCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed form of `spec`, parsing and storing it on first
    /// sight.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] if `spec` is malformed; nothing is cached
    /// in that case, so a later corrected call is unaffected.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn get_or_parse(&mut self, spec: &str) -> Result<&FormatSpec, ParseError> {
        use indexmap::map::Entry;
        match self.0.entry(spec.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let parsed = FormatSpec::parse(spec)?;
                Ok(entry.insert(parsed))
            }
        }
    }

    /// Looks up a previously parsed spec without parsing.
    #[must_use]
    pub fn get(&self, spec: &str) -> Option<&FormatSpec> {
        self.0.get(spec)
    }

    /// Number of cached specs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops every cached spec.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over `(source, parsed)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatSpec)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
