//! # Vocabulary Filters
//!
//! Filters decide which candidate tokens are excluded from a generated
//! vocabulary. They compose as a flat set evaluated with a short-circuit
//! any-true fold; ordering does not affect the result.

use core::fmt;

/// Capability for excluding candidate tokens from a vocabulary.
pub trait VocabFilter {
    /// Decide whether to exclude a token.
    ///
    /// ## Arguments
    /// * `token` - the candidate token.
    ///
    /// ## Returns
    /// `true` to exclude the token, `false` to keep it.
    fn exclude(
        &self,
        token: &str,
    ) -> bool;
}

impl<F> VocabFilter for F
where
    F: Fn(&str) -> bool,
{
    fn exclude(
        &self,
        token: &str,
    ) -> bool {
        self(token)
    }
}

/// Excludes tokens longer than a character limit, and empty tokens.
#[derive(Debug, Clone, Copy)]
pub struct LengthFilter {
    /// The maximum token length, in characters.
    pub max_len: usize,
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self { max_len: 10 }
    }
}

impl LengthFilter {
    /// Create a new length filter.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl VocabFilter for LengthFilter {
    fn exclude(
        &self,
        token: &str,
    ) -> bool {
        if token.is_empty() {
            return true;
        }
        token.chars().count() > self.max_len
    }
}

/// Excludes only empty tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFilter;

impl VocabFilter for EmptyFilter {
    fn exclude(
        &self,
        token: &str,
    ) -> bool {
        token.is_empty()
    }
}

/// Excludes tokens that are empty after marker removal.
///
/// Every occurrence of each marker is removed from a working copy of the
/// token, one marker at a time; the emptiness check runs after each
/// removal, so a token that empties mid-way is excluded even when later
/// markers would not match. The token itself is never altered.
#[derive(Debug, Clone, Default)]
pub struct SpecialTokensFilter {
    /// The marker strings to remove.
    pub markers: Vec<String>,
}

impl SpecialTokensFilter {
    /// Create a new special tokens filter.
    ///
    /// ## Arguments
    /// * `markers` - the marker strings to strip from candidates.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

impl VocabFilter for SpecialTokensFilter {
    fn exclude(
        &self,
        token: &str,
    ) -> bool {
        let mut token = token.to_string();
        for marker in &self.markers {
            token = token.replace(marker.as_str(), "");
            if token.is_empty() {
                return true;
            }
        }
        token.is_empty()
    }
}

/// An ordered set of filters combined as a logical OR of exclusions.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn VocabFilter>>,
}

impl fmt::Debug for FilterChain {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}

impl FilterChain {
    /// Create an empty filter chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter to the chain.
    pub fn push(
        &mut self,
        filter: impl VocabFilter + 'static,
    ) {
        self.filters.push(Box::new(filter));
    }

    /// Extend the chain with a filter.
    ///
    /// ## Returns
    /// The updated `FilterChain` instance.
    pub fn with_filter(
        mut self,
        filter: impl VocabFilter + 'static,
    ) -> Self {
        self.push(filter);
        self
    }

    /// The number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check whether any filter excludes the token.
    pub fn excludes(
        &self,
        token: &str,
    ) -> bool {
        self.filters.iter().any(|f| f.exclude(token))
    }
}
