//! Key Pattern Module
//!
//! Anchored glob matching for bulk invalidation, e.g. `products:*`.

// == Key Pattern ==
/// A parsed invalidation pattern with at most one `*` wildcard.
///
/// The wildcard stands for "zero or more characters". Matching is an
/// anchored comparison over the whole key, never a substring search, and
/// works purely on string prefixes and suffixes, so characters that are
/// special in regular expressions (`.`, `+`, `(`...) have no special
/// meaning in either keys or patterns. Any `*` after the first is treated
/// as a literal character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern {
    prefix: String,
    /// Text required after the wildcard; None when the pattern is literal.
    suffix: Option<String>,
}

impl KeyPattern {
    // == Parse ==
    /// Parses a pattern string, splitting on the first `*` if present.
    pub fn parse(pattern: &str) -> Self {
        match pattern.split_once('*') {
            Some((prefix, suffix)) => Self {
                prefix: prefix.to_string(),
                suffix: Some(suffix.to_string()),
            },
            None => Self {
                prefix: pattern.to_string(),
                suffix: None,
            },
        }
    }

    // == Matches ==
    /// Tests a key against the pattern.
    ///
    /// Without a wildcard this is plain equality. With one, the key must be
    /// long enough that the prefix and suffix cover disjoint ranges; this
    /// keeps `ab*b` from matching `ab` via overlapping characters.
    pub fn matches(&self, key: &str) -> bool {
        match &self.suffix {
            None => key == self.prefix,
            Some(suffix) => {
                key.len() >= self.prefix.len() + suffix.len()
                    && key.starts_with(&self.prefix)
                    && key.ends_with(suffix.as_str())
            }
        }
    }
}
