/// A user query normalized for matching: trimmed, then lower-cased.
///
/// Normalization is deliberately minimal. Matching is a plain
/// case-insensitive substring test, so there is no stemming, punctuation
/// stripping, or Unicode folding here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        NormalizedQuery(raw.trim().to_lowercase())
    }

    /// True for queries that were empty or whitespace-only.
    ///
    /// An empty normalized query is the "no active filter" sentinel; the
    /// filter entry points return their input unchanged for it.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
