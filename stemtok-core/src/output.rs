//! Pipeline output types

/// Run statistics for one preprocessing pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes of source text
    pub total_bytes: usize,
    /// Total characters of source text
    pub total_chars: usize,
    /// Number of detected sentences
    pub sentence_count: usize,
    /// Number of emitted tokens
    pub token_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output: stemmed tokens plus run statistics
///
/// Tokens appear in source order (sentence order, then word order
/// within each sentence). Punctuation tokens are retained.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Stemmed, ASCII-transliterated tokens
    pub tokens: Vec<String>,
    /// Run statistics
    pub metadata: Metadata,
}
