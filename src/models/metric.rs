/// Token counts for one API response, split into the four billed categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub input: u64,
    pub output: u64,
    pub cache_creation: u64,
    pub cache_read: u64,
}

impl TokenCounts {
    /// Categories in rendering order, paired with their exposition labels.
    pub fn by_category(&self) -> [(&'static str, u64); 4] {
        [
            ("input", self.input),
            ("output", self.output),
            ("cache_creation", self.cache_creation),
            ("cache_read", self.cache_read),
        ]
    }

    pub fn total(&self) -> u64 {
        self.input + self.output + self.cache_creation + self.cache_read
    }
}

/// One extracted sample group: everything needed to render the token lines and
/// the cost line for a single `api_response` record.
#[derive(Clone, Debug)]
pub struct MetricPoint {
    pub timestamp_ms: i64,
    pub model: String,
    pub tokens: TokenCounts,
    pub cost: f64,
}
