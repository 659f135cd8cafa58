use chrono::{DateTime, Utc};

#[derive(Default, Debug, Clone)]
pub struct TokenCounts {
    pub input: u64,
    pub output: u64,
    pub cache_create: u64,
    pub cache_read: u64,
}

impl TokenCounts {
    pub fn total(&self) -> u64 {
        self.input
            .saturating_add(self.output)
            .saturating_add(self.cache_create)
            .saturating_add(self.cache_read)
    }
}

/// Aggregates derived from one pass over the transcript. `Default` is the
/// "no data" value used when the transcript is absent or unreadable.
#[derive(Default, Debug, Clone)]
pub struct SessionMetrics {
    pub tokens: TokenCounts,
    pub start_time: Option<DateTime<Utc>>,
    pub message_count: u64,
}
