//! # Transcript Module
//!
//! Streams the session's JSONL transcript and accumulates token counters,
//! assistant message count, and the session start time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::{SessionMetrics, TranscriptLine};
use crate::utils::parse_timestamp;

/// Parse a transcript file into session metrics.
///
/// A missing or unreadable file, and any line that does not parse as a
/// transcript entry, contribute nothing; the result is never an error.
/// Token counters accumulate only from assistant lines that carry a usage
/// record; the start time comes from the first timestamped line of any type.
pub fn parse_transcript(path: &Path) -> SessionMetrics {
    let Ok(file) = File::open(path) else {
        return SessionMetrics::default();
    };
    let reader = BufReader::new(file);
    let mut metrics = SessionMetrics::default();

    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Ok(entry) = serde_json::from_str::<TranscriptLine>(trimmed) else {
            continue;
        };

        if metrics.start_time.is_none() {
            metrics.start_time = entry.timestamp.as_deref().and_then(parse_timestamp);
        }

        if entry.r#type.as_deref() != Some("assistant") {
            continue;
        }
        let Some(usage) = entry.message.and_then(|m| m.usage) else {
            continue;
        };
        metrics.tokens.input += usage.input_tokens.unwrap_or(0);
        metrics.tokens.output += usage.output_tokens.unwrap_or(0);
        metrics.tokens.cache_create += usage.cache_creation_input_tokens.unwrap_or(0);
        metrics.tokens.cache_read += usage.cache_read_input_tokens.unwrap_or(0);
        metrics.message_count += 1;
    }
    metrics
}
