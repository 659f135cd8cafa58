use chrono::{DateTime, Utc};
use std::io::Read;

pub const DEFAULT_CONTEXT_LIMIT: u64 = 200_000;
pub const LONG_CONTEXT_LIMIT: u64 = 1_000_000;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// 1M-context detection is a case-insensitive substring match on the model id,
/// mirroring the `[1m]` suffix Claude Code puts on long-context model ids.
pub fn is_long_context(model_id: &str) -> bool {
    model_id.to_lowercase().contains("1m")
}

pub fn context_limit_for_model(model_id: &str) -> u64 {
    if is_long_context(model_id) {
        LONG_CONTEXT_LIMIT
    } else {
        DEFAULT_CONTEXT_LIMIT
    }
}

/// Abbreviated token count: `512`, `102k`, `1.5M`.
pub fn format_token_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.0}k", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// Compact elapsed time: `36m` under an hour, `1h5m` above. A start time in
/// the future (clock skew) clamps to `0m`.
pub fn format_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - start).num_seconds().max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h{minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Average response time: milliseconds below one second, seconds above.
pub fn format_response_time(avg_ms: u64) -> String {
    if avg_ms < 1_000 {
        format!("{avg_ms}ms")
    } else {
        format!("{:.1}s", avg_ms as f64 / 1_000.0)
    }
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
