//! # Display Module
//!
//! Composes the single-line status output. Each segment renders to
//! `Option<String>` from its backing data; absent data means an omitted
//! segment, never an error. Colors are applied per-token only when enabled
//! in the resolved [`DisplayConfig`].

use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Style};
use std::path::Path;

use crate::config::DisplayConfig;
use crate::models::{GitStatus, SessionInput, SessionMetrics};
use crate::utils::{
    context_limit_for_model, format_elapsed, format_response_time, format_token_count,
    is_long_context,
};

const SEGMENT_SEPARATOR: &str = " | ";

/// Color band selected by a usage or latency threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Green,
    Yellow,
    Red,
    Cyan,
}

impl Band {
    fn style(self) -> Style {
        match self {
            Band::Green => Style::new().green(),
            Band::Yellow => Style::new().yellow(),
            Band::Red => Style::new().red(),
            Band::Cyan => Style::new().cyan(),
        }
    }
}

/// Token-usage band: green under 50%, yellow in [50, 80), red at 80 and up.
pub fn usage_band(percent: f64) -> Band {
    if percent >= 80.0 {
        Band::Red
    } else if percent >= 50.0 {
        Band::Yellow
    } else {
        Band::Green
    }
}

/// Response-time band: cyan under 5s, yellow in [5s, 10s), red at 10s and up.
pub fn response_band(avg_ms: u64) -> Band {
    if avg_ms >= 10_000 {
        Band::Red
    } else if avg_ms >= 5_000 {
        Band::Yellow
    } else {
        Band::Cyan
    }
}

fn paint(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Build the status line: segments joined by `" | "`, each included only when
/// its backing data is present. The result never contains a newline.
pub fn render_status_line(
    input: &SessionInput,
    metrics: &SessionMetrics,
    git: &GitStatus,
    config: &DisplayConfig,
    now: DateTime<Utc>,
) -> String {
    let segments = [
        Some(workspace_segment(input, config)),
        git_segment(git, config),
        Some(model_segment(input, config)),
        token_segment(input, metrics, config),
        session_segment(metrics, now, config),
        response_segment(input, metrics, config),
    ];
    segments
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

fn workspace_segment(input: &SessionInput, config: &DisplayConfig) -> String {
    let current_dir = input.workspace.current_dir.as_deref().unwrap_or("~");
    let name = Path::new(current_dir)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(current_dir);
    paint(name, Style::new().blue().bold(), config.colors)
}

fn git_segment(git: &GitStatus, config: &DisplayConfig) -> Option<String> {
    let branch = git.branch.as_deref()?;
    let mut seg = paint(branch, Style::new().magenta(), config.colors);
    if git.dirty {
        seg.push_str(&paint(&config.icons.dirty, Style::new().red(), config.colors));
    } else {
        seg.push_str(&paint(&config.icons.clean, Style::new().green(), config.colors));
    }
    if git.ahead > 0 {
        let ahead = format!("{}{}", config.icons.ahead, git.ahead);
        seg.push_str(&paint(&ahead, Style::new().cyan(), config.colors));
    }
    if git.behind > 0 {
        let behind = format!("{}{}", config.icons.behind, git.behind);
        seg.push_str(&paint(&behind, Style::new().yellow(), config.colors));
    }
    Some(seg)
}

fn model_segment(input: &SessionInput, config: &DisplayConfig) -> String {
    let display = input.model.display_name.as_deref().unwrap_or("Unknown");
    let mut seg = paint(display, Style::new().cyan(), config.colors);
    let model_id = input.model.id.as_deref().unwrap_or("");
    // Annotate the long-context variant unless the display name already says so.
    if is_long_context(model_id) && !display.to_lowercase().contains("1m") {
        seg.push(' ');
        seg.push_str(&paint("1M context", Style::new().dimmed(), config.colors));
    }
    seg
}

fn token_segment(
    input: &SessionInput,
    metrics: &SessionMetrics,
    config: &DisplayConfig,
) -> Option<String> {
    let total = metrics.tokens.total();
    if total == 0 {
        return None;
    }
    let limit = context_limit_for_model(input.model.id.as_deref().unwrap_or(""));
    let percent = total as f64 / limit as f64 * 100.0;

    let mut seg = format!(
        "{} {} ({})",
        paint("tokens:", Style::new().dimmed(), config.colors),
        paint(&format!("{percent:.0}%"), usage_band(percent).style(), config.colors),
        format_token_count(total),
    );
    if percent > 60.0 {
        seg.push_str(&paint(
            &config.icons.high_usage,
            Style::new().yellow(),
            config.colors,
        ));
    }
    Some(seg)
}

fn session_segment(
    metrics: &SessionMetrics,
    now: DateTime<Utc>,
    config: &DisplayConfig,
) -> Option<String> {
    let start = metrics.start_time?;
    Some(format!(
        "{} {}",
        paint("session:", Style::new().dimmed(), config.colors),
        paint(&format_elapsed(start, now), Style::new().cyan(), config.colors),
    ))
}

fn response_segment(
    input: &SessionInput,
    metrics: &SessionMetrics,
    config: &DisplayConfig,
) -> Option<String> {
    let total_api_ms = input.cost.as_ref()?.total_api_duration_ms?;
    if total_api_ms == 0 || metrics.message_count == 0 {
        return None;
    }
    let avg_ms = total_api_ms / metrics.message_count;
    Some(format!(
        "{} {}",
        paint("response:", Style::new().dimmed(), config.colors),
        paint(
            &format_response_time(avg_ms),
            response_band(avg_ms).style(),
            config.colors,
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenCounts;
    use chrono::TimeZone;

    fn plain_config() -> DisplayConfig {
        DisplayConfig {
            colors: false,
            ..DisplayConfig::default()
        }
    }

    fn input_from(json: &str) -> SessionInput {
        serde_json::from_str(json).unwrap()
    }

    fn metrics_with_tokens(input: u64) -> SessionMetrics {
        SessionMetrics {
            tokens: TokenCounts {
                input,
                ..TokenCounts::default()
            },
            start_time: None,
            message_count: 1,
        }
    }

    #[test]
    fn test_usage_band_boundaries() {
        assert_eq!(usage_band(49.0), Band::Green);
        assert_eq!(usage_band(50.0), Band::Yellow);
        assert_eq!(usage_band(79.0), Band::Yellow);
        assert_eq!(usage_band(80.0), Band::Red);
    }

    #[test]
    fn test_response_band_boundaries() {
        assert_eq!(response_band(4_999), Band::Cyan);
        assert_eq!(response_band(5_000), Band::Yellow);
        assert_eq!(response_band(9_999), Band::Yellow);
        assert_eq!(response_band(10_000), Band::Red);
    }

    #[test]
    fn test_minimal_input_renders_workspace_and_model_only() {
        let input =
            input_from(r#"{"workspace":{"current_dir":"/tmp/proj"},"model":{"display_name":"Test"}}"#);
        let line = render_status_line(
            &input,
            &SessionMetrics::default(),
            &GitStatus::default(),
            &plain_config(),
            Utc::now(),
        );
        assert_eq!(line, "proj | Test");
    }

    #[test]
    fn test_no_escape_sequences_when_colors_disabled() {
        let input = input_from(
            r#"{"workspace":{"current_dir":"/tmp/proj"},"model":{"id":"claude-x","display_name":"Test"},"cost":{"total_api_duration_ms":12000}}"#,
        );
        let git = GitStatus {
            branch: Some("main".to_string()),
            dirty: true,
            ahead: 2,
            behind: 1,
        };
        let mut metrics = metrics_with_tokens(120_000);
        metrics.start_time = Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 36, 0).unwrap();

        let line = render_status_line(&input, &metrics, &git, &plain_config(), now);
        assert!(!line.contains('\u{1b}'));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_escape_sequences_present_when_colors_enabled() {
        let input =
            input_from(r#"{"workspace":{"current_dir":"/tmp/proj"},"model":{"display_name":"Test"}}"#);
        let line = render_status_line(
            &input,
            &SessionMetrics::default(),
            &GitStatus::default(),
            &DisplayConfig::default(),
            Utc::now(),
        );
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn test_git_segment_icons_and_counts() {
        let config = plain_config();
        let clean = GitStatus {
            branch: Some("main".to_string()),
            ..GitStatus::default()
        };
        assert_eq!(git_segment(&clean, &config).unwrap(), "main✅");

        let diverged = GitStatus {
            branch: Some("main".to_string()),
            dirty: true,
            ahead: 3,
            behind: 1,
        };
        assert_eq!(git_segment(&diverged, &config).unwrap(), "main🚧⇡3⇣1");

        assert!(git_segment(&GitStatus::default(), &config).is_none());
    }

    #[test]
    fn test_token_segment_formatting_and_warning() {
        let config = plain_config();
        let input = input_from(r#"{"model":{"id":"claude-opus-4"}}"#);

        // 120k of 200k = 60%, not strictly above the warning threshold
        let seg = token_segment(&input, &metrics_with_tokens(120_000), &config).unwrap();
        assert_eq!(seg, "tokens: 60% (120k)");

        // 122k of 200k = 61%, warning icon appended
        let seg = token_segment(&input, &metrics_with_tokens(122_000), &config).unwrap();
        assert_eq!(seg, "tokens: 61% (122k)⚠️");

        // zero tokens omits the segment
        assert!(token_segment(&input, &SessionMetrics::default(), &config).is_none());
    }

    #[test]
    fn test_token_segment_uses_long_context_limit() {
        let config = plain_config();
        let input = input_from(r#"{"model":{"id":"claude-sonnet-4-5[1M]"}}"#);
        // 500k of 1M = 50%
        let seg = token_segment(&input, &metrics_with_tokens(500_000), &config).unwrap();
        assert_eq!(seg, "tokens: 50% (500k)");
    }

    #[test]
    fn test_model_segment_long_context_annotation() {
        let config = plain_config();

        let input = input_from(r#"{"model":{"id":"claude-sonnet-4-5[1m]","display_name":"Sonnet"}}"#);
        assert_eq!(model_segment(&input, &config), "Sonnet 1M context");

        // display name already mentions it; no duplicate annotation
        let input = input_from(
            r#"{"model":{"id":"claude-sonnet-4-5[1m]","display_name":"Sonnet 4.5 (1M context)"}}"#,
        );
        assert_eq!(model_segment(&input, &config), "Sonnet 4.5 (1M context)");

        let input = input_from(r#"{"model":{"display_name":"Sonnet"}}"#);
        assert_eq!(model_segment(&input, &config), "Sonnet");
    }

    #[test]
    fn test_response_segment_requires_messages_and_duration() {
        let config = plain_config();
        let input = input_from(r#"{"cost":{"total_api_duration_ms":10000}}"#);

        let mut metrics = SessionMetrics::default();
        assert!(response_segment(&input, &metrics, &config).is_none());

        metrics.message_count = 2;
        assert_eq!(
            response_segment(&input, &metrics, &config).unwrap(),
            "response: 5.0s"
        );

        let no_cost = input_from("{}");
        assert!(response_segment(&no_cost, &metrics, &config).is_none());
    }

    #[test]
    fn test_session_segment() {
        let config = plain_config();
        let mut metrics = SessionMetrics::default();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 11, 5, 0).unwrap();

        assert!(session_segment(&metrics, now, &config).is_none());

        metrics.start_time = Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
        assert_eq!(
            session_segment(&metrics, now, &config).unwrap(),
            "session: 1h5m"
        );
    }
}
