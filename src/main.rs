use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;
use std::time::Duration;

use statusline::cli::Args;
use statusline::config::{effective_colors, load_display_config};
use statusline::display::render_status_line;
use statusline::git::read_git_status;
use statusline::models::{GitStatus, SessionInput};
use statusline::transcript::parse_transcript;
use statusline::utils::read_stdin;

/// Printed when the stdin payload cannot be parsed at all. One line, exit 0.
const FALLBACK_LINE: &str = "Claude Code";

fn main() -> Result<()> {
    let args = Args::parse();
    let stdin = read_stdin().context("read stdin")?;

    let input: SessionInput = match serde_json::from_slice(&stdin) {
        Ok(input) => input,
        Err(err) => {
            if args.debug {
                eprintln!("statusline: unparseable input: {err}");
            }
            println!("{FALLBACK_LINE}");
            return Ok(());
        }
    };

    let mut config = load_display_config(args.config.as_deref());
    config.colors = effective_colors(
        &config,
        args.no_color,
        std::env::var_os("NO_COLOR").is_some(),
    );

    let metrics = input
        .transcript_path
        .as_deref()
        .map(|p| parse_transcript(Path::new(p)))
        .unwrap_or_default();

    let git = match input.git_dir() {
        Some(dir) => read_git_status(
            Path::new(dir),
            Duration::from_millis(args.git_timeout_ms),
        ),
        None => GitStatus::default(),
    };

    let line = render_status_line(&input, &metrics, &git, &config, Utc::now());
    println!("{line}");

    if args.debug {
        eprintln!(
            "tokens: total={} in={} out={} cache_create={} cache_read={} messages={}",
            metrics.tokens.total(),
            metrics.tokens.input,
            metrics.tokens.output,
            metrics.tokens.cache_create,
            metrics.tokens.cache_read,
            metrics.message_count,
        );
        eprintln!(
            "git: branch={:?} dirty={} ahead={} behind={}",
            git.branch, git.dirty, git.ahead, git.behind
        );
        eprintln!(
            "session_start: {:?}, colors: {}",
            metrics.start_time, config.colors
        );
    }
    Ok(())
}
