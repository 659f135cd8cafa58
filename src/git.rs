//! # Git Module
//!
//! Repository inspection via bounded `git` subprocesses.
//!
//! Every query shells out to `git` with a wall-clock deadline; a child that
//! fails to spawn, exits non-zero, or outlives the deadline degrades to the
//! "no data" answer for that query. A timed-out child is killed and reaped.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::models::GitStatus;

pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_millis(1_000);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Snapshot the repository state for `dir`. A directory outside any git work
/// tree (or git being unavailable) yields `GitStatus::default()`.
pub fn read_git_status(dir: &Path, timeout: Duration) -> GitStatus {
    let Some(branch) = current_branch(dir, timeout) else {
        return GitStatus::default();
    };
    let (ahead, behind) = upstream_divergence(dir, timeout);
    GitStatus {
        branch: Some(branch),
        dirty: is_dirty(dir, timeout),
        ahead,
        behind,
    }
}

fn current_branch(dir: &Path, timeout: Duration) -> Option<String> {
    let head = run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"], timeout)?;
    let head = head.trim();
    if head.is_empty() {
        return None;
    }
    if head == "HEAD" {
        // Detached: show the short commit hash instead of a symbolic name.
        return run_git(dir, &["rev-parse", "--short", "HEAD"], timeout)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
    }
    Some(head.to_string())
}

fn is_dirty(dir: &Path, timeout: Duration) -> bool {
    // Porcelain output covers staged, unstaged, and untracked changes.
    run_git(dir, &["status", "--porcelain"], timeout)
        .map(|out| !out.trim().is_empty())
        .unwrap_or(false)
}

fn upstream_divergence(dir: &Path, timeout: Duration) -> (u32, u32) {
    // Fails when no upstream is configured, which counts as 0/0.
    let Some(out) = run_git(
        dir,
        &["rev-list", "--left-right", "--count", "HEAD...@{upstream}"],
        timeout,
    ) else {
        return (0, 0);
    };
    let mut counts = out.split_whitespace();
    match (
        counts.next().and_then(|s| s.parse().ok()),
        counts.next().and_then(|s| s.parse().ok()),
    ) {
        (Some(ahead), Some(behind)) => (ahead, behind),
        _ => (0, 0),
    }
}

/// Run one git command and return its stdout, or `None` on any failure,
/// including a blown deadline.
fn run_git(dir: &Path, args: &[&str], timeout: Duration) -> Option<String> {
    let mut child = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    // Drain stdout on a helper thread so a chatty child cannot fill the pipe
    // and stall past the deadline.
    let mut stdout = child.stdout.take()?;
    let drain = thread::spawn(move || {
        let mut buf = String::new();
        stdout.read_to_string(&mut buf).ok().map(|_| buf)
    });

    let Some(status) = wait_with_deadline(&mut child, timeout) else {
        let _ = child.kill();
        let _ = child.wait();
        let _ = drain.join();
        return None;
    };

    let output = drain.join().ok().flatten()?;
    status.success().then_some(output)
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) if Instant::now() < deadline => thread::sleep(POLL_INTERVAL),
            _ => return None,
        }
    }
}
