pub mod git;
pub mod hook;
pub mod message;
pub mod metrics;

pub use git::GitStatus;
pub use hook::SessionInput;
pub use message::{MessageUsage, TranscriptLine};
pub use metrics::{SessionMetrics, TokenCounts};
