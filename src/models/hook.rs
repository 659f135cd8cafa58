use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct ModelInfo {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WorkspaceInfo {
    pub current_dir: Option<String>,
    pub project_dir: Option<String>,
}

/// Optional cost summary provided by Claude Code's statusLine input
#[derive(Deserialize, Debug, Default)]
pub struct CostInfo {
    pub total_api_duration_ms: Option<u64>,
}

/// The JSON object Claude Code writes on stdin, one per invocation.
///
/// Every field is optional; unknown fields are ignored so newer hook payloads
/// keep working.
#[derive(Deserialize, Debug, Default)]
pub struct SessionInput {
    pub transcript_path: Option<String>,
    #[serde(default)]
    pub model: ModelInfo,
    #[serde(default)]
    pub workspace: WorkspaceInfo,
    pub cost: Option<CostInfo>,
}

impl SessionInput {
    /// Directory to run git queries in. The hook supplies both a project dir
    /// and the current dir; the project dir wins when present.
    pub fn git_dir(&self) -> Option<&str> {
        self.workspace
            .project_dir
            .as_deref()
            .or(self.workspace.current_dir.as_deref())
    }
}
