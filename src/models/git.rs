/// Point-in-time snapshot of the workspace repository. `Default` is the
/// "not a repository" value: no branch, clean, no divergence.
#[derive(Default, Debug, Clone)]
pub struct GitStatus {
    pub branch: Option<String>,
    pub dirty: bool,
    pub ahead: u32,
    pub behind: u32,
}
