use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Display config file. Defaults to <config_dir>/statusline/config.json,
    /// then ~/.statusline.json
    #[arg(long, env = "STATUSLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output regardless of config
    #[arg(long)]
    pub no_color: bool,

    /// Per-command git timeout in milliseconds
    #[arg(long, env = "STATUSLINE_GIT_TIMEOUT_MS", default_value_t = 1_000)]
    pub git_timeout_ms: u64,

    /// Debug mode: print parse and git details to stderr
    #[arg(long, env = "STATUSLINE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
