use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(about = "Import Claude Code conversation history into VictoriaMetrics")]
pub struct Args {
    /// VictoriaMetrics base URL
    #[arg(long, env = "VICTORIA_URL", default_value = "http://localhost:9090")]
    pub victoria_url: String,

    /// Claude projects directory. Defaults to ~/.claude/projects
    #[arg(long, env = "CLAUDE_PROJECTS_DIR")]
    pub projects_dir: Option<PathBuf>,

    /// Debug mode: per-file parse statistics and drop counts on stderr
    #[arg(long, env = "CLAUDE_IMPORT_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
