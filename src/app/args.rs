use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "devconsole")]
#[command(about = "An interactive command console")]
pub struct AppArgs {
    #[arg(long, help = "JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Maximum scrollback lines (default 512)")]
    pub max_lines: Option<usize>,

    #[arg(long, help = "Maximum history entries (default 100)")]
    pub max_history: Option<usize>,

    #[arg(long, help = "Diagnostic filter, e.g. \"debug\" or \"info,devconsole=trace\"")]
    pub log_level: Option<String>,

    #[arg(long, help = "Prefix relayed diagnostics with the local time")]
    pub timestamps: bool,

    #[arg(long, help = "Read lines from stdin instead of opening the terminal UI")]
    pub plain: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
