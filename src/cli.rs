use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dirhog",
    about = "Estimate which directory under a root hogs the most disk space"
)]
pub struct Cli {
    /// Directory to start the descent from
    #[arg(default_value = "/")]
    pub root: PathBuf,

    /// Per-directory measurement budget in seconds
    #[arg(long, default_value_t = 8)]
    pub timeout: u64,

    /// Maximum descent depth (1 = only the root's immediate children)
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Suppress per-level progress output
    #[arg(long)]
    pub quiet: bool,
}
