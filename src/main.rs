use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use dirhog::cli::Cli;
use dirhog::descent::{
    DescentController, FsLister, FsProber, NoopProgress, ProgressReporter, VerboseProgress,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(NoopProgress)
    } else {
        Box::new(VerboseProgress::new(true))
    };

    let controller = DescentController::new(
        Arc::new(FsProber),
        FsLister,
        Duration::from_secs(cli.timeout),
        cli.max_depth,
    )
    .with_progress(progress);

    let winner = controller.run(&cli.root).await?;

    println!("Heaviest directory: {}", winner.path.display());
    println!("Estimated size:     {}", winner.display_size());
    if !winner.measured() {
        eprintln!(
            "size is unmeasured ({}); re-run with a larger --timeout for a real number",
            winner.status
        );
    }

    Ok(())
}
