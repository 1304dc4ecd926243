use anyhow::Context;
use clap::Parser;
use identicon::{IdenticonPipeline, PipelineConfig};

mod cli;
mod logger;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // --- 1. Argument Parsing & Setup ---
    let opts = Cli::parse();
    logger::configure_logger(opts.log_level);

    // --- 2. Pipeline Initialization ---
    let config = PipelineConfig {
        output_dir: opts.output_dir,
    };
    let pipeline = IdenticonPipeline::new(config);

    // --- 3. Derive & Render ---
    let identicon = pipeline.generate(opts.input.as_bytes());
    let path = pipeline
        .render(&identicon)
        .with_context(|| format!("could not save identicon for {:?}", identicon.name))?;

    println!("Identicon for {:?} saved to {}", identicon.name, path.display());
    Ok(())
}
