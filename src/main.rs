use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use rollbook::{DirectoryBuilder, PipelineError, parse_render_date};

/// Renders a membership directory PDF from a configuration and a roster.
#[derive(Parser, Debug)]
#[command(name = "rollbook", version, about)]
struct Args {
    /// Directory configuration (JSON). Built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Household lists (JSON): {"lists": {"<name>": [household, ...]}}
    #[arg(long)]
    roster: PathBuf,

    /// Saved display overrides (JSON): {"overrides": [...]}
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Folder holding `<person id>.jpg` portraits.
    #[arg(long)]
    images: Option<PathBuf>,

    /// Where to write the PDF.
    #[arg(long, short)]
    output: PathBuf,

    /// Render date (YYYY-MM-DD) used for ages and the "As of" stamp.
    #[arg(long)]
    as_of: Option<String>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut builder = DirectoryBuilder::new().with_roster_file(&args.roster)?;
    if let Some(config) = &args.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(overrides) = &args.overrides {
        builder = builder.with_override_file(overrides);
    }
    if let Some(images) = &args.images {
        builder = builder.with_image_dir(images);
    }
    if let Some(date) = &args.as_of {
        builder = builder.with_render_time(parse_render_date(date)?);
    }

    let directory = builder.build()?;
    log::info!("Generating directory to {}", args.output.display());
    directory.generate_to_file(&args.output)?;
    Ok(())
}
