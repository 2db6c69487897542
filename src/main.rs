use anyhow::Result;
use clap::Parser;
use pwa_icon_gen::{
    icon_gen::{self, Options},
    logging::{self, LoggingConfig},
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Draw the icon set and a sample screenshot for a progressive web app"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Skip the sample screenshot
    #[clap(long)]
    no_screenshot: bool,

    /// Skip writing manifest-icons.json
    #[clap(long)]
    no_manifest: bool,

    /// Log more details to stderr (-v info, -vv debug)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(LoggingConfig {
        verbosity: args.verbose,
        ..LoggingConfig::default()
    });

    icon_gen::run(&Options {
        output: args.output,
        screenshot: !args.no_screenshot,
        manifest: !args.no_manifest,
    })?;

    Ok(())
}
