//! CoverForge CLI - Interactive Blog Graphic Generator
//!
//! One pass per invocation: pick a base image, enter the three text lines,
//! pick a font for each, name the output. Exits non-zero when the run ends
//! before composition is attempted.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use coverforge_core::workflow::{self, Locations, WorkflowOutcome};

#[derive(Parser)]
#[command(name = "coverforge-cli")]
#[command(about = "CoverForge CLI - Blog Graphic Composer")]
#[command(version = coverforge_core::ENGINE_VERSION)]
struct Cli {
    /// Directory holding the base images
    #[arg(long, default_value = workflow::DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,

    /// Directory holding the TrueType fonts
    #[arg(long, default_value = workflow::DEFAULT_FONTS_DIR)]
    fonts_dir: PathBuf,

    /// Directory composed graphics are written to
    #[arg(long, default_value = workflow::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log progress to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    coverforge_core::logging::init(cli.verbose);

    let locations = Locations {
        images_dir: cli.images_dir,
        fonts_dir: cli.fonts_dir,
        output_dir: cli.output_dir,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match workflow::run(&mut input, &mut out, &locations) {
        Ok(WorkflowOutcome::Finished { .. }) => ExitCode::SUCCESS,
        Ok(WorkflowOutcome::MissingImages | WorkflowOutcome::MissingFonts) => ExitCode::FAILURE,
        Ok(WorkflowOutcome::InvalidImageChoice | WorkflowOutcome::InvalidFontSelection) => {
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Input error: {err}");
            ExitCode::FAILURE
        }
    }
}
