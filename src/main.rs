//! # Estampa CLI
//!
//! Command-line front end for building ESC/POS byte streams.
//!
//! ## Usage
//!
//! ```bash
//! # Build a JSON job and write raw printer bytes
//! estampa render receipt.json --out receipt.bin
//!
//! # Same job, printed as hex on stdout
//! estampa render receipt.json --hex
//!
//! # Encode an image for an 80mm printer with error diffusion, then cut
//! estampa image logo.png --width 576 --dither diffusion --cut --out logo.bin
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=estampa=debug` to see skipped
//! directives.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use estampa::{
    EstampaError, PrinterSession, buffer,
    job::Job,
    render::{dither::DitheringAlgorithm, gray::RgbaFrame},
};

/// Estampa - ESC/POS receipt compiler
#[derive(Parser, Debug)]
#[command(name = "estampa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a JSON print job into printer bytes
    Render {
        /// Job file
        job: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encode an image file as a raster image command
    Image {
        /// Image file (any format the `image` crate decodes)
        file: PathBuf,

        /// Dithering algorithm
        #[arg(long, value_enum, default_value = "threshold")]
        dither: DitherArg,

        /// Print width in dots (384 or 576; anything else uses 384)
        #[arg(long, default_value = "384")]
        width: u32,

        /// Append a full cut after the image
        #[arg(long)]
        cut: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Write to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Emit lowercase hex instead of raw bytes
    #[arg(long)]
    hex: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DitherArg {
    Threshold,
    #[value(alias = "error-diffusion")]
    Diffusion,
}

impl From<DitherArg> for DitheringAlgorithm {
    fn from(arg: DitherArg) -> Self {
        match arg {
            DitherArg::Threshold => DitheringAlgorithm::Threshold,
            DitherArg::Diffusion => DitheringAlgorithm::ErrorDiffusion,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "estampa=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EstampaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { job, output } => {
            let base_dir = job.parent().unwrap_or_else(|| Path::new("."));
            let bytes = Job::from_path(&job)?.render(base_dir)?;
            info!(job = %job.display(), bytes = bytes.len(), "job rendered");
            write_output(&output, &bytes)
        }

        Commands::Image {
            file,
            dither,
            width,
            cut,
            output,
        } => {
            let frame = RgbaFrame::open(&file)?;
            let mut session = PrinterSession::new(width);
            if frame.width > usize::from(session.dots_per_line()) {
                info!(
                    image_width = frame.width,
                    paper_width = session.dots_per_line(),
                    "image is wider than the paper and will be clipped by the printer"
                );
            }
            session.append_image(&frame, dither.into())?;
            if cut {
                session.cut(true);
            }
            info!(
                file = %file.display(),
                paper = session.config().name,
                bytes = session.len(),
                "image encoded"
            );
            write_output(&output, session.as_bytes())
        }
    }
}

fn write_output(args: &OutputArgs, bytes: &[u8]) -> Result<(), EstampaError> {
    let payload = if args.hex {
        let mut text = buffer::to_hex(bytes);
        text.push('\n');
        text.into_bytes()
    } else {
        bytes.to_vec()
    };

    match &args.out {
        Some(path) => std::fs::write(path, payload)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&payload)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
