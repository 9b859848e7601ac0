//! yoloexport: turn class-labelled boxes and polygons into a YOLO label set.
//!
//! Given a corpus of annotation files, yoloexport writes one YOLO label
//! file per image, routed into `train/`, `valid/` or `test/` by the
//! image's remote folder, plus a `dataset.yaml` listing the splits and the
//! class vocabulary.
//!
//! # Modules
//!
//! - [`ir`]: the annotation model the exporter consumes
//! - [`export`]: class indexing, geometry normalization and file output
//! - [`error`]: error types for yoloexport operations

pub mod error;
pub mod export;
pub mod ir;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::YoloExportError;

/// The yoloexport CLI application.
#[derive(Parser)]
#[command(name = "yoloexport")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log per-file progress.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Export an annotation corpus as YOLO labels.
    Export(ExportArgs),
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Annotation JSON file, or a directory searched for `.json` files.
    input: PathBuf,

    /// Output root; created if it does not exist.
    #[arg(short, long)]
    output: PathBuf,

    /// How polygons are written.
    #[arg(long, value_enum, default_value_t = export::PolygonMode::BoundingBox)]
    polygon_mode: export::PolygonMode,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    report: String,
}

/// Run the yoloexport CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), YoloExportError> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Commands::Export(args)) => run_export(args),
        None => {
            println!("yoloexport {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Export annotations as YOLO labels.");
            println!();
            println!("Run 'yoloexport --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs) -> Result<(), YoloExportError> {
    let corpus = ir::io_json::read_corpus(&args.input)?;

    fs::create_dir_all(&args.output).map_err(|source| YoloExportError::CreateDir {
        path: args.output.clone(),
        source,
    })?;

    let opts = export::ExportOptions {
        polygon_mode: args.polygon_mode,
    };
    let report = export::export_yolo(corpus, &args.output, &opts)?;

    match args.report.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).map_err(YoloExportError::ReportJsonWrite)?;
            println!("{json}");
        }
        _ => {
            println!("Exported to {}:", args.output.display());
            print!("{}", report);
        }
    }

    Ok(())
}
