//! Boxmerge: category-level bounding box merging.
//!
//! Boxmerge maintains a collection of axis-aligned rectangles grouped by
//! category label and merges two categories into one: the exact union of
//! their rectangles is computed with a sweep line, then collapsed to the
//! single smallest rectangle enclosing it. Datasets are read from and
//! written to a headerless box CSV, with a per-category JSON export.
//!
//! # Modules
//!
//! - [`ir`]: Data model (Rect, Dataset) and the CSV/JSON codecs
//! - [`merge`]: Sweep-line union, bounds reduction, category merging
//! - [`shell`]: Interactive command session
//! - [`error`]: Error types for boxmerge operations

pub mod error;
pub mod ir;
pub mod merge;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::BoxmergeError;

/// The boxmerge CLI application.
#[derive(Parser)]
#[command(name = "boxmerge")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Merge two categories into one enclosing rectangle.
    Merge(MergeArgs),

    /// Relabel a category.
    Rename(RenameArgs),

    /// Export the dataset as per-category JSON in corner form.
    Export(ExportArgs),

    /// Start an interactive command session.
    Shell(ShellArgs),
}

/// Arguments for the merge subcommand.
#[derive(clap::Args)]
struct MergeArgs {
    /// Input box CSV file.
    input: PathBuf,

    /// First category to merge.
    category1: String,

    /// Second category to merge.
    category2: String,

    /// Label for the merged rectangle.
    new_category: String,

    /// Where to write the updated dataset.
    #[arg(long, default_value = "result.csv")]
    output: PathBuf,
}

/// Arguments for the rename subcommand.
#[derive(clap::Args)]
struct RenameArgs {
    /// Input box CSV file.
    input: PathBuf,

    /// Existing category label.
    old_label: String,

    /// Replacement label.
    new_label: String,

    /// Where to write the updated dataset.
    #[arg(long, default_value = "result.csv")]
    output: PathBuf,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Input box CSV file.
    input: PathBuf,

    /// Where to write the JSON export.
    #[arg(long, default_value = "result.json")]
    output: PathBuf,
}

/// Arguments for the shell subcommand.
#[derive(clap::Args)]
struct ShellArgs {
    /// Input box CSV file.
    input: PathBuf,

    /// Where to persist the dataset after each change.
    #[arg(long, default_value = "result.csv")]
    output: PathBuf,

    /// Where the `translate` command writes its JSON export.
    #[arg(long, default_value = "result.json")]
    export_path: PathBuf,
}

/// Run the boxmerge CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BoxmergeError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Merge(args)) => run_merge(args),
        Some(Commands::Rename(args)) => run_rename(args),
        Some(Commands::Export(args)) => run_export(args),
        Some(Commands::Shell(args)) => shell::run_shell(&args.input, &args.output, &args.export_path),
        None => {
            // No subcommand: just print a help hint and exit successfully
            println!("boxmerge {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Category-level bounding box merge tool.");
            println!();
            println!("Run 'boxmerge --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the merge subcommand.
fn run_merge(args: MergeArgs) -> Result<(), BoxmergeError> {
    let mut dataset = ir::io_csv::read_csv(&args.input)?;
    merge::merge_categories(&mut dataset, &args.category1, &args.category2, &args.new_category)?;
    ir::io_csv::write_csv(&args.output, &dataset)?;

    println!(
        "Merged '{}' and '{}' into '{}' -> {}",
        args.category1,
        args.category2,
        args.new_category,
        args.output.display()
    );
    Ok(())
}

/// Execute the rename subcommand.
fn run_rename(args: RenameArgs) -> Result<(), BoxmergeError> {
    let mut dataset = ir::io_csv::read_csv(&args.input)?;
    dataset.rename(&args.old_label, &args.new_label)?;
    ir::io_csv::write_csv(&args.output, &dataset)?;

    println!(
        "Renamed '{}' to '{}' -> {}",
        args.old_label,
        args.new_label,
        args.output.display()
    );
    Ok(())
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs) -> Result<(), BoxmergeError> {
    let dataset = ir::io_csv::read_csv(&args.input)?;
    ir::io_json::write_export_json(&args.output, &dataset)?;

    println!(
        "Exported {} categories -> {}",
        dataset.len(),
        args.output.display()
    );
    Ok(())
}
