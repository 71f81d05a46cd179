use std::error::Error;

use clap::{Parser, Subcommand};

/// Generates the sample documents from the command line.
///
/// Fonts must be present under `assets/fonts`, in a system Liberation Sans location, or in
/// the directory named by the `PDF_BLOCKS_FONTS_DIR` environment variable before running
/// the commands below.
#[derive(Parser)]
#[command(author, version, about = "Generates the pdf_blocks sample documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the styled text sample to `results/styled_text.pdf`.
    #[command(name = "styled-text", aliases = ["styled_text", "text"])]
    StyledText,

    /// Render the canvas cut sample to `results/canvas_cut.pdf`.
    #[command(name = "canvas-cut", aliases = ["canvas_cut", "canvas"])]
    CanvasCut,

    /// Render the rounded cell borders sample to `results/cell_borders.pdf`.
    #[command(name = "cell-borders", aliases = ["cell_borders", "borders"])]
    CellBorders,

    /// Render every sample document.
    #[command(name = "run-all", aliases = ["run_all", "all"])]
    RunAll,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::StyledText => pdf_blocks::samples::styled_text::run(),
        Commands::CanvasCut => pdf_blocks::samples::canvas_cut::run(),
        Commands::CellBorders => pdf_blocks::samples::cell_borders::run(),
        Commands::RunAll => pdf_blocks::samples::run_all::run(),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
