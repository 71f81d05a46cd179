//! A paragraph rendered into a small cut-out region of the page.
//!
//! The region is deliberately too small for the full paragraph so the truncation behaviour
//! of [`CutoutCanvas`] is visible in the output.

use std::error::Error;

use genpdf::Margins;

use crate::builder::DocumentBuilder;
use crate::elements::CutoutCanvas;
use crate::output;
use crate::text::{self, Span};

use super::{SAMPLE_AUTHOR, SAMPLE_TITLE};

/// Output path for the generated document.
pub const DEST: &str = "results/canvas_cut.pdf";

const CUTOUT_WIDTH_MM: f64 = 60.0;
const CUTOUT_HEIGHT_MM: f64 = 18.0;
const PAGE_MARGIN_MM: f64 = 12.7;

/// Builds the document without writing it to disk.
pub fn document() -> Result<genpdf::Document, genpdf::error::Error> {
    let mut document = DocumentBuilder::new()
        .with_title("Canvas cut sample")
        .with_margins(Margins::trbl(
            PAGE_MARGIN_MM,
            PAGE_MARGIN_MM,
            PAGE_MARGIN_MM,
            PAGE_MARGIN_MM,
        ))
        .build()?;

    let paragraph = text::paragraph(vec![
        Span::new(SAMPLE_TITLE).bold(),
        Span::new(" by "),
        Span::new(SAMPLE_AUTHOR),
    ]);

    let cutout =
        CutoutCanvas::new(CUTOUT_WIDTH_MM, CUTOUT_HEIGHT_MM).with_element(paragraph);
    document.push(cutout);

    Ok(document)
}

/// Renders the document and writes it to [`DEST`].
pub fn run() -> Result<(), Box<dyn Error>> {
    let pdf = output::render_to_bytes(document()?)?;
    pdf.write_to(DEST)?;
    println!("Generated {} ({} bytes)", DEST, pdf.bytes.len());
    Ok(())
}
