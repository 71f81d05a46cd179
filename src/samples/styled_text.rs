//! A paragraph mixing bold and regular text runs.

use std::error::Error;

use crate::builder::DocumentBuilder;
use crate::output;
use crate::text::{self, Span};

use super::{SAMPLE_AUTHOR, SAMPLE_TITLE};

/// Output path for the generated document.
pub const DEST: &str = "results/styled_text.pdf";

/// Builds the document without writing it to disk.
pub fn document() -> Result<genpdf::Document, genpdf::error::Error> {
    let mut document = DocumentBuilder::new().with_title("Styled text sample").build()?;

    document.push(text::paragraph(vec![
        Span::new(SAMPLE_TITLE).bold(),
        Span::new(" by "),
        Span::new(SAMPLE_AUTHOR),
    ]));

    Ok(document)
}

/// Renders the document and writes it to [`DEST`].
pub fn run() -> Result<(), Box<dyn Error>> {
    let pdf = output::render_to_bytes(document()?)?;
    pdf.write_to(DEST)?;
    println!("Generated {} ({} bytes)", DEST, pdf.bytes.len());
    Ok(())
}
