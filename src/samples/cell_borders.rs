//! A table whose borders are drawn with rounded corners instead of straight edges.
//!
//! Every cell is outlined by [`RoundedCornersDecorator`] and the table as a whole is
//! wrapped in a [`RoundedFrame`].  `genpdf` tables have no row or column spans, so the
//! header that spans the full width is modelled as a single-column table stacked above the
//! three-column body.

use std::error::Error;

use genpdf::elements::{LinearLayout, Paragraph, TableLayout};
use genpdf::{Alignment, Element, Margins};

use crate::builder::DocumentBuilder;
use crate::elements::{RoundedCornersDecorator, RoundedFrame};
use crate::output;

/// Output path for the generated document.
pub const DEST: &str = "results/cell_borders.pdf";

/// Horizontal padding that narrows the table to roughly 80% of the text width.
const TABLE_SIDE_PADDING_MM: f64 = 18.0;

const HEADER: &str = "Cell spanning the full table width";

const ROWS: [[&str; 3]; 2] = [
    ["row 1; cell 1", "row 1; cell 2", "row 1; cell 3"],
    ["row 2; cell 1", "row 2; cell 2", "row 2; cell 3"],
];

fn centered(text: &str) -> Paragraph {
    let mut paragraph = Paragraph::new(text);
    paragraph.set_alignment(Alignment::Center);
    paragraph
}

/// Builds the document without writing it to disk.
pub fn document() -> Result<genpdf::Document, genpdf::error::Error> {
    let mut document = DocumentBuilder::new()
        .with_title("Rounded cell borders sample")
        .build()?;

    let decorator = RoundedCornersDecorator::new();

    let mut header = TableLayout::new(vec![1]);
    header.set_cell_decorator(decorator.clone());
    header.row().element(centered(HEADER)).push()?;

    let mut body = TableLayout::new(vec![2, 1, 1]);
    body.set_cell_decorator(decorator);
    for row in ROWS {
        body.row()
            .element(centered(row[0]))
            .element(centered(row[1]))
            .element(centered(row[2]))
            .push()?;
    }

    let mut table = LinearLayout::vertical();
    table.push(header);
    table.push(body);

    document.push(RoundedFrame::new(table).padded(Margins::trbl(
        2.0,
        TABLE_SIDE_PADDING_MM,
        2.0,
        TABLE_SIDE_PADDING_MM,
    )));

    Ok(document)
}

/// Renders the document and writes it to [`DEST`].
pub fn run() -> Result<(), Box<dyn Error>> {
    let pdf = output::render_to_bytes(document()?)?;
    pdf.write_to(DEST)?;
    println!("Generated {} ({} bytes)", DEST, pdf.bytes.len());
    Ok(())
}
