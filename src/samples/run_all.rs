//! Renders every sample document in sequence.

use std::error::Error;

/// Runs all sample generators, writing their documents under `results/`.
pub fn run() -> Result<(), Box<dyn Error>> {
    super::styled_text::run()?;
    super::canvas_cut::run()?;
    super::cell_borders::run()?;
    println!("All samples generated successfully.");
    Ok(())
}
