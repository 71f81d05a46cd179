use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    pdf_blocks::samples::cell_borders::run()
}
