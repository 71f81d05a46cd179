use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    pdf_blocks::samples::styled_text::run()
}
