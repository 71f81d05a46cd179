//! Output handling for rendered documents.

use std::fs;
use std::path::Path;

use genpdf::error::{Context as _, Error};

/// A rendered PDF document held in memory.
pub struct RenderedPdf {
    /// The raw bytes of the PDF file.
    pub bytes: Vec<u8>,
}

impl RenderedPdf {
    /// Writes the document to `path`, creating missing parent directories first.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        fs::write(path, &self.bytes)
            .with_context(|| format!("Failed to write PDF to {}", path.display()))
    }
}

/// Renders the document into an in-memory PDF.
pub fn render_to_bytes(document: genpdf::Document) -> Result<RenderedPdf, Error> {
    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(RenderedPdf { bytes })
}

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let target = dir.path().join("nested/output/sample.pdf");

        let pdf = RenderedPdf {
            bytes: b"%PDF-1.4".to_vec(),
        };
        pdf.write_to(&target).expect("write pdf");

        assert_eq!(fs::read(&target).expect("read back"), b"%PDF-1.4");
    }

    #[test]
    fn bare_file_name_needs_no_directories() {
        ensure_parent_dir("sample.pdf").expect("no directory to create");
    }
}
