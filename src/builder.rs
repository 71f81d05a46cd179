//! Document construction helpers shared by the sample generators.

use genpdf::error::Error;
use genpdf::{Margins, Size, SimplePageDecorator};

use crate::fonts;

const DEFAULT_MARGIN_MM: f64 = 20.0;

/// Builder for `genpdf::Document` instances pre-configured with the crate defaults.
///
/// Every sample starts from the same bootstrap: the default font family is installed and a
/// page decorator applies the margins.  The builder only exposes the knobs the samples
/// actually vary.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    paper_size: Option<Size>,
    margins: Option<Margins>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title recorded in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);

        if let Some(title) = self.title {
            document.set_title(title);
        }

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins.unwrap_or_else(|| {
            Margins::trbl(
                DEFAULT_MARGIN_MM,
                DEFAULT_MARGIN_MM,
                DEFAULT_MARGIN_MM,
                DEFAULT_MARGIN_MM,
            )
        }));
        document.set_page_decorator(decorator);

        Ok(document)
    }
}
