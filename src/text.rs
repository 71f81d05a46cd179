//! Styled text fragments shared by the sample documents.
//!
//! [`Span`] is a light-weight representation of a text run carrying the inline decorations
//! the samples use (bold, italic, color).  Spans convert into
//! [`genpdf::style::StyledString`] values that the paragraph elements consume.

use genpdf::elements::Paragraph;
use genpdf::style::{Color, Style, StyledString};

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    color: Option<Color>,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns the configured color for the span, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Marks the span as bold and returns the updated span.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span as italic and returns the updated span.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Assigns a color to the span and returns the updated span.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(color) = self.color {
            style.set_color(color);
        }
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the span to a [`StyledString`].
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

impl From<Span> for StyledString {
    fn from(span: Span) -> Self {
        span.to_styled_string()
    }
}

/// Folds a sequence of spans into a single paragraph.
pub fn paragraph<I>(spans: I) -> Paragraph
where
    I: IntoIterator<Item = Span>,
{
    let mut paragraph = Paragraph::default();
    for span in spans {
        paragraph.push(span.to_styled_string());
    }
    paragraph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_to_style_reflects_flags() {
        let span = Span::new("Hello")
            .bold()
            .italic()
            .colored(Color::Rgb(10, 20, 30));
        let styled = span.to_styled_string();
        assert_eq!(styled.s, "Hello");
        assert!(styled.style.is_bold());
        assert!(styled.style.is_italic());
        assert_eq!(styled.style.color(), Some(Color::Rgb(10, 20, 30)));
    }

    #[test]
    fn plain_span_carries_no_decorations() {
        let styled = Span::new("plain").to_styled_string();
        assert!(!styled.style.is_bold());
        assert!(!styled.style.is_italic());
        assert_eq!(styled.style.color(), None);
    }
}
