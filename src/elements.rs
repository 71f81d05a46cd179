//! Custom elements that extend the stock `genpdf` building blocks.
//!
//! This module adds the two rendering customizations used by the samples: a fixed-size
//! cut-out region that strokes its outline and truncates overflowing content, and rounded
//! border drawing for tables.  `genpdf` exposes border drawing through the
//! [`CellDecorator`] trait and only offers straight line strokes on a render area, so the
//! rounded outlines are approximated with short polyline segments.

use genpdf::elements::{CellDecorator, LinearLayout};
use genpdf::error::Error;
use genpdf::render;
use genpdf::style::{Color, Style};
use genpdf::{Context, Element, Margins, Mm, Position, RenderResult, Size};

const DEFAULT_CUTOUT_PADDING_MM: f64 = 1.5;
const DEFAULT_FRAME_INSET_MM: f64 = 1.0;
const DEFAULT_CORNER_RADIUS_MM: f64 = 2.0;
const DEFAULT_CELL_PADDING_MM: f64 = 1.5;

/// Number of straight segments used to approximate each quarter-circle corner.
const CORNER_SEGMENTS: usize = 8;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Builds a closed polyline approximating a rounded rectangle.
///
/// Coordinates are in millimetres relative to the render area, with the y axis growing
/// downwards.  The radius is clamped so opposing corners never overlap.
fn rounded_rect_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Vec<(f64, f64)> {
    let radius = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1) + 1);

    let mut corner = |center_x: f64, center_y: f64, start_deg: f64| {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (start_deg + 90.0 * step as f64 / CORNER_SEGMENTS as f64).to_radians();
            points.push((
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            ));
        }
    };

    // Clockwise in page coordinates, starting at the top edge.
    corner(x + width - radius, y + radius, 270.0);
    corner(x + width - radius, y + height - radius, 0.0);
    corner(x + radius, y + height - radius, 90.0);
    corner(x + radius, y + radius, 180.0);

    let start = points[0];
    points.push(start);
    points
}

fn to_positions(points: Vec<(f64, f64)>) -> Vec<Position> {
    points
        .into_iter()
        .map(|(x, y)| Position::new(mm_from_f64(x), mm_from_f64(y)))
        .collect()
}

fn outline_style(color: Option<Color>, inherited: &Style) -> Style {
    let mut style = Style::new();
    if let Some(color) = color.or_else(|| inherited.color()) {
        style.set_color(color);
    }
    style
}

/// A fixed-size region carved out of the page flow.
///
/// The region strokes a rectangular outline and renders the wrapped content inside it.
/// Content that does not fit into the region is discarded instead of continuing on the
/// next page, matching the behaviour of drawing into a canvas cut out of a page.
pub struct CutoutCanvas {
    width: Mm,
    height: Mm,
    padding: Mm,
    content: LinearLayout,
    outline_color: Option<Color>,
}

impl CutoutCanvas {
    /// Creates an empty cut-out region with the given dimensions.
    pub fn new(width: impl Into<Mm>, height: impl Into<Mm>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            padding: mm_from_f64(DEFAULT_CUTOUT_PADDING_MM),
            content: LinearLayout::vertical(),
            outline_color: None,
        }
    }

    /// Appends an element to the content rendered inside the region.
    pub fn push(&mut self, element: impl Element + 'static) {
        self.content.push(element);
    }

    /// Appends an element and returns the updated region.
    pub fn with_element(mut self, element: impl Element + 'static) -> Self {
        self.push(element);
        self
    }

    /// Sets the gap between the outline and the content.
    pub fn with_padding(mut self, padding: impl Into<Mm>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the color used for the outline stroke.
    pub fn with_outline_color(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }
}

impl Element for CutoutCanvas {
    fn render(
        &mut self,
        context: &Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if self.height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let available = area.size().width;
        let width = if self.width < available {
            self.width
        } else {
            available
        };

        let w = mm_to_f64(width);
        let h = mm_to_f64(self.height);
        let frame = vec![(0.0, 0.0), (w, 0.0), (w, h), (0.0, h), (0.0, 0.0)];
        area.draw_line(
            to_positions(frame),
            outline_style(self.outline_color, &style),
        );

        let padding = mm_to_f64(self.padding);
        let mut content_area = area.clone();
        content_area.add_margins(Margins::trbl(
            self.padding,
            available - width + self.padding,
            self.padding,
            self.padding,
        ));
        content_area.set_height(mm_from_f64((h - 2.0 * padding).max(0.0)));

        // Overflowing content is cut off at the region boundary.
        let _ = self.content.render(context, content_area, style)?;

        result.size = Size::new(width, self.height);
        Ok(result)
    }
}

/// Wraps an element and strokes a rounded outline around the space it occupied.
///
/// The frame assumes the wrapped element fits on the current page; content that continues
/// on the next page is rendered without a second frame.
pub struct RoundedFrame<E: Element> {
    element: E,
    inset: Mm,
    radius: Mm,
    outline_color: Option<Color>,
}

impl<E: Element> RoundedFrame<E> {
    /// Creates a frame around the given element using the default inset and radius.
    pub fn new(element: E) -> Self {
        Self {
            element,
            inset: mm_from_f64(DEFAULT_FRAME_INSET_MM),
            radius: mm_from_f64(DEFAULT_CORNER_RADIUS_MM),
            outline_color: None,
        }
    }

    /// Sets the corner radius of the outline.
    pub fn with_radius(mut self, radius: impl Into<Mm>) -> Self {
        self.radius = radius.into();
        self
    }

    /// Sets the gap between the available area and the outline.
    pub fn with_inset(mut self, inset: impl Into<Mm>) -> Self {
        self.inset = inset.into();
        self
    }

    /// Sets the color used for the outline stroke.
    pub fn with_outline_color(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }
}

impl<E: Element> Element for RoundedFrame<E> {
    fn render(
        &mut self,
        context: &Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let inset = mm_to_f64(self.inset);

        let mut inner = area.clone();
        inner.add_margins(Margins::trbl(self.inset, self.inset, self.inset, self.inset));
        let child = self.element.render(context, inner, style)?;

        let width = mm_to_f64(area.size().width);
        let height = mm_to_f64(child.size.height) + 2.0 * inset;
        let points = rounded_rect_path(
            inset,
            inset,
            width - 2.0 * inset,
            height - 2.0 * inset,
            mm_to_f64(self.radius),
        );
        area.draw_line(
            to_positions(points),
            outline_style(self.outline_color, &style),
        );

        let mut result = RenderResult::default();
        result.size = Size::new(area.size().width, mm_from_f64(height));
        result.has_more = child.has_more;
        Ok(result)
    }
}

/// Cell decorator that strokes a rounded outline inside each cell instead of straight
/// borders.
///
/// The outline is offset from the cell bounds by `inset`, and the cell content is pushed
/// further in by `padding` so text never touches the stroke.
#[derive(Clone, Debug)]
pub struct RoundedCornersDecorator {
    inset: Mm,
    radius: Mm,
    padding: Mm,
    color: Option<Color>,
}

impl Default for RoundedCornersDecorator {
    fn default() -> Self {
        Self {
            inset: mm_from_f64(DEFAULT_FRAME_INSET_MM),
            radius: mm_from_f64(DEFAULT_CORNER_RADIUS_MM),
            padding: mm_from_f64(DEFAULT_CELL_PADDING_MM),
            color: None,
        }
    }
}

impl RoundedCornersDecorator {
    /// Creates a decorator with the default inset, radius and padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corner radius of the cell outlines.
    pub fn with_radius(mut self, radius: impl Into<Mm>) -> Self {
        self.radius = radius.into();
        self
    }

    /// Sets the gap between the cell bounds and the outline.
    pub fn with_inset(mut self, inset: impl Into<Mm>) -> Self {
        self.inset = inset.into();
        self
    }

    /// Sets the color used for the outline strokes.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl CellDecorator for RoundedCornersDecorator {
    fn prepare_cell<'p>(
        &self,
        _column: usize,
        _row: usize,
        mut area: render::Area<'p>,
    ) -> render::Area<'p> {
        let margin = self.inset + self.padding;
        area.add_margins(Margins::trbl(margin, margin, margin, margin));
        area
    }

    fn decorate_cell(
        &mut self,
        _column: usize,
        _row: usize,
        _has_more: bool,
        mut area: render::Area<'_>,
        row_height: Mm,
    ) -> Mm {
        let inset = mm_to_f64(self.inset);
        let padding = mm_to_f64(self.padding);
        let total = mm_to_f64(row_height) + 2.0 * (inset + padding);
        let width = mm_to_f64(area.size().width);

        let points = rounded_rect_path(
            inset,
            inset,
            width - 2.0 * inset,
            total - 2.0 * inset,
            mm_to_f64(self.radius),
        );
        let mut style = Style::new();
        if let Some(color) = self.color {
            style.set_color(color);
        }
        area.draw_line(to_positions(points), style);

        mm_from_f64(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn rounded_path_is_closed() {
        let points = rounded_rect_path(0.0, 0.0, 40.0, 20.0, 3.0);
        assert_eq!(points.first(), points.last());
        assert!(points.len() > 4 * CORNER_SEGMENTS);
    }

    #[test]
    fn rounded_path_stays_inside_bounds() {
        let (x, y, width, height) = (2.0, 3.0, 40.0, 20.0);
        let points = rounded_rect_path(x, y, width, height, 5.0);
        for (px, py) in points {
            assert!(px >= x - EPSILON && px <= x + width + EPSILON);
            assert!(py >= y - EPSILON && py <= y + height + EPSILON);
        }
    }

    #[test]
    fn rounded_path_cuts_the_corners() {
        let radius = 4.0;
        let points = rounded_rect_path(0.0, 0.0, 40.0, 20.0, radius);
        let min_corner_distance = points
            .iter()
            .map(|(px, py)| (px * px + py * py).sqrt())
            .fold(f64::INFINITY, f64::min);
        // The arc never comes closer to the raw corner than radius * (sqrt(2) - 1).
        assert!(min_corner_distance > radius * 0.4);
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let points = rounded_rect_path(0.0, 0.0, 4.0, 2.0, 50.0);
        for (px, py) in points {
            assert!(px >= -EPSILON && px <= 4.0 + EPSILON);
            assert!(py >= -EPSILON && py <= 2.0 + EPSILON);
        }
    }
}
