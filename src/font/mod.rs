//! Glyph sources: fonts that can be measured and drawn.
//!
//! This module is organized into submodules:
//! - `truetype`: TrueType/OpenType outline fonts read with `ttf-parser`
//! - `svgfont`: pre-vectorized glyph sets stored as SVG fonts
//!
//! Both loaders copy what the text layer needs (advance widths, outlines and
//! the font-wide vertical bounds) into owned tables at load time. The file is
//! read in one call and released before the loader returns, and the loaded
//! font is immutable, so one font can back any number of text items.

pub mod svgfont;
pub mod truetype;

use std::collections::HashMap;
use std::path::Path;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::errors::Result;
use crate::pen::Pen;

pub use svgfont::SvgFont;
pub use truetype::Font;

/// Font-wide vertical extent in font units (Y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalBounds {
    pub y_min: f64,
    pub y_max: f64,
}

impl VerticalBounds {
    pub fn new(y_min: f64, y_max: f64) -> Self {
        Self { y_min, y_max }
    }

    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }
}

/// One recorded outline command, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo(DVec2, DVec2),
    CurveTo(DVec2, DVec2, DVec2),
    Close,
}

/// A glyph outline recorded once and replayed on demand.
///
/// `Outline` is itself a [`Pen`], so loaders record into it with the same
/// calls a renderer uses to draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Replay every segment into `pen`.
    pub fn draw<P: Pen + ?Sized>(&self, pen: &mut P) {
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(to) => pen.move_to(to),
                Segment::LineTo(to) => pen.line_to(to),
                Segment::QuadTo(ctrl, to) => pen.quad_to(ctrl, to),
                Segment::CurveTo(ctrl1, ctrl2, to) => pen.curve_to(ctrl1, ctrl2, to),
                Segment::Close => pen.close(),
            }
        }
    }
}

impl Pen for Outline {
    fn move_to(&mut self, to: DVec2) {
        self.segments.push(Segment::MoveTo(to));
    }

    fn line_to(&mut self, to: DVec2) {
        self.segments.push(Segment::LineTo(to));
    }

    fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.segments.push(Segment::QuadTo(ctrl, to));
    }

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        self.segments.push(Segment::CurveTo(ctrl1, ctrl2, to));
    }

    fn close(&mut self) {
        self.segments.push(Segment::Close);
    }
}

/// The drawable outline and advance width for one character.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub advance: f64,
    pub outline: Outline,
}

impl Glyph {
    pub fn new(advance: f64, outline: Outline) -> Self {
        Self { advance, outline }
    }

    pub fn draw<P: Pen + ?Sized>(&self, pen: &mut P) {
        self.outline.draw(pen);
    }
}

/// Lookup table shared by both loaders.
pub(crate) type GlyphMap = HashMap<char, Glyph>;

/// Anything that can supply glyphs and font-wide metrics.
///
/// A `None` from [`GlyphSource::glyph`] is not an error: the text layer
/// substitutes a third-of-an-em space for characters the font lacks.
#[enum_dispatch]
pub trait GlyphSource {
    /// Where the font came from (file path or caller-supplied label).
    fn name(&self) -> &str;

    /// Size of the em square in font units. Always positive.
    fn units_per_em(&self) -> f64;

    fn vertical_bounds(&self) -> VerticalBounds;

    fn glyph(&self, ch: char) -> Option<&Glyph>;
}

/// A font of either supported kind.
#[enum_dispatch(GlyphSource)]
#[derive(Debug, Clone)]
pub enum AnyFont {
    TrueType(Font),
    Svg(SvgFont),
}

impl AnyFont {
    /// Load a font, choosing the loader from the file extension: `.svg`
    /// files are read as SVG fonts, anything else as TrueType/OpenType.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            SvgFont::open(path).map(AnyFont::from)
        } else {
            Font::open(path).map(AnyFont::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::SvgPathPen;
    use glam::dvec2;

    #[test]
    fn outline_records_and_replays() {
        let mut outline = Outline::new();
        outline.move_to(dvec2(0.0, 0.0));
        outline.line_to(dvec2(100.0, 0.0));
        outline.quad_to(dvec2(100.0, 100.0), dvec2(0.0, 100.0));
        outline.close();
        assert_eq!(outline.segments().len(), 4);

        let mut pen = SvgPathPen::new();
        Glyph::new(120.0, outline).draw(&mut pen);
        assert_eq!(pen.as_str(), "M0 0H100Q100 100 0 100Z");
    }

    #[test]
    fn vertical_bounds_height() {
        assert_eq!(VerticalBounds::new(-200.0, 800.0).height(), 1000.0);
    }

    #[test]
    fn open_dispatches_on_extension() {
        let err = AnyFont::open("/nonexistent/panel-font.svg").unwrap_err();
        assert!(matches!(err, crate::PanelError::Io { .. }));
        let err = AnyFont::open("/nonexistent/panel-font.ttf").unwrap_err();
        assert!(matches!(err, crate::PanelError::Io { .. }));
    }
}
