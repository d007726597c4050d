//! Text layout: measuring strings and rendering them to path data.
//!
//! This module is organized into submodules:
//! - `metrics`: Point-size to millimeter conversion
//! - `align`: Alignment enums and the anchor resolver
//!
//! Text is drawn glyph by glyph on a single line. There is no kerning or
//! shaping: each character advances the pen by its glyph's advance width,
//! and characters the font lacks advance by a third of an em without
//! drawing anything.
//!
//! # Baseline
//!
//! The measurer reports a height of `y_max - y_min` font units regardless of
//! the string, and the renderer places the glyph origin
//! `y_max + y_min / 2` font units below the requested top edge. The two are
//! only meaningful together: vertical alignment subtracts the measured height
//! and the renderer's offset then lands glyphs inside that box.

pub mod align;
pub mod metrics;

pub use align::{HorizontalAlignment, VerticalAlignment, resolve};
pub use metrics::{fallback_advance, mm_per_em, mm_per_font_unit};

use glam::{DVec2, dvec2};

use crate::font::GlyphSource;
use crate::pen::{SvgPathPen, TransformPen};
use crate::svg::Element;

/// Width and height, in millimeters, of `text` set at `points`.
///
/// Width is the sum of advances; height depends only on the font. An empty
/// string measures zero wide.
pub fn measure<F: GlyphSource + ?Sized>(text: &str, font: &F, points: f64) -> DVec2 {
    let mm_per_unit = mm_per_font_unit(points, font.units_per_em());
    let width = text
        .chars()
        .map(|ch| advance_mm(font, ch, points, mm_per_unit))
        .sum();
    let height = mm_per_unit * font.vertical_bounds().height();
    dvec2(width, height)
}

/// Render `text` as SVG path data with its top-left corner at `origin`.
///
/// Each glyph is drawn through a transform that scales font units to
/// millimeters and flips Y, so font-space "up" becomes panel-space "up".
pub fn render<F: GlyphSource + ?Sized>(text: &str, font: &F, origin: DVec2, points: f64) -> String {
    let mm_per_unit = mm_per_font_unit(points, font.units_per_em());
    let bounds = font.vertical_bounds();
    let baseline = origin.y + mm_per_unit * (bounds.y_max + bounds.y_min / 2.0);
    let scale = dvec2(mm_per_unit, -mm_per_unit);

    let mut sink = SvgPathPen::new();
    let mut x = origin.x;
    for ch in text.chars() {
        match font.glyph(ch) {
            Some(glyph) => {
                glyph.draw(&mut TransformPen::scaled(&mut sink, dvec2(x, baseline), scale));
                x += mm_per_unit * glyph.advance;
            }
            None => {
                crate::log::trace!(font = font.name(), ?ch, "no glyph, using fallback space");
                x += fallback_advance(points);
            }
        }
    }

    crate::log::debug!(
        font = font.name(),
        text,
        points,
        x = origin.x,
        y = origin.y,
        bytes = sink.as_str().len(),
        "rendered text"
    );
    sink.into_string()
}

fn advance_mm<F: GlyphSource + ?Sized>(font: &F, ch: char, points: f64, mm_per_unit: f64) -> f64 {
    match font.glyph(ch) {
        Some(glyph) => mm_per_unit * glyph.advance,
        None => fallback_advance(points),
    }
}

/// A string set in a particular font and size.
///
/// The font is borrowed, so one loaded font can be shared by every label on
/// a panel.
#[derive(Debug, Clone)]
pub struct TextItem<'a, F: GlyphSource + ?Sized> {
    text: String,
    font: &'a F,
    points: f64,
}

impl<'a, F: GlyphSource + ?Sized> TextItem<'a, F> {
    pub fn new(text: impl Into<String>, font: &'a F, points: f64) -> Self {
        Self {
            text: text.into(),
            font,
            points,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &'a F {
        self.font
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    /// Path data with the text's top-left corner at `origin`.
    pub fn render(&self, origin: DVec2) -> String {
        render(&self.text, self.font, origin, self.points)
    }

    /// Width and height in millimeters.
    pub fn measure(&self) -> DVec2 {
        measure(&self.text, self.font, self.points)
    }

    /// Measure, align on `anchor` and render into a `path` element.
    ///
    /// Attributes are written as `id`, `d`, `style`; empty `id` or `style`
    /// are left out.
    pub fn to_path(
        &self,
        anchor: DVec2,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
        style: &str,
        id: &str,
    ) -> Element {
        let origin = resolve(anchor, self.measure(), horizontal, vertical);
        crate::svg::text_path(self, origin, id).attr("style", style)
    }
}
