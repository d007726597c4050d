//! Pre-vectorized glyph sets stored as SVG fonts.
//!
//! An SVG font is a `<font>` element holding one `<font-face>` with the
//! font-wide metrics and a `<glyph>` per character:
//!
//! ```xml
//! <font horiz-adv-x="500">
//!   <font-face units-per-em="1000" ascent="800" descent="-200"/>
//!   <glyph unicode="I" horiz-adv-x="300" d="M100 0L200 0L200 700L100 700Z"/>
//! </font>
//! ```
//!
//! Glyph coordinates use the font's own Y-up space, exactly like TrueType
//! outlines, so both kinds of font go through the same renderer.

use std::path::Path;

use glam::dvec2;
use roxmltree::{Document, Node, ParsingOptions};
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use super::{Glyph, GlyphMap, GlyphSource, Outline, VerticalBounds};
use crate::errors::{PanelError, Result};
use crate::pen::Pen;

/// Units per em assumed when `<font-face>` does not say.
const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// A glyph set loaded from an SVG font document.
#[derive(Debug, Clone)]
pub struct SvgFont {
    name: String,
    units_per_em: f64,
    bounds: VerticalBounds,
    glyphs: GlyphMap,
}

impl SvgFont {
    /// Read and parse an SVG font file. The file is closed before parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PanelError::io(path, e))?;
        Self::parse(path.display().to_string(), &text)
    }

    /// Parse an SVG font document held in memory.
    ///
    /// Vertical bounds are taken from `font-face/@bbox` when present,
    /// otherwise from `descent` and `ascent` (a positive descent is read as
    /// a depth below the baseline). Glyphs without `horiz-adv-x` inherit the
    /// `<font>` default. Glyphs whose `unicode` is not a single character
    /// (ligatures) are skipped, as is `<missing-glyph>`: lookups for such
    /// characters fall back to the text layer's spacing policy.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        // Font editors export with a DOCTYPE; external subsets are not fetched.
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let doc = Document::parse_with_options(text, options).map_err(|source| {
            PanelError::SvgFontXml {
                name: name.clone(),
                source,
            }
        })?;

        let font = doc
            .descendants()
            .find(|n| n.has_tag_name("font"))
            .ok_or_else(|| invalid(&name, "no <font> element"))?;
        let face = font
            .children()
            .find(|n| n.has_tag_name("font-face"))
            .ok_or_else(|| invalid(&name, "no <font-face> element"))?;

        let units_per_em = number_attr(&name, face, "units-per-em")?.unwrap_or(DEFAULT_UNITS_PER_EM);
        if units_per_em <= 0.0 {
            return Err(PanelError::InvalidUnitsPerEm { name });
        }
        let bounds = vertical_bounds(&name, face)?;
        let default_advance = number_attr(&name, font, "horiz-adv-x")?.unwrap_or(0.0);

        let mut glyphs = GlyphMap::new();
        for node in font.children().filter(|n| n.has_tag_name("glyph")) {
            let Some(unicode) = node.attribute("unicode") else {
                continue;
            };
            let mut chars = unicode.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                crate::log::warn!(font = %name, unicode, "skipping multi-character glyph");
                continue;
            };
            if glyphs.contains_key(&ch) {
                continue;
            }

            let advance = number_attr(&name, node, "horiz-adv-x")?.unwrap_or(default_advance);
            let mut outline = Outline::new();
            if let Some(d) = node.attribute("d") {
                record_path(&name, ch, d, &mut outline)?;
            }
            glyphs.insert(ch, Glyph::new(advance, outline));
        }

        crate::log::debug!(
            font = %name,
            units_per_em,
            y_min = bounds.y_min,
            y_max = bounds.y_max,
            glyphs = glyphs.len(),
            "loaded SVG font"
        );

        Ok(Self {
            name,
            units_per_em,
            bounds,
            glyphs,
        })
    }

    /// Number of characters this font can draw.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl GlyphSource for SvgFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn units_per_em(&self) -> f64 {
        self.units_per_em
    }

    fn vertical_bounds(&self) -> VerticalBounds {
        self.bounds
    }

    fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> PanelError {
    PanelError::InvalidSvgFont {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn number_attr(name: &str, node: Node<'_, '_>, attr: &str) -> Result<Option<f64>> {
    node.attribute(attr)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| invalid(name, format!("{attr}=\"{raw}\" is not a number")))
        })
        .transpose()
}

fn vertical_bounds(name: &str, face: Node<'_, '_>) -> Result<VerticalBounds> {
    if let Some(bbox) = face.attribute("bbox") {
        let values = bbox
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| invalid(name, format!("bbox=\"{bbox}\" is not a number list")))?;
        return match values.as_slice() {
            [_, y_min, _, y_max] => Ok(VerticalBounds::new(*y_min, *y_max)),
            _ => Err(invalid(name, format!("bbox=\"{bbox}\" needs four numbers"))),
        };
    }

    let ascent = number_attr(name, face, "ascent")?;
    let descent = number_attr(name, face, "descent")?;
    match (ascent, descent) {
        (Some(ascent), Some(descent)) => Ok(VerticalBounds::new(-descent.abs(), ascent)),
        _ => Err(invalid(
            name,
            "<font-face> needs either bbox or both ascent and descent",
        )),
    }
}

fn record_path(name: &str, glyph: char, d: &str, pen: &mut impl Pen) -> Result<()> {
    for segment in SimplifyingPathParser::from(d) {
        let segment = segment.map_err(|source| PanelError::GlyphPath {
            name: name.to_string(),
            glyph,
            source,
        })?;
        match segment {
            SimplePathSegment::MoveTo { x, y } => pen.move_to(dvec2(x, y)),
            SimplePathSegment::LineTo { x, y } => pen.line_to(dvec2(x, y)),
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                pen.quad_to(dvec2(x1, y1), dvec2(x, y))
            }
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => pen.curve_to(dvec2(x1, y1), dvec2(x2, y2), dvec2(x, y)),
            SimplePathSegment::ClosePath => pen.close(),
        }
    }
    Ok(())
}
