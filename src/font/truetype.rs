//! TrueType/OpenType outline fonts.

use std::path::Path;

use glam::dvec2;

use super::{Glyph, GlyphMap, GlyphSource, Outline, VerticalBounds};
use crate::errors::{PanelError, Result};
use crate::pen::Pen;

/// An outline font loaded from a `.ttf`/`.otf` file.
///
/// Characters are looked up through the font's Unicode `cmap` subtables.
/// Vertical bounds come from the `head` table's `yMin`/`yMax`.
#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    units_per_em: f64,
    bounds: VerticalBounds,
    glyphs: GlyphMap,
}

impl Font {
    /// Read and parse a font file.
    ///
    /// The file is read in full and closed before parsing starts, so no
    /// descriptor outlives this call whether it succeeds or fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| PanelError::io(path, e))?;
        Self::from_bytes(path.display().to_string(), &data)
    }

    /// Parse font data already in memory. `name` labels the font in errors
    /// and logs.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let name = name.into();
        let face = ttf_parser::Face::parse(data, 0).map_err(|source| PanelError::FontParse {
            name: name.clone(),
            source,
        })?;

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(PanelError::InvalidUnitsPerEm { name });
        }

        let bbox = face.global_bounding_box();
        let bounds = VerticalBounds::new(f64::from(bbox.y_min), f64::from(bbox.y_max));

        let mut codepoints = Vec::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if subtable.is_unicode() {
                    subtable.codepoints(|cp| codepoints.extend(char::from_u32(cp)));
                }
            }
        }

        let mut glyphs = GlyphMap::with_capacity(codepoints.len());
        for ch in codepoints {
            if glyphs.contains_key(&ch) {
                continue;
            }
            let Some(id) = face.glyph_index(ch).filter(|id| id.0 != 0) else {
                continue;
            };
            let advance = face.glyph_hor_advance(id).unwrap_or(0);
            let outline = record_outline(|sink| face.outline_glyph(id, sink));
            glyphs.insert(ch, Glyph::new(f64::from(advance), outline));
        }

        crate::log::debug!(
            font = %name,
            units_per_em,
            y_min = bounds.y_min,
            y_max = bounds.y_max,
            glyphs = glyphs.len(),
            "loaded TrueType font"
        );

        Ok(Self {
            name,
            units_per_em: f64::from(units_per_em),
            bounds,
            glyphs,
        })
    }

    /// Number of characters this font can draw.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl GlyphSource for Font {
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

/// Run `draw` against a fresh outline and keep the result only if it
/// completed.
///
/// `ttf-parser` reports both blank glyphs (such as the space) and malformed
/// ones as `None`, and a malformed glyph may already have emitted part of its
/// contours. Either way the glyph is stored with an empty outline.
fn record_outline<D>(draw: D) -> Outline
where
    D: FnOnce(&mut OutlineSink<'_, Outline>) -> Option<ttf_parser::Rect>,
{
    let mut outline = Outline::new();
    let complete = draw(&mut OutlineSink(&mut outline)).is_some();
    if complete {
        return outline;
    }
    if !outline.is_empty() {
        crate::log::warn!(
            segments = outline.segments().len(),
            "discarding partial glyph outline"
        );
    }
    Outline::new()
}

/// Adapts `ttf-parser`'s outline callbacks to a [`Pen`].
struct OutlineSink<'a, P: Pen>(&'a mut P);

impl<P: Pen> ttf_parser::OutlineBuilder for OutlineSink<'_, P> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(dvec2(x.into(), y.into()));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(dvec2(x.into(), y.into()));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0
            .quad_to(dvec2(x1.into(), y1.into()), dvec2(x.into(), y.into()));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.curve_to(
            dvec2(x1.into(), y1.into()),
            dvec2(x2.into(), y2.into()),
            dvec2(x.into(), y.into()),
        );
    }

    fn close(&mut self) {
        self.0.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Font::open("/nonexistent/dir/Panel.ttf").unwrap_err();
        match err {
            PanelError::Io { path, source } => {
                assert_eq!(path, "/nonexistent/dir/Panel.ttf");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = Font::from_bytes("garbage", b"definitely not a font").unwrap_err();
        assert!(matches!(err, PanelError::FontParse { ref name, .. } if name == "garbage"));
    }

    #[test]
    fn empty_data_fails_to_parse() {
        assert!(matches!(
            Font::from_bytes("empty", &[]),
            Err(PanelError::FontParse { .. })
        ));
    }

    #[test]
    fn partial_outline_is_discarded() {
        use ttf_parser::OutlineBuilder;

        let outline = record_outline(|sink| {
            sink.move_to(0.0, 0.0);
            sink.line_to(100.0, 0.0);
            None
        });
        assert!(outline.is_empty());
    }

    #[test]
    fn complete_outline_is_kept() {
        use ttf_parser::OutlineBuilder;

        let outline = record_outline(|sink| {
            sink.move_to(0.0, 0.0);
            sink.line_to(100.0, 0.0);
            sink.close();
            Some(ttf_parser::Rect {
                x_min: 0,
                y_min: 0,
                x_max: 100,
                y_max: 0,
            })
        });
        assert_eq!(outline.segments().len(), 3);
    }

    #[test]
    fn outline_sink_forwards_to_pen() {
        use crate::font::Segment;
        use ttf_parser::OutlineBuilder;

        let mut outline = Outline::new();
        {
            let mut sink = OutlineSink(&mut outline);
            sink.move_to(0.0, 0.0);
            sink.line_to(500.0, 0.0);
            sink.curve_to(500.0, 250.0, 250.0, 500.0, 0.0, 500.0);
            sink.close();
        }
        assert_eq!(
            outline.segments(),
            [
                Segment::MoveTo(dvec2(0.0, 0.0)),
                Segment::LineTo(dvec2(500.0, 0.0)),
                Segment::CurveTo(
                    dvec2(500.0, 250.0),
                    dvec2(250.0, 500.0),
                    dvec2(0.0, 500.0)
                ),
                Segment::Close,
            ]
        );
    }
}
