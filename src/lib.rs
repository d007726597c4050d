//! Front-panel artwork for modular synthesizers, as SVG.
//!
//! A [`Panel`] is sized in HP and collects [`Element`]s. Labels are not SVG
//! `<text>`: a [`TextItem`] draws its glyph outlines as a single `path`, so
//! the output renders identically whether or not the viewer has the font.
//!
//! ```no_run
//! use glam::dvec2;
//! use svgpanel::{AnyFont, HorizontalAlignment, Panel, TextItem, VerticalAlignment, border_rect};
//!
//! # fn main() -> svgpanel::Result<()> {
//! let font = AnyFont::open("fonts/Quicksand-Light.ttf")?;
//! let mut panel = Panel::new(4)?;
//! panel.append(border_rect(4, "#e8e8e8", "#404040")?);
//! panel.append(TextItem::new("VCO", &font, 12.0).to_path(
//!     dvec2(panel.width_mm() / 2.0, 8.0),
//!     HorizontalAlignment::Center,
//!     VerticalAlignment::Top,
//!     "fill:#000000;stroke:none",
//!     "title",
//! ));
//! panel.save("vco.svg")?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod font;
mod log;
pub mod pen;
pub mod svg;
pub mod text;
pub mod types;

pub use errors::{AlignmentAxis, PanelError, Result};
pub use font::{AnyFont, Font, Glyph, GlyphSource, Outline, SvgFont, VerticalBounds};
pub use pen::{Pen, SvgPathPen, TransformPen};
pub use svg::{
    Element, Panel, SvgOptions, border_rect, group, line_to, linear_gradient, move_to, text_path,
};
pub use text::{HorizontalAlignment, TextItem, VerticalAlignment, measure, render, resolve};
pub use types::{HP_MM, HpWidth, PANEL_HEIGHT_MM};
