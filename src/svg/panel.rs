//! The panel root document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::element::Element;
use super::format::fmt_fixed2;
use super::{SVG_NS, SvgOptions};
use crate::errors::{PanelError, Result};
use crate::types::{HpWidth, PANEL_HEIGHT_MM};

/// A Eurorack front panel: an `svg` root sized from its HP width.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    hp: HpWidth,
    root: Element,
}

impl Panel {
    /// Create an empty panel `hp` units wide.
    ///
    /// The root carries, in order, `xmlns`, `width` and `height` in
    /// millimeters with two decimals, and a matching `viewBox` so one user
    /// unit equals one millimeter.
    pub fn new(hp: i32) -> Result<Self> {
        let hp = HpWidth::try_new(hp)?;
        let width = fmt_fixed2(hp.width_mm());
        let height = fmt_fixed2(PANEL_HEIGHT_MM);

        let root = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", format!("{width}mm"))
            .attr("height", format!("{height}mm"))
            .attr("viewBox", format!("0 0 {width} {height}"));

        Ok(Self { hp, root })
    }

    pub fn hp_width(&self) -> HpWidth {
        self.hp
    }

    pub fn width_mm(&self) -> f64 {
        self.hp.width_mm()
    }

    pub fn height_mm(&self) -> f64 {
        PANEL_HEIGHT_MM
    }

    /// The `svg` root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Add an element on top of everything appended so far.
    pub fn append(&mut self, elem: Element) -> &mut Self {
        self.root.append(elem);
        self
    }

    /// Serialize with default options.
    pub fn svg(&self) -> Result<String> {
        self.svg_with(&SvgOptions::default())
    }

    pub fn svg_with(&self, options: &SvgOptions) -> Result<String> {
        self.root.to_svg_string(options)
    }

    /// Write the serialized document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with(path, &SvgOptions::default())
    }

    pub fn save_with(&self, path: impl AsRef<Path>, options: &SvgOptions) -> Result<()> {
        let path = path.as_ref();
        let text = self.svg_with(options)?;

        crate::log::debug!(path = %path.display(), hp = self.hp.get(), bytes = text.len(), "saving panel");

        let mut file = File::create(path).map_err(|e| PanelError::io(path, e))?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| PanelError::io(path, e))
    }
}
