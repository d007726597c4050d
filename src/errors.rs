//! Error types with diagnostics using miette
//!
//! Every fallible operation in the crate returns [`PanelError`]. Missing
//! glyphs are deliberately absent from this list: they are handled by the
//! fallback spacing policy in [`crate::text`].

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = PanelError> = std::result::Result<T, E>;

/// Which alignment axis an invalid value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentAxis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for AlignmentAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentAxis::Horizontal => f.write_str("horizontal"),
            AlignmentAxis::Vertical => f.write_str("vertical"),
        }
    }
}

// ============================================================================
// Panel Errors
// ============================================================================

/// Errors produced while loading fonts or building and writing panels
#[derive(Error, Diagnostic, Debug)]
pub enum PanelError {
    #[error("invalid hp width: {hp}")]
    #[diagnostic(
        code(svgpanel::invalid_hp_width),
        help("panel width is measured in whole HP units (1 HP = 5.08 mm) and must be at least 1")
    )]
    InvalidHpWidth { hp: i32 },

    #[error("invalid {axis} alignment: {value}")]
    #[diagnostic(code(svgpanel::invalid_alignment))]
    InvalidAlignment { axis: AlignmentAxis, value: String },

    #[error("i/o error on {path}")]
    #[diagnostic(code(svgpanel::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ------------------------------------------------------------------------
    // Font loading
    // ------------------------------------------------------------------------
    #[error("cannot parse font {name}")]
    #[diagnostic(code(svgpanel::font::parse))]
    FontParse {
        name: String,
        #[source]
        source: ttf_parser::FaceParsingError,
    },

    #[error("font {name} declares zero units per em")]
    #[diagnostic(code(svgpanel::font::units_per_em))]
    InvalidUnitsPerEm { name: String },

    #[error("cannot parse SVG font {name}")]
    #[diagnostic(code(svgpanel::svg_font::xml))]
    SvgFontXml {
        name: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("invalid SVG font {name}: {reason}")]
    #[diagnostic(code(svgpanel::svg_font::invalid))]
    InvalidSvgFont { name: String, reason: String },

    #[error("bad path data for glyph {glyph:?} in SVG font {name}")]
    #[diagnostic(code(svgpanel::svg_font::glyph_path))]
    GlyphPath {
        name: String,
        glyph: char,
        #[source]
        source: svgtypes::Error,
    },

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------
    #[error("XML serialization error")]
    #[diagnostic(code(svgpanel::serialize))]
    Serialize(#[from] quick_xml::Error),
}

impl PanelError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        PanelError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
