//! SVG document model
//!
//! This module is organized into submodules:
//! - `format`: Number formatting for attributes and path data
//! - `element`: The generic element tree and its serializer
//! - `panel`: The panel root document
//! - `shapes`: Pre-populated elements (border, gradient, group, text path)

pub mod element;
pub mod format;
pub mod panel;
pub mod shapes;

pub use element::Element;
pub use format::{fmt_fixed2, fmt_num};
pub use panel::Panel;
pub use shapes::{border_rect, group, line_to, linear_gradient, move_to, text_path};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Options controlling document serialization.
///
/// Indentation is one byte repeated `indent_size` times per nesting level,
/// so only single-character indents such as spaces or tabs can be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgOptions {
    /// Byte repeated to indent each nesting level.
    pub indent_char: u8,
    /// How many `indent_char`s make up one level.
    pub indent_size: usize,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 4,
        }
    }
}
