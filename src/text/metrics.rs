//! Point-size to millimeter conversion.

use crate::types::MM_PER_POINT;

/// Millimeters spanned by one em at `points`.
#[inline]
pub fn mm_per_em(points: f64) -> f64 {
    MM_PER_POINT * points
}

/// Millimeters per font unit at `points`, for a font whose em square is
/// `units_per_em` units. Loaded fonts guarantee `units_per_em > 0`.
#[inline]
pub fn mm_per_font_unit(points: f64, units_per_em: f64) -> f64 {
    mm_per_em(points) / units_per_em
}

/// Advance used for characters the font cannot draw: a third of an em.
#[inline]
pub fn fallback_advance(points: f64) -> f64 {
    mm_per_em(points) / 3.0
}
