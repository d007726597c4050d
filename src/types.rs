//! Panel geometry primitives.
//!
//! Panel widths are counted in HP (horizontal pitch), the Eurorack width
//! unit. Everything drawn on a panel lives in millimeter space with the
//! origin at the top-left corner and Y growing downward.

use std::fmt;

use crate::errors::{PanelError, Result};

/// Width of one HP unit in millimeters.
pub const HP_MM: f64 = 5.08;

/// Height of a 3U panel in millimeters.
pub const PANEL_HEIGHT_MM: f64 = 128.5;

/// Millimeters per typographic point (1 pt = 1/72 in).
pub const MM_PER_POINT: f64 = 25.4 / 72.0;

/// A validated panel width in HP units (always at least 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct HpWidth(u32);

impl HpWidth {
    /// Validate a caller-supplied HP count. Zero and negative widths are
    /// rejected rather than clamped.
    pub fn try_new(hp: i32) -> Result<HpWidth> {
        if hp <= 0 {
            return Err(PanelError::InvalidHpWidth { hp });
        }
        Ok(HpWidth(hp.unsigned_abs()))
    }

    /// Number of HP units.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Panel width in millimeters: `5.08 * hp`.
    #[inline]
    pub fn width_mm(self) -> f64 {
        HP_MM * f64::from(self.0)
    }
}

impl TryFrom<i32> for HpWidth {
    type Error = PanelError;

    fn try_from(hp: i32) -> Result<HpWidth> {
        HpWidth::try_new(hp)
    }
}

impl fmt::Display for HpWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}HP", self.0)
    }
}
