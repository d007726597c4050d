//! Resolving alignment anchors into drawing origins.
//!
//! Text is always rendered from its top-left corner. Callers instead give an
//! anchor point and say which part of the text's box should sit on it; the
//! resolver shifts the anchor by the measured extent to find the corner.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::{AlignmentAxis, PanelError};

/// Which edge (or the center) of the text box the anchor's x refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HorizontalAlignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Which edge (or the middle) of the text box the anchor's y refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VerticalAlignment {
    #[default]
    Top = 0,
    Middle = 1,
    Bottom = 2,
}

/// Top-left origin for text of size `extent` aligned on `anchor`.
pub fn resolve(
    anchor: DVec2,
    extent: DVec2,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> DVec2 {
    let x = match horizontal {
        HorizontalAlignment::Left => anchor.x,
        HorizontalAlignment::Center => anchor.x - extent.x / 2.0,
        HorizontalAlignment::Right => anchor.x - extent.x,
    };
    let y = match vertical {
        VerticalAlignment::Top => anchor.y,
        VerticalAlignment::Middle => anchor.y - extent.y / 2.0,
        VerticalAlignment::Bottom => anchor.y - extent.y,
    };
    dvec2(x, y)
}

impl TryFrom<u8> for HorizontalAlignment {
    type Error = PanelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            _ => Err(PanelError::InvalidAlignment {
                axis: AlignmentAxis::Horizontal,
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for VerticalAlignment {
    type Error = PanelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Top),
            1 => Ok(Self::Middle),
            2 => Ok(Self::Bottom),
            _ => Err(PanelError::InvalidAlignment {
                axis: AlignmentAxis::Vertical,
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for HorizontalAlignment {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(PanelError::InvalidAlignment {
                axis: AlignmentAxis::Horizontal,
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(PanelError::InvalidAlignment {
                axis: AlignmentAxis::Vertical,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HorizontalAlignment::*;
    use VerticalAlignment::*;

    const ANCHOR: DVec2 = DVec2::new(10.0, 10.0);
    const EXTENT: DVec2 = DVec2::new(4.0, 2.0);

    #[test]
    fn center_middle() {
        assert_eq!(resolve(ANCHOR, EXTENT, Center, Middle), dvec2(8.0, 9.0));
    }

    #[test]
    fn right_bottom() {
        assert_eq!(resolve(ANCHOR, EXTENT, Right, Bottom), dvec2(6.0, 8.0));
    }

    #[test]
    fn left_top_is_the_anchor() {
        assert_eq!(resolve(ANCHOR, EXTENT, Left, Top), ANCHOR);
    }

    #[test]
    fn axes_are_independent() {
        assert_eq!(resolve(ANCHOR, EXTENT, Right, Top), dvec2(6.0, 10.0));
        assert_eq!(resolve(ANCHOR, EXTENT, Left, Bottom), dvec2(10.0, 8.0));
        assert_eq!(resolve(ANCHOR, EXTENT, Center, Top), dvec2(8.0, 10.0));
    }

    #[test]
    fn integer_forms_round_trip_discriminants() {
        for h in [Left, Center, Right] {
            assert_eq!(HorizontalAlignment::try_from(h as u8).unwrap(), h);
        }
        for v in [Top, Middle, Bottom] {
            assert_eq!(VerticalAlignment::try_from(v as u8).unwrap(), v);
        }
    }

    #[test]
    fn out_of_range_integers_are_rejected() {
        let err = HorizontalAlignment::try_from(3).unwrap_err();
        assert_eq!(err.to_string(), "invalid horizontal alignment: 3");
        let err = VerticalAlignment::try_from(255).unwrap_err();
        assert_eq!(err.to_string(), "invalid vertical alignment: 255");
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Center".parse::<HorizontalAlignment>().unwrap(), Center);
        assert_eq!("BOTTOM".parse::<VerticalAlignment>().unwrap(), Bottom);
        assert_eq!(Right.to_string().parse::<HorizontalAlignment>().unwrap(), Right);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "justify".parse::<HorizontalAlignment>().unwrap_err();
        assert!(matches!(
            err,
            PanelError::InvalidAlignment { axis: AlignmentAxis::Horizontal, ref value } if value == "justify"
        ));
        assert!("baseline".parse::<VerticalAlignment>().is_err());
    }
}
