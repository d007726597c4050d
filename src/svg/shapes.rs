//! Pre-populated elements for common panel artwork.

use glam::DVec2;

use super::element::Element;
use crate::errors::Result;
use crate::font::GlyphSource;
use crate::text::TextItem;
use crate::types::{HpWidth, PANEL_HEIGHT_MM};

/// Full-panel background rectangle with a rounded 0.7mm outline.
///
/// Fails with [`PanelError::InvalidHpWidth`](crate::PanelError::InvalidHpWidth)
/// when `hp <= 0`.
pub fn border_rect(hp: i32, fill: &str, border: &str) -> Result<Element> {
    let hp = HpWidth::try_new(hp)?;
    let style = format!(
        "display:inline;fill:{fill};fill-opacity:1;fill-rule:nonzero;\
         stroke:{border};stroke-width:0.7;stroke-linecap:round;stroke-linejoin:round;\
         stroke-dasharray:none;stroke-opacity:1;image-rendering:auto"
    );
    Ok(Element::with_id("rect", "border_rect")
        .attr_num("width", hp.width_mm())
        .attr_num("height", PANEL_HEIGHT_MM)
        .attr("x", "0")
        .attr("y", "0")
        .attr("style", style))
}

/// Two-stop gradient from `color1` at `p1` to `color2` at `p2`, in panel
/// coordinates. Reference it from a style as `fill:url(#id)`.
pub fn linear_gradient(id: &str, p1: DVec2, p2: DVec2, color1: &str, color2: &str) -> Element {
    Element::with_id("linearGradient", id)
        .attr_num("x1", p1.x)
        .attr_num("y1", p1.y)
        .attr_num("x2", p2.x)
        .attr_num("y2", p2.y)
        .attr("gradientUnits", "userSpaceOnUse")
        .child(gradient_stop("0", color1))
        .child(gradient_stop("1", color2))
}

fn gradient_stop(offset: &str, color: &str) -> Element {
    Element::new("stop")
        .attr("offset", offset)
        .attr("style", format!("stop-color:{color};stop-opacity:1;"))
}

/// A `g` element whose children inherit `style`.
pub fn group(id: &str, style: &str) -> Element {
    Element::with_id("g", id).attr("style", style)
}

/// A `path` holding `item` rendered with its top-left corner at `origin`.
pub fn text_path<F: GlyphSource + ?Sized>(item: &TextItem<'_, F>, origin: DVec2, id: &str) -> Element {
    Element::with_id("path", id).attr("d", item.render(origin))
}

/// Path-data fragment starting a subpath at `p`, e.g. `"M 1.00,2.50 "`.
pub fn move_to(p: DVec2) -> String {
    format!("M {:.2},{:.2} ", p.x, p.y)
}

/// Path-data fragment drawing a line to `p`, e.g. `"L 1.00,2.50 "`.
pub fn line_to(p: DVec2) -> String {
    format!("L {:.2},{:.2} ", p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PanelError;
    use crate::svg::SvgOptions;
    use glam::dvec2;

    fn keys(elem: &Element) -> Vec<&str> {
        elem.attrs().map(|(k, _)| k).collect()
    }

    #[test]
    fn border_rect_covers_panel() {
        let rect = border_rect(10, "#e0e0e0", "#303030").unwrap();
        assert_eq!(rect.tag(), "rect");
        assert_eq!(keys(&rect), ["id", "width", "height", "x", "y", "style"]);
        assert_eq!(rect.id(), Some("border_rect"));
        assert_eq!(rect.get_attr("width"), Some("50.8"));
        assert_eq!(rect.get_attr("height"), Some("128.5"));
        assert_eq!(
            rect.get_attr("style"),
            Some(
                "display:inline;fill:#e0e0e0;fill-opacity:1;fill-rule:nonzero;stroke:#303030;\
                 stroke-width:0.7;stroke-linecap:round;stroke-linejoin:round;\
                 stroke-dasharray:none;stroke-opacity:1;image-rendering:auto"
            )
        );
    }

    #[test]
    fn border_rect_rejects_non_positive_width() {
        assert!(matches!(
            border_rect(0, "#fff", "#000"),
            Err(PanelError::InvalidHpWidth { hp: 0 })
        ));
        assert!(border_rect(-4, "#fff", "#000").is_err());
    }

    #[test]
    fn gradient_has_two_stops() {
        let grad = linear_gradient("fade", dvec2(0.0, 0.0), dvec2(0.0, 128.5), "#fff", "#888");
        assert_eq!(
            keys(&grad),
            ["id", "x1", "y1", "x2", "y2", "gradientUnits"]
        );
        assert_eq!(grad.get_attr("y2"), Some("128.5"));
        let stops = grad.children();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].get_attr("offset"), Some("0"));
        assert_eq!(stops[0].get_attr("style"), Some("stop-color:#fff;stop-opacity:1;"));
        assert_eq!(stops[1].get_attr("offset"), Some("1"));
        assert_eq!(stops[1].get_attr("style"), Some("stop-color:#888;stop-opacity:1;"));
    }

    #[test]
    fn gradient_serializes_nested() {
        let grad = linear_gradient("g", dvec2(1.0, 2.0), dvec2(3.0, 4.0), "red", "blue");
        let text = grad.to_svg_string(&SvgOptions::default()).unwrap();
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <linearGradient id=\"g\" x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\" gradientUnits=\"userSpaceOnUse\">\n    \
             <stop offset=\"0\" style=\"stop-color:red;stop-opacity:1;\"/>\n    \
             <stop offset=\"1\" style=\"stop-color:blue;stop-opacity:1;\"/>\n\
             </linearGradient>\n"
        );
    }

    #[test]
    fn group_omits_empty_style() {
        assert_eq!(keys(&group("knobs", "")), ["id"]);
        assert_eq!(keys(&group("", "fill:#000")), ["style"]);
    }

    #[test]
    fn path_fragments_use_two_decimals() {
        let d = move_to(dvec2(1.0, 2.5)) + &line_to(dvec2(10.126, -3.0));
        assert_eq!(d, "M 1.00,2.50 L 10.13,-3.00 ");
    }
}
