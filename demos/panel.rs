//! Build a small oscillator panel and print it as SVG.
//!
//! Usage: cargo run --example panel --features tracing -- [FONT] [OUT.svg]
//!
//! With a font (`.ttf`, `.otf` or an SVG font) the panel gets a title and jack
//! labels; without one only the background artwork is drawn.

use glam::dvec2;
use miette::IntoDiagnostic;
use svgpanel::{
    AnyFont, Element, GlyphSource, HorizontalAlignment, Panel, TextItem, VerticalAlignment, border_rect, group,
    line_to, linear_gradient, move_to,
};
use tracing_subscriber::EnvFilter;

const HP: i32 = 6;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let font = args.next().map(AnyFont::open).transpose()?;
    let out = args.next();
    match &font {
        Some(font) => tracing::info!(font = font.name(), "labels enabled"),
        None => tracing::info!("no font given, drawing artwork only"),
    }

    let mut panel = Panel::new(HP)?;
    let width = panel.width_mm();
    let height = panel.height_mm();

    panel.append(Element::new("defs").child(linear_gradient(
        "panel_fade",
        dvec2(0.0, 0.0),
        dvec2(0.0, height),
        "#f4f4f4",
        "#c8c8c8",
    )));
    panel.append(border_rect(HP, "url(#panel_fade)", "#303030")?);

    let rule = move_to(dvec2(3.0, 18.0)) + &line_to(dvec2(width - 3.0, 18.0));
    panel.append(
        Element::with_id("path", "title_rule")
            .attr("d", rule.trim_end())
            .attr("style", "fill:none;stroke:#303030;stroke-width:0.35"),
    );

    if let Some(font) = &font {
        let mut labels = group("labels", "fill:#000000;fill-opacity:1;stroke:none");
        labels.append(TextItem::new("VCO", font, 14.0).to_path(
            dvec2(width / 2.0, 6.0),
            HorizontalAlignment::Center,
            VerticalAlignment::Top,
            "",
            "title",
        ));
        for (i, name) in ["FM", "PW", "OUT"].into_iter().enumerate() {
            let y = 40.0 + 28.0 * i as f64;
            labels.append(TextItem::new(name, font, 8.0).to_path(
                dvec2(width / 2.0, y),
                HorizontalAlignment::Center,
                VerticalAlignment::Bottom,
                "",
                "",
            ));
        }
        panel.append(labels);
    }

    match out {
        Some(path) => {
            panel.save(&path)?;
            tracing::info!(%path, hp = HP, "wrote panel");
        }
        None => print!("{}", panel.svg()?),
    }
    std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
    Ok(())
}
