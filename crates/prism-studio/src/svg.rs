//! Paints a rendered frame as SVG polygons, in list order.

use std::fmt::{self, Write};

use prism_engine::{Color, RenderModel};

/// Serializes `models` (already back to front) into an SVG document.
///
/// Output space has its origin at the bottom-left with +Y up; SVG is y-down,
/// so y is flipped against `height`.
pub fn render_svg(models: &[&RenderModel], width: f32, height: f32) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%" fill="rgb(26,32,44)"/>"#)?;

    for model in models {
        let mut points = String::new();
        for p in &model.projected().points {
            if !points.is_empty() {
                points.push(' ');
            }
            write!(points, "{},{}", p.x, height - p.y)?;
        }
        writeln!(
            out,
            r#"  <polygon points="{points}" {} {}/>"#,
            paint("fill", model.fill()),
            paint("stroke", model.stroke()),
        )?;
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn paint(attr: &str, color: Option<Color>) -> String {
    match color {
        None => format!(r#"{attr}="none""#),
        Some(color) => {
            let [r, g, b, a] = color.clamped().to_srgb_u8();
            if a == u8::MAX {
                format!(r#"{attr}="rgb({r},{g},{b})""#)
            } else {
                format!(r#"{attr}="rgb({r},{g},{b})" {attr}-opacity="{:.3}""#, f32::from(a) / 255.0)
            }
        }
    }
}
