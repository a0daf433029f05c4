//! SVG adapter: materialize a [`ClockScene`] into a standalone document.
//!
//! The scene itself is backend-neutral draw commands; this is the one
//! adapter the crate ships. Per-category glow filters go into `<defs>` and
//! the selected wedge references its own.

use itertools::Itertools;

use crate::clock::{ClockScene, Element, Family};
use crate::patch::SoundCategory;

/// The dial plus headroom for the outer hour labels.
const VIEW_BOX: &str = "-250 -250 500 500";

/// Render the scene as a complete SVG document.
pub fn scene_to_svg(scene: &ClockScene) -> String {
    let defs = SoundCategory::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<filter id="glow-{}"><feDropShadow dx="0" dy="0" stdDeviation="6" flood-color="{}" flood-opacity="0.8"/></filter>"#,
                c.label(),
                c.color()
            )
        })
        .join("");

    let body = scene.elements.iter().map(element_markup).join("\n  ");

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{VIEW_BOX}\">\n  <defs>{defs}</defs>\n  {body}\n</svg>\n"
    )
}

fn element_markup(element: &Element) -> String {
    match element {
        Element::Path {
            d,
            fill,
            stroke,
            stroke_width,
            opacity,
            glow,
            hour,
        } => {
            let mut s = format!(
                r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" opacity="{opacity}""#
            );
            if let Some(category) = glow {
                s.push_str(&format!(r#" filter="url(#glow-{})""#, category.label()));
            }
            if let Some(h) = hour {
                s.push_str(&format!(r#" data-hour="{h}""#));
            }
            s.push_str("/>");
            s
        }
        Element::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
            opacity,
        } => {
            let mut s = format!(r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r}""#);
            match fill {
                Some(f) => s.push_str(&format!(r#" fill="{f}""#)),
                None => s.push_str(r#" fill="none""#),
            }
            if let Some(stroke) = stroke {
                s.push_str(&format!(r#" stroke="{stroke}" stroke-width="{stroke_width}""#));
            }
            if *opacity != 1.0 {
                s.push_str(&format!(r#" opacity="{opacity}""#));
            }
            s.push_str("/>");
            s
        }
        Element::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            width,
            opacity,
        } => format!(
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{width}" opacity="{opacity}"/>"#
        ),
        Element::Text {
            x,
            y,
            content,
            size,
            fill,
            family,
            bold,
            centered,
        } => {
            let font = match family {
                Family::Display => "Syne, sans-serif",
                Family::Mono => "DM Mono, monospace",
            };
            let mut s = format!(
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-family="{font}" font-size="{size}" fill="{fill}""#
            );
            if *bold {
                s.push_str(r#" font-weight="700""#);
            }
            if *centered {
                s.push_str(r#" dominant-baseline="middle""#);
            }
            s.push('>');
            s.push_str(&escape(content));
            s.push_str("</text>");
            s
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockLayout;
    use crate::schedule::PERSONAS;

    #[test]
    fn document_structure() {
        let scene = ClockScene::build(Some(&PERSONAS[0]), 8, &ClockLayout::default());
        let svg = scene_to_svg(&scene);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"<filter id="glow-impact">"#));
        assert!(svg.contains(r#"data-hour="8""#));
        assert!(svg.contains(&PERSONAS[0].name.to_string()));
    }

    #[test]
    fn empty_dial_shows_the_placeholder() {
        let scene = ClockScene::build(None, 0, &ClockLayout::default());
        let svg = scene_to_svg(&scene);
        assert!(svg.contains("SELECT A PERSONA"));
        assert!(!svg.contains("filter=\"url"));
    }
}
