//! Radial 24-hour clock renderer.
//!
//! Everything here is pure geometry. [`ClockScene::build`] maps a persona's
//! schedule onto an ordered list of draw commands; [`ClockLayout::hit_test`]
//! inverts that mapping for pointer input. No retained state and no drawing
//! backend: the `svg` module is one adapter over a scene, hosts with a
//! different canvas write their own.
//!
//! Coordinates are origin-centered with y growing downward (SVG convention).
//! Hour 0 sits at 12 o'clock and hours advance clockwise.

use core::f32::consts::{FRAC_PI_2, TAU};

use crate::patch::SoundCategory;
use crate::schedule::Persona;

const EMPTY_WEDGE_FILL: &str = "#13162a";
const WEDGE_STROKE: &str = "#070810";
const RING_STROKE: &str = "#1e2240";
const CENTER_FILL: &str = "#070810";
const LABEL_MUTED: &str = "#3a3f6a";
const ROLE_FILL: &str = "#5a5f8a";
const NEEDLE_STROKE: &str = "white";

/// Accent used when no persona supplies one.
pub const FALLBACK_ACCENT: &str = "#a29bfe";

/// Radial layout constants, radii in scene units and the wedge gap in
/// radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockLayout {
    pub r_inner: f32,
    pub r_outer: f32,
    pub r_label: f32,
    pub gap: f32,
}

impl Default for ClockLayout {
    fn default() -> Self {
        Self {
            r_inner: 100.0,
            r_outer: 220.0,
            r_label: 238.0,
            gap: 0.01,
        }
    }
}

/// Angle of an hour mark in radians. Accepts fractional hours (and 24,
/// which lands back on 12 o'clock plus one turn).
pub fn hour_to_angle(hour: f32) -> f32 {
    hour / 24.0 * TAU - FRAC_PI_2
}

fn polar(angle: f32, radius: f32) -> (f32, f32) {
    (angle.cos() * radius, angle.sin() * radius)
}

/// Loudness fraction driving wedge depth: 35 dB and below floor at 0,
/// 100 dB reaches 1.
pub fn db_factor(decibels: f32) -> f32 {
    ((decibels - 35.0) / 65.0).max(0.0)
}

impl ClockLayout {
    /// Outer radius of an hour's wedge at the given loudness. Even silent
    /// hours keep a 4-unit sliver so every hour stays visible and clickable.
    pub fn wedge_outer(&self, decibels: f32) -> f32 {
        let r = self.r_inner + db_factor(decibels) * (self.r_outer - self.r_inner) * 0.95;
        r.max(self.r_inner + 4.0)
    }

    /// SVG path data for one hour's wedge.
    pub fn segment_path(&self, hour: u8, decibels: f32) -> String {
        let start = hour_to_angle(hour as f32);
        let end = hour_to_angle(hour as f32 + 1.0) - self.gap;
        let outer = self.wedge_outer(decibels);
        let inner = self.r_inner;
        let (x1, y1) = polar(start, outer);
        let (x2, y2) = polar(end, outer);
        let (x3, y3) = polar(end, inner);
        let (x4, y4) = polar(start, inner);
        format!(
            "M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 0 0 {:.2} {:.2} Z",
            x1, y1, outer, outer, x2, y2, x3, y3, inner, inner, x4, y4
        )
    }

    /// Which hour wedge contains the point, if any.
    ///
    /// Inverse of the wedge geometry: honors each hour's actual outer
    /// radius (louder hours are deeper targets) and the angular gap
    /// between wedges. Reports the hour only; selection is the caller's
    /// decision.
    pub fn hit_test(&self, persona: &Persona, x: f32, y: f32) -> Option<u8> {
        let radius = (x * x + y * y).sqrt();
        if radius < self.r_inner {
            return None;
        }

        // Wedges live on [-pi/2, 3pi/2); atan2 gives (-pi, pi]
        let mut angle = y.atan2(x);
        if angle < -FRAC_PI_2 {
            angle += TAU;
        }

        let hour = (((angle + FRAC_PI_2) / TAU * 24.0) as u8).min(23);

        // The seam between wedges belongs to neither
        if angle >= hour_to_angle(hour as f32 + 1.0) - self.gap {
            return None;
        }

        if radius <= self.wedge_outer(persona.hour(hour).decibels) {
            Some(hour)
        } else {
            None
        }
    }
}

/// Font choice for scene text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// The display face for the persona name.
    Display,
    /// The mono face for labels and metadata.
    Mono,
}

/// One draw command. A scene is an ordered list of these, back to front.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Path {
        d: String,
        fill: &'static str,
        stroke: &'static str,
        stroke_width: f32,
        opacity: f32,
        /// Category keying a glow filter; set on the selected wedge only.
        glow: Option<SoundCategory>,
        /// Wedges carry their hour so hosts can wire pointer events.
        hour: Option<u8>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Option<&'static str>,
        stroke: Option<&'static str>,
        stroke_width: f32,
        opacity: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: &'static str,
        width: f32,
        opacity: f32,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        size: f32,
        fill: &'static str,
        family: Family,
        bold: bool,
        /// Center the glyph box on `y` instead of sitting on the baseline.
        centered: bool,
    },
}

/// A rendered clock face.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockScene {
    pub elements: Vec<Element>,
}

impl ClockScene {
    /// Build the scene for a persona (or the empty dial) with `selected`
    /// highlighted. Pure: equal inputs build equal scenes.
    pub fn build(persona: Option<&Persona>, selected: u8, layout: &ClockLayout) -> Self {
        let mut elements = Vec::with_capacity(64);

        // Concentric guide rings, inner to outer
        for i in 0..5 {
            elements.push(Element::Circle {
                cx: 0.0,
                cy: 0.0,
                r: layout.r_inner + (layout.r_outer - layout.r_inner) * i as f32 / 4.0,
                fill: None,
                stroke: Some(RING_STROKE),
                stroke_width: 0.5,
                opacity: 1.0,
            });
        }

        elements.push(Element::Text {
            x: 0.0,
            y: -layout.r_inner + 25.0,
            content: "AM".into(),
            size: 7.0,
            fill: LABEL_MUTED,
            family: Family::Mono,
            bold: false,
            centered: false,
        });
        elements.push(Element::Text {
            x: 0.0,
            y: layout.r_inner - 15.0,
            content: "PM".into(),
            size: 7.0,
            fill: LABEL_MUTED,
            family: Family::Mono,
            bold: false,
            centered: false,
        });

        for h in 0..24u8 {
            let entry = persona.map(|p| p.hour(h));
            let dominant = entry.and_then(|e| e.dominant());
            let decibels = entry.map_or(0.0, |e| e.decibels);
            let is_selected = h == selected;

            elements.push(Element::Path {
                d: layout.segment_path(h, decibels),
                fill: dominant.map_or(EMPTY_WEDGE_FILL, |d| d.color()),
                stroke: WEDGE_STROKE,
                stroke_width: 1.0,
                opacity: if is_selected {
                    1.0
                } else if dominant.is_some() {
                    0.65
                } else {
                    0.3
                },
                glow: if is_selected { dominant } else { None },
                hour: Some(h),
            });

            // Secondary sound dots along the segment's mid-angle
            if let Some(e) = entry {
                if e.data_available && e.sounds.len() > 1 {
                    let mid = hour_to_angle(h as f32 + 0.5);
                    for (k, s) in e.sounds[1..].iter().enumerate() {
                        let (cx, cy) = polar(mid, layout.r_inner + 12.0 + k as f32 * 10.0);
                        elements.push(Element::Circle {
                            cx,
                            cy,
                            r: 3.0,
                            fill: Some(s.color()),
                            stroke: None,
                            stroke_width: 0.0,
                            opacity: 0.8,
                        });
                    }
                }
            }

            if h % 3 == 0 {
                let (x, y) = polar(hour_to_angle(h as f32 + 0.5), layout.r_label);
                elements.push(Element::Text {
                    x,
                    y,
                    content: short_hour(h),
                    size: 9.0,
                    fill: LABEL_MUTED,
                    family: Family::Mono,
                    bold: false,
                    centered: true,
                });
            }
        }

        elements.push(Element::Circle {
            cx: 0.0,
            cy: 0.0,
            r: layout.r_inner - 2.0,
            fill: Some(CENTER_FILL),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        });

        match persona {
            Some(p) => {
                elements.push(Element::Text {
                    x: 0.0,
                    y: -14.0,
                    content: p.name.into(),
                    size: 18.0,
                    fill: p.color,
                    family: Family::Display,
                    bold: true,
                    centered: false,
                });
                elements.push(Element::Text {
                    x: 0.0,
                    y: 6.0,
                    content: p.role.into(),
                    size: 8.0,
                    fill: ROLE_FILL,
                    family: Family::Mono,
                    bold: false,
                    centered: false,
                });
                elements.push(Element::Text {
                    x: 0.0,
                    y: 20.0,
                    content: p.borough.to_uppercase(),
                    size: 7.0,
                    fill: LABEL_MUTED,
                    family: Family::Mono,
                    bold: false,
                    centered: false,
                });

                let angle = hour_to_angle(selected as f32 + 0.5);
                let (x1, y1) = polar(angle, layout.r_inner - 6.0);
                let (x2, y2) = polar(angle, layout.r_outer + 14.0);
                elements.push(Element::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    stroke: NEEDLE_STROKE,
                    width: 1.5,
                    opacity: 0.4,
                });
            }
            None => {
                elements.push(Element::Text {
                    x: 0.0,
                    y: 0.0,
                    content: "SELECT A PERSONA".into(),
                    size: 8.0,
                    fill: LABEL_MUTED,
                    family: Family::Mono,
                    bold: false,
                    centered: true,
                });
            }
        }

        Self { elements }
    }
}

/// Short 12-hour form for dial labels: "12am", "3pm".
fn short_hour(h: u8) -> String {
    let display = if h == 0 {
        12
    } else if h > 12 {
        h - 12
    } else {
        h
    };
    let suffix = if h < 12 { "am" } else { "pm" };
    format!("{display}{suffix}")
}

/// Panel heading form: "12:00 AM", "3:00 PM".
pub fn hour_title(h: u8) -> String {
    let display = if h == 0 {
        12
    } else if h > 12 {
        h - 12
    } else {
        h
    };
    let suffix = if h < 12 { "AM" } else { "PM" };
    format!("{display}:00 {suffix}")
}

/// One category chip in the hover panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundChip {
    pub label: &'static str,
    pub color: &'static str,
}

/// Hover panel content for one hour.
#[derive(Clone, Debug, PartialEq)]
pub struct HourDetail {
    /// "3:00 PM — location"
    pub title: String,
    pub description: &'static str,
    pub chips: Vec<SoundChip>,
    /// Shown instead of chips when the hour has none.
    pub note: Option<&'static str>,
}

/// Hover detail for `hour` of `persona`.
pub fn hour_detail(persona: &Persona, hour: u8) -> HourDetail {
    let entry = persona.hour(hour);
    let chips: Vec<SoundChip> = if entry.data_available {
        entry
            .sounds
            .iter()
            .map(|s| SoundChip {
                label: s.label(),
                color: s.color(),
            })
            .collect()
    } else {
        Vec::new()
    };
    let note = if chips.is_empty() {
        Some("No sounds recorded")
    } else {
        None
    };
    HourDetail {
        title: format!("{} — {}", hour_title(hour), entry.location),
        description: entry.description,
        chips,
        note,
    }
}

/// Clamp a popup anchored near the pointer into a `vw` by `vh` viewport.
pub fn popup_position(x: f32, y: f32, vw: f32, vh: f32) -> (f32, f32) {
    let px = (x - 110.0).min(vw - 220.0).max(10.0);
    let py = (y - 110.0).min(vh - 200.0).max(10.0);
    (px, py)
}

/// One cell of the linear 24-hour strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineCell {
    pub color: &'static str,
    pub opacity: f32,
    /// True on the selected hour's cell.
    pub current: bool,
}

/// The linear hour strip: dominant color per hour, muted where empty, flat
/// background with no persona.
pub fn timeline(persona: Option<&Persona>, selected: Option<u8>) -> [TimelineCell; 24] {
    let mut cells = [TimelineCell {
        color: EMPTY_WEDGE_FILL,
        opacity: 1.0,
        current: false,
    }; 24];

    if let Some(p) = persona {
        for (h, cell) in cells.iter_mut().enumerate() {
            *cell = match p.schedule[h].dominant() {
                Some(dominant) => TimelineCell {
                    color: dominant.color(),
                    opacity: 0.7,
                    current: false,
                },
                None => TimelineCell {
                    color: EMPTY_WEDGE_FILL,
                    opacity: 0.3,
                    current: false,
                },
            };
        }
    }

    if let Some(h) = selected {
        if persona.is_some() {
            cells[(h % 24) as usize].current = true;
        }
    }

    cells
}
