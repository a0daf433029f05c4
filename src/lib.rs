//! Soundial - a day of city sound, synthesized.
//!
//! Procedural sketches of New York's soundscape: four personas, each with a
//! 24-hour schedule of sound categories, played back through a lock-free
//! audio graph and drawn on a 24-hour dial.
//!
//! Design principles:
//! - Each engine has a fixed sample rate (from device or explicit)
//! - Nodes receive parameters via message ring buffers, not shared state
//! - No locks on the audio thread; scheduling is absolute-time breakpoints
//! - Every view (dial, timeline, scope, journey panel) is plain data the
//!   host draws however it likes; the SVG adapter is one such host
//!
//! Audio output is behind the `cpal_sink` feature. Without it the crate
//! still renders offline and drives every view.

mod graph;

pub mod automation;
pub mod clock;
#[cfg(feature = "cpal_sink")]
pub mod device;
pub mod engine;
pub mod node;
pub mod nodes;
pub mod patch;
pub mod render;
pub mod schedule;
pub mod scope;
pub mod session;
pub mod svg;

pub use automation::{ParamSchedule, RampKind, EXP_FLOOR};
pub use clock::{
    db_factor, hour_detail, hour_title, hour_to_angle, popup_position, timeline, ClockLayout,
    ClockScene, Element, Family, HourDetail, SoundChip, TimelineCell, FALLBACK_ACCENT,
};
#[cfg(feature = "cpal_sink")]
pub use device::CpalDevice;
pub use engine::SynthEngine;
pub use node::{AudioNode, NodeId, ProcessContext};
pub use patch::{SoundCategory, UnknownCategory};
pub use render::{render_category, write_wav, RenderConfig, RenderStats};
pub use schedule::{persona, Persona, ScheduleEntry, PERSONAS};
pub use scope::{DbMeter, ScopeFeed, ScopeFrame, WINDOW_SAMPLES};
pub use session::{HourView, Session, SoundsPanel, TickToken, AUTOPLAY_PERIOD_SECS};
pub use svg::scene_to_svg;
