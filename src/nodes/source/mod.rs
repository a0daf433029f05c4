//! Audio source nodes (generators with no audio inputs)

mod osc;

pub use osc::{Osc, Wave};
