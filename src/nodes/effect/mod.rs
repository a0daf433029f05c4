//! Audio effect nodes (processors with audio inputs and outputs)

mod gain;
mod scope_tap;

pub use gain::{Gain, GainMessage};
pub use scope_tap::ScopeTap;
