//! Audio sink nodes (consumers with no audio outputs)

mod capture;

pub use capture::CaptureSink;

#[cfg(feature = "cpal_sink")]
mod cpal_sink;

#[cfg(feature = "cpal_sink")]
pub use cpal_sink::CpalSink;
