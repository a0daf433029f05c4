//! Built-in audio nodes.
//!
//! Nodes are organized into three categories:
//!
//! ## Sources ([`source`])
//!
//! Generate audio with no audio inputs:
//! - [`Osc`] - Windowed oscillator with scheduled frequency
//!
//! ## Effects ([`effect`])
//!
//! Process audio (inputs → outputs):
//! - [`Gain`] - Summing gain stage with a scheduled level
//! - [`ScopeTap`] - Pass-through that mirrors blocks into a ring buffer
//!
//! ## Sinks ([`sink`])
//!
//! Consume audio with no audio outputs:
//! - [`CpalSink`] - Output to system audio device (requires `cpal_sink` feature)
//! - [`CaptureSink`] - Write to ring buffer (offline rendering and tests)
//!
//! # Message Types
//!
//! [`Gain`] accepts [`GainMessage`] for runtime level control. The other
//! nodes take their whole behavior at construction time and use `()` as
//! their message type.

pub mod source;
pub mod effect;
pub mod sink;

// Re-export common types at the top level for convenience
pub use source::{Osc, Wave};
pub use effect::{Gain, GainMessage, ScopeTap};
pub use sink::CaptureSink;

#[cfg(feature = "cpal_sink")]
pub use sink::CpalSink;
