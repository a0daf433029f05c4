//! Core node trait and context types.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dasp_graph::{Buffer, Input};

/// Information available during audio processing.
///
/// Passed to every [`AudioNode::process`] call. Contains the graph's sample rate,
/// the buffer size (always 64 samples in the current implementation), and the
/// position of the current block on the graph's frame clock. Scheduled events
/// (envelope breakpoints, start/stop times) are expressed as absolute seconds
/// on that clock, so nodes convert with [`block_start_secs`](Self::block_start_secs).
#[derive(Clone, Debug)]
pub struct ProcessContext {
    /// Sample rate of the graph in Hz (e.g., 44100, 48000)
    pub sample_rate: u32,
    /// Number of samples per buffer (currently always 64)
    pub buffer_size: usize,
    /// Frames processed so far, shared with the owning graph
    frames: Arc<AtomicU64>,
}

impl ProcessContext {
    pub(crate) fn new(sample_rate: u32, frames: Arc<AtomicU64>) -> Self {
        Self {
            sample_rate,
            buffer_size: 64, // dasp_graph default
            frames,
        }
    }

    /// Frame index of the first sample in the current block.
    #[inline]
    pub fn block_start(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Time of the first sample in the current block, in seconds.
    #[inline]
    pub fn block_start_secs(&self) -> f64 {
        self.block_start() as f64 / self.sample_rate as f64
    }
}

/// Unique identifier for a node within a graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub(crate) u32);

/// The core trait for audio processing nodes.
///
/// Nodes fall into three roles:
/// - **Sources**: Generate audio (0 inputs, 1+ outputs) - oscillators
/// - **Effects**: Process audio (1+ inputs, 1+ outputs) - gain stages, taps
/// - **Sinks**: Consume audio (1+ inputs, 0 outputs) - device outputs, capture buffers
///
/// # Message-Based Parameters
///
/// Instead of shared mutable state, nodes receive parameter updates via messages.
/// Define your message type and handle it at the start of `process()`:
///
/// ```
/// use soundial::{AudioNode, ProcessContext};
/// use dasp_graph::{Buffer, Input};
///
/// enum HumMessage {
///     SetFrequency(f32),
/// }
///
/// struct Hum {
///     frequency: f32,
///     phase: f32,
/// }
///
/// impl AudioNode for Hum {
///     type Message = HumMessage;
///
///     fn process(
///         &mut self,
///         ctx: &ProcessContext,
///         messages: impl Iterator<Item = HumMessage>,
///         _inputs: &[Input],
///         outputs: &mut [Buffer],
///     ) {
///         for msg in messages {
///             match msg {
///                 HumMessage::SetFrequency(f) => self.frequency = f.max(0.0),
///             }
///         }
///
///         for sample in outputs[0].iter_mut() {
///             *sample = (self.phase * std::f32::consts::TAU).sin();
///             self.phase = (self.phase + self.frequency / ctx.sample_rate as f32) % 1.0;
///         }
///     }
///
///     fn num_outputs(&self) -> usize { 1 }
/// }
/// ```
///
/// Nodes whose behavior is fully scheduled up front need no runtime control;
/// they use `()` as the message type and ignore the iterator.
pub trait AudioNode: Send + 'static {
    /// Message type for parameter updates.
    ///
    /// Use a custom enum for nodes with parameters, or `()` for nodes without.
    type Message: Send + 'static;

    /// Process one block of audio.
    ///
    /// Called once per audio block (64 samples). Your implementation should:
    /// 1. Drain and handle all pending messages
    /// 2. Read from `inputs` (if any)
    /// 3. Write to `outputs`
    fn process(
        &mut self,
        ctx: &ProcessContext,
        messages: impl Iterator<Item = Self::Message>,
        inputs: &[Input],
        outputs: &mut [Buffer],
    );

    /// Number of audio input channels (0 for sources).
    fn num_inputs(&self) -> usize {
        0
    }

    /// Number of audio output channels.
    fn num_outputs(&self) -> usize {
        1
    }
}
