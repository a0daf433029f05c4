//! Ring buffer capture sink for offline rendering

use dasp_graph::{Buffer, Input};
use rtrb::Producer;

use crate::node::{AudioNode, ProcessContext};

/// A sink that pushes mono samples into an rtrb ring buffer
///
/// Useful for:
/// - Offline rendering to a sample vector
/// - Inspecting graph output in tests
pub struct CaptureSink {
    producer: Producer<f32>,
}

impl CaptureSink {
    /// Create a sink that writes mono samples to the given producer
    pub fn new(producer: Producer<f32>) -> Self {
        Self { producer }
    }

    /// Returns how many sample slots are available
    #[inline]
    pub fn available(&self) -> usize {
        self.producer.slots()
    }
}

impl AudioNode for CaptureSink {
    type Message = (); // No control messages

    fn process(
        &mut self,
        _ctx: &ProcessContext,
        _messages: impl Iterator<Item = ()>,
        inputs: &[Input],
        _outputs: &mut [Buffer],
    ) {
        if inputs.is_empty() {
            return;
        }

        let input = &inputs[0];
        let buffers = input.buffers();

        if buffers.is_empty() {
            return;
        }

        let buffer_len = buffers[0].len();

        // Skip if buffer is full
        if self.producer.slots() < buffer_len {
            return;
        }

        for i in 0..buffer_len {
            let _ = self.producer.push(buffers[0][i]);
        }
    }

    #[inline]
    fn num_inputs(&self) -> usize {
        1
    }

    #[inline]
    fn num_outputs(&self) -> usize {
        0
    }
}
