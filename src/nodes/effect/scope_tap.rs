//! Pass-through tap for the oscilloscope

use dasp_graph::{Buffer, Input};
use rtrb::Producer;

use crate::node::{AudioNode, ProcessContext};

/// Sums its inputs to the output and mirrors each block into a ring buffer.
///
/// The mirror is best-effort: when the scope reader falls behind, whole
/// blocks are dropped rather than partially written, so the reader never
/// sees a torn block.
pub struct ScopeTap {
    producer: Producer<f32>,
}

impl ScopeTap {
    pub fn new(producer: Producer<f32>) -> Self {
        Self { producer }
    }
}

impl AudioNode for ScopeTap {
    type Message = ();

    fn process(
        &mut self,
        _ctx: &ProcessContext,
        _messages: impl Iterator<Item = ()>,
        inputs: &[Input],
        outputs: &mut [Buffer],
    ) {
        if outputs.is_empty() {
            return;
        }

        let (first, rest) = outputs.split_first_mut().unwrap();

        for i in 0..first.len() {
            let mut sum = 0.0;
            for input in inputs {
                for buffer in input.buffers() {
                    sum += buffer[i];
                }
            }
            first[i] = sum;
        }

        for buffer in rest.iter_mut() {
            buffer.copy_from_slice(first);
        }

        // Skip if buffer is full
        if self.producer.slots() >= first.len() {
            for &sample in first.iter() {
                let _ = self.producer.push(sample);
            }
        }
    }

    #[inline]
    fn num_inputs(&self) -> usize {
        1
    }

    #[inline]
    fn num_outputs(&self) -> usize {
        1
    }
}
