//! Gain/volume control effect

use dasp_graph::{Buffer, Input};

use crate::automation::ParamSchedule;
use crate::node::{AudioNode, ProcessContext};

/// Messages to control gain
#[derive(Clone, Copy, Debug)]
pub enum GainMessage {
    /// Ramp to a new level (1.0 = unity, 0.0 = silence)
    SetGain(f32),
}

/// How long a [`GainMessage::SetGain`] takes to reach its target.
///
/// Jumping instantly would put a click on the output.
const SET_GAIN_RAMP_SECS: f64 = 0.01;

/// A gain stage that sums its inputs and scales them by a scheduled level.
///
/// With a constant schedule it behaves like a plain volume knob; with
/// breakpoints it is an envelope. Multiple incoming edges are summed at
/// unity before scaling, which is what lets one gain act as a mix bus.
pub struct Gain {
    level: ParamSchedule,
}

impl Gain {
    /// A gain with a fixed level.
    pub fn new(level: f32) -> Self {
        Self {
            level: ParamSchedule::new(level),
        }
    }

    /// A gain driven by a schedule, e.g. an amplitude envelope.
    pub fn scheduled(level: ParamSchedule) -> Self {
        Self { level }
    }

    #[inline]
    pub fn level(&self) -> &ParamSchedule {
        &self.level
    }
}

impl AudioNode for Gain {
    type Message = GainMessage;

    fn process(
        &mut self,
        ctx: &ProcessContext,
        messages: impl Iterator<Item = GainMessage>,
        inputs: &[Input],
        outputs: &mut [Buffer],
    ) {
        let block_start = ctx.block_start_secs();

        // Handle messages first
        for msg in messages {
            match msg {
                GainMessage::SetGain(g) => {
                    // Replace the schedule with a short ramp from the current
                    // level to the new one
                    let current = self.level.value_at(block_start);
                    self.level = ParamSchedule::new(current)
                        .set_at(block_start, current)
                        .linear_to(block_start + SET_GAIN_RAMP_SECS, g);
                }
            }
        }

        if outputs.is_empty() {
            return;
        }

        let dt = 1.0 / ctx.sample_rate as f64;
        let (first, rest) = outputs.split_first_mut().unwrap();

        for i in 0..first.len() {
            let mut sum = 0.0;
            for input in inputs {
                for buffer in input.buffers() {
                    sum += buffer[i];
                }
            }
            let t = block_start + i as f64 * dt;
            first[i] = sum * self.level.value_at(t);
        }

        // Copy to remaining output channels (if any)
        for buffer in rest.iter_mut() {
            buffer.copy_from_slice(first);
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;
    use std::sync::Arc;

    #[test]
    fn set_gain_becomes_a_short_ramp() {
        let ctx = ProcessContext::new(48_000, Arc::new(AtomicU64::new(0)));
        let mut gain = Gain::new(1.0);
        let mut outs = [Buffer::SILENT];

        gain.process(
            &ctx,
            std::iter::once(GainMessage::SetGain(0.2)),
            &[],
            &mut outs,
        );

        assert_eq!(gain.level().value_at(0.0), 1.0);
        assert!((gain.level().value_at(SET_GAIN_RAMP_SECS / 2.0) - 0.6).abs() < 1e-6);
        assert!((gain.level().value_at(1.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn no_inputs_is_silence() {
        let ctx = ProcessContext::new(48_000, Arc::new(AtomicU64::new(0)));
        let mut gain = Gain::new(0.7);
        let mut outs = [Buffer::from([1.0; Buffer::LEN])];
        gain.process(&ctx, std::iter::empty(), &[], &mut outs);
        assert!(outs[0].iter().all(|&s| s == 0.0));
    }
}
