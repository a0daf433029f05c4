//! Scheduled waveform oscillator

use dasp_graph::{Buffer, Input};

use crate::automation::ParamSchedule;
use crate::node::{AudioNode, ProcessContext};

/// Waveform shapes for [`Osc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Saw,
    Triangle,
}

impl Wave {
    #[inline]
    fn sample(self, phase: f32) -> f32 {
        match self {
            Wave::Sine => (phase * core::f32::consts::TAU).sin(),
            Wave::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Wave::Saw => 2.0 * phase - 1.0,
            Wave::Triangle => {
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
        }
    }
}

/// An oscillator that plays inside a scheduled time window (mono source).
///
/// Frequency follows a [`ParamSchedule`] evaluated on the graph clock, so
/// sweeps are set up once and run without further control traffic. Anything
/// wired into the audio input acts as frequency modulation in Hz.
///
/// Outside the `[start, stop)` window the oscillator emits silence and its
/// phase stays parked at zero, so every tone begins at a zero crossing.
pub struct Osc {
    wave: Wave,
    freq: ParamSchedule,
    start: f64,
    stop: f64,
    phase: f32,
}

impl Osc {
    pub fn new(wave: Wave, freq: ParamSchedule, start: f64, stop: f64) -> Self {
        Self {
            wave,
            freq,
            start,
            stop,
            phase: 0.0,
        }
    }
}

impl AudioNode for Osc {
    type Message = ();

    fn process(
        &mut self,
        ctx: &ProcessContext,
        _messages: impl Iterator<Item = ()>,
        inputs: &[Input],
        outputs: &mut [Buffer],
    ) {
        if outputs.is_empty() {
            return;
        }

        let block_start = ctx.block_start_secs();
        let dt = 1.0 / ctx.sample_rate as f64;

        // Generate samples - write to first buffer, then copy to others
        let (first, rest) = outputs.split_first_mut().unwrap();

        for i in 0..first.len() {
            let t = block_start + i as f64 * dt;
            if t < self.start || t >= self.stop {
                first[i] = 0.0;
                continue;
            }

            let mut freq = self.freq.value_at(t);
            // Audio inputs modulate the frequency, in Hz
            for input in inputs {
                for buffer in input.buffers() {
                    freq += buffer[i];
                }
            }
            let freq = freq.max(0.0);

            first[i] = self.wave.sample(self.phase);

            self.phase += freq / ctx.sample_rate as f32;
            // Branchless phase wrap (phase is always positive)
            self.phase -= (self.phase >= 1.0) as u32 as f32;
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

    fn ctx() -> ProcessContext {
        ProcessContext::new(48_000, Arc::new(AtomicU64::new(0)))
    }

    #[test]
    fn wave_shapes() {
        assert!((Wave::Sine.sample(0.25) - 1.0).abs() < 1e-6);
        assert_eq!(Wave::Square.sample(0.25), 1.0);
        assert_eq!(Wave::Square.sample(0.75), -1.0);
        assert_eq!(Wave::Saw.sample(0.0), -1.0);
        assert_eq!(Wave::Saw.sample(0.75), 0.5);
        assert_eq!(Wave::Triangle.sample(0.25), 1.0);
        assert_eq!(Wave::Triangle.sample(0.5), 0.0);
        assert_eq!(Wave::Triangle.sample(0.75), -1.0);
    }

    #[test]
    fn silent_before_window_opens() {
        let mut osc = Osc::new(Wave::Sine, ParamSchedule::new(440.0), 1.0, 2.0);
        let mut outs = [Buffer::SILENT];
        osc.process(&ctx(), std::iter::empty(), &[], &mut outs);
        assert!(outs[0].iter().all(|&s| s == 0.0));
        assert_eq!(osc.phase, 0.0);
    }

    #[test]
    fn starts_from_zero_phase_inside_window() {
        let mut osc = Osc::new(Wave::Sine, ParamSchedule::new(440.0), 0.0, 1.0);
        let mut outs = [Buffer::SILENT];
        osc.process(&ctx(), std::iter::empty(), &[], &mut outs);
        assert_eq!(outs[0][0], 0.0);
        assert!(outs[0][1] > 0.0);
        assert!(outs[0].iter().any(|&s| s != 0.0));
    }
}
