//! Offline rendering: patches to sample buffers, quick stats, WAV output.

use std::path::Path;

use itertools::Itertools;

use crate::engine::SynthEngine;
use crate::patch::SoundCategory;

/// Settings for [`render_category`].
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub sample_rate: u32,
    /// Rendered length. The default leaves room for the 4-second patch
    /// window plus its release tail.
    pub duration_secs: f64,
    pub decibels: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sample_rate: 48_000,
            duration_secs: 4.5,
            decibels: 70.0,
        }
    }
}

/// Render one category through a fresh offline engine.
pub fn render_category(category: SoundCategory, config: &RenderConfig) -> Vec<f32> {
    let mut engine = SynthEngine::offline(config.sample_rate);
    engine.play(category, config.decibels);
    engine.render_secs(config.duration_secs)
}

/// Shape summary of a rendered buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub peak: f32,
    pub rms: f32,
    pub zero_crossings: usize,
}

impl RenderStats {
    pub fn measure(samples: &[f32]) -> Self {
        let peak = samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()));
        let rms = if samples.is_empty() {
            0.0
        } else {
            (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
        };
        let zero_crossings = samples
            .iter()
            .tuple_windows()
            .filter(|(a, b)| *a * *b < 0.0)
            .count();
        RenderStats {
            peak,
            rms,
            zero_crossings,
        }
    }
}

/// Write mono samples as a 16-bit PCM WAV file.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * i16::MAX as f32) as i16)?;
    }
    writer.finalize()
}
