//! Sound category to synth patch mapping.
//!
//! Every category is rendered by a small additive patch: a handful of
//! oscillators with scheduled frequency and level curves, mixed through a
//! shared loudness envelope. [`plan`] turns a category plus a start time
//! into pure data; the engine materializes that data into graph nodes.

use std::fmt;
use std::str::FromStr;

use crate::automation::{ParamSchedule, EXP_FLOOR};
use crate::nodes::Wave;

/// How long every patch runs, in seconds.
pub const PATCH_SECS: f64 = 4.0;

/// The recorded sound categories, plus the synthetic no-data flatline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCategory {
    Engine,
    Machinery,
    Impact,
    Saw,
    Alert,
    Music,
    Voice,
    Dog,
    Busking,
    Flatline,
}

impl SoundCategory {
    /// All categories in declaration order.
    pub const ALL: [SoundCategory; 10] = [
        SoundCategory::Engine,
        SoundCategory::Machinery,
        SoundCategory::Impact,
        SoundCategory::Saw,
        SoundCategory::Alert,
        SoundCategory::Music,
        SoundCategory::Voice,
        SoundCategory::Dog,
        SoundCategory::Busking,
        SoundCategory::Flatline,
    ];

    /// Lowercase display name, also the [`FromStr`] spelling.
    pub fn label(self) -> &'static str {
        match self {
            SoundCategory::Engine => "engine",
            SoundCategory::Machinery => "machinery",
            SoundCategory::Impact => "impact",
            SoundCategory::Saw => "saw",
            SoundCategory::Alert => "alert",
            SoundCategory::Music => "music",
            SoundCategory::Voice => "voice",
            SoundCategory::Dog => "dog",
            SoundCategory::Busking => "busking",
            SoundCategory::Flatline => "flatline",
        }
    }

    /// Fixed display color for wedges, dots, chips, and the legend.
    pub fn color(self) -> &'static str {
        match self {
            SoundCategory::Engine => "#ff6b6b",
            SoundCategory::Machinery => "#ffa94d",
            SoundCategory::Impact => "#f783ac",
            SoundCategory::Saw => "#ffd43b",
            SoundCategory::Alert => "#da77f2",
            SoundCategory::Music => "#38d9a9",
            SoundCategory::Voice => "#4dabf7",
            SoundCategory::Dog => "#a9e34b",
            SoundCategory::Busking => "#9775fa",
            SoundCategory::Flatline => "#3a3f6a",
        }
    }

    /// (label, color) pairs in declaration order, for the UI legend.
    pub fn legend() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|c| (c.label(), c.color())).collect()
    }
}

impl fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sound category: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for SoundCategory {
    type Err = UnknownCategory;

    /// Parses the lowercase category name. Unknown names fail, which is the
    /// boundary where "unrecognized category" playback requests get dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One oscillator line in a patch.
#[derive(Clone, Debug)]
pub struct TonePlan {
    pub wave: Wave,
    pub freq: ParamSchedule,
    /// Per-tone amplitude envelope; `None` routes the tone to the master
    /// gain at unity.
    pub level: Option<ParamSchedule>,
    /// Window on the graph clock, absolute seconds.
    pub start: f64,
    pub stop: f64,
}

/// Slow sine modulation added to the first tone's frequency, in Hz.
#[derive(Clone, Copy, Debug)]
pub struct VibratoPlan {
    pub rate_hz: f32,
    pub depth_hz: f32,
}

/// A complete patch, ready for the engine to materialize.
#[derive(Clone, Debug)]
pub struct PatchPlan {
    pub tones: Vec<TonePlan>,
    pub vibrato: Option<VibratoPlan>,
    /// Route tones straight to the output volume, skipping the master
    /// envelope and the scope tap. Only the flatline does this, which is
    /// what keeps the oscilloscope flat during no-data playback.
    pub bypass_master: bool,
}

/// Map measured decibels to the shared envelope's peak gain.
///
/// A compressed linear proxy rather than a real dB conversion: 40 dB and
/// below land on the floor 0.05, 70 dB and above on the ceiling 0.3.
pub fn master_gain(decibels: f32) -> f32 {
    if !decibels.is_finite() {
        return 0.05;
    }
    ((decibels - 40.0) / 60.0).clamp(0.05, 0.3)
}

/// The shared loudness envelope: 0.3 s attack to `g`, sustain decaying to
/// `0.8·g`, release to silence at `now + 4`.
pub fn master_envelope(now: f64, decibels: f32) -> ParamSchedule {
    let g = master_gain(decibels);
    ParamSchedule::new(0.0)
        .set_at(now, 0.0)
        .linear_to(now + 0.3, g)
        .linear_to(now + 3.5, 0.8 * g)
        .linear_to(now + PATCH_SECS, 0.0)
}

/// Build the patch for `category`, scheduled against `now` on the graph
/// clock. Total function: every category has a shape.
pub fn plan(category: SoundCategory, now: f64) -> PatchPlan {
    let end = now + PATCH_SECS;
    match category {
        SoundCategory::Engine => engine(now, end),
        SoundCategory::Machinery => machinery(now),
        SoundCategory::Impact => impact(now),
        SoundCategory::Saw => saw(now, end),
        SoundCategory::Alert => alert(now),
        SoundCategory::Music => music(now, end),
        SoundCategory::Voice => voice(now, end),
        SoundCategory::Dog => dog(now),
        SoundCategory::Busking => busking(now),
        SoundCategory::Flatline => flatline(now, end),
    }
}

/// Dual detuned saws with a slow vibrato, the idling diesel.
fn engine(now: f64, end: f64) -> PatchPlan {
    let tones = [55.0f32, 61.0]
        .iter()
        .map(|&f| TonePlan {
            wave: Wave::Saw,
            freq: ParamSchedule::new(f),
            level: None,
            start: now,
            stop: end,
        })
        .collect();
    PatchPlan {
        tones,
        vibrato: Some(VibratoPlan {
            rate_hz: 5.0,
            depth_hz: 10.0,
        }),
        bypass_master: false,
    }
}

/// Six short square-wave knocks climbing in pitch.
fn machinery(now: f64) -> PatchPlan {
    let tones = (0..6)
        .map(|i| {
            let at = now + i as f64 * 0.15;
            TonePlan {
                wave: Wave::Square,
                freq: ParamSchedule::new(120.0 + 8.0 * i as f32),
                level: Some(ParamSchedule::new(0.0).set_at(at, 0.1).linear_to(at + 0.08, 0.0)),
                start: at,
                stop: at + 0.08,
            }
        })
        .collect();
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// Six pitched-down thuds, 200 Hz falling to 40 Hz.
fn impact(now: f64) -> PatchPlan {
    let tones = (0..6)
        .map(|i| {
            let at = now + i as f64 * 0.4;
            TonePlan {
                wave: Wave::Sine,
                freq: ParamSchedule::new(200.0)
                    .set_at(at, 200.0)
                    .linear_to(at + 0.1, 40.0),
                level: Some(ParamSchedule::new(0.0).set_at(at, 0.2).linear_to(at + 0.1, 0.0)),
                start: at,
                stop: at + 0.1,
            }
        })
        .collect();
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// One long saw sweep, up to 2400 Hz then down to 800.
fn saw(now: f64, end: f64) -> PatchPlan {
    PatchPlan {
        tones: vec![TonePlan {
            wave: Wave::Saw,
            freq: ParamSchedule::new(1600.0)
                .set_at(now, 1600.0)
                .linear_to(now + 2.0, 2400.0)
                .linear_to(end, 800.0),
            level: None,
            start: now,
            stop: end,
        }],
        vibrato: None,
        bypass_master: false,
    }
}

/// Eight beeps alternating between two pitches, siren-like.
fn alert(now: f64) -> PatchPlan {
    let tones = (0..8)
        .map(|t| {
            let at = now + t as f64 * 0.25;
            TonePlan {
                wave: Wave::Sine,
                freq: ParamSchedule::new(if t % 2 == 0 { 880.0 } else { 660.0 }),
                level: Some(ParamSchedule::new(0.0).set_at(at, 0.1).linear_to(at + 0.2, 0.0)),
                start: at,
                stop: at + 0.2,
            }
        })
        .collect();
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// A staggered C major seventh pad that fades out together.
fn music(now: f64, end: f64) -> PatchPlan {
    const CHORD: [f32; 4] = [261.6, 329.6, 392.0, 493.9];
    let tones = CHORD
        .iter()
        .enumerate()
        .map(|(i, &f)| {
            let at = now + i as f64 * 0.05;
            TonePlan {
                wave: Wave::Sine,
                freq: ParamSchedule::new(f),
                level: Some(
                    ParamSchedule::new(0.0)
                        .set_at(at, 0.0)
                        .linear_to(at + 0.05, 0.08)
                        .linear_to(now + 3.5, 0.0),
                ),
                start: at,
                stop: end,
            }
        })
        .collect();
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// Formant cluster: per formant a held sine plus one drifting 10% upward.
fn voice(now: f64, end: f64) -> PatchPlan {
    const FORMANTS: [f32; 4] = [200.0, 450.0, 800.0, 1200.0];
    let mut tones = Vec::with_capacity(FORMANTS.len() * 2);
    for &f in FORMANTS.iter() {
        tones.push(TonePlan {
            wave: Wave::Sine,
            freq: ParamSchedule::new(f),
            level: Some(ParamSchedule::new(0.04)),
            start: now,
            stop: end,
        });
        tones.push(TonePlan {
            wave: Wave::Sine,
            freq: ParamSchedule::new(f).set_at(now, f).linear_to(now + 0.5, f * 1.1),
            level: Some(ParamSchedule::new(0.04)),
            start: now,
            stop: end,
        });
    }
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// Three quick downward saw barks.
fn dog(now: f64) -> PatchPlan {
    let tones = (0..3)
        .map(|b| {
            let at = now + b as f64 * 0.3;
            TonePlan {
                wave: Wave::Saw,
                freq: ParamSchedule::new(380.0)
                    .set_at(at, 380.0)
                    .linear_to(at + 0.022, 260.0),
                level: Some(ParamSchedule::new(0.0).set_at(at, 0.1).linear_to(at + 0.022, 0.0)),
                start: at,
                stop: at + 0.022,
            }
        })
        .collect();
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// Three strummed triangle chords with plucked decays.
fn busking(now: f64) -> PatchPlan {
    const VOICING: [f32; 5] = [164.0, 196.0, 247.0, 330.0, 392.0];
    let mut tones = Vec::with_capacity(VOICING.len() * 3);
    for strum in 0..3 {
        for (i, &f) in VOICING.iter().enumerate() {
            let at = now + strum as f64 * 1.0 + i as f64 * 0.05;
            tones.push(TonePlan {
                wave: Wave::Triangle,
                freq: ParamSchedule::new(f),
                level: Some(
                    ParamSchedule::new(0.0)
                        .set_at(at, 0.0)
                        .linear_to(at + 0.05, 0.12)
                        .exp_to(at + 0.6, EXP_FLOOR),
                ),
                start: at,
                stop: at + 0.6,
            });
        }
    }
    PatchPlan {
        tones,
        vibrato: None,
        bypass_master: false,
    }
}

/// The no-data tone: a barely audible hum that skips the scope tap.
fn flatline(now: f64, end: f64) -> PatchPlan {
    PatchPlan {
        tones: vec![TonePlan {
            wave: Wave::Sine,
            freq: ParamSchedule::new(100.0),
            level: Some(ParamSchedule::new(0.018)),
            start: now,
            stop: end,
        }],
        vibrato: None,
        bypass_master: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_counts_per_category() {
        let count = |c| plan(c, 0.0).tones.len();
        assert_eq!(count(SoundCategory::Engine), 2);
        assert_eq!(count(SoundCategory::Machinery), 6);
        assert_eq!(count(SoundCategory::Impact), 6);
        assert_eq!(count(SoundCategory::Saw), 1);
        assert_eq!(count(SoundCategory::Alert), 8);
        assert_eq!(count(SoundCategory::Music), 4);
        assert_eq!(count(SoundCategory::Voice), 8);
        assert_eq!(count(SoundCategory::Dog), 3);
        assert_eq!(count(SoundCategory::Busking), 15);
        assert_eq!(count(SoundCategory::Flatline), 1);
    }

    #[test]
    fn only_flatline_bypasses_the_master() {
        for c in SoundCategory::ALL {
            let p = plan(c, 2.5);
            assert_eq!(p.bypass_master, c == SoundCategory::Flatline, "{c}");
        }
    }

    #[test]
    fn only_engine_carries_vibrato() {
        for c in SoundCategory::ALL {
            let p = plan(c, 0.0);
            assert_eq!(p.vibrato.is_some(), c == SoundCategory::Engine, "{c}");
        }
    }

    #[test]
    fn all_tones_fit_the_patch_window() {
        for c in SoundCategory::ALL {
            for tone in plan(c, 10.0).tones {
                assert!(tone.start >= 10.0, "{c}");
                assert!(tone.stop <= 10.0 + PATCH_SECS + 1e-9, "{c}");
                assert!(tone.start < tone.stop, "{c}");
            }
        }
    }

    #[test]
    fn master_gain_mapping() {
        assert_eq!(master_gain(40.0), 0.05);
        assert_eq!(master_gain(55.0), 0.25);
        assert_eq!(master_gain(70.0), 0.3);
        assert_eq!(master_gain(100.0), 0.3);
        assert_eq!(master_gain(f32::NAN), 0.05);
        assert_eq!(master_gain(f32::INFINITY), 0.05);
    }

    #[test]
    fn master_envelope_shape() {
        let env = master_envelope(1.0, 70.0);
        assert_eq!(env.value_at(0.5), 0.0);
        assert_eq!(env.value_at(1.0), 0.0);
        assert!((env.value_at(1.3) - 0.3).abs() < 1e-6);
        assert!((env.value_at(4.5) - 0.24).abs() < 1e-6);
        assert!(env.value_at(5.0).abs() < 1e-6);
        assert!(env.value_at(60.0).abs() < 1e-6);
    }

    #[test]
    fn alert_alternates_pitches() {
        let p = plan(SoundCategory::Alert, 0.0);
        assert_eq!(p.tones[0].freq.value_at(0.0), 880.0);
        assert_eq!(p.tones[1].freq.value_at(0.0), 660.0);
        assert_eq!(p.tones[2].freq.value_at(0.0), 880.0);
    }

    #[test]
    fn busking_decays_to_the_exponential_floor() {
        let p = plan(SoundCategory::Busking, 0.0);
        let level = p.tones[0].level.as_ref().unwrap();
        let tail = level.value_at(p.tones[0].stop);
        assert!(tail > 0.0);
        assert!((tail - EXP_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn category_names_round_trip() {
        for c in SoundCategory::ALL {
            assert_eq!(c.label().parse::<SoundCategory>(), Ok(c));
        }
        assert!("helicopter".parse::<SoundCategory>().is_err());
        assert!("Engine".parse::<SoundCategory>().is_err());
    }

    #[test]
    fn legend_covers_every_category() {
        let legend = SoundCategory::legend();
        assert_eq!(legend.len(), SoundCategory::ALL.len());
        assert_eq!(legend[0], ("engine", "#ff6b6b"));
        assert_eq!(legend[9], ("flatline", "#3a3f6a"));
    }
}
