//! Oscilloscope feed and trace building, plus the decibel meter easing.
//!
//! The audio side is a [`ScopeTap`](crate::nodes::ScopeTap) pushing blocks
//! into a ring buffer; [`ScopeFeed`] is the read side, keeping the most
//! recent window of samples. [`ScopeFrame`] turns a window (or, with no
//! running audio, a decorative idle function) into a polyline for whatever
//! canvas the host draws on.

use rtrb::Consumer;

/// Samples kept in the scope window.
pub const WINDOW_SAMPLES: usize = 1024;

/// Cycle counts across the canvas width for the idle trace.
const IDLE_FREQS: [f32; 3] = [3.0, 7.0, 13.0];

/// Read side of the scope tap: drains the ring buffer into a fixed-size
/// window of the most recent samples.
///
/// Starts zeroed, so a scope drawn before any audio ran shows a flat line.
pub struct ScopeFeed {
    consumer: Consumer<f32>,
    window: Vec<f32>,
}

impl ScopeFeed {
    pub(crate) fn new(consumer: Consumer<f32>) -> Self {
        Self {
            consumer,
            window: vec![0.0; WINDOW_SAMPLES],
        }
    }

    /// Pull everything the tap has produced since the last drain, keeping
    /// only the newest `WINDOW_SAMPLES` samples.
    pub fn drain(&mut self) {
        let available = self.consumer.slots();
        if available == 0 {
            return;
        }

        let len = self.window.len();
        if available >= len {
            // Only the newest window's worth matters
            for _ in 0..available - len {
                let _ = self.consumer.pop();
            }
            for slot in self.window.iter_mut() {
                if let Ok(sample) = self.consumer.pop() {
                    *slot = sample;
                }
            }
        } else {
            self.window.copy_within(available.., 0);
            for slot in self.window[len - available..].iter_mut() {
                if let Ok(sample) = self.consumer.pop() {
                    *slot = sample;
                }
            }
        }
    }

    /// The current window, oldest sample first.
    pub fn window(&self) -> &[f32] {
        &self.window
    }
}

/// One scope trace, scaled to a `w` by `h` canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ScopeFrame {
    /// Polyline points, left to right.
    pub points: Vec<(f32, f32)>,
    /// Stroke color (the persona accent, usually).
    pub color: &'static str,
    /// Suggested glow radius around the stroke.
    pub glow_blur: f32,
}

impl ScopeFrame {
    /// Map a sample window onto the canvas. Full scale is half the height,
    /// so a sample of 1.0 touches the top edge.
    pub fn live(window: &[f32], color: &'static str, w: f32, h: f32) -> Self {
        let mid = h / 2.0;
        let points = window
            .iter()
            .enumerate()
            .map(|(i, &sample)| {
                let x = i as f32 / window.len() as f32 * w;
                let y = mid - sample * mid;
                (x, y)
            })
            .collect();
        Self {
            points,
            color,
            glow_blur: 8.0,
        }
    }

    /// The decorative standby trace: three slow sines drifting with `t`
    /// (seconds). Deterministic in `t`, one point per pixel column.
    pub fn idle(t: f64, color: &'static str, w: f32, h: f32) -> Self {
        let mid = h / 2.0;
        let columns = w.max(0.0) as usize;
        let points = (0..columns)
            .map(|i| {
                let x = i as f32;
                let mut y = 0.0;
                for (k, &f) in IDLE_FREQS.iter().enumerate() {
                    let phase = (t * f as f64 * (1.0 + 0.1 * k as f64)) as f32;
                    y += ((x / w) * f * core::f32::consts::TAU + phase).sin() * 0.3;
                }
                (x, mid + y * (h / 3.0))
            })
            .collect();
        Self {
            points,
            color,
            glow_blur: 6.0,
        }
    }
}

/// Eased display state for the decibel readout.
///
/// Call [`set_target`](Self::set_target) when the hour changes and
/// [`step`](Self::step) once per drawn frame; the displayed number glides
/// toward the target and snaps when close. Retargeting mid-glide just moves
/// the goal, so two animations can never fight over the readout.
#[derive(Clone, Copy, Debug)]
pub struct DbMeter {
    current: Option<f32>,
    target: f32,
}

impl DbMeter {
    pub fn new() -> Self {
        Self {
            current: None,
            target: 35.0,
        }
    }

    pub fn set_target(&mut self, db: f32) {
        self.target = db;
    }

    /// Advance one frame and return the value to display.
    ///
    /// The first step snaps straight to the target.
    pub fn step(&mut self) -> f32 {
        let next = match self.current {
            None => self.target,
            Some(current) => {
                let next = current + (self.target - current) * 0.1;
                if (next - self.target).abs() < 0.5 {
                    self.target
                } else {
                    next
                }
            }
        };
        self.current = Some(next);
        next
    }

    /// Displayed value, if a step has happened yet.
    pub fn value(&self) -> Option<f32> {
        self.current
    }

    /// Bar fill for the displayed value, 0 to 100.
    pub fn fill_percent(&self) -> f32 {
        match self.current {
            Some(v) => ((v - 35.0) / 65.0 * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }
}

impl Default for DbMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_snaps_on_first_step_then_eases() {
        let mut meter = DbMeter::new();
        meter.set_target(80.0);
        assert_eq!(meter.step(), 80.0);

        meter.set_target(40.0);
        let v = meter.step();
        assert!((v - 76.0).abs() < 1e-4);
        let v2 = meter.step();
        assert!(v2 < v);
    }

    #[test]
    fn meter_snaps_when_close() {
        let mut meter = DbMeter::new();
        meter.set_target(50.0);
        meter.step();
        meter.set_target(50.3);
        assert_eq!(meter.step(), 50.3);
    }

    #[test]
    fn fill_is_clamped() {
        let mut meter = DbMeter::new();
        assert_eq!(meter.fill_percent(), 0.0);
        meter.set_target(200.0);
        meter.step();
        assert_eq!(meter.fill_percent(), 100.0);
        meter.set_target(10.0);
        for _ in 0..200 {
            meter.step();
        }
        assert_eq!(meter.fill_percent(), 0.0);
    }

    #[test]
    fn live_trace_scales_to_the_canvas() {
        let window = [0.0, 1.0, -1.0, 0.0];
        let frame = ScopeFrame::live(&window, "#ffffff", 400.0, 200.0);
        assert_eq!(frame.points.len(), 4);
        assert_eq!(frame.points[0], (0.0, 100.0));
        assert_eq!(frame.points[1], (100.0, 0.0));
        assert_eq!(frame.points[2], (200.0, 200.0));
    }

    #[test]
    fn idle_trace_is_deterministic_in_t() {
        let a = ScopeFrame::idle(12.5, "#a29bfe", 300.0, 120.0);
        let b = ScopeFrame::idle(12.5, "#a29bfe", 300.0, 120.0);
        let c = ScopeFrame::idle(13.0, "#a29bfe", 300.0, 120.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.points.len(), 300);
        // everything stays inside the canvas band
        assert!(a.points.iter().all(|&(_, y)| y >= 0.0 && y <= 120.0));
    }
}
