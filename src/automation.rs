//! Scheduled parameter automation.
//!
//! Envelopes, gain ramps, and frequency sweeps are all expressed as a
//! [`ParamSchedule`]: an initial value plus breakpoints at absolute times on
//! the graph clock. Nodes evaluate the schedule per sample, so "the future"
//! is plain data rather than timers.

/// Exponential ramps cannot reach zero, so decays that want silence target
/// this floor instead.
pub const EXP_FLOOR: f32 = 0.01;

/// How a schedule approaches a breakpoint from the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampKind {
    /// Hold the previous value, then jump at the breakpoint time
    Step,
    /// Straight-line interpolation from the previous point
    Linear,
    /// Constant-ratio curve from the previous point; falls back to linear
    /// when either endpoint is zero or negative
    Exponential,
}

#[derive(Clone, Copy, Debug)]
struct Breakpoint {
    at: f64,
    value: f32,
    kind: RampKind,
}

/// A piecewise parameter curve over absolute time.
///
/// Built in call order, like an audio-rate parameter would be scheduled:
///
/// ```
/// use soundial::ParamSchedule;
///
/// let env = ParamSchedule::new(0.0)
///     .set_at(1.0, 0.0)
///     .linear_to(1.3, 0.25)
///     .linear_to(4.0, 0.0);
///
/// assert_eq!(env.value_at(0.5), 0.0);
/// assert!((env.value_at(1.15) - 0.125).abs() < 1e-6);
/// assert_eq!(env.value_at(5.0), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct ParamSchedule {
    initial: f32,
    points: Vec<Breakpoint>,
}

impl ParamSchedule {
    /// A constant schedule until breakpoints are added.
    pub fn new(initial: f32) -> Self {
        Self {
            initial,
            points: Vec::new(),
        }
    }

    /// Jump to `value` at time `at`.
    pub fn set_at(self, at: f64, value: f32) -> Self {
        self.push(at, value, RampKind::Step)
    }

    /// Ramp linearly to `value`, arriving at time `at`.
    pub fn linear_to(self, at: f64, value: f32) -> Self {
        self.push(at, value, RampKind::Linear)
    }

    /// Ramp exponentially to `value`, arriving at time `at`.
    pub fn exp_to(self, at: f64, value: f32) -> Self {
        self.push(at, value, RampKind::Exponential)
    }

    fn push(mut self, at: f64, value: f32, kind: RampKind) -> Self {
        // Breakpoints must be appended in time order
        debug_assert!(self.points.last().map_or(true, |p| at >= p.at));
        self.points.push(Breakpoint { at, value, kind });
        self
    }

    /// True if no breakpoints were scheduled.
    pub fn is_constant(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluate the schedule at time `t` (seconds).
    ///
    /// Holds `initial` before the first breakpoint and the last breakpoint's
    /// value forever after it.
    pub fn value_at(&self, t: f64) -> f32 {
        let mut prev_at = f64::NEG_INFINITY;
        let mut prev_value = self.initial;

        for point in &self.points {
            if t < point.at {
                return match point.kind {
                    RampKind::Step => prev_value,
                    RampKind::Linear => {
                        if prev_at.is_finite() {
                            let u = ((t - prev_at) / (point.at - prev_at)) as f32;
                            prev_value + (point.value - prev_value) * u
                        } else {
                            prev_value
                        }
                    }
                    RampKind::Exponential => {
                        if prev_at.is_finite() && prev_value > 0.0 && point.value > 0.0 {
                            let u = ((t - prev_at) / (point.at - prev_at)) as f32;
                            prev_value * (point.value / prev_value).powf(u)
                        } else if prev_at.is_finite() {
                            let u = ((t - prev_at) / (point.at - prev_at)) as f32;
                            prev_value + (point.value - prev_value) * u
                        } else {
                            prev_value
                        }
                    }
                };
            }
            prev_at = point.at;
            prev_value = point.value;
        }

        prev_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_without_breakpoints() {
        let s = ParamSchedule::new(0.7);
        assert!(s.is_constant());
        assert_eq!(s.value_at(-10.0), 0.7);
        assert_eq!(s.value_at(0.0), 0.7);
        assert_eq!(s.value_at(1e9), 0.7);
    }

    #[test]
    fn step_holds_then_jumps() {
        let s = ParamSchedule::new(1.0).set_at(2.0, 0.1);
        assert_eq!(s.value_at(1.999), 1.0);
        assert_eq!(s.value_at(2.0), 0.1);
        assert_eq!(s.value_at(3.0), 0.1);
    }

    #[test]
    fn linear_interpolates_between_points() {
        let s = ParamSchedule::new(0.0).set_at(1.0, 0.0).linear_to(2.0, 1.0);
        assert_eq!(s.value_at(1.0), 0.0);
        assert!((s.value_at(1.25) - 0.25).abs() < 1e-6);
        assert!((s.value_at(1.5) - 0.5).abs() < 1e-6);
        assert_eq!(s.value_at(2.0), 1.0);
        assert_eq!(s.value_at(9.0), 1.0);
    }

    #[test]
    fn exponential_is_constant_ratio() {
        let s = ParamSchedule::new(0.0).set_at(0.0, 0.16).exp_to(1.0, EXP_FLOOR);
        // halfway through, an exponential ramp sits at the geometric mean
        let mid = s.value_at(0.5);
        let geo = (0.16f32 * EXP_FLOOR).sqrt();
        assert!((mid - geo).abs() < 1e-6);
        assert!(s.value_at(1.0) >= EXP_FLOOR);
    }

    #[test]
    fn exponential_with_zero_endpoint_degrades_to_linear() {
        let s = ParamSchedule::new(0.0).set_at(0.0, 0.0).exp_to(1.0, 0.5);
        assert!((s.value_at(0.5) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn ramp_with_no_anchor_holds_initial() {
        // a lone linear breakpoint has nothing to ramp from
        let s = ParamSchedule::new(0.3).linear_to(1.0, 0.9);
        assert_eq!(s.value_at(0.5), 0.3);
        assert_eq!(s.value_at(1.0), 0.9);
    }
}
