use crate::MIN_TIME;

/*
Piecewise Value Curves
======================

A `Curve` describes how a single scalar evolves over a fixed time window.
Effect recipes use curves twice per chain: once for the frequency trajectory
(pitch sweeps) and once for the gain envelope (attack then decay).

A curve is an ordered list of breakpoints. Each breakpoint carries the ramp
shape used to approach it from the previous one:

  Step         hold the previous value, jump at the breakpoint time
  Linear       straight-line interpolation
  Exponential  v(t) = v0 * (v1/v0)^u   where u runs 0..1 over the segment

Exponential ramps are the natural decay shape for percussive sounds, but are
only defined for same-signed, non-zero endpoints; segments that violate that
fall back to linear. Before the first breakpoint the curve holds its first
value, after the last it holds its last value.

Evaluation is pure: `value_at` takes an absolute time in seconds relative to
the chain start. Chains evaluate it per sample, so the point count per curve
stays tiny (four or fewer in every recipe).
*/

/// Ramp shape used to approach a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    Step,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, Copy)]
struct Breakpoint {
    time: f32,
    value: f32,
    ramp: Ramp,
}

/// Piecewise scalar trajectory over a fixed window.
#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<Breakpoint>,
}

impl Curve {
    /// Start a curve anchored at `value` from time zero.
    pub fn at(value: f32) -> Self {
        Self {
            points: vec![Breakpoint {
                time: 0.0,
                value,
                ramp: Ramp::Step,
            }],
        }
    }

    /// Jump to `value` at `time`.
    pub fn set_at(self, value: f32, time: f32) -> Self {
        self.push(value, time, Ramp::Step)
    }

    /// Ramp linearly to `value`, arriving at `time`.
    pub fn linear_to(self, value: f32, time: f32) -> Self {
        self.push(value, time, Ramp::Linear)
    }

    /// Ramp exponentially to `value`, arriving at `time`.
    pub fn exp_to(self, value: f32, time: f32) -> Self {
        self.push(value, time, Ramp::Exponential)
    }

    fn push(mut self, value: f32, time: f32, ramp: Ramp) -> Self {
        debug_assert!(
            self.points.last().map_or(true, |p| time >= p.time),
            "breakpoint times must be non-decreasing"
        );
        self.points.push(Breakpoint { time, value, ramp });
        self
    }

    /// Evaluate the curve at `t` seconds.
    pub fn value_at(&self, t: f32) -> f32 {
        let first = self.points[0];
        if t < first.time {
            return first.value;
        }

        for pair in self.points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if t >= to.time {
                continue;
            }

            let span = to.time - from.time;
            if span <= MIN_TIME {
                return from.value;
            }
            let u = (t - from.time) / span;

            return match to.ramp {
                Ramp::Step => from.value,
                Ramp::Linear => from.value + (to.value - from.value) * u,
                Ramp::Exponential => {
                    if from.value > 0.0 && to.value > 0.0 {
                        from.value * (to.value / from.value).powf(u)
                    } else {
                        from.value + (to.value - from.value) * u
                    }
                }
            };
        }

        self.points[self.points.len() - 1].value
    }

    /// Time of the last breakpoint.
    pub fn end_time(&self) -> f32 {
        self.points[self.points.len() - 1].time
    }

    /// Value held after the last breakpoint.
    pub fn end_value(&self) -> f32 {
        self.points[self.points.len() - 1].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SILENCE_FLOOR;

    #[test]
    fn holds_before_and_after() {
        let c = Curve::at(0.8).exp_to(0.01, 0.25);
        assert_eq!(c.value_at(-1.0), 0.8);
        assert_eq!(c.value_at(0.0), 0.8);
        assert_eq!(c.value_at(0.25), 0.01);
        assert_eq!(c.value_at(1.0), 0.01);
    }

    #[test]
    fn linear_midpoint() {
        let c = Curve::at(0.0).linear_to(1.0, 0.1);
        assert!((c.value_at(0.05) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn exponential_is_monotonic_decay() {
        let c = Curve::at(1.5).exp_to(0.01, 0.2);
        let mut prev = c.value_at(0.0);
        for i in 1..=100 {
            let v = c.value_at(0.2 * i as f32 / 100.0);
            assert!(v <= prev + 1e-6, "decay must not rise");
            prev = v;
        }
        assert!(c.value_at(0.2) <= SILENCE_FLOOR);
    }

    #[test]
    fn exponential_midpoint_is_geometric() {
        let c = Curve::at(1.0).exp_to(0.01, 1.0);
        // halfway through an exponential segment the value is sqrt(v0 * v1)
        let mid = c.value_at(0.5);
        assert!((mid - (0.01f32).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn step_jumps_at_breakpoint() {
        let c = Curve::at(0.0).set_at(1.0, 0.5);
        assert_eq!(c.value_at(0.49), 0.0);
        assert_eq!(c.value_at(0.5), 1.0);
    }

    #[test]
    fn attack_then_decay() {
        // the canonical one-shot envelope shape
        let c = Curve::at(0.0).linear_to(0.7, 0.01).exp_to(0.01, 0.2);
        assert_eq!(c.value_at(0.0), 0.0);
        assert!((c.value_at(0.01) - 0.7).abs() < 1e-6);
        assert!(c.value_at(0.1) < 0.7);
        assert!(c.value_at(0.2) <= SILENCE_FLOOR);
    }

    #[test]
    fn delayed_attack_holds_initial_value() {
        // the kick "thud" rises only after 20 ms
        let c = Curve::at(0.0)
            .set_at(0.0, 0.02)
            .linear_to(1.0, 0.04)
            .exp_to(0.01, 0.3);
        assert_eq!(c.value_at(0.01), 0.0);
        assert!((c.value_at(0.03) - 0.5).abs() < 1e-6);
        assert!(c.value_at(0.3) <= SILENCE_FLOOR);
    }

    #[test]
    fn exponential_from_zero_falls_back_to_linear() {
        let c = Curve::at(0.0).exp_to(1.0, 0.1);
        assert!((c.value_at(0.05) - 0.5).abs() < 1e-6);
    }
}
