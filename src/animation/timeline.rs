//! Declarative timelines for the scene's entity animations.
//!
//! A timeline is pure configuration: it owns a delay, a duration and an
//! easing curve, and maps an elapsed time to a 0..=1 progress value. All
//! per-entity variation (grow delay, sway delay) lives on the entity itself;
//! sampling draws no randomness.

/// Easing curve applied to a timeline's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out, used for growth and firework motion.
    EaseOut,
    /// Sine ease-in-out, used for sway and pulsing.
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}

/// A one-shot animation segment: wait `delay` seconds, then run for
/// `duration` seconds easing from 0 to 1, then hold at 1.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Timeline {
    pub const fn new(delay: f32, duration: f32, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
        }
    }

    /// Eased progress in `0.0..=1.0` for a given elapsed time.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply((elapsed - self.delay) / self.duration)
    }
}

/// Indefinite oscillation in `-1.0..=1.0`, starting after `delay` and
/// repeating with `period`. Flat zero before the delay, so entities sit
/// still until their stagger kicks in.
pub fn oscillate(elapsed: f32, period: f32, delay: f32) -> f32 {
    if elapsed <= delay || period <= 0.0 {
        return 0.0;
    }
    (std::f32::consts::TAU * (elapsed - delay) / period).sin()
}

/// Lifecycle phase of a short-lived entity. Mounting plays the entering
/// animation, removal is preceded by an exiting fade so nothing vanishes
/// abruptly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Steady,
    Exiting,
}

impl Phase {
    /// Classifies an age against an enter window and a total lifetime with
    /// an exit window at its end.
    pub fn at(age: f32, enter: f32, lifetime: f32, exit: f32) -> Self {
        if age < enter {
            Phase::Entering
        } else if age >= lifetime - exit {
            Phase::Exiting
        } else {
            Phase::Steady
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_at_both_ends() {
        let tl = Timeline::new(1.0, 2.0, Easing::Linear);
        assert_eq!(tl.progress(0.0), 0.0);
        assert_eq!(tl.progress(1.0), 0.0);
        assert_eq!(tl.progress(2.0), 0.5);
        assert_eq!(tl.progress(10.0), 1.0);
    }

    #[test]
    fn ease_out_is_monotonic_and_bounded() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = Easing::EaseOut.apply(i as f32 / 100.0);
            assert!(v >= last);
            assert!((0.0..=1.0).contains(&v));
            last = v;
        }
        assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    }

    #[test]
    fn ease_in_out_hits_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
        assert!((Easing::EaseInOut.apply(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn oscillation_is_flat_before_delay() {
        assert_eq!(oscillate(0.5, 4.0, 1.0), 0.0);
        assert_eq!(oscillate(2.0, 4.0, 1.0), 1.0);
    }

    #[test]
    fn zero_duration_snaps_to_done() {
        let tl = Timeline::new(0.5, 0.0, Easing::EaseOut);
        assert_eq!(tl.progress(0.6), 1.0);
    }

    #[test]
    fn phase_windows() {
        assert_eq!(Phase::at(0.1, 0.5, 1.5, 0.3), Phase::Entering);
        assert_eq!(Phase::at(0.8, 0.5, 1.5, 0.3), Phase::Steady);
        assert_eq!(Phase::at(1.3, 0.5, 1.5, 0.3), Phase::Exiting);
    }
}
