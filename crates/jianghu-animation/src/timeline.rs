//! Playback state of one profile: delay, play, repeat delay, loop

use crate::profile::{AnimationProfile, Repeat};
use crate::sampler::{sample_profile, SampledState};

/// Where a timeline is within its transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Waiting out the entry delay; the initial style is shown
    Delayed,
    /// Inside a pass, `progress` in [0, 1)
    Playing { progress: f64 },
    /// Holding the last keyframe during the repeat delay
    Holding,
    /// All repeats done (never reached with `Repeat::Infinite`)
    Finished,
}

/// Per-particle playback of a resolved profile.
#[derive(Debug, Clone)]
pub struct Timeline {
    profile: AnimationProfile,
    elapsed: f64,
}

impl Timeline {
    pub fn new(profile: AnimationProfile) -> Self {
        Self {
            profile,
            elapsed: 0.0,
        }
    }

    pub fn profile(&self) -> &AnimationProfile {
        &self.profile
    }

    /// Seconds since the timeline started, including the delay
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Number of passes fully played so far
    pub fn completed_passes(&self) -> u64 {
        let t = &self.profile.transition;
        let active = self.elapsed - t.delay;
        if active < t.duration {
            return 0;
        }
        let cycle = t.duration + t.repeat_delay.max(0.0);
        let passes = ((active - t.duration) / cycle).floor() as u64 + 1;
        match t.repeat {
            Repeat::Infinite => passes,
            Repeat::Count(n) => passes.min(n as u64 + 1),
        }
    }

    pub fn phase(&self) -> Phase {
        let t = &self.profile.transition;
        if self.elapsed < t.delay {
            return Phase::Delayed;
        }
        let active = self.elapsed - t.delay;
        let duration = t.duration.max(f64::EPSILON);
        let cycle = duration + t.repeat_delay.max(0.0);

        if let Repeat::Count(n) = t.repeat {
            let total = (n as f64 + 1.0) * duration + n as f64 * t.repeat_delay.max(0.0);
            if active >= total {
                return Phase::Finished;
            }
        }

        let local = active % cycle;
        if local < duration {
            Phase::Playing {
                progress: local / duration,
            }
        } else {
            Phase::Holding
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Evaluate every property at the current time
    pub fn sample(&self) -> SampledState {
        match self.phase() {
            Phase::Delayed => SampledState::initial(&self.profile.initial),
            Phase::Playing { progress } => sample_profile(&self.profile, progress),
            Phase::Holding | Phase::Finished => sample_profile(&self.profile, 1.0),
        }
    }
}
