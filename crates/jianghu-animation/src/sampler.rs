//! Pure keyframe evaluation: evenly spaced keyframes, eased per segment

use crate::easing::Easing;
use crate::profile::{AnimationProfile, InitialStyle, Property, Track, Unit};
use serde::{Deserialize, Serialize};

/// A translation offset and the unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub value: f64,
    pub unit: Unit,
}

impl Offset {
    pub const ZERO: Self = Self {
        value: 0.0,
        unit: Unit::Px,
    };

    /// Resolve to CSS pixels for a viewport of `width` x `height`
    pub fn to_px(&self, width: f64, height: f64) -> f64 {
        match self.unit {
            Unit::Vw => self.value * width / 100.0,
            Unit::Vh => self.value * height / 100.0,
            Unit::Px | Unit::Deg | Unit::Ratio => self.value,
        }
    }
}

/// Every animatable property evaluated at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledState {
    pub x: Offset,
    pub y: Offset,
    /// Degrees
    pub rotate: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

impl SampledState {
    /// State shown before the first keyframe plays
    pub fn initial(style: &InitialStyle) -> Self {
        Self {
            x: Offset::ZERO,
            y: Offset::ZERO,
            rotate: Property::Rotate.rest_value(),
            scale: style.scale,
            scale_x: Property::ScaleX.rest_value(),
            scale_y: Property::ScaleY.rest_value(),
            opacity: style.opacity,
        }
    }

    /// Effective horizontal/vertical scale after combining uniform and axis scale
    pub fn effective_scale(&self) -> (f64, f64) {
        (self.scale * self.scale_x, self.scale * self.scale_y)
    }
}

/// Interpolate evenly spaced keyframe `values` at `progress` in [0, 1].
///
/// `ease` is applied inside every segment, not across the whole sequence.
/// An empty slice yields `None`.
pub fn sample_values(values: &[f64], progress: f64, ease: Easing) -> Option<f64> {
    match values.len() {
        0 => None,
        1 => Some(values[0]),
        n => {
            let progress = if progress.is_nan() {
                0.0
            } else {
                progress.clamp(0.0, 1.0)
            };
            let position = progress * (n - 1) as f64;
            let idx = (position.floor() as usize).min(n - 2);
            let local = position - idx as f64;
            let eased = ease.apply(local);
            let (a, b) = (values[idx], values[idx + 1]);
            Some(a + (b - a) * eased)
        }
    }
}

/// Sample a track at `progress`, falling back to the property's rest value
pub fn sample_track(track: &Track, progress: f64, ease: Easing) -> f64 {
    sample_values(&track.values, progress, ease).unwrap_or_else(|| track.property.rest_value())
}

/// Evaluate every property of a profile at `progress` through one pass
pub fn sample_profile(profile: &AnimationProfile, progress: f64) -> SampledState {
    let ease = profile.transition.ease;
    let value = |property: Property| {
        profile
            .track(property)
            .map(|t| sample_track(t, progress, ease))
            .unwrap_or_else(|| property.rest_value())
    };
    let offset = |property: Property| match profile.track(property) {
        Some(track) => Offset {
            value: sample_track(track, progress, ease),
            unit: track.unit,
        },
        None => Offset::ZERO,
    };

    SampledState {
        x: offset(Property::X),
        y: offset(Property::Y),
        rotate: value(Property::Rotate),
        scale: value(Property::Scale),
        scale_x: value(Property::ScaleX),
        scale_y: value(Property::ScaleY),
        opacity: value(Property::Opacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Repeat, TransitionSpec};

    fn profile_with(tracks: Vec<Track>, ease: Easing) -> AnimationProfile {
        AnimationProfile {
            initial: InitialStyle::at(0.0, 0.0),
            tracks,
            transition: TransitionSpec {
                duration: 1.0,
                ease,
                repeat: Repeat::Infinite,
                delay: 0.0,
                repeat_delay: 0.0,
            },
        }
    }

    #[test]
    fn sample_empty_values_returns_none() {
        assert_eq!(sample_values(&[], 0.5, Easing::Linear), None);
    }

    #[test]
    fn sample_single_value_is_constant() {
        assert_eq!(sample_values(&[3.0], 0.0, Easing::Linear), Some(3.0));
        assert_eq!(sample_values(&[3.0], 0.9, Easing::EaseIn), Some(3.0));
    }

    #[test]
    fn sample_linear_midpoint() {
        let v = sample_values(&[0.0, 10.0], 0.5, Easing::Linear).unwrap();
        assert!((v - 5.0).abs() < 1e-9);
    }

    #[test]
    fn keyframes_are_evenly_spaced() {
        // Five keyframes: each occupies a quarter of the pass
        let values = [0.0, 0.6, 0.55, 0.4, 0.0];
        assert!((sample_values(&values, 0.25, Easing::Linear).unwrap() - 0.6).abs() < 1e-9);
        assert!((sample_values(&values, 0.75, Easing::Linear).unwrap() - 0.4).abs() < 1e-9);
        assert!((sample_values(&values, 1.0, Easing::Linear).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn easing_applies_per_segment() {
        // Halfway into the first of two segments
        let v = sample_values(&[0.0, 1.0, 0.0], 0.25, Easing::EaseIn).unwrap();
        assert!((v - Easing::EaseIn.apply(0.5)).abs() < 1e-9);
    }

    #[test]
    fn progress_out_of_range_clamps() {
        assert_eq!(sample_values(&[1.0, 2.0], -1.0, Easing::Linear), Some(1.0));
        assert_eq!(sample_values(&[1.0, 2.0], 4.0, Easing::Linear), Some(2.0));
    }

    #[test]
    fn missing_tracks_use_rest_values() {
        let profile = profile_with(
            vec![Track::new(Property::Y, Unit::Vh, vec![0.0, 120.0])],
            Easing::Linear,
        );
        let state = sample_profile(&profile, 0.5);
        assert!((state.y.value - 60.0).abs() < 1e-9);
        assert_eq!(state.y.unit, Unit::Vh);
        assert_eq!(state.x, Offset::ZERO);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.opacity, 1.0);
    }

    #[test]
    fn offset_resolves_viewport_units() {
        let vh = Offset { value: 50.0, unit: Unit::Vh };
        let vw = Offset { value: 10.0, unit: Unit::Vw };
        assert!((vh.to_px(1920.0, 1080.0) - 540.0).abs() < 1e-9);
        assert!((vw.to_px(1920.0, 1080.0) - 192.0).abs() < 1e-9);
    }

    #[test]
    fn effective_scale_combines_axes() {
        let mut state = SampledState::initial(&InitialStyle::at(0.0, 0.0));
        state.scale = 2.0;
        state.scale_y = 0.5;
        assert_eq!(state.effective_scale(), (2.0, 1.0));
    }
}
