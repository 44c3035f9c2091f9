//! Core animation data types

use crate::easing::Easing;
use jianghu_core::{JianghuError, Result};
use serde::{Deserialize, Serialize};

/// A complete declarative motion description for one particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationProfile {
    /// Placement and style before the first keyframe plays
    pub initial: InitialStyle,
    /// Animated property tracks, at most one per property
    pub tracks: Vec<Track>,
    /// Timing shared by every track
    pub transition: TransitionSpec,
}

/// Screen-space start placement, in percent of the containing frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialStyle {
    /// Horizontal placement (`left: x%`); may be negative to start off-frame
    pub left: f64,
    /// Vertical placement (`top: y%`); negative is above the frame, >100 below
    pub top: f64,
    /// Stacking order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Opacity held until the first keyframe
    pub opacity: f64,
    /// Scale held until the first keyframe
    pub scale: f64,
}

impl InitialStyle {
    /// Place at (`left`%, `top`%), hidden (opacity 0, scale 0) until playback begins
    pub fn at(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            z_index: None,
            opacity: 0.0,
            scale: 0.0,
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

/// What property a track drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    X,
    Y,
    Rotate,
    Scale,
    ScaleX,
    ScaleY,
    Opacity,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::X,
        Property::Y,
        Property::Rotate,
        Property::Scale,
        Property::ScaleX,
        Property::ScaleY,
        Property::Opacity,
    ];

    /// Value of the property when no track drives it
    pub fn rest_value(self) -> f64 {
        match self {
            Property::X | Property::Y | Property::Rotate => 0.0,
            Property::Scale | Property::ScaleX | Property::ScaleY | Property::Opacity => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Property::X => "x",
            Property::Y => "y",
            Property::Rotate => "rotate",
            Property::Scale => "scale",
            Property::ScaleX => "scaleX",
            Property::ScaleY => "scaleY",
            Property::Opacity => "opacity",
        }
    }
}

/// Unit of a track's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// CSS pixels
    Px,
    /// Percent of viewport height
    Vh,
    /// Percent of viewport width
    Vw,
    /// Degrees
    Deg,
    /// Unitless multiplier (scale, opacity)
    Ratio,
}

/// A keyframe track. Keyframes are spaced evenly over the transition duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub property: Property,
    pub unit: Unit,
    pub values: Vec<f64>,
}

impl Track {
    pub fn new(property: Property, unit: Unit, values: Vec<f64>) -> Self {
        Self {
            property,
            unit,
            values,
        }
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Repeat policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    /// Loop until cancelled
    Infinite,
    /// Play once, then repeat this many more times
    Count(u32),
}

/// Timing shared by all tracks of a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Seconds for one pass through the keyframes
    pub duration: f64,
    /// Easing applied to each segment between keyframes
    pub ease: Easing,
    pub repeat: Repeat,
    /// Seconds before the first pass only
    pub delay: f64,
    /// Seconds held on the last keyframe between passes
    pub repeat_delay: f64,
}

impl AnimationProfile {
    /// Look up the track for a property
    pub fn track(&self, property: Property) -> Option<&Track> {
        self.tracks.iter().find(|t| t.property == property)
    }

    pub fn has_track(&self, property: Property) -> bool {
        self.track(property).is_some()
    }

    /// Add a constant `scale = 1` track if nothing drives scale.
    ///
    /// Without it the host would hold the initial scale of 0 and the
    /// particle would never become visible.
    pub fn ensure_scale_track(&mut self) {
        if !self.has_track(Property::Scale) {
            self.tracks
                .push(Track::new(Property::Scale, Unit::Ratio, vec![1.0]));
        }
    }

    /// Check the profile is safe to hand to a rendering host.
    pub fn validate(&self) -> Result<()> {
        let t = &self.transition;
        if !(t.duration.is_finite() && t.duration > 0.0) {
            return Err(JianghuError::AnimationError(format!(
                "non-positive duration: {}",
                t.duration
            )));
        }
        for (name, value) in [("delay", t.delay), ("repeat_delay", t.repeat_delay)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(JianghuError::AnimationError(format!(
                    "invalid {name}: {value}"
                )));
            }
        }
        if !(self.initial.left.is_finite() && self.initial.top.is_finite()) {
            return Err(JianghuError::AnimationError(
                "non-finite initial placement".into(),
            ));
        }
        if self.tracks.is_empty() {
            return Err(JianghuError::AnimationError("profile has no tracks".into()));
        }
        for track in &self.tracks {
            if track.values.is_empty() {
                return Err(JianghuError::AnimationError(format!(
                    "track '{}' has no keyframes",
                    track.property.name()
                )));
            }
            if track.values.iter().any(|v| !v.is_finite()) {
                return Err(JianghuError::AnimationError(format!(
                    "track '{}' has a non-finite keyframe",
                    track.property.name()
                )));
            }
        }
        Ok(())
    }

    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_profile() -> AnimationProfile {
        AnimationProfile {
            initial: InitialStyle::at(50.0, 50.0),
            tracks: vec![Track::new(
                Property::Opacity,
                Unit::Ratio,
                vec![0.0, 0.5, 0.0],
            )],
            transition: TransitionSpec {
                duration: 2.0,
                ease: Easing::EaseInOut,
                repeat: Repeat::Infinite,
                delay: 0.0,
                repeat_delay: 1.0,
            },
        }
    }

    #[test]
    fn ensure_scale_adds_constant_track_once() {
        let mut profile = fade_profile();
        profile.ensure_scale_track();
        profile.ensure_scale_track();
        let scale = profile.track(Property::Scale).unwrap();
        assert_eq!(scale.values, vec![1.0]);
        assert_eq!(profile.tracks.len(), 2);
    }

    #[test]
    fn validate_accepts_well_formed() {
        assert!(fade_profile().validate().is_ok());
    }

    #[test]
    fn reject_zero_duration() {
        let mut profile = fade_profile();
        profile.transition.duration = 0.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn reject_empty_track() {
        let mut profile = fade_profile();
        profile.tracks.push(Track::new(Property::X, Unit::Px, vec![]));
        assert!(profile.validate().is_err());
    }

    #[test]
    fn reject_nan_keyframe() {
        let mut profile = fade_profile();
        profile.tracks[0].values[1] = f64::NAN;
        assert!(!profile.is_well_formed());
    }

    #[test]
    fn initial_style_starts_hidden() {
        let style = InitialStyle::at(10.0, -5.0).with_z_index(14);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.scale, 0.0);
        assert_eq!(style.z_index, Some(14));
    }

    #[test]
    fn property_names_match_host_keys() {
        assert_eq!(Property::ScaleX.name(), "scaleX");
        let json = serde_json::to_string(&Property::ScaleY).unwrap();
        assert_eq!(json, "\"scaleY\"");
    }
}
