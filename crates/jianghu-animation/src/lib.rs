//! Animation model for the Jianghu particle engine
//!
//! A particle's motion is described declaratively by an [`AnimationProfile`]:
//! a start placement, one keyframe track per animated property, and a
//! transition (duration, easing, delay, repeat). This crate owns that data
//! model plus the pure evaluation a rendering host needs:
//! - `easing`: cubic-bezier easing curves
//! - `sampler`: evenly spaced keyframe interpolation
//! - `timeline`: delay / play / repeat-delay phases of a looping profile

pub mod easing;
pub mod profile;
pub mod sampler;
pub mod timeline;

pub use easing::Easing;
pub use profile::{AnimationProfile, InitialStyle, Property, Repeat, Track, TransitionSpec, Unit};
pub use sampler::{sample_profile, sample_track, Offset, SampledState};
pub use timeline::{Phase, Timeline};
