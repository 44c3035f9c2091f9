//! Effect-type profile resolvers
//!
//! Each effect type maps to one pure resolver: `(parameters, context) ->
//! ProfileDraft`. Dispatch is an exhaustive match, so adding an effect type
//! without a resolver fails to compile. Unrecognized tags go to
//! [`fallback`].

mod drifting;
mod falling;
mod rising;
mod storm;
mod sweeping;

use crate::effect::EffectType;
use crate::params::DerivedParameters;
use crate::shapes::{ShapeFamily, ShapeSpec};
use jianghu_animation::{
    AnimationProfile, Easing, InitialStyle, Property, Repeat, Track, TransitionSpec, Unit,
};
use jianghu_core::{ParticleKey, ThemeColor};
use serde::{Deserialize, Serialize};

/// Inputs a resolver needs beyond the derived parameters
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub color: &'a ThemeColor,
    pub key: &'a ParticleKey,
}

impl ResolveContext<'_> {
    pub fn shape(&self, family: ShapeFamily, variant: u8, size: f64) -> ShapeSpec {
        ShapeSpec::new(family, variant, size, self.color, self.key)
    }
}

/// A resolver's output before stagger and scale defaults are applied
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub initial: InitialStyle,
    pub tracks: Vec<Track>,
    pub transition: TransitionSpec,
    pub shape: ShapeSpec,
}

pub type ResolverFn = fn(&DerivedParameters, &ResolveContext<'_>) -> ProfileDraft;

/// Final motion and shape for one particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParticle {
    pub profile: AnimationProfile,
    pub shape: ShapeSpec,
}

/// Resolver for an effect type; `None` selects the fallback
pub fn resolver_for(effect: Option<EffectType>) -> ResolverFn {
    let Some(effect) = effect else {
        return fallback;
    };
    match effect {
        EffectType::FallingPetal => falling::petal,
        EffectType::FallenLeaf => falling::fallen_leaf,
        EffectType::FrostSnow => falling::frost_snow,
        EffectType::DragonPalm => falling::dragon_palm,
        EffectType::GreenwoodAura => falling::greenwood,
        EffectType::SerpentSword => rising::serpent_sword,
        EffectType::HeavySword => rising::heavy_sword,
        EffectType::ImperialSword => rising::imperial_sword,
        EffectType::Flame => rising::flame,
        EffectType::BloodMist => rising::blood_mist,
        EffectType::PoisonCloud => rising::poison_cloud,
        EffectType::BeastAura => rising::beast_aura,
        EffectType::ImperialDecree => rising::imperial_decree,
        EffectType::DarkFlame => rising::dark_flame,
        EffectType::WindStream => sweeping::wind_stream,
        EffectType::Lightning | EffectType::ThunderDragon => storm::storm,
        EffectType::Taiji => drifting::taiji,
        EffectType::GoldenLight => drifting::golden_light,
        EffectType::MercyLight => drifting::mercy_light,
        EffectType::WaterRipple => drifting::water_ripple,
        EffectType::StarFormation => drifting::star_formation,
        EffectType::Mist => drifting::mist,
        EffectType::ShadowBlade => drifting::shadow_blade,
        EffectType::TranscendentAura => drifting::transcendent,
        EffectType::InkWash | EffectType::SoundWave => drifting::ink_wash,
    }
}

/// Resolve one particle's profile and shape.
///
/// The stagger delay is added on top of the resolver's own delay, and a
/// constant scale track is added when the resolver set none.
pub fn resolve_particle(
    effect: Option<EffectType>,
    params: &DerivedParameters,
    color: &ThemeColor,
    key: &ParticleKey,
) -> ResolvedParticle {
    let ctx = ResolveContext { color, key };
    let draft = resolver_for(effect)(params, &ctx);

    let mut profile = AnimationProfile {
        initial: draft.initial,
        tracks: draft.tracks,
        transition: draft.transition,
    };
    profile.transition.delay += params.stagger_delay;
    profile.ensure_scale_track();
    debug_assert!(profile.is_well_formed(), "malformed profile for {key}");

    ResolvedParticle {
        profile,
        shape: draft.shape,
    }
}

/// Unrecognized tags: a soft pulse that drifts sideways
fn fallback(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 15.0 + s.s2 * 65.0),
        tracks: vec![
            scale(vec![0.0, p.size * 0.85, p.size * 1.1]),
            opacity(vec![0.0, 0.35, 0.0]),
            x_px(vec![0.0, (s.s3 - 0.5) * 30.0]),
        ],
        transition: looping(4.0 + s.s1 * 2.0, Easing::EaseInOut, 0.0, 1.0 + s.s4 * 2.0),
        shape: ctx.shape(ShapeFamily::StarFormation, 0, p.size * 0.7),
    }
}

pub(crate) fn looping(
    duration: f64,
    ease: Easing,
    delay: f64,
    repeat_delay: f64,
) -> TransitionSpec {
    TransitionSpec {
        duration,
        ease,
        repeat: Repeat::Infinite,
        delay,
        repeat_delay,
    }
}

pub(crate) fn x_px(values: Vec<f64>) -> Track {
    Track::new(Property::X, Unit::Px, values)
}

pub(crate) fn x_vw(values: Vec<f64>) -> Track {
    Track::new(Property::X, Unit::Vw, values)
}

pub(crate) fn y_px(values: Vec<f64>) -> Track {
    Track::new(Property::Y, Unit::Px, values)
}

pub(crate) fn y_vh(values: Vec<f64>) -> Track {
    Track::new(Property::Y, Unit::Vh, values)
}

pub(crate) fn rotate(values: Vec<f64>) -> Track {
    Track::new(Property::Rotate, Unit::Deg, values)
}

pub(crate) fn scale(values: Vec<f64>) -> Track {
    Track::new(Property::Scale, Unit::Ratio, values)
}

pub(crate) fn scale_x(values: Vec<f64>) -> Track {
    Track::new(Property::ScaleX, Unit::Ratio, values)
}

pub(crate) fn scale_y(values: Vec<f64>) -> Track {
    Track::new(Property::ScaleY, Unit::Ratio, values)
}

pub(crate) fn opacity(values: Vec<f64>) -> Track {
    Track::new(Property::Opacity, Unit::Ratio, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Category;
    use std::collections::HashSet;

    fn resolve(effect: Option<EffectType>, index: usize) -> ResolvedParticle {
        let tag = effect.map_or("unknown-tag-xyz", EffectType::tag);
        let key = ParticleKey::new(tag, index);
        let params = DerivedParameters::derive(index);
        resolve_particle(effect, &params, &ThemeColor::from("#8B0000"), &key)
    }

    #[test]
    fn every_effect_is_well_formed() {
        for effect in EffectType::ALL {
            for index in 0..120 {
                let resolved = resolve(Some(effect), index);
                let profile = &resolved.profile;
                assert!(
                    profile.validate().is_ok(),
                    "{effect} #{index}: {:?}",
                    profile.validate()
                );
                assert!(profile.has_track(Property::Scale), "{effect} has no scale");
                assert!(profile.has_track(Property::Opacity), "{effect} has no opacity");
                assert_eq!(profile.transition.repeat, Repeat::Infinite);
                assert!(resolved.shape.variant < resolved.shape.family.variant_count());
            }
        }
    }

    #[test]
    fn opacity_starts_and_ends_hidden() {
        for effect in EffectType::ALL.into_iter().map(Some).chain([None]) {
            for index in 0..60 {
                let resolved = resolve(effect, index);
                let track = resolved.profile.track(Property::Opacity).unwrap();
                assert_eq!(track.first(), Some(0.0));
                assert_eq!(track.last(), Some(0.0));
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_profiles() {
        for effect in EffectType::ALL {
            assert_eq!(resolve(Some(effect), 7), resolve(Some(effect), 7));
        }
    }

    #[test]
    fn fallback_is_deterministic() {
        let a = resolve(None, 3);
        let b = resolve(None, 3);
        assert_eq!(a, b);
        assert_eq!(a.shape.family, ShapeFamily::StarFormation);
        assert_eq!(a.profile.tracks.len(), 3);
    }

    #[test]
    fn stagger_is_added_to_delay() {
        for index in 0..20 {
            let params = DerivedParameters::derive(index);
            let resolved = resolve(Some(EffectType::InkWash), index);
            // Ink wash has no base delay of its own
            assert_eq!(resolved.profile.transition.delay, params.stagger_delay);
        }
    }

    #[test]
    fn resolved_delays_desynchronize() {
        for effect in EffectType::ALL {
            let distinct: HashSet<u64> = (0..50)
                .map(|i| resolve(Some(effect), i).profile.transition.delay.to_bits())
                .collect();
            assert!(distinct.len() >= 10, "{effect}: {} delays", distinct.len());
        }
    }

    #[test]
    fn falling_and_rising_start_at_their_edge() {
        for effect in EffectType::ALL {
            for index in 0..80 {
                let top = resolve(Some(effect), index).profile.initial.top;
                match effect.category() {
                    Category::Falling => assert!(top < 0.0, "{effect} #{index} top {top}"),
                    Category::Rising => assert!(top >= 60.0, "{effect} #{index} top {top}"),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn profiles_without_scale_get_a_constant_one() {
        // Bolts only drive scaleX and scaleY
        let bolt_index = (0..200)
            .find(|&i| DerivedParameters::derive(i).samples.s1 < 0.25)
            .unwrap();
        let resolved = resolve(Some(EffectType::Lightning), bolt_index);
        let scale = resolved.profile.track(Property::Scale).unwrap();
        assert_eq!(scale.values, vec![1.0]);
        assert!(resolved.profile.has_track(Property::ScaleY));
    }
}
