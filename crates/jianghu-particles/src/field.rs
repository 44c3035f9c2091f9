//! A resolved field of particles for one effect configuration

use crate::budget::BudgetTable;
use crate::effect::EffectType;
use crate::params::DerivedParameters;
use crate::profiles::resolve_particle;
use crate::shapes::ShapeSpec;
use jianghu_animation::AnimationProfile;
use jianghu_core::{JianghuError, ParticleKey, Result, ThemeColor};
use serde::{Deserialize, Serialize};

/// What the host application asks the engine to show.
///
/// Passed explicitly on every mount or update; the engine holds no ambient
/// theme state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub effect_tag: String,
    /// Any integer; clamped by the budget policy
    pub requested_count: i64,
    pub color: ThemeColor,
}

impl EngineConfig {
    /// Surrounding whitespace is stripped from the tag, so lookup and
    /// particle keys see the same string.
    pub fn new(
        effect_tag: impl Into<String>,
        requested_count: i64,
        color: impl Into<ThemeColor>,
    ) -> Self {
        let effect_tag: String = effect_tag.into();
        Self {
            effect_tag: effect_tag.trim().to_string(),
            requested_count,
            color: color.into(),
        }
    }

    /// Config for a scenario's ambient particle keyword
    pub fn for_scene(keyword: &str, requested_count: i64, color: impl Into<ThemeColor>) -> Self {
        Self::new(EffectType::from_scene_particle(keyword).tag(), requested_count, color)
    }

    /// Recognized effect type, or `None` for the fallback
    pub fn effect(&self) -> Option<EffectType> {
        EffectType::lookup(&self.effect_tag)
    }

    /// Like [`effect`](Self::effect) but unknown tags are an error
    pub fn strict_effect(&self) -> Result<EffectType> {
        self.effect()
            .ok_or_else(|| JianghuError::UnknownEffect(self.effect_tag.clone()))
    }
}

/// One particle: identity, parameters, motion and shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub key: ParticleKey,
    pub derived: DerivedParameters,
    pub profile: AnimationProfile,
    pub shape: ShapeSpec,
}

impl Particle {
    pub fn resolve(
        effect: Option<EffectType>,
        tag: &str,
        index: usize,
        color: &ThemeColor,
    ) -> Self {
        let key = ParticleKey::new(tag, index);
        let derived = DerivedParameters::derive(index);
        let resolved = resolve_particle(effect, &derived, color, &key);
        Self {
            key,
            derived,
            profile: resolved.profile,
            shape: resolved.shape,
        }
    }
}

/// Every particle of one configuration, in index order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    pub effect_tag: String,
    pub effect: Option<EffectType>,
    pub color: ThemeColor,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Number of particles after budget clamping
    pub fn actual_count(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, key: &ParticleKey) -> Option<&Particle> {
        self.particles.get(key.index()).filter(|p| &p.key == key)
    }
}

/// Resolve a field. Never fails: unknown tags use the fallback profile
/// and negative counts give an empty field.
pub fn build_field(config: &EngineConfig, budget: &BudgetTable) -> ParticleField {
    let effect = config.effect();
    if effect.is_none() {
        log::debug!("unrecognized effect tag '{}', using fallback", config.effect_tag);
    }
    let count = budget.clamp_count(effect, config.requested_count);

    let particles: Vec<Particle> = (0..count)
        .map(|index| Particle::resolve(effect, &config.effect_tag, index, &config.color))
        .collect();

    log::info!(
        "resolved {} particle(s) for '{}' (requested {})",
        particles.len(),
        config.effect_tag,
        config.requested_count
    );

    ParticleField {
        effect_tag: config.effect_tag.clone(),
        effect,
        color: config.color.clone(),
        particles,
    }
}

/// Resolve a field against the built-in budget table
pub fn render_particle_field(tag: &str, requested_count: i64, color: &str) -> ParticleField {
    build_field(
        &EngineConfig::new(tag, requested_count, color),
        &BudgetTable::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeFamily;
    use jianghu_animation::Property;
    use std::collections::HashSet;

    #[test]
    fn petal_field_is_capped_and_distinct() {
        let field = render_particle_field("falling-petal", 1000, "#ff00ff");
        assert_eq!(field.actual_count(), 80);
        assert_eq!(field.effect, Some(EffectType::FallingPetal));

        let spreads: HashSet<u64> = field
            .particles
            .iter()
            .map(|p| p.derived.spread_position.to_bits())
            .collect();
        assert_eq!(spreads.len(), 80);

        for (i, a) in field.particles.iter().enumerate() {
            for b in &field.particles[i + 1..] {
                assert_ne!(a.derived, b.derived);
            }
        }
        assert_eq!(field.particles[5].key.to_string(), "falling-petal-5");
        assert_eq!(field.particles[5].shape.color.as_str(), "#ff00ff");
    }

    #[test]
    fn unknown_tag_uses_fallback_profile() {
        let field = render_particle_field("unknown-tag-xyz", 10, "#000");
        assert_eq!(field.actual_count(), 10);
        assert_eq!(field.effect, None);
        for particle in &field.particles {
            assert_eq!(particle.shape.family, ShapeFamily::StarFormation);
            let opacity = particle.profile.track(Property::Opacity).unwrap();
            assert_eq!(opacity.values, vec![0.0, 0.35, 0.0]);
        }
        assert_eq!(field, render_particle_field("unknown-tag-xyz", 10, "#000"));
    }

    #[test]
    fn negative_count_gives_empty_field() {
        let field = render_particle_field("mist", -4, "#fff");
        assert!(field.is_empty());
    }

    #[test]
    fn legacy_tags_resolve_but_keep_their_key() {
        let field = render_particle_field("꽃잎", 3, "#fff");
        assert_eq!(field.effect, Some(EffectType::FallingPetal));
        assert_eq!(field.particles[2].key.to_string(), "꽃잎-2");
    }

    #[test]
    fn padded_tag_is_recognized_and_keyed_trimmed() {
        let field = render_particle_field(" flame ", 2, "#fff");
        assert_eq!(field.effect, Some(EffectType::Flame));
        assert_eq!(field.effect_tag, "flame");
        assert_eq!(field.particles[1].key.to_string(), "flame-1");
    }

    #[test]
    fn strict_lookup_reports_unknown_tags() {
        let config = EngineConfig::new("confetti", 5, "#fff");
        assert!(matches!(
            config.strict_effect(),
            Err(JianghuError::UnknownEffect(tag)) if tag == "confetti"
        ));
    }

    #[test]
    fn scene_keywords_map_to_effects() {
        let config = EngineConfig::for_scene("embers", 50, "#fff");
        assert_eq!(config.effect(), Some(EffectType::Flame));
        let config = EngineConfig::for_scene("anything", 50, "#fff");
        assert_eq!(config.effect(), Some(EffectType::FallingPetal));
    }

    #[test]
    fn get_by_key() {
        let field = render_particle_field("lightning", 5, "#fff");
        let key = ParticleKey::new("lightning", 3);
        assert_eq!(field.get(&key).map(|p| p.derived.index), Some(3));
        assert!(field.get(&ParticleKey::new("flame", 3)).is_none());
    }
}
