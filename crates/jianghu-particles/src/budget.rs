//! Particle-count budget policy

use crate::effect::EffectType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cap used for tags with no entry in the table
pub const DEFAULT_MAX: usize = 40;

/// Built-in per-type cap. Heavy or large shapes get fewer particles.
pub fn default_max(effect: EffectType) -> usize {
    match effect {
        EffectType::FallingPetal => 80,
        EffectType::DragonPalm | EffectType::FallenLeaf => 60,
        EffectType::FrostSnow | EffectType::GreenwoodAura => 50,
        EffectType::Taiji
        | EffectType::PoisonCloud
        | EffectType::InkWash
        | EffectType::SoundWave => 40,
        EffectType::GoldenLight
        | EffectType::StarFormation
        | EffectType::WaterRipple
        | EffectType::Flame => 35,
        EffectType::Mist
        | EffectType::WindStream
        | EffectType::SerpentSword
        | EffectType::MercyLight
        | EffectType::DarkFlame
        | EffectType::BloodMist
        | EffectType::ThunderDragon
        | EffectType::Lightning => 30,
        EffectType::ShadowBlade
        | EffectType::HeavySword
        | EffectType::ImperialSword
        | EffectType::BeastAura
        | EffectType::ImperialDecree => 25,
        EffectType::TranscendentAura => 20,
    }
}

/// Per-type particle caps, with optional overrides from settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTable {
    default_max: usize,
    overrides: BTreeMap<EffectType, usize>,
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self {
            default_max: DEFAULT_MAX,
            overrides: BTreeMap::new(),
        }
    }
}

impl BudgetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap for unknown tags
    pub fn with_default_max(mut self, max: usize) -> Self {
        self.default_max = max;
        self
    }

    pub fn with_override(mut self, effect: EffectType, max: usize) -> Self {
        self.overrides.insert(effect, max);
        self
    }

    /// Maximum particle count for an effect; `None` is an unrecognized tag.
    /// Never below 1.
    pub fn per_type_max(&self, effect: Option<EffectType>) -> usize {
        let max = match effect {
            Some(effect) => self
                .overrides
                .get(&effect)
                .copied()
                .unwrap_or_else(|| default_max(effect)),
            None => self.default_max,
        };
        max.max(1)
    }

    /// `min(max(requested, 0), per_type_max)`
    pub fn clamp_count(&self, effect: Option<EffectType>, requested: i64) -> usize {
        let requested = usize::try_from(requested.max(0)).unwrap_or(usize::MAX);
        requested.min(self.per_type_max(effect))
    }

    /// Clamp by raw tag, resolving legacy and unknown tags
    pub fn clamp_tag(&self, tag: &str, requested: i64) -> usize {
        self.clamp_count(EffectType::lookup(tag), requested)
    }
}

/// Clamp against the built-in table
pub fn clamp_count(tag: &str, requested: i64) -> usize {
    BudgetTable::default().clamp_tag(tag, requested)
}
