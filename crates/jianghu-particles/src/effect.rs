//! Effect types: the closed set of faction visual themes

use jianghu_core::JianghuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One faction/theme visual category.
///
/// Each type has a canonical kebab-case tag and the legacy faction tag the
/// lore data still uses; both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectType {
    FallingPetal,
    InkWash,
    Lightning,
    Flame,
    FrostSnow,
    PoisonCloud,
    GoldenLight,
    WaterRipple,
    WindStream,
    FallenLeaf,
    BloodMist,
    ShadowBlade,
    Mist,
    StarFormation,
    SoundWave,
    ImperialSword,
    MercyLight,
    ThunderDragon,
    SerpentSword,
    HeavySword,
    Taiji,
    DragonPalm,
    BeastAura,
    GreenwoodAura,
    TranscendentAura,
    ImperialDecree,
    DarkFlame,
}

/// Motion family, which fixes where particles enter the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Enter above the frame and fall through it
    Falling,
    /// Enter at or below the lower edge and rise
    Rising,
    /// Enter from the left edge and sweep across
    Sweeping,
    /// Appear inside the frame and drift
    Drifting,
    /// Mixed bolts, drifting dragon qi and in-frame sparks
    Storm,
}

impl EffectType {
    pub const ALL: [EffectType; 27] = [
        EffectType::FallingPetal,
        EffectType::InkWash,
        EffectType::Lightning,
        EffectType::Flame,
        EffectType::FrostSnow,
        EffectType::PoisonCloud,
        EffectType::GoldenLight,
        EffectType::WaterRipple,
        EffectType::WindStream,
        EffectType::FallenLeaf,
        EffectType::BloodMist,
        EffectType::ShadowBlade,
        EffectType::Mist,
        EffectType::StarFormation,
        EffectType::SoundWave,
        EffectType::ImperialSword,
        EffectType::MercyLight,
        EffectType::ThunderDragon,
        EffectType::SerpentSword,
        EffectType::HeavySword,
        EffectType::Taiji,
        EffectType::DragonPalm,
        EffectType::BeastAura,
        EffectType::GreenwoodAura,
        EffectType::TranscendentAura,
        EffectType::ImperialDecree,
        EffectType::DarkFlame,
    ];

    /// Canonical tag, e.g. `"falling-petal"`
    pub fn tag(self) -> &'static str {
        match self {
            EffectType::FallingPetal => "falling-petal",
            EffectType::InkWash => "ink-wash",
            EffectType::Lightning => "lightning",
            EffectType::Flame => "flame",
            EffectType::FrostSnow => "frost-snow",
            EffectType::PoisonCloud => "poison-cloud",
            EffectType::GoldenLight => "golden-light",
            EffectType::WaterRipple => "water-ripple",
            EffectType::WindStream => "wind-stream",
            EffectType::FallenLeaf => "fallen-leaf",
            EffectType::BloodMist => "blood-mist",
            EffectType::ShadowBlade => "shadow-blade",
            EffectType::Mist => "mist",
            EffectType::StarFormation => "star-formation",
            EffectType::SoundWave => "sound-wave",
            EffectType::ImperialSword => "imperial-sword",
            EffectType::MercyLight => "mercy-light",
            EffectType::ThunderDragon => "thunder-dragon",
            EffectType::SerpentSword => "serpent-sword",
            EffectType::HeavySword => "heavy-sword",
            EffectType::Taiji => "taiji",
            EffectType::DragonPalm => "dragon-palm",
            EffectType::BeastAura => "beast-aura",
            EffectType::GreenwoodAura => "greenwood-aura",
            EffectType::TranscendentAura => "transcendent-aura",
            EffectType::ImperialDecree => "imperial-decree",
            EffectType::DarkFlame => "dark-flame",
        }
    }

    /// Tag used by the faction lore data
    pub fn legacy_tag(self) -> &'static str {
        match self {
            EffectType::FallingPetal => "꽃잎",
            EffectType::InkWash => "수묵",
            EffectType::Lightning => "번개",
            EffectType::Flame => "화염",
            EffectType::FrostSnow => "빙설",
            EffectType::PoisonCloud => "독기",
            EffectType::GoldenLight => "금광",
            EffectType::WaterRipple => "물결",
            EffectType::WindStream => "바람",
            EffectType::FallenLeaf => "낙엽",
            EffectType::BloodMist => "혈기",
            EffectType::ShadowBlade => "암영",
            EffectType::Mist => "안개",
            EffectType::StarFormation => "성진",
            EffectType::SoundWave => "음파",
            EffectType::ImperialSword => "제왕검기",
            EffectType::MercyLight => "명왕빛",
            EffectType::ThunderDragon => "운룡뇌전",
            EffectType::SerpentSword => "사일검",
            EffectType::HeavySword => "중검",
            EffectType::Taiji => "태극",
            EffectType::DragonPalm => "항룡장기",
            EffectType::BeastAura => "야수기",
            EffectType::GreenwoodAura => "녹림기",
            EffectType::TranscendentAura => "초월기",
            EffectType::ImperialDecree => "황권",
            EffectType::DarkFlame => "흑염",
        }
    }

    pub fn category(self) -> Category {
        match self {
            EffectType::FallingPetal
            | EffectType::FallenLeaf
            | EffectType::FrostSnow
            | EffectType::DragonPalm
            | EffectType::GreenwoodAura => Category::Falling,
            EffectType::SerpentSword
            | EffectType::HeavySword
            | EffectType::ImperialSword
            | EffectType::Flame
            | EffectType::DarkFlame
            | EffectType::BloodMist
            | EffectType::PoisonCloud
            | EffectType::BeastAura
            | EffectType::ImperialDecree => Category::Rising,
            EffectType::WindStream => Category::Sweeping,
            EffectType::Lightning | EffectType::ThunderDragon => Category::Storm,
            EffectType::Taiji
            | EffectType::GoldenLight
            | EffectType::MercyLight
            | EffectType::WaterRipple
            | EffectType::StarFormation
            | EffectType::Mist
            | EffectType::ShadowBlade
            | EffectType::TranscendentAura
            | EffectType::InkWash
            | EffectType::SoundWave => Category::Drifting,
        }
    }

    /// Resolve a canonical or legacy tag. Matching is exact; unknown tags
    /// yield `None`.
    pub fn lookup(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.tag() == tag || e.legacy_tag() == tag)
    }

    /// Map a scenario's ambient particle keyword to an effect type.
    ///
    /// Scenarios only name a handful of keywords; anything else gets petals.
    pub fn from_scene_particle(keyword: &str) -> Self {
        match keyword.trim() {
            "embers" => EffectType::Flame,
            "snow" => EffectType::FrostSnow,
            "ink" => EffectType::InkWash,
            _ => EffectType::FallingPetal,
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EffectType {
    type Err = JianghuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| JianghuError::UnknownEffect(s.to_string()))
    }
}
