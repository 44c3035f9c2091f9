//! Shape factory: opaque descriptors for each particle's visual
//!
//! The engine never draws. A shape is a family plus a sub-variant, a size
//! multiplier and the theme color; the host maps it to an SVG, sprite or
//! mesh of the given base extent.

use jianghu_core::{ParticleKey, ThemeColor};
use serde::{Deserialize, Serialize};

/// Visual family of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeFamily {
    PlumPetal,
    TaijiSymbol,
    TaijiStream,
    BuddhaLight,
    LightningBolt,
    DragonQi,
    SerpentSwordAura,
    HeavySwordAura,
    SwordPressure,
    ImperialSwordAura,
    MercyLight,
    DarkFlame,
    TigerFlame,
    BloodMist,
    PoisonCloud,
    FallenLeaf,
    WindblownLeaf,
    WaterRipple,
    StarFormation,
    WindStream,
    MistCloud,
    ShadowBlade,
    IceCrystal,
    BeastMark,
    GreenwoodLeaf,
    DaoAura,
    ImperialRegalia,
}

impl ShapeFamily {
    /// Named sub-variants, in selection order
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            ShapeFamily::PlumPetal => &["full-bloom", "single-petal", "bud", "petal-slash"],
            ShapeFamily::TaijiSymbol => &["yin-yang"],
            ShapeFamily::TaijiStream => &["stream"],
            ShapeFamily::BuddhaLight => &["halo", "mantra", "vajra", "lotus"],
            ShapeFamily::LightningBolt => &["main-bolt", "branch", "spark"],
            ShapeFamily::DragonQi => &["dragon-qi"],
            ShapeFamily::SerpentSwordAura => &["thrust", "serpent", "multi-thrust"],
            ShapeFamily::HeavySwordAura => &["heavy-blade"],
            ShapeFamily::SwordPressure => &["pressure-wave"],
            ShapeFamily::ImperialSwordAura => &["sky-piercer"],
            ShapeFamily::MercyLight => &["star", "halo", "slash"],
            ShapeFamily::DarkFlame => &["main", "scatter", "wave"],
            ShapeFamily::TigerFlame => &["tiger"],
            ShapeFamily::BloodMist => &["mist", "rise", "drop"],
            ShapeFamily::PoisonCloud => &["cloud", "needle", "ripple"],
            ShapeFamily::FallenLeaf => &["dry", "dragon", "dust"],
            ShapeFamily::WindblownLeaf => &["maple", "willow", "ginkgo", "oak"],
            ShapeFamily::WaterRipple => &["ripple"],
            ShapeFamily::StarFormation => &["star", "bagua", "array"],
            ShapeFamily::WindStream => &["gust"],
            ShapeFamily::MistCloud => &["cloud"],
            ShapeFamily::ShadowBlade => &["shadow", "dagger", "fade"],
            ShapeFamily::IceCrystal => &["snowflake", "shard", "frost"],
            ShapeFamily::BeastMark => &["eye", "claw", "roar"],
            ShapeFamily::GreenwoodLeaf => &["leaf", "dust"],
            ShapeFamily::DaoAura => &["dao", "qi-flow", "immortal-star"],
            ShapeFamily::ImperialRegalia => &["dragon-scale", "seal", "radiance"],
        }
    }

    pub fn variant_count(self) -> u8 {
        self.variants().len() as u8
    }

    /// Width and height in CSS pixels at size 1.0
    pub fn base_extent(self, variant: u8) -> (f64, f64) {
        let extents: &[(f64, f64)] = match self {
            ShapeFamily::PlumPetal => &[(18.0, 18.0), (12.0, 14.0), (10.0, 12.0), (30.0, 8.0)],
            ShapeFamily::TaijiSymbol => &[(28.0, 28.0)],
            ShapeFamily::TaijiStream => &[(50.0, 20.0)],
            ShapeFamily::BuddhaLight => &[(30.0, 30.0), (24.0, 24.0), (8.0, 35.0), (22.0, 15.0)],
            ShapeFamily::LightningBolt => &[(25.0, 70.0), (35.0, 60.0), (15.0, 15.0)],
            ShapeFamily::DragonQi => &[(60.0, 25.0)],
            ShapeFamily::SerpentSwordAura => &[(6.0, 80.0), (40.0, 60.0), (20.0, 70.0)],
            ShapeFamily::HeavySwordAura => &[(12.0, 90.0)],
            ShapeFamily::SwordPressure => &[(50.0, 30.0)],
            ShapeFamily::ImperialSwordAura => &[(8.0, 100.0)],
            ShapeFamily::MercyLight => &[(22.0, 22.0), (25.0, 25.0), (35.0, 10.0)],
            ShapeFamily::DarkFlame => &[(20.0, 35.0), (25.0, 25.0), (40.0, 15.0)],
            ShapeFamily::TigerFlame => &[(22.0, 32.0)],
            ShapeFamily::BloodMist => &[(40.0, 40.0), (15.0, 50.0), (12.0, 16.0)],
            ShapeFamily::PoisonCloud => &[(45.0, 30.0), (4.0, 35.0), (30.0, 30.0)],
            ShapeFamily::FallenLeaf => &[(16.0, 20.0), (35.0, 20.0), (20.0, 20.0)],
            ShapeFamily::WindblownLeaf => &[(20.0, 22.0), (8.0, 28.0), (22.0, 20.0), (16.0, 24.0)],
            ShapeFamily::WaterRipple => &[(40.0, 25.0)],
            ShapeFamily::StarFormation => &[(18.0, 18.0), (22.0, 22.0), (30.0, 30.0)],
            ShapeFamily::WindStream => &[(55.0, 20.0)],
            ShapeFamily::MistCloud => &[(50.0, 35.0)],
            ShapeFamily::ShadowBlade => &[(18.0, 18.0), (5.0, 30.0), (15.0, 25.0)],
            ShapeFamily::IceCrystal => &[(18.0, 18.0), (10.0, 20.0), (15.0, 15.0)],
            ShapeFamily::BeastMark => &[(22.0, 18.0)],
            ShapeFamily::GreenwoodLeaf => &[(15.0, 20.0)],
            ShapeFamily::DaoAura => &[(30.0, 30.0)],
            ShapeFamily::ImperialRegalia => &[(25.0, 30.0)],
        };
        // Single-entry tables share one extent across every variant
        extents[variant as usize % extents.len()]
    }

    /// Stable numeric id for packed instance data
    pub fn id(self) -> u32 {
        self as u32
    }
}

/// A concrete shape for one particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub family: ShapeFamily,
    /// Always below `family.variant_count()`
    pub variant: u8,
    /// Multiplier on the base extent
    pub size: f64,
    pub color: ThemeColor,
    /// Prefix for gradient ids inside the shape
    pub gradient_id: String,
}

impl ShapeSpec {
    /// Build a shape, wrapping `variant` into the family's range
    pub fn new(
        family: ShapeFamily,
        variant: u8,
        size: f64,
        color: &ThemeColor,
        key: &ParticleKey,
    ) -> Self {
        Self {
            family,
            variant: variant % family.variant_count(),
            size,
            color: color.clone(),
            gradient_id: key.gradient_id(),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        self.family.variants()[self.variant as usize]
    }

    /// Rendered width and height in CSS pixels
    pub fn extent(&self) -> (f64, f64) {
        let (w, h) = self.family.base_extent(self.variant);
        (w * self.size, h * self.size)
    }
}
