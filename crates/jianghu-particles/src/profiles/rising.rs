//! Types that rise from the lower part of the frame

use super::{looping, opacity, rotate, scale, x_px, y_vh, ProfileDraft, ResolveContext};
use crate::params::DerivedParameters;
use crate::rand::coin;
use crate::shapes::ShapeFamily;
use jianghu_animation::{Easing, InitialStyle};

/// Fast launch, long settle
const THRUST: Easing = Easing::CubicBezier([0.1, 0.0, 0.2, 1.0]);

/// Color codes of the tiger faction palette
const TIGER_CODES: [&str; 2] = ["D35400", "E74C3C"];

fn from_below(p: &DerivedParameters, top: f64, z_index: i32) -> InitialStyle {
    InitialStyle::at(p.spread_position, top).with_z_index(z_index)
}

pub(super) fn serpent_sword(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let angle = (s.s2 - 0.5) * 25.0;
    ProfileDraft {
        initial: from_below(p, 70.0 + s.s5 * 25.0, 16),
        tracks: vec![
            y_vh(vec![0.0, -85.0]),
            rotate(vec![angle, angle + (s.s3 - 0.5) * 8.0]),
            opacity(vec![0.0, 0.95, 0.9, 0.6, 0.0]),
            scale(vec![0.3, 1.2, 1.0, 0.4]),
        ],
        transition: looping(
            0.6 + s.s1 * 0.4,
            THRUST,
            s.s1 * 0.3 + s.s4 * 0.2,
            0.15 + s.s3 * 0.4,
        ),
        shape: ctx.shape(ShapeFamily::SerpentSwordAura, p.shape_variant, p.size * 1.2),
    }
}

/// Either a slow heavy blade or a wide pressure wave
pub(super) fn heavy_sword(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let initial = from_below(p, 65.0 + s.s5 * 30.0, 16);
    let delay = s.s1 * 0.3 + s.s4 * 0.2;

    if s.s1 > 0.4 {
        let angle = (s.s2 - 0.5) * 5.0;
        ProfileDraft {
            initial,
            tracks: vec![
                y_vh(vec![0.0, -80.0]),
                rotate(vec![angle, angle]),
                opacity(vec![0.0, 0.9, 0.85, 0.6, 0.0]),
                scale(vec![0.4, 1.4, 1.2, 0.5]),
            ],
            transition: looping(
                1.8 + s.s1,
                Easing::CubicBezier([0.4, 0.0, 0.2, 1.0]),
                delay,
                0.3 + s.s3 * 0.6,
            ),
            shape: ctx.shape(ShapeFamily::HeavySwordAura, 0, p.size * 1.3),
        }
    } else {
        ProfileDraft {
            initial,
            tracks: vec![
                y_vh(vec![0.0, -60.0]),
                opacity(vec![0.0, 0.7, 0.65, 0.0]),
                scale(vec![0.8, 1.3, 1.1]),
            ],
            transition: looping(2.5 + s.s1, Easing::EaseOut, delay, 0.4 + s.s4 * 0.8),
            shape: ctx.shape(ShapeFamily::SwordPressure, 0, p.size * 1.2),
        }
    }
}

pub(super) fn imperial_sword(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let angle = (s.s2 - 0.5) * 12.0;
    ProfileDraft {
        initial: from_below(p, 60.0 + s.s5 * 35.0, 17),
        tracks: vec![
            y_vh(vec![0.0, -100.0]),
            rotate(vec![angle, angle]),
            opacity(vec![0.0, 0.95, 0.9, 0.6, 0.0]),
            scale(vec![0.2, 1.5, 1.2, 0.3]),
        ],
        transition: looping(
            0.5 + s.s1 * 0.3,
            THRUST,
            s.s1 * 0.4 + s.s4 * 0.3,
            0.2 + s.s3 * 0.5,
        ),
        shape: ctx.shape(ShapeFamily::ImperialSwordAura, 0, p.size * 1.2),
    }
}

pub(super) fn flame(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 18.0 + s.s2 * 30.0;
    let dir = coin(s.s3);
    let tiger = TIGER_CODES.iter().any(|code| ctx.color.contains_code(code));
    let shape = if tiger {
        ctx.shape(ShapeFamily::TigerFlame, 0, p.size * 0.9)
    } else {
        ctx.shape(ShapeFamily::DarkFlame, p.shape_variant, p.size * 0.9)
    };
    ProfileDraft {
        initial: from_below(p, 88.0 + s.s5 * 10.0, 14),
        tracks: vec![
            y_vh(vec![0.0, -70.0]),
            x_px(vec![0.0, sway * dir, -sway * 0.4 * dir]),
            scale(vec![p.size * 0.3, p.size * 1.1, p.size * 0.15]),
            opacity(vec![0.0, 0.6, 0.45, 0.0]),
        ],
        transition: looping(
            3.5 + s.s1 * 2.5,
            Easing::EaseOut,
            s.s1 * 0.5 + s.s4 * 0.3,
            0.3 + s.s4 * 0.6,
        ),
        shape,
    }
}

pub(super) fn blood_mist(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let drift = 20.0 + s.s2 * 35.0;
    ProfileDraft {
        initial: from_below(p, 88.0 + s.s5 * 8.0, 14),
        tracks: vec![
            y_vh(vec![0.0, -75.0]),
            x_px(vec![0.0, (s.s3 - 0.5) * drift, (s.s4 - 0.5) * drift * 1.05]),
            scale(vec![p.size * 0.3, p.size * 1.2, p.size * 1.5]),
            opacity(vec![0.0, 0.5, 0.3, 0.0]),
        ],
        transition: looping(
            4.0 + s.s1 * 3.0,
            Easing::EaseOut,
            s.s1 * 0.5 + s.s3 * 0.3,
            0.5 + s.s5,
        ),
        shape: ctx.shape(ShapeFamily::BloodMist, p.shape_variant, p.size),
    }
}

/// Mostly slow clouds, with the occasional fast needle
pub(super) fn poison_cloud(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let top = 70.0 + s.s5 * 25.0;
    let delay = s.s1 * 0.3 + s.s2 * 0.2;

    if s.s1 > 0.85 {
        let angle = (s.s2 - 0.5) * 35.0;
        ProfileDraft {
            initial: from_below(p, top, 15),
            tracks: vec![
                y_vh(vec![0.0, -75.0]),
                rotate(vec![angle, angle]),
                opacity(vec![0.0, 0.85, 0.75, 0.0]),
                scale(vec![0.5, 1.2, 0.8]),
            ],
            transition: looping(0.6 + s.s2 * 0.3, Easing::EaseOut, delay, 0.3 + s.s5 * 0.5),
            shape: ctx.shape(ShapeFamily::PoisonCloud, 1, p.size),
        }
    } else {
        let spread = 28.0 + s.s2 * 40.0;
        ProfileDraft {
            initial: from_below(p, top, 14),
            tracks: vec![
                y_vh(vec![0.0, -55.0]),
                x_px(vec![0.0, (s.s3 - 0.5) * spread, (s.s4 - 0.5) * spread * 1.05]),
                scale(vec![0.3, 1.0, 1.4]),
                opacity(vec![0.0, 0.55, 0.4, 0.0]),
            ],
            transition: looping(3.0 + s.s1 * 1.5, Easing::EaseOut, delay, 0.4 + s.s5 * 0.6),
            shape: ctx.shape(ShapeFamily::PoisonCloud, p.shape_variant, p.size),
        }
    }
}

pub(super) fn beast_aura(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 45.0 + s.s2 * 70.0;
    ProfileDraft {
        initial: from_below(p, 85.0 + s.s5 * 12.0, 15),
        tracks: vec![
            y_vh(vec![0.0, -110.0]),
            x_px(vec![0.0, sway * coin(s.s3) * 0.8]),
            opacity(vec![0.0, 0.9, 0.85, 0.55, 0.0]),
            scale(vec![0.4, 1.3, 1.0, 0.35]),
        ],
        transition: looping(
            3.0 + s.s1 * 2.0,
            Easing::CubicBezier([0.2, 0.8, 0.4, 1.0]),
            s.s1 * 0.5 + s.s2 * 0.3,
            0.4 + s.s4 * 0.8,
        ),
        shape: ctx.shape(ShapeFamily::BeastMark, p.shape_variant, p.size),
    }
}

pub(super) fn imperial_decree(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    ProfileDraft {
        initial: from_below(p, 90.0 + s.s5 * 8.0, 14),
        tracks: vec![
            y_vh(vec![0.0, -105.0]),
            opacity(vec![0.0, 0.9, 0.85, 0.55, 0.0]),
            scale(vec![0.3, 1.1, 0.9]),
        ],
        transition: looping(
            5.0 + s.s1 * 3.0,
            Easing::EaseOut,
            s.s1 * 0.6 + s.s2 * 0.4,
            0.6 + s.s4 * 1.2,
        ),
        shape: ctx.shape(ShapeFamily::ImperialRegalia, p.shape_variant, p.size),
    }
}

pub(super) fn dark_flame(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let flicker = 25.0 + s.s2 * 40.0;
    ProfileDraft {
        initial: from_below(p, 90.0 + s.s5 * 8.0, 15),
        tracks: vec![
            y_vh(vec![0.0, -95.0]),
            x_px(vec![
                0.0,
                flicker * 0.45 * coin(s.s3),
                -flicker * 0.35,
                flicker * 0.25,
            ]),
            scale(vec![0.4, 1.2, 0.9, 0.3]),
            opacity(vec![0.0, 0.85, 0.75, 0.4, 0.0]),
        ],
        transition: looping(
            2.5 + s.s1 * 1.5,
            Easing::EaseOut,
            s.s1 * 0.4 + s.s4 * 0.3,
            0.3 + s.s5 * 0.6,
        ),
        shape: ctx.shape(ShapeFamily::DarkFlame, p.shape_variant, p.size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jianghu_core::{ParticleKey, ThemeColor};

    fn index_where(pred: impl Fn(&DerivedParameters) -> bool) -> DerivedParameters {
        (0..1000)
            .map(DerivedParameters::derive)
            .find(|p| pred(p))
            .unwrap()
    }

    #[test]
    fn flame_picks_tiger_shape_from_palette() {
        let key = ParticleKey::new("flame", 1);
        let p = DerivedParameters::derive(1);

        let tiger = ThemeColor::from("#d35400");
        let draft = flame(&p, &ResolveContext { color: &tiger, key: &key });
        assert_eq!(draft.shape.family, ShapeFamily::TigerFlame);

        let plain = ThemeColor::from("#8B0000");
        let draft = flame(&p, &ResolveContext { color: &plain, key: &key });
        assert_eq!(draft.shape.family, ShapeFamily::DarkFlame);
    }

    #[test]
    fn heavy_sword_has_two_forms() {
        let color = ThemeColor::default();
        let key = ParticleKey::new("heavy-sword", 0);
        let ctx = ResolveContext { color: &color, key: &key };

        let blade = heavy_sword(&index_where(|p| p.samples.s1 > 0.4), &ctx);
        assert_eq!(blade.shape.family, ShapeFamily::HeavySwordAura);
        assert_eq!(blade.tracks.len(), 4);

        let wave = heavy_sword(&index_where(|p| p.samples.s1 <= 0.4), &ctx);
        assert_eq!(wave.shape.family, ShapeFamily::SwordPressure);
        assert_eq!(wave.transition.ease, Easing::EaseOut);
    }

    #[test]
    fn poison_needles_are_rare_and_fast() {
        let color = ThemeColor::default();
        let key = ParticleKey::new("poison-cloud", 0);
        let ctx = ResolveContext { color: &color, key: &key };

        let needle = poison_cloud(&index_where(|p| p.samples.s1 > 0.85), &ctx);
        assert_eq!(needle.shape.variant, 1);
        assert!(needle.transition.duration < 1.0);

        let needles = (0..200)
            .map(DerivedParameters::derive)
            .filter(|p| p.samples.s1 > 0.85)
            .count();
        assert!(needles < 100);
    }
}
