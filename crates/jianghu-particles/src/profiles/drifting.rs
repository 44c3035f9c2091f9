//! Types that appear in place, drift a little and fade

use super::{looping, opacity, rotate, scale, x_px, y_px, ProfileDraft, ResolveContext};
use crate::params::DerivedParameters;
use crate::rand::coin;
use crate::shapes::ShapeFamily;
use jianghu_animation::{Easing, InitialStyle};

/// Symbols spinning slowly, or streams of qi flowing sideways
pub(super) fn taiji(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let initial = InitialStyle::at(
        5.0 + ((s.s1 + s.s3 + s.s5) % 1.0) * 90.0,
        8.0 + ((s.s2 + s.s4) % 1.0) * 78.0,
    )
    .with_z_index(12);
    let transition = looping(
        7.0 + s.s2 * 4.0,
        Easing::EaseInOut,
        s.s1 * 0.5 + s.s6 * 0.3,
        0.8 + s.s3 * 1.5,
    );

    if s.s1 > 0.55 {
        let float = 20.0 + s.s3 * 35.0;
        ProfileDraft {
            initial,
            tracks: vec![
                y_px(vec![0.0, -float, 0.0, float * 0.4, 0.0]),
                x_px(vec![0.0, float * 0.2, 0.0, -float * 0.15, 0.0]),
                rotate(vec![0.0, 360.0 * coin(s.s5)]),
                scale([0.4, 0.7, 0.6, 0.75, 0.4].map(|k| p.size * k).to_vec()),
                opacity(vec![0.0, 0.45, 0.4, 0.45, 0.0]),
            ],
            transition,
            shape: ctx.shape(ShapeFamily::TaijiSymbol, 0, p.size * 0.7),
        }
    } else {
        ProfileDraft {
            initial,
            tracks: vec![
                x_px(vec![0.0, 50.0 + s.s4 * 40.0]),
                y_px(vec![0.0, (s.s5 - 0.5) * 35.0]),
                opacity(vec![0.0, 0.5, 0.45, 0.0]),
                scale(vec![0.8, 1.1, 0.9]),
            ],
            transition,
            shape: ctx.shape(ShapeFamily::TaijiStream, 0, p.size * 0.85),
        }
    }
}

pub(super) fn golden_light(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let dx = (s.s4 - 0.5) * 50.0;
    let dy = (s.s5 - 0.5) * 50.0;
    let shape = ctx.shape(ShapeFamily::BuddhaLight, p.shape_variant, p.size * 0.9);
    // Mantra glyphs stay upright
    let sway = if shape.variant_name() == "mantra" {
        vec![0.0, 0.0]
    } else {
        let d = coin(s.s6);
        vec![0.0, 15.0 * d, -15.0 * d, 0.0]
    };
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 5.0 + s.s2 * 85.0),
        tracks: vec![
            x_px(vec![0.0, dx * 0.5, dx]),
            y_px(vec![0.0, dy * 0.5, dy]),
            scale(vec![0.0, p.size * 0.9, p.size, 0.0]),
            opacity(vec![0.0, 0.55, 0.5, 0.0]),
            rotate(sway),
        ],
        transition: looping(
            3.0 + s.s3 * 2.0,
            Easing::EaseInOut,
            s.s1 * 0.5 + s.s2 * 0.3,
            0.5 + s.s4,
        ),
        shape,
    }
}

pub(super) fn mercy_light(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let dx = (s.s3 - 0.5) * 70.0;
    let dy = (s.s4 - 0.5) * 70.0;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 8.0 + s.s2 * 78.0).with_z_index(13),
        tracks: vec![
            x_px(vec![0.0, dx * 0.5, dx]),
            y_px(vec![0.0, dy * 0.5, dy]),
            scale(vec![0.0, p.size, p.size * 0.4]),
            opacity(vec![0.0, 0.6, 0.0]),
            rotate(vec![0.0, 80.0 * coin(s.s5)]),
        ],
        transition: looping(
            2.8 + s.s1 * 1.8,
            Easing::EaseOut,
            s.s1 * 0.5 + s.s5 * 0.3,
            0.4 + s.s5 * 0.8,
        ),
        shape: ctx.shape(ShapeFamily::MercyLight, p.shape_variant, p.size * 0.9),
    }
}

pub(super) fn water_ripple(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let drift = 80.0 + s.s2 * 60.0;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 10.0 + s.s2 * 70.0).with_z_index(12),
        tracks: vec![
            x_px(vec![0.0, drift]),
            y_px(vec![0.0, (s.s3 - 0.5) * 40.0, (s.s4 - 0.5) * 30.0]),
            opacity(vec![0.0, 0.55, 0.5, 0.0]),
            scale(vec![0.6, 1.2, 1.0]),
        ],
        transition: looping(
            3.0 + s.s1 * 2.0,
            Easing::EaseInOut,
            s.s1 * 0.5 + s.s5 * 0.3,
            0.4 + s.s5 * 0.8,
        ),
        shape: ctx.shape(ShapeFamily::WaterRipple, 0, p.size * 0.9),
    }
}

pub(super) fn star_formation(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 8.0 + s.s2 * 80.0).with_z_index(13),
        tracks: vec![
            scale(vec![0.0, p.size, p.size * 0.8, p.size * 1.1, 0.0]),
            opacity(vec![0.0, 0.75, 0.65, 0.7, 0.0]),
            rotate(vec![0.0, (30.0 + s.s3 * 20.0) * coin(s.s4)]),
        ],
        transition: looping(
            1.5 + s.s1,
            Easing::EaseInOut,
            s.s1 * 0.4 + s.s4 * 0.3,
            0.4 + s.s3 * 0.8,
        ),
        shape: ctx.shape(ShapeFamily::StarFormation, p.shape_variant, p.size * 0.9),
    }
}

pub(super) fn mist(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let drift = 50.0 + s.s2 * 70.0;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 12.0 + s.s2 * 65.0).with_z_index(11),
        tracks: vec![
            x_px(vec![0.0, drift * 0.5, drift]),
            y_px(vec![0.0, (s.s3 - 0.5) * 30.0, (s.s4 - 0.5) * 45.0]),
            scale(vec![0.0, p.size * 1.1, p.size * 1.7]),
            opacity(vec![0.0, 0.4, 0.2, 0.0]),
        ],
        transition: looping(
            4.0 + s.s1 * 2.5,
            Easing::EaseInOut,
            s.s1 * 0.5 + s.s3 * 0.4,
            0.5 + s.s5,
        ),
        shape: ctx.shape(ShapeFamily::MistCloud, 0, p.size * 0.9),
    }
}

pub(super) fn shadow_blade(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 10.0 + s.s2 * 78.0).with_z_index(12),
        tracks: vec![
            scale(vec![0.0, p.size, p.size * 1.2, 0.0]),
            opacity(vec![0.0, 0.65, 0.55, 0.0]),
            rotate(vec![35.0, 35.0 + 60.0 * coin(s.s6)]),
            x_px(vec![0.0, (s.s3 - 0.5) * 20.0]),
            y_px(vec![0.0, (s.s4 - 0.5) * 20.0]),
        ],
        transition: looping(
            1.2 + s.s1 * 0.7,
            Easing::EaseInOut,
            s.s1 * 0.5 + s.s5 * 0.3,
            0.4 + s.s5 * 0.8,
        ),
        shape: ctx.shape(ShapeFamily::ShadowBlade, p.shape_variant, p.size * 0.9),
    }
}

/// Gathers near the center of the frame
pub(super) fn transcendent(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    ProfileDraft {
        initial: InitialStyle::at(30.0 + s.s1 * 40.0, 20.0 + s.s2 * 60.0).with_z_index(12),
        tracks: vec![
            scale(vec![0.0, p.size * 1.3, p.size * 0.9]),
            opacity(vec![0.0, 0.8, 0.0]),
            rotate(vec![0.0, 200.0 * coin(s.s5)]),
        ],
        transition: looping(
            5.0 + s.s1 * 3.0,
            Easing::EaseInOut,
            s.s3 * 0.8,
            0.8 + s.s4 * 1.5,
        ),
        shape: ctx.shape(ShapeFamily::DaoAura, p.shape_variant, p.size),
    }
}

/// Faint washes that spread while fading. Sound waves share the motion.
pub(super) fn ink_wash(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let drift = 60.0 + s.s2 * 80.0;
    ProfileDraft {
        initial: InitialStyle::at(p.spread_position, 15.0 + s.s2 * 65.0),
        tracks: vec![
            x_px(vec![0.0, drift * 0.5, drift]),
            y_px(vec![0.0, (s.s3 - 0.5) * 30.0, (s.s4 - 0.5) * 45.0]),
            scale(vec![0.0, p.size, p.size * 1.6]),
            opacity(vec![0.0, 0.28, 0.12, 0.0]),
            rotate(vec![0.0, s.s5 * 25.0 - 12.0]),
        ],
        transition: looping(5.0 + s.s1 * 3.0, Easing::EaseInOut, 0.0, 1.0 + s.s5 * 2.5),
        shape: ctx.shape(ShapeFamily::WaterRipple, 0, p.size * 0.8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jianghu_animation::Property;
    use jianghu_core::{ParticleKey, ThemeColor};

    fn draft_for(
        resolver: fn(&DerivedParameters, &ResolveContext<'_>) -> ProfileDraft,
        index: usize,
    ) -> ProfileDraft {
        let color = ThemeColor::from("#FFD700");
        let key = ParticleKey::new("test", index);
        resolver(&DerivedParameters::derive(index), &ResolveContext { color: &color, key: &key })
    }

    #[test]
    fn mantra_glyphs_do_not_rotate() {
        for index in 0..100 {
            let draft = draft_for(golden_light, index);
            let rot = draft.tracks.iter().find(|t| t.property == Property::Rotate).unwrap();
            if draft.shape.variant_name() == "mantra" {
                assert!(rot.values.iter().all(|v| *v == 0.0));
            } else {
                assert_eq!(rot.values.len(), 4);
            }
        }
    }

    #[test]
    fn spins_go_both_ways() {
        let dirs: Vec<f64> = (0..40)
            .map(|i| {
                let draft = draft_for(transcendent, i);
                let rot = draft.tracks.iter().find(|t| t.property == Property::Rotate).unwrap();
                rot.values[1].signum()
            })
            .collect();
        assert!(dirs.contains(&1.0));
        assert!(dirs.contains(&-1.0));
    }

    #[test]
    fn taiji_symbol_returns_to_rest() {
        let p = (0..500)
            .map(DerivedParameters::derive)
            .find(|p| p.samples.s1 > 0.55)
            .unwrap();
        let draft = draft_for(taiji, p.index);
        assert_eq!(draft.shape.family, ShapeFamily::TaijiSymbol);
        let y = draft.tracks.iter().find(|t| t.property == Property::Y).unwrap();
        assert_eq!(y.first(), Some(0.0));
        assert_eq!(y.last(), Some(0.0));
    }

    #[test]
    fn transcendent_gathers_near_center() {
        for index in 0..50 {
            let left = draft_for(transcendent, index).initial.left;
            assert!((30.0..=70.0).contains(&left));
        }
    }
}
