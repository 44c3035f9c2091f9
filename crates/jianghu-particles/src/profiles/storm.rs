//! Lightning and thunder-dragon: bolts, dragon qi and sparks

use super::{
    looping, opacity, rotate, scale, scale_x, scale_y, x_px, y_px, y_vh, ProfileDraft,
    ResolveContext,
};
use crate::params::DerivedParameters;
use crate::shapes::ShapeFamily;
use jianghu_animation::{Easing, InitialStyle};

/// Which of the three storm forms a particle takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StormForm {
    Bolt,
    Dragon,
    Spark,
}

impl StormForm {
    /// 25% bolts, 45% dragon qi, 30% sparks
    pub(crate) fn pick(p: &DerivedParameters) -> Self {
        match p.samples.s1 {
            r if r < 0.25 => StormForm::Bolt,
            r if r < 0.7 => StormForm::Dragon,
            _ => StormForm::Spark,
        }
    }
}

pub(super) fn storm(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    match StormForm::pick(p) {
        StormForm::Bolt => bolt(p, ctx),
        StormForm::Dragon => dragon(p, ctx),
        StormForm::Spark => spark(p, ctx),
    }
}

/// A strike from just above the frame down three quarters of its height
fn bolt(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let left = ((s.s1 + s.s2 + s.s3) % 1.0) * 100.0;
    ProfileDraft {
        initial: InitialStyle::at(left, -5.0).with_z_index(20),
        tracks: vec![
            y_vh(vec![0.0, 75.0]),
            opacity(vec![0.0, 1.0, 0.9, 0.0]),
            scale_y(vec![0.3, 1.5, 1.2, 0.4]),
            scale_x(vec![0.7 + s.s2 * 0.3, 1.2, 1.0, 0.5]),
        ],
        transition: looping(
            0.4 + s.s2 * 0.25,
            Easing::EaseIn,
            s.s1 * 3.0 + s.s4 * 2.0,
            2.0 + s.s3 * 4.0,
        ),
        shape: ctx.shape(ShapeFamily::LightningBolt, p.shape_variant % 3, p.size * 1.3),
    }
}

fn dragon(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let left = ((s.s2 + s.s4) % 1.0) * 90.0 + 5.0;
    ProfileDraft {
        initial: InitialStyle::at(left, 10.0 + s.s2 * 70.0).with_z_index(15),
        tracks: vec![
            x_px(vec![0.0, 100.0 + s.s3 * 80.0]),
            y_px(vec![0.0, (s.s4 - 0.5) * 45.0, (s.s5 - 0.5) * 25.0]),
            opacity(vec![0.0, 0.6, 0.55, 0.35, 0.0]),
            scale_x(vec![0.9, 1.35, 1.15, 0.8]),
            scale_y(vec![1.0, 1.1, 1.0, 0.9]),
        ],
        transition: looping(
            3.0 + s.s2 * 2.0,
            Easing::EaseInOut,
            s.s2 * 3.0 + s.s5 * 2.0,
            1.2 + s.s5 * 2.0,
        ),
        shape: ctx.shape(ShapeFamily::DragonQi, 0, p.size * 1.1),
    }
}

fn spark(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let left = ((s.s3 + s.s5) % 1.0) * 95.0 + 2.5;
    ProfileDraft {
        initial: InitialStyle::at(left, 10.0 + s.s2 * 75.0).with_z_index(17),
        tracks: vec![
            scale(vec![0.0, p.size * 1.25, p.size * 0.85, p.size * 1.1, 0.0]),
            opacity(vec![0.0, 0.9, 0.75, 0.85, 0.0]),
            rotate(vec![0.0, 45.0, -30.0, 20.0, 0.0]),
        ],
        transition: looping(
            0.5 + s.s2 * 0.35,
            Easing::EaseInOut,
            s.s3 * 4.0 + s.s6 * 2.0,
            0.8 + s.s4 * 2.5,
        ),
        shape: ctx.shape(ShapeFamily::LightningBolt, 2, p.size * 0.9),
    }
}
