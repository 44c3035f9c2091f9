//! Types that fall from above the frame and sway as they drop

use super::{looping, opacity, rotate, scale, x_px, y_vh, ProfileDraft, ResolveContext};
use crate::params::DerivedParameters;
use crate::rand::coin;
use crate::shapes::ShapeFamily;
use jianghu_animation::{Easing, InitialStyle};

/// Start between 5% and 15% above the top edge
fn above_frame(p: &DerivedParameters, z_index: i32) -> InitialStyle {
    InitialStyle::at(p.spread_position, -(p.samples.s5 * 10.0 + 5.0)).with_z_index(z_index)
}

pub(super) fn petal(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 70.0 + s.s2 * 100.0;
    let dir = coin(s.s3);
    let spin = s.s3 * 180.0;
    ProfileDraft {
        initial: above_frame(p, 14),
        tracks: vec![
            y_vh(vec![0.0, 125.0]),
            x_px(vec![0.0, sway * 0.35 * dir, -sway * 0.25, sway * 0.15 * dir]),
            rotate(vec![spin, spin + 480.0 * dir]),
            opacity(vec![0.0, 0.6, 0.55, 0.4, 0.0]),
            scale(vec![p.size * 0.7, p.size, p.size * 0.9, p.size * 0.65]),
        ],
        transition: looping(
            5.0 + s.s1 * 3.5,
            Easing::Linear,
            s.s1 * 0.8 + s.s2 * 0.5,
            0.5 + s.s4 * 1.5,
        ),
        shape: ctx.shape(ShapeFamily::PlumPetal, p.shape_variant, p.size),
    }
}

pub(super) fn fallen_leaf(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 50.0 + s.s2 * 80.0;
    let dir = coin(s.s3);
    ProfileDraft {
        initial: above_frame(p, 14),
        tracks: vec![
            y_vh(vec![0.0, 115.0]),
            x_px(vec![0.0, sway * 0.35 * dir, -sway * 0.2 * dir, sway * 0.15]),
            rotate(vec![s.s3 * 40.0, s.s3 * 40.0 + 320.0 * coin(s.s2)]),
            opacity(vec![0.0, 0.7, 0.65, 0.5, 0.0]),
            scale(vec![0.7, 1.1, 1.0, 0.8]),
        ],
        transition: looping(
            4.0 + s.s1 * 2.5,
            Easing::Linear,
            s.s1 * 0.6 + s.s2 * 0.4,
            0.5 + s.s4,
        ),
        shape: ctx.shape(ShapeFamily::FallenLeaf, p.shape_variant, p.size),
    }
}

/// Snow drifts steadily to one side instead of swaying
pub(super) fn frost_snow(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 40.0 + s.s2 * 60.0;
    ProfileDraft {
        initial: above_frame(p, 13),
        tracks: vec![
            y_vh(vec![0.0, 120.0]),
            x_px(vec![0.0, -sway * 0.35, -sway * 0.65, -sway * 0.95]),
            rotate(vec![0.0, 200.0 * coin(s.s3)]),
            opacity(vec![0.0, 0.7, 0.65, 0.5, 0.0]),
            scale(vec![0.6, 1.1, 1.0, 0.8]),
        ],
        transition: looping(
            4.0 + s.s1 * 2.5,
            Easing::Linear,
            s.s1 * 0.5 + s.s3 * 0.4,
            0.5 + s.s4,
        ),
        shape: ctx.shape(ShapeFamily::IceCrystal, p.shape_variant, p.size * 0.9),
    }
}

pub(super) fn dragon_palm(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 90.0 + s.s2 * 130.0;
    let dir = coin(s.s3);
    let spin = s.s3 * 180.0;
    ProfileDraft {
        initial: above_frame(p, 14),
        tracks: vec![
            y_vh(vec![0.0, 125.0]),
            x_px(vec![0.0, sway * 0.45 * dir, -sway * 0.35, sway * 0.25 * dir]),
            rotate(vec![spin, spin + 600.0 * dir]),
            opacity(vec![0.0, 0.8, 0.75, 0.55, 0.0]),
            scale(vec![0.5, 1.2, 1.1, 0.6]),
        ],
        transition: looping(
            4.0 + s.s1 * 3.0,
            Easing::Linear,
            s.s1 * 0.6 + s.s2 * 0.4,
            0.4 + s.s4,
        ),
        shape: ctx.shape(ShapeFamily::WindblownLeaf, p.shape_variant, p.size),
    }
}

pub(super) fn greenwood(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let sway = 60.0 + s.s2 * 90.0;
    ProfileDraft {
        initial: above_frame(p, 13),
        tracks: vec![
            y_vh(vec![0.0, 120.0]),
            x_px(vec![0.0, sway * 0.35 * coin(s.s3), sway * 0.65, sway * 0.45]),
            rotate(vec![0.0, 400.0 * coin(s.s4)]),
            opacity(vec![0.0, 0.8, 0.7, 0.5, 0.0]),
            scale(vec![0.7, 1.1, 1.0, 0.8]),
        ],
        transition: looping(
            4.5 + s.s1 * 3.0,
            Easing::EaseInOut,
            s.s1 * 0.6 + s.s3 * 0.4,
            0.5 + s.s5,
        ),
        shape: ctx.shape(ShapeFamily::GreenwoodLeaf, p.shape_variant, p.size),
    }
}
