//! Wind: enters at the left edge and crosses the whole frame

use super::{looping, opacity, scale, x_vw, y_px, ProfileDraft, ResolveContext};
use crate::params::DerivedParameters;
use crate::shapes::ShapeFamily;
use jianghu_animation::{Easing, InitialStyle};

pub(super) fn wind_stream(p: &DerivedParameters, ctx: &ResolveContext<'_>) -> ProfileDraft {
    let s = &p.samples;
    let wobble = 10.0 + s.s2 * 20.0;
    ProfileDraft {
        initial: InitialStyle::at(-10.0, 5.0 + s.s2 * 85.0).with_z_index(12),
        tracks: vec![
            x_vw(vec![0.0, 115.0]),
            y_px(vec![0.0, (s.s3 - 0.5) * wobble, (s.s4 - 0.5) * wobble]),
            opacity(vec![0.0, 0.6, 0.55, 0.0]),
            scale(vec![0.8, 1.2, 1.0]),
        ],
        transition: looping(
            1.5 + s.s1,
            Easing::Linear,
            s.s1 * 0.4 + s.s3 * 0.3,
            0.3 + s.s5 * 0.6,
        ),
        shape: ctx.shape(ShapeFamily::WindStream, 0, p.size * 0.95),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jianghu_animation::{Property, Unit};
    use jianghu_core::{ParticleKey, ThemeColor};

    #[test]
    fn wind_crosses_in_viewport_units() {
        let color = ThemeColor::default();
        let key = ParticleKey::new("wind-stream", 2);
        let ctx = ResolveContext {
            color: &color,
            key: &key,
        };
        let draft = wind_stream(&DerivedParameters::derive(2), &ctx);
        assert_eq!(draft.initial.left, -10.0);
        let x = draft.tracks.iter().find(|t| t.property == Property::X).unwrap();
        assert_eq!(x.unit, Unit::Vw);
        assert_eq!(x.last(), Some(115.0));
    }
}
