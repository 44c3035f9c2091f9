//! Packed per-particle instance data for GPU or canvas front ends

use crate::shapes::ShapeSpec;
use bytemuck::{Pod, Zeroable};
use jianghu_animation::{InitialStyle, SampledState};
use jianghu_core::Rgba;
use serde::{Deserialize, Serialize};

/// Size of the frame particles are placed in, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// One particle at one frame, in pixel space.
/// 64 bytes, 16-byte aligned (4 rows of vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub pos_rot: [f32; 4],    // x, y (px), rotation (deg), opacity
    pub scale: [f32; 4],      // scale x, scale y, shape size, z-index
    pub color: [f32; 4],      // rgba
    pub shape: [u32; 4],      // family id, variant, particle index, unused
}

impl ParticleInstance {
    pub fn from_sample(
        initial: &InitialStyle,
        state: &SampledState,
        shape: &ShapeSpec,
        index: usize,
        viewport: Viewport,
    ) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        let x = initial.left / 100.0 * w + state.x.to_px(w, h);
        let y = initial.top / 100.0 * h + state.y.to_px(w, h);
        let (sx, sy) = state.effective_scale();
        let color = shape.color.to_rgba().unwrap_or(Rgba::WHITE);

        Self {
            pos_rot: [x as f32, y as f32, state.rotate as f32, state.opacity as f32],
            scale: [
                sx as f32,
                sy as f32,
                shape.size as f32,
                initial.z_index.unwrap_or(0) as f32,
            ],
            color: color.to_array(),
            shape: [shape.family.id(), shape.variant as u32, index as u32, 0],
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pos_rot[3] > 0.0 && self.scale[0] != 0.0 && self.scale[1] != 0.0
    }
}
