// Per-tick candle flame flicker: non-uniform scale wobble, a color blend
// shared by all flames, and randomized light intensity.

use glam::Vec3;
use rand::Rng;

use super::blow::BlowOut;
use super::constants::*;
use super::scene::{CandleRig, Scene};

/// Vertical flicker scale for one flame at an elapsed time in milliseconds.
/// Stays within `base_scale` ± the vertical amplitude.
#[inline]
pub fn vertical_scale(base_scale: f32, time_ms: f64, index: usize) -> f32 {
    base_scale + ((time_ms * FLICKER_SCALE_FREQ + index as f64).sin() as f32) * FLICKER_VERTICAL_AMP
}

/// Horizontal (x/z) flicker scale, phase-shifted per candle index.
#[inline]
pub fn lateral_scale(time_ms: f64, index: usize) -> f32 {
    1.0 + ((time_ms * FLICKER_SCALE_FREQ + index as f64).sin() as f32) * FLICKER_LATERAL_AMP
}

/// Blend factor between the ember and glow colors, always in [0, 1].
/// Shared by all flames (not indexed).
#[inline]
pub fn color_blend(time_ms: f64) -> f32 {
    0.5 + ((time_ms * FLICKER_COLOR_FREQ).sin() as f32) * 0.5
}

#[inline]
pub fn flame_color(blend: f32) -> Vec3 {
    FLAME_COLOR_EMBER.lerp(FLAME_COLOR_GLOW, blend)
}

/// Advance the flicker for every candle. A flame mid blow-out keeps its
/// shape wobble but stays dark: its color and light are left alone until the
/// cycle returns it to idle.
pub fn animate(
    scene: &mut Scene,
    rigs: &[CandleRig],
    blow: &BlowOut,
    time_ms: f64,
    rng: &mut impl Rng,
) {
    let color = flame_color(color_blend(time_ms));
    for (index, rig) in rigs.iter().enumerate() {
        let lateral = lateral_scale(time_ms, index);
        let mesh = &mut scene.meshes[rig.flame_mesh];
        mesh.scale = Vec3::new(
            lateral,
            vertical_scale(rig.base_scale, time_ms, index),
            lateral,
        );
        if !blow.is_idle(index) {
            continue;
        }
        mesh.color = color;
        let light = &mut scene.lights[rig.flame_light];
        light.color = color;
        light.intensity = rng.gen_range(FLICKER_INTENSITY_MIN..FLICKER_INTENSITY_MAX);
    }
}
