// Host-side tests for scene construction and the candle table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn build_default() -> (Scene, Vec<CandleRig>) {
    let mut rng = StdRng::seed_from_u64(42);
    build_scene(&SceneParams::default(), &mut rng)
}

#[test]
fn default_scene_has_expected_node_count() {
    let (scene, _) = build_default();
    // 3 cake + 3 candles + 3 wicks + 3 flames + 150 toppings = 162 meshes,
    // 3 flame lights + key light = 4 point lights, plus the ambient light
    assert_eq!(scene.meshes.len(), 162);
    assert_eq!(scene.lights.len(), 4);
    assert!(scene.ambient.is_some());
    assert_eq!(scene.node_count(), 167);
}

#[test]
fn topping_count_is_configurable() {
    let mut rng = StdRng::seed_from_u64(7);
    let (scene, _) = build_scene(&SceneParams { topping_count: 0 }, &mut rng);
    assert_eq!(scene.node_count(), 17);

    let mut rng = StdRng::seed_from_u64(7);
    let (scene, _) = build_scene(&SceneParams { topping_count: 10 }, &mut rng);
    assert_eq!(scene.node_count(), 27);
}

#[test]
fn every_candle_has_one_flame_and_one_light() {
    let (scene, rigs) = build_default();
    assert_eq!(rigs.len(), CANDLE_COLUMNS.len());

    for (index, rig) in rigs.iter().enumerate() {
        let mesh = &scene.meshes[rig.flame_mesh];
        assert_eq!(mesh.geometry, GeometryKind::Flame);
        assert_eq!(mesh.material, MaterialKind::Flame);
        let light = &scene.lights[rig.flame_light];
        // flame and light are co-located on the candle's column
        assert_eq!(mesh.position, light.position);
        assert_eq!(mesh.position.x, CANDLE_COLUMNS[index]);
        assert_eq!(mesh.position.y, FLAME_REST_Y);
    }

    // pairing is one-to-one
    let mut flame_indices: Vec<_> = rigs.iter().map(|r| r.flame_mesh).collect();
    let mut light_indices: Vec<_> = rigs.iter().map(|r| r.flame_light).collect();
    flame_indices.dedup();
    light_indices.dedup();
    assert_eq!(flame_indices.len(), rigs.len());
    assert_eq!(light_indices.len(), rigs.len());
}

#[test]
fn rig_base_scales_are_randomized_in_range() {
    let (_, rigs) = build_default();
    for rig in &rigs {
        assert!(rig.base_scale >= FLICKER_BASE_SCALE_MIN);
        assert!(rig.base_scale < FLICKER_BASE_SCALE_MAX);
        assert_eq!(rig.rest_y, FLAME_REST_Y);
    }
}

#[test]
fn toppings_sit_on_the_lateral_surface() {
    let (scene, _) = build_default();
    let toppings: Vec<_> = scene
        .meshes
        .iter()
        .filter(|m| m.geometry == GeometryKind::Topping)
        .collect();
    assert_eq!(toppings.len(), DEFAULT_TOPPING_COUNT);

    let half_body = CAKE_BODY_HEIGHT * 0.5;
    for topping in toppings {
        let radius = (topping.position.x * topping.position.x
            + topping.position.z * topping.position.z)
            .sqrt();
        assert!((radius - CAKE_RADIUS).abs() < 1e-4, "radius {radius}");
        assert!(topping.position.y >= -half_body && topping.position.y < half_body);
        // yaw follows the placement angle
        let angle = f32::atan2(topping.position.z, topping.position.x);
        let mut diff = (topping.yaw + angle) % std::f32::consts::TAU;
        if diff > std::f32::consts::PI {
            diff -= std::f32::consts::TAU;
        }
        if diff < -std::f32::consts::PI {
            diff += std::f32::consts::TAU;
        }
        assert!(diff.abs() < 1e-3, "yaw/angle mismatch: {diff}");
        for channel in [topping.color.x, topping.color.y, topping.color.z] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
fn general_lighting_is_present() {
    let (scene, rigs) = build_default();
    let key = scene
        .lights
        .iter()
        .find(|l| l.position == KEY_LIGHT_POSITION)
        .expect("key light missing");
    assert_eq!(key.intensity, KEY_LIGHT_INTENSITY);
    assert_eq!(scene.ambient, Some(AMBIENT_COLOR));
    // the key light is not any candle's flame light
    for rig in &rigs {
        assert_ne!(scene.lights[rig.flame_light].position, KEY_LIGHT_POSITION);
    }
}

#[test]
fn every_geometry_kind_tessellates() {
    for kind in GeometryKind::ALL {
        let mesh = kind.mesh();
        assert!(mesh.vertex_count() > 0, "{kind:?} has no vertices");
        assert!(mesh.index_count() > 0, "{kind:?} has no indices");
        assert_eq!(mesh.index_count() % 3, 0, "{kind:?} not triangles");
    }
}
