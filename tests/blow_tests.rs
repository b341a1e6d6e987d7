// Host-side tests for the volume trigger and the blow-out state machine.
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
mod blow {
    include!("../src/core/blow.rs");
}

use blow::*;
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::{build_scene, CandleRig, Scene, SceneParams};

const DT_MS: f64 = 16.0;

fn build() -> (Scene, Vec<CandleRig>) {
    let mut rng = StdRng::seed_from_u64(3);
    build_scene(&SceneParams { topping_count: 0 }, &mut rng)
}

#[test]
fn mean_volume_averages_bins() {
    assert_eq!(mean_volume(&[]), 0.0);
    assert_eq!(mean_volume(&[10, 20, 30]), 20.0);
    assert_eq!(mean_volume(&[255; 128]), 255.0);
}

#[test]
fn volume_trigger_fires_on_large_deltas_only() {
    let mut trigger = VolumeTrigger::default();
    assert!(trigger.sample(50.0)); // from silence
    assert!(trigger.sample(80.0)); // delta 30
    assert!(!trigger.sample(80.0)); // delta 0
    assert!(!trigger.sample(95.0)); // delta 15
    assert!(trigger.sample(120.0)); // delta 25
}

#[test]
fn volume_trigger_threshold_is_strict() {
    let mut trigger = VolumeTrigger::new(20.0);
    assert!(!trigger.sample(20.0)); // exactly the threshold
    assert_eq!(trigger.last_volume(), 20.0);
    assert!(trigger.sample(40.1)); // just over
}

#[test]
fn volume_trigger_updates_last_sample_unconditionally() {
    let mut trigger = VolumeTrigger::new(20.0);
    assert!(!trigger.sample(10.0));
    assert_eq!(trigger.last_volume(), 10.0);
    assert!(!trigger.sample(25.0)); // delta 15, still stored
    assert_eq!(trigger.last_volume(), 25.0);
}

#[test]
fn trigger_snuffs_lights_and_starts_descent() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::new(rigs.len());
    assert!(!blow.is_active());

    assert!(blow.trigger(&mut scene, &rigs));
    assert!(blow.is_active());
    for (index, rig) in rigs.iter().enumerate() {
        assert_eq!(scene.lights[rig.flame_light].intensity, 0.0);
        assert_eq!(blow.phase(index), FlamePhase::Descending);
    }
}

#[test]
fn second_trigger_while_active_is_a_no_op() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::new(rigs.len());
    assert!(blow.trigger(&mut scene, &rigs));

    // intensity restored by the flicker loop must not be reset again
    scene.lights[rigs[0].flame_light].intensity = 5.0;
    assert!(!blow.trigger(&mut scene, &rigs));
    assert_eq!(scene.lights[rigs[0].flame_light].intensity, 5.0);
}

#[test]
fn descent_reaches_the_target_after_the_expected_tick_count() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::new(rigs.len());
    blow.trigger(&mut scene, &rigs);

    // (4.1 - 3.55) / 0.007 = 78.6, so the 79th tick crosses the target
    let expected = ((FLAME_REST_Y - BLOW_TARGET_Y) / BLOW_STEP).ceil() as usize;
    assert_eq!(expected, 79);

    for tick in 1..expected {
        blow.tick(&mut scene, &rigs, DT_MS);
        assert_eq!(
            blow.phase(0),
            FlamePhase::Descending,
            "left descent early at tick {tick}"
        );
        assert!(scene.meshes[rigs[0].flame_mesh].position.y > BLOW_TARGET_Y);
    }
    blow.tick(&mut scene, &rigs, DT_MS);
    assert!(matches!(blow.phase(0), FlamePhase::Holding { .. }));
    assert!(scene.meshes[rigs[0].flame_mesh].position.y <= BLOW_TARGET_Y);
}

#[test]
fn hold_lasts_about_three_seconds_before_ascent() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::new(rigs.len());
    blow.trigger(&mut scene, &rigs);

    while !matches!(blow.phase(0), FlamePhase::Holding { .. }) {
        blow.tick(&mut scene, &rigs, DT_MS);
    }
    let held_y = scene.meshes[rigs[0].flame_mesh].position.y;

    let mut held_ms = 0.0;
    while !matches!(blow.phase(0), FlamePhase::Ascending) {
        blow.tick(&mut scene, &rigs, DT_MS);
        held_ms += DT_MS;
        // position is pinned while holding
        assert_eq!(scene.meshes[rigs[0].flame_mesh].position.y, held_y);
    }
    assert!(held_ms >= BLOW_HOLD_MS);
    assert!(held_ms < BLOW_HOLD_MS + 2.0 * DT_MS);
}

#[test]
fn full_cycle_returns_to_rest_and_rearms() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::new(rigs.len());
    blow.trigger(&mut scene, &rigs);

    // 10000 ticks is far more than a full descend/hold/ascend cycle
    for _ in 0..10000 {
        blow.tick(&mut scene, &rigs, DT_MS);
    }
    assert!(!blow.is_active());
    for rig in &rigs {
        assert_eq!(scene.meshes[rig.flame_mesh].position.y, rig.rest_y);
    }

    // a later spike starts a fresh cycle
    assert!(blow.trigger(&mut scene, &rigs));
}

#[test]
fn tick_while_idle_changes_nothing() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::new(rigs.len());
    let before = scene.meshes[rigs[0].flame_mesh].position.y;
    for _ in 0..100 {
        blow.tick(&mut scene, &rigs, DT_MS);
    }
    assert_eq!(scene.meshes[rigs[0].flame_mesh].position.y, before);
    assert!(!blow.is_active());
}

#[test]
fn flames_ascend_exactly_to_their_rest_height() {
    let (mut scene, rigs) = build();
    let mut blow = BlowOut::with_params(rigs.len(), BLOW_TARGET_Y, BLOW_STEP, 100.0);
    blow.trigger(&mut scene, &rigs);

    let mut saw_ascent = false;
    for _ in 0..2000 {
        blow.tick(&mut scene, &rigs, DT_MS);
        if matches!(blow.phase(0), FlamePhase::Ascending) {
            saw_ascent = true;
            // never overshoots the rest height
            assert!(scene.meshes[rigs[0].flame_mesh].position.y <= rigs[0].rest_y);
        }
    }
    assert!(saw_ascent);
    assert!(!blow.is_active());
    assert_eq!(scene.meshes[rigs[0].flame_mesh].position.y, rigs[0].rest_y);
}
