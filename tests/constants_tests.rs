// Host-side tests for constant relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blow_out_travel_is_consistent() {
    // the flames sink but never below the icing
    assert!(BLOW_TARGET_Y < FLAME_REST_Y);
    assert!(BLOW_TARGET_Y > CAKE_TOP_Y);
    assert!(BLOW_STEP > 0.0);
    assert!(BLOW_HOLD_MS > 0.0);
    assert!(VOLUME_DELTA_THRESHOLD > 0.0);

    let descent_ticks = ((FLAME_REST_Y - BLOW_TARGET_Y) / BLOW_STEP).ceil() as u32;
    assert_eq!(descent_ticks, 79);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flicker_ranges_are_ordered() {
    assert!(FLICKER_BASE_SCALE_MIN < FLICKER_BASE_SCALE_MAX);
    assert!(FLICKER_INTENSITY_MIN < FLICKER_INTENSITY_MAX);
    assert!(FLICKER_VERTICAL_AMP > 0.0);
    assert!(FLICKER_LATERAL_AMP > 0.0);
    assert!(FLICKER_SCALE_FREQ > 0.0);
    assert!(FLICKER_COLOR_FREQ > 0.0);
    // the flicker never pushes a light past its construction intensity
    assert!(FLICKER_INTENSITY_MAX <= FLAME_LIGHT_INTENSITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn candles_stand_on_the_cake() {
    // columns are symmetric around the cake's center
    assert_eq!(CANDLE_COLUMNS[0], -CANDLE_COLUMNS[2]);
    assert_eq!(CANDLE_COLUMNS[1], 0.0);
    for &x in &CANDLE_COLUMNS {
        assert!(x.abs() + CANDLE_RADIUS < CAKE_RADIUS);
    }
    // wick pokes out of the candle, flame floats above both
    assert!(WICK_HEIGHT > CANDLE_HEIGHT);
    let candle_top = CANDLE_Y + CANDLE_HEIGHT * 0.5;
    assert!(FLAME_REST_Y > candle_top);
    assert!(CAKE_PLATE_RADIUS > CAKE_RADIUS);
}

#[test]
fn scene_colors_are_normalized() {
    let colors = [
        CAKE_BASE_COLOR,
        CAKE_BODY_COLOR,
        CAKE_TOP_COLOR,
        CANDLE_COLOR,
        WICK_COLOR,
        FLAME_COLOR_EMBER,
        FLAME_COLOR_GLOW,
        FLAME_LIGHT_COLOR,
        AMBIENT_COLOR,
        BACKGROUND_COLOR,
    ];
    for color in colors {
        for channel in [color.x, color.y, color.z] {
            assert!((0.0..=1.0).contains(&channel), "channel {channel}");
        }
    }
    for color in CONFETTI_PALETTE {
        for channel in color {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn confetti_tuning_is_sane() {
    assert!(CONFETTI_PER_BURST > 0);
    assert!(CONFETTI_SPREAD_DEG > 0.0 && CONFETTI_SPREAD_DEG < 180.0);
    assert!(CONFETTI_SPEED_MIN < CONFETTI_SPEED_MAX);
    assert!(CONFETTI_LIFETIME_MS_MIN < CONFETTI_LIFETIME_MS_MAX);
    // a burst fully fades before the next volley lands
    assert!(f64::from(CONFETTI_LIFETIME_MS_MAX) < CONFETTI_INTERVAL_MS);
    for [x, y] in CONFETTI_ORIGINS {
        assert!((0.0..=1.0).contains(&x));
        assert!((0.0..=1.0).contains(&y));
    }
}
