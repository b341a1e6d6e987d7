use glam::Vec3;

// Scene layout and effect tuning constants shared by the builders, the
// animation loops and the host-side tests.

// Cake (plate, body, icing top)
pub const CAKE_RADIUS: f32 = 5.0;
pub const CAKE_PLATE_RADIUS: f32 = 5.1;
pub const CAKE_PLATE_HEIGHT: f32 = 0.1;
pub const CAKE_BODY_HEIGHT: f32 = 2.0;
pub const CAKE_BASE_Y: f32 = -1.0;
pub const CAKE_TOP_Y: f32 = 1.1;
pub const CAKE_BASE_COLOR: Vec3 = Vec3::new(0.325, 0.161, 0.043); // dark chocolate
pub const CAKE_BODY_COLOR: Vec3 = Vec3::new(0.545, 0.271, 0.075); // chocolate
pub const CAKE_TOP_COLOR: Vec3 = Vec3::ONE;

// Candles, one per column
pub const CANDLE_COLUMNS: [f32; 3] = [-2.0, 0.0, 2.0];
pub const CANDLE_RADIUS: f32 = 0.5;
pub const CANDLE_HEIGHT: f32 = 3.0;
pub const CANDLE_Y: f32 = 2.5;
pub const CANDLE_COLOR: Vec3 = Vec3::new(1.0, 0.855, 0.725); // wax
pub const WICK_RADIUS: f32 = 0.1;
pub const WICK_HEIGHT: f32 = 3.2;
pub const WICK_Y: f32 = 2.6;
pub const WICK_COLOR: Vec3 = Vec3::new(0.2, 0.2, 0.2);

// Flames and their paired point lights
pub const FLAME_RADIUS: f32 = 0.3;
pub const FLAME_HEIGHT: f32 = 0.8;
pub const FLAME_REST_Y: f32 = 4.1;
pub const FLAME_OPACITY: f32 = 0.9;
pub const FLAME_COLOR_EMBER: Vec3 = Vec3::new(1.0, 0.271, 0.0); // deep orange
pub const FLAME_COLOR_GLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0); // bright yellow
pub const FLAME_LIGHT_COLOR: Vec3 = Vec3::new(1.0, 0.647, 0.0);
pub const FLAME_LIGHT_INTENSITY: f32 = 2.0;
pub const FLAME_LIGHT_RANGE: f32 = 15.0;

// Flicker; time arguments are elapsed milliseconds
pub const FLICKER_BASE_SCALE_MIN: f32 = 1.5;
pub const FLICKER_BASE_SCALE_MAX: f32 = 1.7;
pub const FLICKER_SCALE_FREQ: f64 = 0.007;
pub const FLICKER_COLOR_FREQ: f64 = 0.005;
pub const FLICKER_VERTICAL_AMP: f32 = 0.05;
pub const FLICKER_LATERAL_AMP: f32 = 0.1;
pub const FLICKER_INTENSITY_MIN: f32 = 1.5;
pub const FLICKER_INTENSITY_MAX: f32 = 2.0;

// Blow-out effect
pub const VOLUME_DELTA_THRESHOLD: f32 = 20.0;
pub const BLOW_TARGET_Y: f32 = 3.55;
pub const BLOW_STEP: f32 = 0.007; // world units per tick
pub const BLOW_HOLD_MS: f64 = 3000.0;

// Toppings scattered on the cake's lateral surface
pub const DEFAULT_TOPPING_COUNT: usize = 150;
pub const TOPPING_SIZE: Vec3 = Vec3::new(0.1, 0.1, 0.2);

// General lighting
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const KEY_LIGHT_RANGE: f32 = 100.0;
pub const AMBIENT_COLOR: Vec3 = Vec3::new(0.98, 0.871, 0.518); // soft warm light
pub const BACKGROUND_COLOR: Vec3 = Vec3::new(0.2, 0.2, 0.2);

// Mesh tessellation
pub const RADIAL_SEGMENTS: u32 = 32;

// Confetti
pub const CONFETTI_INTERVAL_MS: f64 = 4000.0;
pub const CONFETTI_PER_BURST: usize = 200;
pub const CONFETTI_SPREAD_DEG: f32 = 100.0;
pub const CONFETTI_ORIGINS: [[f32; 2]; 2] = [[0.2, 0.6], [0.8, 0.6]];
pub const CONFETTI_SPEED_MIN: f32 = 0.35; // normalized viewport units per second
pub const CONFETTI_SPEED_MAX: f32 = 0.95;
pub const CONFETTI_GRAVITY: f32 = 1.1; // units per second squared, downward
pub const CONFETTI_DRAG_PER_SEC: f32 = 0.35; // fraction of velocity shed per second
pub const CONFETTI_SPIN_MAX: f32 = 8.0; // radians per second
pub const CONFETTI_LIFETIME_MS_MIN: f32 = 2400.0;
pub const CONFETTI_LIFETIME_MS_MAX: f32 = 3600.0;
pub const CONFETTI_PALETTE: [[f32; 3]; 7] = [
    [1.0, 0.32, 0.32],
    [1.0, 0.67, 0.2],
    [1.0, 0.92, 0.3],
    [0.36, 0.85, 0.42],
    [0.3, 0.62, 1.0],
    [0.62, 0.42, 0.95],
    [1.0, 0.45, 0.78],
];
