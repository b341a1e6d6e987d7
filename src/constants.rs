use glam::Vec3;

// Frontend wiring constants: camera framing, DOM ids and the greeting.

// Camera framed above the cake, looking at the scene center
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 8.0, 15.0);
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Page elements
pub const CAKE_CANVAS_ID: &str = "cake-canvas";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
pub const GREETING_ID: &str = "happy-birthday-text";
pub const PLAY_ICON_ID: &str = "play-icon";
pub const AUDIO_ID: &str = "happy-birthday-audio";

// Greeting reveal
pub const GREETING_TEXT: &str = "Happy birthday to you!";
pub const GREETING_TYPE_SPEED_MS: f64 = 50.0;
pub const GREETING_HEART_HTML: &str = " <span style=\"color: red;\">&#x2764;</span>";

// Play/stop glyph classes swapped on the audio control
pub const PLAY_ICON_CLASS: &str = "ri-play-fill";
pub const STOP_ICON_CLASS: &str = "ri-stop-fill";

// Confetti squares drawn on the overlay, in CSS-ish pixels
pub const CONFETTI_DRAW_WIDTH: f64 = 9.0;
pub const CONFETTI_DRAW_HEIGHT: f64 = 5.0;
