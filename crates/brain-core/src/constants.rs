use glam::Vec3;

// Shared motion/scene tuning constants used by both web and native frontends.

// Driving
pub const BASE_SPEED: f32 = 2.0; // world units per second along the local forward axis
pub const WARP_BONUS: f32 = 0.1; // flat extra distance per frame while warp is held
pub const TURN_RATE: f32 = std::f32::consts::PI; // radians per second while driving

// Idle bounce
pub const BOUNCE_SPEED: f32 = 3.0; // angular frequency of the bounce sine
pub const BOUNCE_AMPLITUDE: f32 = 1.0; // peak height above the floor
pub const SQUISH_THRESHOLD: f32 = 0.04; // below this height the body squashes
pub const SQUISH_SCALE: [f32; 3] = [1.2, 0.8, 1.2]; // widened x/z, flattened y

// Scene layout
pub const BRAIN_START_POSITION: [f32; 3] = [0.0, 0.0, 0.0];
pub const GRID_HALF_EXTENT: f32 = 10.0; // 20 x 20 cells of one unit
pub const GRID_DIVISIONS: u32 = 20;

// Palette
pub const CEREBRUM_COLOR: [f32; 4] = [0.949, 0.612, 0.643, 1.0]; // #F29CA4
pub const CEREBELLUM_COLOR: [f32; 4] = [0.82, 0.45, 0.52, 1.0];
pub const BOUNDS_RIGHT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 0.5]; // green
pub const BOUNDS_LEFT_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 0.5]; // blue

// Camera (orbit controls)
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_START_EYE: [f32; 3] = [5.3, 1.6, 5.6];
// three.js autoRotateSpeed = 2.0 means one full orbit per 30 seconds
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = std::f32::consts::TAU / 30.0;

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 0.647, 0.0]; // orange
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const POINT_LIGHT_INTENSITY: f32 = 0.8;
pub const POINT_LIGHT_POSITIONS: [[f32; 3]; 2] = [[-5.0, 3.0, -1.0], [5.0, 3.0, 3.0]];

// Overlays
pub const TOAST_DURATION_SEC: f64 = 3.0;

#[inline]
pub fn brain_start_position() -> Vec3 {
    Vec3::from(BRAIN_START_POSITION)
}

#[inline]
pub fn squish_scale() -> Vec3 {
    Vec3::from(SQUISH_SCALE)
}
