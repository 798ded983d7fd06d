// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use brain_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(BASE_SPEED > 0.0);
    assert!(WARP_BONUS > 0.0);
    assert!(TURN_RATE > 0.0);
    assert!(BOUNCE_SPEED > 0.0);

    // The squash must trigger somewhere inside the bounce
    assert!(SQUISH_THRESHOLD > 0.0 && SQUISH_THRESHOLD < BOUNCE_AMPLITUDE);

    // Flattened, not stretched
    assert!(SQUISH_SCALE[1] < 1.0);
    assert!(SQUISH_SCALE[0] > 1.0 && SQUISH_SCALE[2] > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_light_constants_have_logical_relationships() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(AMBIENT_INTENSITY < POINT_LIGHT_INTENSITY);

    // One orbit every 30 seconds
    assert!((AUTO_ROTATE_RAD_PER_SEC * 30.0 - std::f32::consts::TAU).abs() < 1e-5);

    // Unit grid cells
    let cell = 2.0 * GRID_HALF_EXTENT / GRID_DIVISIONS as f32;
    assert!((cell - 1.0).abs() < 1e-6);

    // The origin must fall between the clip planes from the start eye
    let eye = glam::Vec3::from(CAMERA_START_EYE);
    assert!(eye.length() > CAMERA_ZNEAR && eye.length() < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn colors_are_normalized_and_bounds_are_translucent() {
    for c in [
        CEREBRUM_COLOR,
        CEREBELLUM_COLOR,
        BOUNDS_LEFT_COLOR,
        BOUNDS_RIGHT_COLOR,
    ] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
    assert_eq!(CEREBRUM_COLOR[3], 1.0);
    assert!(BOUNDS_LEFT_COLOR[3] < 1.0);
    assert!(BOUNDS_RIGHT_COLOR[3] < 1.0);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        LOADER_ID,
        TOASTER_ID,
        INFO_OVERLAY_ID,
        INFO_PANEL_ID,
        INFO_TITLE_ID,
        INFO_IMAGE_ID,
        INFO_CONTENT_ID,
        INFO_CLOSE_ID,
        HELP_OVERLAY_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(CANVAS_ID, "lebrain");
}

#[test]
fn sound_paths_point_at_the_shipped_files() {
    assert!(SOUND_ENGINE_SRC.ends_with("spaceship.ogg"));
    assert!(SOUND_BOOST_SRC.ends_with("spaceship-boost.ogg"));
    assert!(SOUND_SQUISH_SRC.ends_with("squish-01.mp3"));
    assert!(SOUND_VOLUME > 0.0 && SOUND_VOLUME <= 1.0);
    assert!(IMAGE_DIR.ends_with('/'));
}
