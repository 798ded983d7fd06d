// Host-side tests for keyboard flags and the drive step.

use brain_core::{drive, DriveKey, DriveParams, InputState, Transform};
use glam::Vec3;
use std::f32::consts::PI;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn input(keys: &[&str]) -> InputState {
    let mut s = InputState::default();
    for k in keys {
        assert!(s.set_key(k, true), "{k} should be a drive key");
    }
    s
}

#[test]
fn drive_keys_map_from_dom_names() {
    assert_eq!(DriveKey::from_key("ArrowUp"), Some(DriveKey::Forward));
    assert_eq!(DriveKey::from_key("ArrowDown"), Some(DriveKey::Reverse));
    assert_eq!(DriveKey::from_key("ArrowLeft"), Some(DriveKey::Left));
    assert_eq!(DriveKey::from_key("ArrowRight"), Some(DriveKey::Right));
    assert_eq!(DriveKey::from_key("Shift"), Some(DriveKey::Warp));
    assert_eq!(DriveKey::from_key("w"), None);
    assert_eq!(DriveKey::from_key("arrowup"), None);
}

#[test]
fn unmapped_keys_leave_state_untouched() {
    let mut s = input(&["ArrowUp"]);
    let before = s;
    assert!(!s.set_key("q", true));
    assert!(!s.set_key("Enter", false));
    assert_eq!(s, before);
}

#[test]
fn release_and_clear() {
    let mut s = input(&["ArrowUp", "Shift", "ArrowLeft"]);
    assert!(s.set_key("ArrowUp", false));
    assert!(!s.forward && s.warp && s.left);
    s.clear();
    assert_eq!(s, InputState::default());
}

#[test]
fn driving_requires_forward_or_reverse() {
    assert!(!input(&[]).is_driving());
    assert!(!input(&["ArrowLeft", "Shift"]).is_driving());
    assert!(input(&["ArrowUp"]).is_driving());
    assert!(input(&["ArrowDown"]).is_driving());

    // Releasing forward while reverse is held keeps driving
    let mut s = input(&["ArrowUp", "ArrowDown"]);
    s.set_key("ArrowUp", false);
    assert!(s.is_driving());
    s.set_key("ArrowDown", false);
    assert!(!s.is_driving());
}

#[test]
fn forward_moves_exactly_dt_times_speed() {
    let params = DriveParams::default();
    for dt in [0.0_f32, 0.016, 0.25, 1.0] {
        let mut body = Transform::IDENTITY;
        drive(&mut body, &input(&["ArrowUp"]), dt, &params);
        assert!(approx(body.position.z, dt * params.base_speed));
        assert!(approx(body.position.x, 0.0));
        assert_eq!(body.rotation, glam::Quat::IDENTITY);
    }
}

#[test]
fn reverse_moves_backwards_and_both_cancel() {
    let params = DriveParams::default();
    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["ArrowDown"]), 0.5, &params);
    assert!(approx(body.position.z, -0.5 * params.base_speed));

    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["ArrowUp", "ArrowDown"]), 0.5, &params);
    assert!(body.position.length() < 1e-5);
}

#[test]
fn warp_adds_a_flat_bonus_per_step() {
    let params = DriveParams::default();
    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["ArrowUp", "Shift"]), 0.5, &params);
    assert!(approx(
        body.position.z,
        0.5 * params.base_speed + params.warp_bonus
    ));

    // Warp alone never moves the body
    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["Shift"]), 0.5, &params);
    assert_eq!(body, Transform::IDENTITY);
}

#[test]
fn turning_only_while_driving() {
    let params = DriveParams::default();
    let dt = 0.25;

    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["ArrowUp", "ArrowRight"]), dt, &params);
    assert!(approx(body.yaw(), -dt * PI));

    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["ArrowDown", "ArrowLeft"]), dt, &params);
    assert!(approx(body.yaw(), dt * PI));

    let mut body = Transform::IDENTITY;
    drive(&mut body, &input(&["ArrowRight"]), dt, &params);
    assert_eq!(body, Transform::IDENTITY);
}

#[test]
fn moves_along_the_current_heading() {
    let params = DriveParams::default();
    let mut body = Transform::IDENTITY;
    body.rotate_y(PI / 2.0);
    assert!((body.forward() - Vec3::X).length() < 1e-5);
    drive(&mut body, &input(&["ArrowUp"]), 1.0, &params);
    assert!(approx(body.position.x, params.base_speed));
    assert!(approx(body.position.z, 0.0));
}

#[test]
fn releasing_an_unpressed_key_changes_nothing() {
    let mut s = input(&["ArrowLeft"]);
    let before = s;
    assert!(s.set_key("ArrowUp", false));
    assert!(s.set_key("Shift", false));
    assert_eq!(s, before);

    let mut idle = InputState::default();
    assert!(idle.set_key("ArrowDown", false));
    assert_eq!(idle, InputState::default());
}

#[test]
fn pressing_a_key_twice_is_the_same_as_once() {
    let once = input(&["ArrowUp", "Shift"]);
    let mut twice = once;
    assert!(twice.set_key("ArrowUp", true));
    assert!(twice.set_key("Shift", true));
    assert_eq!(twice, once);

    // One release undoes any number of presses
    twice.set_key("ArrowUp", false);
    assert!(!twice.forward && !twice.is_driving());
}

#[test]
fn warp_never_changes_the_turn_rate() {
    let params = DriveParams::default();
    let dt = 0.25;

    let mut plain = Transform::IDENTITY;
    drive(&mut plain, &input(&["ArrowUp", "ArrowRight"]), dt, &params);
    let mut warped = Transform::IDENTITY;
    drive(&mut warped, &input(&["ArrowUp", "ArrowRight", "Shift"]), dt, &params);
    assert!(approx(warped.yaw(), plain.yaw()));
    assert!(approx(warped.yaw(), -dt * PI));

    let mut plain = Transform::IDENTITY;
    drive(&mut plain, &input(&["ArrowDown", "ArrowLeft"]), dt, &params);
    let mut warped = Transform::IDENTITY;
    drive(&mut warped, &input(&["ArrowDown", "ArrowLeft", "Shift"]), dt, &params);
    assert!(approx(warped.yaw(), plain.yaw()));
}
