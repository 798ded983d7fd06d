//! Per-frame motion of an animated body: driving and the idle bounce.

use crate::constants::*;
use crate::input::InputState;
use crate::scene::Transform;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct DriveParams {
    pub base_speed: f32,
    pub warp_bonus: f32,
    pub turn_rate: f32,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            warp_bonus: WARP_BONUS,
            turn_rate: TURN_RATE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BounceParams {
    pub speed: f32,
    pub amplitude: f32,
    pub threshold: f32,
    pub squash_scale: Vec3,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            speed: BOUNCE_SPEED,
            amplitude: BOUNCE_AMPLITUDE,
            threshold: SQUISH_THRESHOLD,
            squash_scale: squish_scale(),
        }
    }
}

/// Translate and steer `body` from the held keys.
///
/// Forward and reverse are applied as two independent translations, so
/// holding both cancels out. Steering only happens while driving; warp only
/// lengthens the step.
pub fn drive(body: &mut Transform, input: &InputState, dt: f32, params: &DriveParams) {
    let distance = dt * params.base_speed + if input.warp { params.warp_bonus } else { 0.0 };
    if input.forward {
        body.translate_forward(distance);
    }
    if input.reverse {
        body.translate_forward(-distance);
    }
    if input.is_driving() {
        if input.right {
            body.rotate_y(-dt * params.turn_rate);
        }
        if input.left {
            body.rotate_y(dt * params.turn_rate);
        }
    }
}

/// Height of the idle bounce, always in `[0, amplitude]`.
#[inline]
pub fn bounce_height(elapsed: f32, speed: f32, amplitude: f32) -> f32 {
    ((elapsed * speed).sin() * amplitude).abs()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquashChange {
    Squish,
    Restore,
}

/// Edge detection for the squash effect. Only threshold crossings yield a
/// change; staying on one side of the threshold yields `None`.
#[inline]
pub fn squash_transition(height: f32, threshold: f32, squished: bool) -> Option<SquashChange> {
    if height < threshold && !squished {
        Some(SquashChange::Squish)
    } else if height > threshold && squished {
        Some(SquashChange::Restore)
    } else {
        None
    }
}

pub fn apply_squash(
    body: &mut Transform,
    squished: &mut bool,
    change: SquashChange,
    params: &BounceParams,
) {
    match change {
        SquashChange::Squish => {
            body.scale = params.squash_scale;
            *squished = true;
        }
        SquashChange::Restore => {
            body.scale = Vec3::ONE;
            *squished = false;
        }
    }
}

/// Set the bounce height for `elapsed` and apply any squash edge.
pub fn bounce(
    body: &mut Transform,
    squished: &mut bool,
    elapsed: f32,
    params: &BounceParams,
) -> Option<SquashChange> {
    let height = bounce_height(elapsed, params.speed, params.amplitude);
    body.position.y = height;
    let change = squash_transition(height, params.threshold, *squished)?;
    apply_squash(body, squished, change, params);
    Some(change)
}
