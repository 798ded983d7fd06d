//! Session state shared by the web and native frontends.
//!
//! Everything a frame needs lives in one [`Session`] owned by the frontend's
//! loop: held keys, the frame clock, the animator, debug settings, the scene
//! and the camera. Event handlers and the per-frame tick mutate it in turn;
//! nothing here touches a platform API.

use crate::clock::Clock;
use crate::constants::*;
use crate::input::{AppCommand, InputState};
use crate::motion::{apply_squash, bounce, drive, BounceParams, DriveParams, SquashChange};
use crate::scene::{build_brain_scene, BrainNodes, MeshRole, Scene, SceneError, Transform};
use crate::sound::{squish_commands, AudioCommands, CueTracker};
use glam::{Mat4, Quat, Vec3, Vec4};
use instant::Instant;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the eye.
    pub fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

/// Orbit controls: the eye keeps its place while the target follows the
/// brain, optionally circling the target at a fixed rate.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub rotate_speed: f32, // radians per second
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_START_EYE),
            target: brain_start_position(),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            rotate_speed: AUTO_ROTATE_RAD_PER_SEC,
        }
    }
}

impl OrbitCamera {
    pub fn update(&mut self, target: Vec3, dt: f32, auto_rotate: bool) {
        self.target = target;
        if auto_rotate {
            let offset = self.eye - target;
            self.eye = target + Quat::from_rotation_y(self.rotate_speed * dt) * offset;
        }
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fovy_radians,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}

/// Visual sub-state of the animated body for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPhase {
    #[default]
    Idle,
    Driving,
    Bouncing,
    Squished,
}

/// What a frame did, for the frontend to act on.
#[derive(Clone, Debug, Default)]
pub struct FrameOutcome {
    pub phase: MotionPhase,
    pub squash: Option<SquashChange>,
    pub audio: AudioCommands,
}

/// Per-frame driver for one animated body.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    pub drive: DriveParams,
    pub bounce: BounceParams,
    squished: bool,
    cues: CueTracker,
}

impl Animator {
    pub fn new(drive: DriveParams, bounce: BounceParams) -> Self {
        Self {
            drive,
            bounce,
            squished: false,
            cues: CueTracker::default(),
        }
    }

    /// Drive unconditionally, then bounce only when idle bouncing is enabled
    /// and the body is not being driven. Leaving the bounce releases any
    /// squash.
    pub fn update(
        &mut self,
        body: &mut Transform,
        input: &InputState,
        dt: f32,
        elapsed: f32,
        bouncing: bool,
    ) -> FrameOutcome {
        let mut out = FrameOutcome::default();
        drive(body, input, dt, &self.drive);
        self.cues.update(input.is_driving(), input.warp, &mut out.audio);

        if bouncing && !input.is_driving() {
            if let Some(change) = bounce(body, &mut self.squished, elapsed, &self.bounce) {
                if change == SquashChange::Squish {
                    squish_commands(&mut out.audio);
                }
                out.squash = Some(change);
            }
        } else if self.squished {
            apply_squash(body, &mut self.squished, SquashChange::Restore, &self.bounce);
            out.squash = Some(SquashChange::Restore);
        }

        out.phase = self.phase(input, bouncing);
        out
    }

    pub fn phase(&self, input: &InputState, bouncing: bool) -> MotionPhase {
        if input.is_driving() {
            MotionPhase::Driving
        } else if !bouncing {
            MotionPhase::Idle
        } else if self.squished {
            MotionPhase::Squished
        } else {
            MotionPhase::Bouncing
        }
    }

    /// Stop looping cues.
    pub fn silence(&mut self) -> AudioCommands {
        let mut out = AudioCommands::new();
        self.cues.silence(&mut out);
        out
    }

    /// Forget the squash without touching a transform (the caller resets it).
    pub fn reset(&mut self) {
        self.squished = false;
    }
}

/// Runtime toggles exposed through the keyboard and the help overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugSettings {
    pub bouncing: bool,
    pub show_bounds: bool,
    pub auto_rotate: bool,
    pub show_help: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            bouncing: true,
            show_bounds: false,
            auto_rotate: true,
            show_help: false,
        }
    }
}

impl DebugSettings {
    /// One-line key reference with the current toggle states.
    pub fn summary(&self) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        format!(
            "Arrows drive • Shift warp • B bounce: {} • V bounds: {} • O auto-rotate: {} • R reset • H help",
            on_off(self.bouncing),
            on_off(self.show_bounds),
            on_off(self.auto_rotate),
        )
    }
}

/// Everything a frame touches, owned by the frontend's loop.
pub struct Session {
    pub input: InputState,
    pub clock: Clock,
    pub animator: Animator,
    pub settings: DebugSettings,
    pub scene: Scene,
    pub nodes: BrainNodes,
    pub camera: OrbitCamera,
    start: Transform,
}

impl Session {
    pub fn new(scene: Scene) -> Result<Self, SceneError> {
        let nodes = BrainNodes::locate(&scene)?;
        let start = *scene.transform(nodes.brain);
        Ok(Self {
            input: InputState::default(),
            clock: Clock::new(),
            animator: Animator::default(),
            settings: DebugSettings::default(),
            scene,
            nodes,
            camera: OrbitCamera::default(),
            start,
        })
    }

    /// Session over the procedural brain model.
    pub fn with_brain() -> Result<Self, SceneError> {
        Self::new(build_brain_scene())
    }

    /// Key-down from the platform. Returns `true` when the key drives.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.set_key(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.set_key(key, false)
    }

    /// Release all keys, e.g. on window blur.
    pub fn release_keys(&mut self) {
        self.input.clear();
    }

    pub fn command(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::ToggleBouncing => {
                self.settings.bouncing = !self.settings.bouncing;
                log::info!("[settings] bouncing={}", self.settings.bouncing);
            }
            AppCommand::ToggleBounds => {
                self.settings.show_bounds = !self.settings.show_bounds;
                self.scene.set_role_visible(MeshRole::Bounds, self.settings.show_bounds);
                log::info!("[settings] show_bounds={}", self.settings.show_bounds);
            }
            AppCommand::ToggleAutoRotate => {
                self.settings.auto_rotate = !self.settings.auto_rotate;
                log::info!("[settings] auto_rotate={}", self.settings.auto_rotate);
            }
            AppCommand::ResetPosition => self.reset_position(),
            AppCommand::ToggleHelp => {
                self.settings.show_help = !self.settings.show_help;
            }
        }
    }

    pub fn reset_position(&mut self) {
        *self.scene.transform_mut(self.nodes.brain) = self.start;
        self.animator.reset();
        log::info!("[session] brain reset to start");
    }

    #[inline]
    pub fn body(&self) -> &Transform {
        self.scene.transform(self.nodes.brain)
    }

    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.animator.phase(&self.input, self.settings.bouncing)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        !self.clock.is_running()
    }

    pub fn tick(&mut self) -> FrameOutcome {
        self.tick_at(Instant::now())
    }

    /// Advance one render tick. A stopped clock makes this a no-op.
    pub fn tick_at(&mut self, now: Instant) -> FrameOutcome {
        if self.is_paused() {
            return FrameOutcome {
                phase: self.phase(),
                ..Default::default()
            };
        }
        let dt = self.clock.tick_at(now);
        let elapsed = self.clock.elapsed();
        let bouncing = self.settings.bouncing;
        let body = self.scene.transform_mut(self.nodes.brain);
        let out = self.animator.update(body, &self.input, dt, elapsed, bouncing);
        let target = self.scene.world_position(self.nodes.brain);
        self.camera.update(target, dt, self.settings.auto_rotate);
        out
    }

    /// Stop the clock (tab hidden, window occluded) and silence loops.
    pub fn pause_at(&mut self, now: Instant) -> AudioCommands {
        if self.is_paused() {
            return AudioCommands::new();
        }
        self.clock.stop_at(now);
        log::info!("[session] paused at t={:.2}s", self.clock.elapsed());
        self.animator.silence()
    }

    pub fn resume_at(&mut self, now: Instant) {
        if self.is_paused() {
            self.clock.start_at(now);
            log::info!("[session] resumed at t={:.2}s", self.clock.elapsed());
        }
    }

    pub fn pause(&mut self) -> AudioCommands {
        self.pause_at(Instant::now())
    }

    pub fn resume(&mut self) {
        self.resume_at(Instant::now())
    }
}
