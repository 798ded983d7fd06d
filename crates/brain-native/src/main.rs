use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::Key,
    window::{Window, WindowBuilder},
};

use brain_core::{
    app_command_for_key, pick_bounds, screen_to_ndc, update_hover, AppCommand, InfoPanel, NodeId,
    PanelClick, Session, Toaster,
};
use brain_render::SceneRenderer;
use glam::Vec2;

mod audio;
mod keys;
mod mixer;

const TITLE: &str = "lebrain";

/// Window, renderer and session for the desktop build. The window title
/// stands in for the web page's toast.
struct App {
    window: Arc<Window>,
    renderer: SceneRenderer<'static>,
    session: Session,
    audio: Option<audio::NativeAudio>,
    toaster: Toaster,
    info: InfoPanel,
    hover: Option<NodeId>,
    cursor: Option<Vec2>,
    started: Instant,
}

impl App {
    fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn play(&self, commands: &[brain_core::AudioCommand]) {
        if let Some(a) = &self.audio {
            a.apply(commands);
        }
    }

    fn on_key(&mut self, key: &Key, state: ElementState, repeat: bool) {
        let Some(k) = keys::dom_key(key) else {
            return;
        };
        if state == ElementState::Released {
            self.session.key_up(k);
            return;
        }
        if self.session.key_down(k) || repeat {
            return;
        }
        let Some(cmd) = app_command_for_key(k) else {
            return;
        };
        self.session.command(cmd);
        if cmd == AppCommand::ToggleHelp && self.session.settings.show_help {
            log::info!("[help] {}", self.session.settings.summary());
        }
    }

    fn set_occluded(&mut self, occluded: bool) {
        if occluded {
            let cmds = self.session.pause();
            self.play(&cmds);
        } else {
            self.session.resume();
        }
    }

    fn hemisphere_under_cursor(&self) -> Option<NodeId> {
        let cursor = self.cursor?;
        let size = self.window.inner_size();
        let ndc = screen_to_ndc(cursor.x, cursor.y, size.width as f32, size.height as f32);
        let camera = self.session.camera.camera(self.renderer.aspect());
        let (ro, rd) = camera.ray_from_ndc(ndc.x, ndc.y);
        pick_bounds(&self.session.scene, ro, rd).map(|p| p.hemisphere)
    }

    fn show_toast(&mut self, id: NodeId, msg: Option<&str>) {
        let now = self.now();
        let name = self.session.scene.node(id).name.clone();
        let text = self.toaster.display(&name, msg, now);
        self.window.set_title(&format!("{} - {}", TITLE, text));
        log::info!("[pointer] {}", text);
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Some(Vec2::new(x, y));
        let hit = self.hemisphere_under_cursor();
        if let Some(id) = update_hover(&mut self.hover, hit) {
            self.show_toast(id, None);
        }
    }

    fn on_click(&mut self) {
        let Some(id) = self.hemisphere_under_cursor() else {
            if self.info.click(PanelClick::Backdrop) {
                log::info!("[info] closed");
            }
            return;
        };
        self.show_toast(id, Some("clicked"));
        if let Some(part) = self.session.nodes.part_for(id) {
            let info = self.info.show(part);
            log::info!("[info] {}: {}", info.title, info.content);
        }
    }

    /// One tick and one draw. `Err` means the GPU is unusable.
    fn frame(&mut self) -> anyhow::Result<()> {
        let outcome = self.session.tick();
        self.play(&outcome.audio);
        if self.toaster.expire(self.now()) {
            self.window.set_title(TITLE);
        }

        let camera = self.session.camera.camera(self.renderer.aspect());
        let instances = self.session.scene.instances();
        match self.renderer.render(&camera, &instances) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(anyhow::anyhow!("GPU out of memory")),
            Err(e) => {
                log::warn!("render error: {:?}", e);
                Ok(())
            }
        }
    }

    fn handle(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    self.renderer.resize_if_needed(size.width, size.height)
                }
                WindowEvent::Focused(false) => self.session.release_keys(),
                WindowEvent::Occluded(occluded) => self.set_occluded(occluded),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state,
                            repeat,
                            ..
                        },
                    ..
                } => self.on_key(&logical_key, state, repeat),
                WindowEvent::CursorMoved { position, .. } => {
                    self.on_cursor_moved(position.x as f32, position.y as f32)
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => self.on_click(),
                WindowEvent::RedrawRequested => {
                    if let Err(e) = self.frame() {
                        log::error!("{e}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if !self.session.is_paused() {
                    self.window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let session = Session::with_brain()?;
    for line in session.scene.dump(session.nodes.brain) {
        log::info!("{}", line);
    }

    let audio = audio::NativeAudio::start();
    if audio.is_none() {
        log::warn!("[audio] no output device; running silent");
    }

    let event_loop = EventLoop::new()?;
    let window = Arc::new(WindowBuilder::new().with_title(TITLE).build(&event_loop)?);
    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(Arc::clone(&window))?;
    let renderer = pollster::block_on(SceneRenderer::new(
        &instance,
        surface,
        size.width,
        size.height,
    ))?;

    let mut app = App {
        window,
        renderer,
        session,
        audio,
        toaster: Toaster::default(),
        info: InfoPanel::default(),
        hover: None,
        cursor: None,
        started: Instant::now(),
    };
    event_loop.run(move |event, elwt| app.handle(event, elwt))?;
    Ok(())
}
