pub mod clock;
pub mod constants;
pub mod info;
pub mod input;
pub mod mesh;
pub mod motion;
pub mod pick;
pub mod scene;
pub mod sound;
pub mod state;
pub mod toast;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use clock::*;
pub use constants::*;
pub use info::*;
pub use input::*;
pub use mesh::*;
pub use motion::*;
pub use pick::*;
pub use scene::*;
pub use sound::*;
pub use state::*;
pub use toast::*;
