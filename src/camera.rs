use brain_core::{screen_to_ndc, Camera};
use glam::Vec3;
use web_sys as web;

/// Compute a world-space ray from canvas pixel coordinates.
///
/// - `canvas`: target canvas to derive dimensions
/// - `sx`, `sy`: pixel coordinates in the canvas' backing store space
/// - `camera`: the camera used for the current frame
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    camera: &Camera,
) -> (Vec3, Vec3) {
    let ndc = screen_to_ndc(sx, sy, canvas.width() as f32, canvas.height() as f32);
    camera.ray_from_ndc(ndc.x, ndc.y)
}
