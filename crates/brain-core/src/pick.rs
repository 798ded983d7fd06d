//! Pointer picking against the invisible hemisphere bounding volumes.

use crate::scene::{NodeId, Scene};
use glam::{Mat4, Vec2, Vec3};

/// Pixel position on a `width` x `height` surface to normalized device
/// coordinates (y up).
#[inline]
pub fn screen_to_ndc(sx: f32, sy: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (2.0 * sx / width.max(1.0)) - 1.0,
        1.0 - (2.0 * sy / height.max(1.0)),
    )
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersect a ray with the unit sphere deformed by `world`.
///
/// The ray is taken into the sphere's local space, so `t` is returned in
/// world units along the (normalized) world direction.
pub fn ray_ellipsoid(ray_origin: Vec3, ray_dir: Vec3, world: Mat4) -> Option<f32> {
    if world.determinant().abs() < 1e-8 {
        return None;
    }
    let inv = world.inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    let len = d.length();
    if len < 1e-8 {
        return None;
    }
    let local_t = ray_sphere(o, d / len, Vec3::ZERO, 1.0)?;
    let hit_world = world.transform_point3(o + d / len * local_t);
    Some((hit_world - ray_origin).length())
}

/// Nearest bounding volume under a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    pub bounds: NodeId,
    /// Hemisphere group that owns the bounding volume.
    pub hemisphere: NodeId,
    pub t: f32,
}

pub fn pick_bounds(scene: &Scene, ray_origin: Vec3, ray_dir: Vec3) -> Option<Pick> {
    let mut best: Option<Pick> = None;
    for (id, world) in scene.bounding_volumes() {
        let Some(t) = ray_ellipsoid(ray_origin, ray_dir, world) else {
            continue;
        };
        let Some(hemisphere) = scene.node(id).parent() else {
            continue;
        };
        match best {
            Some(b) if t >= b.t => {}
            _ => {
                best = Some(Pick {
                    bounds: id,
                    hemisphere,
                    t,
                })
            }
        }
    }
    best
}

/// Record the hovered hemisphere. Returns the new one when it changed to
/// something, so the caller can announce it.
#[inline]
pub fn update_hover(current: &mut Option<NodeId>, next: Option<NodeId>) -> Option<NodeId> {
    if *current == next {
        return None;
    }
    *current = next;
    next
}

