//! Procedural geometry and the per-instance data uploaded to the GPU.

use glam::{Mat3, Mat4};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Model matrix, normal matrix (as three padded columns) and color of one
/// drawn mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
    pub color: [f32; 4],
}

impl MeshInstance {
    pub fn new(model: Mat4, normal: Mat3, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
            color,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Most vertices a `u16`-indexed mesh can address.
pub const MAX_MESH_VERTICES: usize = u16::MAX as usize + 1;

/// Unit sphere made of `stacks` latitude bands and `slices` longitude bands.
/// Counter-clockwise winding seen from outside.
///
/// `slices` is clamped first, then `stacks`, so the vertex grid never
/// outgrows [`MAX_MESH_VERTICES`].
pub fn uv_sphere(stacks: u16, slices: u16) -> MeshData {
    let slices = (slices as usize).clamp(3, MAX_MESH_VERTICES / 3 - 1);
    let ring = slices + 1;
    let stacks = (stacks as usize).clamp(2, MAX_MESH_VERTICES / ring - 1);

    let mut vertices = Vec::with_capacity((stacks + 1) * ring);
    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..=slices {
            let theta = std::f32::consts::TAU * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let p = [sin_phi * sin_theta, cos_phi, sin_phi * cos_theta];
            vertices.push(Vertex {
                position: p,
                normal: p,
            });
        }
    }
    let mut indices = Vec::with_capacity(stacks * slices * 6);
    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * ring + j) as u16;
            let b = a + ring as u16;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    MeshData { vertices, indices }
}

/// Flat square on the y = 0 plane, facing up.
pub fn grid_quad(half_extent: f32) -> MeshData {
    let h = half_extent;
    let up = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex {
            position: [-h, 0.0, -h],
            normal: up,
        },
        Vertex {
            position: [-h, 0.0, h],
            normal: up,
        },
        Vertex {
            position: [h, 0.0, h],
            normal: up,
        },
        Vertex {
            position: [h, 0.0, -h],
            normal: up,
        },
    ];
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
