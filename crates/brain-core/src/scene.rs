//! Minimal named scene graph for the brain model.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Only what the demo
//! needs is here: local transforms, parent/child links, name lookup, world
//! matrices and a printable tree.

use crate::constants::*;
use crate::mesh::MeshInstance;
use fnv::FnvHashMap;
use glam::{Mat3, Mat4, Quat, Vec3};
use thiserror::Error;

/// Position, rotation and non-uniform scale of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale,
        }
    }

    /// Decompose an affine matrix. A negative determinant ends up in `scale.x`.
    pub fn from_matrix(m: Mat4) -> Self {
        let (scale, rotation, position) = m.to_scale_rotation_translation();
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Local forward axis (+Z) in parent space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Move along the local forward axis.
    #[inline]
    pub fn translate_forward(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    /// Rotate about the local vertical axis.
    #[inline]
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(angle)).normalize();
    }

    /// Heading around +Y in radians, 0 when facing +Z.
    pub fn yaw(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z)
    }

    /// Copy mirrored across the YZ plane of the parent.
    pub fn mirrored_x(&self) -> Self {
        Self::from_matrix(Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0)) * self.matrix())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshRole {
    Cerebrum,
    Cerebellum,
    /// Invisible hit volume covering a hemisphere.
    Bounds,
}

#[derive(Clone, Debug)]
pub struct MeshShape {
    pub role: MeshRole,
    pub color: [f32; 4],
    pub visible: bool,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Object3D,
    Group,
    Mesh(MeshShape),
}

impl NodeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Object3D => "Object3D",
            NodeKind::Group => "Group",
            NodeKind::Mesh(_) => "Mesh",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene node `{0}` is missing")]
    MissingNode(String),
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    by_name: FnvHashMap<String, NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. Unnamed nodes (`""`) are not indexed for lookup; a
    /// repeated name resolves to the most recently added node.
    pub fn add(
        &mut self,
        name: &str,
        kind: NodeKind,
        transform: Transform,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.to_string(),
            kind,
            transform,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        if !name.is_empty() {
            self.by_name.insert(name.to_string(), id);
        }
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn transform(&self, id: NodeId) -> &Transform {
        &self.nodes[id.0].transform
    }

    #[inline]
    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<NodeId, SceneError> {
        self.find(name).ok_or_else(|| SceneError::MissingNode(name.to_string()))
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.0];
        let local = node.transform.matrix();
        match node.parent {
            Some(p) => self.world_matrix(p) * local,
            None => local,
        }
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).w_axis.truncate()
    }

    /// Show or hide every mesh with the given role.
    pub fn set_role_visible(&mut self, role: MeshRole, visible: bool) {
        for node in &mut self.nodes {
            if let NodeKind::Mesh(shape) = &mut node.kind {
                if shape.role == role {
                    shape.visible = visible;
                }
            }
        }
    }

    /// Bounding volumes with their world matrices, for hit testing.
    pub fn bounding_volumes(&self) -> Vec<(NodeId, Mat4)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(&n.kind, NodeKind::Mesh(s) if s.role == MeshRole::Bounds))
            .map(|(i, _)| (NodeId(i), self.world_matrix(NodeId(i))))
            .collect()
    }

    /// GPU instances for every visible mesh. Translucent bounds come last so
    /// they blend over the opaque parts.
    pub fn instances(&self) -> Vec<MeshInstance> {
        let mut opaque = Vec::new();
        let mut translucent = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            let NodeKind::Mesh(shape) = &node.kind else {
                continue;
            };
            if !shape.visible {
                continue;
            }
            let model = self.world_matrix(NodeId(i));
            let inst = MeshInstance::new(model, normal_matrix(model), shape.color);
            if shape.color[3] < 1.0 {
                translucent.push(inst);
            } else {
                opaque.push(inst);
            }
        }
        opaque.extend(translucent);
        opaque
    }

    /// Printable tree rooted at `id`, one line per node.
    pub fn dump(&self, id: NodeId) -> Vec<String> {
        let mut lines = Vec::new();
        self.dump_into(id, &mut lines, true, "");
        lines
    }

    fn dump_into(&self, id: NodeId, lines: &mut Vec<String>, is_last: bool, prefix: &str) {
        let node = &self.nodes[id.0];
        let connector = match (prefix.is_empty(), is_last) {
            (true, _) => "",
            (false, true) => "└─",
            (false, false) => "├─",
        };
        let name = if node.name.is_empty() {
            "*no-name*"
        } else {
            node.name.as_str()
        };
        lines.push(format!("{prefix}{connector}{name} [{}]", node.kind.type_name()));
        let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate() {
            self.dump_into(*child, lines, i == last, &child_prefix);
        }
    }
}

#[inline]
fn normal_matrix(model: Mat4) -> Mat3 {
    Mat3::from_mat4(model).inverse().transpose()
}

/// Named nodes of the brain model and the ids the session needs.
#[derive(Clone, Copy, Debug)]
pub struct BrainNodes {
    pub brain: NodeId,
    pub left_hemisphere: NodeId,
    pub right_hemisphere: NodeId,
}

pub const BRAIN: &str = "brain";
pub const LEFT_HEMISPHERE: &str = "left-hemisphere";
pub const RIGHT_HEMISPHERE: &str = "right-hemisphere";

/// Build the brain: two hemisphere groups, each holding a cerebrum, a
/// cerebellum and an invisible bounding mesh. The left side is a mirrored
/// copy of the right.
pub fn build_brain_scene() -> Scene {
    let mut scene = Scene::new();
    let brain = scene.add(
        BRAIN,
        NodeKind::Object3D,
        Transform::from_position(brain_start_position()),
        None,
    );

    let cerebrum = Transform::from_position_scale(
        Vec3::new(0.48, 0.75, 0.1),
        Vec3::new(0.5, 0.6, 0.95),
    );
    let cerebellum = Transform::from_position_scale(
        Vec3::new(0.3, 0.32, -0.7),
        Vec3::new(0.3, 0.25, 0.28),
    );
    let bounds = Transform::from_position_scale(
        Vec3::new(0.45, 0.7, -0.05),
        Vec3::new(0.58, 0.72, 1.05),
    );

    let left = scene.add(LEFT_HEMISPHERE, NodeKind::Group, Transform::IDENTITY, Some(brain));
    scene.add(
        "cerebrum-left",
        mesh(MeshRole::Cerebrum, CEREBRUM_COLOR, true),
        cerebrum.mirrored_x(),
        Some(left),
    );
    scene.add(
        "cerebellum-left",
        mesh(MeshRole::Cerebellum, CEREBELLUM_COLOR, true),
        cerebellum.mirrored_x(),
        Some(left),
    );
    scene.add(
        "bounding-mesh-left-hemisphere",
        mesh(MeshRole::Bounds, BOUNDS_LEFT_COLOR, false),
        bounds.mirrored_x(),
        Some(left),
    );

    let right = scene.add(RIGHT_HEMISPHERE, NodeKind::Group, Transform::IDENTITY, Some(brain));
    scene.add(
        "cerebrum-right",
        mesh(MeshRole::Cerebrum, CEREBRUM_COLOR, true),
        cerebrum,
        Some(right),
    );
    scene.add(
        "cerebellum-right",
        mesh(MeshRole::Cerebellum, CEREBELLUM_COLOR, true),
        cerebellum,
        Some(right),
    );
    scene.add(
        "bounding-mesh-right-hemisphere",
        mesh(MeshRole::Bounds, BOUNDS_RIGHT_COLOR, false),
        bounds,
        Some(right),
    );
    scene
}

impl BrainNodes {
    pub fn locate(scene: &Scene) -> Result<Self, SceneError> {
        Ok(Self {
            brain: scene.require(BRAIN)?,
            left_hemisphere: scene.require(LEFT_HEMISPHERE)?,
            right_hemisphere: scene.require(RIGHT_HEMISPHERE)?,
        })
    }
}

#[inline]
fn mesh(role: MeshRole, color: [f32; 4], visible: bool) -> NodeKind {
    NodeKind::Mesh(MeshShape {
        role,
        color,
        visible,
    })
}
