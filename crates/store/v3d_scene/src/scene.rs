//! Node arena and parent/child bookkeeping.

use glam::{Quat, Vec3};
use slotmap::SlotMap;

use crate::geometry::Geometry;
use crate::material::Material;

slotmap::new_key_type! {
    /// Handle to a node in a [`Scene`].
    pub struct NodeKey;
}

/// Local transform of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What a node represents in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Plain grouping node with no renderable resources of its own.
    Group,

    /// Triangle mesh with geometry and material resources.
    Mesh,

    /// Composite resource loaded from an external mesh file; its children
    /// form the loaded scene hierarchy.
    MeshResource,
}

/// A node in the scene graph.
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    pub transform: Transform,
    geometry: Option<Geometry>,
    material: Option<Material>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            transform: Transform::IDENTITY,
            geometry: None,
            material: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Release this node's geometry and material resources.
    ///
    /// Nodes without resources are skipped silently; calling this twice is
    /// fine.
    pub fn release_resources(&mut self) {
        self.geometry = None;
        self.material = None;
    }
}

/// Arena of scene nodes.
///
/// All structural mutation goes through the scene so that parent and child
/// links stay consistent. Operations on stale keys are safe no-ops.
#[derive(Default)]
pub struct Scene {
    nodes: SlotMap<NodeKey, Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an empty grouping node.
    pub fn spawn_group(&mut self) -> NodeKey {
        self.nodes.insert(Node::new(NodeKind::Group))
    }

    /// Spawn a mesh node owning the given geometry and material.
    pub fn spawn_mesh(&mut self, geometry: Geometry, material: Material) -> NodeKey {
        let mut node = Node::new(NodeKind::Mesh);
        node.geometry = Some(geometry);
        node.material = Some(material);
        self.nodes.insert(node)
    }

    /// Spawn a composite mesh-resource node. The loaded file's hierarchy is
    /// attached underneath it.
    pub fn spawn_mesh_resource(&mut self) -> NodeKey {
        self.nodes.insert(Node::new(NodeKind::MeshResource))
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Children of a node, empty for stale keys.
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes.get(key).map_or(&[], |n| n.children())
    }

    /// Number of live nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` under `parent`, detaching it from any previous parent
    /// first.
    pub fn attach(&mut self, parent: NodeKey, child: NodeKey) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
    }

    /// Detach `child` from its parent. A node without a parent (or a stale
    /// key) is a safe no-op.
    pub fn detach(&mut self, child: NodeKey) {
        let Some(parent) = self.nodes.get(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
    }

    /// Detach `key` and remove it and all its descendants from the arena.
    pub fn despawn_subtree(&mut self, key: NodeKey) {
        self.detach(key);
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
        }
    }
}
