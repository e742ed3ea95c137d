//! Marker trait and display-registry key.

use v3d_scene::{NodeKey, Scene};

/// Key identifying one displayed marker instance.
///
/// A structured (namespace, identifier) pair; two keys are equal only when
/// both components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerKey {
    pub ns: String,
    pub id: String,
}

impl MarkerKey {
    pub fn new(ns: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            ns: ns.into(),
            id: id.into(),
        }
    }
}

impl std::fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.ns, self.id)
    }
}

/// Uniform surface of a marker renderable.
///
/// All marker types expose the same update/dispose pair so clients can treat
/// them interchangeably, whether or not a given type supports in-place
/// updates.
pub trait Marker {
    /// The message type this marker is built from.
    type Message;

    /// The marker's root scene node.
    fn node(&self) -> NodeKey;

    /// Apply a new message in place. Returns `true` on success; marker types
    /// that are rebuilt per message rather than updated report success
    /// without touching the scene.
    fn update(&mut self, scene: &mut Scene, message: &Self::Message) -> bool;

    /// Release all rendering resources owned by this marker and detach its
    /// children. The marker is unusable for rendering afterwards.
    fn dispose(&mut self, scene: &mut Scene);
}
