//! Coordinate-frame tracking.
//!
//! A [`TfClient`] holds the latest known transform for each coordinate
//! frame; a [`FrameTrackingNode`] wraps a renderable node and keeps it
//! positioned in its frame by copying that transform onto the wrapper.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::scene::{NodeKey, Scene, Transform};

/// Source of per-frame transforms.
///
/// Implemented by [`TfClient`]; tests substitute their own sources.
pub trait FrameTransformSource {
    /// Latest transform of `frame_id` relative to the fixed frame, if known.
    fn lookup_transform(&self, frame_id: &str) -> Option<Transform>;
}

/// Latest-value store of frame transforms, fed from a TF topic.
///
/// Transforms are stored flat per child frame; no tree composition or
/// interpolation happens here.
#[derive(Default)]
pub struct TfClient {
    frames: RwLock<HashMap<String, Transform>>,
}

impl TfClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest transform for a frame.
    pub fn update_transform(&self, frame_id: &str, transform: Transform) {
        if let Ok(mut frames) = self.frames.write() {
            frames.insert(frame_id.to_owned(), transform);
        }
    }

    /// Number of frames with a known transform.
    pub fn frame_count(&self) -> usize {
        self.frames.read().map_or(0, |f| f.len())
    }
}

impl FrameTransformSource for TfClient {
    fn lookup_transform(&self, frame_id: &str) -> Option<Transform> {
        self.frames.read().ok()?.get(frame_id).copied()
    }
}

/// Wraps a renderable node and binds it to a named coordinate frame.
///
/// The wrapper is a group node holding the renderable as its only child;
/// [`FrameTrackingNode::sync`] copies the frame's current transform onto the
/// wrapper. Frames the source cannot resolve leave the wrapper's transform
/// unchanged.
#[derive(Debug)]
pub struct FrameTrackingNode {
    node: NodeKey,
    frame_id: String,
}

impl FrameTrackingNode {
    /// Spawn a wrapper node for `object` bound to `frame_id`.
    pub fn new(scene: &mut Scene, frame_id: impl Into<String>, object: NodeKey) -> Self {
        let node = scene.spawn_group();
        scene.attach(node, object);
        Self {
            node,
            frame_id: frame_id.into(),
        }
    }

    pub fn node(&self) -> NodeKey {
        self.node
    }

    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    /// Re-synchronize the wrapper's transform with its frame.
    pub fn sync<S: FrameTransformSource + ?Sized>(&self, scene: &mut Scene, source: &S) {
        if let Some(transform) = source.lookup_transform(&self.frame_id) {
            if let Some(node) = scene.get_mut(self.node) {
                node.transform = transform;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn test_tf_client_latest_value() {
        let tf = TfClient::new();
        assert!(tf.lookup_transform("odom").is_none());

        tf.update_transform("odom", Transform::from_translation(Vec3::X));
        tf.update_transform("odom", Transform::from_translation(Vec3::Y));

        assert_eq!(tf.frame_count(), 1);
        let t = tf.lookup_transform("odom").unwrap();
        assert_eq!(t.translation, Vec3::Y);
    }

    #[test]
    fn test_sync_applies_frame_transform() {
        let mut scene = Scene::new();
        let object = scene.spawn_group();
        let wrapper = FrameTrackingNode::new(&mut scene, "base_link", object);

        let tf = TfClient::new();
        tf.update_transform("base_link", Transform::from_translation(Vec3::new(1.0, 2.0, 3.0)));

        wrapper.sync(&mut scene, &tf);
        let node = scene.get(wrapper.node()).unwrap();
        assert_eq!(node.transform.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.children(), &[object]);
    }

    #[test]
    fn test_sync_unresolved_frame_is_noop() {
        let mut scene = Scene::new();
        let object = scene.spawn_group();
        let wrapper = FrameTrackingNode::new(&mut scene, "missing", object);

        if let Some(node) = scene.get_mut(wrapper.node()) {
            node.transform = Transform::from_translation(Vec3::X);
        }

        wrapper.sync(&mut scene, &TfClient::new());
        assert_eq!(
            scene.get(wrapper.node()).unwrap().transform.translation,
            Vec3::X
        );
    }
}
