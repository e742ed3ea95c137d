//! Feeding a [`TfClient`] from `/tf` messages.

use glam::{Quat, Vec3};

use v3d_msgs::tf2_msgs::TFMessage;
use v3d_scene::{TfClient, Transform};

/// Record every transform in `message`, keyed by child frame.
///
/// Later transforms for the same child frame overwrite earlier ones, both
/// within one message and across messages.
pub fn apply_tf_message(tf_client: &TfClient, message: &TFMessage) {
    for stamped in &message.transforms {
        let t = &stamped.transform;
        let transform = Transform::new(
            Vec3::new(
                t.translation.x as f32,
                t.translation.y as f32,
                t.translation.z as f32,
            ),
            Quat::from_xyzw(
                t.rotation.x as f32,
                t.rotation.y as f32,
                t.rotation.z as f32,
                t.rotation.w as f32,
            ),
        );
        tf_client.update_transform(&stamped.child_frame_id, transform);
    }
}
