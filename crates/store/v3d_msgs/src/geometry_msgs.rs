//! Definitions for the ROS2 `geometry_msgs` package.
//!
//! Based on definitions taken from <https://github.com/ros2/common_interfaces/tree/rolling/geometry_msgs>

use serde::{Deserialize, Serialize};

use super::std_msgs::Header;

/// This represents a vector in free space.
///
/// This is semantically different than a point: a vector is always anchored
/// at the origin, and a transform applied to a vector only applies its
/// rotational component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// This represents an orientation in free space in quaternion form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// This contains the position of a point in free space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A representation of pose in free space, composed of position and orientation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

/// A pose with reference coordinate frame, timestamp and display key.
///
/// This is the wire schema handled by the pose marker client: the stock
/// `PoseStamped` fields plus the `ns`/`id` pair that keys the displayed
/// marker instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoseStamped {
    pub header: Header,
    pub pose: Pose,

    /// Namespace for this pose, used with `id` to key the displayed marker.
    pub ns: String,

    /// Identifier distinguishing this pose from others in the same namespace.
    pub id: String,
}

/// This represents the transform between two coordinate frames in free space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
}

/// This expresses a transform from coordinate frame `header.frame_id`
/// to the coordinate frame `child_frame_id` at the time of `header.stamp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformStamped {
    pub header: Header,
    pub child_frame_id: String,
    pub transform: Transform,
}
