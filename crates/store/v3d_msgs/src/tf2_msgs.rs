//! Definitions for the ROS2 `tf2_msgs` package.
//!
//! Based on definitions taken from <https://github.com/ros2/geometry2/tree/rolling/tf2_msgs>

use serde::{Deserialize, Serialize};

use super::geometry_msgs::TransformStamped;

/// A batch of coordinate-frame transforms, as published on `/tf`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TFMessage {
    pub transforms: Vec<TransformStamped>,
}
