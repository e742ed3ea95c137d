//! Definitions for the ROS2 `std_msgs` package.
//!
//! Based on definitions taken from <https://github.com/ros2/common_interfaces/tree/rolling/std_msgs>

use serde::{Deserialize, Serialize};

use super::builtin_interfaces::Time;

/// Standard metadata for higher-level stamped data types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    /// Two-integer timestamp that is expressed as seconds and nanoseconds.
    pub stamp: Time,

    /// The coordinate frame this data is associated with.
    pub frame_id: String,
}
