//! ROS2 message definitions and CDR payload codec for viz3d.
//!
//! Message structs mirror the ROS2 `.msg` definitions they are named after
//! and are deserialized straight from the CDR payloads carried by
//! `rmw_zenoh` samples.

pub mod builtin_interfaces;
pub mod cdr;
pub mod geometry_msgs;
pub mod std_msgs;
pub mod tf2_msgs;

/// Type tag for the pose-stamped schema handled by the pose marker client.
pub const POSE_STAMPED_TYPE: &str = "geometry_msgs::msg::PoseStamped";

/// Type tag for TF transform batches.
pub const TF_MESSAGE_TYPE: &str = "tf2_msgs::msg::TFMessage";
