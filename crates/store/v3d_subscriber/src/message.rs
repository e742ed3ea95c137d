//! Message type representing data received from a topic subscription.

/// A message received from a subscribed topic.
#[derive(Debug, Clone)]
pub struct TopicMessage {
    /// The ROS2 topic name (e.g., `/robot/pose`).
    pub topic_name: String,

    /// The ROS2 message type name (e.g., `geometry_msgs::msg::PoseStamped`).
    pub type_name: String,

    /// The raw CDR-encoded payload bytes.
    pub payload: Vec<u8>,

    /// Wall-clock receive time in nanoseconds since Unix epoch.
    pub receive_time_ns: u64,
}
