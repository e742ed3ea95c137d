//! Zenoh session and per-topic subscription management.
//!
//! This crate manages Zenoh subscribers for individually named ROS2 topics
//! (as published by `rmw_zenoh`) and forwards the received CDR payloads as
//! [`TopicMessage`]s over a bounded channel.

mod message;
mod session;
mod subscriber;
mod topic;

pub use message::TopicMessage;
pub use session::RosSession;
pub use subscriber::SubscriptionManager;
pub use topic::{Compression, TopicConfig};
