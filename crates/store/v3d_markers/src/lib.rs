//! Marker renderables and their topic clients.
//!
//! Each marker type pairs a renderable (a scene-graph object built from one
//! message) with a topic client that subscribes to a named topic, keeps a
//! registry of the displayed instances keyed by namespace + identifier, and
//! notifies listeners on every change.
//!
//! This crate currently implements the pose marker; the [`Marker`] trait is
//! the uniform surface shared with the other marker types.

mod listeners;
mod marker;
mod pose;
mod pose_client;
mod tf;

pub use listeners::{ListenerId, ListenerSet};
pub use marker::{Marker, MarkerKey};
pub use pose::{MarkerOptions, PoseMarker, POSE_COLOR};
pub use pose_client::{PoseClientOptions, PoseTopicClient};
pub use tf::apply_tf_message;
