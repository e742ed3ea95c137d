//! Native Zenoh pose visualization for ROS2.
//!
//! This crate provides the `viz3d-zenoh` binary that connects directly to a
//! Zenoh network (as used by `rmw_zenoh` in ROS2), subscribes to pose and TF
//! topics, and maintains the displayed scene graph.

pub mod app;
pub mod cli;
