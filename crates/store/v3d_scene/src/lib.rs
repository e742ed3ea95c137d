//! Scene graph data model for viz3d.
//!
//! Nodes live in an arena owned by [`Scene`] and are addressed by
//! [`NodeKey`] handles; renderables own handles instead of inheriting from a
//! node type. The crate also provides the directional-arrow primitive, flat
//! color materials, mesh-resource nodes and the frame-tracking wrapper used
//! to anchor renderables to TF coordinate frames.
//!
//! This is the model a rendering backend would consume; GPU upload and draw
//! submission are out of scope.

mod arrow;
mod frame;
mod geometry;
mod material;
mod mesh_resource;
mod scene;

pub use arrow::{Arrow, ArrowOptions};
pub use frame::{FrameTrackingNode, FrameTransformSource, TfClient};
pub use geometry::Geometry;
pub use material::{Color, Material};
pub use mesh_resource::MeshLoader;
pub use scene::{Node, NodeKey, NodeKind, Scene, Transform};
