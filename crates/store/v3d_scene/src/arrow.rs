//! Directional-arrow primitive: a shaft cylinder merged with a head cone
//! into a single mesh node.

use glam::{Quat, Vec3};

use crate::geometry::Geometry;
use crate::material::Material;
use crate::scene::{NodeKey, Scene, Transform};

const RADIAL_SEGMENTS: u32 = 16;

/// Construction parameters for an [`Arrow`].
#[derive(Debug, Clone, Copy)]
pub struct ArrowOptions {
    /// World-space position of the arrow's tail.
    pub origin: Vec3,

    /// Unit direction the arrow points along. Not validated; degenerate
    /// directions propagate into the node transform.
    pub direction: Vec3,

    /// Total length, tail to tip.
    pub length: f32,

    pub head_length: f32,
    pub shaft_diameter: f32,
    pub head_diameter: f32,

    pub material: Material,
}

/// A directional arrow.
///
/// Shaft and head are tessellated along +X and merged into one geometry, so
/// the arrow occupies a single mesh node whose rotation carries the
/// direction and whose translation carries the origin.
#[derive(Debug)]
pub struct Arrow {
    node: NodeKey,
    length: f32,
    head_length: f32,
    shaft_diameter: f32,
    head_diameter: f32,
}

impl Arrow {
    pub fn new(scene: &mut Scene, options: ArrowOptions) -> Self {
        let shaft_length = options.length - options.head_length;
        let geometry = Geometry::cylinder(
            options.shaft_diameter / 2.0,
            options.shaft_diameter / 2.0,
            shaft_length,
            RADIAL_SEGMENTS,
        )
        .merged(
            Geometry::cone(options.head_diameter / 2.0, options.head_length, RADIAL_SEGMENTS)
                .translated([shaft_length, 0.0, 0.0]),
        );

        let node = scene.spawn_mesh(geometry, options.material);
        let rotation = Quat::from_rotation_arc(Vec3::X, options.direction);
        if let Some(mesh) = scene.get_mut(node) {
            mesh.transform = Transform::new(options.origin, rotation);
        }

        Self {
            node,
            length: options.length,
            head_length: options.head_length,
            shaft_diameter: options.shaft_diameter,
            head_diameter: options.head_diameter,
        }
    }

    /// The arrow's mesh node.
    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// World-space tail position, read back from the node.
    pub fn origin(&self, scene: &Scene) -> Vec3 {
        scene
            .get(self.node)
            .map_or(Vec3::ZERO, |n| n.transform.translation)
    }

    /// Direction the arrow points along, read back from the node.
    pub fn direction(&self, scene: &Scene) -> Vec3 {
        scene
            .get(self.node)
            .map_or(Vec3::X, |n| n.transform.rotation * Vec3::X)
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn head_length(&self) -> f32 {
        self.head_length
    }

    pub fn shaft_diameter(&self) -> f32 {
        self.shaft_diameter
    }

    pub fn head_diameter(&self) -> f32 {
        self.head_diameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;

    fn material() -> Material {
        Material::flat_color(Color::new(0.0, 0.0, 1.0, 1.0))
    }

    fn options(direction: Vec3) -> ArrowOptions {
        ArrowOptions {
            origin: Vec3::new(1.0, 2.0, 3.0),
            direction,
            length: 1.0,
            head_length: 0.23,
            shaft_diameter: 0.1,
            head_diameter: 0.2,
            material: material(),
        }
    }

    #[test]
    fn test_origin_and_direction() {
        let mut scene = Scene::new();
        let arrow = Arrow::new(&mut scene, options(Vec3::Y));

        assert_eq!(arrow.origin(&scene), Vec3::new(1.0, 2.0, 3.0));
        assert!((arrow.direction(&scene) - Vec3::Y).length() < 1e-6);

        let node = scene.get(arrow.node()).unwrap();
        assert!(node.geometry().is_some());
        assert!(node.material().is_some());
    }

    #[test]
    fn test_geometry_spans_full_length() {
        let mut scene = Scene::new();
        let arrow = Arrow::new(&mut scene, options(Vec3::X));

        let node = scene.get(arrow.node()).unwrap();
        let max_x = node
            .geometry()
            .unwrap()
            .positions()
            .iter()
            .map(|p| p[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - 1.0).abs() < 1e-6);
    }
}
