//! Pose marker: one `PoseStamped` message → a directional arrow renderable.

use glam::{Quat, Vec3};

use v3d_msgs::geometry_msgs::PoseStamped;
use v3d_scene::{Arrow, ArrowOptions, Color, Material, MeshLoader, NodeKey, NodeKind, Scene};

use crate::marker::Marker;

/// Display color of pose arrows: opaque blue.
pub const POSE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);

const ARROW_LENGTH: f32 = 1.0;
const HEAD_LENGTH_RATIO: f32 = 0.23;
const HEAD_DIAMETER: f32 = 0.2;

/// Options shared by all marker-type renderables.
#[derive(Debug, Clone, Default)]
pub struct MarkerOptions {
    /// Base path or URL for any mesh files loaded for this marker.
    pub path: Option<String>,

    /// The Collada loader to use for mesh files.
    pub loader: Option<MeshLoader>,
}

/// A pose rendered as an arrow at the message's position, pointing along
/// the message's orientation.
///
/// The renderable owns a group node with the arrow mesh as its only child.
/// Messages are not validated: malformed numeric fields propagate as NaN
/// geometry.
pub struct PoseMarker {
    node: NodeKey,
    arrow: Arrow,
    color: Color,
    path: String,
    loader: MeshLoader,
}

impl PoseMarker {
    pub fn new(scene: &mut Scene, message: &PoseStamped, options: MarkerOptions) -> Self {
        let path = normalize_path(options.path);
        let loader = options.loader.unwrap_or_default();

        let origin = Vec3::new(
            message.pose.position.x as f32,
            message.pose.position.y as f32,
            message.pose.position.z as f32,
        );
        let q = Quat::from_xyzw(
            message.pose.orientation.x as f32,
            message.pose.orientation.y as f32,
            message.pose.orientation.z as f32,
            message.pose.orientation.w as f32,
        );
        let direction = (q * Vec3::X).normalize();

        let head_length = ARROW_LENGTH * HEAD_LENGTH_RATIO;
        let head_diameter = HEAD_DIAMETER;
        let shaft_diameter = head_diameter * 0.5;

        let node = scene.spawn_group();
        let arrow = Arrow::new(
            scene,
            ArrowOptions {
                origin,
                direction,
                length: ARROW_LENGTH,
                head_length,
                shaft_diameter,
                head_diameter,
                material: Material::flat_color(POSE_COLOR),
            },
        );
        scene.attach(node, arrow.node());

        Self {
            node,
            arrow,
            color: POSE_COLOR,
            path,
            loader,
        }
    }

    pub fn arrow(&self) -> &Arrow {
        &self.arrow
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Base path for mesh files, always terminated with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The configured mesh loader. Unused by the pose arrow itself.
    pub fn loader(&self) -> MeshLoader {
        self.loader
    }
}

impl Marker for PoseMarker {
    type Message = PoseStamped;

    fn node(&self) -> NodeKey {
        self.node
    }

    /// No-op: pose markers are replaced wholesale by their client, never
    /// updated in place. Always reports success.
    fn update(&mut self, _scene: &mut Scene, _message: &PoseStamped) -> bool {
        true
    }

    /// Free the rendering resources of every child.
    ///
    /// Composite mesh-resource children have their loaded hierarchy walked
    /// recursively, releasing each node's geometry and material (absent
    /// resources are skipped silently) and detaching every node from its
    /// parent. Plain children release their own resources. Every direct
    /// child ends up detached; calling this twice is safe.
    fn dispose(&mut self, scene: &mut Scene) {
        let children: Vec<NodeKey> = scene.children(self.node).to_vec();
        for child in children {
            let is_mesh_resource = scene
                .get(child)
                .is_some_and(|n| n.kind() == NodeKind::MeshResource);

            if is_mesh_resource {
                let loaded: Vec<NodeKey> = scene.children(child).to_vec();
                for root in loaded {
                    release_subtree(scene, root);
                    scene.detach(root);
                }
            } else if let Some(node) = scene.get_mut(child) {
                node.release_resources();
            }

            scene.detach(child);
        }
    }
}

/// Release resources of `root` and all descendants, detaching each
/// descendant from its immediate parent.
fn release_subtree(scene: &mut Scene, root: NodeKey) {
    let children: Vec<NodeKey> = scene.children(root).to_vec();
    for child in children {
        release_subtree(scene, child);
        scene.detach(child);
    }
    if let Some(node) = scene.get_mut(root) {
        node.release_resources();
    }
}

/// Default the base path and make sure it ends with a `/`.
fn normalize_path(path: Option<String>) -> String {
    let mut path = path.unwrap_or_else(|| "/".to_owned());
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

#[cfg(test)]
mod tests {
    use v3d_msgs::geometry_msgs::PoseStamped;

    use super::*;

    fn message() -> PoseStamped {
        let mut msg = PoseStamped::default();
        msg.header.frame_id = "map".to_owned();
        msg.pose.position.x = 2.0;
        msg.pose.position.y = -1.0;
        msg.pose.position.z = 0.5;
        // 90° about +Z: +X maps to +Y
        msg.pose.orientation.z = std::f64::consts::FRAC_1_SQRT_2;
        msg.pose.orientation.w = std::f64::consts::FRAC_1_SQRT_2;
        msg
    }

    #[test]
    fn test_arrow_origin_matches_position() {
        let mut scene = Scene::new();
        let marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());

        assert_eq!(marker.arrow().origin(&scene), Vec3::new(2.0, -1.0, 0.5));
    }

    #[test]
    fn test_arrow_direction_is_rotated_unit_x() {
        let mut scene = Scene::new();
        let marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());

        let dir = marker.arrow().direction(&scene);
        assert!((dir - Vec3::Y).length() < 1e-6);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_arrow_proportions() {
        let mut scene = Scene::new();
        let marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());
        let arrow = marker.arrow();

        assert_eq!(arrow.length(), 1.0);
        assert_eq!(arrow.head_length(), 0.23);
        assert_eq!(arrow.head_diameter(), 0.2);
        assert_eq!(arrow.shaft_diameter(), 0.1);
    }

    #[test]
    fn test_marker_color_is_blue() {
        let mut scene = Scene::new();
        let marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());

        assert_eq!(marker.color(), Color::new(0.0, 0.0, 1.0, 1.0));
        let mesh = scene.get(marker.arrow().node()).unwrap();
        assert_eq!(mesh.material().unwrap().color, POSE_COLOR);
    }

    #[test]
    fn test_path_normalization() {
        let mut scene = Scene::new();

        let default_path = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());
        assert_eq!(default_path.path(), "/");

        let custom = PoseMarker::new(
            &mut scene,
            &message(),
            MarkerOptions {
                path: Some("/meshes".to_owned()),
                loader: Some(MeshLoader::Collada),
            },
        );
        assert_eq!(custom.path(), "/meshes/");
        assert_eq!(custom.loader(), MeshLoader::Collada);
    }

    #[test]
    fn test_update_is_noop_success() {
        let mut scene = Scene::new();
        let mut marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());
        let origin_before = marker.arrow().origin(&scene);

        let mut other = message();
        other.pose.position.x = 99.0;
        assert!(marker.update(&mut scene, &other));

        // geometry unchanged
        assert_eq!(marker.arrow().origin(&scene), origin_before);
        assert!(scene.get(marker.arrow().node()).unwrap().geometry().is_some());
    }

    #[test]
    fn test_dispose_releases_and_detaches() {
        let mut scene = Scene::new();
        let mut marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());
        let arrow_node = marker.arrow().node();

        marker.dispose(&mut scene);

        assert!(scene.children(marker.node()).is_empty());
        let arrow = scene.get(arrow_node).unwrap();
        assert!(arrow.geometry().is_none());
        assert!(arrow.material().is_none());
        assert_eq!(arrow.parent(), None);

        // second dispose is a safe no-op
        marker.dispose(&mut scene);
    }

    #[test]
    fn test_dispose_walks_mesh_resource_hierarchy() {
        let mut scene = Scene::new();
        let mut marker = PoseMarker::new(&mut scene, &message(), MarkerOptions::default());

        // attach a loaded mesh hierarchy: resource -> group -> two meshes
        let resource = scene.spawn_mesh_resource();
        let loaded_root = scene.spawn_group();
        let material = Material::flat_color(POSE_COLOR);
        let mesh_a = scene.spawn_mesh(v3d_scene::Geometry::cone(0.1, 0.2, 8), material);
        let mesh_b = scene.spawn_mesh(v3d_scene::Geometry::cone(0.1, 0.2, 8), material);
        scene.attach(loaded_root, mesh_a);
        scene.attach(loaded_root, mesh_b);
        scene.attach(resource, loaded_root);
        scene.attach(marker.node(), resource);

        marker.dispose(&mut scene);

        for key in [mesh_a, mesh_b] {
            let node = scene.get(key).unwrap();
            assert!(node.geometry().is_none());
            assert!(node.material().is_none());
            assert_eq!(node.parent(), None);
        }
        assert_eq!(scene.get(loaded_root).unwrap().parent(), None);
        assert_eq!(scene.get(resource).unwrap().parent(), None);
    }

    #[test]
    fn test_nan_position_propagates() {
        let mut scene = Scene::new();
        let mut msg = message();
        msg.pose.position.x = f64::NAN;

        let marker = PoseMarker::new(&mut scene, &msg, MarkerOptions::default());
        assert!(marker.arrow().origin(&scene).x.is_nan());
    }
}
