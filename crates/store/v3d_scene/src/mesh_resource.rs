//! Mesh-loader selection for marker types that load external mesh files.

/// Which Collada loader implementation a marker should use for mesh files.
///
/// Carried through every marker's options for interface uniformity; marker
/// types that never load meshes (such as the pose arrow) accept and ignore
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshLoader {
    Collada,
    #[default]
    Collada2,
}
