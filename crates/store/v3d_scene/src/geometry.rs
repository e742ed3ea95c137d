//! Triangle-mesh geometry resources.

/// An indexed triangle mesh.
///
/// Positions are in the node's local space; primitives here are generated
/// along the +X axis so arrow parts compose by translation alone.
#[derive(Debug, Clone)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl Geometry {
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Open-ended cylinder along +X from `x = 0` to `x = length`, with caps.
    ///
    /// `radius_bottom` applies at `x = 0`, `radius_top` at `x = length`.
    /// A zero radius collapses that ring to a point (see [`Geometry::cone`]).
    pub fn cylinder(radius_top: f32, radius_bottom: f32, length: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let mut positions = Vec::new();
        let mut indices = Vec::new();

        // Two rings of `segments` vertices each.
        for i in 0..segments {
            let theta = (i as f32) / (segments as f32) * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            positions.push([0.0, radius_bottom * cos, radius_bottom * sin]);
            positions.push([length, radius_top * cos, radius_top * sin]);
        }

        // Side quads.
        for i in 0..segments {
            let next = (i + 1) % segments;
            let b0 = i * 2;
            let t0 = i * 2 + 1;
            let b1 = next * 2;
            let t1 = next * 2 + 1;
            indices.extend_from_slice(&[b0, b1, t0]);
            indices.extend_from_slice(&[t0, b1, t1]);
        }

        // Cap fans around ring centers; skipped for collapsed rings.
        if radius_bottom > 0.0 {
            let center = positions.len() as u32;
            positions.push([0.0, 0.0, 0.0]);
            for i in 0..segments {
                let next = (i + 1) % segments;
                indices.extend_from_slice(&[center, next * 2, i * 2]);
            }
        }
        if radius_top > 0.0 {
            let center = positions.len() as u32;
            positions.push([length, 0.0, 0.0]);
            for i in 0..segments {
                let next = (i + 1) % segments;
                indices.extend_from_slice(&[center, i * 2 + 1, next * 2 + 1]);
            }
        }

        Self { positions, indices }
    }

    /// Cone along +X with its base at `x = 0` and apex at `x = length`.
    pub fn cone(radius: f32, length: f32, segments: u32) -> Self {
        Self::cylinder(0.0, radius, length, segments)
    }

    /// Shift all positions by `offset`.
    pub fn translated(mut self, offset: [f32; 3]) -> Self {
        for p in &mut self.positions {
            p[0] += offset[0];
            p[1] += offset[1];
            p[2] += offset[2];
        }
        self
    }

    /// Merge another mesh into this one, rebasing its indices.
    pub fn merged(mut self, other: Self) -> Self {
        let base = self.positions.len() as u32;
        self.positions.extend(other.positions);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_counts() {
        let geo = Geometry::cylinder(0.5, 0.5, 2.0, 16);
        // 2 rings + 2 cap centers
        assert_eq!(geo.vertex_count(), 16 * 2 + 2);
        // 2 triangles per side quad + 16 per cap fan, twice
        assert_eq!(geo.triangle_count(), 16 * 2 + 16 * 2);
    }

    #[test]
    fn test_cone_has_single_cap() {
        let geo = Geometry::cone(0.5, 1.0, 8);
        assert_eq!(geo.vertex_count(), 8 * 2 + 1);
        assert_eq!(geo.triangle_count(), 8 * 2 + 8);
    }

    #[test]
    fn test_merged_rebases_indices() {
        let a = Geometry::cone(0.5, 1.0, 8);
        let a_verts = a.vertex_count();
        let b = Geometry::cone(0.5, 1.0, 8).translated([2.0, 0.0, 0.0]);
        let merged = a.merged(b);

        assert_eq!(merged.vertex_count(), a_verts * 2);
        assert!(merged.indices().iter().any(|&i| i >= a_verts as u32));
        let max_x = merged.positions().iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 3.0);
    }

    #[test]
    fn test_cylinder_spans_length() {
        let geo = Geometry::cylinder(0.1, 0.1, 3.0, 8);
        let min_x = geo.positions().iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        let max_x = geo.positions().iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        assert_eq!(min_x, 0.0);
        assert_eq!(max_x, 3.0);
    }
}
