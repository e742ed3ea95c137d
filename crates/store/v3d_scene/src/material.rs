//! Flat-color materials.

/// RGBA color with float components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A flat (unlit) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
}

impl Material {
    /// Make a material of a single flat color.
    pub fn flat_color(color: Color) -> Self {
        Self { color }
    }

    /// Whether the material needs alpha blending.
    pub fn is_transparent(&self) -> bool {
        self.color.a < 1.0
    }
}
