//! Demo render objects: a colored cube mesh and a point light.
//!
//! These are the minimal stand-ins a renderer backend would consume; the
//! demo only needs their transforms and names.

use glam::{EulerRot, Mat4, Quat, Vec3};
use nimbus_3d_world::nimbus3d::scene::RenderObject;

/// A unit cube with a solid color
pub struct CubeMesh {
    pub translation: Vec3,
    /// Euler angles in radians (applied X, then Y, then Z)
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub visible: bool,
}

impl CubeMesh {
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color,
            visible: true,
        }
    }
}

impl RenderObject for CubeMesh {
    fn world_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn name(&self) -> &str {
        "cube"
    }
}

/// An omnidirectional light source
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl PointLight {
    pub fn new(color: [f32; 3], intensity: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            color,
            intensity,
        }
    }
}

impl RenderObject for PointLight {
    fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    fn name(&self) -> &str {
        "point_light"
    }
}

#[cfg(test)]
#[path = "objects_tests.rs"]
mod tests;
