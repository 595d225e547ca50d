/// Perspective camera for the demo application.
///
/// Computes view and projection matrices from high-level parameters
/// (position, target, field of view). The camera is a plain value owned by
/// the demo's run loop and passed by reference where needed; there is no
/// global camera.

use glam::{Mat4, Vec3};
use nimbus_3d_world::nimbus3d::{Error, Result};

/// Perspective camera with a position/target pose
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    position: Vec3,
    target: Vec3,
    fov_y_degrees: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
}

impl PerspectiveCamera {
    /// Create a camera at the origin looking down -Z.
    ///
    /// Rejects out-of-range projection parameters.
    pub fn new(fov_y_degrees: f32, aspect: f32, z_near: f32, z_far: f32) -> Result<Self> {
        if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "field of view must be in (0, 180) degrees, got {}",
                fov_y_degrees
            )));
        }
        if !(aspect > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "aspect ratio must be positive, got {}",
                aspect
            )));
        }
        if z_near <= 0.0 || z_far <= z_near {
            return Err(Error::InvalidConfig(format!(
                "depth range [{}, {}] is not usable",
                z_near, z_far
            )));
        }

        Ok(Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov_y_degrees,
            aspect,
            z_near,
            z_far,
        })
    }

    /// Move the camera
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Aim the camera at a point
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio (called on window resize).
    ///
    /// Non-positive values are ignored; minimized windows report a zero
    /// size and must not poison the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.z_near,
            self.z_far,
        )
    }

    /// Combined view-projection matrix (projection * view)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
