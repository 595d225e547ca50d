//! Demo configuration.

use nimbus_3d_world::nimbus3d::{Error, Result};

/// Demo application configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Window title
    pub window_title: String,
    /// Initial window width in logical pixels
    pub window_width: u32,
    /// Initial window height in logical pixels
    pub window_height: u32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane distance
    pub z_near: f32,
    /// Far clip plane distance
    pub z_far: f32,
    /// Cube spin rate in radians per millisecond
    pub spin_speed: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Nimbus3D Demo".to_string(),
            window_width: 1280,
            window_height: 720,
            fov_y_degrees: 75.0,
            z_near: 1.0,
            z_far: 1000.0,
            spin_speed: 0.001,
        }
    }
}

impl DemoConfig {
    /// Check the configuration before any window or camera is built
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size {}x{} is not usable",
                self.window_width, self.window_height
            )));
        }
        if self.spin_speed < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "spin speed must be non-negative, got {}",
                self.spin_speed
            )));
        }
        Ok(())
    }

    /// Aspect ratio of the configured window
    pub fn aspect(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
