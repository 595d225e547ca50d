//! Renderable object types for the scene system.
//!
//! A render object is the opaque unit of content a Scene stores: anything
//! with a world transform that a renderer could draw. Objects are shared
//! between the code that animates them and the scene that exposes them to
//! the renderer.

use std::sync::{Arc, Mutex};

use glam::Mat4;
use slotmap::new_key_type;

new_key_type! {
    /// Stable key for a render object within a [`Scene`](super::Scene).
    ///
    /// Keys remain valid while other objects are added or removed.
    /// A key becomes invalid only when its own object is removed.
    pub struct SceneObjectKey;
}

/// Renderable content that can live in a [`Scene`](super::Scene).
pub trait RenderObject: Send {
    /// World transform of this object.
    fn world_matrix(&self) -> Mat4;

    /// Whether a renderer should draw this object.
    fn is_visible(&self) -> bool {
        true
    }

    /// Name used in logs and debugging output.
    fn name(&self) -> &str {
        "object"
    }
}

/// Shared handle to a render object.
///
/// The creating code keeps one handle to mutate the object between frames;
/// the scene holds another so the render loop can read it.
pub type SharedRenderObject = Arc<Mutex<dyn RenderObject>>;

#[cfg(test)]
#[path = "scene_object_tests.rs"]
mod tests;
