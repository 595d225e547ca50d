/*!
# Nimbus 3D World

Scene lifecycle management for the Nimbus 3D stack.

This crate provides the membership and lifecycle layer that sits between a
render loop and the objects of a 3D scene. It tracks which logical objects
are live, runs their setup/teardown hooks exactly once per registration, and
fans a per-frame time delta out to every registered object.

## Architecture

- **Scene**: owned container of shared renderable objects with stable keys
- **RenderObject**: trait for anything a scene can hold
- **SceneItem**: lifecycle contract (init / destroy / optional update)
- **ObjectItem**: provided adapter wrapping one object plus an update closure
- **SceneManager**: identity-tracked membership with idempotent add/remove

The render loop, camera, and renderer backend are collaborators that live
outside this crate; they consume the scene through `SceneManager::scene()`.
*/

// Internal modules
mod error;
pub mod log;
pub mod scene;

// Main nimbus3d namespace module
pub mod nimbus3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only; the nimbus_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Scene sub-module with the lifecycle types
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
