//! Scene lifecycle module
//!
//! Provides the scene container, the item lifecycle contract, and the
//! manager that coordinates item membership against a scene.

mod scene;
mod scene_item;
mod scene_manager;
mod scene_object;

pub use scene::Scene;
pub use scene_item::{ObjectItem, SceneItem, SharedSceneItem, UpdateFn};
pub use scene_manager::SceneManager;
pub use scene_object::{RenderObject, SceneObjectKey, SharedRenderObject};
