/// Scene item contract and the single-object adapter.
///
/// A SceneItem is a logical unit of scene content with lifecycle hooks:
/// it attaches content on init, detaches it on destroy, and may advance
/// internal state once per frame. Most content is a single render object
/// and uses the ObjectItem adapter; composite items implement the trait
/// directly.

use std::sync::{Arc, Mutex};

use super::scene::Scene;
use super::scene_object::{RenderObject, SceneObjectKey};

/// A unit of scene content that hooks into the lifecycle of a
/// [`SceneManager`](super::SceneManager).
///
/// `init` and `destroy` are each called at most once per registration; the
/// manager guarantees this. `update` has a no-op default for items with
/// nothing to animate.
pub trait SceneItem: Send {
    /// Attach this item's content to the scene.
    fn init(&mut self, scene: &mut Scene);

    /// Detach this item's content from the scene.
    fn destroy(&mut self, scene: &mut Scene);

    /// Advance internal state by `dt` milliseconds.
    fn update(&mut self, _dt: f32) {}
}

/// Shared handle to a scene item.
///
/// Registration is tracked by handle identity (the allocation, not the
/// contents): two handles are the same item only if they are clones of one
/// `Arc`.
pub type SharedSceneItem = Arc<Mutex<dyn SceneItem>>;

/// Per-frame update closure for an [`ObjectItem`].
pub type UpdateFn<T> = Box<dyn FnMut(&mut T, f32) + Send>;

/// A [`SceneItem`] wrapping a single render object, with an optional
/// per-frame update closure.
///
/// The adapter shares ownership of the object (the scene holds a second
/// handle while attached) but exclusively owns the attachment itself: the
/// scene key recorded by `init` and released by `destroy`.
pub struct ObjectItem<T: RenderObject + 'static> {
    object: Arc<Mutex<T>>,
    update_fn: Option<UpdateFn<T>>,
    key: Option<SceneObjectKey>,
}

impl<T: RenderObject + 'static> ObjectItem<T> {
    /// Create an item for a static object (no per-frame update)
    pub fn new(object: T) -> Self {
        Self {
            object: Arc::new(Mutex::new(object)),
            update_fn: None,
            key: None,
        }
    }

    /// Create an item whose object is advanced every frame.
    ///
    /// The closure receives the locked object and the elapsed milliseconds.
    pub fn with_update(object: T, update_fn: impl FnMut(&mut T, f32) + Send + 'static) -> Self {
        Self {
            object: Arc::new(Mutex::new(object)),
            update_fn: Some(Box::new(update_fn)),
            key: None,
        }
    }

    /// Shared handle to the wrapped object
    pub fn object(&self) -> &Arc<Mutex<T>> {
        &self.object
    }

    /// Whether the object is currently attached to a scene
    pub fn is_attached(&self) -> bool {
        self.key.is_some()
    }

    /// Wrap this item into the shared handle the manager registers
    pub fn shared(self) -> SharedSceneItem {
        Arc::new(Mutex::new(self))
    }
}

impl<T: RenderObject + 'static> SceneItem for ObjectItem<T> {
    fn init(&mut self, scene: &mut Scene) {
        if self.key.is_none() {
            self.key = Some(scene.add(self.object.clone()));
        }
    }

    fn destroy(&mut self, scene: &mut Scene) {
        if let Some(key) = self.key.take() {
            scene.remove(key);
        }
    }

    fn update(&mut self, dt: f32) {
        if let Some(update_fn) = &mut self.update_fn {
            let mut object = self.object.lock().unwrap();
            update_fn(&mut object, dt);
        }
    }
}

#[cfg(test)]
#[path = "scene_item_tests.rs"]
mod tests;
