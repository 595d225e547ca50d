/// Scene — the backing container of renderable content.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. The scene does
/// not know why an object is present; item lifecycle bookkeeping lives in
/// the SceneManager, and raw content may also be placed here directly by
/// setup code.

use slotmap::SlotMap;

use super::scene_object::{SceneObjectKey, SharedRenderObject};

/// A scene containing shared render objects.
///
/// Objects are addressed via stable keys ([`SceneObjectKey`]); a key stays
/// valid until its own object is removed. A render loop iterates the scene
/// through [`objects`](Scene::objects) while other handles to the same
/// objects mutate them between frames.
pub struct Scene {
    objects: SlotMap<SceneObjectKey, SharedRenderObject>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Add an object to the scene, returning its stable key
    pub fn add(&mut self, object: SharedRenderObject) -> SceneObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object by key, returning its handle.
    ///
    /// Returns None if the key is not present (already removed or never
    /// added); the scene is unchanged in that case.
    pub fn remove(&mut self, key: SceneObjectKey) -> Option<SharedRenderObject> {
        self.objects.remove(key)
    }

    /// Get an object by key
    pub fn object(&self, key: SceneObjectKey) -> Option<&SharedRenderObject> {
        self.objects.get(key)
    }

    /// Whether the key refers to a live object
    pub fn contains(&self, key: SceneObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Iterate over all objects (key, handle)
    pub fn objects(&self) -> impl Iterator<Item = (SceneObjectKey, &SharedRenderObject)> {
        self.objects.iter()
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of objects a renderer would currently draw
    pub fn visible_count(&self) -> usize {
        self.objects
            .values()
            .filter(|object| object.lock().unwrap().is_visible())
            .count()
    }

    /// Whether the scene holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove all objects, including content added outside any item
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
