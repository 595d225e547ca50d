//! Central scene lifecycle manager.
//!
//! Tracks which items are live in a scene, runs their setup/teardown hooks
//! exactly once per registration, and fans a per-frame time delta out to
//! every registered item.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{nimbus_debug, nimbus_trace};

use super::scene::Scene;
use super::scene_item::{ObjectItem, SharedSceneItem};
use super::scene_object::RenderObject;

/// Lifecycle manager coordinating [`SceneItem`](super::SceneItem)
/// membership against an owned [`Scene`].
///
/// Membership is tracked by handle identity: registering a clone of an
/// already-registered `Arc` is a no-op, and two items with identical
/// contents are still two distinct members. The manager owns the backing
/// scene for its whole lifetime; `clear` empties it but never recreates it.
///
/// All operations run on the caller's thread; nothing here blocks or
/// defers. A panicking item hook propagates to the caller and leaves items
/// processed earlier in the same call fully registered (batch calls are not
/// transactional).
pub struct SceneManager {
    /// Registered items, keyed by handle identity
    children: FxHashMap<usize, SharedSceneItem>,
    /// Backing scene, created once and reused across clears
    scene: Scene,
}

const LOG_SOURCE: &str = "nimbus3d::SceneManager";

impl SceneManager {
    /// Create a new empty manager with a fresh scene
    pub fn new() -> Self {
        Self {
            children: FxHashMap::default(),
            scene: Scene::new(),
        }
    }

    /// Identity of a shared item: the address of its allocation
    fn item_id(item: &SharedSceneItem) -> usize {
        Arc::as_ptr(item) as *const () as usize
    }

    /// Register items: each item not already a member has `init` called
    /// with the backing scene, then joins the membership set.
    ///
    /// Already-registered items are skipped with no side effects, so a
    /// second `add` of the same handle never re-runs `init`.
    pub fn add(&mut self, items: &[SharedSceneItem]) {
        for item in items {
            let id = Self::item_id(item);
            if self.children.contains_key(&id) {
                continue;
            }
            item.lock().unwrap().init(&mut self.scene);
            self.children.insert(id, item.clone());
            nimbus_trace!(LOG_SOURCE, "item registered ({} total)", self.children.len());
        }
    }

    /// Wrap a render object in an [`ObjectItem`] (no update closure) and
    /// register it, returning the shared handle for later `remove`.
    pub fn add_object<T: RenderObject + 'static>(&mut self, object: T) -> SharedSceneItem {
        let item = ObjectItem::new(object).shared();
        self.add(std::slice::from_ref(&item));
        item
    }

    /// Unregister items: each current member has `destroy` called with the
    /// backing scene, then leaves the membership set.
    ///
    /// Items that are not members are skipped with no side effects, so
    /// `destroy` never runs for a handle that was never (or is no longer)
    /// registered.
    pub fn remove(&mut self, items: &[SharedSceneItem]) {
        for item in items {
            let id = Self::item_id(item);
            if let Some(registered) = self.children.get(&id).cloned() {
                registered.lock().unwrap().destroy(&mut self.scene);
                self.children.remove(&id);
                nimbus_trace!(LOG_SOURCE, "item removed ({} total)", self.children.len());
            }
        }
    }

    /// Advance every registered item by `dt` milliseconds.
    ///
    /// Dispatch order across items is unspecified; items must not rely on
    /// siblings having updated earlier in the same tick. `dt` is passed
    /// through unmodified, however large.
    pub fn update(&mut self, dt: f32) {
        for item in self.children.values() {
            item.lock().unwrap().update(dt);
        }
    }

    /// Destroy every registered item, then wipe the scene.
    ///
    /// The final wipe also reclaims content placed in the scene directly
    /// (via [`scene_mut`](SceneManager::scene_mut)) rather than through a
    /// registered item. Afterwards the manager is in its freshly-built
    /// state, with the same backing scene reused.
    pub fn clear(&mut self) {
        let item_count = self.children.len();
        let object_count = self.scene.object_count();

        for item in self.children.values() {
            item.lock().unwrap().destroy(&mut self.scene);
        }
        self.children.clear();
        self.scene.clear();

        nimbus_debug!(
            LOG_SOURCE,
            "cleared {} items, {} scene objects",
            item_count,
            object_count
        );
    }

    /// Whether the handle is a current member
    pub fn contains(&self, item: &SharedSceneItem) -> bool {
        self.children.contains_key(&Self::item_id(item))
    }

    /// Number of registered items
    pub fn item_count(&self) -> usize {
        self.children.len()
    }

    /// Whether no items are registered
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The backing scene (render collaborators read it each frame)
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the backing scene.
    ///
    /// Content added here bypasses item tracking and is only reclaimed by
    /// [`clear`](SceneManager::clear).
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
