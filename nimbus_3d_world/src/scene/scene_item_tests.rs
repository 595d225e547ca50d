/// Tests for SceneItem and ObjectItem
///
/// These tests validate the adapter's attach/detach bookkeeping, the
/// optional update closure, and the trait's no-op default update.

use super::*;
use crate::scene::{RenderObject, Scene};
use glam::Mat4;

// ============================================================================
// Helper Functions
// ============================================================================

struct Spinner {
    angle: f32,
}

impl RenderObject for Spinner {
    fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.angle)
    }

    fn name(&self) -> &str {
        "spinner"
    }
}

fn spinner() -> Spinner {
    Spinner { angle: 0.0 }
}

// ============================================================================
// Tests: Construction
// ============================================================================

#[test]
fn test_new_item_is_detached() {
    let item = ObjectItem::new(spinner());
    assert!(!item.is_attached());
}

#[test]
fn test_with_update_item_is_detached() {
    let item = ObjectItem::with_update(spinner(), |_, _| {});
    assert!(!item.is_attached());
}

// ============================================================================
// Tests: Init / Destroy
// ============================================================================

#[test]
fn test_init_attaches_object() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());

    item.init(&mut scene);

    assert!(item.is_attached());
    assert_eq!(scene.object_count(), 1);
}

#[test]
fn test_init_twice_attaches_once() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());

    item.init(&mut scene);
    item.init(&mut scene);

    assert_eq!(scene.object_count(), 1);
}

#[test]
fn test_destroy_detaches_object() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());

    item.init(&mut scene);
    item.destroy(&mut scene);

    assert!(!item.is_attached());
    assert_eq!(scene.object_count(), 0);
}

#[test]
fn test_destroy_twice_is_noop() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());

    item.init(&mut scene);
    item.destroy(&mut scene);
    item.destroy(&mut scene);

    assert_eq!(scene.object_count(), 0);
}

#[test]
fn test_destroy_without_init_is_noop() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());

    item.destroy(&mut scene);

    assert_eq!(scene.object_count(), 0);
    assert!(!item.is_attached());
}

#[test]
fn test_destroy_only_removes_own_object() {
    let mut scene = Scene::new();
    let mut item_a = ObjectItem::new(spinner());
    let mut item_b = ObjectItem::new(spinner());

    item_a.init(&mut scene);
    item_b.init(&mut scene);
    item_a.destroy(&mut scene);

    assert_eq!(scene.object_count(), 1);
    assert!(item_b.is_attached());
}

#[test]
fn test_reinit_after_destroy_reattaches() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());

    item.init(&mut scene);
    item.destroy(&mut scene);
    item.init(&mut scene);

    assert!(item.is_attached());
    assert_eq!(scene.object_count(), 1);
}

// ============================================================================
// Tests: Update
// ============================================================================

#[test]
fn test_update_runs_closure_on_object() {
    let mut item = ObjectItem::with_update(spinner(), |object, dt| {
        object.angle += 0.001 * dt;
    });

    item.update(16.0);
    item.update(16.0);

    let angle = item.object().lock().unwrap().angle;
    assert!((angle - 0.032).abs() < 1e-6);
}

#[test]
fn test_update_without_closure_is_noop() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::new(spinner());
    item.init(&mut scene);

    item.update(33.3);

    assert_eq!(item.object().lock().unwrap().angle, 0.0);
    assert_eq!(scene.object_count(), 1);
}

#[test]
fn test_scene_sees_updated_object() {
    let mut scene = Scene::new();
    let mut item = ObjectItem::with_update(spinner(), |object, dt| {
        object.angle += 0.001 * dt;
    });
    item.init(&mut scene);

    item.update(100.0);

    // The scene holds the same object the closure mutates
    let angle = item.object().lock().unwrap().angle;
    assert!(angle > 0.0);

    let (_, shared) = scene.objects().next().unwrap();
    let matrix = shared.lock().unwrap().world_matrix();
    assert_eq!(matrix, Mat4::from_rotation_z(angle));
}

// ============================================================================
// Tests: Trait Default Update
// ============================================================================

struct InertItem {
    init_calls: usize,
}

impl SceneItem for InertItem {
    fn init(&mut self, _scene: &mut Scene) {
        self.init_calls += 1;
    }

    fn destroy(&mut self, _scene: &mut Scene) {}
}

#[test]
fn test_default_update_is_noop() {
    let mut scene = Scene::new();
    let mut item = InertItem { init_calls: 0 };

    item.init(&mut scene);
    item.update(16.0);
    item.update(1000.0);

    assert_eq!(item.init_calls, 1);
}

// ============================================================================
// Tests: Shared Handle
// ============================================================================

#[test]
fn test_shared_handle_usable_as_scene_item() {
    let mut scene = Scene::new();
    let shared: SharedSceneItem = ObjectItem::new(spinner()).shared();

    shared.lock().unwrap().init(&mut scene);
    assert_eq!(scene.object_count(), 1);

    shared.lock().unwrap().destroy(&mut scene);
    assert_eq!(scene.object_count(), 0);
}
