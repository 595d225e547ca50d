/// Tests for the demo render objects

use super::*;
use glam::{Mat4, Vec3};
use nimbus_3d_world::nimbus3d::scene::RenderObject;

// ============================================================================
// Tests: CubeMesh
// ============================================================================

#[test]
fn test_cube_defaults() {
    let cube = CubeMesh::new([1.0, 0.0, 0.0]);
    assert!(cube.is_visible());
    assert_eq!(cube.name(), "cube");
    assert_eq!(cube.color, [1.0, 0.0, 0.0]);
    assert_eq!(cube.world_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_cube_translation_reaches_world_matrix() {
    let mut cube = CubeMesh::new([1.0, 0.0, 0.0]);
    cube.translation = Vec3::new(2.0, 0.0, -1.0);

    let moved = cube.world_matrix().transform_point3(Vec3::ZERO);
    assert!((moved - Vec3::new(2.0, 0.0, -1.0)).length() < 1e-6);
}

#[test]
fn test_cube_rotation_changes_world_matrix() {
    let mut cube = CubeMesh::new([1.0, 0.0, 0.0]);
    let before = cube.world_matrix();

    cube.rotation.z += 0.5;
    cube.rotation.y += 0.5;

    assert_ne!(before, cube.world_matrix());
}

#[test]
fn test_hidden_cube() {
    let mut cube = CubeMesh::new([1.0, 0.0, 0.0]);
    cube.visible = false;
    assert!(!cube.is_visible());
}

// ============================================================================
// Tests: PointLight
// ============================================================================

#[test]
fn test_light_world_matrix_is_translation() {
    let mut light = PointLight::new([0.25, 0.25, 0.25], 250.0);
    light.position = Vec3::new(5.0, 5.0, 5.0);

    assert_eq!(
        light.world_matrix(),
        Mat4::from_translation(Vec3::new(5.0, 5.0, 5.0))
    );
    assert_eq!(light.name(), "point_light");
    assert_eq!(light.intensity, 250.0);
    assert_eq!(light.color, [0.25, 0.25, 0.25]);
}

#[test]
fn test_light_is_visible_by_default() {
    let light = PointLight::new([1.0, 1.0, 1.0], 100.0);
    assert!(light.is_visible());
}
