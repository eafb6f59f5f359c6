use glam::Vec4;

use scenehelper::material_manager::{MaterialData, MaterialManager};
use scenehelper::scene_graph::{
    spawn_asset, Component, ComponentId, EntityId, NodeDesc, Scene, SceneLoader,
};
use scenehelper::{ListReference, SceneHelper, SkipReason};

fn materials_on(scene: &Scene, entity: EntityId) -> Vec<ComponentId> {
    scene
        .components(entity)
        .iter()
        .copied()
        .filter(|&id| scene.get_component(id).is_some_and(Component::is_material))
        .collect()
}

fn wheel_scene() -> (Scene, SceneLoader, ComponentId) {
    let mut scene = Scene::new();
    let mut materials = MaterialManager::new();
    let rubber =
        materials.add_material(MaterialData::new("Rubber", Vec4::new(0.1, 0.1, 0.1, 1.0)));
    let alloy = materials.add_material(MaterialData::new("Alloy", Vec4::splat(0.7)));

    let roots = [
        NodeDesc::new("Wheel1")
            .with_mesh("wheel", 1)
            .with_material(rubber),
        NodeDesc::new("Wheel2")
            .with_mesh("wheel", 1)
            .with_material(rubber),
    ];
    let loader = spawn_asset(&mut scene, &materials, "wheels.gltf", &roots);
    let new_material = scene.create_component(Component::material("Alloy", alloy));

    (scene, loader, new_material)
}

#[test]
fn test_both_wheels_take_new_material() {
    let (mut scene, loader, new_material) = wheel_scene();
    let helper = SceneHelper::default();
    let wheel1 = helper.find_entity(&scene, &loader, "Wheel1").unwrap();
    let wheel2 = helper.find_entity(&scene, &loader, "Wheel2").unwrap();
    let old1 = materials_on(&scene, wheel1);
    let old2 = materials_on(&scene, wheel2);

    let report = helper.add_materials(&mut scene, &loader, new_material, &["Wheel1", "Wheel2"]);

    assert!(report.is_complete());
    assert_eq!(materials_on(&scene, wheel1), vec![new_material]);
    assert_eq!(materials_on(&scene, wheel2), vec![new_material]);
    assert!(!scene.components(wheel1).contains(&old1[0]));
    assert!(!scene.components(wheel2).contains(&old2[0]));
}

#[test]
fn test_ghost_is_reported_and_wheel_updated() {
    let (mut scene, loader, new_material) = wheel_scene();
    let helper = SceneHelper::default();
    let wheel1 = helper.find_entity(&scene, &loader, "Wheel1").unwrap();
    let wheel2 = helper.find_entity(&scene, &loader, "Wheel2").unwrap();
    let wheel2_before = scene.components(wheel2).to_vec();

    let report = helper.add_materials(&mut scene, &loader, new_material, &["Wheel1", "Ghost"]);

    assert_eq!(report.applied, vec![wheel1]);
    assert_eq!(report.missing, vec!["Ghost".to_string()]);
    assert_eq!(materials_on(&scene, wheel1), vec![new_material]);
    assert_eq!(scene.components(wheel2), wheel2_before.as_slice());
}

#[test]
fn test_detached_material_reattaches_elsewhere() {
    let (mut scene, loader, new_material) = wheel_scene();
    let helper = SceneHelper::default();
    let wheel1 = helper.find_entity(&scene, &loader, "Wheel1").unwrap();
    let old = materials_on(&scene, wheel1)[0];

    helper.add_material(&mut scene, &loader, new_material, "Wheel1");
    let outcome = helper.replace_material(&mut scene, &loader, "Wheel2", old);

    let wheel2 = helper.find_entity(&scene, &loader, "Wheel2").unwrap();
    assert!(outcome.is_applied());
    assert_eq!(scene.entities_referencing(old), vec![wheel2]);

    let report = helper.remove_from_scene(&mut scene, &loader, &["Wheel1"]);
    assert!(report.is_complete());
    assert_eq!(helper.find_entity(&scene, &loader, "Wheel1"), None);
    // A second removal finds nothing to detach.
    let report = helper.remove_from_scene(&mut scene, &loader, &["Wheel1"]);
    assert_eq!(report.missing, vec!["Wheel1".to_string()]);
}

#[test]
fn test_unloaded_asset_is_left_alone() {
    let (mut scene, _, new_material) = wheel_scene();
    let helper = SceneHelper::default();
    let pending = SceneLoader::new("assets/pending.gltf");

    let report = helper.add_materials(&mut scene, &pending, new_material, &["Wheel1"]);

    assert_eq!(report.aborted, Some(SkipReason::EmptyScene));
    assert!(scene.entities_referencing(new_material).is_empty());
}

#[test]
fn test_list_entry_preserves_order() {
    let helper = SceneHelper::default();
    let mut entries = vec![1, 2, 3];

    let mut list = ListReference::bind("entries", &mut entries);
    assert!(helper.add_list_entry(&mut list, 4));
    assert_eq!(list.count(), 4);

    assert_eq!(entries, vec![1, 2, 3, 4]);
}
