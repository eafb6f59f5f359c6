use anyhow::Context;
use glam::{Quat, Vec3, Vec4};
use itertools::Itertools;

use scenehelper::material_manager::{MaterialData, MaterialManager};
use scenehelper::scene_graph::{
    spawn_asset, CameraLens, Component, ComponentId, EntityId, NodeDesc, Scene, SceneLoader,
    Transform,
};
use scenehelper::{ListReference, SceneHelper};

const WHEELS: [&str; 4] = ["Wheel_FL", "Wheel_FR", "Wheel_RL", "Wheel_RR"];

pub struct DemoState {
    pub scene: Scene,
    pub materials: MaterialManager,
    pub loader: SceneLoader,
    pub helper: SceneHelper,
    pub overlays: Vec<String>,
    body: EntityId,
    night_paint: ComponentId,
    chrome: ComponentId,
}

impl DemoState {
    pub fn new(helper: SceneHelper) -> anyhow::Result<Self> {
        let mut scene = Scene::new();
        let mut materials = MaterialManager::new();

        let rubber = materials.add_material(
            MaterialData::new("Rubber", Vec4::new(0.05, 0.05, 0.05, 1.0))
                .with_metallic_roughness(0.0, 0.9),
        );
        let day_paint = materials.add_material(
            MaterialData::new("DayPaint", Vec4::new(0.9, 0.1, 0.1, 1.0))
                .with_metallic_roughness(0.3, 0.4),
        );
        let night_paint = materials.add_material(
            MaterialData::new("NightPaint", Vec4::new(0.1, 0.1, 0.3, 1.0))
                .with_metallic_roughness(0.3, 0.4),
        );
        let chrome = materials.add_material(
            MaterialData::new("Chrome", Vec4::ONE).with_metallic_roughness(1.0, 0.05),
        );

        let mut car = NodeDesc::new("Car")
            .with_transform(Transform::new(Vec3::ZERO, Quat::from_rotation_y(0.4), 1.0))
            .with_child(
                NodeDesc::new("Body")
                    .with_mesh("body", 3)
                    .with_material(day_paint)
                    .with_child(
                        NodeDesc::new("Spoiler")
                            .with_mesh("spoiler", 1)
                            .with_material(day_paint),
                    ),
            )
            .with_child(
                NodeDesc::new("DriverCam")
                    .with_transform(Transform::from_translation(Vec3::new(0.0, 1.2, -0.3)))
                    .with_camera_lens(CameraLens::perspective(55.0, 16.0 / 9.0, 0.05, 200.0)),
            );

        for (index, wheel) in WHEELS.iter().enumerate() {
            let x = if index % 2 == 0 { -0.8 } else { 0.8 };
            let z = if index < 2 { 1.3 } else { -1.3 };
            car = car.with_child(
                NodeDesc::new(*wheel)
                    .with_transform(Transform::from_translation(Vec3::new(x, 0.35, z)))
                    .with_mesh("wheel", 2)
                    .with_material(rubber),
            );
        }

        let loader = spawn_asset(&mut scene, &materials, "cluster-car.gltf", &[car]);

        let body = helper
            .find_entity(&scene, &loader, "Body")
            .context("Body entity not found")?;

        let night_paint = scene.create_component(Component::material("NightPaint", night_paint));
        let chrome = scene.create_component(Component::material("Chrome", chrome));

        Ok(Self {
            scene,
            materials,
            loader,
            helper,
            overlays: vec!["speedometer".to_string()],
            body,
            night_paint,
            chrome,
        })
    }

    /// Switches the car to its night look and drops the parts the cluster view hides.
    pub fn apply_night_theme(&mut self) {
        let helper = self.helper;

        let report = helper.add_materials(&mut self.scene, &self.loader, self.chrome, &WHEELS);
        log::info!(
            "Chrome wheels: {} applied, missing [{}]",
            report.applied.len(),
            report.missing.iter().join(", ")
        );

        helper.replace_material(&mut self.scene, &self.loader, "Body", self.night_paint);
        helper.remove_from_scene(&mut self.scene, &self.loader, &["Spoiler"]);

        let mut overlays = ListReference::bind("overlays", &mut self.overlays);
        helper.add_list_entry(&mut overlays, "night-mode".to_string());
    }

    pub fn describe(&self) -> String {
        self.loader
            .root()
            .map(|root| self.scene.describe_tree(root))
            .unwrap_or_default()
    }

    pub fn body_material(&self) -> Option<&str> {
        self.helper
            .material_of(&self.scene, &self.loader, "Body")
            .map(|id| self.materials.name_of(id))
    }

    pub fn body(&self) -> EntityId {
        self.body
    }
}
