//! Name-keyed mutations on a loaded scene.
//!
//! Every call resolves the loader's first entity as the root and looks entities up
//! below it by name. An empty loader makes every call a no-op. Missing names are logged
//! and skipped; nothing here panics or aborts a batch.

pub mod outcome;

use crate::config::{HelperConfig, MaterialSwapPolicy};
use crate::list_reference::ListReference;
use crate::material_manager::MaterialId;
use crate::scene_graph::{CameraLens, Component, ComponentId, EntityId, Scene, SceneLoader};

pub use outcome::{BatchReport, SkipReason, SwapOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct SceneHelper {
    config: HelperConfig,
}

impl SceneHelper {
    pub fn new(config: HelperConfig) -> Self {
        Self { config }
    }

    pub fn find_entity(&self, scene: &Scene, loader: &SceneLoader, name: &str) -> Option<EntityId> {
        let root = self.root(loader, "find_entity")?;
        scene.find_descendant_by_name(root, name)
    }

    /// Detaches each named entity from its parent. The entities stay alive in the scene
    /// but are no longer reachable from the loader's root.
    pub fn remove_from_scene<S: AsRef<str>>(
        &self,
        scene: &mut Scene,
        loader: &SceneLoader,
        names: &[S],
    ) -> BatchReport {
        const OPERATION: &str = "remove_from_scene";

        let Some(root) = self.root(loader, OPERATION) else {
            return BatchReport::aborted(SkipReason::EmptyScene);
        };

        let mut report = BatchReport::default();

        for name in names.iter().map(AsRef::as_ref) {
            match scene.find_descendant_by_name(root, name) {
                Some(entity) => {
                    scene.set_parent(entity, None);
                    report.applied.push(entity);
                }
                None => {
                    self.report_missing(OPERATION, name);
                    report.missing.push(name.to_string());
                }
            }
        }

        report
    }

    /// Swaps the material of every named entity to `material`, continuing past names
    /// that are not found.
    pub fn add_materials<S: AsRef<str>>(
        &self,
        scene: &mut Scene,
        loader: &SceneLoader,
        material: ComponentId,
        names: &[S],
    ) -> BatchReport {
        const OPERATION: &str = "add_materials";

        let Some(root) = self.root(loader, OPERATION) else {
            return BatchReport::aborted(SkipReason::EmptyScene);
        };

        if let Err(reason) = check_material(scene, material, OPERATION) {
            log::warn!("{}", reason);
            return BatchReport::aborted(reason);
        }

        let mut report = BatchReport::default();

        for name in names.iter().map(AsRef::as_ref) {
            match scene.find_descendant_by_name(root, name) {
                Some(entity) => {
                    self.swap_material(scene, entity, material);
                    report.applied.push(entity);
                }
                None => {
                    self.report_missing(OPERATION, name);
                    report.missing.push(name.to_string());
                }
            }
        }

        report
    }

    pub fn add_material(
        &self,
        scene: &mut Scene,
        loader: &SceneLoader,
        material: ComponentId,
        name: &str,
    ) -> SwapOutcome {
        self.swap_named(scene, loader, name, material, "add_material")
    }

    /// Same as [`SceneHelper::add_material`], with the name first.
    pub fn replace_material(
        &self,
        scene: &mut Scene,
        loader: &SceneLoader,
        name: &str,
        material: ComponentId,
    ) -> SwapOutcome {
        self.swap_named(scene, loader, name, material, "replace_material")
    }

    /// Appends `entry` to the list `list` is bound to.
    pub fn add_list_entry<T>(&self, list: &mut ListReference<'_, T>, entry: T) -> bool {
        if list.append(entry) {
            return true;
        }

        log::warn!(
            "add_list_entry: {}",
            SkipReason::UnboundList {
                property: list.property().to_string(),
            }
        );
        false
    }

    /// First camera lens attached to the named entity.
    pub fn find_camera_lens<'s>(
        &self,
        scene: &'s Scene,
        loader: &SceneLoader,
        name: &str,
    ) -> Option<&'s CameraLens> {
        let entity = self.lookup(scene, loader, name, "find_camera_lens")?;

        scene
            .components(entity)
            .iter()
            .filter_map(|&id| scene.get_component(id))
            .find_map(Component::as_camera_lens)
    }

    /// Material referenced by the first material component of the named entity.
    pub fn material_of(
        &self,
        scene: &Scene,
        loader: &SceneLoader,
        name: &str,
    ) -> Option<MaterialId> {
        let entity = self.lookup(scene, loader, name, "material_of")?;

        scene
            .components(entity)
            .iter()
            .filter_map(|&id| scene.get_component(id))
            .find_map(Component::as_material)
    }

    fn swap_named(
        &self,
        scene: &mut Scene,
        loader: &SceneLoader,
        name: &str,
        material: ComponentId,
        operation: &'static str,
    ) -> SwapOutcome {
        let Some(root) = self.root(loader, operation) else {
            return SwapOutcome::Skipped(SkipReason::EmptyScene);
        };

        if let Err(reason) = check_material(scene, material, operation) {
            log::warn!("{}", reason);
            return SwapOutcome::Skipped(reason);
        }

        match scene.find_descendant_by_name(root, name) {
            Some(entity) => {
                let removed = self.swap_material(scene, entity, material);
                SwapOutcome::Applied { entity, removed }
            }
            None => SwapOutcome::Skipped(self.report_missing(operation, name)),
        }
    }

    /// Removes the entity's current material component(s) according to the configured
    /// policy, then attaches `material`. An already attached `material` stays put and is
    /// never reported as removed.
    fn swap_material(
        &self,
        scene: &mut Scene,
        entity: EntityId,
        material: ComponentId,
    ) -> Vec<ComponentId> {
        let mut existing = scene
            .components(entity)
            .iter()
            .copied()
            .filter(|&id| id != material)
            .filter(|&id| scene.get_component(id).is_some_and(Component::is_material))
            .collect::<Vec<_>>();

        if self.config.material_swap == MaterialSwapPolicy::FirstMatch {
            existing.truncate(1);
        }

        for &component in &existing {
            scene.remove_component(entity, component);
        }

        scene.add_component(entity, material);

        log::debug!(
            "Swapped {} material(s) on {:?}",
            existing.len(),
            scene.entity_name(entity)
        );

        existing
    }

    fn lookup(
        &self,
        scene: &Scene,
        loader: &SceneLoader,
        name: &str,
        operation: &'static str,
    ) -> Option<EntityId> {
        let root = self.root(loader, operation)?;
        let entity = scene.find_descendant_by_name(root, name);

        if entity.is_none() {
            self.report_missing(operation, name);
        }

        entity
    }

    fn root(&self, loader: &SceneLoader, operation: &str) -> Option<EntityId> {
        let root = loader.root();

        if root.is_none() {
            log::debug!("{}: {}", operation, SkipReason::EmptyScene);
        }

        root
    }

    fn report_missing(&self, operation: &'static str, name: &str) -> SkipReason {
        let reason = SkipReason::EntityNotFound {
            operation,
            name: name.to_string(),
        };

        if self.config.warn_on_missing {
            log::warn!("{}", reason);
        } else {
            log::debug!("{}", reason);
        }

        reason
    }
}

fn check_material(
    scene: &Scene,
    material: ComponentId,
    operation: &'static str,
) -> Result<(), SkipReason> {
    match scene.get_component(material) {
        Some(component) if component.is_material() => Ok(()),
        other => Err(SkipReason::NotAMaterial {
            operation,
            component: other.map_or_else(|| "<unknown>".to_string(), |c| c.name.clone()),
        }),
    }
}
