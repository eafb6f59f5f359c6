use std::fmt::Write;

use id_arena::Arena;
use itertools::Itertools;

use crate::scene_graph::component::{Component, ComponentId};
use crate::scene_graph::entity::{Entity, EntityId};

/// Entity tree plus the components attached to it.
///
/// Entities and components live in arenas and are never freed, so ids stay valid after
/// an entity is detached or a component is removed from every entity.
pub struct Scene {
    pub entities: Arena<Entity>,
    pub components: Arena<Component>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Arena::new(),
            components: Arena::new(),
        }
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.entities.alloc(entity)
    }

    /// Creates a named entity, optionally under `parent`.
    pub fn spawn(&mut self, name: impl Into<String>, parent: Option<EntityId>) -> EntityId {
        let entity_id = self.add_entity(Entity::new(name));

        if let Some(parent_id) = parent {
            self.set_parent(entity_id, Some(parent_id));
        }

        entity_id
    }

    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_name(&self, id: EntityId) -> Option<&str> {
        self.entities.get(id).map(|entity| entity.name.as_str())
    }

    /// First entity anywhere in the scene with this name, attached or not.
    pub fn get_entity_by_name(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, entity)| entity.name == name)
            .map(|(id, _)| id)
    }

    pub fn create_component(&mut self, component: Component) -> ComponentId {
        self.components.alloc(component)
    }

    pub fn get_component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    /// Components of `entity` in attachment order.
    pub fn components(&self, entity: EntityId) -> &[ComponentId] {
        self.entities
            .get(entity)
            .map(|entity| entity.component_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Attaches `component` to `entity`. Returns false if it was already attached or
    /// either id is unknown.
    pub fn add_component(&mut self, entity_id: EntityId, component_id: ComponentId) -> bool {
        if self.components.get(component_id).is_none() {
            return false;
        }

        match self.entities.get_mut(entity_id) {
            Some(entity) if !entity.component_ids.contains(&component_id) => {
                entity.component_ids.push(component_id);
                true
            }
            _ => false,
        }
    }

    /// Detaches `component` from `entity` without destroying it.
    pub fn remove_component(&mut self, entity_id: EntityId, component_id: ComponentId) -> bool {
        let Some(entity) = self.entities.get_mut(entity_id) else {
            return false;
        };

        let before = entity.component_ids.len();
        entity.component_ids.retain(|&id| id != component_id);
        entity.component_ids.len() != before
    }

    /// Every entity currently listing `component`.
    pub fn entities_referencing(&self, component_id: ComponentId) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, entity)| entity.component_ids.contains(&component_id))
            .map(|(id, _)| id)
            .collect()
    }

    /// Sets the parent of an entity and updates child lists. `None` detaches the entity
    /// from the tree. Refuses moves that would create a cycle.
    pub fn set_parent(&mut self, child_id: EntityId, new_parent_id: Option<EntityId>) -> bool {
        if self.entities.get(child_id).is_none() {
            return false;
        }

        if let Some(new_parent_id) = new_parent_id {
            if self.entities.get(new_parent_id).is_none()
                || new_parent_id == child_id
                || self.is_descendant_of(new_parent_id, child_id)
            {
                log::warn!(
                    "Refusing to parent {:?} under {:?}",
                    self.entity_name(child_id),
                    self.entity_name(new_parent_id)
                );
                return false;
            }
        }

        // Remove from old parent's children list
        if let Some(old_parent_id) = self.entities.get(child_id).and_then(|c| c.parent_id) {
            if let Some(old_parent) = self.entities.get_mut(old_parent_id) {
                old_parent.child_ids.retain(|&id| id != child_id);
            }
        }

        if let Some(child) = self.entities.get_mut(child_id) {
            child.parent_id = new_parent_id;
        }

        if let Some(new_parent) = new_parent_id.and_then(|id| self.entities.get_mut(id)) {
            new_parent.child_ids.push(child_id);
        }

        true
    }

    /// True if `ancestor` appears on the parent chain of `entity`.
    pub fn is_descendant_of(&self, entity: EntityId, ancestor: EntityId) -> bool {
        let mut current = self.entities.get(entity).and_then(|e| e.parent_id);

        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.entities.get(id).and_then(|e| e.parent_id);
        }

        false
    }

    /// Finds a descendant of `root` by name. Direct children are checked before any
    /// grandchildren; deeper levels are searched child by child in order. `root` itself
    /// never matches.
    pub fn find_descendant_by_name(&self, root: EntityId, name: &str) -> Option<EntityId> {
        let entity = self.entities.get(root)?;

        if let Some(&hit) = entity
            .child_ids
            .iter()
            .find(|&&id| self.entity_name(id) == Some(name))
        {
            return Some(hit);
        }

        entity
            .child_ids
            .iter()
            .find_map(|&child_id| self.find_descendant_by_name(child_id, name))
    }

    /// Human-readable outline of the subtree at `root`, one entity per line.
    pub fn describe_tree(&self, root: EntityId) -> String {
        let mut out = String::new();
        self.describe_recursive(root, 0, &mut out);
        out
    }

    fn describe_recursive(&self, entity_id: EntityId, depth: usize, out: &mut String) {
        let Some(entity) = self.entities.get(entity_id) else {
            return;
        };

        let components = entity
            .component_ids
            .iter()
            .filter_map(|&id| self.components.get(id))
            .map(|component| format!("{} {:?}", component.kind_name(), component.name))
            .join(", ");

        let _ = writeln!(out, "{}{} [{}]", "  ".repeat(depth), entity.name, components);

        for &child_id in &entity.child_ids {
            self.describe_recursive(child_id, depth + 1, out);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
