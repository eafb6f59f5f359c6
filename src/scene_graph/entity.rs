use id_arena::Id;

use crate::scene_graph::component::ComponentId;
use crate::scene_graph::scene::Scene;

pub type EntityId = Id<Entity>;

#[derive(Debug, Default)]
pub struct Entity {
    pub name: String,
    pub parent_id: Option<EntityId>,
    pub child_ids: Vec<EntityId>,
    pub component_ids: Vec<ComponentId>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn parent<'a>(&self, scene: &'a Scene) -> Option<&'a Entity> {
        self.parent_id.and_then(|id| scene.get_entity(id))
    }

    pub fn children<'a, 'b>(&'a self, scene: &'b Scene) -> impl Iterator<Item = &'b Entity> + 'b
    where
        'a: 'b,
    {
        self.child_ids
            .iter()
            .filter_map(move |id| scene.get_entity(*id))
    }
}
