use crate::material_manager::{MaterialId, MaterialManager};
use crate::scene_graph::component::{CameraLens, Component, ComponentKind, MeshRef};
use crate::scene_graph::entity::EntityId;
use crate::scene_graph::loader::SceneLoader;
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

/// Description of an entity and its subtree, used by hosts to populate a scene the way
/// an importer would.
#[derive(Debug, Clone, Default)]
pub struct NodeDesc {
    pub name: String,
    pub transform: Option<Transform>,
    pub mesh: Option<MeshRef>,
    pub material: Option<MaterialId>,
    pub camera_lens: Option<CameraLens>,
    pub children: Vec<NodeDesc>,
}

impl NodeDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_mesh(mut self, name: impl Into<String>, primitive_count: usize) -> Self {
        self.mesh = Some(MeshRef {
            name: name.into(),
            primitive_count,
        });
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_camera_lens(mut self, lens: CameraLens) -> Self {
        self.camera_lens = Some(lens);
        self
    }

    pub fn with_child(mut self, child: NodeDesc) -> Self {
        self.children.push(child);
        self
    }
}

/// Spawns `roots` under a fresh asset entity named `asset_name` and returns a loader
/// whose first entity is that asset entity.
pub fn spawn_asset(
    scene: &mut Scene,
    materials: &MaterialManager,
    asset_name: &str,
    roots: &[NodeDesc],
) -> SceneLoader {
    let asset_root = scene.spawn(asset_name, None);

    for node in roots {
        spawn_node(scene, materials, node, Some(asset_root));
    }

    log::debug!("Spawned asset {} with {} top-level nodes", asset_name, roots.len());

    SceneLoader::with_entities(vec![asset_root])
}

pub fn spawn_node(
    scene: &mut Scene,
    materials: &MaterialManager,
    node: &NodeDesc,
    parent: Option<EntityId>,
) -> EntityId {
    let entity_id = scene.spawn(node.name.clone(), parent);

    if let Some(transform) = node.transform {
        attach(scene, entity_id, &node.name, ComponentKind::Transform(transform));
    }

    if let Some(mesh) = &node.mesh {
        let component = Component::new(mesh.name.clone(), ComponentKind::Mesh(mesh.clone()));
        let component = scene.create_component(component);
        scene.add_component(entity_id, component);
    }

    if let Some(material) = node.material {
        let component = Component::material(materials.name_of(material), material);
        let component = scene.create_component(component);
        scene.add_component(entity_id, component);
    }

    if let Some(lens) = node.camera_lens {
        attach(scene, entity_id, &node.name, ComponentKind::CameraLens(lens));
    }

    for child in &node.children {
        spawn_node(scene, materials, child, Some(entity_id));
    }

    entity_id
}

fn attach(scene: &mut Scene, entity_id: EntityId, owner: &str, kind: ComponentKind) {
    let component = Component::new(owner, kind);
    let component_id = scene.create_component(component);
    scene.add_component(entity_id, component_id);
}
