use std::collections::HashMap;

use glam::Vec4;
use id_arena::{Arena, Id};

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialData {
    pub name: String,
    pub base_color: Vec4,
    pub metallic: f32,
    pub roughness: f32,
}

impl MaterialData {
    pub fn new(name: impl Into<String>, base_color: Vec4) -> Self {
        Self {
            name: name.into(),
            base_color,
            metallic: 0.0,
            roughness: 0.5,
        }
    }

    pub fn with_metallic_roughness(mut self, metallic: f32, roughness: f32) -> Self {
        self.metallic = metallic;
        self.roughness = roughness;
        self
    }
}

pub type MaterialId = Id<MaterialData>;

/// Owns material definitions. Scene components only hold a `MaterialId`.
pub struct MaterialManager {
    materials: Arena<MaterialData>,
    materials_by_name: HashMap<String, MaterialId>,
}

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: Arena::new(),
            materials_by_name: HashMap::new(),
        }
    }

    /// Registers a material. A later material with the same name shadows the earlier one
    /// in name lookups, but both ids stay valid.
    pub fn add_material(&mut self, material: MaterialData) -> MaterialId {
        let name = material.name.clone();
        let id = self.materials.alloc(material);
        self.materials_by_name.insert(name, id);
        id
    }

    pub fn get(&self, id: MaterialId) -> Option<&MaterialData> {
        self.materials.get(id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<MaterialId> {
        self.materials_by_name.get(name).copied()
    }

    pub fn name_of(&self, id: MaterialId) -> &str {
        self.materials
            .get(id)
            .map(|material| material.name.as_str())
            .unwrap_or("<unknown material>")
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.len() == 0
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}
