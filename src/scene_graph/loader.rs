use std::path::{Path, PathBuf};

use crate::scene_graph::entity::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderStatus {
    #[default]
    None,
    Loading,
    Ready,
    Error,
}

/// Handle to an imported asset. The host fills in the produced entities once the asset
/// is ready; until then `entities()` is empty.
#[derive(Debug, Default)]
pub struct SceneLoader {
    source: Option<PathBuf>,
    status: LoaderStatus,
    entities: Vec<EntityId>,
}

impl SceneLoader {
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            source: Some(source.as_ref().to_path_buf()),
            status: LoaderStatus::Loading,
            entities: Vec::new(),
        }
    }

    /// A loader that already produced `entities`.
    pub fn with_entities(entities: Vec<EntityId>) -> Self {
        let status = if entities.is_empty() {
            LoaderStatus::None
        } else {
            LoaderStatus::Ready
        };

        Self {
            source: None,
            status,
            entities,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn status(&self) -> LoaderStatus {
        self.status
    }

    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// The entity lookups are scoped under: the first produced entity.
    pub fn root(&self) -> Option<EntityId> {
        self.entities.first().copied()
    }

    pub fn finish(&mut self, entities: Vec<EntityId>) {
        self.entities = entities;
        self.status = LoaderStatus::Ready;
    }

    pub fn fail(&mut self) {
        self.entities.clear();
        self.status = LoaderStatus::Error;
    }
}
