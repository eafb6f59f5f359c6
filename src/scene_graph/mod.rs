pub mod builder;
pub mod component;
pub mod entity;
pub mod loader;
pub mod scene;
pub mod transform;

// Re-export main types for convenience
pub use builder::{spawn_asset, spawn_node, NodeDesc};
pub use component::{CameraLens, Component, ComponentId, ComponentKind, MeshRef, Projection};
pub use entity::{Entity, EntityId};
pub use loader::{LoaderStatus, SceneLoader};
pub use scene::Scene;
pub use transform::Transform;
