//! Name-keyed helpers for material swaps and detachment on a loaded scene tree.

pub mod config;
pub mod list_reference;
pub mod material_manager;
pub mod scene_graph;
pub mod scene_helper;

pub use config::{HelperConfig, MaterialSwapPolicy};
pub use list_reference::ListReference;
pub use scene_helper::{BatchReport, SceneHelper, SkipReason, SwapOutcome};
