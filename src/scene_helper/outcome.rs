use crate::scene_graph::{ComponentId, EntityId};

/// Why a helper call did not touch the scene.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("scene loader has not produced any entities")]
    EmptyScene,
    #[error("{operation}: missing element {name:?}")]
    EntityNotFound {
        operation: &'static str,
        name: String,
    },
    #[error("{operation}: component {component:?} is not a material")]
    NotAMaterial {
        operation: &'static str,
        component: String,
    },
    #[error("list property {property:?} is not bound")]
    UnboundList { property: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Applied {
        entity: EntityId,
        /// Material components detached from the entity, in their former order.
        removed: Vec<ComponentId>,
    },
    Skipped(SkipReason),
}

impl SwapOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SwapOutcome::Applied { .. })
    }
}

/// Result of an operation over several names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Set when the whole batch was skipped before any name was looked up.
    pub aborted: Option<SkipReason>,
    pub applied: Vec<EntityId>,
    pub missing: Vec<String>,
}

impl BatchReport {
    pub(crate) fn aborted(reason: SkipReason) -> Self {
        Self {
            aborted: Some(reason),
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.aborted.is_none() && self.missing.is_empty()
    }
}
