/// Which material components a swap removes before attaching the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialSwapPolicy {
    /// Remove only the first material found, leaving any others in place.
    #[default]
    FirstMatch,
    /// Remove every material attached to the entity.
    AllMatches,
}

#[derive(Debug, Clone, Copy)]
pub struct HelperConfig {
    pub material_swap: MaterialSwapPolicy,
    /// Log missing entities at warn level. When false they go to debug.
    pub warn_on_missing: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            material_swap: MaterialSwapPolicy::FirstMatch,
            warn_on_missing: true,
        }
    }
}
