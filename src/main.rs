use anyhow::Result;
use itertools::Itertools;

use scenehelper::{HelperConfig, MaterialSwapPolicy, SceneHelper};

mod demo;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let helper = SceneHelper::new(HelperConfig {
        material_swap: MaterialSwapPolicy::FirstMatch,
        ..Default::default()
    });

    let mut state = demo::DemoState::new(helper)?;
    log::info!("Loaded scene:\n{}", state.describe());

    state.apply_night_theme();

    log::info!("After night theme:\n{}", state.describe());
    log::info!(
        "Body {:?} now uses {}",
        state.scene.entity_name(state.body()),
        state.body_material().unwrap_or("no material")
    );
    log::info!("Overlays: {}", state.overlays.iter().join(", "));

    Ok(())
}
