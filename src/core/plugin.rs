//! Core plugin - state registration and transition logging

use bevy::prelude::*;

use super::states::{validate_and_log_state_transitions, AppState};
use super::window_config::WindowConfig;

/// Core plugin for SolMate
///
/// Registers the primary state machine and infrastructure resources. This
/// plugin should be added before state-specific plugins.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<WindowConfig>()
            .register_type::<WindowConfig>()
            .add_systems(Update, validate_and_log_state_transitions);
    }
}
