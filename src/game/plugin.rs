//! Game plugin - input state machine and rules boundary wiring

use bevy::prelude::*;

use crate::core::AppState;

use super::input::{handle_board_press, handle_board_release};
use super::rules::{ActiveMode, PositionString, RulesEngine};
use super::selection::{DragState, Selection};

/// Plugin owning the move-input controller and the authoritative game state.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<DragState>()
            .init_resource::<RulesEngine>()
            .init_resource::<PositionString>()
            .init_resource::<ActiveMode>()
            .add_systems(
                Update,
                (handle_board_press, handle_board_release)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(OnExit(AppState::InGame), reset_game);
    }
}

/// Leaving the game resets the engine and all transient input state, so the
/// next game starts from the `"start"` sentinel.
fn reset_game(
    mut rules: ResMut<RulesEngine>,
    mut position: ResMut<PositionString>,
    mut selection: ResMut<Selection>,
    mut drag: ResMut<DragState>,
    mut mode: ResMut<ActiveMode>,
) {
    rules.reset();
    *position = PositionString::default();
    selection.clear();
    drag.clear();
    mode.0 = None;
}
