//! Application state machine
//!
//! # State Flow
//!
//! ```text
//! [MainMenu] ⇄ [InGame]
//! ```
//!
//! - **MainMenu**: landing screen with marketing sections and wallet panel
//!   (starting state)
//! - **InGame**: playable chessboard with game-mode selection and move history

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary application state.
///
/// Each state has its own plugin that manages setup, update, and cleanup;
/// board entities are tagged with `DespawnOnExit(AppState::InGame)` so they
/// never leak into the landing screen.
#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum AppState {
    /// Landing screen (starting state).
    #[default]
    MainMenu,

    /// Active board screen.
    InGame,
}

/// Validate if a state transition is allowed
///
/// Returns true if the transition is valid according to the app's state
/// machine. Invalid transitions indicate logic errors that should be fixed.
fn is_valid_state_transition(from: AppState, to: AppState) -> bool {
    match (from, to) {
        (AppState::MainMenu, AppState::InGame) => true,
        (AppState::InGame, AppState::MainMenu) => true,
        // Self-transitions are always valid (no-op)
        (from, to) if from == to => true,
        _ => false,
    }
}

/// System to validate and log state transitions
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<AppState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state, AppState::MainMenu, "App should start on the landing screen");
    }

    #[test]
    fn test_menu_game_round_trip_is_valid() {
        assert!(is_valid_state_transition(AppState::MainMenu, AppState::InGame));
        assert!(is_valid_state_transition(AppState::InGame, AppState::MainMenu));
    }

    #[test]
    fn test_self_transitions_are_valid() {
        assert!(is_valid_state_transition(AppState::MainMenu, AppState::MainMenu));
        assert!(is_valid_state_transition(AppState::InGame, AppState::InGame));
    }
}
