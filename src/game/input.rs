//! Pointer input for the board
//!
//! Translates presses and releases over the board into the selection state
//! machine and move attempts. Two input paths share the attempt-move call:
//!
//! - **click-click**: press and release on the same cell runs the
//!   [`click_transition`] table against the current [`Selection`];
//! - **drag-drop**: press on an occupied cell and release on a different
//!   cell attempts a move directly, leaving the selection alone.
//!
//! The controller never mutates the grid; an accepted attempt updates the
//! position string, and the renderer rebuilds from that.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::rendering::{BoardLayout, BoardState};

use super::rules::{attempt_move, PositionString, RulesEngine};
use super::selection::{click_transition, ClickOutcome, DragState, Selection};

/// Resolve the cursor to a board cell, if it is over the board.
fn cursor_cell(window: &Window, layout: &BoardLayout) -> Option<(u8, u8)> {
    let cursor = window.cursor_position()?;
    layout.cell_at_cursor(cursor, Vec2::new(window.width(), window.height()))
}

/// Record the pressed cell as the gesture carrier.
pub(crate) fn handle_board_press(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    board: Res<BoardState>,
    mut drag: ResMut<DragState>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cell) = cursor_cell(&window, &layout) else {
        return;
    };
    drag.press = Some(cell);
    drag.dragging = board.occupied(cell);
    debug!("[INPUT] Press on {:?} (dragging: {})", cell, drag.dragging);
}

/// Dispatch the release as a click or a drag-drop.
pub(crate) fn handle_board_release(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    board: Res<BoardState>,
    mut selection: ResMut<Selection>,
    mut drag: ResMut<DragState>,
    mut rules: ResMut<RulesEngine>,
    mut position: ResMut<PositionString>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some(press) = drag.press else {
        return;
    };
    let released = cursor_cell(&window, &layout);
    let dragging = drag.dragging;
    drag.clear();

    let Some(cell) = released else {
        // Released off the board: the gesture just ends.
        return;
    };

    if cell == press {
        apply_click(cell, &board, &mut selection, &mut rules, &mut position);
    } else if dragging {
        // Drop path: same attempt-move call, no selection interaction.
        let accepted = attempt_move(&mut rules, &mut position, press, cell);
        debug!(
            "[INPUT] Drop {} -> {}: {}",
            crate::board::square_name(press.0, press.1),
            crate::board::square_name(cell.0, cell.1),
            if accepted { "accepted" } else { "rejected" }
        );
    }
}

/// Run the click state machine for a cell.
fn apply_click(
    cell: (u8, u8),
    board: &BoardState,
    selection: &mut Selection,
    rules: &mut RulesEngine,
    position: &mut PositionString,
) {
    match click_transition(selection, cell, board.occupied(cell)) {
        ClickOutcome::Select(cell) => {
            selection.selected = Some(cell);
            debug!("[INPUT] Selected {}", crate::board::square_name(cell.0, cell.1));
        }
        ClickOutcome::Deselect => {
            selection.clear();
            debug!("[INPUT] Selection cleared");
        }
        ClickOutcome::Attempt { from, to } => {
            let accepted = attempt_move(rules, position, from, to);
            if accepted {
                selection.clear();
            }
            // A rejected attempt keeps the selection so the user can try
            // another target immediately.
            debug!(
                "[INPUT] Click move {} -> {}: {}",
                crate::board::square_name(from.0, from.1),
                crate::board::square_name(to.0, to.1),
                if accepted { "accepted" } else { "rejected" }
            );
        }
        ClickOutcome::Ignore => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::codec::derive_grid;

    fn board_at_start() -> BoardState {
        BoardState {
            grid: derive_grid("start"),
        }
    }

    #[test]
    fn click_click_plays_a_move_and_clears_selection() {
        let board = board_at_start();
        let mut selection = Selection::default();
        let mut rules = RulesEngine::default();
        let mut position = PositionString::default();

        apply_click((6, 4), &board, &mut selection, &mut rules, &mut position);
        assert_eq!(selection.selected, Some((6, 4)));

        apply_click((4, 4), &board, &mut selection, &mut rules, &mut position);
        assert!(!selection.is_selected());
        assert_eq!(rules.history(), ["e4"]);
    }

    #[test]
    fn rejected_click_move_keeps_the_selection() {
        let board = board_at_start();
        let mut selection = Selection::default();
        let mut rules = RulesEngine::default();
        let mut position = PositionString::default();

        // Select the queen's rook, then try an illegal jump.
        apply_click((7, 0), &board, &mut selection, &mut rules, &mut position);
        apply_click((4, 0), &board, &mut selection, &mut rules, &mut position);
        assert_eq!(selection.selected, Some((7, 0)));
        assert!(rules.history().is_empty());

        // The retained selection can immediately try a different target:
        // deselect by clicking the rook again.
        apply_click((7, 0), &board, &mut selection, &mut rules, &mut position);
        assert!(!selection.is_selected());
    }

    #[test]
    fn empty_cell_click_from_idle_is_ignored() {
        let board = board_at_start();
        let mut selection = Selection::default();
        let mut rules = RulesEngine::default();
        let mut position = PositionString::default();

        apply_click((4, 4), &board, &mut selection, &mut rules, &mut position);
        assert!(!selection.is_selected());
        assert_eq!(position.0, "start");
    }
}
