//! Selection and drag state for move input
//!
//! At most one cell is selected at a time. The transition table lives in
//! [`click_transition`], a pure function over the current selection and the
//! clicked cell, so the whole state machine is testable without an app.

use bevy::prelude::*;

/// Resource tracking the currently selected cell, if any.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<(u8, u8)>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }
}

/// Transient carrier for an in-flight pointer gesture.
///
/// Written on press, consumed on release. Releasing on the press cell is a
/// click; releasing elsewhere while `dragging` is a drag-drop, which attempts
/// a move without touching the click-click selection state. Deliberately
/// separate from [`Selection`].
#[derive(Resource, Debug, Default)]
pub struct DragState {
    /// Cell the pointer went down on.
    pub press: Option<(u8, u8)>,
    /// Whether the press landed on an occupied cell (only pieces drag).
    pub dragging: bool,
}

impl DragState {
    pub fn clear(&mut self) {
        self.press = None;
        self.dragging = false;
    }
}

/// What a click on a cell should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Select the clicked cell.
    Select((u8, u8)),
    /// Clear the selection (clicked the selected cell again).
    Deselect,
    /// Attempt a move from the selected cell to the clicked cell.
    Attempt { from: (u8, u8), to: (u8, u8) },
    /// Nothing to do (clicked an empty cell with no selection).
    Ignore,
}

/// The selection transition table.
///
/// - no selection + occupied cell → select it
/// - no selection + empty cell → no-op
/// - selected cell clicked again → deselect
/// - any other cell while selected → exactly one move attempt
///
/// Whether the attempt succeeds (and so whether the selection is
/// cleared) is decided by the caller; a rejected attempt keeps the
/// selection so the user can immediately try a different target.
pub fn click_transition(selection: &Selection, cell: (u8, u8), occupied: bool) -> ClickOutcome {
    match selection.selected {
        None if occupied => ClickOutcome::Select(cell),
        None => ClickOutcome::Ignore,
        Some(selected) if selected == cell => ClickOutcome::Deselect,
        Some(selected) => ClickOutcome::Attempt {
            from: selected,
            to: cell,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_click_on_occupied_selects() {
        let selection = Selection::default();
        assert_eq!(
            click_transition(&selection, (6, 4), true),
            ClickOutcome::Select((6, 4))
        );
    }

    #[test]
    fn idle_click_on_empty_is_a_noop() {
        let selection = Selection::default();
        assert_eq!(click_transition(&selection, (4, 4), false), ClickOutcome::Ignore);
    }

    #[test]
    fn clicking_selected_cell_deselects() {
        let selection = Selection {
            selected: Some((6, 4)),
        };
        assert_eq!(click_transition(&selection, (6, 4), true), ClickOutcome::Deselect);
    }

    #[test]
    fn second_click_attempts_exactly_one_move() {
        let selection = Selection {
            selected: Some((6, 4)),
        };
        // Empty target cell.
        assert_eq!(
            click_transition(&selection, (4, 4), false),
            ClickOutcome::Attempt {
                from: (6, 4),
                to: (4, 4)
            }
        );
        // Occupied target cell attempts as well (capture or rejection is the
        // rules engine's call).
        assert_eq!(
            click_transition(&selection, (1, 4), true),
            ClickOutcome::Attempt {
                from: (6, 4),
                to: (1, 4)
            }
        );
    }
}
