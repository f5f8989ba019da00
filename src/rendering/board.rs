//! Board creation and layout
//!
//! Uses the batch spawning pattern (collect all 64 squares into a Vec, then
//! spawn) to create the board in one operation. Squares are children of a
//! single [`BoardRoot`] entity in unit coordinates; responsive sizing only
//! ever touches the root's transform.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::board::codec::{derive_grid, BoardGrid};
use crate::board::coords::is_light;
use crate::board::sizing::board_width;
use crate::board::square_name;
use crate::core::AppState;
use crate::game::{PositionString, Selection};

use super::theme::BoardTheme;

/// Logical width reserved for the side panel next to the board.
pub const SIDE_PANEL_PX: f32 = 360.0;

/// Marker for the board root entity; squares and pieces are its children.
#[derive(Component)]
pub struct BoardRoot;

/// Marker for the in-game camera.
#[derive(Component)]
struct BoardCamera;

/// Component identifying a board square's cell.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareCell {
    pub row: u8,
    pub col: u8,
}

/// The grid currently on screen, derived wholesale from [`PositionString`].
#[derive(Resource, Debug, Default)]
pub struct BoardState {
    pub grid: BoardGrid,
}

impl BoardState {
    pub fn occupied(&self, cell: (u8, u8)) -> bool {
        self.grid[cell.0 as usize][cell.1 as usize].is_some()
    }
}

/// Where the board sits on screen and how big it is.
///
/// World space is Bevy 2D: origin at the window center, +y up. The board is
/// centered in the container (the window minus the side panel), so its
/// world-space center sits half a panel to the left.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoardLayout {
    /// World-space center of the board.
    pub center: Vec2,
    /// Edge length of the board in logical pixels.
    pub board_px: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            center: Vec2::new(-SIDE_PANEL_PX / 2.0, 0.0),
            board_px: 560.0,
        }
    }
}

impl BoardLayout {
    /// Recompute the layout for a window width. The viewport is the window
    /// itself; the container is what is left beside the side panel.
    pub fn for_window(width: f32) -> Self {
        let container = (width - SIDE_PANEL_PX).max(0.0);
        Self {
            center: Vec2::new(-SIDE_PANEL_PX / 2.0, 0.0),
            board_px: board_width(width, container),
        }
    }

    /// Edge length of one square.
    pub fn cell_px(&self) -> f32 {
        self.board_px / 8.0
    }

    /// Resolve a cursor position (window coordinates, origin top-left) to a
    /// board cell, if the cursor is over the board.
    pub fn cell_at_cursor(&self, cursor: Vec2, window_size: Vec2) -> Option<(u8, u8)> {
        let world = Vec2::new(
            cursor.x - window_size.x / 2.0,
            window_size.y / 2.0 - cursor.y,
        );
        let half = self.board_px / 2.0;
        let local = world - self.center;
        if local.x < -half || local.x >= half || local.y <= -half || local.y > half {
            return None;
        }
        let col = ((local.x + half) / self.cell_px()) as u8;
        let row = ((half - local.y) / self.cell_px()) as u8;
        Some((row.min(7), col.min(7)))
    }
}

/// Spawn the in-game camera, the board root, and all 64 squares.
pub(crate) fn create_board(
    mut commands: Commands,
    theme: Res<BoardTheme>,
    layout: Res<BoardLayout>,
) {
    commands.spawn((
        Camera2d,
        BoardCamera,
        Name::new("Board Camera"),
        DespawnOnExit(AppState::InGame),
    ));

    // Collect all squares first, then spawn them under one root.
    let squares: Vec<_> = (0..8u8)
        .flat_map(|row| {
            (0..8u8).map(move |col| {
                (
                    Sprite::from_color(Color::WHITE, Vec2::ONE),
                    Transform::from_translation(Vec3::new(
                        col as f32 - 3.5,
                        3.5 - row as f32,
                        1.0,
                    )),
                    SquareCell { row, col },
                    Name::new(format!("Square {}", square_name(row, col))),
                )
            })
        })
        .collect();

    commands
        .spawn((
            BoardRoot,
            Name::new("Board"),
            Transform::from_translation(layout.center.extend(0.0))
                .with_scale(Vec3::splat(layout.cell_px())),
            Visibility::default(),
            DespawnOnExit(AppState::InGame),
        ))
        .with_children(|parent| {
            // Frame quad behind the squares.
            parent.spawn((
                Sprite::from_color(theme.frame, Vec2::splat(8.2)),
                Transform::from_translation(Vec3::new(0.0, 0.0, 0.0)),
                Name::new("Board Frame"),
            ));
            for bundle in squares {
                parent.spawn(bundle);
            }
        });
}

/// Re-derive the grid whenever the position string changes.
///
/// The grid is replaced wholesale, never patched in place.
pub(crate) fn sync_board_state(position: Res<PositionString>, mut board: ResMut<BoardState>) {
    if position.is_changed() {
        board.grid = derive_grid(&position.0);
    }
}

/// Recompute the layout on window resize (and orientation flips, which
/// arrive as resizes).
pub(crate) fn update_board_layout(
    mut resize_events: MessageReader<WindowResized>,
    mut layout: ResMut<BoardLayout>,
) {
    for resized in resize_events.read() {
        *layout = BoardLayout::for_window(resized.width);
        debug!(
            "[BOARD] Resized to {:.0}x{:.0}, board edge {:.0}px",
            resized.width, resized.height, layout.board_px
        );
    }
}

/// Seed the layout from the current window when entering the game.
pub(crate) fn init_board_layout(
    window: Single<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<BoardLayout>,
) {
    *layout = BoardLayout::for_window(window.width());
}

/// Keep the root transform in sync with the layout.
pub(crate) fn apply_board_layout(
    layout: Res<BoardLayout>,
    mut roots: Query<&mut Transform, With<BoardRoot>>,
) {
    if !layout.is_changed() {
        return;
    }
    for mut transform in roots.iter_mut() {
        transform.translation = layout.center.extend(0.0);
        transform.scale = Vec3::splat(layout.cell_px());
    }
}

/// Paint squares their base color, with the selection highlight on top.
pub(crate) fn paint_squares(
    selection: Res<Selection>,
    theme: Res<BoardTheme>,
    mut squares: Query<(&SquareCell, &mut Sprite)>,
) {
    for (cell, mut sprite) in squares.iter_mut() {
        let selected = selection.selected == Some((cell.row, cell.col));
        sprite.color = if selected {
            theme.selected
        } else {
            theme.square_color(is_light(cell.row, cell.col))
        };
    }
}

/// Plugin wiring board state, layout and square rendering.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardState>()
            .init_resource::<BoardLayout>()
            .init_resource::<BoardTheme>()
            .add_systems(
                OnEnter(AppState::InGame),
                (init_board_layout, create_board).chain(),
            )
            .add_systems(
                Update,
                (
                    update_board_layout,
                    apply_board_layout,
                    sync_board_state,
                    paint_squares,
                )
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_in_the_center_of_the_board_resolves() {
        let layout = BoardLayout {
            center: Vec2::ZERO,
            board_px: 560.0,
        };
        let window = Vec2::new(1366.0, 768.0);
        // Window center = board center = boundary of the middle four cells;
        // just up-left of it is d5's quadrant: row 3, col 3.
        let cell = layout.cell_at_cursor(Vec2::new(682.0, 383.0), window);
        assert_eq!(cell, Some((3, 3)));
    }

    #[test]
    fn cursor_outside_the_board_resolves_to_none() {
        let layout = BoardLayout::default();
        let window = Vec2::new(1366.0, 768.0);
        assert_eq!(layout.cell_at_cursor(Vec2::new(5.0, 5.0), window), None);
        assert_eq!(
            layout.cell_at_cursor(Vec2::new(1360.0, 760.0), window),
            None
        );
    }

    #[test]
    fn corners_resolve_to_corner_cells() {
        let layout = BoardLayout {
            center: Vec2::ZERO,
            board_px: 400.0,
        };
        let window = Vec2::new(400.0, 400.0);
        // Top-left pixel of the board is a8 = (0, 0).
        assert_eq!(layout.cell_at_cursor(Vec2::new(1.0, 1.0), window), Some((0, 0)));
        // Bottom-right pixel is h1 = (7, 7).
        assert_eq!(
            layout.cell_at_cursor(Vec2::new(399.0, 399.0), window),
            Some((7, 7))
        );
    }

    #[test]
    fn layout_tracks_the_sizing_contract() {
        let layout = BoardLayout::for_window(1384.0);
        // Container 1024 on a wide viewport → the 560 ceiling.
        assert_eq!(layout.board_px, 560.0);
        assert!(layout.center.x < 0.0);
    }
}
