//! Piece sprite rendering
//!
//! Piece sprites are derived from the current [`BoardState`] grid and
//! replaced wholesale whenever it changes; the renderer never moves a piece
//! sprite. Piece images are preloaded once; an image that fails to load dims
//! the affected sprites to half opacity instead of removing them, so a
//! broken asset never breaks the layout.

use std::collections::{HashMap, HashSet};

use bevy::asset::AssetLoadFailedEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::board::codec::{PieceCode, PieceColor, PieceKind};
use crate::core::AppState;

use super::board::{BoardRoot, BoardState};

/// Sprite edge relative to a square.
const PIECE_SCALE: f32 = 0.9;

/// Opacity applied to pieces whose image failed to load.
const DEGRADED_ALPHA: f32 = 0.5;

const ALL_PIECES: [PieceCode; 12] = {
    use PieceColor::*;
    use PieceKind::*;
    [
        PieceCode { color: White, kind: Pawn },
        PieceCode { color: White, kind: Knight },
        PieceCode { color: White, kind: Bishop },
        PieceCode { color: White, kind: Rook },
        PieceCode { color: White, kind: Queen },
        PieceCode { color: White, kind: King },
        PieceCode { color: Black, kind: Pawn },
        PieceCode { color: Black, kind: Knight },
        PieceCode { color: Black, kind: Bishop },
        PieceCode { color: Black, kind: Rook },
        PieceCode { color: Black, kind: Queen },
        PieceCode { color: Black, kind: King },
    ]
};

/// Marker for spawned piece sprites.
#[derive(Component, Debug, Clone, Copy)]
pub struct PieceSprite {
    pub code: PieceCode,
}

/// Handles to the piece images, plus which of them failed to load.
#[derive(Resource, Default)]
pub struct PieceAssets {
    handles: HashMap<PieceCode, Handle<Image>>,
    failed: HashSet<AssetId<Image>>,
}

impl PieceAssets {
    pub fn handle(&self, code: &PieceCode) -> Option<Handle<Image>> {
        self.handles.get(code).cloned()
    }

    pub fn is_failed(&self, handle: &Handle<Image>) -> bool {
        self.failed.contains(&handle.id())
    }
}

/// Asset path for a piece image, e.g. `pieces/wK.png`.
fn piece_asset_path(code: &PieceCode) -> String {
    format!("pieces/{}.png", code.label())
}

/// Preload all twelve piece images.
pub(crate) fn load_piece_assets(asset_server: Res<AssetServer>, mut assets: ResMut<PieceAssets>) {
    if !assets.handles.is_empty() {
        return;
    }
    for code in ALL_PIECES {
        let handle = asset_server.load::<Image>(piece_asset_path(&code));
        assets.handles.insert(code, handle);
    }
}

/// Record failed piece images and dim sprites that use them.
pub(crate) fn handle_piece_asset_failures(
    mut failures: MessageReader<AssetLoadFailedEvent<Image>>,
    mut assets: ResMut<PieceAssets>,
    mut sprites: Query<(&mut Sprite, &PieceSprite)>,
) {
    for failure in failures.read() {
        if !assets.handles.values().any(|h| h.id() == failure.id) {
            continue;
        }
        error!("[PIECES] Failed to load piece image {}: {}", failure.path, failure.error);
        assets.failed.insert(failure.id);
        for (mut sprite, _) in sprites
            .iter_mut()
            .filter(|(s, _)| s.image.id() == failure.id)
        {
            sprite.color = sprite.color.with_alpha(DEGRADED_ALPHA);
        }
    }
}

/// Rebuild every piece sprite from the grid whenever it changes.
pub(crate) fn sync_piece_sprites(
    mut commands: Commands,
    board: Res<BoardState>,
    assets: Res<PieceAssets>,
    existing: Query<Entity, With<PieceSprite>>,
    roots: Query<Entity, With<BoardRoot>>,
) {
    if !board.is_changed() {
        return;
    }
    let Ok(root) = roots.single() else {
        return;
    };

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let mut spawned = 0usize;
    commands.entity(root).with_children(|parent| {
        for (row, rank) in board.grid.iter().enumerate() {
            for (col, cell) in rank.iter().enumerate() {
                let Some(code) = cell else {
                    continue;
                };
                let Some(handle) = assets.handle(code) else {
                    continue;
                };
                let color = if assets.is_failed(&handle) {
                    Color::WHITE.with_alpha(DEGRADED_ALPHA)
                } else {
                    Color::WHITE
                };
                let mut sprite = Sprite::from_image(handle);
                sprite.custom_size = Some(Vec2::splat(PIECE_SCALE));
                sprite.color = color;
                parent.spawn((
                    sprite,
                    Transform::from_translation(Vec3::new(
                        col as f32 - 3.5,
                        3.5 - row as f32,
                        2.0,
                    )),
                    PieceSprite { code: *code },
                    Name::new(format!("Piece {}", code.label())),
                ));
                spawned += 1;
            }
        }
    });
    debug!("[PIECES] Rebuilt {spawned} piece sprites");
}

/// Plugin wiring piece assets and sprite sync.
pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceAssets>()
            .add_systems(OnEnter(AppState::InGame), load_piece_assets)
            .add_systems(
                Update,
                (sync_piece_sprites, handle_piece_asset_failures)
                    .after(super::board::sync_board_state)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_follow_piece_labels() {
        let code = PieceCode {
            color: PieceColor::White,
            kind: PieceKind::King,
        };
        assert_eq!(piece_asset_path(&code), "pieces/wK.png");
        let code = PieceCode {
            color: PieceColor::Black,
            kind: PieceKind::Knight,
        };
        assert_eq!(piece_asset_path(&code), "pieces/bN.png");
    }

    #[test]
    fn all_twelve_piece_codes_are_distinct() {
        let mut seen = HashSet::new();
        for code in ALL_PIECES {
            assert!(seen.insert(code.label()));
        }
        assert_eq!(seen.len(), 12);
    }
}
