//! Rules-engine boundary and page-container state
//!
//! [`RulesEngine`] wraps the external chess-rules library that owns
//! legality, check/checkmate detection, and authoritative position
//! transitions; nothing in this crate second-guesses it. The container
//! holds the current [`PositionString`]; after every accepted move it is
//! re-derived from the engine, which is what triggers the renderer to
//! rebuild the grid.

use bevy::prelude::*;
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{Chess, EnPassantMode, File, Move, Position, Rank, Role};

use crate::board::codec::{PieceColor, START_POSITION};
use crate::board::coords::to_square;

/// Presentation-only game mode chosen by the player.
///
/// Matchmaking and bot play are out of scope; the mode only drives the badge
/// shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Online,
    Bot,
}

/// The currently selected game mode, if any.
#[derive(Resource, Debug, Default)]
pub struct ActiveMode(pub Option<GameMode>);

/// The current position string handed to the board renderer.
///
/// Starts as the `"start"` sentinel and is replaced wholesale with the
/// engine's FEN after every accepted move.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PositionString(pub String);

impl Default for PositionString {
    fn default() -> Self {
        Self(START_POSITION.to_string())
    }
}

/// Authoritative game state, owned by the page container.
#[derive(Resource)]
pub struct RulesEngine {
    position: Chess,
    history: Vec<String>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self {
            position: Chess::default(),
            history: Vec::new(),
        }
    }
}

impl RulesEngine {
    /// Try to play a move between two cells. Returns whether the engine
    /// accepted it.
    ///
    /// Scans the engine's legal moves for a from/to match; castling is
    /// matched against the king's two-square destination, and promotions
    /// default to a queen. Any engine-side failure counts as a rejection:
    /// it is logged, never surfaced.
    pub fn try_move(&mut self, from: (u8, u8), to: (u8, u8)) -> bool {
        let from_sq = to_square(from.0, from.1);
        let to_sq = to_square(to.0, to.1);

        for m in &self.position.legal_moves() {
            let (move_from, move_to) = match m {
                Move::Normal { from, to, .. } => (*from, *to),
                Move::EnPassant { from, to, .. } => (*from, *to),
                Move::Castle { king, rook, .. } => {
                    // The user moves the king two squares; normalize the
                    // castling move to that destination.
                    let king_dest = if rook.file() == File::H {
                        shakmaty::Square::from_coords(File::G, rook.rank())
                    } else {
                        shakmaty::Square::from_coords(File::C, rook.rank())
                    };
                    (*king, king_dest)
                }
                Move::Put { .. } => continue,
            };

            if move_from == from_sq && move_to == to_sq {
                // Fixed default promotion choice: queen.
                let move_to_play = match m {
                    Move::Normal {
                        role: Role::Pawn,
                        from,
                        to,
                        capture,
                        promotion: None,
                    } if to.rank() == Rank::Eighth || to.rank() == Rank::First => Move::Normal {
                        role: Role::Pawn,
                        from: *from,
                        to: *to,
                        capture: *capture,
                        promotion: Some(Role::Queen),
                    },
                    _ => m.clone(),
                };

                let san = San::from_move(&self.position, move_to_play.clone()).to_string();
                match self.position.clone().play(move_to_play) {
                    Ok(next) => {
                        self.position = next;
                        self.history.push(san);
                        return true;
                    }
                    Err(e) => {
                        // A legal-move-list entry failing to play would be an
                        // engine inconsistency; treat it as a plain rejection.
                        debug!("[RULES] Engine rejected {san}: {e:?}");
                        return false;
                    }
                }
            }
        }
        false
    }

    /// The engine's current position as a FEN string.
    pub fn position_string(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Side to move.
    pub fn turn(&self) -> PieceColor {
        match self.position.turn() {
            shakmaty::Color::White => PieceColor::White,
            shakmaty::Color::Black => PieceColor::Black,
        }
    }

    /// Whether the game has ended (mate, stalemate, or insufficient material).
    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Moves played so far, in standard algebraic notation.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Back to the starting position with an empty history.
    pub fn reset(&mut self) {
        self.position = Chess::default();
        self.history.clear();
    }
}

/// Container-level move attempt: ask the engine, and on success re-derive
/// the position string (the renderer's rebuild trigger). Returns the
/// engine's verdict.
pub fn attempt_move(
    rules: &mut RulesEngine,
    position: &mut PositionString,
    from: (u8, u8),
    to: (u8, u8),
) -> bool {
    let accepted = rules.try_move(from, to);
    if accepted {
        position.0 = rules.position_string();
        debug!("[RULES] Accepted move, new position `{}`", position.0);
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::codec::{derive_grid, PieceKind};

    // Cells used below: e2 = (6, 4), e4 = (4, 4), e5 = (3, 4).

    #[test]
    fn legal_pawn_push_is_accepted() {
        let mut rules = RulesEngine::default();
        assert!(rules.try_move((6, 4), (4, 4)));
        assert_eq!(rules.history(), ["e4"]);
        assert_eq!(rules.turn(), PieceColor::Black);
    }

    #[test]
    fn illegal_move_is_rejected_without_state_change() {
        let mut rules = RulesEngine::default();
        // A rook cannot jump over its own pawn.
        assert!(!rules.try_move((7, 0), (4, 0)));
        assert!(rules.history().is_empty());
        assert_eq!(rules.turn(), PieceColor::White);
    }

    #[test]
    fn accepted_move_updates_the_position_string() {
        let mut rules = RulesEngine::default();
        let mut position = PositionString::default();
        assert!(attempt_move(&mut rules, &mut position, (6, 4), (4, 4)));
        assert_ne!(position.0, START_POSITION);
        // The codec can parse what the engine emits, and the pawn is on e4.
        let grid = derive_grid(&position.0);
        assert_eq!(grid[4][4].map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(grid[6][4], None);
    }

    #[test]
    fn rejected_move_leaves_the_position_string_alone() {
        let mut rules = RulesEngine::default();
        let mut position = PositionString::default();
        assert!(!attempt_move(&mut rules, &mut position, (7, 0), (4, 0)));
        assert_eq!(position.0, START_POSITION);
    }

    #[test]
    fn reset_returns_to_the_starting_position() {
        let mut rules = RulesEngine::default();
        assert!(rules.try_move((6, 4), (4, 4)));
        rules.reset();
        assert!(rules.history().is_empty());
        assert_eq!(rules.turn(), PieceColor::White);
        assert!(!rules.is_game_over());
    }
}
