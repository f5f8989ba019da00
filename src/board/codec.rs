//! Position codec
//!
//! Turns a position string into an 8×8 grid of piece codes. The input is the
//! piece-placement field of a FEN-style string: ranks separated by `/`,
//! scanned left to right, digits expanding to runs of empty cells, letters
//! encoding side (case) and piece kind. The codec is purely structural; it
//! never checks king counts, reachability, or any other chess semantics.
//!
//! The literal sentinel [`START_POSITION`] bypasses parsing entirely and
//! yields the fixed standard starting grid; it is the initial render path
//! before the first rules-engine round trip.
//!
//! Malformed input must never take the renderer down: [`derive_grid`] logs
//! the failure and degrades to an all-empty grid. The strict parser
//! [`parse_placement`] is public so tests can assert the exact failure mode.

use bevy::log::warn;
use thiserror::Error;

/// Reserved sentinel for the standard starting layout.
pub const START_POSITION: &str = "start";

/// Side of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

/// Kind of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece code: side plus kind, the value of one occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceCode {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl PieceCode {
    /// Decode a placement character; `None` for anything that is not a piece
    /// letter. Uppercase is white, lowercase is black.
    pub fn from_placement_char(ch: char) -> Option<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self { color, kind })
    }

    /// Canonical two-character label, e.g. `wP`, `bK`. Also names the piece
    /// sprite asset.
    pub fn label(&self) -> &'static str {
        use PieceColor::*;
        use PieceKind::*;
        match (self.color, self.kind) {
            (White, Pawn) => "wP",
            (White, Knight) => "wN",
            (White, Bishop) => "wB",
            (White, Rook) => "wR",
            (White, Queen) => "wQ",
            (White, King) => "wK",
            (Black, Pawn) => "bP",
            (Black, Knight) => "bN",
            (Black, Bishop) => "bB",
            (Black, Rook) => "bR",
            (Black, Queen) => "bQ",
            (Black, King) => "bK",
        }
    }
}

/// 8×8 grid of cells, row 0 = rank 8 (the opponent's back rank on top).
pub type BoardGrid = [[Option<PieceCode>; 8]; 8];

/// Grid with every cell empty.
pub const EMPTY_GRID: BoardGrid = [[None; 8]; 8];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The fixed standard starting grid the [`START_POSITION`] sentinel maps to.
pub fn starting_grid() -> BoardGrid {
    let mut grid = EMPTY_GRID;
    for (col, kind) in BACK_RANK.iter().enumerate() {
        grid[0][col] = Some(PieceCode {
            color: PieceColor::Black,
            kind: *kind,
        });
        grid[1][col] = Some(PieceCode {
            color: PieceColor::Black,
            kind: PieceKind::Pawn,
        });
        grid[6][col] = Some(PieceCode {
            color: PieceColor::White,
            kind: PieceKind::Pawn,
        });
        grid[7][col] = Some(PieceCode {
            color: PieceColor::White,
            kind: *kind,
        });
    }
    grid
}

/// Structural failures of the position codec.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PositionError {
    #[error("empty position string")]
    Empty,

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} expands to {width} cells")]
    RankWidth { rank: usize, width: usize },

    #[error("invalid piece character `{0}`")]
    InvalidPiece(char),
}

/// Strictly parse a position string into a grid.
///
/// Accepts a bare placement field or a full FEN string (everything after the
/// first whitespace is ignored). Exactly 8 ranks are required and every rank
/// must expand to exactly 8 cells.
pub fn parse_placement(position: &str) -> Result<BoardGrid, PositionError> {
    let placement = position
        .split_whitespace()
        .next()
        .ok_or(PositionError::Empty)?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::RankCount(ranks.len()));
    }

    let mut grid = EMPTY_GRID;
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for ch in rank.chars() {
            if let Some(run) = ch.to_digit(10) {
                col += run as usize;
            } else {
                let piece =
                    PieceCode::from_placement_char(ch).ok_or(PositionError::InvalidPiece(ch))?;
                if col >= 8 {
                    // Count the overflowing cell so the error is accurate.
                    return Err(PositionError::RankWidth {
                        rank: row,
                        width: col + 1,
                    });
                }
                grid[row][col] = Some(piece);
                col += 1;
            }
            if col > 8 {
                return Err(PositionError::RankWidth { rank: row, width: col });
            }
        }
        if col != 8 {
            return Err(PositionError::RankWidth { rank: row, width: col });
        }
    }
    Ok(grid)
}

/// Derive the grid for a position string, degrading on malformed input.
///
/// The renderer must never crash on bad position data: failures are logged
/// and produce the all-empty grid.
pub fn derive_grid(position: &str) -> BoardGrid {
    if position == START_POSITION {
        return starting_grid();
    }
    match parse_placement(position) {
        Ok(grid) => grid,
        Err(e) => {
            warn!("[BOARD] Failed to parse position `{position}`: {e}. Rendering empty board.");
            EMPTY_GRID
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn count_pieces(grid: &BoardGrid) -> usize {
        grid.iter().flatten().filter(|c| c.is_some()).count()
    }

    #[test]
    fn start_sentinel_yields_canonical_grid() {
        let grid = derive_grid(START_POSITION);
        assert_eq!(count_pieces(&grid), 32);
        // Opponent's back rank on top, queen on d-file.
        assert_eq!(
            grid[0][3],
            Some(PieceCode {
                color: PieceColor::Black,
                kind: PieceKind::Queen
            })
        );
        assert_eq!(
            grid[7][4],
            Some(PieceCode {
                color: PieceColor::White,
                kind: PieceKind::King
            })
        );
        // Sentinel is stateless: every call yields the same grid.
        assert_eq!(derive_grid(START_POSITION), grid);
    }

    #[test]
    fn start_sentinel_matches_parsed_start_fen() {
        assert_eq!(derive_grid(START_POSITION), parse_placement(START_FEN).unwrap());
    }

    #[test]
    fn full_fen_ignores_trailing_fields() {
        let after_e4 = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let grid = parse_placement(after_e4).unwrap();
        assert_eq!(count_pieces(&grid), 32);
        // The pushed pawn sits on e4 = row 4, col 4.
        assert_eq!(
            grid[4][4],
            Some(PieceCode {
                color: PieceColor::White,
                kind: PieceKind::Pawn
            })
        );
        assert_eq!(grid[6][4], None);
    }

    #[test]
    fn case_encodes_side_and_letter_encodes_kind() {
        let grid = parse_placement("8/8/8/3qK3/8/8/8/8").unwrap();
        assert_eq!(
            grid[3][3],
            Some(PieceCode {
                color: PieceColor::Black,
                kind: PieceKind::Queen
            })
        );
        assert_eq!(
            grid[3][4],
            Some(PieceCode {
                color: PieceColor::White,
                kind: PieceKind::King
            })
        );
        assert_eq!(count_pieces(&grid), 2);
    }

    #[test]
    fn rank_summing_short_is_rejected() {
        let result = parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN");
        assert_eq!(result, Err(PositionError::RankWidth { rank: 7, width: 7 }));
    }

    #[test]
    fn rank_summing_long_is_rejected() {
        let result = parse_placement("9/8/8/8/8/8/8/8");
        assert_eq!(result, Err(PositionError::RankWidth { rank: 0, width: 9 }));
    }

    #[test]
    fn wrong_rank_count_is_rejected() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8"),
            Err(PositionError::RankCount(7))
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/8/8"),
            Err(PositionError::RankCount(9))
        );
    }

    #[test]
    fn invalid_letter_is_rejected() {
        assert_eq!(
            parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX"),
            Err(PositionError::InvalidPiece('X'))
        );
    }

    #[test]
    fn malformed_input_degrades_to_empty_grid() {
        for bad in ["", "garbage", "8/8/8/8", "rnbqkbnr/ppp"] {
            let grid = derive_grid(bad);
            assert_eq!(count_pieces(&grid), 0, "input `{bad}` should degrade");
        }
    }

    #[test]
    fn codec_is_structural_not_semantic() {
        // No kings at all: structurally fine, the codec does not care.
        let grid = parse_placement("8/8/8/8/8/8/8/QQQQQQQQ").unwrap();
        assert_eq!(count_pieces(&grid), 8);
    }
}
