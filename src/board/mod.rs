//! Board domain - position codec, coordinate mapping, responsive sizing
//!
//! Pure data and functions with no rendering or input dependencies. The
//! codec turns a position string into an 8×8 grid of piece codes, the
//! coordinate helpers are the single source of truth for square naming, and
//! the sizing helper computes the board's pixel width from the viewport.

pub mod codec;
pub mod coords;
pub mod sizing;

pub use codec::{derive_grid, starting_grid, BoardGrid, PieceCode, PieceColor, PieceKind};
pub use coords::{is_light, square_name, to_square};
