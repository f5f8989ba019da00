//! Rendering module - board and piece presentation
//!
//! Pure presentational mapping from the derived grid plus selection state to
//! sprites. Nothing here decides legality or mutates game state; the board
//! is rebuilt wholesale whenever the position string changes.

pub mod board;
pub mod pieces;
pub mod theme;

pub use board::{BoardLayout, BoardPlugin, BoardRoot, BoardState, SquareCell, SIDE_PANEL_PX};
pub use pieces::{PieceAssets, PiecePlugin, PieceSprite};
pub use theme::BoardTheme;
