//! Game module - move input and the authoritative rules boundary
//!
//! Owns the selection/drag state machine that turns pointer gestures into
//! move attempts, and the wrapper around the external rules engine that is
//! the only authority on legality. The controller never mutates the board
//! itself: a successful attempt updates the position string, and the
//! renderer re-derives the grid wholesale from that.

pub mod input;
pub mod plugin;
pub mod rules;
pub mod selection;

pub use plugin::GamePlugin;
pub use rules::{attempt_move, ActiveMode, GameMode, PositionString, RulesEngine};
pub use selection::{click_transition, ClickOutcome, DragState, Selection};
