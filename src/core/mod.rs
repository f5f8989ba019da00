//! Core module - application state machine and infrastructure
//!
//! Provides the foundational state machine and core application setup for the
//! SolMate client using Bevy's state system.
//!
//! # State Architecture
//!
//! - [`AppState`] - Primary state enum: `MainMenu` (landing screen) and
//!   `InGame` (playable board)
//!
//! # Core Plugin
//!
//! [`CorePlugin`] sets up fundamental application infrastructure:
//! - Core state registration and transition logging
//! - Window configuration via [`WindowConfig`]

pub mod error;
pub mod plugin;
pub mod states;
pub mod window_config;

pub use plugin::CorePlugin;
pub use states::*;
pub use window_config::WindowConfig;
