//! UI module - egui overlay screens
//!
//! All overlay UI is egui rendered through `bevy_egui`: the landing screen's
//! marketing sections, the in-game side panel, and the wallet panel. Systems
//! run in `EguiPrimaryContextPass` and bail out gracefully when the context
//! is not available yet.

pub mod game_ui;
pub mod landing;
pub mod styles;
pub mod wallet_panel;

use bevy::prelude::*;

/// Plugin registering every egui screen.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(landing::LandingPlugin)
            .add_plugins(game_ui::GameUiPlugin)
            .add_plugins(wallet_panel::WalletPanelPlugin);
    }
}
