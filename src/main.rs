use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solmate::core::{CorePlugin, WindowConfig};
use solmate::game::GamePlugin;
use solmate::rendering::{BoardPlugin, PiecePlugin};
use solmate::ui::UiPlugin;
use solmate::wallet::WalletPlugin;

fn main() {
    // Load .env before anything reads endpoint configuration.
    dotenvy::dotenv().ok();

    let window_config = WindowConfig::default();

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window_config.to_window()),
            ..default()
        }))
        .add_plugins(EguiPlugin { enable_multipass_for_primary_context: false, ..default() })

        // App state
        .add_plugins(CorePlugin)

        // Game systems
        .add_plugins(GamePlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PiecePlugin)
        .add_plugins(UiPlugin)
        .add_plugins(WalletPlugin)
        .run();
}
