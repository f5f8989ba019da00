//! In-game UI
//!
//! Side panel next to the board: game-mode selection, turn indicator, move
//! history in standard algebraic notation, and the Exit Game action. Modes
//! are presentation only; matchmaking and bot play live outside this
//! client.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::core::AppState;
use crate::game::{ActiveMode, GameMode, RulesEngine};
use crate::rendering::SIDE_PANEL_PX;

use super::styles::UiColors;

/// Plugin for the in-game side panel.
pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            game_panel_ui.run_if(in_state(AppState::InGame)),
        );
    }
}

fn game_panel_ui(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<AppState>>,
    mut mode: ResMut<ActiveMode>,
    rules: Res<RulesEngine>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("game_side_panel")
        .exact_width(SIDE_PANEL_PX)
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_DARK)
                .inner_margin(egui::Margin::symmetric(20, 20)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("SOLMATE")
                    .size(20.0)
                    .strong()
                    .color(UiColors::ACCENT_TEAL),
            );
            ui.add_space(15.0);

            match mode.0 {
                None => mode_select(ui, &mut mode),
                Some(active) => mode_badge(ui, active),
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            status_section(ui, &rules);
            ui.add_space(10.0);
            history_section(ui, &rules);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(10.0);
                if ui
                    .add_sized(
                        [200.0, 40.0],
                        egui::Button::new(
                            egui::RichText::new("Exit Game")
                                .size(15.0)
                                .color(egui::Color32::WHITE),
                        )
                        .fill(UiColors::DANGER)
                        .corner_radius(egui::CornerRadius::same(8)),
                    )
                    .clicked()
                {
                    // Leaving the state resets the engine and the position.
                    next_state.set(AppState::MainMenu);
                }
            });
        });
}

fn mode_select(ui: &mut egui::Ui, mode: &mut ActiveMode) {
    ui.label(
        egui::RichText::new("Choose a game mode")
            .size(14.0)
            .color(UiColors::TEXT_SECONDARY),
    );
    ui.add_space(8.0);
    if ui
        .add_sized(
            [200.0, 38.0],
            egui::Button::new(egui::RichText::new("Online Match").color(egui::Color32::WHITE))
                .fill(UiColors::ACCENT_BLUE)
                .corner_radius(egui::CornerRadius::same(8)),
        )
        .clicked()
    {
        mode.0 = Some(GameMode::Online);
    }
    ui.add_space(6.0);
    if ui
        .add_sized(
            [200.0, 38.0],
            egui::Button::new(egui::RichText::new("Play vs Bot").color(egui::Color32::WHITE))
                .fill(UiColors::ACCENT_TEAL)
                .corner_radius(egui::CornerRadius::same(8)),
        )
        .clicked()
    {
        mode.0 = Some(GameMode::Bot);
    }
}

fn mode_badge(ui: &mut egui::Ui, mode: GameMode) {
    let label = match mode {
        GameMode::Online => "Online Match",
        GameMode::Bot => "Playing vs Bot",
    };
    ui.label(
        egui::RichText::new(label)
            .size(16.0)
            .strong()
            .color(UiColors::TEXT_PRIMARY),
    );
}

fn status_section(ui: &mut egui::Ui, rules: &RulesEngine) {
    use crate::board::codec::PieceColor;
    let status = if rules.is_game_over() {
        "Game over".to_string()
    } else {
        match rules.turn() {
            PieceColor::White => "White to move".to_string(),
            PieceColor::Black => "Black to move".to_string(),
        }
    };
    ui.label(
        egui::RichText::new(status)
            .size(14.0)
            .color(UiColors::TEXT_PRIMARY),
    );
}

fn history_section(ui: &mut egui::Ui, rules: &RulesEngine) {
    ui.label(
        egui::RichText::new("Moves")
            .size(13.0)
            .strong()
            .color(UiColors::TEXT_SECONDARY),
    );
    ui.add_space(5.0);
    egui::ScrollArea::vertical()
        .max_height(320.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (i, pair) in rules.history().chunks(2).enumerate() {
                let white = pair.first().map(String::as_str).unwrap_or_default();
                let black = pair.get(1).map(String::as_str).unwrap_or_default();
                ui.label(
                    egui::RichText::new(format!("{:>3}. {:<8} {}", i + 1, white, black))
                        .size(13.0)
                        .monospace()
                        .color(UiColors::TEXT_PRIMARY),
                );
            }
        });
}
