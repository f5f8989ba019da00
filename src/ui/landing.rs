//! Landing screen
//!
//! The marketing surface shown in `MainMenu`: hero section, key features,
//! how-it-works steps, a live-games statistics showcase, waitlist signup and
//! a footer with external links. Static content with no state machine beyond
//! the waitlist's confirmed flag; the interesting buttons route to the game
//! or open the wallet panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::core::AppState;

use super::styles::UiColors;
use super::wallet_panel::WalletPanelState;

const REPOSITORY_URL: &str = "https://github.com/trilltino/solmate";
const EXPLORER_URL: &str = "https://explorer.solana.com/?cluster=devnet";

/// Waitlist signup state.
#[derive(Resource, Default)]
pub struct WaitlistState {
    pub email: String,
    pub confirmed: bool,
}

/// Plugin for the landing screen.
pub struct LandingPlugin;

impl Plugin for LandingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaitlistState>()
            .add_systems(OnEnter(AppState::MainMenu), setup_menu_camera)
            .add_systems(
                EguiPrimaryContextPass,
                landing_ui.run_if(in_state(AppState::MainMenu)),
            );
    }
}

/// Marker for the landing camera.
#[derive(Component)]
struct MenuCamera;

fn setup_menu_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MenuCamera,
        Name::new("Menu Camera"),
        DespawnOnExit(AppState::MainMenu),
    ));
}

fn landing_ui(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<AppState>>,
    mut waitlist: ResMut<WaitlistState>,
    mut wallet_panel: ResMut<WalletPanelState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("landing_top_bar")
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_DARK)
                .inner_margin(egui::Margin::symmetric(20, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("SOLMATE")
                        .size(22.0)
                        .strong()
                        .color(UiColors::ACCENT_TEAL),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("Connect Wallet").color(egui::Color32::WHITE),
                            )
                            .fill(UiColors::ACCENT_TEAL)
                            .corner_radius(egui::CornerRadius::same(16)),
                        )
                        .clicked()
                    {
                        wallet_panel.open = !wallet_panel.open;
                    }
                });
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_DARK))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    hero_section(ui, &mut next_state);
                    ui.add_space(40.0);
                    key_features(ui);
                    ui.add_space(40.0);
                    how_it_works(ui);
                    ui.add_space(40.0);
                    live_statistics(ui);
                    ui.add_space(40.0);
                    waitlist_section(ui, &mut waitlist);
                    ui.add_space(40.0);
                    footer(ui);
                    ui.add_space(20.0);
                });
            });
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(28.0)
            .strong()
            .color(UiColors::TEXT_PRIMARY),
    );
    ui.add_space(15.0);
}

fn hero_section(ui: &mut egui::Ui, next_state: &mut NextState<AppState>) {
    ui.add_space(60.0);
    ui.label(
        egui::RichText::new("Welcome to SolMate!")
            .size(48.0)
            .strong()
            .color(UiColors::TEXT_PRIMARY),
    );
    ui.add_space(10.0);
    ui.label(
        egui::RichText::new("Every move secured by Solana.")
            .size(18.0)
            .color(UiColors::TEXT_SECONDARY),
    );
    ui.add_space(30.0);
    if ui
        .add_sized(
            [220.0, 50.0],
            egui::Button::new(
                egui::RichText::new("PLAY NOW")
                    .size(18.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(UiColors::ACCENT_BLUE)
            .corner_radius(egui::CornerRadius::same(8)),
        )
        .clicked()
    {
        next_state.set(AppState::InGame);
    }
}

fn feature_card(ui: &mut egui::Ui, title: &str, body: &str) {
    egui::Frame::default()
        .fill(UiColors::BG_MID)
        .corner_radius(10.0)
        .inner_margin(15.0)
        .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
        .show(ui, |ui| {
            ui.set_width(220.0);
            ui.label(
                egui::RichText::new(title)
                    .size(16.0)
                    .strong()
                    .color(UiColors::ACCENT_TEAL),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(body)
                    .size(13.0)
                    .color(UiColors::TEXT_SECONDARY),
            );
        });
}

fn key_features(ui: &mut egui::Ui) {
    section_heading(ui, "Key Features");
    ui.horizontal_wrapped(|ui| {
        feature_card(
            ui,
            "On-Chain Wagers",
            "Stake SOL on your games. Stakes and payouts settle on-chain, verified by the network.",
        );
        feature_card(
            ui,
            "Exclusive NFTs",
            "Win collectible piece sets and board skins minted for tournament winners.",
        );
        feature_card(
            ui,
            "Secure & Private",
            "Your keys stay in your wallet. The game never sees more than a signature.",
        );
    });
}

fn how_it_works(ui: &mut egui::Ui) {
    section_heading(ui, "How It Works");
    let steps = [
        ("1", "Connect", "Link your wallet with one click."),
        ("2", "Wager", "Pick a stake and find an opponent."),
        ("3", "Play", "Classic chess, nothing changed."),
        ("4", "Collect", "Winnings settle straight to your wallet."),
    ];
    ui.horizontal_wrapped(|ui| {
        for (number, title, body) in steps {
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(10.0)
                .inner_margin(15.0)
                .show(ui, |ui| {
                    ui.set_width(160.0);
                    ui.label(
                        egui::RichText::new(number)
                            .size(24.0)
                            .strong()
                            .color(UiColors::ACCENT_BLUE),
                    );
                    ui.label(
                        egui::RichText::new(title)
                            .size(15.0)
                            .strong()
                            .color(UiColors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(body)
                            .size(12.0)
                            .color(UiColors::TEXT_SECONDARY),
                    );
                });
        }
    });
}

fn stat_tile(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.set_width(140.0);
        ui.label(
            egui::RichText::new(value)
                .size(26.0)
                .strong()
                .color(UiColors::ACCENT_TEAL),
        );
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .color(UiColors::TEXT_SECONDARY),
        );
    });
}

fn live_statistics(ui: &mut egui::Ui) {
    section_heading(ui, "Live Games");
    // Showcase numbers; the live feed ships with the backend.
    ui.horizontal(|ui| {
        stat_tile(ui, "1,284", "Total Games");
        stat_tile(ui, "37", "Active Games");
        stat_tile(ui, "412 SOL", "Token Wagered");
        stat_tile(ui, "96", "Recent Winners");
    });
}

fn waitlist_section(ui: &mut egui::Ui, waitlist: &mut WaitlistState) {
    section_heading(ui, "Early Updates");
    if waitlist.confirmed {
        ui.label(
            egui::RichText::new("Early access confirmed. See you on the board.")
                .size(15.0)
                .color(UiColors::SUCCESS),
        );
        return;
    }
    ui.label(
        egui::RichText::new("Join the waitlist for tournaments and NFT drops.")
            .size(13.0)
            .color(UiColors::TEXT_SECONDARY),
    );
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        // Center the pair roughly within the scroll column.
        ui.add_space(ui.available_width() / 2.0 - 190.0);
        ui.add(
            egui::TextEdit::singleline(&mut waitlist.email)
                .hint_text("you@example.com")
                .desired_width(260.0),
        );
        let ready = waitlist.email.contains('@');
        if ui
            .add_enabled(
                ready,
                egui::Button::new(egui::RichText::new("Join").color(egui::Color32::WHITE))
                    .fill(UiColors::ACCENT_TEAL)
                    .corner_radius(egui::CornerRadius::same(8)),
            )
            .clicked()
        {
            info!("[LANDING] Waitlist signup: {}", waitlist.email);
            waitlist.confirmed = true;
        }
    });
}

fn footer(ui: &mut egui::Ui) {
    ui.separator();
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.add_space(ui.available_width() / 2.0 - 160.0);
        ui.label(
            egui::RichText::new("© 2026 SolMate")
                .size(12.0)
                .color(UiColors::TEXT_SECONDARY),
        );
        if ui
            .link(egui::RichText::new("GitHub").size(12.0).color(UiColors::ACCENT_BLUE))
            .clicked()
        {
            open_external(REPOSITORY_URL);
        }
        if ui
            .link(egui::RichText::new("Explorer").size(12.0).color(UiColors::ACCENT_BLUE))
            .clicked()
        {
            open_external(EXPLORER_URL);
        }
    });
}

fn open_external(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        warn!("[LANDING] Failed to open {url}: {e}");
    }
}
