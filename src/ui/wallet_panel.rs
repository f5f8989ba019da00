//! Wallet panel
//!
//! Connect/disconnect UI plus a minimal payment form, shown as an overlay
//! window on the landing screen. Errors are surfaced in place, classified by
//! the wallet crate; nothing is retried automatically.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use solmate_wallet::WalletStatus;

use crate::core::AppState;
use crate::wallet::plugin::{disconnect, spawn_connect, spawn_payment, WalletTask};
use crate::wallet::WalletSession;

use super::styles::UiColors;

/// Local state of the wallet panel.
#[derive(Resource, Default)]
pub struct WalletPanelState {
    pub open: bool,
    pub destination: String,
    pub amount: String,
}

/// Plugin for the wallet panel overlay.
pub struct WalletPanelPlugin;

impl Plugin for WalletPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WalletPanelState>().add_systems(
            EguiPrimaryContextPass,
            wallet_panel_ui.run_if(in_state(AppState::MainMenu)),
        );
    }
}

fn wallet_panel_ui(
    mut contexts: EguiContexts,
    mut commands: Commands,
    mut panel: ResMut<WalletPanelState>,
    mut session: ResMut<WalletSession>,
    task: Option<Res<WalletTask>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    if !panel.open {
        return;
    }
    // Keep the spinner animated while a task is in flight.
    if task.is_some() {
        ctx.request_repaint();
    }

    let mut open = panel.open;
    egui::Window::new("Wallet")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, [-20.0, 60.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_OVERLAY)
                .corner_radius(10.0)
                .inner_margin(15.0)
                .stroke(egui::Stroke::new(1.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.set_width(300.0);
            status_line(ui, &session);
            ui.add_space(8.0);

            if let Some(err) = &session.error {
                ui.label(
                    egui::RichText::new(err.as_str())
                        .size(13.0)
                        .color(UiColors::DANGER),
                );
                ui.add_space(8.0);
            }

            if session.busy {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("Waiting for the wallet...")
                            .color(UiColors::TEXT_SECONDARY),
                    );
                });
                return;
            }

            match session.status {
                WalletStatus::Connected => connected_section(ui, &mut commands, &mut panel, &mut session),
                _ => disconnected_section(ui, &mut commands, &mut session),
            }
        });
    panel.open = open;
}

fn status_line(ui: &mut egui::Ui, session: &WalletSession) {
    let (label, color) = match session.status {
        WalletStatus::Disconnected => ("Disconnected", UiColors::TEXT_SECONDARY),
        WalletStatus::Connecting => ("Connecting", UiColors::ACCENT_TEAL),
        WalletStatus::Connected => ("Connected", UiColors::SUCCESS),
        WalletStatus::Error => ("Error", UiColors::DANGER),
    };
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(14.0).strong().color(color));
        if let Some(short) = session.short_address() {
            ui.label(
                egui::RichText::new(short)
                    .size(13.0)
                    .color(UiColors::TEXT_PRIMARY)
                    .monospace(),
            );
        }
    });
}

fn disconnected_section(ui: &mut egui::Ui, commands: &mut Commands, session: &mut WalletSession) {
    ui.label(
        egui::RichText::new("Connect your wallet to wager and collect rewards.")
            .size(13.0)
            .color(UiColors::TEXT_SECONDARY),
    );
    ui.add_space(10.0);
    if ui
        .add_sized(
            [270.0, 40.0],
            egui::Button::new(
                egui::RichText::new("Connect Wallet")
                    .size(15.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(UiColors::ACCENT_TEAL)
            .corner_radius(egui::CornerRadius::same(8)),
        )
        .clicked()
    {
        spawn_connect(commands, session);
    }
}

fn connected_section(
    ui: &mut egui::Ui,
    commands: &mut Commands,
    panel: &mut WalletPanelState,
    session: &mut WalletSession,
) {
    ui.separator();
    ui.label(
        egui::RichText::new("Send SOL")
            .size(14.0)
            .strong()
            .color(UiColors::TEXT_PRIMARY),
    );
    ui.add_space(5.0);
    ui.add(
        egui::TextEdit::singleline(&mut panel.destination)
            .hint_text("Destination address")
            .desired_width(270.0),
    );
    ui.add_space(5.0);
    ui.add(
        egui::TextEdit::singleline(&mut panel.amount)
            .hint_text("Amount (SOL)")
            .desired_width(270.0),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui
            .add(
                egui::Button::new(egui::RichText::new("Send").color(egui::Color32::WHITE))
                    .fill(UiColors::ACCENT_BLUE)
                    .corner_radius(egui::CornerRadius::same(8)),
            )
            .clicked()
        {
            match panel.amount.trim().parse::<f64>() {
                Ok(amount) if amount > 0.0 => {
                    let destination = panel.destination.trim().to_string();
                    spawn_payment(commands, session, destination, amount);
                }
                _ => {
                    session.error = Some("Enter a positive SOL amount".to_string());
                }
            }
        }
        if ui
            .add(
                egui::Button::new("Disconnect")
                    .fill(UiColors::BG_MID)
                    .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
                    .corner_radius(egui::CornerRadius::same(8)),
            )
            .clicked()
        {
            disconnect(session);
        }
    });

    if let Some(signature) = &session.last_payment {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Submitted: {signature}"))
                .size(11.0)
                .color(UiColors::SUCCESS)
                .monospace(),
        );
    }
}
