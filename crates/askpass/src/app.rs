//! Main application state and update loop

use std::sync::Arc;

use askpass_dialog_adapters::{AskpassConfig, InMemoryWallet, WalletStatus};
use askpass_dialog_core::{DialogOutcome, Mode, PortError};
use eframe::egui;

use crate::passphrase_window::PassphraseWindow;
use crate::ui;

/// The main application state
pub struct App {
    /// Wallet shared with any open passphrase dialog
    wallet: Arc<InMemoryWallet>,
    config: AskpassConfig,
    /// Currently open passphrase dialog
    dialog: Option<PassphraseWindow>,
    last_info: Option<String>,
    last_error: Option<String>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AskpassConfig) -> Result<Self, PortError> {
        let wallet = Arc::new(InMemoryWallet::with_kdf(config.kdf)?);
        Ok(Self {
            wallet,
            config,
            dialog: None,
            last_info: None,
            last_error: None,
        })
    }

    fn open_dialog(&mut self, mode: Mode) {
        self.last_info = None;
        self.last_error = None;
        self.dialog = Some(PassphraseWindow::open(
            mode,
            Arc::clone(&self.wallet),
            self.config.dialog.clone(),
        ));
    }

    fn poll_dialog(&mut self, ctx: &egui::Context) {
        let finished = self.dialog.as_mut().and_then(|window| {
            window.show(ctx);
            window
                .outcome()
                .map(|outcome| (window.mode(), outcome, window.shutdown_requested()))
        });
        let Some((mode, outcome, shutdown)) = finished else {
            return;
        };

        // Dropping the window scrubs its passphrase buffers.
        self.dialog = None;
        if outcome == DialogOutcome::Accepted {
            self.last_info = Some(format!("{} completed", mode.layout().title));
        }
        if shutdown {
            tracing::info!("closing to finish wallet encryption");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_wallet_panel(&mut self, ui: &mut egui::Ui) {
        let status = self.wallet.status();

        ui::styled_heading(ui, "Wallet");
        ui::section_header(ui, "Status");
        ui::status_row(ui, "Encrypted", yes_no(status.encrypted));
        ui::status_row(ui, "Locked", yes_no(status.locked));
        ui::status_row(ui, "Anonymize only", yes_no(status.anonymize_only));
        let fingerprint = self
            .wallet
            .key_fingerprint()
            .unwrap_or_else(|| "(locked)".to_owned());
        ui::status_row(ui, "Key fingerprint", &fingerprint);

        if let Some(err) = self.last_error.as_ref() {
            ui.colored_label(ui::DANGER, err);
        }
        if let Some(info) = self.last_info.as_ref() {
            ui.colored_label(egui::Color32::LIGHT_GREEN, info);
        }

        ui::section_header(ui, "Actions");
        let idle = self.dialog.is_none();
        ui.add_enabled_ui(idle, |ui| {
            ui.horizontal_wrapped(|ui| self.render_actions(ui, status));
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui, status: WalletStatus) {
        if !status.encrypted {
            if ui.button("Encrypt wallet…").clicked() {
                self.open_dialog(Mode::Encrypt);
            }
            return;
        }

        if status.locked {
            if ui.button("Unlock…").clicked() {
                self.open_dialog(Mode::Unlock);
            }
            if ui.button("Unlock for anonymization…").clicked() {
                self.open_dialog(Mode::UnlockAnonymize);
            }
        } else if ui.button("Lock").clicked() {
            match self.wallet.lock() {
                Ok(()) => self.last_info = Some("Wallet locked".to_owned()),
                Err(e) => self.last_error = Some(e.to_string()),
            }
        }
        if ui.button("Change passphrase…").clicked() {
            self.open_dialog(Mode::ChangePass);
        }
        if ui.button("Decrypt wallet…").clicked() {
            self.open_dialog(Mode::Decrypt);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(
                egui::RichText::new(format!("🔐 {}", self.config.dialog.app_name))
                    .size(22.0)
                    .color(ui::ACCENT),
            );
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            self.render_wallet_panel(ui);
        });

        self.poll_dialog(ctx);
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
