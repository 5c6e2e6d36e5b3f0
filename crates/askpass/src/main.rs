//! Askpass: desktop wallet shell around the passphrase dialog

use eframe::egui;

mod app;
mod passphrase_window;
mod ui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match askpass_dialog_adapters::config_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default config");
            askpass_dialog_adapters::AskpassConfig::default()
        }
    };

    tracing::info!(app = %config.dialog.app_name, "Starting Askpass");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.dialog.app_name.clone())
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Askpass",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, config)?))),
    )
}
