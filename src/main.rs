// Rust Countdown Application
// Main entry point

use anyhow::anyhow;
use rust_countdown::ui_egui::CountdownApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Countdown Application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(580.0, 340.0))
            .with_min_inner_size(egui::vec2(480.0, 260.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Countdown",
        options,
        Box::new(|cc| Ok(Box::new(CountdownApp::new(cc)))),
    )
    .map_err(|err| anyhow!("failed to launch countdown window: {err}"))
}
