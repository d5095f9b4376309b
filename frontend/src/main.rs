use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::PocketLedgerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Pocket Ledger egui application");

    // Phone-ish portrait window; the swipe thresholds scale with width
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([320.0, 560.0])
            .with_title("Pocket Ledger")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Pocket Ledger",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match PocketLedgerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Pocket Ledger app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
