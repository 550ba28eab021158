use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::CashDrawerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Cash Drawer Counter egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([620.0, 780.0]) // Tall enough for the full denomination table
            .with_min_inner_size([520.0, 620.0])
            .with_title("Cash Drawer Counter")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Cash Drawer Counter",
        options,
        Box::new(|cc| match CashDrawerApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Cash Drawer Counter app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
