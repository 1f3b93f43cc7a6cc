use eframe::egui;
use log::{error, info};

mod backend;
mod config;
mod ui;

use config::AgendaConfig;
use ui::AgendaApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Agenda de Ministraciones egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 860.0])
            .with_min_inner_size([760.0, 640.0])
            .with_title("Agenda de Ministraciones")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Agenda de Ministraciones",
        options,
        Box::new(|cc| {
            // Loaders for the remote logo image
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let today = chrono::Local::now().date_naive();
            match AgendaApp::new(AgendaConfig::default(), today) {
                Ok(app) => {
                    info!("Agenda session ready for {}", today);
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize agenda: {}", e);
                    Err(format!("Failed to initialize agenda: {}", e).into())
                }
            }
        }),
    )
}
