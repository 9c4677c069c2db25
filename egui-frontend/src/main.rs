use eframe::egui;
use log::info;

mod session;
mod store;
mod ui;

use ui::app_state::RecriarApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Espaço Recriar egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]) // Room for sidebar + content
            .with_min_inner_size([900.0, 600.0])
            .with_title("Espaço Recriar")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Espaço Recriar",
        options,
        Box::new(|cc| Ok(Box::new(RecriarApp::new(cc)))),
    )
}
