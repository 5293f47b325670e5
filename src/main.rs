use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_booking::{
    config::Config,
    controllers::BookingFormController,
    services::BookingService,
    ui::BookingWindow,
    AppState,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting movie booking v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    // Build the catalog and hand it to the controller
    let state = AppState::new(config.theatre.clone());
    let controller = BookingFormController::new(BookingService::new(state));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 320.0])
            .with_title(&config.window.title),
        ..Default::default()
    };

    let header = config.window.title.clone();
    eframe::run_native(
        &config.window.title,
        native_options,
        Box::new(move |cc| Box::new(BookingWindow::new(cc, header, controller))),
    )
    .map_err(|e| anyhow::anyhow!("Booking window failed: {e}"))?;

    info!("Window closed, exiting");
    Ok(())
}
