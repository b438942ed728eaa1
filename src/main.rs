#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    daemon(
        app::ImageToTextApp::build,
        app::ImageToTextApp::handle_update,
        app::ImageToTextApp::render_view,
    )
    .title(app::ImageToTextApp::window_title)
    .subscription(app::ImageToTextApp::handle_subscription)
    .run()
}
