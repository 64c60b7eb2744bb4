//! Ask - an animated search pill that expands into a suggestion panel
//! Built with iced; the widget state machine lives in `features::ask`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use features::{HostHooks, SearchHooks};

fn main() -> iced::Result {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = features::Settings::load();
    let hooks: Arc<dyn SearchHooks> =
        Arc::new(HostHooks::new().with_on_click(|| tracing::info!("Ask widget clicked!")));

    iced::application(
        move || app::App::new(settings.clone(), Arc::clone(&hooks)),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window(iced::window::Settings {
        size: app::WINDOW_SIZE,
        // Close requests go through the app so the widget is torn down first
        exit_on_close_request: false,
        ..Default::default()
    })
    .default_font(ui::theme::FONT)
    .antialiasing(true)
    .run()
}
