//! Stepper - a horizontal step progress indicator
//! Built with iced; the host screen configures the widget and lets you walk
//! through its states

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(iced::Size::new(960.0, 360.0))
        .antialiasing(true)
        .run()
}
