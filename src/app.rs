//! Main application module

pub mod helpers;
mod message;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::ui::primitives::StepIndicator;
pub use message::Message;

/// Host screen state
pub struct App {
    pub settings: Settings,
    pub stepper: StepIndicator,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let stepper = helpers::build_stepper(&settings.stepper);

        let load_icons = Task::perform(
            helpers::load_icons(settings.stepper.clone()),
            Message::IconsLoaded,
        );

        let app = Self { settings, stepper };

        (app, load_icons)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing the current step
    pub fn title(&self) -> String {
        let total = self.stepper.point_count();
        let current = self.stepper.current_index();
        if current >= total as i32 {
            "Stepper - Done".to_string()
        } else {
            format!("Stepper - Step {} of {}", current.max(0) + 1, total)
        }
    }
}
