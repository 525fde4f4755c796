//! Message update handlers

use std::sync::Arc;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle a message from the host screen
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Previous => self.step_by(-1),
            Message::Next => self.step_by(1),
            Message::ToggleMode => {
                let mode = self.stepper.display_mode().toggled();
                self.stepper.set_display_mode(mode);
                self.settings.stepper.display_mode = mode;
            }
            Message::IconsLoaded(icons) => {
                for (identifier, raster) in icons {
                    let raster = Arc::unwrap_or_clone(raster);
                    self.stepper.register_icon(identifier, raster);
                }
            }
        }
        Task::none()
    }

    /// Move the current step, allowing one past the last to mean "all done"
    fn step_by(&mut self, delta: i32) {
        let max = self.stepper.point_count() as i32;
        let index = (self.stepper.current_index() + delta).clamp(0, max);
        self.stepper.set_current_index(index);
        self.settings.stepper.current_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::helpers::build_stepper;
    use crate::features::Settings;
    use crate::ui::primitives::step_indicator::DisplayMode;
    use crate::ui::primitives::step_indicator::layout::IconTint;
    use image::RgbaImage;

    fn app() -> App {
        let settings = Settings::default();
        let stepper = build_stepper(&settings.stepper);
        App { settings, stepper }
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app();
        let _ = app.update(Message::Previous);
        let _ = app.update(Message::Previous);
        assert_eq!(app.stepper.current_index(), 0);

        for _ in 0..10 {
            let _ = app.update(Message::Next);
        }
        assert_eq!(app.stepper.current_index(), 3);
        assert_eq!(app.settings.stepper.current_index, 3);
        assert_eq!(app.title(), "Stepper - Done");
    }

    #[test]
    fn test_toggle_mode_updates_settings() {
        let mut app = app();
        let _ = app.update(Message::ToggleMode);
        assert_eq!(app.stepper.display_mode(), DisplayMode::Icon);
        assert_eq!(app.settings.stepper.display_mode, DisplayMode::Icon);
    }

    #[test]
    fn test_icons_loaded_reach_the_widget() {
        let mut app = app();
        let raster = RgbaImage::from_pixel(3, 3, image::Rgba([0, 0, 0, 255]));
        let _ = app.update(Message::IconsLoaded(vec![(
            "step1".to_string(),
            Arc::new(raster),
        )]));

        assert!(app.stepper.tinted_icon(0, IconTint::Checked).is_some());
        assert!(app.stepper.tinted_icon(1, IconTint::Checked).is_none());
    }

    #[test]
    fn test_title_shows_current_step() {
        let app = app();
        assert_eq!(app.title(), "Stepper - Step 2 of 3");
    }
}
