//! Application view rendering

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::{App, Message};
use crate::ui::primitives::step_indicator;
use crate::ui::theme;

impl App {
    /// Build the host screen
    pub fn view(&self) -> Element<'_, Message> {
        let indicator = container(step_indicator::view(
            &self.stepper,
            self.settings.stepper.height,
        ))
        .padding(24)
        .width(Fill)
        .style(theme::stepper_card);

        let at_start = self.stepper.current_index() <= 0;
        let at_end = self.stepper.current_index() >= self.stepper.point_count() as i32;

        let controls = row![
            button(text("Back"))
                .padding([8, 20])
                .style(theme::secondary_button)
                .on_press_maybe((!at_start).then_some(Message::Previous)),
            button(text("Next"))
                .padding([8, 20])
                .style(theme::primary_button)
                .on_press_maybe((!at_end).then_some(Message::Next)),
            Space::new().width(Fill),
            button(text(format!("Mode: {}", self.stepper.display_mode())))
                .padding([8, 20])
                .style(theme::secondary_button)
                .on_press(Message::ToggleMode),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        container(
            column![indicator, controls]
                .spacing(20)
                .max_width(900),
        )
        .padding(32)
        .center_x(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
    }
}
