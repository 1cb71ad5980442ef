use iced::{
    Alignment, Element, Length, Size, Theme,
    widget::{
        column, row, slider,
        space::{horizontal as horizontal_space, vertical as vertical_space},
    },
};

use super::state::{App, BATTERY_SIZE, Message};
use crate::views::battery::render_battery;

impl App {
    pub fn title(&self) -> String {
        String::from("Battery Widget Demo")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn view(&self) -> Element<'_, Message> {
        let label = self.voltage_label();

        let batteries = row![
            horizontal_space(),
            render_battery(&self.horizontal, BATTERY_SIZE, label.clone()),
            horizontal_space(),
            render_battery(
                &self.vertical,
                Size::new(BATTERY_SIZE.height, BATTERY_SIZE.width),
                label,
            ),
            horizontal_space(),
        ]
        .align_y(Alignment::Center);

        let control = slider(0..=self.max_step(), self.step, Message::StepChanged).step(1u32);

        column![vertical_space(), batteries, vertical_space(), control]
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
