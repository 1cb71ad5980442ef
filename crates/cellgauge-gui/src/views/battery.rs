/// Battery view layer - embeds an indicator canvas with its caption
use cellgauge_core::indicator::BatteryIndicator;
use iced::{
    Alignment, Element, Length, Size,
    widget::{canvas, column, text},
};

use crate::app::Message;

/// Render a battery at a fixed `size` with `label` centred underneath
pub fn render_battery(
    indicator: &BatteryIndicator,
    size: Size,
    label: String,
) -> Element<'_, Message> {
    let battery = canvas(indicator)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    column![battery, text(label)]
        .align_x(Alignment::Center)
        .spacing(8)
        .into()
}
