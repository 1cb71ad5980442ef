use cellgauge_core::{
    config::{Config, Orientation},
    indicator::{BatteryIndicator, BatteryStyle},
};
use iced::{Size, Task};
use log::debug;

/// Fixed footprint of the horizontal battery; the vertical one is rotated.
pub(crate) const BATTERY_SIZE: Size = Size {
    width:  250.0,
    height: 100.0,
};

pub struct App {
    pub config:     Config,
    pub step:       u32,
    pub voltage:    f64,
    pub horizontal: BatteryIndicator,
    pub vertical:   BatteryIndicator,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Slider moved to a new position in `0..=segments`.
    StepChanged(u32),
}

impl App {
    pub fn new(config: Config) -> impl FnOnce() -> (Self, Task<Message>) {
        move || (Self::with_config(config), Task::none())
    }

    pub(crate) fn with_config(config: Config) -> Self {
        debug!("demo config: {:?}", config.demo);

        let style = BatteryStyle::from(&config.style);
        let horizontal =
            BatteryIndicator::new(&config.demo.indicator(Orientation::Horizontal)).with_style(style);
        let vertical =
            BatteryIndicator::new(&config.demo.indicator(Orientation::Vertical)).with_style(style);
        let voltage = config.demo.voltage_at_step(0);

        Self {
            config,
            step: 0,
            voltage,
            horizontal,
            vertical,
        }
    }

    /// Upper bound of the slider.
    pub fn max_step(&self) -> u32 {
        self.config.demo.segments
    }

    /// Text shown under each battery.
    pub fn voltage_label(&self) -> String {
        format!("Voltage: {:.2}V", self.voltage)
    }
}
