use iced::Task;
use log::debug;

use super::state::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StepChanged(step) => {
                let step = step.min(self.max_step());
                let voltage = self.config.demo.voltage_at_step(step);
                debug!("slider at {step}, voltage {voltage:.2}V");

                self.step = step;
                self.voltage = voltage;
                self.horizontal.set_value(voltage);
                self.vertical.set_value(voltage);

                Task::none()
            }
        }
    }
}
