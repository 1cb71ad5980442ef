mod state;
mod update;
mod view;

pub use state::{App, Message};
