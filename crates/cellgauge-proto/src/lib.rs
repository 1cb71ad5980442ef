//! Configuration contract shared by the cellgauge crates.
//!
//! Everything in here is plain data: it deserializes from TOML, validates
//! itself and converts into iced colours, but never renders anything.

pub mod config;
