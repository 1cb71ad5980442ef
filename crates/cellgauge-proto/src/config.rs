use serde::Deserialize;

mod style;
mod validation;

pub use style::StyleConfig;
pub use validation::ConfigValidationError;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/cellgauge/config.toml";

/// Upper bound on the number of cells a battery may be split into.
pub const MAX_SEGMENTS: u32 = 1024;

/// Axis along which the battery body is laid out and filled.
#[derive(Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Fills left to right, tip on the right.
    #[default]
    Horizontal,
    /// Fills bottom to top, tip on top.
    Vertical,
}

/// Construction-time settings for a single battery indicator.
///
/// Not read from the config file; the demo derives one per battery from
/// [`DemoConfig::indicator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorConfig {
    pub min_voltage: f64,
    pub max_voltage: f64,
    pub segments: u32,
    pub orientation: Orientation,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            min_voltage: 0.0,
            max_voltage: 100.0,
            segments: default_segments(),
            orientation: Orientation::default(),
        }
    }
}

fn default_segments() -> u32 {
    10
}

/// Settings for the demo window: shared range and segment count for both
/// indicators, and the slider resolution derived from them.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_demo_min_voltage")]
    pub min_voltage: f64,
    #[serde(default = "default_demo_max_voltage")]
    pub max_voltage: f64,
    #[serde(default = "default_segments")]
    pub segments: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_voltage: default_demo_min_voltage(),
            max_voltage: default_demo_max_voltage(),
            segments: default_segments(),
        }
    }
}

fn default_demo_min_voltage() -> f64 {
    0.0
}

fn default_demo_max_voltage() -> f64 {
    5.0
}

impl DemoConfig {
    /// Indicator settings for one of the demo batteries.
    #[must_use]
    pub fn indicator(&self, orientation: Orientation) -> IndicatorConfig {
        IndicatorConfig {
            min_voltage: self.min_voltage,
            max_voltage: self.max_voltage,
            segments: self.segments,
            orientation,
        }
    }

    /// Voltage represented by slider position `step`, where the slider runs
    /// over `0..=segments` and every step is one segment wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellgauge_proto::config::DemoConfig;
    ///
    /// let demo = DemoConfig::default();
    /// assert_eq!(demo.voltage_at_step(5), 2.5);
    /// ```
    #[must_use]
    pub fn voltage_at_step(&self, step: u32) -> f64 {
        if self.segments == 0 {
            return self.min_voltage;
        }

        let step = step.min(self.segments);
        let width = (self.max_voltage - self.min_voltage) / f64::from(self.segments);

        self.min_voltage + f64::from(step) * width
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            demo: DemoConfig::default(),
            style: StyleConfig::default(),
        }
    }
}
