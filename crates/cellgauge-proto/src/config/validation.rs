use masterror::Error;

use super::{Config, MAX_SEGMENTS};

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// The demo asks for a battery without segments.
    #[error("segment count must be at least 1")]
    ZeroSegments,

    /// The demo asks for more cells than a battery can hold.
    #[error("segment count {count} exceeds the maximum of {max}")]
    TooManySegments { count: u32, max: u32 },

    /// The voltage range is empty, inverted or not finite.
    #[error("voltage range is invalid: min {min} must be finite and below max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// The border stroke width is negative or not finite.
    #[error("border width {width} must be a finite, non-negative number")]
    InvalidBorderWidth { width: f32 },
}

impl Config {
    /// Validates the configuration before it is handed to the widgets.
    ///
    /// The indicator itself tolerates all of these cases, so this only
    /// catches values that are almost certainly typos in the config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] if the demo range is not a proper
    /// interval, if the segment count is zero or above [`MAX_SEGMENTS`], or
    /// if the border width is unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellgauge_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.demo.segments == 0 {
            return Err(ConfigValidationError::ZeroSegments);
        }

        if self.demo.segments > MAX_SEGMENTS {
            return Err(ConfigValidationError::TooManySegments {
                count: self.demo.segments,
                max:   MAX_SEGMENTS,
            });
        }

        let (min, max) = (self.demo.min_voltage, self.demo.max_voltage);
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigValidationError::InvalidRange { min, max });
        }

        let width = self.style.border_width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigValidationError::InvalidBorderWidth { width });
        }

        Ok(())
    }
}
