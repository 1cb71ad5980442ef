use hex_color::HexColor;
use iced::Color;
use serde::Deserialize;

/// Colours and stroke settings for the battery indicator.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_fill_color")]
    pub fill_color:       HexColor,
    #[serde(default = "default_empty_color")]
    pub empty_color:      HexColor,
    #[serde(default = "default_border_color")]
    pub border_color:     HexColor,
    #[serde(default = "default_border_width")]
    pub border_width:     f32,
    #[serde(default = "default_outline_segments")]
    pub outline_segments: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill_color:       default_fill_color(),
            empty_color:      default_empty_color(),
            border_color:     default_border_color(),
            border_width:     default_border_width(),
            outline_segments: default_outline_segments(),
        }
    }
}

fn default_fill_color() -> HexColor {
    HexColor::rgb(0, 200, 0)
}

fn default_empty_color() -> HexColor {
    HexColor::rgb(220, 220, 220)
}

fn default_border_color() -> HexColor {
    HexColor::rgb(0, 0, 0)
}

fn default_border_width() -> f32 {
    2.0
}

fn default_outline_segments() -> bool {
    true
}

fn to_color(color: HexColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

impl StyleConfig {
    /// Colour of filled segments.
    #[must_use]
    pub fn fill(&self) -> Color {
        to_color(self.fill_color)
    }

    /// Colour of empty segments.
    #[must_use]
    pub fn empty(&self) -> Color {
        to_color(self.empty_color)
    }

    /// Colour of the body, tip and segment outlines.
    #[must_use]
    pub fn border(&self) -> Color {
        to_color(self.border_color)
    }
}
