//! Segmented battery indicator: state, fill math and painting.

use cellgauge_proto::config::{IndicatorConfig, MAX_SEGMENTS, Orientation, StyleConfig};
use iced::{
    Color, Rectangle, Size, Theme,
    mouse::Cursor,
    widget::canvas::{Cache, Geometry, Program},
};
use log::{debug, warn};

use crate::surface::Surface;

pub mod layout;

pub use layout::{BatteryLayout, Cell};

/// Preferred footprint of a horizontal battery; vertical swaps the axes.
pub const SIZE_HINT: Size = Size {
    width:  200.0,
    height: 100.0,
};

/// Static paint settings for a [`BatteryIndicator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStyle {
    pub fill:             Color,
    pub empty:            Color,
    pub border:           Color,
    pub border_width:     f32,
    /// Also stroke every cell, not only the body and tip.
    pub outline_segments: bool,
}

impl Default for BatteryStyle {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}

impl From<&StyleConfig> for BatteryStyle {
    fn from(config: &StyleConfig) -> Self {
        Self {
            fill:             config.fill(),
            empty:            config.empty(),
            border:           config.border(),
            border_width:     config.border_width,
            outline_segments: config.outline_segments,
        }
    }
}

/// Position of `value` inside `[min, max]`, in `[0, 1]`.
///
/// `value` is clamped into the range first. A range that is empty, inverted
/// or not finite yields `0.0`, as does a NaN value, so a broken reading
/// shows an empty battery rather than a misleading full one.
pub fn fill_fraction(value: f64, min: f64, max: f64) -> f64 {
    if !min.is_finite() || !max.is_finite() || max <= min || value.is_nan() {
        return 0.0;
    }

    let value = value.clamp(min, max);
    let span = max - min;

    let fraction = if span.is_finite() {
        (value - min) / span
    } else {
        // `max - min` overflowed; halving every term keeps it representable.
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    };

    fraction.clamp(0.0, 1.0)
}

/// Number of lit cells for `fraction` of a `segments`-cell battery.
///
/// Rounds to the nearest cell, ties upwards (`floor(x + 0.5)`), so a half
/// full five-cell battery lights three cells. The result is always within
/// `[0, segments]`.
pub fn filled_segments(fraction: f64, segments: u32) -> u32 {
    if fraction.is_nan() {
        return 0;
    }

    let total = f64::from(segments);
    (fraction * total + 0.5).floor().clamp(0.0, total) as u32
}

/// A battery-shaped gauge split into equally sized segments.
///
/// Every mutator invalidates the cached geometry and bumps
/// [`revision`](Self::revision), so the next frame repaints.
pub struct BatteryIndicator {
    value:         f64,
    min_value:     f64,
    max_value:     f64,
    segment_count: u32,
    orientation:   Orientation,
    style:         BatteryStyle,
    revision:      u64,
    cache:         Cache,
}

impl std::fmt::Debug for BatteryIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatteryIndicator")
            .field("value", &self.value)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("segment_count", &self.segment_count)
            .field("orientation", &self.orientation)
            .field("style", &self.style)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for BatteryIndicator {
    fn default() -> Self {
        Self::new(&IndicatorConfig::default())
    }
}

impl BatteryIndicator {
    /// Builds an indicator reading `min_voltage`.
    ///
    /// The segment count in `config` is clamped to `1..=MAX_SEGMENTS`.
    pub fn new(config: &IndicatorConfig) -> Self {
        if config.segments == 0 {
            warn!("battery indicator configured without segments, using one");
        } else if config.segments > MAX_SEGMENTS {
            warn!(
                "battery indicator configured with {} segments, using {MAX_SEGMENTS}",
                config.segments
            );
        }

        Self {
            value:         config.min_voltage,
            min_value:     config.min_voltage,
            max_value:     config.max_voltage,
            segment_count: config.segments.clamp(1, MAX_SEGMENTS),
            orientation:   config.orientation,
            style:         BatteryStyle::default(),
            revision:      0,
            cache:         Cache::new(),
        }
    }

    pub fn with_style(mut self, style: BatteryStyle) -> Self {
        self.style = style;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn style(&self) -> &BatteryStyle {
        &self.style
    }

    /// Incremented each time a redraw is scheduled.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stores `value` verbatim; out-of-range readings stay introspectable and
    /// are only clamped when painting.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.invalidate();
    }

    pub fn set_min_value(&mut self, value: f64) {
        self.min_value = value;
        self.invalidate();
    }

    pub fn set_max_value(&mut self, value: f64) {
        self.max_value = value;
        self.invalidate();
    }

    /// Changes the number of cells. Zero and anything above [`MAX_SEGMENTS`]
    /// are rejected: the call is ignored and `false` is returned.
    pub fn set_segment_count(&mut self, segments: u32) -> bool {
        if segments == 0 {
            warn!("ignoring request for a battery without segments");
            return false;
        }

        if segments > MAX_SEGMENTS {
            warn!("ignoring request for {segments} segments, the limit is {MAX_SEGMENTS}");
            return false;
        }

        self.segment_count = segments;
        self.invalidate();
        true
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.invalidate();
    }

    pub fn set_style(&mut self, style: BatteryStyle) {
        self.style = style;
        self.invalidate();
    }

    /// Normalised position of the current value, see [`fill_fraction`].
    pub fn fill_fraction(&self) -> f64 {
        fill_fraction(self.value, self.min_value, self.max_value)
    }

    /// Number of cells currently lit.
    pub fn filled_segments(&self) -> u32 {
        filled_segments(self.fill_fraction(), self.segment_count)
    }

    /// Preferred size for the current orientation.
    pub fn size_hint(&self) -> Size {
        match self.orientation {
            Orientation::Horizontal => SIZE_HINT,
            Orientation::Vertical => Size::new(SIZE_HINT.height, SIZE_HINT.width),
        }
    }

    /// Geometry for a surface of `size`.
    pub fn layout(&self, size: Size) -> BatteryLayout {
        BatteryLayout::compute(
            size,
            self.orientation,
            self.segment_count,
            self.filled_segments(),
            self.style.border_width,
        )
    }

    /// Paints the battery onto `surface`, which is `size` large.
    pub fn render<S: Surface>(&self, surface: &mut S, size: Size) {
        let layout = self.layout(size);
        let style = &self.style;

        for cell in &layout.cells {
            let color = if cell.filled { style.fill } else { style.empty };
            surface.fill_rect(cell.bounds, color);

            if style.outline_segments {
                surface.stroke_rect(cell.bounds, style.border, style.border_width);
            }
        }

        surface.stroke_rect(layout.body, style.border, style.border_width);
        surface.stroke_rect(layout.tip, style.border, style.border_width);
    }

    fn invalidate(&mut self) {
        self.cache.clear();
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<Message> Program<Message> for BatteryIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            debug!(
                "repainting battery: {}/{} segments at {:?}",
                self.filled_segments(),
                self.segment_count,
                bounds.size()
            );
            self.render(frame, bounds.size());
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{DrawOp, RecordingSurface};

    fn indicator(min: f64, max: f64, segments: u32) -> BatteryIndicator {
        BatteryIndicator::new(&IndicatorConfig {
            min_voltage: min,
            max_voltage: max,
            segments,
            orientation: Orientation::Horizontal,
        })
    }

    #[test]
    fn defaults_match_documented_configuration() {
        let battery = BatteryIndicator::default();
        assert_eq!(battery.min_value(), 0.0);
        assert_eq!(battery.max_value(), 100.0);
        assert_eq!(battery.segment_count(), 10);
        assert_eq!(battery.orientation(), Orientation::Horizontal);
        assert_eq!(battery.value(), 0.0);
        assert_eq!(battery.filled_segments(), 0);
    }

    #[test]
    fn half_range_lights_half_the_cells() {
        let mut battery = indicator(0.0, 5.0, 10);
        battery.set_value(2.5);
        assert_eq!(battery.fill_fraction(), 0.5);
        assert_eq!(battery.filled_segments(), 5);
    }

    #[test]
    fn quarter_range_on_eight_cells() {
        let mut battery = indicator(0.0, 12.0, 8);
        battery.set_value(3.0);
        assert_eq!(battery.fill_fraction(), 0.25);
        assert_eq!(battery.filled_segments(), 2);
    }

    #[test]
    fn overrange_value_is_clamped_but_kept() {
        let mut battery = indicator(0.0, 100.0, 10);
        battery.set_value(105.0);
        assert_eq!(battery.value(), 105.0);
        assert_eq!(battery.filled_segments(), 10);
    }

    #[test]
    fn range_endpoints_map_to_empty_and_full() {
        let mut battery = indicator(-3.0, 7.0, 9);
        battery.set_value(-3.0);
        assert_eq!(battery.filled_segments(), 0);
        battery.set_value(7.0);
        assert_eq!(battery.filled_segments(), 9);
    }

    #[test]
    fn ties_round_upwards() {
        assert_eq!(filled_segments(0.5, 5), 3);
        assert_eq!(filled_segments(0.5, 1), 1);
        assert_eq!(filled_segments(0.1, 5), 1);
        assert_eq!(filled_segments(0.09, 5), 0);
    }

    #[test]
    fn fill_count_never_decreases_with_value() {
        for segments in [1, 3, 7, 10, 16] {
            let mut battery = indicator(1.5, 4.2, segments);
            let mut previous = 0;

            for step in 0..=1000 {
                battery.set_value(1.5 + 2.7 * f64::from(step) / 1000.0);
                let filled = battery.filled_segments();
                assert!(filled >= previous, "{segments} segments, step {step}");
                previous = filled;
            }

            assert_eq!(previous, segments);
        }
    }

    #[test]
    fn fill_count_stays_in_bounds_for_any_value() {
        let values = [
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            -1e300,
            1e300,
            0.0,
            -0.0,
        ];

        for value in values {
            let mut battery = indicator(0.0, 10.0, 6);
            battery.set_value(value);
            assert!(battery.filled_segments() <= 6, "{value}");
        }
    }

    #[test]
    fn non_finite_readings_resolve_to_endpoints() {
        let mut battery = indicator(0.0, 10.0, 6);

        battery.set_value(f64::NAN);
        assert_eq!(battery.filled_segments(), 0);
        battery.set_value(f64::INFINITY);
        assert_eq!(battery.filled_segments(), 6);
        battery.set_value(f64::NEG_INFINITY);
        assert_eq!(battery.filled_segments(), 0);
    }

    #[test]
    fn degenerate_range_renders_empty() {
        assert_eq!(fill_fraction(5.0, 5.0, 5.0), 0.0);
        assert_eq!(fill_fraction(5.0, 10.0, 0.0), 0.0);
        assert_eq!(fill_fraction(5.0, f64::NEG_INFINITY, 10.0), 0.0);

        let mut battery = indicator(0.0, 10.0, 4);
        battery.set_value(8.0);
        battery.set_max_value(0.0);
        assert_eq!(battery.filled_segments(), 0);
    }

    #[test]
    fn widest_finite_range_still_reaches_both_ends() {
        assert_eq!(fill_fraction(-f64::MAX, -f64::MAX, f64::MAX), 0.0);
        assert_eq!(fill_fraction(0.0, -f64::MAX, f64::MAX), 0.5);
        assert_eq!(fill_fraction(f64::MAX, -f64::MAX, f64::MAX), 1.0);

        let mut battery = indicator(-1e308, 1e308, 10);
        battery.set_value(-1e308);
        assert_eq!(battery.filled_segments(), 0);
        battery.set_value(0.0);
        assert_eq!(battery.filled_segments(), 5);
        battery.set_value(1e308);
        assert_eq!(battery.filled_segments(), 10);
        battery.set_value(f64::INFINITY);
        assert_eq!(battery.filled_segments(), 10);
    }

    #[test]
    fn zero_segments_are_rejected() {
        let mut battery = indicator(0.0, 10.0, 4);
        let revision = battery.revision();

        assert!(!battery.set_segment_count(0));
        assert_eq!(battery.segment_count(), 4);
        assert_eq!(battery.revision(), revision);

        assert!(battery.set_segment_count(12));
        assert_eq!(battery.segment_count(), 12);
        assert_eq!(battery.revision(), revision + 1);
    }

    #[test]
    fn zero_segments_in_config_are_raised_to_one() {
        let battery = indicator(0.0, 10.0, 0);
        assert_eq!(battery.segment_count(), 1);
    }

    #[test]
    fn oversized_segment_counts_are_rejected() {
        let mut battery = indicator(0.0, 10.0, 4);
        let revision = battery.revision();

        assert!(!battery.set_segment_count(u32::MAX));
        assert!(!battery.set_segment_count(MAX_SEGMENTS + 1));
        assert_eq!(battery.segment_count(), 4);
        assert_eq!(battery.revision(), revision);

        assert!(battery.set_segment_count(MAX_SEGMENTS));
        assert_eq!(battery.segment_count(), MAX_SEGMENTS);
    }

    #[test]
    fn oversized_segments_in_config_are_capped() {
        let mut battery = indicator(0.0, 10.0, u32::MAX);
        assert_eq!(battery.segment_count(), MAX_SEGMENTS);

        battery.set_value(10.0);
        let mut surface = RecordingSurface::new();
        battery.render(&mut surface, Size::new(250.0, 100.0));
        assert_eq!(
            surface.fill_count(battery.style().fill),
            MAX_SEGMENTS as usize
        );
    }

    #[test]
    fn every_mutator_schedules_a_redraw() {
        let mut battery = BatteryIndicator::default();

        battery.set_value(10.0);
        assert_eq!(battery.revision(), 1);
        battery.set_min_value(-5.0);
        assert_eq!(battery.revision(), 2);
        battery.set_max_value(50.0);
        assert_eq!(battery.revision(), 3);
        battery.set_segment_count(4);
        assert_eq!(battery.revision(), 4);
        battery.set_orientation(Orientation::Vertical);
        assert_eq!(battery.revision(), 5);
        battery.set_style(BatteryStyle::default());
        assert_eq!(battery.revision(), 6);
    }

    #[test]
    fn accessors_do_not_schedule_redraws() {
        let battery = BatteryIndicator::default();
        let _ = (
            battery.value(),
            battery.min_value(),
            battery.max_value(),
            battery.segment_count(),
            battery.orientation(),
            battery.filled_segments(),
            battery.size_hint(),
        );
        assert_eq!(battery.revision(), 0);
    }

    #[test]
    fn orientation_changes_layout_not_fill() {
        let mut battery = indicator(0.0, 5.0, 10);
        battery.set_value(3.3);
        let horizontal = battery.filled_segments();
        let wide = battery.layout(Size::new(200.0, 100.0));

        battery.set_orientation(Orientation::Vertical);
        let tall = battery.layout(Size::new(200.0, 100.0));

        assert_eq!(battery.filled_segments(), horizontal);
        assert_eq!(wide.filled_count(), tall.filled_count());
        assert_ne!(wide.body, tall.body);
    }

    #[test]
    fn size_hint_follows_orientation() {
        let mut battery = BatteryIndicator::default();
        assert_eq!(battery.size_hint(), Size::new(200.0, 100.0));
        battery.set_orientation(Orientation::Vertical);
        assert_eq!(battery.size_hint(), Size::new(100.0, 200.0));
    }

    #[test]
    fn render_paints_filled_and_empty_cells() {
        let mut battery = indicator(0.0, 5.0, 10);
        battery.set_value(2.5);

        let mut surface = RecordingSurface::new();
        battery.render(&mut surface, Size::new(250.0, 100.0));

        let style = battery.style();
        assert_eq!(surface.fill_count(style.fill), 5);
        assert_eq!(surface.fill_count(style.empty), 5);
        // ten cell outlines, body and tip
        assert_eq!(surface.stroke_count(), 12);
    }

    #[test]
    fn render_without_cell_outlines_strokes_body_and_tip_only() {
        let style = BatteryStyle {
            outline_segments: false,
            ..BatteryStyle::default()
        };
        let battery = indicator(0.0, 5.0, 10).with_style(style);

        let mut surface = RecordingSurface::new();
        battery.render(&mut surface, Size::new(250.0, 100.0));

        assert_eq!(surface.stroke_count(), 2);
        assert!(surface.ops.iter().all(|op| match op {
            DrawOp::Stroke { color, width, .. } => *color == style.border && *width == 2.0,
            DrawOp::Fill { .. } => true,
        }));
    }

    #[test]
    fn render_is_idempotent() {
        let mut battery = indicator(0.0, 12.0, 8);
        battery.set_value(7.1);
        battery.set_orientation(Orientation::Vertical);

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        battery.render(&mut first, Size::new(100.0, 250.0));
        battery.render(&mut second, Size::new(100.0, 250.0));

        assert_eq!(first, second);
    }

    #[test]
    fn vertical_render_lights_bottom_cells() {
        let mut battery = indicator(0.0, 4.0, 4);
        battery.set_orientation(Orientation::Vertical);
        battery.set_value(1.0);

        let mut surface = RecordingSurface::new();
        battery.render(&mut surface, Size::new(100.0, 250.0));

        let fills: Vec<_> = surface.fills().collect();
        let (lit, _) = fills[0];
        assert_eq!(fills[0].1, battery.style().fill);
        assert!(fills[1..].iter().all(|(bounds, color)| {
            *color == battery.style().empty && bounds.y < lit.y
        }));
    }

    #[test]
    fn style_is_built_from_config() {
        let config = StyleConfig {
            border_width: 3.5,
            outline_segments: false,
            ..StyleConfig::default()
        };
        let style = BatteryStyle::from(&config);

        assert_eq!(style.border_width, 3.5);
        assert!(!style.outline_segments);
        assert_eq!(style.fill, Color::from_rgb8(0, 200, 0));
    }
}
