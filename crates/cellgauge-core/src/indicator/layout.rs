//! Battery geometry.
//!
//! Everything is computed in "axis space" first: `long` runs in the fill
//! direction and `short` across it. Only the final rectangles are mapped back
//! to screen coordinates, which keeps the horizontal and vertical variants
//! in a single code path.

use cellgauge_proto::config::Orientation;
use iced::{Rectangle, Size};

/// Share of the long axis reserved for the terminal tip.
pub const TIP_LENGTH_RATIO: f32 = 0.05;
/// Tip breadth relative to the body's short axis.
pub const TIP_BREADTH_RATIO: f32 = 0.6;
/// Inner margin between the body outline and the cells.
pub const CELL_PADDING: f32 = 4.0;
/// Gap between neighbouring cells, as a share of the cell pitch.
pub const CELL_GAP_RATIO: f32 = 0.12;

/// One segment of the battery body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub bounds: Rectangle,
    pub filled: bool,
}

/// Resolved rectangles for a single paint.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryLayout {
    pub body:  Rectangle,
    pub tip:   Rectangle,
    /// Cells in fill order: the first cell is the one filled first.
    pub cells: Vec<Cell>,
}

impl BatteryLayout {
    /// Lays out a battery of `segments` cells, `filled` of them lit, inside
    /// a surface of `size`.
    ///
    /// Never fails: negative extents collapse to zero so tiny surfaces yield
    /// slivers instead of inverted rectangles.
    pub fn compute(
        size: Size,
        orientation: Orientation,
        segments: u32,
        filled: u32,
        border_width: f32,
    ) -> Self {
        let (long, short) = match orientation {
            Orientation::Horizontal => (size.width, size.height),
            Orientation::Vertical => (size.height, size.width),
        };
        let long = non_negative(long);
        let short = non_negative(short);
        let border = non_negative(border_width);
        let inset = border / 2.0;

        let usable_long = non_negative(long - border);
        let usable_short = non_negative(short - border);

        let tip_length = (long * TIP_LENGTH_RATIO).min(usable_long);
        let tip_breadth = usable_short * TIP_BREADTH_RATIO;
        let body_length = non_negative(usable_long - tip_length);

        let (body, tip) = match orientation {
            Orientation::Horizontal => (
                Rectangle {
                    x:      inset,
                    y:      inset,
                    width:  body_length,
                    height: usable_short,
                },
                Rectangle {
                    x:      inset + body_length,
                    y:      (short - tip_breadth) / 2.0,
                    width:  tip_length,
                    height: tip_breadth,
                },
            ),
            Orientation::Vertical => (
                Rectangle {
                    x:      inset,
                    y:      inset + tip_length,
                    width:  usable_short,
                    height: body_length,
                },
                Rectangle {
                    x:      (short - tip_breadth) / 2.0,
                    y:      inset,
                    width:  tip_breadth,
                    height: tip_length,
                },
            ),
        };

        let cells = layout_cells(body, orientation, segments, filled);

        Self { body, tip, cells }
    }

    /// Number of lit cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled).count()
    }
}

fn layout_cells(body: Rectangle, orientation: Orientation, segments: u32, filled: u32) -> Vec<Cell> {
    if segments == 0 {
        return Vec::new();
    }

    let (body_long, body_short) = match orientation {
        Orientation::Horizontal => (body.width, body.height),
        Orientation::Vertical => (body.height, body.width),
    };

    let padding = CELL_PADDING.min(body_short / 4.0).min(body_long / 4.0);
    let inner_long = non_negative(body_long - 2.0 * padding);
    let inner_short = non_negative(body_short - 2.0 * padding);

    // n cells plus (n - 1) gaps span the inner length exactly:
    // n * pitch - gap = inner_long, with gap = ratio * pitch.
    let count = segments as f32;
    let pitch = inner_long / (count - CELL_GAP_RATIO);
    let cell_length = pitch * (1.0 - CELL_GAP_RATIO);

    (0..segments)
        .map(|index| {
            let offset = index as f32 * pitch;
            let bounds = match orientation {
                Orientation::Horizontal => Rectangle {
                    x:      body.x + padding + offset,
                    y:      body.y + padding,
                    width:  cell_length,
                    height: inner_short,
                },
                Orientation::Vertical => Rectangle {
                    x:      body.x + padding,
                    y:      body.y + body.height - padding - offset - cell_length,
                    width:  inner_short,
                    height: cell_length,
                },
            };

            Cell {
                bounds,
                filled: index < filled,
            }
        })
        .collect()
}

// `f32::max` discards NaN, so this also scrubs NaN extents.
fn non_negative(value: f32) -> f32 {
    value.max(0.0)
}
