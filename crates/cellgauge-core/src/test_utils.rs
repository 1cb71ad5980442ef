use iced::{Color, Rectangle};

use crate::surface::Surface;

/// One primitive recorded by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Fill {
        bounds: Rectangle,
        color:  Color,
    },
    Stroke {
        bounds: Rectangle,
        color:  Color,
        width:  f32,
    },
}

/// Surface that remembers every primitive instead of rasterising it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill operations in paint order.
    pub fn fills(&self) -> impl Iterator<Item = (Rectangle, Color)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Fill { bounds, color } => Some((bounds, color)),
            DrawOp::Stroke { .. } => None,
        })
    }

    /// Number of fills painted with `color`.
    pub fn fill_count(&self, color: Color) -> usize {
        self.fills().filter(|(_, fill)| *fill == color).count()
    }

    /// Number of stroke operations.
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, bounds: Rectangle, color: Color) {
        self.ops.push(DrawOp::Fill { bounds, color });
    }

    fn stroke_rect(&mut self, bounds: Rectangle, color: Color, width: f32) {
        self.ops.push(DrawOp::Stroke {
            bounds,
            color,
            width,
        });
    }
}
