//! Drawing capability the battery indicator paints onto.
//!
//! The indicator only ever needs two primitives, so any host that can fill
//! and stroke axis-aligned rectangles can display it. The iced canvas
//! [`Frame`] is the production implementation.

use iced::{
    Color, Rectangle,
    widget::canvas::{Frame, Path, Stroke},
};

pub trait Surface {
    /// Fills `bounds` with a solid colour.
    fn fill_rect(&mut self, bounds: Rectangle, color: Color);

    /// Strokes the outline of `bounds`.
    fn stroke_rect(&mut self, bounds: Rectangle, color: Color, width: f32);
}

impl Surface for Frame {
    fn fill_rect(&mut self, bounds: Rectangle, color: Color) {
        self.fill_rectangle(bounds.position(), bounds.size(), color);
    }

    fn stroke_rect(&mut self, bounds: Rectangle, color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }

        let outline = Path::rectangle(bounds.position(), bounds.size());
        self.stroke(&outline, Stroke::default().with_color(color).with_width(width));
    }
}
