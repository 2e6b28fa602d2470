//! Rendering seam (impure shell).
//!
//! The overlay never touches a graphics API. It emits draw calls into a
//! [`RenderSink`] supplied by the host; `Vec<DrawCommand>` is a ready-made
//! sink that records them.

pub mod arrow_pages;
pub mod highlighter;
pub mod overlay;

pub use arrow_pages::ArrowPages;
pub use highlighter::MuseumItemHighlighter;
pub use overlay::draw_cheapest_items;

/// Screen position in GUI pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal position, growing rightwards.
    pub x: i32,
    /// Vertical position, growing downwards.
    pub y: i32,
}

impl Point {
    /// Point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle; edges are inclusive for hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// Rectangle with its top-left corner at `(x, y)`.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `point` lies inside or on an edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Placement of the open container on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// Screen x of the container's left edge.
    pub gui_left: i32,
    /// Screen y of the container's top edge.
    pub gui_top: i32,
    /// Width of the container background.
    pub x_size: i32,
}

impl ScreenGeometry {
    /// Top-left corner of the container.
    pub fn origin(&self) -> Point {
        Point::new(self.gui_left, self.gui_top)
    }
}

/// A texture region drawn into a screen rectangle. UVs are normalised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturedRect {
    /// Screen x of the left edge.
    pub x: f32,
    /// Screen y of the top edge.
    pub y: f32,
    /// Drawn width.
    pub width: f32,
    /// Drawn height.
    pub height: f32,
    /// Left texture coordinate.
    pub u_min: f32,
    /// Right texture coordinate.
    pub u_max: f32,
    /// Top texture coordinate.
    pub v_min: f32,
    /// Bottom texture coordinate.
    pub v_max: f32,
}

/// Output side of the overlay.
pub trait RenderSink {
    /// Bind `texture` and draw the given region of it.
    fn draw_texture(&mut self, texture: &str, rect: TexturedRect);

    /// Draw `left` at `x` and `right` flush with `x + width`.
    fn draw_aligned_string(&mut self, left: &str, right: &str, x: f32, y: f32, width: i32);

    /// Draw shadowed `text` at `(x, y)` in an ARGB colour.
    fn draw_string_with_shadow(&mut self, text: &str, x: f32, y: f32, color: u32);

    /// Fill `rect` with an ARGB colour.
    fn draw_rect(&mut self, rect: Rect, color: u32);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`RenderSink::draw_texture`].
    Texture {
        /// Texture resource name.
        texture: String,
        /// Target and source region.
        rect: TexturedRect,
    },
    /// [`RenderSink::draw_aligned_string`].
    AlignedString {
        /// Left-aligned text.
        left: String,
        /// Right-aligned text.
        right: String,
        /// Left edge.
        x: f32,
        /// Baseline row.
        y: f32,
        /// Distance between the two alignment edges.
        width: i32,
    },
    /// [`RenderSink::draw_string_with_shadow`].
    Text {
        /// Drawn text.
        text: String,
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// ARGB colour.
        color: u32,
    },
    /// [`RenderSink::draw_rect`].
    Fill {
        /// Filled area.
        rect: Rect,
        /// ARGB colour.
        color: u32,
    },
}

impl RenderSink for Vec<DrawCommand> {
    fn draw_texture(&mut self, texture: &str, rect: TexturedRect) {
        self.push(DrawCommand::Texture {
            texture: texture.to_string(),
            rect,
        });
    }

    fn draw_aligned_string(&mut self, left: &str, right: &str, x: f32, y: f32, width: i32) {
        self.push(DrawCommand::AlignedString {
            left: left.to_string(),
            right: right.to_string(),
            x,
            y,
            width,
        });
    }

    fn draw_string_with_shadow(&mut self, text: &str, x: f32, y: f32, color: u32) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: u32) {
        self.push(DrawCommand::Fill { rect, color });
    }
}

/// Clickable page switcher drawn next to a list.
pub trait PageControl {
    /// New page index for a click at `click`, or `None` if the click missed
    /// or would leave `[0, total)`.
    fn on_click(&self, origin: Point, click: Point, current: usize, total: usize) -> Option<usize>;

    /// Draw the control for page `current` of `total`.
    fn draw(&self, origin: Point, current: usize, total: usize, sink: &mut dyn RenderSink);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let rect = Rect::new(10, 10, 7, 11);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(17, 21)));
        assert!(!rect.contains(Point::new(18, 21)));
        assert!(!rect.contains(Point::new(9, 15)));
    }

    #[test]
    fn vec_sink_records_commands_in_order() {
        let mut sink: Vec<DrawCommand> = Vec::new();
        sink.draw_string_with_shadow("hi", 1.0, 2.0, 0);
        sink.draw_rect(Rect::new(0, 0, 16, 16), 0xFF00FF00);

        assert_eq!(sink.len(), 2);
        assert!(matches!(&sink[0], DrawCommand::Text { text, .. } if text == "hi"));
        assert!(matches!(sink[1], DrawCommand::Fill { color: 0xFF00FF00, .. }));
    }
}
