//! Left/right arrow page switcher.

use super::{PageControl, Point, Rect, RenderSink};

/// Horizontal distance from the left button to the right button.
pub const BUTTON_POSITION_RIGHT_OFFSET_X: i32 = 37;
/// Clickable width of one arrow.
pub const BUTTON_WIDTH: i32 = 7;
/// Clickable height of one arrow.
pub const BUTTON_HEIGHT: i32 = 11;
/// Page label x relative to the left button.
pub const PAGE_STRING_OFFSET_X: i32 = 22;
/// Page label y relative to the left button.
pub const PAGE_STRING_OFFSET_Y: i32 = 6;

const ENABLED_COLOR: u32 = 0xFFFF_FFFF;
const DISABLED_COLOR: u32 = 0xFF55_5555;

/// Arrow buttons anchored at `top_left` relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowPages {
    /// Left button's corner, relative to the container origin.
    pub top_left: Point,
}

impl ArrowPages {
    /// Arrows with the left button at `top_left`.
    pub const fn new(top_left: Point) -> Self {
        Self { top_left }
    }

    fn left_button(&self, origin: Point) -> Rect {
        let anchor = origin.offset(self.top_left.x, self.top_left.y);
        Rect::new(anchor.x, anchor.y, BUTTON_WIDTH, BUTTON_HEIGHT)
    }

    fn right_button(&self, origin: Point) -> Rect {
        let left = self.left_button(origin);
        Rect::new(
            left.x + BUTTON_POSITION_RIGHT_OFFSET_X,
            left.y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }
}

impl PageControl for ArrowPages {
    fn on_click(&self, origin: Point, click: Point, current: usize, total: usize) -> Option<usize> {
        if self.left_button(origin).contains(click) && current > 0 {
            return Some(current - 1);
        }
        if self.right_button(origin).contains(click) && current + 1 < total {
            return Some(current + 1);
        }
        None
    }

    fn draw(&self, origin: Point, current: usize, total: usize, sink: &mut dyn RenderSink) {
        let left = self.left_button(origin);
        let right = self.right_button(origin);

        let left_color = if current > 0 { ENABLED_COLOR } else { DISABLED_COLOR };
        let right_color = if current + 1 < total {
            ENABLED_COLOR
        } else {
            DISABLED_COLOR
        };
        sink.draw_string_with_shadow("<", left.x as f32, left.y as f32, left_color);
        sink.draw_string_with_shadow(">", right.x as f32, right.y as f32, right_color);

        let label = format!("{}/{}", (current + 1).min(total.max(1)), total.max(1));
        sink.draw_string_with_shadow(
            &label,
            (left.x + PAGE_STRING_OFFSET_X) as f32,
            (left.y + PAGE_STRING_OFFSET_Y) as f32,
            ENABLED_COLOR,
        );
    }
}
