//! Cheapest-undonated-item panel drawn beside the museum chest.

use super::{PageControl, RenderSink, ScreenGeometry, TexturedRect};
use crate::model::{ItemValue, MuseumItem};
use crate::state::{DisplayRow, DonationTracker};

/// Panel background texture.
pub const BACKGROUND_TEXTURE: &str = "notenoughupdates:dungeon_chest_worth.png";
/// Panel width in GUI pixels.
pub const BACKGROUND_WIDTH: f32 = 180.0;
/// Panel height in GUI pixels.
pub const BACKGROUND_HEIGHT: f32 = 101.0;
const TEXTURE_SIZE: f32 = 256.0;

/// Banner shown in the advisory row until every category's last page was seen.
pub const UNVISITED_PAGES_WARNING: &str = "§cVisit all pages for accurate info!";

/// Page control anchor relative to the container origin.
pub const PAGE_CONTROL_TOP_LEFT: (i32, i32) = (237, 110);

const ROW_X: i32 = 187;
const ROW_Y: i32 = 5;
const ROW_HEIGHT: i32 = 10;
const ROW_WIDTH: i32 = 160;
const BANNER_X: i32 = 185;
const BANNER_Y: i32 = 85;

/// Left and right text of an item row.
pub fn format_row(item: &MuseumItem) -> (String, String) {
    let left = format!("§r§9{}", item.name);
    let right = match item.value {
        ItemValue::Known(_) => format!("§b{}", item.value),
        ItemValue::Unknown => "§cUnknown".to_string(),
    };
    (left, right)
}

/// Draw background, rows and page control.
pub fn draw_cheapest_items(
    tracker: &DonationTracker,
    screen: ScreenGeometry,
    control: &dyn PageControl,
    sink: &mut dyn RenderSink,
) {
    draw_background(screen, sink);
    draw_lines(tracker, screen, sink);
    control.draw(
        screen.origin(),
        tracker.current_page(),
        tracker.total_pages(),
        sink,
    );
}

fn draw_background(screen: ScreenGeometry, sink: &mut dyn RenderSink) {
    sink.draw_texture(
        BACKGROUND_TEXTURE,
        TexturedRect {
            x: (screen.gui_left + screen.x_size + 4) as f32,
            y: screen.gui_top as f32,
            width: BACKGROUND_WIDTH,
            height: BACKGROUND_HEIGHT,
            u_min: 0.0,
            u_max: BACKGROUND_WIDTH / TEXTURE_SIZE,
            v_min: 0.0,
            v_max: BACKGROUND_HEIGHT / TEXTURE_SIZE,
        },
    );
}

fn draw_lines(tracker: &DonationTracker, screen: ScreenGeometry, sink: &mut dyn RenderSink) {
    for (index, row) in tracker.display_rows().into_iter().enumerate() {
        match row {
            DisplayRow::UnvisitedPagesWarning => sink.draw_string_with_shadow(
                UNVISITED_PAGES_WARNING,
                (screen.gui_left + BANNER_X) as f32,
                (screen.gui_top + BANNER_Y) as f32,
                0,
            ),
            DisplayRow::Item(item) => {
                let (left, right) = format_row(item);
                sink.draw_aligned_string(
                    &left,
                    &right,
                    (screen.gui_left + ROW_X) as f32,
                    (screen.gui_top + ROW_Y + index as i32 * ROW_HEIGHT) as f32,
                    ROW_WIDTH,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_value_row_uses_short_format() {
        let item = MuseumItem::new("Hyperion", ItemValue::Known(1_200_000_000.0), 0);
        let (left, right) = format_row(&item);
        assert_eq!(left, "§r§9Hyperion");
        assert_eq!(right, "§b1.2b");
    }

    #[test]
    fn unknown_value_row_is_red() {
        let item = MuseumItem::new("Mystery", ItemValue::Unknown, 0);
        assert_eq!(format_row(&item).1, "§cUnknown");
    }
}
