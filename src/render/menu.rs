use raylib::prelude::*;

use crate::constants::TOP_BAR_HEIGHT;
use crate::dropdown::Dropdown;

const BUTTON: Rectangle = Rectangle {
    x: 16.0,
    y: 8.0,
    width: 140.0,
    height: TOP_BAR_HEIGHT - 16.0,
};
const ITEM_HEIGHT: f32 = 32.0;
const MENU_WIDTH: f32 = 220.0;

/// "Services" dropdown in the top bar listing every slide label.
#[derive(Debug)]
pub struct NavMenu {
    labels: Vec<String>,
}

impl NavMenu {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn button_rect(&self) -> Rectangle {
        BUTTON
    }

    pub fn menu_rect(&self) -> Rectangle {
        Rectangle::new(
            BUTTON.x,
            BUTTON.y + BUTTON.height + 4.0,
            MENU_WIDTH,
            ITEM_HEIGHT * self.labels.len() as f32,
        )
    }

    /// Menu entry under `point`.
    pub fn item_at(&self, point: Vector2) -> Option<usize> {
        let menu = self.menu_rect();
        if !menu.check_collision_point_rec(point) {
            return None;
        }
        let index = ((point.y - menu.y) / ITEM_HEIGHT) as usize;
        (index < self.labels.len()).then_some(index)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, dropdown: &Dropdown, active: Option<usize>) {
        d.draw_rectangle_rec(BUTTON, Color::new(88, 28, 135, 255));
        d.draw_text(
            "Services",
            (BUTTON.x + 12.0) as i32,
            (BUTTON.y + 8.0) as i32,
            18,
            Color::WHITE,
        );

        // Caret, pointing down when closed
        let cx = BUTTON.x + BUTTON.width - 20.0;
        let cy = BUTTON.y + BUTTON.height * 0.5;
        let flip = if dropdown.icon_rotation() == 0.0 { 1.0 } else { -1.0 };
        let left = Vector2::new(cx - 6.0, cy - 3.0 * flip);
        let right = Vector2::new(cx + 6.0, cy - 3.0 * flip);
        let tip = Vector2::new(cx, cy + 3.0 * flip);
        // raylib wants counter-clockwise vertices
        if flip > 0.0 {
            d.draw_triangle(left, tip, right, Color::WHITE);
        } else {
            d.draw_triangle(left, right, tip, Color::WHITE);
        }

        if dropdown.is_menu_hidden() {
            return;
        }

        let menu = self.menu_rect();
        d.draw_rectangle_rec(menu, Color::WHITE);
        for (index, label) in self.labels.iter().enumerate() {
            let y = menu.y + index as f32 * ITEM_HEIGHT;
            if active == Some(index) {
                d.draw_rectangle_rec(
                    Rectangle::new(menu.x, y, menu.width, ITEM_HEIGHT),
                    Color::new(243, 232, 255, 255),
                );
            }
            d.draw_text(label, (menu.x + 12.0) as i32, (y + 8.0) as i32, 18, Color::DARKGRAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_at_maps_rows_to_labels() {
        let menu = NavMenu::new(vec!["A".into(), "B".into(), "C".into()]);
        let rect = menu.menu_rect();

        let second_row = Vector2::new(rect.x + 10.0, rect.y + ITEM_HEIGHT * 1.5);
        assert_eq!(menu.item_at(second_row), Some(1));
        assert_eq!(menu.item_at(Vector2::new(rect.x + 10.0, rect.y - 1.0)), None);
        assert_eq!(menu.item_at(Vector2::new(rect.x + MENU_WIDTH + 5.0, rect.y + 5.0)), None);
    }
}
