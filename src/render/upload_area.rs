use raylib::prelude::*;

use crate::constants::{BANNER_DURATION, TOP_BAR_HEIGHT};
use crate::upload::{Highlight, UploadField};

const AREA_WIDTH: f32 = 280.0;

/// Drop target in the top bar, anchored to the right edge of the window.
pub fn area_rect(screen_width: f32) -> Rectangle {
    Rectangle::new(
        screen_width - AREA_WIDTH - 16.0,
        6.0,
        AREA_WIDTH,
        TOP_BAR_HEIGHT - 12.0,
    )
}

pub fn draw(
    d: &mut RaylibDrawHandle,
    field: &UploadField,
    thumbnail: Option<&Texture2D>,
    bounds: Rectangle,
) {
    let (fill, border) = match field.highlight() {
        Highlight::None => (Color::WHITE, Color::LIGHTGRAY),
        Highlight::DragOver => (Color::new(250, 245, 255, 255), Color::new(192, 132, 252, 255)),
        Highlight::Invalid => (Color::WHITE, Color::new(248, 113, 113, 255)),
    };
    d.draw_rectangle_rec(bounds, fill);
    d.draw_rectangle_lines_ex(bounds, 2.0, border);

    let text_y = (bounds.y + bounds.height * 0.5 - 8.0) as i32;
    match field.preview() {
        None => d.draw_text(
            "Drop an image here",
            (bounds.x + 12.0) as i32,
            text_y,
            16,
            Color::GRAY,
        ),
        Some(file) => {
            let mut text_x = bounds.x + 12.0;
            if let Some(texture) = thumbnail {
                let side = bounds.height - 8.0;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    Rectangle::new(bounds.x + 4.0, bounds.y + 4.0, side, side),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
                text_x += side;
            }
            d.draw_text(&file.name, text_x as i32, text_y, 16, Color::DARKGRAY);
        }
    }
}

/// Transient message shown under the top bar.
#[derive(Debug, Default)]
pub struct Banner {
    text: String,
    remaining: f32,
}

impl Banner {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.remaining = BANNER_DURATION;
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32) {
        if !self.is_visible() {
            return;
        }
        let bounds = Rectangle::new(0.0, TOP_BAR_HEIGHT, screen_width, 32.0);
        d.draw_rectangle_rec(bounds, Color::new(30, 41, 59, 230));
        d.draw_text(&self.text, 16, (bounds.y + 8.0) as i32, 16, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_expires() {
        let mut banner = Banner::default();
        assert!(!banner.is_visible());

        banner.show("File size must be less than 5MB");
        assert!(banner.is_visible());
        assert_eq!(banner.text(), "File size must be less than 5MB");

        banner.update(BANNER_DURATION + 0.1);
        assert!(!banner.is_visible());
    }

    #[test]
    fn area_hugs_right_edge() {
        let rect = area_rect(960.0);
        assert_eq!(rect.x + rect.width, 944.0);
    }
}
