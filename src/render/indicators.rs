use raylib::prelude::*;

use crate::constants::*;
use crate::surface::IndicatorHost;

/// Row of dots along the bottom of the panel area.
#[derive(Debug, Default)]
pub struct IndicatorStrip {
    highlighted: Vec<bool>,
}

impl IndicatorStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.highlighted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlighted.is_empty()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted.iter().position(|h| *h)
    }

    fn dot_center(&self, bounds: Rectangle, index: usize) -> Vector2 {
        let pitch = INDICATOR_RADIUS * 2.0 + INDICATOR_SPACING;
        let total = self.len() as f32 * pitch - INDICATOR_SPACING;
        let first_x = bounds.x + (bounds.width - total) * 0.5 + INDICATOR_RADIUS;
        Vector2::new(
            first_x + index as f32 * pitch,
            bounds.y + bounds.height - INDICATOR_BOTTOM_MARGIN,
        )
    }

    /// Indicator under `point`, if any.
    pub fn hit_test(&self, bounds: Rectangle, point: Vector2) -> Option<usize> {
        (0..self.len()).find(|&index| {
            let center = self.dot_center(bounds, index);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            dx * dx + dy * dy <= INDICATOR_RADIUS * INDICATOR_RADIUS
        })
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        for (index, highlighted) in self.highlighted.iter().enumerate() {
            let center = self.dot_center(bounds, index);
            let color = if *highlighted {
                Color::WHITE
            } else {
                Color::new(255, 255, 255, 128)
            };
            d.draw_circle(center.x as i32, center.y as i32, INDICATOR_RADIUS, color);
        }
    }
}

impl IndicatorHost for IndicatorStrip {
    fn append_indicator(&mut self, _index: usize, highlighted: bool) {
        self.highlighted.push(highlighted);
    }

    fn set_indicator_highlighted(&mut self, index: usize, highlighted: bool) {
        if let Some(slot) = self.highlighted.get_mut(index) {
            *slot = highlighted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(len: usize) -> IndicatorStrip {
        let mut strip = IndicatorStrip::new();
        for index in 0..len {
            strip.append_indicator(index, index == 0);
        }
        strip
    }

    #[test]
    fn dots_are_centered_and_hit_testable() {
        let bounds = Rectangle::new(0.0, 0.0, 300.0, 200.0);
        let strip = strip(3);

        let middle = strip.dot_center(bounds, 1);
        assert_eq!(middle.x, 150.0);
        assert_eq!(middle.y, 200.0 - INDICATOR_BOTTOM_MARGIN);

        assert_eq!(strip.hit_test(bounds, middle), Some(1));
        let first = strip.dot_center(bounds, 0);
        assert_eq!(strip.hit_test(bounds, Vector2::new(first.x + 2.0, first.y - 2.0)), Some(0));
        assert_eq!(strip.hit_test(bounds, Vector2::new(10.0, 10.0)), None);
    }

    #[test]
    fn highlight_follows_host_calls() {
        let mut strip = strip(4);
        assert_eq!(strip.highlighted_index(), Some(0));
        strip.set_indicator_highlighted(0, false);
        strip.set_indicator_highlighted(3, true);
        assert_eq!(strip.highlighted_index(), Some(3));
    }
}
