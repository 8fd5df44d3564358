use std::collections::HashMap;
use std::path::PathBuf;

use raylib::prelude::*;

use crate::constants::*;
use crate::render::state::FadeState;
use crate::slide::SlideRecord;
use crate::surface::PanelHost;

const PLACEHOLDER: Color = Color { r: 51, g: 65, b: 85, a: 255 };
const TEXT_INSET: f32 = 24.0;

fn with_alpha(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity) as u8)
}

/// One slide's picture, label and caption, stacked over its siblings and
/// faded in or out when its visibility changes.
pub struct Panel {
    image: Option<Texture2D>,
    label: String,
    caption: String,

    pub visible: bool,
    pub state: FadeState,

    opacity: f32,
    target_opacity: f32,
    fade_timer: f32,
    tween_opacity: Option<ease::Tween>,
}

impl Panel {
    pub fn new(record: &SlideRecord, image: Option<Texture2D>, visible: bool) -> Self {
        let opacity = if visible { 1.0 } else { 0.0 };
        Self {
            image,
            label: record.label.clone(),
            caption: record.caption(),

            visible,
            state: if visible { FadeState::Shown } else { FadeState::Hidden },

            opacity,
            target_opacity: opacity,
            fade_timer: 0.0,
            tween_opacity: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.target_opacity = if visible { 1.0 } else { 0.0 };

        if self.opacity == self.target_opacity {
            self.tween_opacity = None;
            self.state = if visible { FadeState::Shown } else { FadeState::Hidden };
            return;
        }

        self.fade_timer = 0.0;
        self.tween_opacity = Some(ease::Tween::new(
            ease::cubic_out,
            self.opacity,
            self.target_opacity,
            FADE_DURATION,
        ));
        self.state = if visible { FadeState::FadingIn } else { FadeState::FadingOut };
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween_opacity.as_mut() else {
            return;
        };

        self.opacity = tween.apply(dt).clamp(0.0, 1.0);
        self.fade_timer += dt;
        if self.fade_timer >= FADE_DURATION {
            self.tween_opacity = None;
            self.opacity = self.target_opacity;
            self.state = if self.visible { FadeState::Shown } else { FadeState::Hidden };
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        match &self.image {
            Some(image) => {
                // Cover the bounds, cropping the texture to the bounds' aspect ratio
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                let scale = (bounds.width / tex_width).max(bounds.height / tex_height);
                let src_width = bounds.width / scale;
                let src_height = bounds.height / scale;
                let source_rec = Rectangle::new(
                    (tex_width - src_width) * 0.5,
                    (tex_height - src_height) * 0.5,
                    src_width,
                    src_height,
                );

                d.draw_texture_pro(
                    image,
                    source_rec,
                    bounds,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    with_alpha(Color::WHITE, self.opacity),
                );
            }
            None => d.draw_rectangle_rec(bounds, with_alpha(PLACEHOLDER, self.opacity)),
        }

        // Darken the bottom half so the text stays readable
        let half = bounds.height * 0.5;
        d.draw_rectangle_gradient_v(
            bounds.x as i32,
            (bounds.y + half) as i32,
            bounds.width as i32,
            half as i32,
            Color::new(0, 0, 0, 0),
            with_alpha(Color::new(0, 0, 0, 153), self.opacity),
        );

        let text_x = (bounds.x + TEXT_INSET) as i32;
        let bottom = bounds.y + bounds.height - TEXT_INSET;
        d.draw_text(
            &self.label,
            text_x,
            (bottom - 60.0) as i32,
            32,
            with_alpha(Color::WHITE, self.opacity),
        );
        d.draw_text(
            &self.caption,
            text_x,
            (bottom - 22.0) as i32,
            20,
            with_alpha(Color::WHITE, self.opacity * 0.8),
        );
    }
}

/// Panel mount point backed by preloaded textures.
pub struct PanelStrip {
    textures: HashMap<PathBuf, Texture2D>,
    panels: Vec<Panel>,
}

impl PanelStrip {
    pub fn new(textures: HashMap<PathBuf, Texture2D>) -> Self {
        Self {
            textures,
            panels: Vec::new(),
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Index of the panel currently marked visible.
    pub fn visible_index(&self) -> Option<usize> {
        self.panels.iter().position(|p| p.visible)
    }

    pub fn update(&mut self, dt: f32) {
        for panel in self.panels.iter_mut() {
            panel.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        for panel in self.panels.iter() {
            panel.draw(d, bounds);
        }
    }
}

impl PanelHost for PanelStrip {
    fn append_panel(&mut self, record: &SlideRecord, visible: bool) {
        // Slides sharing a path share the texture, so only the first panel gets it
        let image = record
            .image
            .local_path()
            .and_then(|path| self.textures.remove(path));
        self.panels.push(Panel::new(record, image, visible));
    }

    fn set_panel_visible(&mut self, index: usize, visible: bool) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.set_visible(visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> SlideRecord {
        SlideRecord::new(label, format!("https://example.com/{label}.jpg"))
    }

    #[test]
    fn hidden_panel_fades_in_over_the_fade_duration() {
        let mut panel = Panel::new(&record("A"), None, false);
        assert_eq!(panel.state, FadeState::Hidden);

        panel.set_visible(true);
        assert_eq!(panel.state, FadeState::FadingIn);

        panel.update(FADE_DURATION * 0.5);
        assert!(panel.opacity() > 0.0 && panel.opacity() < 1.0);

        panel.update(FADE_DURATION);
        assert_eq!(panel.state, FadeState::Shown);
        assert_eq!(panel.opacity(), 1.0);
    }

    #[test]
    fn hide_then_show_without_time_passing_stays_shown() {
        let mut panel = Panel::new(&record("A"), None, true);
        panel.set_visible(false);
        panel.set_visible(true);
        assert_eq!(panel.state, FadeState::Shown);
        assert_eq!(panel.opacity(), 1.0);
    }

    #[test]
    fn strip_tracks_visibility_by_index() {
        let mut strip = PanelStrip::new(HashMap::new());
        for (i, label) in ["A", "B", "C"].into_iter().enumerate() {
            strip.append_panel(&record(label), i == 0);
        }
        assert_eq!(strip.visible_index(), Some(0));

        strip.set_panel_visible(0, false);
        strip.set_panel_visible(2, true);
        assert_eq!(strip.visible_index(), Some(2));
        assert_eq!(strip.panels()[2].label(), "C");

        // Out of range indices are ignored
        strip.set_panel_visible(7, true);
        assert_eq!(strip.panels().len(), 3);
    }
}
