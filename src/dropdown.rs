/// Open/closed state of a navigation dropdown.
///
/// The menu is hidden exactly when the dropdown is closed, and the caret icon
/// is turned upside down while it is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_menu_hidden(&self) -> bool {
        !self.open
    }

    /// Caret rotation in degrees.
    pub fn icon_rotation(&self) -> f32 {
        if self.open { 180.0 } else { 0.0 }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A click landed somewhere outside the dropdown.
    pub fn on_outside_click(&mut self) {
        if self.open {
            self.toggle();
        }
    }

    /// The pointer entered the menu.
    pub fn on_menu_enter(&mut self) {
        if !self.open {
            self.toggle();
        }
    }
}
