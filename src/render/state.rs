#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FadeState {
    Hidden,    // Fully transparent, not drawn
    FadingIn,  // Opacity rising toward 1
    Shown,     // Fully opaque
    FadingOut, // Opacity falling toward 0
}
