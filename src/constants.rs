pub const WINDOW_WIDTH: i32 = 960;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 640;           // Initial window height
pub const FPS: u32 = 60;                      // Target frames per second

pub const DEFAULT_INTERVAL_MS: u64 = 4_000;   // Time between automatic advances
pub const FADE_DURATION: f32 = 1.0;           // Panel opacity transition (seconds)

pub const TOP_BAR_HEIGHT: f32 = 48.0;         // Height of the navigation bar above the panels
pub const INDICATOR_RADIUS: f32 = 6.0;        // Indicator dot radius
pub const INDICATOR_SPACING: f32 = 12.0;      // Gap between indicator dots
pub const INDICATOR_BOTTOM_MARGIN: f32 = 24.0;

pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const BANNER_DURATION: f32 = 3.0;         // How long upload messages stay on screen (seconds)
