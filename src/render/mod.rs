//! raylib implementation of the page: mount points for the carousel plus the
//! dropdown and upload widgets.

pub mod indicators;
pub mod menu;
pub mod panel;
pub mod state;
pub mod texture_loader;
pub mod upload_area;

pub use indicators::IndicatorStrip;
pub use menu::NavMenu;
pub use panel::{Panel, PanelStrip};
pub use upload_area::Banner;
