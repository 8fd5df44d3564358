//! Auto-advancing image carousel with indicator navigation, and the small
//! widgets that share its page: a navigation dropdown, an image upload
//! preview and a password visibility toggle.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod dropdown;
pub mod password_toggle;
pub mod render;
pub mod slide;
pub mod surface;
pub mod timer;
pub mod upload;

pub use carousel::{Carousel, CarouselError, CarouselEvent, MountError};
pub use config::{CarouselConfig, ConfigError, ConfigSource};
pub use slide::{ImageRef, SlideRecord};
