use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where a slide's picture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// `http://` or `https://` URL. Never fetched; the surface draws a placeholder.
    Remote(String),
    Local(PathBuf),
}

impl ImageRef {
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            ImageRef::Local(path) => Some(path),
            ImageRef::Remote(_) => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote(_))
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageRef::Remote(value)
        } else {
            ImageRef::Local(PathBuf::from(value))
        }
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        ImageRef::from(value.to_string())
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        match value {
            ImageRef::Remote(url) => url,
            ImageRef::Local(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Remote(url) => f.write_str(url),
            ImageRef::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One entry of the carousel configuration. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlideRecord {
    pub label: String,
    pub image: ImageRef,
}

impl SlideRecord {
    pub fn new(label: impl Into<String>, image: impl Into<ImageRef>) -> Self {
        Self {
            label: label.into(),
            image: image.into(),
        }
    }

    /// Subtitle drawn under the label on the panel.
    pub fn caption(&self) -> String {
        format!("Professional {} services", self.label.to_lowercase())
    }
}
