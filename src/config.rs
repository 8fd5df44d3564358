use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::DEFAULT_INTERVAL_MS;
use crate::slide::SlideRecord;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("advance interval must be greater than zero")]
    ZeroInterval,
    #[error("no image files found in directory {}", .0.display())]
    NoImages(PathBuf),
}

/// Where the slide list came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    BuiltIn,
    File(PathBuf),
    Directory(PathBuf),
}

/// Slide list and advance interval.
///
/// ```toml
/// interval_ms = 5000
///
/// [[slides]]
/// label = "Plumbing"
/// image = "static/img/plumbing.jpg"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
    pub slides: Vec<SlideRecord>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            slides: default_slides(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Result<Self, ConfigError> {
        if interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        self.interval_ms = interval_ms;
        Ok(self)
    }

    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// One slide per image in `dir`, sorted by file name and labelled by
    /// file stem.
    pub fn from_directory(dir: &Path) -> Result<Self, ConfigError> {
        let slides = load_sorted_image_paths(dir)?
            .into_iter()
            .map(|path| {
                let label = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                SlideRecord::new(label, crate::slide::ImageRef::Local(path))
            })
            .collect();

        Ok(Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            slides,
        })
    }

    /// Pick the slide source: config file first, then image directory, then
    /// the built-in list.
    pub fn resolve(
        config: Option<&Path>,
        image_dir: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = config {
            return Ok((Self::from_file(path)?, ConfigSource::File(path.to_path_buf())));
        }
        if let Some(dir) = image_dir {
            return Ok((
                Self::from_directory(dir)?,
                ConfigSource::Directory(dir.to_path_buf()),
            ));
        }
        Ok((Self::default(), ConfigSource::BuiltIn))
    }
}

fn is_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "bmp" | "gif"
            )
        })
        .unwrap_or(false)
}

pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(ConfigError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn default_slides() -> Vec<SlideRecord> {
    [
        ("Plumbing", "photo-1581578731548-c64695cc6952"),
        ("Painting", "photo-1562259949-e8e7689d7828"),
        ("Housekeeping", "photo-1558618666-fcd25c85cd64"),
        ("Electricity", "photo-1621905251189-08b45d6a269e"),
        ("Air Conditioner", "photo-1631545806609-c2b999c8f4c6"),
        ("Carpentry", "photo-1504148455328-c376907d081c"),
        ("Gardening", "photo-1416879595882-3373a0480b5b"),
        ("Interior Design", "photo-1586023492125-27b2c045efd7"),
    ]
    .into_iter()
    .map(|(label, photo)| {
        SlideRecord::new(
            label,
            format!("https://images.unsplash.com/{photo}?w=600&h=400&fit=crop"),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::ImageRef;

    #[test]
    fn defaults_use_remote_images_and_four_seconds() {
        let config = CarouselConfig::default();
        assert_eq!(config.interval(), Duration::from_secs(4));
        assert_eq!(config.slides.len(), 8);
        assert_eq!(config.slides[0].label, "Plumbing");
        assert!(config.slides.iter().all(|s| s.image.is_remote()));
    }

    #[test]
    fn parses_toml_with_local_and_remote_images() {
        let text = r#"
            interval_ms = 5000

            [[slides]]
            label = "Plumbing"
            image = "static/img/plumbing.jpg"

            [[slides]]
            label = "Painting"
            image = "https://example.com/painting.jpg"
        "#;

        let config = CarouselConfig::from_toml_str(text, Path::new("carousel.toml")).unwrap();
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(
            config.slides[0].image,
            ImageRef::Local(PathBuf::from("static/img/plumbing.jpg"))
        );
        assert!(config.slides[1].image.is_remote());
    }

    #[test]
    fn missing_interval_falls_back_to_default() {
        let text = r#"
            [[slides]]
            label = "Only"
            image = "only.png"
        "#;
        let config = CarouselConfig::from_toml_str(text, Path::new("c.toml")).unwrap();
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.slides.len(), 1);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = CarouselConfig::from_toml_str("interval_ms = 0", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
        assert!(CarouselConfig::default().with_interval_ms(0).is_err());
    }

    #[test]
    fn malformed_toml_reports_path() {
        let err = CarouselConfig::from_toml_str("slides = 3", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn directory_slides_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_painting.PNG", "a_plumbing.jpg", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let config = CarouselConfig::from_directory(dir.path()).unwrap();
        let labels: Vec<&str> = config.slides.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["a_plumbing", "b_painting"]);
        assert_eq!(
            config.slides[0].image.local_path(),
            Some(dir.path().join("a_plumbing.jpg").as_path())
        );
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        assert!(matches!(
            CarouselConfig::from_directory(dir.path()),
            Err(ConfigError::NoImages(_))
        ));
    }

    #[test]
    fn resolve_prefers_config_file_over_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("carousel.toml");
        fs::write(&file, "interval_ms = 4000\n[[slides]]\nlabel = \"A\"\nimage = \"a.png\"\n").unwrap();

        let (config, source) = CarouselConfig::resolve(Some(file.as_path()), Some(dir.path())).unwrap();
        assert_eq!(source, ConfigSource::File(file.clone()));
        assert_eq!(config.slides.len(), 1);

        let (_, source) = CarouselConfig::resolve(None, None).unwrap();
        assert_eq!(source, ConfigSource::BuiltIn);
    }
}
