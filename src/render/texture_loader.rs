use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

use crate::slide::SlideRecord;

/// EXIF orientation of a JPEG, `1` (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            log::debug!("no EXIF orientation: {e}");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Only JPEG carries EXIF reliably
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are drawn as stored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        log::debug!("{}: applied EXIF orientation {orientation}", image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}

/// Load a texture for every local image referenced by `slides`.
///
/// Failures are logged and skipped; those panels fall back to a placeholder.
pub fn preload_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    slides: &[SlideRecord],
) -> HashMap<PathBuf, Texture2D> {
    let mut textures = HashMap::new();
    for path in slides.iter().filter_map(|s| s.image.local_path()) {
        if textures.contains_key(path) {
            continue;
        }
        match load_texture_with_exif_rotation(rl, thread, path) {
            Ok(texture) => {
                textures.insert(path.to_path_buf(), texture);
            }
            Err(e) => log::warn!("{e:#}"),
        }
    }
    textures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_without_exif_are_upright() {
        assert_eq!(exif_orientation(b"\x89PNG\r\n\x1a\nnot really"), 1);
        assert_eq!(exif_orientation(&[]), 1);
    }
}
