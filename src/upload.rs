use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::MAX_UPLOAD_BYTES;

const ACCEPTED_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a valid image file (JPG, PNG, GIF)")]
    UnsupportedType(String),
    #[error("File size must be less than 5MB")]
    TooLarge(u64),
    #[error("Please upload a service image")]
    Missing,
}

/// A file offered to the upload area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub path: PathBuf,
}

impl UploadCandidate {
    /// Describe a file on disk, guessing its media type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let size = fs::metadata(path)?.len();
        Ok(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            mime: mime_for_path(path).to_string(),
            size,
            path: path.to_path_buf(),
        })
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Accept JPEG, PNG and GIF files up to 5 MiB.
pub fn validate(candidate: &UploadCandidate) -> Result<(), UploadError> {
    if !ACCEPTED_TYPES.contains(&candidate.mime.as_str()) {
        return Err(UploadError::UnsupportedType(candidate.mime.clone()));
    }
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(candidate.size));
    }
    Ok(())
}

/// Border state of the upload area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    DragOver,
    Invalid,
}

/// Upload area with a single-file preview.
#[derive(Debug, Default)]
pub struct UploadField {
    selected: Option<UploadCandidate>,
    highlight: Highlight,
}

impl UploadField {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accepted file, shown in place of the placeholder.
    pub fn preview(&self) -> Option<&UploadCandidate> {
        self.selected.as_ref()
    }

    pub fn shows_placeholder(&self) -> bool {
        self.selected.is_none()
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn drag_over(&mut self) {
        self.highlight = Highlight::DragOver;
    }

    pub fn drag_leave(&mut self) {
        if self.highlight == Highlight::DragOver {
            self.highlight = Highlight::None;
        }
    }

    /// Handle a drop. Only the first file is considered; an empty drop does
    /// nothing.
    pub fn drop_files<It>(&mut self, files: It) -> Result<Option<&UploadCandidate>, UploadError>
    where
        It: IntoIterator<Item = UploadCandidate>,
    {
        self.drag_leave();
        match files.into_iter().next() {
            Some(file) => self.select(file).map(Some),
            None => Ok(None),
        }
    }

    /// Validate and keep `file`. A rejected file leaves the previous
    /// selection untouched.
    pub fn select(&mut self, file: UploadCandidate) -> Result<&UploadCandidate, UploadError> {
        validate(&file)?;
        if self.highlight == Highlight::Invalid {
            self.highlight = Highlight::None;
        }
        Ok(&*self.selected.insert(file))
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Form submission check.
    pub fn submit(&mut self) -> Result<&UploadCandidate, UploadError> {
        match self.selected {
            Some(ref file) => Ok(file),
            None => {
                self.highlight = Highlight::Invalid;
                Err(UploadError::Missing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, size: u64) -> UploadCandidate {
        let path = PathBuf::from(name);
        UploadCandidate {
            name: name.to_string(),
            mime: mime_for_path(&path).to_string(),
            size,
            path,
        }
    }

    #[test]
    fn accepts_supported_types_within_limit() {
        assert_eq!(validate(&candidate("a.jpg", 10)), Ok(()));
        assert_eq!(validate(&candidate("a.JPEG", 10)), Ok(()));
        assert_eq!(validate(&candidate("a.png", MAX_UPLOAD_BYTES)), Ok(()));
        assert_eq!(validate(&candidate("a.gif", 1)), Ok(()));
    }

    #[test]
    fn rejects_other_types_and_large_files() {
        assert_eq!(
            validate(&candidate("a.webp", 10)),
            Err(UploadError::UnsupportedType("image/webp".into()))
        );
        assert_eq!(
            validate(&candidate("a.png", MAX_UPLOAD_BYTES + 1)),
            Err(UploadError::TooLarge(MAX_UPLOAD_BYTES + 1))
        );
        assert_eq!(
            UploadError::TooLarge(0).to_string(),
            "File size must be less than 5MB"
        );
    }

    #[test]
    fn rejected_file_keeps_previous_preview() {
        let mut field = UploadField::new();
        field.select(candidate("first.png", 10)).unwrap();
        assert!(field.select(candidate("second.txt", 10)).is_err());
        assert_eq!(field.preview().map(|f| f.name.as_str()), Some("first.png"));
    }

    #[test]
    fn drop_uses_first_file_and_clears_drag_highlight() {
        let mut field = UploadField::new();
        field.drag_over();
        assert_eq!(field.highlight(), Highlight::DragOver);

        let picked = field
            .drop_files(vec![candidate("one.gif", 1), candidate("two.gif", 1)])
            .unwrap()
            .map(|f| f.name.clone());
        assert_eq!(picked.as_deref(), Some("one.gif"));
        assert_eq!(field.highlight(), Highlight::None);
        assert!(!field.shows_placeholder());

        assert_eq!(field.drop_files(Vec::new()), Ok(None));
    }

    #[test]
    fn submit_without_file_marks_area_invalid() {
        let mut field = UploadField::new();
        assert_eq!(field.submit(), Err(UploadError::Missing));
        assert_eq!(field.highlight(), Highlight::Invalid);

        field.select(candidate("ok.jpg", 5)).unwrap();
        assert_eq!(field.highlight(), Highlight::None);
        assert_eq!(field.submit().map(|f| f.name.clone()), Ok("ok.jpg".to_string()));

        field.clear();
        assert!(field.shows_placeholder());
        assert!(field.submit().is_err());
    }

    #[test]
    fn from_path_reads_size_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.JPG");
        fs::write(&path, vec![0u8; 42]).unwrap();

        let file = UploadCandidate::from_path(&path).unwrap();
        assert_eq!(file.name, "photo.JPG");
        assert_eq!(file.mime, "image/jpeg");
        assert_eq!(file.size, 42);
    }
}
