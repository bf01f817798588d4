use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, ValidationError};

/// Largest image the client will upload (1 MiB).
pub const MAX_IMAGE_BYTES: usize = 1_048_576;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Text,
    Url,
    Image,
}

impl InputMode {
    pub fn all() -> &'static [InputMode] {
        &[InputMode::Text, InputMode::Url, InputMode::Image]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::Url => "Link",
            InputMode::Image => "Image",
        }
    }
}

/// An image picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            data,
        }
    }

    /// Read an image from disk. Files over `MAX_IMAGE_BYTES` are rejected
    /// from their metadata, before any bytes are read.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let size = fs::metadata(path)?.len();
        if size > MAX_IMAGE_BYTES as u64 {
            return Err(ValidationError::FileTooLarge {
                size: usize::try_from(size).unwrap_or(usize::MAX),
                limit: MAX_IMAGE_BYTES,
            }
            .into());
        }
        let data = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, data))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Guess a MIME type from the file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// A snapshot of the active mode's buffer, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionInput {
    Text(String),
    Url(String),
    Image(ImageFile),
}

impl SubmissionInput {
    pub fn mode(&self) -> InputMode {
        match self {
            SubmissionInput::Text(_) => InputMode::Text,
            SubmissionInput::Url(_) => InputMode::Url,
            SubmissionInput::Image(_) => InputMode::Image,
        }
    }
}
