// SPDX-License-Identifier: MPL-2.0
//! Photo attachment validation and preview decoding.

use crate::error::PhotoError;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// Maximum accepted attachment size.
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// A validated photo attachment with its decoded preview handle.
#[derive(Debug, Clone)]
pub struct PhotoPreview {
    pub path: PathBuf,
    pub handle: Handle,
}

/// Maps a file extension to its MIME type. Only raster formats the
/// preview decoder understands are listed.
fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Checks the file type by extension. The MIME type must be `image/*`.
pub fn validate_file_type(path: &Path) -> Result<(), PhotoError> {
    match mime_for_extension(path) {
        Some(mime) if mime.starts_with("image/") => Ok(()),
        _ => Err(PhotoError::NotAnImage),
    }
}

/// Checks the attachment size against [`MAX_PHOTO_BYTES`].
pub fn validate_size(len: u64) -> Result<(), PhotoError> {
    if len > MAX_PHOTO_BYTES {
        Err(PhotoError::TooLarge)
    } else {
        Ok(())
    }
}

/// Validates the file at `path` and decodes it into a preview handle.
///
/// Checks run in the same order the user perceives them: file type
/// first, then size, then readability of the actual pixel data.
pub async fn load_preview(path: PathBuf) -> Result<PhotoPreview, PhotoError> {
    validate_file_type(&path)?;

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| PhotoError::Unreadable(e.to_string()))?;
    validate_size(metadata.len())?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| PhotoError::Unreadable(e.to_string()))?;

    let decoded = image_rs::load_from_memory(&bytes)
        .map_err(|e| PhotoError::Unreadable(e.to_string()))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PhotoPreview {
        path,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn known_raster_extensions_pass_the_type_check() {
        for name in ["a.png", "b.jpg", "c.JPEG", "d.gif", "e.webp", "f.bmp"] {
            assert!(validate_file_type(Path::new(name)).is_ok(), "{name}");
        }
    }

    #[test]
    fn non_image_files_are_rejected() {
        for name in ["notes.txt", "archive.zip", "clip.mp4", "noext"] {
            assert_eq!(
                validate_file_type(Path::new(name)),
                Err(PhotoError::NotAnImage),
                "{name}"
            );
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_size(MAX_PHOTO_BYTES).is_ok());
        assert_eq!(validate_size(MAX_PHOTO_BYTES + 1), Err(PhotoError::TooLarge));
    }

    #[tokio::test]
    async fn oversized_file_is_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_PHOTO_BYTES + 1).unwrap();

        assert_eq!(load_preview(path).await.unwrap_err(), PhotoError::TooLarge);
    }

    #[tokio::test]
    async fn corrupt_image_data_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"this is not png data").unwrap();

        assert!(matches!(
            load_preview(path).await.unwrap_err(),
            PhotoError::Unreadable(_)
        ));
    }

    #[tokio::test]
    async fn valid_image_produces_a_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        let buffer = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]));
        buffer.save(&path).unwrap();

        let preview = load_preview(path.clone()).await.unwrap();
        assert_eq!(preview.path, path);
    }
}
