// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Photo(PhotoError),
}

/// Specific error types for attaching a photo to a report.
/// Each maps to a user-facing message shown as an error toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The selected file is not an image (MIME type does not start with `image/`).
    NotAnImage,

    /// The file exceeds the 5 MB attachment limit.
    TooLarge,

    /// The file could not be read or decoded.
    Unreadable(String),
}

impl PhotoError {
    /// Returns the message shown to the user when this error occurs.
    pub fn user_message(&self) -> &'static str {
        match self {
            PhotoError::NotAnImage => "Please select a valid image file",
            PhotoError::TooLarge => "Image size should be less than 5MB",
            PhotoError::Unreadable(_) => "Error reading image file",
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NotAnImage => write!(f, "not an image file"),
            PhotoError::TooLarge => write!(f, "image exceeds the size limit"),
            PhotoError::Unreadable(msg) => write!(f, "unreadable image: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Photo(e) => write!(f, "Photo Error: {}", e),
        }
    }
}

impl From<PhotoError> for Error {
    fn from(err: PhotoError) -> Self {
        Error::Photo(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn photo_error_user_messages_match_report_form_wording() {
        assert_eq!(
            PhotoError::NotAnImage.user_message(),
            "Please select a valid image file"
        );
        assert_eq!(
            PhotoError::TooLarge.user_message(),
            "Image size should be less than 5MB"
        );
        assert_eq!(
            PhotoError::Unreadable("eof".into()).user_message(),
            "Error reading image file"
        );
    }

    #[test]
    fn photo_error_converts_to_error() {
        let err: Error = PhotoError::TooLarge.into();
        assert!(matches!(err, Error::Photo(PhotoError::TooLarge)));
    }
}
