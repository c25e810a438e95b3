//! Image reference type.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors that can occur when parsing an [`ImageRef`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ImageRefError {
    /// The input string is empty.
    #[error("image reference cannot be empty")]
    Empty,
    /// A `data:` reference is missing its payload separator.
    #[error("data URL is missing a comma separator")]
    MalformedDataUrl,
    /// The input is not a parseable URL.
    #[error("invalid image URL: {0}")]
    InvalidUrl(String),
    /// The URL scheme is neither `http` nor `https`.
    #[error("unsupported image URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Which of the two image source modes a reference uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// An external `http(s)` URL stored as-is.
    External,
    /// Inline image data as a `data:` URL.
    Embedded,
}

/// An image reference on a product or blog post.
///
/// Two mutually exclusive source modes are supported: an external URL
/// (`https://...`) or embedded inline data (`data:image/jpeg;base64,...`).
/// The reference serializes as the plain string in either mode; the mode is
/// recovered from the `data:` prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Parse an `ImageRef` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, a malformed `data:` URL, or a
    /// URL with a scheme other than `http`/`https`.
    pub fn parse(s: &str) -> Result<Self, ImageRefError> {
        if s.is_empty() {
            return Err(ImageRefError::Empty);
        }

        if s.starts_with("data:") {
            if !s.contains(',') {
                return Err(ImageRefError::MalformedDataUrl);
            }
            return Ok(Self(s.to_owned()));
        }

        let url = Url::parse(s).map_err(|e| ImageRefError::InvalidUrl(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(Self(s.to_owned())),
            other => Err(ImageRefError::UnsupportedScheme(other.to_owned())),
        }
    }

    /// Build an embedded reference from a MIME type and base64 payload.
    #[must_use]
    pub fn embedded(mime: &str, base64_payload: &str) -> Self {
        Self(format!("data:{mime};base64,{base64_payload}"))
    }

    /// Which source mode this reference uses.
    #[must_use]
    pub fn kind(&self) -> ImageKind {
        if self.0.starts_with("data:") {
            ImageKind::Embedded
        } else {
            ImageKind::External
        }
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ImageRef` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ImageRef {
    type Err = ImageRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
