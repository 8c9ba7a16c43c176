//! Stage 1 of the scan pipeline: image bytes to data URL.
//!
//! The decoding library consumes images as data URLs, so the selected file is
//! read into memory, its media type sniffed from magic bytes (best-effort,
//! via `infer`), and the content base64-encoded inline. Only `image/*` types
//! are accepted; anything else cannot be a label photo and fails before the
//! decoder is ever invoked.

use crate::ScanError;
use base64::{engine::general_purpose, Engine as _};
use std::path::Path;

/// Reads the selected image file into memory.
pub async fn read_image(path: &Path) -> Result<Vec<u8>, ScanError> {
    tokio::fs::read(path).await.map_err(ScanError::Read)
}

/// A `data:image/…;base64,…` string embedding one image inline.
///
/// Construction validates the content is image-shaped, so holders of this
/// type never need to re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUrl(String);

impl ImageDataUrl {
    /// Encodes raw image bytes as a data URL.
    ///
    /// Fails with [`ScanError::Parse`] when the bytes are not a recognisable
    /// image format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScanError> {
        let kind = infer::get(bytes).ok_or_else(|| {
            tracing::debug!("media type could not be detected");
            ScanError::Parse
        })?;

        if kind.matcher_type() != infer::MatcherType::Image {
            tracing::debug!(mime = kind.mime_type(), "content is not an image");
            return Err(ScanError::Parse);
        }

        let encoded = general_purpose::STANDARD.encode(bytes);
        Ok(Self(format!("data:{};base64,{}", kind.mime_type(), encoded)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The sniffed media type, e.g. `image/png`.
    pub fn mime_type(&self) -> &str {
        let start = "data:".len();
        let end = self.0.find(';').expect("data URL always contains ';'");
        &self.0[start..end]
    }
}

impl std::fmt::Display for ImageDataUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageDataUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn png_bytes_become_a_png_data_url() {
        let url = ImageDataUrl::from_bytes(&PNG_HEADER).expect("build data url");
        assert!(url.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(url.mime_type(), "image/png");
    }

    #[test]
    fn payload_round_trips_through_base64() {
        let url = ImageDataUrl::from_bytes(&PNG_HEADER).expect("build data url");
        let payload = url
            .as_str()
            .split_once(";base64,")
            .map(|(_, b64)| b64)
            .expect("data url has base64 payload");

        let decoded = general_purpose::STANDARD.decode(payload).expect("decode payload");
        assert_eq!(decoded, PNG_HEADER);
    }

    #[test]
    fn text_bytes_are_rejected() {
        let err = ImageDataUrl::from_bytes(b"hello world").expect_err("should reject");
        assert!(matches!(err, ScanError::Parse));
    }

    #[test]
    fn non_image_binary_is_rejected() {
        // %PDF magic: recognised by the sniffer, but not an image.
        let err = ImageDataUrl::from_bytes(b"%PDF-1.4 ...").expect_err("should reject");
        assert!(matches!(err, ScanError::Parse));
    }
}
