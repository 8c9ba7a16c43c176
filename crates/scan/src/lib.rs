//! # Foodpad Scan
//!
//! Barcode ingestion: turn a user-supplied label photo into a decoded numeric
//! barcode.
//!
//! The pipeline has two asynchronous stages:
//! 1. image file → data URL ([`ImageDataUrl::from_bytes`] after [`read_image`])
//! 2. data URL → numeric barcode ([`decode_data_url`], via an external
//!    symbol-decoding library behind the [`SymbolDecoder`] trait)
//!
//! Stage 2 never starts before stage 1 completes; a stage-1 failure
//! short-circuits the whole scan. The decoding algorithm itself is not this
//! crate's concern: hosts plug a library in through [`SymbolDecoder`] (or the
//! [`FnDecoder`] closure adapter) and this crate drives it with the fixed
//! [`Symbology`] preference order.

pub mod data_url;
pub mod decoder;
pub mod symbology;

use std::path::Path;

pub use data_url::{read_image, ImageDataUrl};
pub use decoder::{FnDecoder, SymbolDecoder};
pub use symbology::Symbology;

/// Errors produced by the scan pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The image file could not be read into memory.
    #[error("failed to read image file: {0}")]
    Read(#[source] std::io::Error),

    /// The file content was not a recognisable image, so no data URL could
    /// be formed from it.
    #[error("file content is not a supported image format")]
    Parse,

    /// The decoding library recognised no barcode symbol in the image.
    #[error("no barcode symbol recognised in image")]
    SymbolNotFound,

    /// A symbol was recognised but its text is not a valid numeric barcode.
    /// Alphanumeric codes are not passed through.
    #[error("decoded symbol {code:?} is not a numeric barcode")]
    NonNumericSymbol { code: String },
}

/// Stage 2 alone: decode a data URL into a numeric barcode.
///
/// The decoder is asked for the symbologies in [`Symbology::DEFAULT_ORDER`];
/// it tries each and reports the first successful decode, or `None`.
pub async fn decode_data_url(
    image: &ImageDataUrl,
    decoder: &dyn SymbolDecoder,
) -> Result<u64, ScanError> {
    let code = decoder
        .decode(image, &Symbology::DEFAULT_ORDER)
        .await
        .ok_or(ScanError::SymbolNotFound)?;

    code.parse::<u64>().map_err(|_| {
        tracing::debug!(%code, "decoded symbol is not numeric");
        ScanError::NonNumericSymbol { code }
    })
}

/// The full pipeline: read an image file, build its data URL, decode it.
pub async fn scan_image(path: &Path, decoder: &dyn SymbolDecoder) -> Result<u64, ScanError> {
    let bytes = read_image(path).await?;
    let image = ImageDataUrl::from_bytes(&bytes)?;
    decode_data_url(&image, decoder).await
}
