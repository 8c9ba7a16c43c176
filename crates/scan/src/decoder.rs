//! The seam to the external symbol-decoding library.

use crate::data_url::ImageDataUrl;
use crate::symbology::Symbology;
use async_trait::async_trait;

/// An external barcode-decoding library.
///
/// Implementations try the given symbologies in order against the image and
/// return the first decoded text, or `None` when no symbol is recognised.
/// This crate always awaits the call; whether the library itself is
/// synchronous is the adapter's concern.
#[async_trait]
pub trait SymbolDecoder: Send + Sync {
    async fn decode(&self, image: &ImageDataUrl, symbologies: &[Symbology]) -> Option<String>;
}

/// Adapter wrapping a plain closure as a [`SymbolDecoder`].
///
/// Hosts use this to bridge synchronous decoding libraries without writing a
/// trait impl; tests use it for stub decoders.
pub struct FnDecoder<F>(F);

impl<F> FnDecoder<F>
where
    F: Fn(&ImageDataUrl, &[Symbology]) -> Option<String> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> SymbolDecoder for FnDecoder<F>
where
    F: Fn(&ImageDataUrl, &[Symbology]) -> Option<String> + Send + Sync,
{
    async fn decode(&self, image: &ImageDataUrl, symbologies: &[Symbology]) -> Option<String> {
        (self.0)(image, symbologies)
    }
}
