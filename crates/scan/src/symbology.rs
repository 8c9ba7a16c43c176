//! Barcode symbologies the scanner asks the decoding library to try.

/// A barcode encoding standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Code128,
    Ean13,
    Ean8,
    Code39,
    Code39Vin,
    Codabar,
    UpcA,
    UpcE,
    Interleaved2Of5,
    Standard2Of5,
    Code93,
}

impl Symbology {
    /// The fixed preference order handed to the decoding library. The library
    /// tries each symbology in turn and returns the first successful decode.
    pub const DEFAULT_ORDER: [Symbology; 11] = [
        Symbology::Code128,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Code39,
        Symbology::Code39Vin,
        Symbology::Codabar,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Interleaved2Of5,
        Symbology::Standard2Of5,
        Symbology::Code93,
    ];

    /// The identifier a decoding library adapter can map to its reader name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::Code128 => "code-128",
            Symbology::Ean13 => "ean-13",
            Symbology::Ean8 => "ean-8",
            Symbology::Code39 => "code-39",
            Symbology::Code39Vin => "code-39-vin",
            Symbology::Codabar => "codabar",
            Symbology::UpcA => "upc-a",
            Symbology::UpcE => "upc-e",
            Symbology::Interleaved2Of5 => "interleaved-2-of-5",
            Symbology::Standard2Of5 => "standard-2-of-5",
            Symbology::Code93 => "code-93",
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_covers_every_symbology_once() {
        let mut seen = Symbology::DEFAULT_ORDER.to_vec();
        seen.sort_by_key(|s| s.as_str());
        seen.dedup();
        assert_eq!(seen.len(), Symbology::DEFAULT_ORDER.len());
    }

    #[test]
    fn code128_is_tried_first() {
        assert_eq!(Symbology::DEFAULT_ORDER[0], Symbology::Code128);
    }
}
