use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Percentage`] from a raw value.
#[derive(Debug, thiserror::Error)]
pub enum PercentageError {
    /// The value was NaN or infinite
    #[error("percentage must be a finite number")]
    NotFinite,
    /// The value was below zero
    #[error("percentage cannot be negative")]
    Negative,
}

/// A non-negative, finite nutrient percentage.
///
/// User input arrives as free text, so construction comes in two flavours:
/// [`Percentage::new`] for values that must be valid, and
/// [`Percentage::parse_lossy`] for form input, where any unparsable, negative,
/// or non-finite value degrades to `0` rather than surfacing an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Creates a `Percentage` from an already-numeric value.
    pub fn new(value: f64) -> Result<Self, PercentageError> {
        if !value.is_finite() {
            return Err(PercentageError::NotFinite);
        }
        if value < 0.0 {
            return Err(PercentageError::Negative);
        }
        Ok(Self(value))
    }

    /// The default value for a freshly added nutrient.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Parses raw form input, degrading every failure to `0`.
    ///
    /// `"abc"`, `""`, `"-3"` and `"NaN"` all become `0`; `"42.5"` becomes
    /// `42.5`. This never produces an invalid value.
    pub fn parse_lossy(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .ok()
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self(0.0))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Percentage::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lossy_keeps_valid_numbers() {
        assert_eq!(Percentage::parse_lossy("42.5").value(), 42.5);
        assert_eq!(Percentage::parse_lossy(" 7 ").value(), 7.0);
        assert_eq!(Percentage::parse_lossy("0").value(), 0.0);
    }

    #[test]
    fn parse_lossy_degrades_failures_to_zero() {
        assert_eq!(Percentage::parse_lossy("abc").value(), 0.0);
        assert_eq!(Percentage::parse_lossy("").value(), 0.0);
        assert_eq!(Percentage::parse_lossy("-3.5").value(), 0.0);
        assert_eq!(Percentage::parse_lossy("NaN").value(), 0.0);
        assert_eq!(Percentage::parse_lossy("inf").value(), 0.0);
    }

    #[test]
    fn new_rejects_invalid_values() {
        assert!(matches!(
            Percentage::new(f64::NAN),
            Err(PercentageError::NotFinite)
        ));
        assert!(matches!(
            Percentage::new(-0.1),
            Err(PercentageError::Negative)
        ));
    }

    #[test]
    fn deserialisation_rejects_negative_values() {
        let err = serde_json::from_str::<Percentage>("-1.0").expect_err("should reject");
        assert!(err.to_string().contains("negative"));
    }
}
