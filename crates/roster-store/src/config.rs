//! Store configuration.

use roster_core::{CoreError, Limits};
use serde::{Deserialize, Serialize};

/// Largest supported rounding precision for the average gpa.
///
/// `f64` carries roughly 15 significant decimal digits; beyond that the
/// scale factor in rounding stops being meaningful.
pub const MAX_GPA_PRECISION: u32 = 15;

/// Configuration for a record store.
///
/// Deserialization goes through the same checks as the builder methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStoreConfig")]
pub struct StoreConfig {
    /// Value ranges enforced at admission and update.
    limits: Limits,
    /// Decimal places kept by [`average_gpa`](crate::RecordStore::average_gpa).
    gpa_precision: u32,
}

/// Unchecked wire form of [`StoreConfig`].
#[derive(Deserialize)]
struct RawStoreConfig {
    limits: Limits,
    gpa_precision: u32,
}

impl TryFrom<RawStoreConfig> for StoreConfig {
    type Error = CoreError;

    fn try_from(raw: RawStoreConfig) -> Result<Self, Self::Error> {
        StoreConfig::default()
            .with_limits(raw.limits)
            .with_gpa_precision(raw.gpa_precision)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            gpa_precision: 2,
        }
    }
}

impl StoreConfig {
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn gpa_precision(&self) -> u32 {
        self.gpa_precision
    }

    /// Replace the limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the rounding precision, rejecting values above [`MAX_GPA_PRECISION`].
    pub fn with_gpa_precision(mut self, precision: u32) -> Result<Self, CoreError> {
        if precision > MAX_GPA_PRECISION {
            return Err(CoreError::InvalidPrecision {
                precision,
                max: MAX_GPA_PRECISION,
            });
        }
        self.gpa_precision = precision;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_bounds() {
        let config = StoreConfig::default()
            .with_gpa_precision(MAX_GPA_PRECISION)
            .unwrap();
        assert_eq!(config.gpa_precision(), MAX_GPA_PRECISION);

        for precision in [MAX_GPA_PRECISION + 1, 308, 400, u32::MAX] {
            let err = StoreConfig::default()
                .with_gpa_precision(precision)
                .unwrap_err();
            assert!(matches!(err, CoreError::InvalidPrecision { max: 15, .. }));
        }
    }

    #[test]
    fn test_deserialize_roundtrip_default() {
        let json = serde_json::to_string(&StoreConfig::default()).unwrap();
        let config: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_deserialize_rejects_inverted_limits() {
        let result = serde_json::from_str::<StoreConfig>(
            r#"{"limits":{"min_age":80,"max_age":15,"min_gpa":10.0,"max_gpa":0.0},"gpa_precision":2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_large_precision() {
        let result = serde_json::from_str::<StoreConfig>(
            r#"{"limits":{"min_age":15,"max_age":80,"min_gpa":0.0,"max_gpa":10.0},"gpa_precision":400}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("gpa precision 400 exceeds maximum of 15"));
    }
}
