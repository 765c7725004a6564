//! Map configuration: the bucket count, fixed for the lifetime of a map.

use crate::error::ConfigError;
use core::num::NonZeroUsize;

/// Bucket count used by `ChainedHashMap::new` and `MapConfig::default`.
pub const DEFAULT_CAPACITY: usize = 1000;

/// A validated, non-zero bucket count.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    pub const DEFAULT: Capacity = match NonZeroUsize::new(DEFAULT_CAPACITY) {
        Some(n) => Capacity(n),
        None => panic!("DEFAULT_CAPACITY must be non-zero"),
    };

    pub fn new(buckets: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(buckets)
            .map(Capacity)
            .ok_or(ConfigError::ZeroCapacity)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Capacity {
    type Error = ConfigError;

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        Capacity::new(v)
    }
}

impl TryFrom<u64> for Capacity {
    type Error = ConfigError;

    fn try_from(v: u64) -> Result<Self, Self::Error> {
        let buckets = usize::try_from(v).map_err(|_| ConfigError::CapacityTooLarge(v))?;
        Capacity::new(buckets)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = ConfigError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if v < 0 {
            return Err(ConfigError::NegativeCapacity(v));
        }
        Capacity::try_from(v as u64)
    }
}

/// Options accepted when building a map.
///
/// With the `serde` feature enabled this can be read from any serde
/// format; a missing `capacity` falls back to [`DEFAULT_CAPACITY`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MapConfig {
    /// Number of buckets. Must be positive.
    pub capacity: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the options and produce the bucket count a map is built with.
    pub fn validate(&self) -> Result<Capacity, ConfigError> {
        Capacity::new(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_thousand_buckets() {
        assert_eq!(MapConfig::default().capacity, 1000);
        assert_eq!(Capacity::default().get(), 1000);
        assert_eq!(MapConfig::default().validate(), Ok(Capacity::DEFAULT));
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(Capacity::new(0), Err(ConfigError::ZeroCapacity));
        assert_eq!(
            MapConfig::new().with_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn signed_conversion_rejects_negative_and_zero() {
        assert_eq!(
            Capacity::try_from(-5i64),
            Err(ConfigError::NegativeCapacity(-5))
        );
        assert_eq!(Capacity::try_from(0i64), Err(ConfigError::ZeroCapacity));
        assert_eq!(Capacity::try_from(20i64).map(Capacity::get), Ok(20));
    }

    #[test]
    fn error_messages_name_the_value() {
        assert_eq!(
            ConfigError::NegativeCapacity(-3).to_string(),
            "capacity must be positive, got -3"
        );
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "capacity must be positive, got 0"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let cfg: MapConfig = serde_json::from_str(r#"{"capacity": 20}"#).unwrap();
        assert_eq!(cfg.validate().map(Capacity::get), Ok(20));

        let cfg: MapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MapConfig::default());

        assert!(serde_json::from_str::<MapConfig>(r#"{"capacity": -1}"#).is_err());
        assert!(serde_json::from_str::<MapConfig>(r#"{"buckets": 4}"#).is_err());
    }
}
