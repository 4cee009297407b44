/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantileParseError {
    #[error("invalid decimal string: {0}")]
    InvalidDecimal(String),
    #[error("quantile should be in range [0, 1]")]
    OutOfRange,
    #[error("quantile can not be represented as f64")]
    NotRepresentable,
}

/// A quantile in `[0, 1]`, keeping the string form it was configured with
/// so that it can be used as a tag value.
#[derive(Clone, Debug)]
pub struct Quantile {
    name: Cow<'static, str>,
    value: f64,
}

impl Quantile {
    pub const PCT50: Quantile = Quantile::new_static("0.50", 0.50);
    pub const PCT80: Quantile = Quantile::new_static("0.80", 0.80);
    pub const PCT90: Quantile = Quantile::new_static("0.90", 0.90);
    pub const PCT95: Quantile = Quantile::new_static("0.95", 0.95);
    pub const PCT99: Quantile = Quantile::new_static("0.99", 0.99);

    const fn new_static(name: &'static str, value: f64) -> Self {
        Quantile {
            name: Cow::Borrowed(name),
            value,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl FromStr for Quantile {
    type Err = QuantileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let d =
            Decimal::from_str(s).map_err(|e| QuantileParseError::InvalidDecimal(e.to_string()))?;
        if d.is_sign_negative() || d > Decimal::ONE {
            return Err(QuantileParseError::OutOfRange);
        }
        let value = d.to_f64().ok_or(QuantileParseError::NotRepresentable)?;
        Ok(Quantile {
            name: Cow::Owned(s.to_string()),
            value,
        })
    }
}

impl fmt::Display for Quantile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Quantile {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Quantile {}

impl PartialOrd for Quantile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Hash for Quantile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn parse_ok() {
        let q = Quantile::from_str("0.99").unwrap();
        assert_eq!(q.as_str(), "0.99");
        assert_eq!(q.value(), 0.99);
        assert_eq!(q, Quantile::PCT99);

        let q = Quantile::from_str(" 1 ").unwrap();
        assert_eq!(q.as_str(), "1");
        assert_eq!(q.value(), 1.0);

        let q = Quantile::from_str("0").unwrap();
        assert_eq!(q.value(), 0.0);
    }

    #[test]
    fn parse_err() {
        assert_eq!(
            Quantile::from_str("1.01"),
            Err(QuantileParseError::OutOfRange)
        );
        assert_eq!(
            Quantile::from_str("-0.5"),
            Err(QuantileParseError::OutOfRange)
        );
        assert!(matches!(
            Quantile::from_str("p99"),
            Err(QuantileParseError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn ordered_set() {
        let mut set = BTreeSet::new();
        set.insert(Quantile::PCT99);
        set.insert(Quantile::from_str("0.5").unwrap());
        set.insert(Quantile::PCT50);
        set.insert(Quantile::PCT90);

        let values: Vec<f64> = set.iter().map(|q| q.value()).collect();
        assert_eq!(values, vec![0.5, 0.9, 0.99]);
    }
}
