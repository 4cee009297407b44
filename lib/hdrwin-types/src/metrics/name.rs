/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use super::{ParseError, chars_allowed_in_opentsdb};

/// Name of a metric, restricted to the OpenTSDB character set.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct MetricsName(String);

impl MetricsName {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for MetricsName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        chars_allowed_in_opentsdb(s)?;
        Ok(MetricsName(s.to_string()))
    }
}

impl fmt::Display for MetricsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_metrics_name() {
        assert_eq!(
            MetricsName::from_str("sql.exec.latency").unwrap().as_str(),
            "sql.exec.latency"
        );
        assert_eq!(
            MetricsName::from_str("txn/durations-p99").unwrap().to_string(),
            "txn/durations-p99"
        );

        assert_eq!(MetricsName::from_str(""), Err(ParseError::Empty));
        assert_eq!(
            MetricsName::from_str("a=b"),
            Err(ParseError::InvalidGraphic('='))
        );
        assert_eq!(
            MetricsName::from_str("a b"),
            Err(ParseError::NotAlphaNumeric)
        );
    }
}
