/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use hdrwin_types::metrics::MetricsName;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetricType {
    #[default]
    Unset,
    Histogram,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Unset,
    Count,
    Bytes,
    Nanoseconds,
    Seconds,
    Percent,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Unset => "",
            Unit::Count => "count",
            Unit::Bytes => "bytes",
            Unit::Nanoseconds => "nanoseconds",
            Unit::Seconds => "seconds",
            Unit::Percent => "percent",
        }
    }
}

impl FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "unset" => Ok(Unit::Unset),
            "count" => Ok(Unit::Count),
            "bytes" | "byte" => Ok(Unit::Bytes),
            "nanoseconds" | "nanosecond" | "ns" => Ok(Unit::Nanoseconds),
            "seconds" | "second" | "s" => Ok(Unit::Seconds),
            "percent" | "%" => Ok(Unit::Percent),
            _ => Err(()),
        }
    }
}

/// Identity of a metric. Not interpreted by the histogram itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    pub name: MetricsName,
    pub help: String,
    pub unit: Unit,
    pub metric_type: MetricType,
}

impl Metadata {
    pub fn new(name: MetricsName) -> Self {
        Metadata {
            name,
            ..Default::default()
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_str() {
        assert_eq!(Unit::from_str("NS"), Ok(Unit::Nanoseconds));
        assert_eq!(Unit::from_str("bytes"), Ok(Unit::Bytes));
        assert_eq!(Unit::from_str(""), Ok(Unit::Unset));
        assert!(Unit::from_str("furlong").is_err());

        for u in [Unit::Count, Unit::Bytes, Unit::Nanoseconds, Unit::Seconds] {
            assert_eq!(Unit::from_str(u.as_str()), Ok(u));
        }
    }

    #[test]
    fn builder() {
        let m = Metadata::new(MetricsName::from_str("sql.service.latency").unwrap())
            .with_help("Latency of SQL statement execution")
            .with_unit(Unit::Nanoseconds);
        assert_eq!(m.name.as_str(), "sql.service.latency");
        assert_eq!(m.unit, Unit::Nanoseconds);
        assert_eq!(m.metric_type, MetricType::Unset);
    }
}
