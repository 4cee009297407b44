/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::HistogramError;

mod distribution;
pub use distribution::{Bar, BucketedDistribution};

mod tick;
pub use tick::TickGate;

mod ring;
pub use ring::WindowRing;

mod exposition;
pub use exposition::{ExpositionBucket, HistogramExposition};

mod metadata;
pub use metadata::{Metadata, MetricType, Unit};

mod windowed;
pub use windowed::{MAX_LATENCY, WINDOW_WRAP_NUM, WindowedHistogram};

mod stats;
pub use stats::HistogramStats;

mod quantile;
pub use quantile::{Quantile, QuantileParseError};

mod config;
pub use config::HistogramMetricsConfig;
