/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeSet;
use std::time::Duration;

use hdrwin_types::ext::DurationExt;

use crate::{HistogramError, HistogramStats, MAX_LATENCY, Metadata, Quantile, WindowedHistogram};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistogramMetricsConfig {
    window: Duration,
    max_value: i64,
    sig_figs: u8,
    quantile_list: BTreeSet<Quantile>,
}

impl HistogramMetricsConfig {
    /// Latency settings with the given window.
    pub fn with_window(window: Duration) -> Self {
        HistogramMetricsConfig {
            window,
            max_value: MAX_LATENCY.as_nanos_i64(),
            sig_figs: 1,
            quantile_list: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    #[inline]
    pub fn set_max_value(&mut self, max: i64) {
        self.max_value = max;
    }

    #[inline]
    pub fn set_sig_figs(&mut self, sig_figs: u8) {
        self.sig_figs = sig_figs;
    }

    #[inline]
    pub fn set_quantile_list(&mut self, list: BTreeSet<Quantile>) {
        self.quantile_list = list;
    }

    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    #[inline]
    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    #[inline]
    pub fn sig_figs(&self) -> u8 {
        self.sig_figs
    }

    #[inline]
    pub fn quantile_list(&self) -> &BTreeSet<Quantile> {
        &self.quantile_list
    }

    pub fn build(&self, metadata: Metadata) -> Result<WindowedHistogram, HistogramError> {
        WindowedHistogram::new(metadata, self.window, self.max_value, self.sig_figs)
    }

    /// Stats holder for the configured quantiles, or the default ones if
    /// none is set.
    pub fn build_stats(&self) -> HistogramStats {
        if self.quantile_list.is_empty() {
            HistogramStats::default()
        } else {
            HistogramStats::with_quantiles(&self.quantile_list)
        }
    }
}

impl Default for HistogramMetricsConfig {
    fn default() -> Self {
        HistogramMetricsConfig::with_window(Duration::from_secs(60))
    }
}
