/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicU64, Ordering};

use portable_atomic::AtomicF64;

use crate::{BucketedDistribution, Quantile};

pub struct HistogramQuantileStats {
    quantile: Quantile,
    value: AtomicU64,
}

impl HistogramQuantileStats {
    fn new(quantile: Quantile) -> Self {
        HistogramQuantileStats {
            quantile,
            value: AtomicU64::new(0),
        }
    }
}

/// Last published summary of a distribution, readable without taking the
/// histogram lock.
pub struct HistogramStats {
    count: AtomicU64,
    min: AtomicU64,
    max: AtomicU64,
    mean: AtomicF64,
    quantile: Vec<HistogramQuantileStats>,
}

impl HistogramStats {
    pub fn new() -> Self {
        HistogramStats {
            count: AtomicU64::new(0),
            min: AtomicU64::new(0),
            max: AtomicU64::new(0),
            mean: AtomicF64::new(0.0_f64),
            quantile: Vec::with_capacity(8),
        }
    }

    pub fn with_quantiles<'a, T>(quantiles: T) -> Self
    where
        T: IntoIterator<Item = &'a Quantile>,
    {
        let mut stats = HistogramStats::new();
        for q in quantiles {
            stats.quantile.push(HistogramQuantileStats::new(q.clone()));
        }
        stats
    }

    pub fn with_quantile(mut self, quantile: Quantile) -> Self {
        self.quantile.push(HistogramQuantileStats::new(quantile));
        self
    }

    pub fn update(&self, dist: &BucketedDistribution) {
        self.count.store(dist.total_count(), Ordering::Relaxed);
        self.min.store(dist.min(), Ordering::Relaxed);
        self.max.store(dist.max(), Ordering::Relaxed);
        self.mean.store(dist.mean(), Ordering::Relaxed);
        for q in &self.quantile {
            q.value.store(
                dist.value_at_quantile(q.quantile.value()),
                Ordering::Relaxed,
            );
        }
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn foreach_stat<F>(&self, mut call: F)
    where
        F: FnMut(Option<f64>, &str, f64),
    {
        let count = self.count.load(Ordering::Relaxed);
        call(None, "count", count as f64);
        let min = self.min.load(Ordering::Relaxed);
        call(None, "min", min as f64);
        let max = self.max.load(Ordering::Relaxed);
        call(None, "max", max as f64);
        let mean = self.mean.load(Ordering::Relaxed);
        call(None, "mean", mean);
        for q in &self.quantile {
            let v = q.value.load(Ordering::Relaxed);
            call(Some(q.quantile.value()), q.quantile.as_str(), v as f64);
        }
    }
}

impl Default for HistogramStats {
    fn default() -> Self {
        HistogramStats::new()
            .with_quantile(Quantile::PCT50)
            .with_quantile(Quantile::PCT80)
            .with_quantile(Quantile::PCT90)
            .with_quantile(Quantile::PCT95)
            .with_quantile(Quantile::PCT99)
    }
}
