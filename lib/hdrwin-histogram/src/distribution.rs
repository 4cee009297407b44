/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use hdrhistogram::{AdditionError, CreationError, Histogram, RecordError};

/// One bucket of the logarithmic decomposition, covering `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub from: u64,
    pub to: u64,
    pub count: u64,
}

/// Bounded precision distribution over `[0, max]`.
///
/// All bucket math is done by [`hdrhistogram::Histogram`], this type only
/// fixes the counter type and exposes the operations the windowed histogram
/// needs.
pub struct BucketedDistribution {
    inner: Histogram<u64>,
}

impl BucketedDistribution {
    pub fn new(max: u64, sig_figs: u8) -> Result<Self, CreationError> {
        let inner = Histogram::new_with_max(max, sig_figs)?;
        Ok(BucketedDistribution { inner })
    }

    /// An empty distribution with the same range and precision.
    pub fn empty_like(&self) -> Self {
        BucketedDistribution {
            inner: Histogram::new_from(&self.inner),
        }
    }

    #[inline]
    pub fn record(&mut self, v: u64) -> Result<(), RecordError> {
        self.inner.record(v)
    }

    /// Add all counts of `other` into this distribution, bucket by bucket.
    #[inline]
    pub fn merge(&mut self, other: &BucketedDistribution) -> Result<(), AdditionError> {
        self.inner.add(&other.inner)
    }

    #[inline]
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[inline]
    pub fn total_count(&self) -> u64 {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn min(&self) -> u64 {
        self.inner.min()
    }

    #[inline]
    pub fn max(&self) -> u64 {
        self.inner.max()
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    #[inline]
    pub fn value_at_quantile(&self, q: f64) -> u64 {
        self.inner.value_at_quantile(q)
    }

    /// Largest value that lands in the same bucket as `v`.
    #[inline]
    pub fn highest_equivalent(&self, v: u64) -> u64 {
        self.inner.highest_equivalent(v)
    }

    /// Every bucket in ascending order, empty ones included.
    pub fn bars(&self) -> Vec<Bar> {
        self.inner
            .iter_all()
            .map(|v| {
                let to = v.value_iterated_to();
                Bar {
                    from: self.inner.lowest_equivalent(to),
                    to,
                    count: v.count_since_last_iteration(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_in_range() {
        let mut d = BucketedDistribution::new(1000, 1).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.min(), 0);
        assert_eq!(d.mean(), 0.0);

        d.record(0).unwrap();
        d.record(10).unwrap();
        d.record(1000).unwrap();
        assert_eq!(d.total_count(), 3);
        assert_eq!(d.min(), 0);
        assert_eq!(d.max(), d.highest_equivalent(1000));
    }

    #[test]
    fn record_out_of_range() {
        let mut d = BucketedDistribution::new(1000, 1).unwrap();
        assert!(d.record(u64::MAX).is_err());
        assert_eq!(d.total_count(), 0);
    }

    #[test]
    fn merge_sums_counts() {
        let mut a = BucketedDistribution::new(1000, 1).unwrap();
        let mut b = a.empty_like();
        a.record(5).unwrap();
        b.record(5).unwrap();
        b.record(700).unwrap();

        let mut m = a.empty_like();
        m.merge(&a).unwrap();
        m.merge(&b).unwrap();
        assert_eq!(m.total_count(), 3);
        assert_eq!(a.total_count(), 1);
        assert_eq!(b.total_count(), 2);
    }

    #[test]
    fn bars_ascending() {
        let mut d = BucketedDistribution::new(1000, 1).unwrap();
        d.record(3).unwrap();
        d.record(3).unwrap();
        d.record(900).unwrap();

        let bars = d.bars();
        assert!(bars.windows(2).all(|w| w[0].to < w[1].to));
        assert!(bars.iter().all(|b| b.from <= b.to));
        assert_eq!(bars.iter().map(|b| b.count).sum::<u64>(), 3);
        assert!(bars.iter().any(|b| b.to == 3 && b.count == 2));

        d.reset();
        assert!(d.is_empty());
        assert_eq!(d.bars().iter().map(|b| b.count).sum::<u64>(), 0);
    }
}
