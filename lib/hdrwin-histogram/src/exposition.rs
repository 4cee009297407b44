/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use crate::Bar;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpositionBucket {
    pub cumulative_count: u64,
    pub upper_bound: f64,
}

/// Histogram in the shape expected by a Prometheus style collector.
///
/// Only non-empty buckets are kept. `sample_sum` is computed as the sum of
/// `upper_bound * count` over all buckets, so it overestimates the real sum
/// by at most one bucket width per sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistogramExposition {
    pub buckets: Vec<ExpositionBucket>,
    pub sample_count: u64,
    pub sample_sum: f64,
}

impl HistogramExposition {
    /// Encode bars given in ascending upper bound order.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut buckets = Vec::with_capacity(bars.len());
        let mut cum_count: u64 = 0;
        let mut sum: f64 = 0.0;

        for bar in bars {
            if bar.count == 0 {
                continue;
            }
            let upper_bound = bar.to as f64;
            sum += upper_bound * bar.count as f64;
            cum_count += bar.count;
            buckets.push(ExpositionBucket {
                cumulative_count: cum_count,
                upper_bound,
            });
        }

        HistogramExposition {
            buckets,
            sample_count: cum_count,
            sample_sum: sum,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Value at quantile `q` in `[0, 1]`, linearly interpolated inside the
    /// bucket the rank falls into. The lower bound of the first bucket is
    /// taken as 0. Returns 0 if there is no sample.
    pub fn value_at_quantile(&self, q: f64) -> f64 {
        let Some(last) = self.buckets.last() else {
            return 0.0;
        };
        if self.sample_count == 0 {
            return 0.0;
        }
        let q = if q.is_nan() { 0.0 } else { q.clamp(0.0, 1.0) };

        // +0.5 to round to the nearest rank, which matters for small counts
        let mut rank = (q * self.sample_count as f64 + 0.5) as u64;

        // there is no +Inf bucket, so leave the last one out of the search
        // and a failed search will land on it
        let searched = &self.buckets[..self.buckets.len() - 1];
        let b = searched.partition_point(|bucket| bucket.cumulative_count < rank);

        let bucket = &self.buckets[b];
        let mut bucket_start = 0.0;
        let bucket_end = bucket.upper_bound;
        let mut count = bucket.cumulative_count;
        if b > 0 {
            let prev = &self.buckets[b - 1];
            bucket_start = prev.upper_bound;
            count = count.saturating_sub(prev.cumulative_count);
            rank = rank.saturating_sub(prev.cumulative_count);
        }

        let v = bucket_start + (bucket_end - bucket_start) * (rank as f64 / count as f64);
        if !v.is_finite() {
            return 0.0;
        }
        v.min(last.upper_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(to: u64, count: u64) -> Bar {
        Bar { from: to, to, count }
    }

    #[test]
    fn encode_skip_empty() {
        let bars = [bar(1, 0), bar(2, 3), bar(4, 0), bar(8, 1), bar(16, 0)];
        let e = HistogramExposition::from_bars(&bars);
        assert_eq!(
            e.buckets,
            vec![
                ExpositionBucket {
                    cumulative_count: 3,
                    upper_bound: 2.0
                },
                ExpositionBucket {
                    cumulative_count: 4,
                    upper_bound: 8.0
                },
            ]
        );
        assert_eq!(e.sample_count, 4);
        assert_eq!(e.sample_sum, 2.0 * 3.0 + 8.0);
    }

    #[test]
    fn encode_nothing() {
        let e = HistogramExposition::from_bars(&[bar(1, 0), bar(2, 0)]);
        assert!(e.is_empty());
        assert!(e.buckets.is_empty());
        assert_eq!(e.sample_sum, 0.0);
        assert_eq!(e.value_at_quantile(0.5), 0.0);
        assert_eq!(e.value_at_quantile(1.0), 0.0);

        let e = HistogramExposition::default();
        assert_eq!(e.value_at_quantile(0.99), 0.0);
    }

    #[test]
    fn interpolated_quantile() {
        let e = HistogramExposition::from_bars(&[bar(10, 1), bar(20, 2), bar(40, 1)]);
        assert_eq!(e.sample_count, 4);

        assert_eq!(e.value_at_quantile(0.0), 0.0);
        assert_eq!(e.value_at_quantile(0.25), 10.0);
        assert_eq!(e.value_at_quantile(0.5), 15.0);
        assert_eq!(e.value_at_quantile(0.75), 20.0);
        assert_eq!(e.value_at_quantile(1.0), 40.0);
    }

    #[test]
    fn quantile_bounds() {
        let e = HistogramExposition::from_bars(&[bar(10, 1), bar(20, 2), bar(40, 1)]);
        assert_eq!(e.value_at_quantile(1.5), 40.0);
        assert_eq!(e.value_at_quantile(-1.0), 0.0);
        assert_eq!(e.value_at_quantile(f64::NAN), 0.0);
    }

    #[test]
    fn quantile_monotonic() {
        let e = HistogramExposition::from_bars(&[
            bar(3, 7),
            bar(5, 0),
            bar(12, 1),
            bar(100, 40),
            bar(1023, 2),
        ]);
        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = e.value_at_quantile(i as f64 / 1000.0);
            assert!(v >= prev, "q={} v={v} prev={prev}", i as f64 / 1000.0);
            prev = v;
        }
        assert_eq!(prev, 1023.0);
    }
}
