/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, trace};
use tokio::time::Instant;

use hdrwin_types::ext::DurationExt;

use crate::{
    BucketedDistribution, HistogramError, HistogramExposition, HistogramStats, Metadata,
    MetricType, TickGate, WindowRing,
};

/// Number of sub-windows the sliding window is split into.
pub const WINDOW_WRAP_NUM: usize = 2;

/// Max value tracked by latency histograms. Larger values are recorded as
/// this value.
pub const MAX_LATENCY: Duration = Duration::from_secs(10);

struct Locked {
    cumulative: BucketedDistribution,
    ring: WindowRing,
    last_rotation: Instant,
}

impl Locked {
    fn record(&mut self, v: u64, max: u64) {
        if self.ring.current_mut().record(v).is_err() {
            let _ = self.ring.current_mut().record(max);
        }
        if self.cumulative.record(v).is_err() {
            let _ = self.cumulative.record(max);
        }
    }
}

/// A histogram with two views on the recorded values: a cumulative one
/// that is never reset, and a windowed one that only keeps roughly the
/// values recorded during the last window.
///
/// The window is a ring of sub-window distributions. The ring is rotated
/// lazily by the read operations that need a windowed view, there is no
/// background task. Each sub-window covers `window / slots`, so a windowed
/// read covers between `window * (slots - 1) / slots` and `window`.
///
/// Values are clamped into `[0, max]`, negative values included.
pub struct WindowedHistogram {
    metadata: Metadata,
    max: u64,
    sig_figs: u8,
    gate: TickGate,
    locked: Mutex<Locked>,
}

impl WindowedHistogram {
    /// Create a histogram whose windowed view covers about `window`, split
    /// into [`WINDOW_WRAP_NUM`] sub-windows. Both views track values in
    /// `[0, max]` with `sig_figs` significant decimal digits.
    pub fn new(
        metadata: Metadata,
        window: Duration,
        max: i64,
        sig_figs: u8,
    ) -> Result<Self, HistogramError> {
        WindowedHistogram::with_window_slots(metadata, window, WINDOW_WRAP_NUM, max, sig_figs)
    }

    pub fn with_window_slots(
        metadata: Metadata,
        window: Duration,
        slots: usize,
        max: i64,
        sig_figs: u8,
    ) -> Result<Self, HistogramError> {
        let max = u64::try_from(max)
            .ok()
            .filter(|v| *v > 0)
            .ok_or(HistogramError::InvalidMaxValue(max))?;
        if slots < 2 {
            return Err(HistogramError::TooFewWindowSlots(slots));
        }
        let sub_window = u32::try_from(slots)
            .ok()
            .and_then(|n| window.checked_div(n))
            .filter(|d| !d.is_zero())
            .ok_or(HistogramError::ZeroWindow(window, slots))?;

        let cumulative = BucketedDistribution::new(max, sig_figs)?;
        let ring = WindowRing::new(slots, max, sig_figs)?;
        debug!(
            "new windowed histogram {}: window {window:?} in {slots} slots, max {max}, sig figs {sig_figs}",
            metadata.name
        );

        Ok(WindowedHistogram {
            metadata,
            max,
            sig_figs,
            gate: TickGate::new(sub_window),
            locked: Mutex::new(Locked {
                cumulative,
                ring,
                last_rotation: Instant::now(),
            }),
        })
    }

    /// Latency histogram in nanoseconds, clamped to [`MAX_LATENCY`] and
    /// recorded with one significant digit, i.e. errors of less than 10ms
    /// at 100ms and less than 6s at 60s.
    pub fn new_latency(metadata: Metadata, window: Duration) -> Result<Self, HistogramError> {
        WindowedHistogram::new(metadata, window, MAX_LATENCY.as_nanos_i64(), 1)
    }

    fn lock(&self) -> MutexGuard<'_, Locked> {
        // the state is consistent after every statement, so a panic in
        // another thread leaves nothing half done
        self.locked.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn maybe_tick_locked(&self, locked: &mut Locked, now: Instant) {
        if !self.gate.is_due(now, locked.last_rotation) {
            return;
        }
        let ticks = self.gate.elapsed_ticks(now, locked.last_rotation);
        // after a full round every slot is empty, more rotations change nothing
        let rotations = (ticks as usize).min(locked.ring.size());
        for _ in 0..rotations {
            locked.ring.rotate();
        }
        locked.last_rotation += self.gate.interval() * ticks;
        if ticks > 1 {
            debug!(
                "histogram {} skipped {} sub-windows without being read",
                self.metadata.name,
                ticks - 1
            );
        }
    }

    #[inline]
    pub fn max_value(&self) -> u64 {
        self.max
    }

    #[inline]
    pub fn sig_figs(&self) -> u8 {
        self.sig_figs
    }

    #[inline]
    pub fn sub_window(&self) -> Duration {
        self.gate.interval()
    }

    /// The metadata, with the metric type set.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = self.metadata.clone();
        metadata.metric_type = MetricType::Histogram;
        metadata
    }

    /// Record a value. Values out of `[0, max]` are recorded as `max`.
    pub fn record(&self, v: i64) {
        let value = match u64::try_from(v) {
            Ok(u) if u <= self.max => u,
            _ => {
                trace!(
                    "histogram {}: value {v} clamped to {}",
                    self.metadata.name, self.max
                );
                self.max
            }
        };

        let mut locked = self.lock();
        locked.record(value, self.max);
    }

    /// Record a duration as nanoseconds.
    pub fn record_duration(&self, d: Duration) {
        self.record(d.as_nanos_i64());
    }

    /// Rotate the window ring if a sub-window has passed, then call `f`.
    pub fn inspect<F>(&self, f: F)
    where
        F: FnOnce(&Self),
    {
        {
            let mut locked = self.lock();
            self.maybe_tick_locked(&mut locked, Instant::now());
        }
        f(self)
    }

    /// When the next rotation is due. Reads after this point will rotate.
    pub fn next_tick(&self) -> Instant {
        let locked = self.lock();
        locked.last_rotation + self.gate.interval()
    }

    /// Rotate the window ring now, whatever the time.
    pub fn tick(&self) {
        let mut locked = self.lock();
        locked.ring.rotate();
        locked.last_rotation = Instant::now();
    }

    /// Count and approximate sum of all values ever recorded.
    pub fn total(&self) -> (u64, f64) {
        let locked = self.lock();
        let count = locked.cumulative.total_count();
        (count, count as f64 * locked.cumulative.mean())
    }

    pub fn min(&self) -> u64 {
        self.lock().cumulative.min()
    }

    /// The highest value equivalent to the largest recorded one.
    pub fn max(&self) -> u64 {
        self.lock().cumulative.max()
    }

    pub fn mean(&self) -> f64 {
        self.lock().cumulative.mean()
    }

    /// Count and approximate sum of the values in the current window.
    pub fn total_windowed(&self) -> (u64, f64) {
        let mut locked = self.lock();
        self.maybe_tick_locked(&mut locked, Instant::now());
        let merged = locked.ring.merge();
        let count = merged.total_count();
        (count, count as f64 * merged.mean())
    }

    pub fn mean_windowed(&self) -> f64 {
        let mut locked = self.lock();
        self.maybe_tick_locked(&mut locked, Instant::now());
        locked.ring.merge().mean()
    }

    pub fn to_exposition(&self) -> HistogramExposition {
        let mut locked = self.lock();
        self.maybe_tick_locked(&mut locked, Instant::now());
        HistogramExposition::from_bars(&locked.cumulative.bars())
    }

    pub fn to_exposition_windowed(&self) -> HistogramExposition {
        let mut locked = self.lock();
        self.maybe_tick_locked(&mut locked, Instant::now());
        HistogramExposition::from_bars(&locked.ring.merge().bars())
    }

    /// Value at quantile `q` of an exposition previously taken with
    /// [`Self::to_exposition_windowed`].
    pub fn value_at_quantile_windowed(&self, q: f64, window: &HistogramExposition) -> f64 {
        window.value_at_quantile(q)
    }

    /// Value at quantile `q` of the current window.
    pub fn quantile_windowed(&self, q: f64) -> f64 {
        self.to_exposition_windowed().value_at_quantile(q)
    }

    /// Publish min, max, mean and quantiles of the current window.
    pub fn update_windowed_stats(&self, stats: &HistogramStats) {
        let mut locked = self.lock();
        self.maybe_tick_locked(&mut locked, Instant::now());
        stats.update(&locked.ring.merge());
    }
}
