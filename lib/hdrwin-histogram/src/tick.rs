/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use tokio::time::Instant;

/// Decides when the window ring should rotate.
///
/// There is no timer behind this, the owner asks it before each read that
/// needs an up to date windowed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickGate {
    interval: Duration,
}

impl TickGate {
    pub fn new(interval: Duration) -> Self {
        TickGate { interval }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant, last_rotation: Instant) -> bool {
        now.saturating_duration_since(last_rotation) >= self.interval
    }

    /// Number of whole intervals between `last_rotation` and `now`.
    pub fn elapsed_ticks(&self, now: Instant, last_rotation: Instant) -> u32 {
        let interval = self.interval.as_nanos();
        if interval == 0 {
            return 0;
        }
        let elapsed = now.saturating_duration_since(last_rotation).as_nanos();
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }
}
