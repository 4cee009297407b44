/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::warn;

use crate::{BucketedDistribution, HistogramError};

/// A fixed ring of sub-window distributions.
///
/// Exactly one slot is the write target, the others hold older closed
/// sub-windows. Merging all of them approximates a sliding window.
pub struct WindowRing {
    slots: Vec<BucketedDistribution>,
    current: usize,
}

impl WindowRing {
    pub fn new(size: usize, max: u64, sig_figs: u8) -> Result<Self, HistogramError> {
        if size < 2 {
            return Err(HistogramError::TooFewWindowSlots(size));
        }
        let mut slots = Vec::with_capacity(size);
        for _ in 0..size {
            slots.push(BucketedDistribution::new(max, sig_figs)?);
        }
        Ok(WindowRing { slots, current: 0 })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn current(&self) -> &BucketedDistribution {
        &self.slots[self.current]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut BucketedDistribution {
        &mut self.slots[self.current]
    }

    /// Close the current sub-window and make the oldest one current again,
    /// after clearing it.
    pub fn rotate(&mut self) {
        self.current = (self.current + 1) % self.slots.len();
        self.slots[self.current].reset();
    }

    /// Sum of all slots into a new distribution. The slots are not touched.
    pub fn merge(&self) -> BucketedDistribution {
        let mut merged = self.slots[0].empty_like();
        for slot in &self.slots {
            if let Err(e) = merged.merge(slot) {
                warn!("failed to merge window slot: {e}");
            }
        }
        merged
    }
}
