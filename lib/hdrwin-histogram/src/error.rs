/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use hdrhistogram::CreationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistogramError {
    #[error("max value should be positive, but got {0}")]
    InvalidMaxValue(i64),
    #[error("at least 2 window slots are needed, but got {0}")]
    TooFewWindowSlots(usize),
    #[error("window {0:?} is too short to be split into {1} slots")]
    ZeroWindow(Duration, usize),
    #[error("unable to create distribution: {0}")]
    Creation(#[from] CreationError),
}
