/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod histogram;
mod metrics;
mod primary;

pub use histogram::{as_histogram_metrics_config, as_quantile, as_quantile_list};
pub use metrics::{as_histogram_metadata, as_metrics_name, as_metrics_unit};
pub use primary::{as_i64, as_string, as_u8};
