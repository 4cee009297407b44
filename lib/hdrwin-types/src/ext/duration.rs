/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

pub trait DurationExt {
    /// Nanoseconds, saturating at `i64::MAX` (about 292 years).
    fn as_nanos_i64(&self) -> i64;
}

impl DurationExt for Duration {
    fn as_nanos_i64(&self) -> i64 {
        i64::try_from(self.as_nanos()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_nanos() {
        assert_eq!(Duration::from_millis(3).as_nanos_i64(), 3_000_000);
        assert_eq!(Duration::from_secs(10).as_nanos_i64(), 10_000_000_000);
        assert_eq!(Duration::MAX.as_nanos_i64(), i64::MAX);
    }
}
