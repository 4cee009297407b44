/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use hdrwin_histogram::{Metadata, Unit};
use hdrwin_types::metrics::MetricsName;

pub fn as_metrics_name(v: &Yaml) -> anyhow::Result<MetricsName> {
    if let Yaml::String(s) = v {
        let name = MetricsName::from_str(s).map_err(|e| anyhow!("invalid metrics name: {e}"))?;
        Ok(name)
    } else {
        Err(anyhow!(
            "yaml value type for 'metrics name' should be 'string'"
        ))
    }
}

pub fn as_metrics_unit(v: &Yaml) -> anyhow::Result<Unit> {
    if let Yaml::String(s) = v {
        Unit::from_str(s).map_err(|_| anyhow!("unsupported metrics unit {s}"))
    } else {
        Err(anyhow!(
            "yaml value type for 'metrics unit' should be 'string'"
        ))
    }
}

pub fn as_histogram_metadata(value: &Yaml) -> anyhow::Result<Metadata> {
    match value {
        Yaml::Hash(map) => {
            let v = crate::hash_get_required(map, "name")?;
            let name = as_metrics_name(v).context("invalid value for key name")?;
            let mut metadata = Metadata::new(name);
            crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
                "name" => Ok(()),
                "help" => {
                    metadata.help = crate::value::as_string(v)?;
                    Ok(())
                }
                "unit" => {
                    metadata.unit = as_metrics_unit(v)?;
                    Ok(())
                }
                _ => Err(anyhow!("invalid key {k}")),
            })?;
            Ok(metadata)
        }
        Yaml::String(_) => {
            let name = as_metrics_name(value)?;
            Ok(Metadata::new(name))
        }
        _ => Err(anyhow!(
            "yaml value type for 'histogram metadata' should be 'map' or 'string'"
        )),
    }
}
