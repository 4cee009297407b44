/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use yaml_rust::Yaml;

pub fn as_u8(v: &Yaml) -> anyhow::Result<u8> {
    match v {
        Yaml::String(s) => Ok(u8::from_str(s)?),
        Yaml::Integer(i) => Ok(u8::try_from(*i)?),
        _ => Err(anyhow!(
            "yaml value type for 'u8' should be 'string' or 'integer'"
        )),
    }
}

pub fn as_i64(v: &Yaml) -> anyhow::Result<i64> {
    match v {
        Yaml::String(s) => Ok(i64::from_str(s)?),
        Yaml::Integer(i) => Ok(*i),
        _ => Err(anyhow!(
            "yaml value type for 'i64' should be 'string' or 'integer'"
        )),
    }
}

pub fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_u8_ok() {
        let v = yaml_str!("3");
        assert_eq!(as_u8(&v).unwrap(), 3);

        let v = Yaml::Integer(255);
        assert_eq!(as_u8(&v).unwrap(), 255);
    }

    #[test]
    fn as_u8_err() {
        let v = Yaml::Integer(256);
        assert!(as_u8(&v).is_err());

        let v = Yaml::Integer(-1);
        assert!(as_u8(&v).is_err());

        let v = Yaml::Real("1.5".to_string());
        assert!(as_u8(&v).is_err());
    }

    #[test]
    fn as_i64_ok() {
        let v = yaml_str!("-42");
        assert_eq!(as_i64(&v).unwrap(), -42);

        let v = Yaml::Integer(10_000_000_000);
        assert_eq!(as_i64(&v).unwrap(), 10_000_000_000);
    }

    #[test]
    fn as_i64_err() {
        let v = yaml_str!("ten");
        assert!(as_i64(&v).is_err());

        let v = Yaml::Boolean(true);
        assert!(as_i64(&v).is_err());
    }

    #[test]
    fn as_string_ok() {
        let v = yaml_str!("abc");
        assert_eq!(as_string(&v).unwrap(), "abc");

        let v = Yaml::Integer(-123);
        assert_eq!(as_string(&v).unwrap(), "-123");

        let v = Yaml::Real("123.0".into());
        assert_eq!(as_string(&v).unwrap(), "123.0");

        let v = Yaml::Null;
        assert!(as_string(&v).is_err());
    }
}
