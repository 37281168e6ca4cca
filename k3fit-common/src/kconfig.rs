// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! U-Boot text base lookup in the Kconfig output (`.config`).

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{ItsError, Result};

/// Kconfig symbol holding the U-Boot load address.
pub const TEXT_BASE_KEY: &str = "CONFIG_SYS_TEXT_BASE=";

/// Load address of the U-Boot firmware node.
///
/// The value is checked to be an integer literal but is kept as written,
/// so `0x80800000` stays `0x80800000` in the generated document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadAddress {
    raw: String,
    value: u64,
}

impl LoadAddress {
    /// Validate a raw Kconfig value.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || ItsError::InvalidLoadAddress {
            value: raw.to_owned(),
        };
        let (digits, radix) = split_radix(raw);
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(invalid());
        }
        let value = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;

        Ok(Self {
            raw: raw.to_owned(),
            value,
        })
    }

    /// The value exactly as it appeared in the configuration.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric value of the address.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for LoadAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_radix(value: &str) -> (&str, u32) {
    if let Some(rest) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        (rest, 16)
    } else if let Some(rest) = value.strip_prefix("0b").or_else(|| value.strip_prefix("0B")) {
        (rest, 2)
    } else if value.len() > 1 && value.starts_with('0') {
        (&value[1..], 8)
    } else {
        (value, 10)
    }
}

/// Find the raw `CONFIG_SYS_TEXT_BASE` value in `.config` contents.
///
/// The first line containing the key wins; the value runs to the end of
/// that line.
pub fn parse_text_base(contents: &str) -> Option<&str> {
    contents.lines().find_map(|line| {
        line.find(TEXT_BASE_KEY)
            .map(|pos| line[pos + TEXT_BASE_KEY.len()..].trim_end())
    })
}

/// Read and validate the load address from a Kconfig file.
pub fn read_text_base(path: &Path) -> Result<LoadAddress> {
    let bytes = fs::read(path).map_err(|source| ItsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = String::from_utf8_lossy(&bytes);

    let raw = parse_text_base(&contents).ok_or_else(|| ItsError::MissingTextBase {
        path: path.to_path_buf(),
    })?;

    let addr = LoadAddress::parse(raw)?;
    log::debug!(
        "{}{} ({:#x}) from {}",
        TEXT_BASE_KEY,
        addr,
        addr.value(),
        path.display()
    );
    Ok(addr)
}
