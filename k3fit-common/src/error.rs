// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types for image source generation.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that can occur while generating an image source.
#[derive(Debug, thiserror::Error)]
pub enum ItsError {
    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Kconfig file has no `CONFIG_SYS_TEXT_BASE` line.
    #[error("CONFIG_SYS_TEXT_BASE not found in {}", path.display())]
    MissingTextBase { path: PathBuf },

    /// `CONFIG_SYS_TEXT_BASE` is not an integer literal.
    #[error("invalid load address {value:?}")]
    InvalidLoadAddress { value: String },

    /// No device tree was given.
    #[error("at least one device tree is required")]
    EmptyDeviceTreeList,

    /// The strings program could not be started.
    #[error("failed to run {program}: {source}")]
    StringsSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The strings program exited with an error.
    #[error("{program} {} failed ({status}): {stderr}", object.display())]
    StringsFailed {
        program: String,
        object: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

/// Result type for image source operations.
pub type Result<T> = std::result::Result<T, ItsError>;
