// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Device-tree overlay discovery.
//!
//! Board code names the overlays it applies as string literals, so they end
//! up in the board's `built-in.o`. Running `strings` over that object and
//! keeping the lines that end in `.dtbo` recovers the list. Candidates that
//! were not built into the DTS directory are dropped with a warning.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ItsError, Result};

/// File suffix of a compiled device-tree overlay.
pub const OVERLAY_SUFFIX: &str = ".dtbo";

/// Default text extraction program.
pub const DEFAULT_STRINGS: &str = "strings";

/// Extracts printable strings from an object file.
pub trait StringsExtractor {
    /// Return the extracted text, one string per line.
    fn extract(&self, object: &Path) -> Result<String>;
}

/// Runs an external `strings`-compatible program.
#[derive(Clone, Debug)]
pub struct StringsTool {
    program: String,
}

impl StringsTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for StringsTool {
    fn default() -> Self {
        Self::new(DEFAULT_STRINGS)
    }
}

impl StringsExtractor for StringsTool {
    fn extract(&self, object: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(object)
            .output()
            .map_err(|source| ItsError::StringsSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ItsError::StringsFailed {
                program: self.program.clone(),
                object: object.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Path of the board object that references the overlays.
pub fn board_object(board_dir: &str) -> PathBuf {
    Path::new("board").join(board_dir).join("built-in.o")
}

/// Pick overlay file names out of extracted strings, in order.
pub fn scan_overlays(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.ends_with(OVERLAY_SUFFIX))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Find the overlays referenced by `object` that exist in `dts_dir`.
pub fn discover_overlays(
    extractor: &dyn StringsExtractor,
    object: &Path,
    dts_dir: &Path,
) -> Result<Vec<String>> {
    let output = extractor.extract(object)?;
    let candidates = scan_overlays(&output);
    log::debug!(
        "{} overlay candidate(s) in {}",
        candidates.len(),
        object.display()
    );

    let mut overlays = Vec::with_capacity(candidates.len());
    for name in candidates {
        // Rooted names would make `join` escape the DTS directory.
        if !Path::new(&name).has_root() && dts_dir.join(&name).is_file() {
            overlays.push(name);
        } else {
            log::warn!("cannot find {}. removing from its!", name);
        }
    }

    Ok(overlays)
}
