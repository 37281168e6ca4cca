// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! End-to-end image source generation from build tree inputs.

use std::path::PathBuf;

use crate::error::{ItsError, Result};
use crate::its::ImageSource;
use crate::kconfig::read_text_base;
use crate::overlay::{board_object, discover_overlays, StringsExtractor};

/// Default Kconfig output file.
pub const DEFAULT_CONFIG: &str = ".config";

/// Default directory holding the compiled device trees and overlays.
pub const DEFAULT_DTS_DIR: &str = "arch/arm/dts";

/// Inputs for one generation run.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Board name used in the firmware description.
    pub board: String,
    /// Device tree paths; the first one is the default configuration.
    pub dtbs: Vec<String>,
    /// Kconfig file holding `CONFIG_SYS_TEXT_BASE`.
    pub config: PathBuf,
    /// Board subdirectory under `board/`.
    pub board_dir: String,
    /// Directory the overlays must exist in.
    pub dts_dir: PathBuf,
}

impl GenerateOptions {
    pub fn new(board: impl Into<String>, dtbs: Vec<String>, board_dir: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            dtbs,
            config: PathBuf::from(DEFAULT_CONFIG),
            board_dir: board_dir.into(),
            dts_dir: PathBuf::from(DEFAULT_DTS_DIR),
        }
    }
}

/// Collect all inputs and build the image source.
pub fn generate(opts: &GenerateOptions, extractor: &dyn StringsExtractor) -> Result<ImageSource> {
    if opts.dtbs.is_empty() {
        return Err(ItsError::EmptyDeviceTreeList);
    }

    let load_address = read_text_base(&opts.config)?;
    let object = board_object(&opts.board_dir);
    let overlays = discover_overlays(extractor, &object, &opts.dts_dir)?;
    log::debug!(
        "board {}: {} device tree(s), {} overlay(s)",
        opts.board,
        opts.dtbs.len(),
        overlays.len()
    );

    ImageSource::new(&opts.board, load_address, &opts.dtbs, overlays)
}
