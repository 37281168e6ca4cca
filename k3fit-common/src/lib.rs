// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! FIT image source generation for K3 boards.
//!
//! The generated `.its` packages `u-boot-nodtb.bin` with the board's device
//! trees and the overlays its board code references:
//! - `kconfig`: load address lookup in `.config`
//! - `overlay`: overlay discovery through `strings` on the board object
//! - `its`: document fragments and the top-level template
//! - `generate`: the pipeline tying them together

pub mod error;
pub mod generate;
pub mod its;
pub mod kconfig;
pub mod overlay;

// Re-export commonly used types
pub use error::{ItsError, Result};
pub use generate::{generate, GenerateOptions, DEFAULT_CONFIG, DEFAULT_DTS_DIR};
pub use its::{ImageSource, DEPS, FIRMWARE_IMAGE};
pub use kconfig::LoadAddress;
pub use overlay::{StringsExtractor, StringsTool, DEFAULT_STRINGS};
