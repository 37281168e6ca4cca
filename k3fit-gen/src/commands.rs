// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use k3fit_common::{GenerateOptions, StringsExtractor, DEPS};

/// Print the build targets the image source depends on.
pub fn deps() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for dep in DEPS {
        writeln!(stdout, "{}", dep)?;
    }
    Ok(())
}

/// Generate the image source and write it to `output` or stdout.
pub fn generate(
    opts: &GenerateOptions,
    strings: &dyn StringsExtractor,
    output: Option<&Path>,
) -> Result<()> {
    let its = k3fit_common::generate(opts, strings)
        .with_context(|| format!("Failed to generate image source for {}", opts.board))?;

    match output {
        Some(path) => {
            log::debug!("writing image source to {}", path.display());
            fs::write(path, format!("{}\n", its))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", its)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
