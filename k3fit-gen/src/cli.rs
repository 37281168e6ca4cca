// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};

use k3fit_common::{
    GenerateOptions, StringsTool, DEFAULT_CONFIG, DEFAULT_DTS_DIR, DEFAULT_STRINGS,
};

use crate::commands;

/// Exit status when called without arguments.
pub const USAGE_EXIT: u8 = 255;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "k3fit-gen")]
#[command(about = "Generate a FIT image source for a K3 board")]
#[command(override_usage = "k3fit-gen <BOARD> <DTB> [<DTB> ...]\n       k3fit-gen --deps")]
pub struct Cli {
    /// Print the build targets the image source depends on and exit
    #[arg(long)]
    pub deps: bool,

    /// Board name
    #[arg(value_name = "BOARD")]
    pub board: Option<String>,

    /// Device tree blobs (the first one is the default configuration)
    #[arg(value_name = "DTB")]
    pub dtbs: Vec<String>,

    /// Kconfig file holding CONFIG_SYS_TEXT_BASE
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Board directory under board/ (e.g., ti/am65x)
    #[arg(long, env = "BOARDDIR", value_name = "DIR")]
    pub board_dir: Option<String>,

    /// Directory containing the compiled overlays
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DTS_DIR)]
    pub dts_dir: PathBuf,

    /// Program used to extract strings from the board object
    #[arg(long, env = "STRINGS", value_name = "PROG", default_value = DEFAULT_STRINGS)]
    pub strings: String,

    /// Write the image source to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Whether `--deps` appears among the raw arguments (program name excluded).
pub fn wants_deps<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().any(|arg| arg.as_ref() == "--deps")
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.deps {
        commands::deps()?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(board) = cli.board else {
        println!("{}", Cli::command().render_usage());
        return Ok(ExitCode::from(USAGE_EXIT));
    };

    if cli.dtbs.is_empty() {
        bail!("no device tree given for board {}", board);
    }
    let Some(board_dir) = cli.board_dir else {
        bail!("board directory not set (use --board-dir or BOARDDIR)");
    };

    let mut opts = GenerateOptions::new(board, cli.dtbs, board_dir);
    opts.config = cli.config;
    opts.dts_dir = cli.dts_dir;
    let strings = StringsTool::new(cli.strings);

    commands::generate(&opts, &strings, cli.output.as_deref())?;
    Ok(ExitCode::SUCCESS)
}
