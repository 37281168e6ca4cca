// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! FIT image source generator for K3 boards.
//!
//! Usage:
//!   k3fit-gen --deps
//!   BOARDDIR=ti/am65x k3fit-gen am65x k3-am654-base-board.dtb > u-boot.its

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // `--deps` wins even over arguments clap would reject.
    if cli::wants_deps(std::env::args_os().skip(1)) {
        commands::deps()?;
        return Ok(ExitCode::SUCCESS);
    }

    let args = cli::Cli::parse();
    cli::run(args)
}
