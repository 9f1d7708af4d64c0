// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

mod decode;
mod extract;

use clap::{ArgAction, Parser, Subcommand};
use ibm_vpd::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the result as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Reject records with an invalid checksum.
    #[arg(long, global = true)]
    strict: bool,

    /// Instance number used in the attribute names.
    #[arg(long, global = true, default_value_t = 0)]
    unit: u32,

    /// Increase the verbosity of the logs (can be repeated).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Read the VPD record from the firmware memory of the running system.
    Extract,
    /// Decode the VPD record stored in a file.
    Decode {
        /// Dump of the firmware memory.
        input_file: PathBuf,
        /// Physical address of the first byte of the file.
        #[arg(long, default_value = "0xF0000", value_parser = parse_address)]
        base: u64,
        /// The file holds the VPD record itself instead of a memory dump.
        #[arg(long)]
        raw: bool,
    },
}

fn parse_address(s: &str) -> Result<u64, String> {
    let address = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    address.map_err(|err| format!("invalid address `{s}`: {err}"))
}

fn print(area: &VpdArea, json: bool, unit: u32) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(area)?);
    } else {
        for attribute in area.vpd.attributes(unit) {
            println!("{}: {}", attribute.name, attribute.value);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let policy = if cli.strict {
        ChecksumPolicy::Reject
    } else {
        ChecksumPolicy::Warn
    };

    let result = match &cli.command {
        Command::Extract => extract::extract(policy),
        Command::Decode {
            input_file,
            base,
            raw,
        } => decode::decode(input_file, *base, *raw, policy),
    };

    let area = match result {
        Ok(area) => area,
        Err(err) => {
            log::error!("Failed to decode VPD: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = print(&area, cli.json, cli.unit) {
        log::error!("Failed to print VPD: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
