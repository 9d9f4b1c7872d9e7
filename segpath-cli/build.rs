//! Build script for segpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("segpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and relate slash-separated paths")
        .long_about(
            "Command-line tool for normalizing slash-separated virtual paths and computing relative paths between them",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from this file instead of discovering one")
                .value_name("PATH")
                .global(true)
                .env("SEGPATH_CONFIG"),
        )
        .arg(
            Arg::new("base")
                .long("base")
                .help("Resolve every path within this base")
                .value_name("PATH")
                .global(true)
                .env("SEGPATH_BASE"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve segments into a canonical path")
                .long_about(
                    "Concatenate segments, drop '.' and let '..' remove the previous component",
                ),
            Command::new("relative")
                .about("Compute the relative path from one path to another")
                .long_about("Print the './'-prefixed path that leads from FROM to TO"),
            Command::new("relation")
                .about("Describe how two paths relate")
                .long_about(
                    "Report whether A is an ancestor of, a descendant of, the same as, or unrelated to B",
                ),
            Command::new("dirname").about("Print every component except the last"),
            Command::new("basename").about("Print the last component"),
            Command::new("extname").about("Print the extension of the last component"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main segpath.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("segpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
