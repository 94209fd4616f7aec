//! Command line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::hash::DigestAlgorithm;

#[derive(Debug, Parser)]
#[command(name = "shazam", version, about = "Compute and verify file checksums")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show both checksums for every checked file and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ~/.config/shazam/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the checksum of one or more files
    Sum {
        /// Files or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        /// Hash algorithm (default from config)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<DigestAlgorithm>,

        /// Write the checksums to this sum file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the checksums to <algorithm>sum.txt
        #[arg(short, long, conflicts_with = "output")]
        write: bool,
    },

    /// Check one file against a published checksum
    Check {
        path: PathBuf,

        /// Reference checksum in hexadecimal
        digest: String,

        /// Hash algorithm (inferred from the file name or checksum length)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<DigestAlgorithm>,
    },

    /// Check every entry of a sum file such as SHA256SUMS
    Verify {
        manifest: PathBuf,

        /// Hash algorithm (inferred from the sum file name)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<DigestAlgorithm>,
    },

    /// Show every supported checksum of one file
    All { path: PathBuf },
}

fn parse_algorithm(s: &str) -> Result<DigestAlgorithm, String> {
    s.parse::<DigestAlgorithm>()
        .map_err(|e| e.to_string().lines().next().unwrap_or_default().to_string())
}
