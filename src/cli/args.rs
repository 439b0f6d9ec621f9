//! Command-line argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagbump")]
#[command(about = "A tool to bump container image tags in deployment manifests")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(
        long = "verbose",
        short = 'v',
        global = true,
        help = "Enable verbose output"
    )]
    pub verbose: bool,

    /// Quiet output
    #[arg(
        long = "quiet",
        short = 'q',
        global = true,
        help = "Only print warnings and errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite the tag of every image reference matching a repository
    Update {
        /// Manifest type
        #[arg(
            long = "type",
            short = 't',
            value_name = "DIALECT",
            help = "Manifest type: kubernetes, kustomize"
        )]
        manifest_type: String,

        /// Path to the manifest file to edit
        #[arg(long = "file", short = 'f', help = "Path to the manifest file")]
        file: PathBuf,

        /// Repository whose tag should change
        repository: String,

        /// New tag to apply
        new_tag: String,

        /// Dry run mode
        #[arg(
            long = "dry-run",
            short = 'n',
            help = "Print the modified manifest to stdout instead of rewriting the file"
        )]
        dry_run: bool,
    },

    /// List the image references a manifest contains
    List {
        /// Manifest type
        #[arg(
            long = "type",
            short = 't',
            value_name = "DIALECT",
            help = "Manifest type: kubernetes, kustomize"
        )]
        manifest_type: String,

        /// Path to the manifest file to read
        #[arg(long = "file", short = 'f', help = "Path to the manifest file")]
        file: PathBuf,

        /// Output format for the listing
        #[arg(
            long = "output",
            short = 'o',
            value_enum,
            default_value = "text",
            help = "Output format: text, json"
        )]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
