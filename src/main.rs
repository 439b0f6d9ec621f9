use std::process;

use clap::Parser;

use tagbump::cli::{Args, Runner};
use tagbump::error::BumpError;

/// Maps each error kind to its own exit code so release tooling can tell an
/// unknown manifest type apart from a malformed file without parsing stderr.
fn exit_code(error: &BumpError) -> i32 {
    match error {
        BumpError::UnknownDialect(_) => 2,
        BumpError::NotImplemented(_) => 3,
        BumpError::Structure(_) => 4,
        BumpError::Yaml(_) => 5,
        BumpError::Io(_) => 6,
        BumpError::NotLoaded => 7,
        BumpError::Json(_) => 8,
    }
}

fn main() {
    let args = Args::parse();
    let runner = Runner::new(args);

    if let Err(error) = runner.run() {
        runner.output().error(&error.to_string());
        process::exit(exit_code(&error));
    }
}
