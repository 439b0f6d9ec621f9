//! Runner wiring parsed arguments to the manifest library

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use crate::cli::args::{Args, Command, OutputFormat};
use crate::error::Result;
use crate::manifest::{Manifest, get_manifest_named};
use crate::output::OutputManager;

pub struct Runner {
    args: Args,
    output: OutputManager,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let output = if args.quiet {
            OutputManager::new_quiet()
        } else {
            OutputManager::new(args.verbose)
        };
        Self { args, output }
    }

    pub fn output(&self) -> &OutputManager {
        &self.output
    }

    pub fn run(&self) -> Result<()> {
        match &self.args.command {
            Command::Update {
                manifest_type,
                file,
                repository,
                new_tag,
                dry_run,
            } => self.run_update(manifest_type, file, repository, new_tag, *dry_run),
            Command::List {
                manifest_type,
                file,
                output,
            } => self.run_list(manifest_type, file, *output),
        }
    }

    fn load_manifest(&self, manifest_type: &str, file: &Path) -> Result<Box<dyn Manifest>> {
        let mut manifest = get_manifest_named(manifest_type)?;
        let mut reader = BufReader::new(File::open(file)?);
        manifest.load(&mut reader)?;
        Ok(manifest)
    }

    fn run_update(
        &self,
        manifest_type: &str,
        file: &Path,
        repository: &str,
        new_tag: &str,
        dry_run: bool,
    ) -> Result<()> {
        self.output.section("Updating image tags");
        self.output.info(&format!(
            "Manifest: {} ({})",
            file.display(),
            manifest_type
        ));

        let mut manifest = self.load_manifest(manifest_type, file)?;

        let matches = manifest
            .get_images()?
            .iter()
            .filter(|image| image.repository == repository)
            .count();
        if matches == 0 {
            self.output.warning(&format!(
                "No image in this manifest references repository '{}'",
                repository
            ));
        } else {
            self.output.detail(&format!(
                "{} reference(s) to '{}' found",
                matches, repository
            ));
        }

        manifest.modify(repository, new_tag)?;

        // Serialize into a buffer first so a failure never leaves a
        // half-written manifest behind.
        let mut buffer = Vec::new();
        manifest.write(&mut buffer)?;

        if dry_run {
            let mut stdout = io::stdout();
            io::copy(&mut buffer.as_slice(), &mut stdout)?;
            self.output.info("Dry run - manifest file left untouched");
        } else {
            fs::write(file, &buffer)?;
            self.output.success(&format!(
                "Updated {} reference(s) to {}:{}",
                matches, repository, new_tag
            ));
        }
        Ok(())
    }

    fn run_list(&self, manifest_type: &str, file: &Path, format: OutputFormat) -> Result<()> {
        let manifest = self.load_manifest(manifest_type, file)?;
        let images = manifest.get_images()?;

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&images)?),
            OutputFormat::Text => {
                for image in &images {
                    println!("{}", image);
                }
            }
        }
        Ok(())
    }
}
