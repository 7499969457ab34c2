use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use ndi_source::{DescriptorFormat, MediaSource, NdiMediaSource};

/**
    Write a source descriptor with default preferences.
*/
#[derive(Args)]
pub struct InitCommand {
    /// Output file; the extension selects JSON or YAML.
    pub file: PathBuf,
    /// Source address, `host:port`.
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Source name, e.g. `MACHINE (Camera 1)`.
    #[arg(long)]
    pub name: Option<String>,
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(self) -> Result<()> {
        let Some(format) = DescriptorFormat::from_path(&self.file) else {
            bail!(
                "unsupported descriptor format for {} (expected .json, .yaml or .yml)",
                self.file.display()
            );
        };

        let source = self.descriptor();
        let contents = match format {
            DescriptorFormat::Json => source.to_json_pretty()?,
            DescriptorFormat::Yaml => source.to_yaml()?,
        };

        if let Some(parent) = self.file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        // create_new makes the existence check and the write a single step
        let mut options = OpenOptions::new();
        options.write(true);
        if self.force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let mut file = match options.open(&self.file) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                bail!("{} already exists (use --force to overwrite)", self.file.display());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to open {}", self.file.display()));
            }
        };
        file.write_all(contents.as_bytes())
            .with_context(|| format!("failed to write {}", self.file.display()))?;

        println!("Wrote {}", self.file.display());
        if !source.validate() {
            println!("Set SourceEndpoint or SourceName before connecting.");
        }
        Ok(())
    }

    fn descriptor(&self) -> NdiMediaSource {
        let mut source = NdiMediaSource::new();
        if let Some(endpoint) = &self.endpoint {
            source = source.with_source_endpoint(endpoint.as_str());
        }
        if let Some(name) = &self.name {
            source = source.with_source_name(name.as_str());
        }
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(file: PathBuf, force: bool) -> InitCommand {
        InitCommand {
            file,
            endpoint: None,
            name: Some("STUDIO (Cam 1)".into()),
            force,
        }
    }

    #[test]
    fn writes_loadable_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/cam.yaml");
        let cmd = InitCommand {
            file: file.clone(),
            endpoint: Some("10.0.0.5:5960".into()),
            name: Some("STUDIO (Cam 1)".into()),
            force: false,
        };
        cmd.run().unwrap();

        let source = NdiMediaSource::load(&file).unwrap();
        assert_eq!(source.url(), "10.0.0.5:5960");
        assert_eq!(source.source_name, "STUDIO (Cam 1)");
        assert_eq!(source.preferred_audio_sample_rate, 48000);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cam.json");
        std::fs::write(&file, "{}").unwrap();

        let err = command(file.clone(), false).run().unwrap_err();
        assert!(err.to_string().contains("already exists"), "{err}");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "{}");

        command(file.clone(), true).run().unwrap();
        assert_eq!(NdiMediaSource::load(&file).unwrap().url(), "STUDIO (Cam 1)");
    }

    #[test]
    fn force_replaces_longer_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cam.json");
        std::fs::write(&file, " ".repeat(4096)).unwrap();

        command(file.clone(), true).run().unwrap();
        assert_eq!(NdiMediaSource::load(&file).unwrap().url(), "STUDIO (Cam 1)");
    }

    #[test]
    fn unsupported_extension_is_rejected_first() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cam.toml");
        std::fs::write(&file, "keep").unwrap();

        let err = command(file.clone(), false).run().unwrap_err();
        assert!(err.to_string().contains("unsupported descriptor format"), "{err}");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "keep");

        let missing = dir.path().join("other.toml");
        assert!(command(missing.clone(), true).run().is_err());
        assert!(!missing.exists());
    }
}
