use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ndi_source::{MediaSource, NdiMediaSource, SourceTarget};

/**
    Inspect a source descriptor.
*/
#[derive(Args)]
pub struct InspectCommand {
    /// Descriptor file (.json, .yaml or .yml).
    pub file: PathBuf,
}

impl InspectCommand {
    pub fn run(self) -> Result<()> {
        let source = NdiMediaSource::load(&self.file)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        print!("{}", Report(&source));
        Ok(())
    }
}

/**
    Human-readable report of a descriptor.
*/
struct Report<'a>(&'a NdiMediaSource);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.0;

        let (url, via) = match source.target() {
            Some(SourceTarget::Endpoint(url)) => (url, "endpoint"),
            Some(SourceTarget::Name(url)) => (url, "name"),
            None => ("<unresolvable>", "none"),
        };
        writeln!(f, "URL:        {url}")?;
        writeln!(f, "Target:     {via}")?;
        writeln!(f, "Valid:      {}", source.validate())?;

        if let Some((num, den)) = source.preferred_frame_rate() {
            let fps = source.preferred_fps().unwrap_or_default();
            writeln!(f, "Frame Rate: {num}/{den} ({fps:.2} fps)")?;
        }
        if let Some((width, height)) = source.preferred_video_size() {
            writeln!(f, "Video Size: {width}x{height}")?;
        }

        writeln!(f)?;
        writeln!(f, "Options:")?;
        for (key, value) in source.options() {
            writeln!(f, "  {key:<30} = {value}")?;
        }
        Ok(())
    }
}
