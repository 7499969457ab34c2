use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use ndi_source::{MediaOptions, NdiMediaSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OptionKind {
    Bool,
    String,
    Int,
}

/**
    Read a single option from a source descriptor.

    Unknown keys and type mismatches print the default, exactly as a media
    player would see them.
*/
#[derive(Args)]
pub struct GetCommand {
    /// Descriptor file (.json, .yaml or .yml).
    pub file: PathBuf,
    /// Option key, e.g. `Bandwidth`.
    pub key: String,
    /// Type of value to request.
    #[arg(long, value_enum, default_value_t = OptionKind::String)]
    pub kind: OptionKind,
    /// Value returned when the key is unknown or has another type.
    #[arg(long, allow_hyphen_values = true)]
    pub default: Option<String>,
}

impl GetCommand {
    pub fn run(self) -> Result<()> {
        let source = NdiMediaSource::load(&self.file)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        if !source.has_option(&self.key) {
            tracing::info!(key = %self.key, "option not recognized, printing default");
        }
        println!("{}", lookup(&source, &self.key, self.kind, self.default.as_deref())?);
        Ok(())
    }
}

fn lookup(
    options: &dyn MediaOptions,
    key: &str,
    kind: OptionKind,
    default: Option<&str>,
) -> Result<String> {
    let value = match kind {
        OptionKind::Bool => {
            let default: bool = match default {
                Some(s) => s.parse().with_context(|| format!("invalid bool default '{s}'"))?,
                None => false,
            };
            options.get_bool(key, default).to_string()
        }
        OptionKind::Int => {
            let default: i64 = match default {
                Some(s) => s.parse().with_context(|| format!("invalid int default '{s}'"))?,
                None => 0,
            };
            options.get_int(key, default).to_string()
        }
        OptionKind::String => options.get_string(key, default.unwrap_or_default()).to_owned(),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndi_source::Bandwidth;

    #[test]
    fn lookup_known_keys() {
        let source = NdiMediaSource::named("STUDIO (Cam 1)").with_bandwidth(Bandwidth::AudioOnly);
        assert_eq!(lookup(&source, "Bandwidth", OptionKind::Int, Some("-1")).unwrap(), "-10");
        assert_eq!(
            lookup(&source, "Bandwidth", OptionKind::String, None).unwrap(),
            "AudioOnly"
        );
        assert_eq!(
            lookup(&source, "Url", OptionKind::String, None).unwrap(),
            "STUDIO (Cam 1)"
        );
        assert_eq!(
            lookup(&source, "UseTimecode", OptionKind::Bool, Some("true")).unwrap(),
            "false"
        );
    }

    #[test]
    fn lookup_falls_back_to_default() {
        let source = NdiMediaSource::default();
        assert_eq!(lookup(&source, "Nope", OptionKind::Int, Some("-1")).unwrap(), "-1");
        assert_eq!(lookup(&source, "Nope", OptionKind::Int, None).unwrap(), "0");
        assert_eq!(lookup(&source, "Nope", OptionKind::Bool, Some("true")).unwrap(), "true");
        assert_eq!(lookup(&source, "Nope", OptionKind::String, Some("x")).unwrap(), "x");
        assert_eq!(lookup(&source, "SourceName", OptionKind::Int, Some("3")).unwrap(), "3");
    }

    #[test]
    fn lookup_rejects_bad_default() {
        let source = NdiMediaSource::default();
        assert!(lookup(&source, "Bandwidth", OptionKind::Int, Some("high")).is_err());
        assert!(lookup(&source, "UseTimecode", OptionKind::Bool, Some("yes")).is_err());
    }
}
