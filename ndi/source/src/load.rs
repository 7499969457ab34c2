/*!
    Reading and writing persisted source descriptors.

    Descriptors are stored as JSON or YAML documents whose field names are the
    option key names. Missing fields take their default values.
*/

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::source::{MediaSource, NdiMediaSource};

/**
    Persisted descriptor format, chosen by file extension.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Yaml,
}

impl DescriptorFormat {
    /**
        Detect the format from a path's extension (`.json`, `.yaml`, `.yml`).
    */
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }
}

impl NdiMediaSource {
    pub fn from_json(contents: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, LoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /**
        Load a descriptor from a `.json`, `.yaml` or `.yml` file.

        A descriptor without a connection target loads successfully; check
        [`MediaSource::validate`] before connecting.
    */
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let format = format_for(path)?;
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source = match format {
            DescriptorFormat::Json => Self::from_json(&contents)?,
            DescriptorFormat::Yaml => Self::from_yaml(&contents)?,
        };

        tracing::debug!(path = %path.display(), url = source.url(), "loaded NDI source descriptor");
        if !source.validate() {
            tracing::warn!(
                path = %path.display(),
                "NDI source descriptor has neither SourceEndpoint nor SourceName"
            );
        }

        Ok(source)
    }

    /**
        Write the descriptor to `path`, creating parent directories as needed.
    */
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let contents = match format_for(path)? {
            DescriptorFormat::Json => self.to_json_pretty()?,
            DescriptorFormat::Yaml => self.to_yaml()?,
        };

        let io_err = |source: std::io::Error| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, contents).map_err(io_err)?;

        tracing::debug!(path = %path.display(), "saved NDI source descriptor");
        Ok(())
    }
}

fn format_for(path: &Path) -> Result<DescriptorFormat, LoadError> {
    DescriptorFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(PathBuf::from(path)))
}
