#![forbid(unsafe_code)]

//! `swiftgraph.toml` discovery and parsing. The configuration supplies the
//! schema source (a local introspection JSON file or a remote endpoint with
//! request headers) and the custom scalar representation overrides.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "swiftgraph.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find `{CONFIG_FILE_NAME}` in `{start}` or any parent directory", start = .start.display())]
    NotFound { start: PathBuf },
    #[error("could not read `{path}`: {source}", path = .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse `{path}`: {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
    #[error("the [schema] section must set exactly one of `path` or `url`")]
    AmbiguousSource,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schema: SchemaSource,
    /// Custom scalar name → Swift representation. Scalars without an entry
    /// alias to `String`.
    pub scalars: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaSource {
    /// Introspection JSON on disk, relative to the configuration file.
    pub path: Option<PathBuf>,
    /// GraphQL endpoint to introspect.
    pub url: Option<Url>,
    /// Extra request headers sent when introspecting `url`.
    pub headers: BTreeMap<String, String>,
}

/// Where the introspection document comes from.
#[derive(Debug)]
pub enum SchemaLocation<'a> {
    Path(&'a Path),
    Url(&'a Url),
}

impl Config {
    /// Reads the configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source: Box::new(source),
        })?;
        config.schema_location()?;
        Ok(config)
    }

    /// Finds `swiftgraph.toml` in `start` or the nearest ancestor directory
    /// and reads it. Returns the file path alongside the configuration so
    /// relative schema paths can be resolved against it.
    pub fn discover(start: &Path) -> Result<(Config, PathBuf), ConfigError> {
        let mut current = Some(start);
        while let Some(directory) = current {
            let candidate = directory.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Ok((Self::load(&candidate)?, candidate));
            }
            current = directory.parent();
        }
        Err(ConfigError::NotFound {
            start: start.to_owned(),
        })
    }

    /// The configured schema source; exactly one of `path` and `url` must
    /// be set.
    pub fn schema_location(&self) -> Result<SchemaLocation<'_>, ConfigError> {
        match (&self.schema.path, &self.schema.url) {
            (Some(path), None) => Ok(SchemaLocation::Path(path)),
            (None, Some(url)) => Ok(SchemaLocation::Url(url)),
            _ => Err(ConfigError::AmbiguousSource),
        }
    }
}
