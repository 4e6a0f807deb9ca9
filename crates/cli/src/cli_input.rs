use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use url::Url;

/// Compile a GraphQL introspection schema into a typed Swift client.
#[derive(Debug, Parser)]
#[command(name = "swiftgraph", version, about)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    Generate(GenerateCommand),
    Introspect(IntrospectCommand),
}

/// Generate the Swift client sources from the configured schema
#[derive(Debug, Parser)]
pub(crate) struct GenerateCommand {
    /// Project root to search for swiftgraph.toml (defaults to the current directory)
    pub(crate) root: Option<PathBuf>,
    /// Directory the generated Swift files are written to
    #[arg(short('d'), long("destination"))]
    pub(crate) destination: PathBuf,
    /// Use a specific introspection JSON file, bypassing the configured schema source
    #[arg(long("schema"))]
    pub(crate) schema_path: Option<PathBuf>,
    /// Use a specific configuration file instead of discovering one
    #[arg(short('c'), long("config"))]
    pub(crate) config_path: Option<PathBuf>,
}

/// Fetch the introspection schema from a GraphQL endpoint
#[derive(Debug, Parser)]
pub(crate) struct IntrospectCommand {
    /// The GraphQL endpoint URL
    pub(crate) url: Url,
    /// Extra request header as `Name: value` (repeatable)
    #[arg(short('H'), long("header"))]
    pub(crate) headers: Vec<String>,
    /// Write the schema JSON to a file instead of stdout
    #[arg(short('o'), long("output"))]
    pub(crate) output: Option<PathBuf>,
}

impl IntrospectCommand {
    pub(crate) fn header_pairs(&self) -> Result<Vec<(String, String)>> {
        self.headers
            .iter()
            .map(|header| match header.split_once(':') {
                Some((name, value)) => Ok((name.trim().to_owned(), value.trim().to_owned())),
                None => bail!("malformed header `{header}`, expected `Name: value`"),
            })
            .collect()
    }
}
