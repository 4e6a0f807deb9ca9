use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use swiftgraph_codegen::{generate, GeneratorOptions, Schema};
use swiftgraph_config::{Config, ConfigError, SchemaLocation};

use crate::cli_input::GenerateCommand;

pub(crate) fn execute(command: &GenerateCommand) -> Result<()> {
    let root = match &command.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("could not determine the current directory")?,
    };

    let (json, options) = if let Some(path) = &command.schema_path {
        // An explicit schema file works without a configuration; scalar
        // overrides still apply when one is around.
        let scalar_overrides = optional_config(command, &root)?
            .map(|(config, _)| config.scalars)
            .unwrap_or_default();
        (read_schema(path)?, GeneratorOptions { scalar_overrides })
    } else {
        let (config, config_path) = required_config(command, &root)?;
        let json = match config.schema_location()? {
            SchemaLocation::Path(path) => {
                let base = config_path.parent().unwrap_or_else(|| Path::new("."));
                read_schema(&base.join(path))?
            }
            SchemaLocation::Url(url) => {
                let headers: Vec<(String, String)> =
                    config.schema.headers.clone().into_iter().collect();
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .context("could not start the async runtime")?;
                runtime.block_on(swiftgraph_introspection::introspect(url, &headers))?
            }
        };
        (
            json,
            GeneratorOptions {
                scalar_overrides: config.scalars,
            },
        )
    };

    let schema = Schema::parse(&json)?;
    let files = generate(&schema, &options)?;

    std::fs::create_dir_all(&command.destination).with_context(|| {
        format!("could not create `{}`", command.destination.display())
    })?;
    for file in &files {
        let path = command.destination.join(file.bucket.file_name());
        std::fs::write(&path, &file.source)
            .with_context(|| format!("could not write `{}`", path.display()))?;
        tracing::info!(path = %path.display(), "wrote generated source");
    }

    println!(
        "Generated {} Swift files in `{}`",
        files.len(),
        command.destination.display()
    );
    Ok(())
}

fn read_schema(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("could not read the schema at `{}`", path.display()))
}

fn optional_config(
    command: &GenerateCommand,
    root: &Path,
) -> Result<Option<(Config, PathBuf)>> {
    match &command.config_path {
        Some(path) => Ok(Some((Config::load(path)?, path.clone()))),
        None => match Config::discover(root) {
            Ok(found) => Ok(Some(found)),
            Err(ConfigError::NotFound { .. }) => Ok(None),
            Err(error) => Err(error.into()),
        },
    }
}

fn required_config(command: &GenerateCommand, root: &Path) -> Result<(Config, PathBuf)> {
    match &command.config_path {
        Some(path) => Ok((Config::load(path)?, path.clone())),
        None => Ok(Config::discover(root)?),
    }
}
