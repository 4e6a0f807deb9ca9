use anyhow::{Context, Result};

use crate::cli_input::IntrospectCommand;

pub(crate) fn execute(command: &IntrospectCommand) -> Result<()> {
    let headers = command.header_pairs()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("could not start the async runtime")?;
    let body = runtime.block_on(swiftgraph_introspection::introspect(&command.url, &headers))?;

    match &command.output {
        Some(path) => {
            std::fs::write(path, &body)
                .with_context(|| format!("could not write `{}`", path.display()))?;
            println!("Wrote the introspection schema to `{}`", path.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}
