use super::render_repositories;
use crate::commands::{CommandError, CommandResult};
use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, OutputFormat};
use libecr::{Client, RegistryTransport, Repository};

/// Handle `repo list`
pub async fn handle_repo_list<T: RegistryTransport>(
    ctx: &AppContext,
    client: &Client<T>,
    output: OutputFormat,
    quiet: bool,
) -> CommandResult {
    let repositories = fetch_repositories(ctx, client).await?;

    let rendered = render_repositories(&repositories, output, quiet).map_err(CommandError::Output)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

pub(crate) async fn fetch_repositories<T: RegistryTransport>(
    ctx: &AppContext,
    client: &Client<T>,
) -> CommandResult<Vec<Repository>> {
    format::print(ctx, VerbosityLevel::Verbose, "Listing repositories...");

    let spinner = format::spinner("Listing repositories...");
    let result = client.list_repositories().await;
    spinner.finish_and_clear();

    let repositories = result?;
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Found {} repositories", repositories.len()),
    );

    Ok(repositories)
}
