//! `ecrcli get-login`

use super::CommandResult;
use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use libecr::{Client, RegistryTransport};

/// Fetch a fresh token and print the `docker login` command.
///
/// The command is the only thing written to stdout so it can be piped into a
/// shell.
pub async fn handle_get_login<T: RegistryTransport>(
    ctx: &AppContext,
    client: &Client<T>,
) -> CommandResult {
    let command = fetch_login_command(ctx, client).await?;
    println!("{}", command);
    Ok(())
}

pub(crate) async fn fetch_login_command<T: RegistryTransport>(
    ctx: &AppContext,
    client: &Client<T>,
) -> CommandResult<String> {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        "Requesting authorization token...",
    );

    let spinner = format::spinner("Requesting authorization token...");
    let result = client.get_login_command().await;
    spinner.finish_and_clear();

    Ok(result?)
}

#[cfg(test)]
#[path = "login_tests.rs"]
mod tests;
