use super::{render_images, validate_repository};
use crate::commands::{CommandError, CommandResult};
use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, OutputFormat};
use libecr::{Client, Image, RegistryTransport};

/// Handle `image list <REPO>`
pub async fn handle_image_list<T: RegistryTransport>(
    ctx: &AppContext,
    client: &Client<T>,
    repository: &str,
    output: OutputFormat,
    quiet: bool,
) -> CommandResult {
    let repository = validate_repository(repository).map_err(CommandError::InvalidArgument)?;
    let images = fetch_images(ctx, client, repository).await?;

    let rendered =
        render_images(repository, &images, output, quiet).map_err(CommandError::Output)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

pub(crate) async fn fetch_images<T: RegistryTransport>(
    ctx: &AppContext,
    client: &Client<T>,
    repository: &str,
) -> CommandResult<Vec<Image>> {
    let message = format!("Listing images in {}...", repository);
    format::print(ctx, VerbosityLevel::Verbose, &message);

    let spinner = format::spinner(&message);
    let result = client.list_images(repository).await;
    spinner.finish_and_clear();

    let images = result?;
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Found {} images", images.len()),
    );

    Ok(images)
}
