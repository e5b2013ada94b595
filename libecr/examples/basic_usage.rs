//! Basic usage example for the libecr library.
//!
//! Uses the AWS credentials and region from the environment.
//!
//! Run with: cargo run --example basic_usage

use libecr::Client;
use libecr::format::{format_size, format_tags, format_timestamp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("libecr - Basic Usage Example\n");

    let client = Client::builder().build().await?;

    // List all repositories
    println!("Fetching repositories...");
    let repos = match client.list_repositories().await {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!("✗ Failed to list repositories: {}", e);
            eprintln!("  Make sure AWS credentials and a region are configured");
            return Ok(());
        }
    };

    println!("✓ Found {} repositories:\n", repos.len());
    for repo in repos.iter().take(10) {
        println!("  - {} ({})", repo.name, repo.uri);
    }
    if repos.len() > 10 {
        println!("  ... and {} more", repos.len() - 10);
    }
    println!();

    // If we have repositories, list images of the first one
    if let Some(first_repo) = repos.first() {
        println!("Fetching images of '{}'...", first_repo.name);
        let images = client.list_images(&first_repo.name).await?;
        println!("✓ Found {} images:\n", images.len());
        for image in images.iter().take(5) {
            println!(
                "  - {} {} {} {}",
                image.digest,
                format_tags(&image.tags),
                format_size(image.size_in_bytes),
                format_timestamp(&image.pushed_at)
            );
        }
        println!();
    }

    // The login command embeds the registry password
    let login = client.get_login_command().await?;
    println!("✓ Login command ready ({} characters)", login.len());

    Ok(())
}
