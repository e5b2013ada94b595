//! `ecrcli image` commands.

use crate::format::{self, OutputFormat};
use libecr::Image;
use libecr::format::{format_size, format_tags, format_timestamp};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub mod handlers;

/// One line of the image table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ImageRow {
    #[tabled(rename = "DIGEST")]
    pub digest: String,

    #[tabled(rename = "PUSHED AT")]
    pub pushed_at: String,

    /// Comma-joined, `<none>` when untagged
    #[tabled(rename = "TAGS")]
    pub tags: String,

    #[tabled(rename = "SIZE")]
    pub size: String,
}

impl From<&Image> for ImageRow {
    fn from(image: &Image) -> Self {
        Self {
            digest: image.digest.clone(),
            pushed_at: format_timestamp(&image.pushed_at),
            tags: format_tags(&image.tags),
            size: format_size(image.size_in_bytes),
        }
    }
}

/// Reject a blank repository name before anything goes over the wire.
pub fn validate_repository(repository: &str) -> Result<&str, String> {
    let trimmed = repository.trim();
    if trimmed.is_empty() {
        return Err("repository name must be given".to_string());
    }
    Ok(trimmed)
}

/// Render an image listing for `repository`.
///
/// Quiet mode prints one digest per line.
pub fn render_images(
    repository: &str,
    images: &[Image],
    output: OutputFormat,
    quiet: bool,
) -> Result<String, String> {
    if quiet {
        let digests: Vec<&str> = images.iter().map(|i| i.digest.as_str()).collect();
        return Ok(digests.join("\n"));
    }

    match output {
        OutputFormat::Pretty if images.is_empty() => {
            Ok(format!("No images found in '{}'.", repository))
        }
        OutputFormat::Pretty => {
            let rows: Vec<ImageRow> = images.iter().map(ImageRow::from).collect();
            Ok(Table::new(&rows).with(Style::empty()).to_string())
        }
        _ => format::serialize(images, output),
    }
}
