//! `ecrcli repo` commands.

use crate::format::{self, OutputFormat};
use libecr::Repository;
use libecr::format::format_timestamp;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub mod handlers;

/// One line of the repository table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct RepositoryRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "URI")]
    pub uri: String,

    /// Creation time in local time
    #[tabled(rename = "CREATED AT")]
    pub created_at: String,
}

impl From<&Repository> for RepositoryRow {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            uri: repo.uri.clone(),
            created_at: format_timestamp(&repo.created_at),
        }
    }
}

/// Render a repository listing.
///
/// Quiet mode prints one name per line and nothing for an empty list. JSON
/// and YAML serialize the full records.
pub fn render_repositories(
    repositories: &[Repository],
    output: OutputFormat,
    quiet: bool,
) -> Result<String, String> {
    if quiet {
        let names: Vec<&str> = repositories.iter().map(|r| r.name.as_str()).collect();
        return Ok(names.join("\n"));
    }

    match output {
        OutputFormat::Pretty if repositories.is_empty() => Ok("No repositories found.".to_string()),
        OutputFormat::Pretty => {
            let rows: Vec<RepositoryRow> = repositories.iter().map(RepositoryRow::from).collect();
            Ok(Table::new(&rows).with(Style::empty()).to_string())
        }
        _ => format::serialize(repositories, output),
    }
}
