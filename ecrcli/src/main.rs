use clap::{CommandFactory, Parser, Subcommand};
use libecr::{Client, Settings};
use tracing::debug;

mod commands;
mod config;
mod context;
mod format;
mod logging;

use commands::{CommandError, CommandResult};
use context::{AppContext, Overrides, VerbosityLevel};
use format::{ColorChoice, OutputFormat};

/// ecrcli - Amazon ECR from the command line
///
/// Prints docker login commands and lists repositories and images.
#[derive(Parser, Debug)]
#[command(name = "ecrcli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// AWS region (defaults to the AWS SDK resolution)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the ECR API endpoint
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Print full error details and debug logs
    #[arg(long, global = true)]
    debug: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a docker login command for the default registry
    GetLogin,
    /// Explore repositories
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Explore images in a repository
    Image {
        #[command(subcommand)]
        command: ImageCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum RepoCommands {
    /// List all repositories
    #[command(visible_alias = "ls")]
    List {
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
        /// Show only repository names
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ImageCommands {
    /// List images in a repository
    #[command(visible_alias = "ls")]
    List {
        /// Repository name
        repository: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
        /// Show only image digests
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Display the resolved configuration
    Show {
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Get a configuration value (e.g., aws.region)
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value in the config file
    Set {
        /// Configuration key
        key: String,
        /// Value to set (empty to unset an aws.* key)
        value: String,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            color: self.color.as_deref().map(ColorChoice::from),
            settings: Settings {
                region: self.region.clone(),
                profile: self.profile.clone(),
                endpoint_url: self.endpoint_url.clone(),
            },
        }
    }
}

fn output_format(ctx: &AppContext, flag: Option<&str>) -> OutputFormat {
    flag.map(OutputFormat::from)
        .unwrap_or(ctx.config.style.format)
}

async fn connect(ctx: &AppContext) -> CommandResult<Client> {
    debug!(
        region = ?ctx.config.aws.region,
        profile = ?ctx.config.aws.profile,
        endpoint_url = ?ctx.config.aws.endpoint_url,
        "building ECR client"
    );

    let client = Client::builder()
        .with_settings(ctx.config.aws.clone())
        .build()
        .await?;
    Ok(client)
}

async fn run(ctx: &AppContext, command: Commands) -> CommandResult {
    match command {
        Commands::GetLogin => {
            let client = connect(ctx).await?;
            commands::login::handle_get_login(ctx, &client).await
        }
        Commands::Repo { command } => match command {
            RepoCommands::List { format, quiet } => {
                let fmt = output_format(ctx, format.as_deref());
                let client = connect(ctx).await?;
                commands::repo::handlers::handle_repo_list(ctx, &client, fmt, quiet).await
            }
        },
        Commands::Image { command } => match command {
            ImageCommands::List {
                repository,
                format,
                quiet,
            } => {
                // Region discovery may hit the network, so reject a blank name first
                commands::image::validate_repository(&repository)
                    .map_err(CommandError::InvalidArgument)?;
                let fmt = output_format(ctx, format.as_deref());
                let client = connect(ctx).await?;
                commands::image::handlers::handle_image_list(ctx, &client, &repository, fmt, quiet)
                    .await
            }
        },
        Commands::Config { command } => {
            let config_path = config::get_config_path();
            match command {
                ConfigCommands::Init => commands::config::handle_init(ctx, &config_path),
                ConfigCommands::Show { format } => {
                    commands::config::handle_show(ctx, output_format(ctx, format.as_deref()))
                }
                ConfigCommands::Get { key } => commands::config::handle_get(ctx, &key),
                ConfigCommands::Set { key, value } => {
                    commands::config::handle_set(ctx, &config_path, &key, &value)
                }
            }
        }
        Commands::Version => {
            commands::version::print_version();
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = match AppContext::build(
        cli.overrides(),
        VerbosityLevel::from_count(cli.verbose),
        cli.debug,
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&ctx, cli.command).await {
        format::error(&ctx, &format::error_chain(&e));
        if ctx.debug {
            eprintln!("{:#?}", e);
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
