use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod context;
mod format;
mod logging;

use commands::url::View;

/// ociurl - OCI artifact URL inspector
///
/// Validates `oci://<domain>/<org>/<repo>[:<tag>|@<digest>]` URLs and prints
/// the artifact, repository or digest reference they address.
#[derive(Parser, Debug)]
#[command(name = "ociurl")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never (defaults to style.color)
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the artifact reference (registry/repository[:tag][@digest])
    Artifact {
        /// Artifact URL (oci://<domain>/<org>/<repo>[:tag|@digest])
        url: String,
    },
    /// Print the repository address without tag or digest
    #[command(visible_alias = "repo")]
    Repository {
        /// Artifact URL (oci://<domain>/<org>/<repo>[:tag|@digest])
        url: String,
    },
    /// Print the digest reference, failing if the URL points at a tag
    Digest {
        /// Artifact URL (oci://<domain>/<org>/<repo>@<digest>)
        url: String,
    },
    /// Show every component of an artifact URL
    Inspect {
        /// Artifact URL (oci://<domain>/<org>/<repo>[:tag|@digest])
        url: String,
        /// Output format: pretty, json, yaml (defaults to style.format)
        #[arg(short, long)]
        format: Option<String>,
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
enum ConfigCommands {
    /// Initialize configuration with default values
    Init,
    /// Get a configuration value (or display all if no key provided)
    Get {
        /// Configuration key to get (e.g., style.format)
        key: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Print the configuration file path
    Path,
}

fn main() {
    let cli = Cli::parse();

    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    if let Err(e) = logging::init_tracing(verbosity) {
        eprintln!("Warning: {}", e);
    }

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let cli_color = cli.color.as_deref().map(format::ColorChoice::from);
    let ctx = context::AppContext::build(cli_color, verbosity);
    tracing::debug!(
        verbosity = ?ctx.verbosity,
        format = ctx.config.style.format.as_str(),
        color = ctx.config.style.color.as_str(),
        "resolved context"
    );

    match cli.command {
        Commands::Artifact { url } => commands::url::handle_view(&ctx, &url, View::Artifact),
        Commands::Repository { url } => {
            commands::url::handle_view(&ctx, &url, View::Repository)
        }
        Commands::Digest { url } => commands::url::handle_view(&ctx, &url, View::Digest),
        Commands::Inspect { url, format } => {
            let fmt = format.as_deref().map(format::OutputFormat::from);
            commands::url::handle_inspect(&ctx, &url, fmt);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::handle_init(&ctx),
            ConfigCommands::Get { key, format } => {
                let fmt = format.as_deref().map(format::OutputFormat::from);
                commands::config::handle_get(&ctx, key.as_deref(), fmt);
            }
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Version => commands::version::print_version(),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
