//! liststyle CLI - list style presets for rich-text editors.
//!
//! Commands:
//! - `liststyle init` - Write a sample styles.txt
//! - `liststyle validate` - Parse styles.txt into a stored configuration
//! - `liststyle show` - Print a stored configuration as editable text
//! - `liststyle project` - Generate the editor configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "liststyle")]
#[command(about = "List style presets for rich-text editors")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a styles text file and store it as configuration
    Validate {
        /// Path to the styles text file (one `tag.class|Label` per line)
        #[arg(short, long, default_value = "styles.txt")]
        input: String,

        /// Output path for the stored configuration (.yaml or .json)
        #[arg(short, long, default_value = "styles.yaml")]
        output: String,

        /// Output format (yaml or json); defaults to the output file extension
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Print a stored configuration in the editable text form
    Show {
        /// Path to the stored configuration (.yaml or .json)
        #[arg(short, long, default_value = "styles.yaml")]
        config: String,
    },

    /// Generate editor configuration (allowed elements and decorators)
    Project {
        /// Path to the stored configuration (.yaml or .json)
        #[arg(short, long, default_value = "styles.yaml")]
        config: String,

        /// Output path for the editor configuration
        #[arg(short, long, default_value = "editor.yaml")]
        output: String,

        /// Output format (yaml or json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Write a sample styles text file
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Validate {
            input,
            output,
            format,
        } => commands::validate::run(&input, &output, format.as_deref()),
        Commands::Show { config } => commands::show::run(&config),
        Commands::Project {
            config,
            output,
            format,
        } => commands::project::run(&config, &output, &format),
        Commands::Init { path } => commands::init::run(&path),
    }
}
