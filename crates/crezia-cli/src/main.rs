use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod bootstrap;
mod commands;
mod logging;
mod render;
mod shell;

use bootstrap::AppContext;

#[derive(Parser)]
#[command(name = "crezia")]
#[command(about = "Crezia - SEO toolkit demo with free and premium plans", long_about = None)]
struct Cli {
    /// Directory holding config.toml, the session store and logs
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a free account and log in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the current session and usage
    Status,
    /// List the available SEO tools
    Tools,
    /// Run a tool (counts towards the daily limit on the free plan)
    Run {
        /// Tool id, e.g. `keyword-research`
        tool: String,
        /// Main input: keyword, URL, text or domain
        primary: String,
        /// Target keywords or competitor domains
        #[arg(long)]
        secondary: Option<String>,
    },
    /// Start the interactive shell (default)
    Shell,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let ctx = AppContext::build(cli.config_dir.as_deref(), cli.ephemeral)?;
    let _log_guard = logging::init(&ctx.log_dir, &ctx.config.logging)?;
    tracing::info!(ephemeral = cli.ephemeral, "Crezia starting");

    ctx.sessions.restore_session();

    let succeeded = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Login { email, password } => commands::login(&ctx, &email, &password).await,
        Commands::Signup {
            name,
            email,
            password,
        } => commands::signup(&ctx, &name, &email, &password).await,
        Commands::Logout => commands::logout(&ctx),
        Commands::Status => commands::status(&ctx),
        Commands::Tools => commands::tools(&ctx),
        Commands::Run {
            tool,
            primary,
            secondary,
        } => commands::run(&ctx, &tool, &primary, secondary).await,
        Commands::Shell => {
            shell::run(&ctx).await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
