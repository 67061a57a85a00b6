use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// campusconnect - Campus club event registration
#[derive(Parser)]
#[command(name = "campusconnect")]
#[command(about = "Event registration for campus clubs", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage user profiles
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Issue a signed principal token, for local development
    Token {
        /// Identity provider subject id
        #[arg(long)]
        sub: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Change the stored role of a profile
    SetRole {
        #[arg(long)]
        email: String,

        #[arg(long, value_enum)]
        role: cli::user::Role,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = campusconnect::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    campusconnect::observability::init_observability(
        "campusconnect",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => campusconnect::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(config).await,
        Commands::Reset => cli::migrate::reset(config).await,
        Commands::User {
            command: UserCommands::SetRole { email, role },
        } => cli::user::set_role(config, email, role).await,
        Commands::Token { sub, email, name } => cli::token::issue(config, sub, email, name),
    }
}
