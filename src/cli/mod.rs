use clap::{Parser, Subcommand};

/// Mettai backend entry point.
#[derive(Parser)]
#[command(name = "mettai", version, about = "Mettai backend server")]
pub struct Cli {
    /// Deployment profile; falls back to APP_ENV, then development.
    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Resolve and validate settings for the selected profile
    Check,
    /// Apply embedded database migrations
    Migrate,
}
