use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use mettai::cli::{Cli, Command};
use mettai::db;
use mettai::router::init_router;
use mettai::state::init_app_state;
use mettai_config::{Env, Profile, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let env = Env::from_process();
    let profile = match cli.profile.as_deref() {
        Some(raw) => raw.parse()?,
        None => Profile::from_env(&env)?,
    };
    // Configuration errors are fatal here, before anything binds or connects.
    let settings = Settings::load(profile, &env)
        .with_context(|| format!("failed to load settings for profile `{profile}`"))?;

    mettai_observability::init_logging(&settings)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Check => check(&settings),
        Command::Migrate => migrate(&settings).await,
        Command::Serve => serve(settings).await,
    }
}

fn check(settings: &Settings) -> anyhow::Result<()> {
    println!("profile:       {}", settings.profile);
    println!("debug:         {}", settings.debug);
    println!("allowed hosts: {}", settings.allowed_hosts.join(", "));
    println!("database:      {}", settings.database.redacted_url());
    println!("listen:        {}", settings.server.addr());
    println!("ok");
    Ok(())
}

async fn migrate(settings: &Settings) -> anyhow::Result<()> {
    if !settings.database.run_migrations {
        info!(profile = %settings.profile, "migrations bypassed for this profile");
        return Ok(());
    }
    let pool = db::init_db_pool(&settings.database)?;
    db::run_migrations(&pool).await
}

async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.server.addr();
    let profile = settings.profile;
    let state = init_app_state(settings)?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(profile = %profile, "server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
