use anyhow::Context;
use fyyur::{AppState, app, config::Config, db, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _log_guard = logging::init_logging(&config.log_dir)?;

    let db_pool = db::connect(&config.database_url)
        .await
        .with_context(|| format!("opening {}", config.database_url))?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let app = app(AppState { db_pool }, config.session_secure);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
