use anyhow::Context;
use launchpad::{build_router, AppState, AuthConfig, Config};
use tower_livereload::LiveReloadLayer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_default().context("failed to load configuration")?;
    let auth = AuthConfig::from_env();

    info!(
        name = %config.project.name,
        version = %config.project.version,
        static_dir = %config.build.static_dir,
        auth_configured = auth.is_configured(),
        "configuration loaded"
    );

    let addr = config.bind_addr();
    let live_reload = config.dev.live_reload;
    let app = build_router(AppState::new(config, auth));

    let app = if live_reload {
        info!("live reload: enabled");
        app.layer(LiveReloadLayer::new())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
