use anidex_core::application::{
    ports::{security::AdminAuthenticator, time::Clock},
    services::ApplicationServices,
    setup::seed_default_social_links,
};
use anidex_core::config::AppConfig;
use anidex_core::domain::{
    content::ContentRepository,
    social::SocialLinkRepository,
    title::{TitleReadRepository, TitleWriteRepository},
};
use anidex_core::infrastructure::{
    database,
    repositories::{
        PostgresContentRepository, PostgresSocialLinkRepository, PostgresTitleReadRepository,
        PostgresTitleWriteRepository,
    },
    security::admin_token::Blake3AdminAuthenticator,
    time::SystemClock,
};
use anidex_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let title_write_repo: Arc<dyn TitleWriteRepository> =
        Arc::new(PostgresTitleWriteRepository::new(pool.clone()));
    let title_read_repo: Arc<dyn TitleReadRepository> =
        Arc::new(PostgresTitleReadRepository::new(pool.clone()));
    let content_repo: Arc<dyn ContentRepository> =
        Arc::new(PostgresContentRepository::new(pool.clone()));
    let social_repo: Arc<dyn SocialLinkRepository> =
        Arc::new(PostgresSocialLinkRepository::new(pool));

    seed_default_social_links(social_repo.as_ref()).await?;

    let admin_authenticator: Arc<dyn AdminAuthenticator> =
        Arc::new(Blake3AdminAuthenticator::new(config.admin_api_token()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        title_write_repo,
        title_read_repo,
        content_repo,
        social_repo,
        admin_authenticator,
        clock,
        config.slug_max_attempts(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
