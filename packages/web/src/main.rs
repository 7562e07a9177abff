use std::time::Duration;

use tower_sessions::ExpiredDeletion;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use warbler::{app, session_store, Settings};

/// How often expired sessions are swept from the store.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warbler=info,api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new()?;

    let pool = api::db::connect(&settings.database.url, settings.database.connections).await?;
    let store = session_store(&pool).await?;

    let deletion_task = tokio::spawn(
        store
            .clone()
            .continuously_delete_expired(SESSION_SWEEP_INTERVAL),
    );

    let router = app(pool, store, &settings.session);

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Warbler listening on {}", addr);

    axum::serve(listener, router).await?;

    deletion_task.abort();
    Ok(())
}
