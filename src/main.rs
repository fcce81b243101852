use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod dto;
mod error;
mod handlers;
mod identity;
mod journal;
mod messages;
mod models;
mod session;
mod store;

use config::Config;
use identity::HttpIdentityExchange;
use journal::Journal;
use session::{ExchangeThrottle, SessionBootstrap, SessionCache};
use store::{EntryStore, MemoryEntryStore, PgEntryStore};

#[derive(Clone)]
pub struct AppState {
    pub bootstrap: SessionBootstrap,
    pub journal: Journal,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodjournal_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let store: Arc<dyn EntryStore> = match &config.database_url {
        Some(url) => {
            let pg = PgEntryStore::connect(url).await?;
            pg.migrate().await?;
            tracing::info!("Database migrations applied");
            Arc::new(pg)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, entries are kept in memory only");
            Arc::new(MemoryEntryStore::new())
        }
    };

    let identity = Arc::new(HttpIdentityExchange::new(
        config.identity_api_url.clone(),
        config.identity_timeout(),
    )?);

    let bootstrap = SessionBootstrap::new(
        SessionCache::new(config.session_ttl()),
        ExchangeThrottle::new(config.exchange_limit_per_min, Duration::from_secs(60)),
        identity,
        store.clone(),
        config.reauth_path.clone(),
    );
    bootstrap.spawn_maintenance_worker();

    let state = AppState {
        bootstrap,
        journal: Journal::new(store, &messages::CURATED),
    };

    let mut allowed_origins = vec![config.frontend_url.parse::<axum::http::HeaderValue>()?];
    // In dev, also allow LAN access (e.g. testing from another device)
    if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
        for o in extra.split(',') {
            if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                allowed_origins.push(hv);
            }
        }
    }
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = app(state)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    // Client IP is needed to throttle token exchanges
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/vocabulary", get(handlers::vocabulary::get_vocabulary))
        .route(
            "/api/messages/:day/:mood",
            get(handlers::vocabulary::get_message),
        )
        .route("/api/session/bootstrap", post(handlers::session::bootstrap));

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::session::me))
        .route("/api/session", delete(handlers::session::end_session))
        .route("/api/entries", post(handlers::entries::log_mood))
        .route("/api/entries", get(handlers::entries::list_entries))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
