use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

/// Runs the startup sequence: connect, sync schema, then seed demo rows
/// outside production.
pub async fn init(config: &AppConfig) -> Result<AppState> {
    let pool = database::create_pool(&config.database).await?;

    database::sync_schema(&pool, config.environment).await?;

    if !config.environment.is_production() {
        if let Err(e) = database::seed_if_empty(&pool).await {
            tracing::error!("Error seeding database: {}", e);
        }
    }

    Ok(AppState { db: pool })
}

pub fn build(state: AppState, config: &AppConfig) -> Result<Router> {
    let allow_origin = if config.cors.allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allow_origin);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
