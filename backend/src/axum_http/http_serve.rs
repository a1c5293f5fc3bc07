use crate::{
    axum_http::{default_routers, routers},
    config::config_model::DotEnvyConfig,
};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use crates::infra;
use infra::db::postgres::postgres_connection::PgPoolSquad;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub fn app(config: &DotEnvyConfig, db_pool: Arc<PgPoolSquad>) -> Result<Router> {
    let body_limit = config
        .backend_server
        .body_limit_bytes()
        .context("SERVER_BODY_LIMIT is invalid")?;

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/categories",
            routers::categories::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/characteristics",
            routers::characteristics::routes(Arc::clone(&db_pool)),
        )
        .nest("/api/cities", routers::cities::routes(Arc::clone(&db_pool)))
        .nest("/api/images", routers::images::routes(Arc::clone(&db_pool)))
        .nest(
            "/api/tourist-plans",
            routers::tourist_plans::routes(Arc::clone(&db_pool)),
        )
        .nest("/api/users", routers::users::routes(Arc::clone(&db_pool)))
        .nest(
            "/api/reservations",
            routers::reservations::routes(Arc::clone(&db_pool)),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.backend_server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let app = app(&config, db_pool)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        stage = %config.stage,
        "Server is running on port {}",
        config.backend_server.port
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install terminate signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        config_model::{BackendServer, Database},
        stage::Stage,
    };
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use diesel::{
        PgConnection,
        r2d2::{ConnectionManager, Pool},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_config() -> DotEnvyConfig {
        DotEnvyConfig {
            backend_server: BackendServer {
                port: 0,
                body_limit: 1,
                timeout: 5,
            },
            database: Database {
                url: "postgres://localhost/unused".to_string(),
                max_connections: 1,
            },
            stage: Stage::Local,
        }
    }

    // Never connects: these requests are answered before any store call.
    fn unchecked_pool(config: &DotEnvyConfig) -> Arc<PgPoolSquad> {
        let pool = Pool::builder()
            .max_size(1)
            .build_unchecked(ConnectionManager::<PgConnection>::new(&config.database.url));
        Arc::new(pool)
    }

    fn test_app() -> Router {
        let config = test_config();
        let pool = unchecked_pool(&config);

        app(&config, pool).unwrap()
    }

    async fn get(uri: &str) -> (StatusCode, axum::body::Bytes) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, to_bytes(response.into_body(), usize::MAX).await.unwrap())
    }

    #[test]
    fn oversized_body_limit_is_an_error() {
        let mut config = test_config();
        config.backend_server.body_limit = u64::MAX;
        let pool = unchecked_pool(&config);

        let err = app(&config, pool).unwrap_err();

        assert_eq!(err.to_string(), "SERVER_BODY_LIMIT is invalid");
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (status, body) = get("/api/v1/health-check").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn unknown_route_answers_not_found_envelope() {
        let (status, body) = get("/api/unknown").await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn resources_are_nested_under_api_prefix() {
        for uri in [
            "/api/categories/abc",
            "/api/characteristics/abc",
            "/api/cities/abc",
            "/api/images/abc",
            "/api/tourist-plans/abc",
            "/api/users/abc",
            "/api/reservations/abc",
        ] {
            let (status, _) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
    }
}
