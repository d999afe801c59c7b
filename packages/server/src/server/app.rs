//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use gemini_client::GeminiClient;
use mailer::{MailerOptions, MailerService};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{GeminiAdapter, MailerAdapter, PostgresDirectory, ServerDeps};
use crate::server::routes::{
    chatbot_handler, health_handler, match_resources_handler, test_email_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Wire the production dependencies: Postgres directory, HTTP mail relay, Gemini.
pub fn build_server_deps(pool: PgPool, config: &Config) -> ServerDeps {
    let mailer = Arc::new(MailerService::new(MailerOptions {
        api_url: config.mail_api_url.clone(),
        api_key: config.mail_api_key.clone(),
        from: config.mail_from.clone(),
    }));

    let gemini = Arc::new(
        GeminiClient::new(config.gemini_api_key.clone()).with_model(config.gemini_model.clone()),
    );

    let mail_from = mailer.sender().to_string();

    ServerDeps::new(
        Arc::new(PostgresDirectory::new(pool)),
        Arc::new(MailerAdapter::new(mailer)),
        Arc::new(GeminiAdapter::new(gemini)),
        mail_from,
        config.notify_idempotency_keys,
    )
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
        None => cors.allow_origin(Any),
    }
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: Option<&[String]>) -> Router {
    let app_state = AxumAppState { deps };

    Router::new()
        .route("/api/match-resources", post(match_resources_handler))
        .route("/api/chatbot", post(chatbot_handler))
        .route("/api/test-email", get(test_email_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
