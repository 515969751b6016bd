//! CORS policy for browser clients.
//!
//! - Development: any origin, no credentials.
//! - Production: exact-match allow-list from `CORS_ALLOWED_ORIGINS`. An empty
//!   list allows nothing.
//!
//! `Authorization` is always an allowed request header, since the bearer
//! token travels there.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::{AppEnv, Config};

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config.app_env, &config.cors_allowed_origins))
}

fn layer(app_env: AppEnv, allowed_origins: &[String]) -> CorsLayer {
    let base = if app_env.is_production() {
        let allowed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    base.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static("x-request-id"),
    ])
    .max_age(Duration::from_secs(600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(app_env: AppEnv, origins: &[&str]) -> Router {
        let origins: Vec<String> = origins.iter().map(|s| s.to_string()).collect();
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(layer(app_env, &origins))
    }

    async fn allow_origin_for(app: Router, origin: &str) -> Option<String> {
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn production_only_allows_listed_origins() {
        let listed = allow_origin_for(
            app(AppEnv::Production, &["https://app.example"]),
            "https://app.example",
        )
        .await;
        assert_eq!(listed.as_deref(), Some("https://app.example"));

        let other = allow_origin_for(
            app(AppEnv::Production, &["https://app.example"]),
            "https://evil.example",
        )
        .await;
        assert_eq!(other, None);
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let any = allow_origin_for(app(AppEnv::Development, &[]), "http://localhost:5173").await;
        assert_eq!(any.as_deref(), Some("*"));
    }
}
