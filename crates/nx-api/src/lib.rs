pub mod routes;
pub mod state;

use axum::extract::Request;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use state::{ApiState, AppState};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the complete router: JSON API on `/api/*`, Leptos SSR for everything else.
pub fn build_router(state: AppState) -> Router {
    let config = state.api.config.clone();

    // API routes: health endpoint, then Leptos server functions as fallback
    let api: Router = api_routes()
        .fallback({
            let config = config.clone();
            move |req: Request| {
                let config = config.clone();
                async move {
                    leptos_axum::handle_server_fns_with_context(
                        move || provide_context(config.clone()),
                        req,
                    )
                    .await
                }
            }
        })
        .with_state(state.api.clone());

    // Leptos SSR routes: Router<AppState> then finalized via .with_state()
    let routes = generate_route_list(nx_web::app::App);
    let site_root = state.leptos_options.site_root.to_string();
    let leptos: Router = Router::<AppState>::new()
        .leptos_routes_with_context(
            &state,
            routes,
            move || {
                provide_context(config.clone());
            },
            {
                let leptos_options = state.leptos_options.clone();
                move || nx_web::app::shell(leptos_options.clone())
            },
        )
        .with_state(state);

    // Merge: API takes priority (nested under /api), then Leptos SSR,
    // then static files (CSS, assets) from the site root
    Router::new()
        .nest("/api", api)
        .merge(leptos)
        .fallback_service(ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<ApiState> {
    routes::health::router()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use nx_common::config::Config;
    use tower::util::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = ApiState {
            config: Arc::new(Config::default()),
        };
        let app = api_routes().with_state(state);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
