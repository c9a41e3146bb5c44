use std::sync::Arc;

use leptos::prelude::LeptosOptions;
use nx_common::config::Config;

/// Combined state: API services + Leptos options.
/// Manual `FromRef` impls let both API handlers (extracting `ApiState`) and
/// Leptos (extracting `LeptosOptions`) coexist in the same router.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiState,
    pub leptos_options: LeptosOptions,
}

impl axum::extract::FromRef<AppState> for ApiState {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

/// Shared application state for all API routes.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
}
