use leptos::prelude::*;

use crate::types::OverviewData;

#[server]
pub async fn get_overview_data() -> Result<OverviewData, ServerFnError> {
    use std::sync::Arc;

    use nx_common::config::Config;

    let config: Arc<Config> = expect_context();

    Ok(OverviewData {
        version: env!("CARGO_PKG_VERSION").to_string(),
        directory_url: config.directory.base_url.clone(),
    })
}
