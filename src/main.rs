//! Demo binary for the AutoAggregator client core.
//!
//! Wires the REST transport, the file-backed session store, and a
//! console page together, restores the stored session, and renders the
//! home page. With `AUTOAGG__DEMO__USERNAME` and
//! `AUTOAGG__DEMO__PASSWORD` set it also runs a login/logout round trip
//! against the live API.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use autoagg_client::adapters::{ConsolePage, FileSessionStore, RestClient, RestClientConfig};
use autoagg_client::application::{
    AuthController, CatalogFeed, ProfilePanels, RecommendationFeed, ViewSync,
};
use autoagg_client::config::{AppConfig, ConfigError};
use autoagg_client::domain::catalog::SearchFilters;
use autoagg_client::domain::session::LoginRequest;
use autoagg_client::ports::{ApiTransport, HostPage, PageKind};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    // 1. Configuration and logging
    let config = AppConfig::load()?;
    config.validate()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting AutoAggregator client against {}", config.api.base_url);

    // 2. Wire the adapters into the client core
    let rest_config = RestClientConfig::new(&config.api.base_url)
        .with_timeout(Duration::from_secs(config.api.timeout_secs))
        .with_csrf_cookie(&config.api.csrf_cookie)
        .with_csrf_header(&config.api.csrf_header);
    let transport: Arc<dyn ApiTransport> = Arc::new(RestClient::new(rest_config));
    let store = Arc::new(FileSessionStore::new(&config.storage.session_file));
    let page: Arc<dyn HostPage> = Arc::new(ConsolePage::new(PageKind::Home));

    let controller = Arc::new(AuthController::new(
        transport.clone(),
        store,
        page.clone(),
    ));
    let recommendations = Arc::new(RecommendationFeed::new(transport.clone(), page.clone()));
    let profile = Arc::new(ProfilePanels::new(transport.clone(), page.clone()));
    let catalog = CatalogFeed::new(transport, page.clone());
    controller
        .subscribe(Arc::new(ViewSync::new(page, recommendations, profile)))
        .await;

    // 3. Initial page load
    controller.restore().await;
    catalog.search(&SearchFilters::new()).await;
    catalog.weekly_pick().await;

    // 4. Optional login/logout round trip with configured credentials
    if let Some((username, password)) = config.demo.credentials() {
        match controller
            .submit_login(LoginRequest::new(username, password))
            .await
        {
            Ok(_) => {
                if let Err(error) = controller.submit_logout().await {
                    tracing::error!("Demo logout failed: {}", error);
                }
            }
            Err(error) => tracing::error!("Demo login failed: {}", error),
        }
    }

    Ok(())
}
