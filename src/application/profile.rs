//! ProfilePanels - Refreshes the profile page regions.
//!
//! Four regions, four fetches. The fetches run concurrently and fail
//! independently: one broken endpoint shows its own error message and
//! leaves the other panels intact.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::catalog::{SavedCar, SearchRecord, UserProfile, ViewedCar};
use crate::domain::session::{Identity, Session};
use crate::ports::{ApiFailure, ApiRequest, ApiTransport, HostPage, Region, RegionView};

/// Placeholder shown in each panel while nobody is signed in.
static ANONYMOUS_PLACEHOLDERS: Lazy<Vec<(Region, &'static str)>> = Lazy::new(|| {
    vec![
        (Region::ProfileDetail, "Please log in to view your profile."),
        (Region::ViewHistory, "Log in to see your viewed cars."),
        (Region::SaveHistory, "Log in to see your saved cars."),
        (Region::SearchHistory, "Log in to see your search history."),
    ]
});

/// Fetches account detail and activity history for the profile page.
pub struct ProfilePanels {
    transport: Arc<dyn ApiTransport>,
    page: Arc<dyn HostPage>,
}

impl ProfilePanels {
    pub fn new(transport: Arc<dyn ApiTransport>, page: Arc<dyn HostPage>) -> Self {
        Self { transport, page }
    }

    /// Refreshes every profile region for the given session belief.
    pub async fn refresh(&self, session: &Session) {
        // 1. Anonymous visitors get a login placeholder in every panel
        let identity = match session.identity() {
            Some(identity) => identity,
            None => {
                for (region, text) in ANONYMOUS_PLACEHOLDERS.iter() {
                    self.page.render(*region, RegionView::login_prompt(*text));
                }
                return;
            }
        };

        tracing::debug!("Refreshing profile panels for '{}'", identity.username);

        // 2. Loading states while the history fetches run
        self.page.render(Region::ViewHistory, RegionView::Loading);
        self.page.render(Region::SaveHistory, RegionView::Loading);
        self.page.render(Region::SearchHistory, RegionView::Loading);

        // 3. Four independent fetches; each panel settles on its own
        let (detail, viewed, saved, searches) = tokio::join!(
            self.fetch_detail(identity),
            self.fetch_viewed(identity),
            self.fetch_saved(identity),
            self.fetch_searches(identity),
        );
        self.page.render(Region::ProfileDetail, detail);
        self.page.render(Region::ViewHistory, viewed);
        self.page.render(Region::SaveHistory, saved);
        self.page.render(Region::SearchHistory, searches);
    }

    async fn fetch_detail(&self, identity: &Identity) -> RegionView {
        let path = format!("users/{}/", identity.user_id);
        let outcome = self
            .transport
            .request(ApiRequest::get(path))
            .await
            .and_then(|payload| {
                serde_json::from_value::<UserProfile>(payload)
                    .map_err(|e| ApiFailure::decode(e.to_string()))
            });

        match outcome {
            Ok(profile) => RegionView::Lines(vec![
                format!("Welcome, {}!", profile.username),
                format!("Email: {}", profile.email),
            ]),
            Err(failure) => {
                tracing::warn!("Failed to load profile detail: {}", failure);
                RegionView::error(format!("Error loading profile. ({})", failure))
            }
        }
    }

    async fn fetch_viewed(&self, identity: &Identity) -> RegionView {
        let request =
            ApiRequest::get("car-views/").with_query("user", identity.user_id.to_string());
        match self.fetch_records::<ViewedCar>(request).await {
            Ok(records) if records.is_empty() => RegionView::text("No viewed cars yet."),
            Ok(records) => RegionView::Lines(records.iter().map(ViewedCar::line).collect()),
            Err(failure) => {
                tracing::warn!("Failed to load viewed cars: {}", failure);
                RegionView::error(format!("Failed to load viewed cars. ({})", failure))
            }
        }
    }

    async fn fetch_saved(&self, identity: &Identity) -> RegionView {
        let request =
            ApiRequest::get("car-saves/").with_query("user", identity.user_id.to_string());
        match self.fetch_records::<SavedCar>(request).await {
            Ok(records) if records.is_empty() => RegionView::text("No saved cars yet."),
            Ok(records) => RegionView::Lines(records.iter().map(SavedCar::line).collect()),
            Err(failure) => {
                tracing::warn!("Failed to load saved cars: {}", failure);
                RegionView::error(format!("Failed to load saved cars. ({})", failure))
            }
        }
    }

    async fn fetch_searches(&self, identity: &Identity) -> RegionView {
        let request =
            ApiRequest::get("search-queries/").with_query("user", identity.user_id.to_string());
        match self.fetch_records::<SearchRecord>(request).await {
            Ok(records) if records.is_empty() => RegionView::text("No search history yet."),
            Ok(records) => RegionView::Lines(records.iter().map(SearchRecord::line).collect()),
            Err(failure) => {
                tracing::warn!("Failed to load search history: {}", failure);
                RegionView::error(format!("Failed to load search history. ({})", failure))
            }
        }
    }

    /// Issues a list request and decodes the records, accepting both
    /// bare arrays and the paginated `{"results": [...]}` wrapper.
    async fn fetch_records<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Vec<T>, ApiFailure> {
        let payload = self.transport.request(request).await?;
        let items = match payload {
            Value::Object(mut map) => map.remove("results").unwrap_or(Value::Object(map)),
            other => other,
        };
        serde_json::from_value(items).map_err(|e| ApiFailure::decode(e.to_string()))
    }
}
