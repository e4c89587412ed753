//! RecommendationFeed - Refreshes the personalized recommendations region.

use std::sync::Arc;

use crate::domain::catalog::cards_from_payload;
use crate::domain::session::Session;
use crate::ports::{ApiRequest, ApiTransport, HostPage, Region, RegionView};

const PERSONALIZED_PATH: &str = "cars/personalized_recommendations/";

/// Fetches personalized recommendations and renders them into the
/// personalized title and grid regions.
pub struct RecommendationFeed {
    transport: Arc<dyn ApiTransport>,
    page: Arc<dyn HostPage>,
}

impl RecommendationFeed {
    pub fn new(transport: Arc<dyn ApiTransport>, page: Arc<dyn HostPage>) -> Self {
        Self { transport, page }
    }

    /// Refreshes the personalized region for the given session belief.
    ///
    /// The fetch is issued no matter what the belief says; the server
    /// decides whether the caller is authenticated. A 401 answer is a
    /// distinct "log in" state, never an error message.
    pub async fn refresh(&self, session: &Session) {
        // 1. Optimistic title from the local belief
        let name = session
            .username()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "User".to_string());
        self.page.render(
            Region::PersonalizedTitle,
            RegionView::text(format!("Recommended For You, {}!", name)),
        );
        self.page.render(Region::PersonalizedGrid, RegionView::Loading);

        // 2. Ask the server and render whichever outcome came back
        match self
            .transport
            .request(ApiRequest::get(PERSONALIZED_PATH))
            .await
        {
            Ok(payload) => {
                let cards = cards_from_payload(&payload);
                if cards.is_empty() {
                    self.page.render(
                        Region::PersonalizedGrid,
                        RegionView::text(
                            "No personalized recommendations found at this time. \
                             Explore more cars!",
                        ),
                    );
                } else {
                    tracing::debug!("Rendering {} personalized recommendations", cards.len());
                    self.page
                        .render(Region::PersonalizedGrid, RegionView::Listings(cards));
                }
            }
            Err(failure) if failure.is_unauthenticated() => {
                tracing::debug!("Personalized recommendations require a signed-in account");
                self.page.render(
                    Region::PersonalizedTitle,
                    RegionView::text("Log In to See Your Personalized Picks!"),
                );
                self.page.render(
                    Region::PersonalizedGrid,
                    RegionView::login_prompt(
                        "Please log in to your account to get personalized recommendations.",
                    ),
                );
            }
            Err(failure) => {
                tracing::warn!("Failed to load personalized recommendations: {}", failure);
                self.page.render(
                    Region::PersonalizedGrid,
                    RegionView::error(format!(
                        "Failed to load personalized recommendations. ({})",
                        failure
                    )),
                );
            }
        }
    }
}
