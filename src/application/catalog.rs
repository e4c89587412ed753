//! CatalogFeed - Car grid search and the weekly recommendation.

use std::sync::Arc;

use crate::domain::catalog::{cards_from_payload, Listing, ListingCard, SearchFilters};
use crate::ports::{ApiFailure, ApiRequest, ApiTransport, HostPage, Region, RegionView};

const CARS_PATH: &str = "cars/";
const WEEKLY_PATH: &str = "cars/weekly_recommendation/";

/// Fetches the public car catalogue and renders it into the car grid
/// and weekly pick regions.
pub struct CatalogFeed {
    transport: Arc<dyn ApiTransport>,
    page: Arc<dyn HostPage>,
}

impl CatalogFeed {
    pub fn new(transport: Arc<dyn ApiTransport>, page: Arc<dyn HostPage>) -> Self {
        Self { transport, page }
    }

    /// Runs a catalogue search and renders the result into the car grid.
    pub async fn search(&self, filters: &SearchFilters) {
        self.page.render(Region::CarGrid, RegionView::Loading);

        let request = ApiRequest::get(CARS_PATH).with_query_params(filters.to_query());
        match self.transport.request(request).await {
            Ok(payload) => {
                let cards = cards_from_payload(&payload);
                if cards.is_empty() {
                    self.page.render(
                        Region::CarGrid,
                        RegionView::text(
                            "No cars found matching your criteria. Try adjusting your search!",
                        ),
                    );
                } else {
                    tracing::debug!("Rendering {} cars", cards.len());
                    self.page.render(Region::CarGrid, RegionView::Listings(cards));
                }
            }
            Err(failure) => {
                tracing::warn!("Failed to load cars: {}", failure);
                self.page.render(
                    Region::CarGrid,
                    RegionView::error(format!(
                        "Failed to load cars. Please ensure the AutoAggregator API \
                         is running and accessible. ({})",
                        failure
                    )),
                );
            }
        }
    }

    /// Fetches the weekly recommendation. When the backend has none,
    /// the region shows a quiet no-recommendation message, not an error.
    pub async fn weekly_pick(&self) {
        let outcome = self
            .transport
            .request(ApiRequest::get(WEEKLY_PATH))
            .await
            .and_then(|payload| {
                serde_json::from_value::<Listing>(payload)
                    .map_err(|e| ApiFailure::decode(e.to_string()))
            });

        match outcome {
            Ok(listing) => {
                self.page.render(
                    Region::WeeklyPick,
                    RegionView::Listings(vec![ListingCard::from_listing(&listing)]),
                );
            }
            Err(failure) if failure.is_not_found() => {
                tracing::debug!("No weekly recommendation this week");
                self.page.render(
                    Region::WeeklyPick,
                    RegionView::text("No weekly recommendation available at this time."),
                );
            }
            Err(failure) => {
                tracing::warn!("Failed to load weekly recommendation: {}", failure);
                self.page.render(
                    Region::WeeklyPick,
                    RegionView::error(format!("Failed to load recommendation. ({})", failure)),
                );
            }
        }
    }
}
