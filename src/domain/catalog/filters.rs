//! Search filters for the car catalogue.

use serde::{Deserialize, Serialize};

/// User-entered search criteria.
///
/// Text fields are normalized (trimmed, lowercased) when converted to
/// query parameters; blank entries are skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub max_price: Option<f64>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    /// Backend filter parameters for the listing endpoint.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(make) = normalized(&self.make) {
            params.push(("make__icontains".to_string(), make));
        }
        if let Some(model) = normalized(&self.model) {
            params.push(("model__icontains".to_string(), model));
        }
        if let Some(year) = self.year {
            params.push(("year".to_string(), year.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("msrp_starting__lte".to_string(), max_price.to_string()));
        }
        params
    }
}

fn normalized(field: &Option<String>) -> Option<String> {
    let trimmed = field.as_deref()?.trim().to_lowercase();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
