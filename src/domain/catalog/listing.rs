//! Car listing wire model.
//!
//! Listings arrive from the marketplace API with optional and loosely
//! typed fields. Decimal amounts are serialized as strings, and the
//! AI aspect lists are free-form JSON. Deserialization tolerates both
//! rather than failing an entire payload on one malformed field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One pro or con produced by the backend's listing analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectNote {
    pub aspect: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl AspectNote {
    /// Display line for this aspect.
    ///
    /// The description is appended only when it adds information:
    /// present, not a restatement of the aspect, and not one of the
    /// bare "Good"/"Poor" grades.
    pub fn line(&self) -> String {
        match &self.description {
            Some(d)
                if !d.is_empty()
                    && !d.eq_ignore_ascii_case(&self.aspect)
                    && d != "Good"
                    && d != "Poor" =>
            {
                format!("{}: {}", self.aspect, d)
            }
            _ => self.aspect.clone(),
        }
    }
}

/// A car listing as served by the marketplace API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub msrp_starting: Option<f64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub ai_insight_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_aspects")]
    pub top_pros: Vec<AspectNote>,
    #[serde(default, deserialize_with = "lenient_aspects")]
    pub top_cons: Vec<AspectNote>,
    #[serde(default)]
    pub main_image_url: Option<String>,
}

impl Listing {
    /// Short display label, with N/A standing in for absent fields.
    pub fn label(&self) -> String {
        let year = self
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        format!(
            "{} {} {}",
            year,
            text_or_na(&self.make),
            text_or_na(&self.model)
        )
    }
}

fn text_or_na(field: &Option<String>) -> &str {
    match field {
        Some(s) if !s.is_empty() => s,
        _ => "N/A",
    }
}

/// Accepts decimal fields serialized as JSON numbers or as strings.
/// Anything unparseable becomes None.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Accepts aspect lists that are missing, null, or not arrays.
/// Entries without a usable aspect string are skipped.
fn lenient_aspects<'de, D>(deserializer: D) -> Result<Vec<AspectNote>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let aspect = obj.get("aspect")?.as_str()?.to_string();
            let description = obj
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(AspectNote { aspect, description })
        })
        .collect())
}

/// Extracts listing records from a list endpoint payload.
///
/// The API serves both bare arrays and the paginated
/// `{"results": [...]}` wrapper. Items that do not parse as listing
/// records are skipped rather than failing the whole payload.
pub fn listings_from_payload(payload: &Value) -> Vec<Listing> {
    let items = payload
        .get("results")
        .and_then(Value::as_array)
        .or_else(|| payload.as_array());
    match items {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => Vec::new(),
    }
}
