//! Render-ready listing card.
//!
//! Pure presentation logic: turns a wire [`Listing`] into the display
//! strings every page region renders the same way. No I/O here, which
//! keeps the formatting rules independently testable.

use serde::{Deserialize, Serialize};

use super::listing::{AspectNote, Listing};

/// Display strings for one listing, ready for a host page to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCard {
    /// "2024 Toyota Corolla", with N/A for absent fields.
    pub title: String,

    /// "Starting at $22,325" or "Price N/A".
    pub price_line: String,

    /// "★★★★☆" or "No Rating".
    pub stars: String,

    /// "4.5/5" or "N/A".
    pub rating_line: String,

    /// Joined pros, else body type, else a generic heading.
    pub features: String,

    /// "Cons: ..." when the listing has any cons.
    pub cons_line: Option<String>,

    /// AI summary, with a fallback when analysis has not run yet.
    pub insight: String,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.label(),
            price_line: price_line(listing.msrp_starting),
            stars: stars(listing.overall_rating),
            rating_line: rating_line(listing.overall_rating),
            features: features(listing),
            cons_line: cons_line(&listing.top_cons),
            insight: insight(&listing.ai_insight_summary),
        }
    }
}

/// Cards for every listing in a list endpoint payload.
pub fn cards_from_payload(payload: &serde_json::Value) -> Vec<ListingCard> {
    super::listing::listings_from_payload(payload)
        .iter()
        .map(ListingCard::from_listing)
        .collect()
}

fn price_line(msrp: Option<f64>) -> String {
    match msrp {
        Some(amount) => format!("Starting at ${}", format_amount(amount)),
        None => "Price N/A".to_string(),
    }
}

fn rating_line(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}/5", r),
        None => "N/A".to_string(),
    }
}

fn stars(rating: Option<f64>) -> String {
    match rating {
        Some(r) => {
            let full = r.floor().clamp(0.0, 5.0) as usize;
            let mut out = "★".repeat(full);
            out.push_str(&"☆".repeat(5 - full));
            out
        }
        None => "No Rating".to_string(),
    }
}

fn features(listing: &Listing) -> String {
    if !listing.top_pros.is_empty() {
        return join_aspects(&listing.top_pros);
    }
    match &listing.body_type {
        Some(body) if !body.is_empty() => body.clone(),
        _ => "Key Features".to_string(),
    }
}

fn cons_line(cons: &[AspectNote]) -> Option<String> {
    if cons.is_empty() {
        None
    } else {
        Some(format!("Cons: {}", join_aspects(cons)))
    }
}

fn insight(summary: &Option<String>) -> String {
    match summary {
        Some(s) if !s.is_empty() => s.clone(),
        _ => "No detailed AI analysis available yet.".to_string(),
    }
}

/// Joins aspect display lines with a bullet separator.
pub fn join_aspects(notes: &[AspectNote]) -> String {
    notes
        .iter()
        .map(AspectNote::line)
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Formats a monetary amount with thousands separators, keeping up to
/// three fractional digits and dropping trailing zeros.
fn format_amount(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let (whole, frac) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), ""),
    };
    let frac = frac.trim_end_matches('0');
    let grouped = group_thousands(whole);
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
