//! Per-account activity records shown on the profile page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::listing::Listing;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Profile details for the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// A listing the account opened, with the time of the visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewedCar {
    pub car: Listing,
    pub view_date: DateTime<Utc>,
}

impl ViewedCar {
    pub fn line(&self) -> String {
        format!(
            "{} (Viewed: {})",
            self.car.label(),
            self.view_date.format(TIMESTAMP_FORMAT)
        )
    }
}

/// A listing the account bookmarked, with the time it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCar {
    pub car: Listing,
    pub save_date: DateTime<Utc>,
}

impl SavedCar {
    pub fn line(&self) -> String {
        format!(
            "{} (Saved: {})",
            self.car.label(),
            self.save_date.format(TIMESTAMP_FORMAT)
        )
    }
}

/// A search the account ran, with the time it was issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub query_text: String,
    pub timestamp: DateTime<Utc>,
}

impl SearchRecord {
    pub fn line(&self) -> String {
        format!(
            "Searched for \"{}\" on {}",
            self.query_text,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn corolla() -> Listing {
        serde_json::from_str(r#"{"make": "Toyota", "model": "Corolla", "year": 2024}"#).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn viewed_car_line_includes_label_and_time() {
        let record = ViewedCar { car: corolla(), view_date: noon() };
        assert_eq!(record.line(), "2024 Toyota Corolla (Viewed: 2024-05-01 12:30)");
    }

    #[test]
    fn saved_car_line_includes_label_and_time() {
        let record = SavedCar { car: corolla(), save_date: noon() };
        assert_eq!(record.line(), "2024 Toyota Corolla (Saved: 2024-05-01 12:30)");
    }

    #[test]
    fn search_record_line_quotes_the_query() {
        let record = SearchRecord {
            query_text: "make: toyota".to_string(),
            timestamp: noon(),
        };
        assert_eq!(
            record.line(),
            "Searched for \"make: toyota\" on 2024-05-01 12:30"
        );
    }

    #[test]
    fn viewed_car_parses_backend_timestamps() {
        let json = r#"{
            "car": {"make": "Honda", "model": "Civic", "year": 2023},
            "view_date": "2024-05-01T12:30:00.123456Z"
        }"#;
        let record: ViewedCar = serde_json::from_str(json).unwrap();
        assert_eq!(record.line(), "2023 Honda Civic (Viewed: 2024-05-01 12:30)");
    }

    #[test]
    fn user_profile_tolerates_missing_email() {
        let profile: UserProfile = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "");
    }
}
