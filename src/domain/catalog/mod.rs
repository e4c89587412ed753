//! Catalogue domain module.
//!
//! Wire models for car listings and account activity, the search
//! filter vocabulary, and the pure formatting that turns listings
//! into render-ready cards.

mod activity;
mod card;
mod filters;
mod listing;

pub use activity::{SavedCar, SearchRecord, UserProfile, ViewedCar};
pub use card::{cards_from_payload, join_aspects, ListingCard};
pub use filters::SearchFilters;
pub use listing::{listings_from_payload, AspectNote, Listing};
