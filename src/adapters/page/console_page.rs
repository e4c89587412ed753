//! Console page adapter.
//!
//! Renders page mutations as plain text on stdout. Used by the demo
//! binary to make the client core's behavior visible without a browser.

use crate::ports::{AuthForm, HostPage, NavbarView, PageKind, Region, RegionView, StatusTone};

/// Host page that draws every mutation to the terminal.
#[derive(Debug, Clone)]
pub struct ConsolePage {
    kind: PageKind,
}

impl ConsolePage {
    pub fn new(kind: PageKind) -> Self {
        Self { kind }
    }
}

fn region_label(region: Region) -> &'static str {
    match region {
        Region::CarGrid => "car-grid",
        Region::WeeklyPick => "weekly-pick",
        Region::PersonalizedTitle => "personalized-title",
        Region::PersonalizedGrid => "personalized-grid",
        Region::LoginStatus => "login-status",
        Region::RegisterStatus => "register-status",
        Region::ProfileDetail => "profile-detail",
        Region::ViewHistory => "view-history",
        Region::SaveHistory => "save-history",
        Region::SearchHistory => "search-history",
    }
}

fn tone_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Info => "info",
        StatusTone::Success => "ok",
        StatusTone::Error => "error",
    }
}

fn describe(view: &RegionView) -> String {
    match view {
        RegionView::Empty => String::new(),
        RegionView::Loading => "Loading...".to_string(),
        RegionView::Text(text) => text.clone(),
        RegionView::Status { tone, text } => format!("[{}] {}", tone_label(*tone), text),
        RegionView::LoginPrompt(text) => format!("[login required] {}", text),
        RegionView::Error(text) => format!("[error] {}", text),
        RegionView::Listings(cards) => {
            let mut out = format!("{} listing(s)", cards.len());
            for card in cards {
                out.push_str(&format!(
                    "\n    {} | {} | {} {}",
                    card.title, card.price_line, card.stars, card.rating_line
                ));
            }
            out
        }
        RegionView::Lines(lines) => lines.join("\n    "),
    }
}

impl HostPage for ConsolePage {
    fn kind(&self) -> PageKind {
        self.kind
    }

    fn set_navbar(&self, navbar: NavbarView) {
        match navbar.greeting() {
            Some(greeting) => println!("[navbar] {} | Logout", greeting),
            None => println!("[navbar] Login | Register"),
        }
    }

    fn set_form_enabled(&self, form: AuthForm, enabled: bool) {
        let name = match form {
            AuthForm::Login => "login",
            AuthForm::Register => "register",
        };
        let state = if enabled { "enabled" } else { "disabled" };
        println!("[form:{}] {}", name, state);
    }

    fn render(&self, region: Region, view: RegionView) {
        println!("[{}] {}", region_label(region), describe(&view));
    }
}
