//! Host Page Port - Interface for mutating the page the client runs on.
//!
//! The client core never touches rendering machinery directly. It
//! describes what each named region should show and lets the host
//! page adapter draw it. Rendering the same view into a region twice
//! must be harmless; callers rely on that for idempotent refreshes.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ListingCard;
use crate::domain::session::Session;

/// Which page the client is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Landing page: car grid, weekly pick, personalized shelf.
    Home,
    /// Profile page: account details and activity panels.
    Profile,
}

/// The two credential forms the controller can disable while a
/// submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

/// Visual weight of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

/// Named page regions the client renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Main listing grid on the home page.
    CarGrid,
    /// Weekly recommendation spot.
    WeeklyPick,
    /// Heading above the personalized shelf.
    PersonalizedTitle,
    /// Personalized recommendation shelf.
    PersonalizedGrid,
    /// Status line under the login form.
    LoginStatus,
    /// Status line under the registration form.
    RegisterStatus,
    /// Account details panel on the profile page.
    ProfileDetail,
    /// Recently viewed cars panel.
    ViewHistory,
    /// Saved cars panel.
    SaveHistory,
    /// Search history panel.
    SearchHistory,
}

/// What a region should display.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionView {
    /// Nothing. Used to wipe stale content.
    Empty,
    /// A fetch is in progress.
    Loading,
    /// Plain informational text.
    Text(String),
    /// Outcome line for a form submission.
    Status { tone: StatusTone, text: String },
    /// The viewer must sign in to see this region.
    LoginPrompt(String),
    /// The region could not be populated.
    Error(String),
    /// Listing cards to lay out.
    Listings(Vec<ListingCard>),
    /// Plain text lines, one per record.
    Lines(Vec<String>),
}

impl RegionView {
    pub fn text(text: impl Into<String>) -> Self {
        RegionView::Text(text.into())
    }

    pub fn status(tone: StatusTone, text: impl Into<String>) -> Self {
        RegionView::Status {
            tone,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        RegionView::Error(text.into())
    }

    pub fn login_prompt(text: impl Into<String>) -> Self {
        RegionView::LoginPrompt(text.into())
    }
}

/// What the navbar should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarView {
    /// Login and register links.
    Anonymous,
    /// Greeting and logout link.
    SignedIn { username: String },
}

impl NavbarView {
    /// Derives the navbar from the current session belief.
    pub fn for_session(session: &Session) -> Self {
        match session.username() {
            Some(username) => NavbarView::SignedIn {
                username: username.to_string(),
            },
            None => NavbarView::Anonymous,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, NavbarView::SignedIn { .. })
    }

    /// Greeting line, present only when signed in.
    pub fn greeting(&self) -> Option<String> {
        match self {
            NavbarView::Anonymous => None,
            NavbarView::SignedIn { username } => Some(format!("Welcome, {}!", username)),
        }
    }
}

/// Port for driving the page the client is embedded in
pub trait HostPage: Send + Sync {
    /// Which page this adapter is driving.
    fn kind(&self) -> PageKind;

    /// Replaces the navbar contents.
    fn set_navbar(&self, navbar: NavbarView);

    /// Enables or disables a credential form's submit control.
    fn set_form_enabled(&self, form: AuthForm, enabled: bool);

    /// Replaces a region's contents. Regions this page does not have
    /// are ignored.
    fn render(&self, region: Region, view: RegionView);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{UserId, Username};

    // Trait object safety test
    #[test]
    fn host_page_is_object_safe() {
        fn _accepts_dyn(_page: &dyn HostPage) {}
    }

    #[test]
    fn test_navbar_for_signed_in_session_greets_by_name() {
        let session = Session::signed_in(UserId::new(7), Username::new("alice").unwrap());
        let navbar = NavbarView::for_session(&session);

        assert!(navbar.is_signed_in());
        assert_eq!(navbar.greeting().as_deref(), Some("Welcome, alice!"));
    }

    #[test]
    fn test_navbar_for_anonymous_session_has_no_greeting() {
        let navbar = NavbarView::for_session(&Session::Anonymous);

        assert!(!navbar.is_signed_in());
        assert_eq!(navbar.greeting(), None);
    }

    #[test]
    fn test_region_view_constructors() {
        assert_eq!(
            RegionView::status(StatusTone::Info, "Logging in..."),
            RegionView::Status {
                tone: StatusTone::Info,
                text: "Logging in...".to_string()
            }
        );
        assert_eq!(
            RegionView::error("boom"),
            RegionView::Error("boom".to_string())
        );
    }
}
