//! ViewSync - Keeps page regions in line with the session.
//!
//! Subscribed to the AuthController's session-changed events. Each
//! notification re-derives the page from the event alone, so delivering
//! the same event twice renders the same result.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::profile::ProfilePanels;
use crate::application::recommendations::RecommendationFeed;
use crate::domain::session::SessionChanged;
use crate::ports::{HostPage, NavbarView, PageKind, SessionObserver};

/// Session observer that refreshes the navbar and the session-scoped
/// page regions on every session change.
pub struct ViewSync {
    page: Arc<dyn HostPage>,
    recommendations: Arc<RecommendationFeed>,
    profile: Arc<ProfilePanels>,
}

impl ViewSync {
    pub fn new(
        page: Arc<dyn HostPage>,
        recommendations: Arc<RecommendationFeed>,
        profile: Arc<ProfilePanels>,
    ) -> Self {
        Self {
            page,
            recommendations,
            profile,
        }
    }
}

#[async_trait]
impl SessionObserver for ViewSync {
    async fn on_session_changed(&self, event: &SessionChanged) {
        tracing::debug!("Syncing page after {:?} session change", event.cause);

        // 1. Navbar reflects the new identity
        self.page.set_navbar(NavbarView::for_session(&event.session));

        // 2. Personalized recommendations refresh on every change,
        //    including the initial restore
        self.recommendations.refresh(&event.session).await;

        // 3. Profile regions exist only on the profile page
        if self.page.kind() == PageKind::Profile {
            self.profile.refresh(&event.session).await;
        }
    }

    fn name(&self) -> &'static str {
        "view-sync"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockTransport, RecordingPage};
    use crate::domain::foundation::{UserId, Username};
    use crate::domain::session::{Session, SessionChangeCause};
    use crate::ports::{ApiFailure, ApiTransport, Region, RegionView};
    use serde_json::json;

    const PERSONALIZED_PATH: &str = "cars/personalized_recommendations/";

    fn view_sync(transport: MockTransport, page: Arc<RecordingPage>) -> ViewSync {
        let transport: Arc<dyn ApiTransport> = Arc::new(transport);
        ViewSync::new(
            page.clone(),
            Arc::new(RecommendationFeed::new(transport.clone(), page.clone())),
            Arc::new(ProfilePanels::new(transport, page)),
        )
    }

    fn alice() -> Session {
        Session::signed_in(UserId::new(7), Username::new("alice").unwrap())
    }

    fn signed_in_event() -> SessionChanged {
        SessionChanged::new(alice(), SessionChangeCause::LoggedIn)
    }

    #[tokio::test]
    async fn updates_navbar_for_signed_in_session() {
        let transport = MockTransport::new().with_json(PERSONALIZED_PATH, json!([]));
        let page = Arc::new(RecordingPage::home());
        view_sync(transport, page.clone())
            .on_session_changed(&signed_in_event())
            .await;

        let navbar = page.navbar().unwrap();
        assert_eq!(navbar.greeting(), Some("Welcome, alice!".to_string()));
    }

    #[tokio::test]
    async fn updates_navbar_for_anonymous_session() {
        let transport =
            MockTransport::new().with_failure(PERSONALIZED_PATH, ApiFailure::status(401));
        let page = Arc::new(RecordingPage::home());
        let event = SessionChanged::new(Session::Anonymous, SessionChangeCause::LoggedOut);
        view_sync(transport, page.clone()).on_session_changed(&event).await;

        assert_eq!(page.navbar(), Some(NavbarView::Anonymous));
    }

    #[tokio::test]
    async fn refreshes_recommendations_on_every_change() {
        let transport =
            MockTransport::new().with_failure(PERSONALIZED_PATH, ApiFailure::status(401));
        let page = Arc::new(RecordingPage::home());
        let sync = view_sync(transport.clone(), page);

        let restored = SessionChanged::new(Session::Anonymous, SessionChangeCause::Restored);
        sync.on_session_changed(&restored).await;
        sync.on_session_changed(&signed_in_event()).await;

        assert_eq!(transport.calls_to(PERSONALIZED_PATH), 2);
    }

    #[tokio::test]
    async fn skips_profile_regions_on_home_page() {
        let transport = MockTransport::new().with_json(PERSONALIZED_PATH, json!([]));
        let page = Arc::new(RecordingPage::home());
        let event = SessionChanged::new(Session::Anonymous, SessionChangeCause::Restored);
        view_sync(transport, page.clone()).on_session_changed(&event).await;

        assert_eq!(page.region(Region::ProfileDetail), None);
        assert_eq!(page.region(Region::ViewHistory), None);
    }

    #[tokio::test]
    async fn refreshes_profile_regions_on_profile_page() {
        let transport = MockTransport::new().with_json(PERSONALIZED_PATH, json!([]));
        let page = Arc::new(RecordingPage::profile());
        let event = SessionChanged::new(Session::Anonymous, SessionChangeCause::Restored);
        view_sync(transport, page.clone()).on_session_changed(&event).await;

        assert_eq!(
            page.region(Region::ProfileDetail),
            Some(RegionView::login_prompt("Please log in to view your profile."))
        );
    }

    #[tokio::test]
    async fn delivering_the_same_event_twice_renders_the_same_state() {
        let transport = MockTransport::new().with_json(
            PERSONALIZED_PATH,
            json!([{"make": "Honda", "model": "Civic", "year": 2023}]),
        );
        let page = Arc::new(RecordingPage::home());
        let sync = view_sync(transport, page.clone());
        let event = signed_in_event();

        sync.on_session_changed(&event).await;
        let navbar_first = page.navbar();
        let title_first = page.region(Region::PersonalizedTitle);
        let grid_first = page.region(Region::PersonalizedGrid);

        sync.on_session_changed(&event).await;

        assert_eq!(page.navbar(), navbar_first);
        assert_eq!(page.region(Region::PersonalizedTitle), title_first);
        assert_eq!(page.region(Region::PersonalizedGrid), grid_first);
    }

    /// Session belief and server truth can disagree: the navbar is
    /// drawn from the event while the grid reflects the server's 401.
    /// The page converges on the next session change, not silently.
    #[tokio::test]
    async fn stale_belief_shows_signed_in_navbar_with_login_prompt_grid() {
        let transport =
            MockTransport::new().with_failure(PERSONALIZED_PATH, ApiFailure::status(401));
        let page = Arc::new(RecordingPage::home());
        view_sync(transport, page.clone())
            .on_session_changed(&SessionChanged::new(alice(), SessionChangeCause::Restored))
            .await;

        assert!(page.navbar().unwrap().is_signed_in());
        assert_eq!(
            page.region(Region::PersonalizedGrid),
            Some(RegionView::login_prompt(
                "Please log in to your account to get personalized recommendations."
            ))
        );
        assert_eq!(
            page.region(Region::PersonalizedTitle),
            Some(RegionView::text("Log In to See Your Personalized Picks!"))
        );
    }
}
