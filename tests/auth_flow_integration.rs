//! Integration tests for the full authentication flow.
//!
//! These tests wire the auth controller, view sync observer, and the
//! page feeds together over mock adapters and verify:
//! 1. Login updates the navbar, the durable store, and the personalized shelf
//! 2. Restore renders the initial page state for stored and empty sessions
//! 3. Registration signs the new account in end to end
//! 4. Logout clears local state even when the backend call fails
//! 5. Failed logins leave the page and the store anonymous
//! 6. Profile page panels follow the session across login and logout

use serde_json::json;
use std::sync::Arc;

use autoagg_client::adapters::{InMemorySessionStore, MockTransport, RecordingPage};
use autoagg_client::application::{AuthController, ProfilePanels, RecommendationFeed, ViewSync};
use autoagg_client::domain::foundation::{UserId, Username};
use autoagg_client::domain::session::{AuthError, LoginRequest, RegisterRequest, Session};
use autoagg_client::ports::{
    ApiFailure, Region, RegionView, SessionStore, StatusTone, USERNAME_KEY, USER_ID_KEY,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const PERSONALIZED_PATH: &str = "cars/personalized_recommendations/";

/// The full client wired over mock adapters, as main() wires it over
/// real ones.
struct TestApp {
    controller: Arc<AuthController>,
    store: Arc<InMemorySessionStore>,
    transport: Arc<MockTransport>,
    page: Arc<RecordingPage>,
}

async fn wire(transport: MockTransport, page: RecordingPage) -> TestApp {
    let transport = Arc::new(transport);
    let store = Arc::new(InMemorySessionStore::new());
    let page = Arc::new(page);

    let controller = Arc::new(AuthController::new(
        transport.clone(),
        store.clone(),
        page.clone(),
    ));

    let recommendations = Arc::new(RecommendationFeed::new(transport.clone(), page.clone()));
    let profile = Arc::new(ProfilePanels::new(transport.clone(), page.clone()));
    controller
        .subscribe(Arc::new(ViewSync::new(page.clone(), recommendations, profile)))
        .await;

    TestApp {
        controller,
        store,
        transport,
        page,
    }
}

fn corolla() -> serde_json::Value {
    json!({
        "id": 1,
        "make": "Toyota",
        "model": "Corolla",
        "year": 2024,
        "msrp_starting": "22325.00",
        "overall_rating": "4.5"
    })
}

fn login_success_body() -> serde_json::Value {
    json!({
        "message": "Login successful",
        "user_id": 7,
        "username": "alice"
    })
}

fn alice() -> Session {
    Session::signed_in(UserId::new(7), Username::new("alice").unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_login_updates_navbar_store_and_personalized_shelf() {
    let transport = MockTransport::new()
        .with_json("login/", login_success_body())
        .with_json(PERSONALIZED_PATH, json!([corolla()]));
    let app = wire(transport, RecordingPage::home()).await;

    let session = app
        .controller
        .submit_login(LoginRequest::new("alice", "secret"))
        .await
        .unwrap();

    assert_eq!(session, alice());
    assert_eq!(app.store.load().await.unwrap(), alice());

    let navbar = app.page.navbar().unwrap();
    assert_eq!(navbar.greeting().as_deref(), Some("Welcome, alice!"));

    assert_eq!(
        app.page.region(Region::PersonalizedTitle),
        Some(RegionView::text("Recommended For You, alice!"))
    );
    match app.page.region(Region::PersonalizedGrid) {
        Some(RegionView::Listings(cards)) => {
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].title, "2024 Toyota Corolla");
        }
        other => panic!("Expected listings in the personalized grid, got {:?}", other),
    }

    assert_eq!(
        app.page.region(Region::LoginStatus),
        Some(RegionView::status(StatusTone::Success, "Login successful!"))
    );

    assert_eq!(app.transport.calls_to("login/"), 1);
    assert_eq!(app.transport.calls_to(PERSONALIZED_PATH), 1);
}

#[tokio::test]
async fn test_restore_renders_stored_identity() {
    let transport = MockTransport::new().with_json(PERSONALIZED_PATH, json!([]));
    let app = wire(transport, RecordingPage::home()).await;
    app.store.set_entry(USER_ID_KEY, "7").await;
    app.store.set_entry(USERNAME_KEY, "alice").await;

    let session = app.controller.restore().await;

    assert_eq!(session, alice());
    let navbar = app.page.navbar().unwrap();
    assert_eq!(navbar.greeting().as_deref(), Some("Welcome, alice!"));
    assert_eq!(
        app.page.region(Region::PersonalizedGrid),
        Some(RegionView::text(
            "No personalized recommendations found at this time. Explore more cars!"
        ))
    );
}

#[tokio::test]
async fn test_restore_with_empty_store_still_fetches_recommendations() {
    // The backend is asked regardless of the local belief; here it
    // answers 401 and the shelf prompts for login.
    let transport =
        MockTransport::new().with_failure(PERSONALIZED_PATH, ApiFailure::status(401));
    let app = wire(transport, RecordingPage::home()).await;

    let session = app.controller.restore().await;

    assert_eq!(session, Session::Anonymous);
    assert!(!app.page.navbar().unwrap().is_signed_in());
    assert_eq!(app.transport.calls_to(PERSONALIZED_PATH), 1);
    assert_eq!(
        app.page.region(Region::PersonalizedTitle),
        Some(RegionView::text("Log In to See Your Personalized Picks!"))
    );
    assert_eq!(
        app.page.region(Region::PersonalizedGrid),
        Some(RegionView::login_prompt(
            "Please log in to your account to get personalized recommendations."
        ))
    );
}

#[tokio::test]
async fn test_registration_signs_the_new_account_in() {
    let transport = MockTransport::new()
        .with_json(
            "register/",
            json!({"message": "User registered", "user_id": 12, "username": "bob"}),
        )
        .with_json(PERSONALIZED_PATH, json!([]));
    let app = wire(transport, RecordingPage::home()).await;

    let session = app
        .controller
        .submit_register(RegisterRequest::new(
            "bob",
            "bob@example.com",
            "hunter22",
            "hunter22",
        ))
        .await
        .unwrap();

    let expected = Session::signed_in(UserId::new(12), Username::new("bob").unwrap());
    assert_eq!(session, expected);
    assert_eq!(app.store.load().await.unwrap(), expected);
    assert_eq!(
        app.page.navbar().unwrap().greeting().as_deref(),
        Some("Welcome, bob!")
    );
    assert_eq!(
        app.page.region(Region::RegisterStatus),
        Some(RegionView::status(
            StatusTone::Success,
            "Registration successful! You are now logged in."
        ))
    );
}

#[tokio::test]
async fn test_logout_clears_local_state_even_when_server_fails() {
    let transport = MockTransport::new()
        .with_json("login/", login_success_body())
        .with_failure("logout/", ApiFailure::status(500))
        .with_json(PERSONALIZED_PATH, json!([]));
    let app = wire(transport, RecordingPage::home()).await;

    app.controller
        .submit_login(LoginRequest::new("alice", "secret"))
        .await
        .unwrap();

    let session = app.controller.submit_logout().await.unwrap();

    assert_eq!(session, Session::Anonymous);
    assert_eq!(app.store.load().await.unwrap(), Session::Anonymous);
    assert!(!app.page.navbar().unwrap().is_signed_in());
    // One refresh per session change: login, then logout
    assert_eq!(app.transport.calls_to(PERSONALIZED_PATH), 2);
}

#[tokio::test]
async fn test_failed_login_leaves_page_and_store_anonymous() {
    let transport = MockTransport::new().with_failure(
        "login/",
        ApiFailure::status_with_body(401, json!({"detail": "Invalid credentials."})),
    );
    let app = wire(transport, RecordingPage::home()).await;

    let result = app
        .controller
        .submit_login(LoginRequest::new("alice", "wrong"))
        .await;

    match result {
        Err(AuthError::Rejected { message }) => {
            assert_eq!(message, "Login failed. Invalid credentials.");
        }
        other => panic!("Expected a rejection, got {:?}", other),
    }

    // No session change happened, so no observer ran
    assert!(app.page.navbar().is_none());
    assert_eq!(app.store.load().await.unwrap(), Session::Anonymous);
    assert_eq!(app.transport.calls_to(PERSONALIZED_PATH), 0);
    assert_eq!(
        app.page.region(Region::LoginStatus),
        Some(RegionView::status(
            StatusTone::Error,
            "Login failed. Invalid credentials."
        ))
    );
}

#[tokio::test]
async fn test_profile_panels_follow_the_session() {
    let transport = MockTransport::new()
        .with_json(PERSONALIZED_PATH, json!([]))
        .with_json("logout/", serde_json::Value::Null)
        .with_json(
            "users/7/",
            json!({"username": "alice", "email": "alice@example.com"}),
        )
        .with_json(
            "car-views/",
            json!([{"car": corolla(), "view_date": "2025-01-15T10:30:00Z"}]),
        )
        .with_json("car-saves/", json!([]))
        .with_json("search-queries/", json!([]));
    let app = wire(transport, RecordingPage::profile()).await;
    app.store.set_entry(USER_ID_KEY, "7").await;
    app.store.set_entry(USERNAME_KEY, "alice").await;

    app.controller.restore().await;

    assert_eq!(
        app.page.region(Region::ProfileDetail),
        Some(RegionView::Lines(vec![
            "Welcome, alice!".to_string(),
            "Email: alice@example.com".to_string(),
        ]))
    );
    assert_eq!(
        app.page.region(Region::ViewHistory),
        Some(RegionView::Lines(vec![
            "2024 Toyota Corolla (Viewed: 2025-01-15 10:30)".to_string()
        ]))
    );
    assert_eq!(
        app.page.region(Region::SaveHistory),
        Some(RegionView::text("No saved cars yet."))
    );
    assert_eq!(
        app.page.region(Region::SearchHistory),
        Some(RegionView::text("No search history yet."))
    );

    // Logging out swaps every panel to its anonymous placeholder
    app.controller.submit_logout().await.unwrap();

    assert_eq!(
        app.page.region(Region::ProfileDetail),
        Some(RegionView::login_prompt("Please log in to view your profile."))
    );
    assert_eq!(
        app.page.region(Region::ViewHistory),
        Some(RegionView::login_prompt("Log in to see your viewed cars."))
    );
    assert_eq!(
        app.page.region(Region::SaveHistory),
        Some(RegionView::login_prompt("Log in to see your saved cars."))
    );
    assert_eq!(
        app.page.region(Region::SearchHistory),
        Some(RegionView::login_prompt("Log in to see your search history."))
    );
}
