//! AuthController - Drives the login, registration, and logout flows.
//!
//! The controller owns the client's session belief and the auth phase
//! machine. Every transition follows the same order: durable storage is
//! brought in line first, then the session cache, then the phase, and
//! only then are observers notified. Observers therefore never read a
//! store that lags the event they received.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde_json::{json, Value};
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{StateMachine, UserId, Username, ValidationError};
use crate::domain::session::{
    AuthError, AuthPhase, Identity, LoginRequest, RegisterRequest, Session, SessionChangeCause,
    SessionChanged,
};
use crate::ports::{
    ApiFailure, ApiRequest, ApiTransport, AuthForm, HostPage, Region, RegionView, SessionObserver,
    SessionStore, StatusTone,
};

const LOGIN_PATH: &str = "login/";
const REGISTER_PATH: &str = "register/";
const LOGOUT_PATH: &str = "logout/";

/// Coordinates credential flows between the backend, the session store,
/// the host page, and registered session observers.
pub struct AuthController {
    transport: Arc<dyn ApiTransport>,
    store: Arc<dyn SessionStore>,
    page: Arc<dyn HostPage>,
    phase: Mutex<AuthPhase>,
    session: RwLock<Session>,
    observers: RwLock<Vec<Arc<dyn SessionObserver>>>,
}

impl AuthController {
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        store: Arc<dyn SessionStore>,
        page: Arc<dyn HostPage>,
    ) -> Self {
        Self {
            transport,
            store,
            page,
            phase: Mutex::new(AuthPhase::Anonymous),
            session: RwLock::new(Session::Anonymous),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Registers an observer. Observers are notified in subscription
    /// order after every session change.
    pub async fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        tracing::debug!("Registering session observer '{}'", observer.name());
        self.observers.write().await.push(observer);
    }

    /// The current session belief.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// The current auth phase.
    pub async fn phase(&self) -> AuthPhase {
        *self.phase.lock().await
    }

    /// Loads the stored session and adopts it as the current belief.
    ///
    /// Always publishes a change event, even when the store is empty or
    /// unreadable, so observers render the initial page state. Restore
    /// is not an auth flow; the phase machine is untouched.
    pub async fn restore(&self) -> Session {
        // 1. Read the durable mirror; an unreadable store reads as anonymous
        let session = match self.store.load().await {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!("Failed to load stored session, starting anonymous: {}", error);
                Session::Anonymous
            }
        };

        match session.username() {
            Some(username) => tracing::info!("Restored session for '{}'", username),
            None => tracing::info!("No stored session, starting anonymous"),
        }

        // 2. Adopt the restored belief and tell observers
        {
            let mut current = self.session.write().await;
            *current = session.clone();
        }
        self.publish(SessionChanged::new(
            session.clone(),
            SessionChangeCause::Restored,
        ))
        .await;

        session
    }

    /// Submits login credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InFlight`] when another submission is still
    /// running, [`AuthError::Validation`] when a field is missing (no
    /// network call is made), [`AuthError::Rejected`] when the backend
    /// declines the credentials, and [`AuthError::Transport`] when no
    /// usable response arrived.
    pub async fn submit_login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        // 1. Ignore re-entrant submissions while a request is in flight
        {
            let mut phase = self.phase.lock().await;
            if phase.is_busy() {
                tracing::debug!("Ignoring login submission while another request is in flight");
                return Err(AuthError::InFlight);
            }

            // 2. Validate locally; an incomplete request never reaches the network
            if let Err(error) = request.validate() {
                self.page.render(
                    Region::LoginStatus,
                    RegionView::status(StatusTone::Error, "Username and password are required."),
                );
                return Err(error.into());
            }

            *phase = phase.transition_to(AuthPhase::Authenticating)?;
        }

        // 3. Disable the form and show progress while the request runs
        self.page.set_form_enabled(AuthForm::Login, false);
        self.page.render(
            Region::LoginStatus,
            RegionView::status(StatusTone::Info, "Logging in..."),
        );

        // 4. Submit credentials
        let body = json!({
            "username": request.username,
            "password": request.password.expose_secret(),
        });
        let outcome = self
            .transport
            .request(ApiRequest::post(LOGIN_PATH).with_body(body))
            .await;

        match outcome.and_then(parse_identity) {
            Ok(identity) => {
                tracing::info!("Login succeeded for '{}'", identity.username);

                // 5. Persist, adopt, and announce the new session
                let session = self
                    .complete_sign_in(identity, SessionChangeCause::LoggedIn)
                    .await?;

                // 6. Report success and restore the form
                self.page.render(
                    Region::LoginStatus,
                    RegionView::status(StatusTone::Success, "Login successful!"),
                );
                self.page.set_form_enabled(AuthForm::Login, true);
                Ok(session)
            }
            Err(failure) => {
                let error = login_failure(&failure);
                tracing::debug!("Login failed: {}", error);

                self.page.render(
                    Region::LoginStatus,
                    RegionView::status(StatusTone::Error, error.to_string()),
                );
                self.page.set_form_enabled(AuthForm::Login, true);
                self.settle_phase(AuthPhase::Anonymous).await?;
                Err(error)
            }
        }
    }

    /// Submits registration details. Success performs an implicit login
    /// with the identity the backend returns.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::submit_login`].
    pub async fn submit_register(&self, request: RegisterRequest) -> Result<Session, AuthError> {
        // 1. Ignore re-entrant submissions while a request is in flight
        {
            let mut phase = self.phase.lock().await;
            if phase.is_busy() {
                tracing::debug!(
                    "Ignoring registration submission while another request is in flight"
                );
                return Err(AuthError::InFlight);
            }

            // 2. Validate locally; an incomplete request never reaches the network
            if let Err(error) = request.validate() {
                self.page.render(
                    Region::RegisterStatus,
                    RegionView::status(StatusTone::Error, register_validation_message(&error)),
                );
                return Err(error.into());
            }

            *phase = phase.transition_to(AuthPhase::Authenticating)?;
        }

        // 3. Disable the form and show progress while the request runs
        self.page.set_form_enabled(AuthForm::Register, false);
        self.page.render(
            Region::RegisterStatus,
            RegionView::status(StatusTone::Info, "Registering..."),
        );

        // 4. Submit the registration
        let body = json!({
            "username": request.username,
            "email": request.email,
            "password": request.password.expose_secret(),
        });
        let outcome = self
            .transport
            .request(ApiRequest::post(REGISTER_PATH).with_body(body))
            .await;

        match outcome.and_then(parse_identity) {
            Ok(identity) => {
                tracing::info!("Registration succeeded for '{}'", identity.username);

                // 5. Registration signs the new account in
                let session = self
                    .complete_sign_in(identity, SessionChangeCause::Registered)
                    .await?;

                // 6. Report success and restore the form
                self.page.render(
                    Region::RegisterStatus,
                    RegionView::status(
                        StatusTone::Success,
                        "Registration successful! You are now logged in.",
                    ),
                );
                self.page.set_form_enabled(AuthForm::Register, true);
                Ok(session)
            }
            Err(failure) => {
                let error = register_failure(&failure);
                tracing::debug!("Registration failed: {}", error);

                self.page.render(
                    Region::RegisterStatus,
                    RegionView::status(StatusTone::Error, error.to_string()),
                );
                self.page.set_form_enabled(AuthForm::Register, true);
                self.settle_phase(AuthPhase::Anonymous).await?;
                Err(error)
            }
        }
    }

    /// Logs out. Local session state is cleared whether or not the
    /// server call succeeds; a server-side failure only logs a warning.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InFlight`] when another submission is still
    /// running. Server-side failures are not errors for the caller.
    pub async fn submit_logout(&self) -> Result<Session, AuthError> {
        let signed_in = self.session.read().await.is_signed_in();

        // 1. Ignore re-entrant submissions; logging out while anonymous is a no-op
        {
            let mut phase = self.phase.lock().await;
            if phase.is_busy() {
                tracing::debug!("Ignoring logout submission while another request is in flight");
                return Err(AuthError::InFlight);
            }
            if !signed_in {
                tracing::debug!("Logout requested while anonymous, nothing to do");
                return Ok(Session::Anonymous);
            }
            *phase = phase.transition_to(AuthPhase::Authenticating)?;
        }

        // 2. Best-effort server logout
        if let Err(failure) = self.transport.request(ApiRequest::post(LOGOUT_PATH)).await {
            tracing::warn!(
                "Logout request failed, clearing local session anyway: {}",
                failure
            );
        }

        // 3. Local state is cleared regardless of the server outcome
        if let Err(error) = self.store.clear().await {
            tracing::warn!("Failed to clear stored session: {}", error);
        }
        {
            let mut session = self.session.write().await;
            *session = Session::Anonymous;
        }
        self.settle_phase(AuthPhase::Anonymous).await?;

        tracing::info!("Logged out");
        self.publish(SessionChanged::new(
            Session::Anonymous,
            SessionChangeCause::LoggedOut,
        ))
        .await;

        Ok(Session::Anonymous)
    }

    /// Persists the identity, adopts it, advances the phase, and
    /// notifies observers, in that order.
    async fn complete_sign_in(
        &self,
        identity: Identity,
        cause: SessionChangeCause,
    ) -> Result<Session, AuthError> {
        // A failed local write is degraded persistence, not a failed login
        if let Err(error) = self.store.save(&identity).await {
            tracing::warn!("Failed to persist session locally: {}", error);
        }

        let session = Session::SignedIn(identity);
        {
            let mut current = self.session.write().await;
            *current = session.clone();
        }
        self.settle_phase(AuthPhase::Authenticated).await?;

        self.publish(SessionChanged::new(session.clone(), cause)).await;
        Ok(session)
    }

    async fn settle_phase(&self, target: AuthPhase) -> Result<(), AuthError> {
        let mut phase = self.phase.lock().await;
        *phase = phase.transition_to(target)?;
        Ok(())
    }

    /// Notifies observers in subscription order, awaiting each in turn.
    async fn publish(&self, event: SessionChanged) {
        let observers = self.observers.read().await.clone();
        for observer in observers {
            tracing::debug!(
                "Notifying session observer '{}' ({:?})",
                observer.name(),
                event.cause
            );
            observer.on_session_changed(&event).await;
        }
    }
}

/// Extracts the signed-in identity from a 2xx auth response body.
fn parse_identity(value: Value) -> Result<Identity, ApiFailure> {
    #[derive(serde::Deserialize)]
    struct AuthBody {
        user_id: i64,
        username: String,
    }

    let body: AuthBody = serde_json::from_value(value)
        .map_err(|e| ApiFailure::decode(format!("auth response missing identity: {}", e)))?;
    let username = Username::new(body.username).map_err(|e| ApiFailure::decode(e.to_string()))?;
    Ok(Identity::new(UserId::new(body.user_id), username))
}

/// Pulls a printable string out of a backend error body field. DRF
/// reports field errors as arrays of strings and `detail` as a string.
fn field_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    }
}

fn login_failure(failure: &ApiFailure) -> AuthError {
    match failure {
        ApiFailure::Status { body, .. } => {
            let mut message = String::from("Login failed.");
            let extra = body
                .as_ref()
                .and_then(|b| field_text(b, "detail").or_else(|| field_text(b, "non_field_errors")));
            if let Some(extra) = extra {
                message.push(' ');
                message.push_str(&extra);
            }
            AuthError::rejected(message)
        }
        other => AuthError::transport(format!(
            "An unexpected error occurred during login. ({})",
            other
        )),
    }
}

fn register_failure(failure: &ApiFailure) -> AuthError {
    match failure {
        ApiFailure::Status { body, .. } => {
            let mut message = String::from("Registration failed.");
            let mut parts: Vec<String> = Vec::new();
            if let Some(body) = body {
                if let Some(text) = field_text(body, "username") {
                    parts.push(format!("Username: {}", text));
                }
                if let Some(text) = field_text(body, "email") {
                    parts.push(format!("Email: {}", text));
                }
                if let Some(text) = field_text(body, "password") {
                    parts.push(format!("Password: {}", text));
                }
                if let Some(text) = field_text(body, "detail") {
                    parts.push(text);
                }
            }
            if !parts.is_empty() {
                message.push(' ');
                message.push_str(&parts.join(" "));
            }
            AuthError::rejected(message)
        }
        other => AuthError::transport(format!(
            "An unexpected error occurred during registration. ({})",
            other
        )),
    }
}

fn register_validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::FieldMismatch { .. } => "Passwords do not match.",
        _ => "All fields are required.",
    }
}
