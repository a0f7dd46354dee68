//! Login/logout orchestration
//!
//! [`AuthSessionManager`] owns the in-memory [`Session`]. It is the only writer
//! of both the session and the credential cookies; consumers get snapshots via
//! [`AuthSessionManager::session`] or a change listener.
//!
//! Every `login` and `logout` bumps a generation counter. A login response that
//! comes back after the generation moved on is dropped without touching cookies
//! or the session, so a slow request cannot resurrect a session the user has
//! already left.

use super::session::Session;
use crate::config::AuthConfig;
use crate::notifications::Notifier;
use crate::session::{CookieJar, Credentials, SessionStore, normalize_token};
use async_trait::async_trait;
use chrono::Utc;
use folio_http::client::{ClientError, Diagnostic};
use folio_http::types::{LoginRequest, LoginResponse};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// The login endpoint, as seen by the manager
#[async_trait(?Send)]
pub trait LoginApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;
}

#[derive(Debug, Error)]
pub enum LoginError {
    /// The API call failed (transport, credentials, setup)
    #[error(transparent)]
    Api(#[from] ClientError),

    /// The API reported success but returned no usable access token
    #[error("No token found")]
    MissingToken,

    /// The API reported success but left out a required field
    #[error("Login response is missing `{0}`")]
    IncompleteResponse(&'static str),

    /// A newer login or a logout started while this one was in flight
    #[error("Login superseded by a newer session change")]
    Superseded,
}

type Listener = Rc<dyn Fn(&Session)>;

pub struct AuthSessionManager<A, J, N> {
    api: A,
    store: SessionStore<J>,
    notifier: N,
    session: RefCell<Session>,
    generation: Cell<u64>,
    listener: RefCell<Option<Listener>>,
}

impl<A, J, N> AuthSessionManager<A, J, N>
where
    A: LoginApi,
    J: CookieJar,
    N: Notifier,
{
    /// Create a manager with an empty session
    pub fn new(api: A, store: SessionStore<J>, notifier: N) -> Self {
        Self {
            api,
            store,
            notifier,
            session: RefCell::new(Session::default()),
            generation: Cell::new(0),
            listener: RefCell::new(None),
        }
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub const fn store(&self) -> &SessionStore<J> {
        &self.store
    }

    /// Register the function called after every session change
    pub fn set_listener(&self, listener: impl Fn(&Session) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn clear_listener(&self) {
        self.listener.borrow_mut().take();
    }

    /// Sign in. Never panics and never leaves `loading` set.
    ///
    /// On success the returned session carries the access token that was
    /// persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, LoginError> {
        let generation = self.next_generation();
        self.replace(self.session().with_loading(true));

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.api.login(&request).await;

        if self.generation.get() != generation {
            // The newer operation owns the loading flag now
            warn!("Discarding login response that arrived after a newer session change");
            return Err(LoginError::Superseded);
        }

        let outcome = result
            .map_err(LoginError::from)
            .and_then(|response| self.establish(response));

        match &outcome {
            Ok(session) => {
                debug!(user_id = ?session.user_id, role = ?session.role, "Login succeeded");
            }
            Err(err) => {
                log_login_failure(err);
                self.replace(self.session().with_loading(false));
            }
        }

        outcome
    }

    /// Sign out: drop all credentials and reset the session. Never fails.
    pub fn logout(&self) {
        self.next_generation();
        self.replace(self.session().with_loading(true));
        self.store.clear();
        self.replace(Session::default());
        debug!("Logged out");
    }

    fn establish(&self, response: LoginResponse) -> Result<Session, LoginError> {
        let role = response
            .primary_role()
            .map(str::to_string)
            .ok_or(LoginError::IncompleteResponse("roleName"))?;
        let access_token =
            normalize_token(response.access_token).ok_or(LoginError::MissingToken)?;
        let user_id = response
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or(LoginError::IncompleteResponse("userId"))?;
        let refresh_token = response
            .refresh_token
            .filter(|token| !token.is_empty())
            .ok_or(LoginError::IncompleteResponse("refreshToken"))?;

        let credentials = Credentials {
            access_token,
            refresh_token,
            user_id,
            role,
        };
        self.store.persist(&credentials, Utc::now());

        let session = Session {
            is_authenticated: true,
            user_id: Some(credentials.user_id),
            access_token: Some(credentials.access_token),
            role: Some(credentials.role),
            loading: false,
        };
        self.replace(session.clone());

        // TODO: confirm with product whether the sudo-mode warning stays in release builds
        if session.is_admin() {
            self.notifier
                .warning(AuthConfig::ADMIN_WARNING_TITLE, AuthConfig::ADMIN_WARNING_MESSAGE);
        }

        Ok(session)
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        generation
    }

    fn replace(&self, session: Session) {
        *self.session.borrow_mut() = session;
        // Clone the listener out so it may call back into the manager
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&self.session());
        }
    }
}

fn log_login_failure(err: &LoginError) {
    match err {
        LoginError::Api(api_error) => match api_error.diagnostic() {
            Diagnostic::Response { status, body } => {
                error!(status, body = %body, "Login rejected by the API");
            }
            Diagnostic::Request(detail) => error!(detail = %detail, "Login request failed"),
            Diagnostic::Setup(detail) => error!(detail = %detail, "Login request setup failed"),
        },
        other => error!("Login failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::guard::{GuardDecision, evaluate};
    use crate::notifications::{Toast, ToastKind};
    use crate::session::{MemoryCookieJar, StoredCredentials};
    use chrono::{DateTime, Duration};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    /// Login API that replays scripted outcomes, optionally waiting on a gate
    #[derive(Default)]
    struct ScriptedApi {
        responses: RefCell<VecDeque<Result<LoginResponse, ClientError>>>,
        gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
        requests: RefCell<Vec<LoginRequest>>,
    }

    impl ScriptedApi {
        fn returning(response: Result<LoginResponse, ClientError>) -> Self {
            let api = Self::default();
            api.responses.borrow_mut().push_back(response);
            api
        }
    }

    #[async_trait(?Send)]
    impl LoginApi for ScriptedApi {
        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
            self.requests.borrow_mut().push(request.clone());
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        toasts: Rc<RefCell<Vec<Toast>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    type TestManager = AuthSessionManager<ScriptedApi, MemoryCookieJar, RecordingNotifier>;

    fn manager(api: ScriptedApi) -> (TestManager, MemoryCookieJar, RecordingNotifier) {
        let jar = MemoryCookieJar::new();
        let notifier = RecordingNotifier::default();
        let manager =
            AuthSessionManager::new(api, SessionStore::new(jar.clone()), notifier.clone());
        (manager, jar, notifier)
    }

    fn response(role: &str) -> LoginResponse {
        LoginResponse {
            access_token: Some("tok1".into()),
            refresh_token: Some("ref1".into()),
            user_id: Some("u1".into()),
            role_name: vec![folio_http::types::RoleEntry {
                role_name: role.into(),
            }],
        }
    }

    fn assert_close(actual: Option<DateTime<Utc>>, expected: DateTime<Utc>) {
        let actual = actual.expect("cookie has no expiry");
        let drift = (actual - expected).num_milliseconds().abs();
        assert!(drift <= 1_000, "expiry off by {drift}ms");
    }

    #[tokio::test]
    async fn test_editor_login_scenario() {
        let (manager, jar, notifier) = manager(ScriptedApi::returning(Ok(response("editor"))));

        let session = manager.login("user@test.com", "secret").await.unwrap();

        assert!(session.is_authenticated);
        assert_eq!(session.access_token.as_deref(), Some("tok1"));
        assert_eq!(session.user_id.as_deref(), Some("u1"));
        assert!(!session.loading);
        assert_eq!(manager.session(), session);
        assert_eq!(jar.get("accessToken").as_deref(), Some("tok1"));
        assert!(notifier.toasts.borrow().is_empty());
        assert_eq!(
            manager.store().snapshot(),
            StoredCredentials {
                access_token: Some("tok1".into()),
                refresh_token: Some("ref1".into()),
                user_id: Some("u1".into()),
                role: Some("editor".into()),
            }
        );
        assert_eq!(
            manager.api.requests.borrow()[0],
            LoginRequest {
                email: "user@test.com".into(),
                password: "secret".into()
            }
        );

        // The route guard lets the fresh session through
        assert_eq!(evaluate(manager.store()), GuardDecision::Allow);
        assert_eq!(jar.len(), 4);
    }

    #[tokio::test]
    async fn test_login_cookie_expirations() {
        let (manager, jar, _) = manager(ScriptedApi::returning(Ok(response("editor"))));

        manager.login("user@test.com", "secret").await.unwrap();
        let now = Utc::now();

        assert_close(jar.expires_at("accessToken"), now + Duration::days(2));
        assert_close(jar.expires_at("refreshToken"), now + Duration::days(7));
        assert_close(jar.expires_at("userId"), now + Duration::days(7));
        assert_close(jar.expires_at("roleName"), now + Duration::days(7));
    }

    #[tokio::test]
    async fn test_admin_login_warns_once() {
        let (manager, _, notifier) = manager(ScriptedApi::returning(Ok(response("admin"))));

        let session = manager.login("root@test.com", "secret").await.unwrap();
        assert!(session.is_admin());

        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Warning);
        assert_eq!(toasts[0].title, AuthConfig::ADMIN_WARNING_TITLE);
    }

    #[tokio::test]
    async fn test_only_first_role_counts() {
        let mut body = response("editor");
        body.role_name.push(folio_http::types::RoleEntry {
            role_name: "admin".into(),
        });
        let (manager, _, notifier) = manager(ScriptedApi::returning(Ok(body)));

        let session = manager.login("user@test.com", "secret").await.unwrap();
        assert_eq!(session.role.as_deref(), Some("editor"));
        assert!(notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_call_writes_nothing() {
        let api = ScriptedApi::returning(Err(ClientError::AuthenticationFailed(
            "bad credentials".into(),
        )));
        let (manager, jar, notifier) = manager(api);

        let err = manager.login("user@test.com", "wrong").await.unwrap_err();

        assert!(matches!(err, LoginError::Api(_)));
        assert!(jar.is_empty());
        assert_eq!(manager.session(), Session::default());
        assert!(notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_success_without_token_is_rejected() {
        for token in [None, Some("undefined".to_string()), Some(String::new())] {
            let mut body = response("editor");
            body.access_token = token;
            let (manager, jar, _) = manager(ScriptedApi::returning(Ok(body)));

            let err = manager.login("user@test.com", "secret").await.unwrap_err();
            assert!(matches!(err, LoginError::MissingToken));
            assert!(jar.is_empty());
            assert!(!manager.session().loading);
        }
    }

    #[tokio::test]
    async fn test_empty_role_list_is_rejected() {
        let mut body = response("editor");
        body.role_name.clear();
        let (manager, jar, _) = manager(ScriptedApi::returning(Ok(body)));

        let err = manager.login("user@test.com", "secret").await.unwrap_err();
        assert!(matches!(err, LoginError::IncompleteResponse("roleName")));
        assert!(jar.is_empty());
    }

    #[tokio::test]
    async fn test_loading_flag_brackets_login() {
        let (manager, _, _) = manager(ScriptedApi::returning(Err(ClientError::Configuration(
            "base_url is required".into(),
        ))));
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            manager.set_listener(move |session| seen.borrow_mut().push(session.loading));
        }

        let _ = manager.login("user@test.com", "secret").await;

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!manager.session().loading);
    }

    #[tokio::test]
    async fn test_logout_resets_everything() {
        let (manager, jar, _) = manager(ScriptedApi::returning(Ok(response("admin"))));
        manager.login("root@test.com", "secret").await.unwrap();
        assert_eq!(jar.len(), 4);

        assert_eq!(evaluate(manager.store()), GuardDecision::Allow);

        manager.logout();

        assert!(jar.is_empty());
        assert_eq!(manager.session(), Session::default());
        assert_eq!(evaluate(manager.store()), GuardDecision::RedirectToLogin);

        // Logging out again is harmless
        manager.logout();
        assert_eq!(manager.session(), Session::default());
    }

    #[tokio::test]
    async fn test_logout_during_login_discards_late_response() {
        let api = ScriptedApi::returning(Ok(response("editor")));
        let (release, gate) = oneshot::channel();
        api.gates.borrow_mut().push_back(gate);
        let (manager, jar, _) = manager(api);

        let pending = manager.login("user@test.com", "secret");
        let logout_then_release = async {
            tokio::task::yield_now().await;
            manager.logout();
            release.send(()).unwrap();
        };
        let (result, ()) = tokio::join!(pending, logout_then_release);

        assert!(matches!(result, Err(LoginError::Superseded)));
        assert!(jar.is_empty());
        assert_eq!(manager.session(), Session::default());
    }
}
