//! Authentication context and provider
//!
//! The provider owns the single [`AuthSessionManager`] of the application and
//! mirrors its session into component state so consumers re-render on change.
//! Consumers only ever see a snapshot.

use super::error_handler::{clear_auth_error_callback, set_auth_error_callback};
use super::manager::{AuthSessionManager, LoginError};
use super::session::Session;
use crate::notifications::{ToastNotifier, use_notifier};
use crate::services::AuthApiService;
use crate::session::{BrowserCookieJar, SessionStore};
use std::rc::Rc;
use yew::prelude::*;

pub type BrowserAuthManager = AuthSessionManager<AuthApiService, BrowserCookieJar, ToastNotifier>;

/// Authentication context
#[derive(Clone)]
pub struct AuthContext {
    pub session: Session,
    manager: Rc<BrowserAuthManager>,
    /// Bumped on every session change, so a reset to an already-empty
    /// session still re-renders consumers such as the route guard
    revision: u64,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
            && self.session == other.session
            && Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl AuthContext {
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, LoginError> {
        self.manager.login(email, password).await
    }

    pub fn logout(&self) {
        self.manager.logout();
    }

    /// Cookie-backed credential store
    pub fn store(&self) -> &SessionStore<BrowserCookieJar> {
        self.manager.store()
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Must sit inside a `ToastProvider`: the manager reports through it.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let notifier = use_notifier();
    let manager = use_memo((), move |_| {
        AuthSessionManager::new(
            AuthApiService::new(),
            SessionStore::new(BrowserCookieJar),
            notifier,
        )
    });
    let session = use_state(|| manager.session());
    let revision = use_mut_ref(|| 0_u64);
    let current_revision = *revision.borrow();

    {
        let manager = manager.clone();
        let setter = session.setter();
        use_effect_with((), move |_| {
            manager.set_listener(move |session| {
                *revision.borrow_mut() += 1;
                setter.set(session.clone());
            });

            // A token rejected by the API ends the session; the guard redirects
            let on_auth_error = manager.clone();
            set_auth_error_callback(Rc::new(move || on_auth_error.logout()));

            move || {
                manager.clear_listener();
                clear_auth_error_callback();
            }
        });
    }

    let context = AuthContext {
        session: (*session).clone(),
        manager,
        revision: current_revision,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
