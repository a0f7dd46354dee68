//! Login screen

use crate::routes::Route;
use folio_frontend_common::ErrorBanner;
use folio_frontend_common::auth::{LoginError, use_auth};
use folio_frontend_common::forms::{
    LoginFieldErrors, LoginFormAction, LoginFormState, validate_login,
};
use yew::prelude::*;
use yew_router::prelude::*;

const NO_TOKEN_MESSAGE: &str = "Login failed. No token found.";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-lg text-gray-900 dark:text-white focus:outline-none focus:border-indigo-500 transition-all";

/// Outcome of a login the manager reported as successful. Only a token that
/// can actually be read back from the cookie jar counts.
fn settle_login(stored_token: Option<String>) -> LoginFormAction {
    if stored_token.is_some() {
        LoginFormAction::Succeeded
    } else {
        tracing::warn!("Login succeeded but no access token was stored");
        LoginFormAction::Failed(NO_TOKEN_MESSAGE.into())
    }
}

fn reject_login(error: &LoginError) -> LoginFormAction {
    match error {
        LoginError::Superseded => LoginFormAction::Cancelled,
        LoginError::MissingToken => LoginFormAction::Failed(NO_TOKEN_MESSAGE.into()),
        LoginError::Api(_) | LoginError::IncompleteResponse(_) => {
            LoginFormAction::Failed(INVALID_CREDENTIALS_MESSAGE.into())
        }
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let form = use_reducer(LoginFormState::default);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(LoginFieldErrors::default);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let form = form.clone();
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_submitting() {
                return;
            }

            if let Err(errors) = validate_login(&email, &password) {
                field_errors.set(errors);
                return;
            }
            field_errors.set(LoginFieldErrors::default());
            form.dispatch(LoginFormAction::Submit);

            let auth = auth.clone();
            let dispatcher = form.dispatcher();
            let navigator = navigator.clone();
            let email = email.trim().to_string();
            let password = (*password).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let action = match auth.login(&email, &password).await {
                    Ok(_) => settle_login(auth.store().access_token()),
                    Err(error) => reject_login(&error),
                };
                let succeeded = action == LoginFormAction::Succeeded;
                dispatcher.dispatch(action);
                if succeeded && let Some(navigator) = navigator {
                    navigator.replace(&Route::ADMIN_LANDING);
                }
            });
        })
    };

    let on_dismiss = {
        let form = form.clone();
        Callback::from(move |()| form.dispatch(LoginFormAction::DismissError))
    };

    let busy = form.is_submitting() || auth.session.loading;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4">
            <form onsubmit={on_submit}
                class="w-full max-w-sm bg-white dark:bg-gray-800 rounded-xl shadow-lg p-8 space-y-5">
                <h1 class="text-2xl font-bold text-center text-gray-900 dark:text-white">{"Iniciar sesión"}</h1>

                if let Some(message) = form.error.clone() {
                    <ErrorBanner message={message} on_dismiss={on_dismiss} />
                }

                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="username"
                        class={INPUT_CLASS}
                        value={(*email).clone()}
                        oninput={on_email_input}
                        disabled={busy}
                    />
                    if let Some(message) = field_errors.email {
                        <p class="mt-1 text-xs text-red-600 dark:text-red-400">{message}</p>
                    }
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Contraseña"}</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        class={INPUT_CLASS}
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={busy}
                    />
                    if let Some(message) = field_errors.password {
                        <p class="mt-1 text-xs text-red-600 dark:text-red-400">{message}</p>
                    }
                </div>

                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-all disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled={busy}
                >
                    { if busy { "Ingresando..." } else { "Ingresar" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_frontend_common::client::ClientError;

    #[test]
    fn test_stored_token_completes_the_login() {
        assert_eq!(settle_login(Some("tok1".into())), LoginFormAction::Succeeded);
    }

    #[test]
    fn test_missing_stored_token_reports_no_token() {
        assert_eq!(
            settle_login(None),
            LoginFormAction::Failed("Login failed. No token found.".into())
        );
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            reject_login(&LoginError::MissingToken),
            LoginFormAction::Failed(NO_TOKEN_MESSAGE.into())
        );
        assert_eq!(
            reject_login(&LoginError::Api(ClientError::AuthenticationFailed("bad".into()))),
            LoginFormAction::Failed("Invalid email or password.".into())
        );
        assert_eq!(
            reject_login(&LoginError::IncompleteResponse("userId")),
            LoginFormAction::Failed(INVALID_CREDENTIALS_MESSAGE.into())
        );
        assert_eq!(reject_login(&LoginError::Superseded), LoginFormAction::Cancelled);
    }
}
