//! Authentication guard component for protected routes

use crate::routes::Route;
use folio_frontend_common::auth::{GuardDecision, evaluate_guard, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders children only while the stored credentials pass the guard.
///
/// Re-evaluated whenever the auth context changes, so a logout elsewhere in
/// the tree sends the user back to the login screen.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    match evaluate_guard(auth.store()) {
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
        GuardDecision::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
