//! Loading content from the API on mount

use folio_frontend_common::Spinner;
use folio_frontend_common::auth::use_auth;
use folio_frontend_common::services::{ContentError, ContentService};
use folio_frontend_common::session::BrowserCookieJar;
use std::future::Future;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Run `fetch` once on mount and track its outcome
#[hook]
pub fn use_remote_content<T, F, Fut>(fetch: F) -> Remote<T>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce(ContentService<BrowserCookieJar>) -> Fut + 'static,
    Fut: Future<Output = Result<T, ContentError>> + 'static,
{
    let auth = use_auth();
    let state = use_state(|| Remote::Loading);

    {
        let setter = state.setter();
        let service = ContentService::new(auth.store().clone());
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match fetch(service).await {
                    Ok(value) => Remote::Loaded(value),
                    Err(e) => {
                        tracing::error!("Failed to load content: {e}");
                        Remote::Failed(e.to_string())
                    }
                };
                setter.set(outcome);
            });
        });
    }

    (*state).clone()
}

#[derive(Properties, PartialEq)]
pub struct RemoteViewProps<T: Clone + PartialEq + 'static> {
    pub remote: Remote<T>,
    pub render: Callback<T, Html>,
}

/// Spinner while loading, a short notice on failure, `render` once loaded
#[function_component(RemoteView)]
pub fn remote_view<T: Clone + PartialEq + 'static>(props: &RemoteViewProps<T>) -> Html {
    match &props.remote {
        Remote::Loading => html! { <Spinner /> },
        Remote::Failed(_) => html! {
            <p class="text-center text-gray-500 dark:text-gray-400">
                {"No se pudo cargar el contenido. Inténtalo de nuevo más tarde."}
            </p>
        },
        Remote::Loaded(value) => props.render.emit(value.clone()),
    }
}
