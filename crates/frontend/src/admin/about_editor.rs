use super::fields::{TextArea, TextField, optional};
use crate::pages::{Remote, use_remote_content};
use folio_frontend_common::Spinner;
use folio_frontend_common::auth::use_auth;
use folio_frontend_common::notifications::{Notifier, use_notifier};
use folio_frontend_common::services::ContentService;
use folio_http::types::AboutMe;
use yew::prelude::*;

#[function_component(AboutEditor)]
pub fn about_editor() -> Html {
    let auth = use_auth();
    let notifier = use_notifier();
    let remote = use_remote_content(|service| async move { service.about().await });
    let draft = use_state(AboutMe::default);
    let saving = use_state(|| false);

    {
        let draft = draft.clone();
        use_effect_with(remote.clone(), move |remote| {
            if let Remote::Loaded(about) = remote {
                draft.set(about.clone());
            }
        });
    }

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |title: String| {
            draft.set(AboutMe {
                title,
                ..(*draft).clone()
            });
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |description: String| {
            draft.set(AboutMe {
                description,
                ..(*draft).clone()
            });
        })
    };

    let on_image = {
        let draft = draft.clone();
        Callback::from(move |image_url: String| {
            draft.set(AboutMe {
                image_url: optional(image_url),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);

            let service = ContentService::new(auth.store().clone());
            let notifier = notifier.clone();
            let draft = draft.clone();
            let saving = saving.clone();
            let about = (*draft).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.save_about(&about).await {
                    Ok(saved) => {
                        draft.set(saved);
                        notifier.success("Guardado", "La sección \"Sobre mí\" fue actualizada");
                    }
                    Err(e) => {
                        tracing::error!("Failed to save about section: {e}");
                        notifier.error("Error", &e.to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    if remote == Remote::Loading {
        return html! { <Spinner /> };
    }

    html! {
        <section class="max-w-2xl">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">{"Sobre mí"}</h1>
            <form onsubmit={on_submit} class="space-y-4 bg-white dark:bg-gray-800 p-6 rounded-lg shadow">
                <TextField label="Título" value={draft.title.clone()} on_change={on_title} disabled={*saving} />
                <TextArea label="Descripción" value={draft.description.clone()} on_change={on_description} disabled={*saving} />
                <TextField
                    label="URL de la imagen"
                    value={draft.image_url.clone().unwrap_or_default()}
                    on_change={on_image}
                    placeholder="https://..."
                    disabled={*saving}
                />
                <button
                    type="submit"
                    class="px-5 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded font-medium disabled:opacity-50"
                    disabled={*saving}
                >
                    { if *saving { "Guardando..." } else { "Guardar" } }
                </button>
            </form>
        </section>
    }
}
