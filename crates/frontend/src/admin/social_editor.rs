use super::fields::{TextField, optional};
use super::records::{RecordAction, RecordList};
use crate::pages::{Remote, use_remote_content};
use folio_frontend_common::Spinner;
use folio_frontend_common::auth::use_auth;
use folio_frontend_common::notifications::{Notifier, use_notifier};
use folio_frontend_common::services::ContentService;
use folio_http::types::SocialLink;
use yew::prelude::*;

#[function_component(SocialLinksEditor)]
pub fn social_links_editor() -> Html {
    let auth = use_auth();
    let notifier = use_notifier();
    let remote = use_remote_content(|service| async move { service.social_links().await });
    let list = use_reducer(RecordList::<SocialLink>::default);

    {
        let dispatcher = list.dispatcher();
        use_effect_with(remote.clone(), move |remote| {
            if let Remote::Loaded(links) = remote {
                dispatcher.dispatch(RecordAction::Loaded(links.clone()));
            }
        });
    }

    let on_new = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.dispatch(RecordAction::StartNew))
    };

    let on_cancel = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.dispatch(RecordAction::CancelEdit))
    };

    let on_submit = {
        let list = list.clone();
        let auth = auth.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(draft) = list.draft.clone() else {
                return;
            };
            if list.saving {
                return;
            }
            if draft.record.name.trim().is_empty() || draft.record.url.trim().is_empty() {
                notifier.warning("Faltan datos", "El nombre y la URL son obligatorios");
                return;
            }
            list.dispatch(RecordAction::Saving);

            let service = ContentService::new(auth.store().clone());
            let notifier = notifier.clone();
            let dispatcher = list.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                match service.save_social_link(&draft.record).await {
                    Ok(saved) => {
                        dispatcher.dispatch(RecordAction::Saved(saved));
                        notifier.success("Guardado", "Red social guardada");
                    }
                    Err(e) => {
                        tracing::error!("Failed to save social link: {e}");
                        dispatcher.dispatch(RecordAction::SaveFailed);
                        notifier.error("Error", &e.to_string());
                    }
                }
            });
        })
    };

    let on_delete = {
        let list = list.clone();
        let notifier = notifier.clone();
        Callback::from(move |index: usize| {
            let Some(link) = list.items.get(index).cloned() else {
                return;
            };
            let service = ContentService::new(auth.store().clone());
            let notifier = notifier.clone();
            let dispatcher = list.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                match service.delete_social_link(&link).await {
                    Ok(()) => {
                        dispatcher.dispatch(RecordAction::Removed(index));
                        notifier.success("Eliminado", &format!("Se eliminó {}", link.name));
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete social link: {e}");
                        notifier.error("Error", &e.to_string());
                    }
                }
            });
        })
    };

    if remote == Remote::Loading {
        return html! { <Spinner /> };
    }

    let editor = list.draft.clone().map(|draft| {
        let update = |apply: fn(&mut SocialLink, String)| {
            let list = list.clone();
            let record = draft.record.clone();
            Callback::from(move |value: String| {
                let mut record = record.clone();
                apply(&mut record, value);
                list.dispatch(RecordAction::UpdateDraft(record));
            })
        };
        html! {
            <form onsubmit={on_submit.clone()} class="space-y-4 bg-white dark:bg-gray-800 p-6 rounded-lg shadow mb-6">
                <TextField label="Nombre" value={draft.record.name.clone()}
                    on_change={update(|link, value| link.name = value)} disabled={list.saving} />
                <TextField label="URL" value={draft.record.url.clone()} placeholder="https://..."
                    on_change={update(|link, value| link.url = value)} disabled={list.saving} />
                <TextField label="Icono" value={draft.record.icon.clone().unwrap_or_default()}
                    on_change={update(|link, value| link.icon = optional(value))} disabled={list.saving} />
                <div class="flex gap-3">
                    <button type="submit" disabled={list.saving}
                        class="px-5 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded font-medium disabled:opacity-50">
                        { if list.saving { "Guardando..." } else { "Guardar" } }
                    </button>
                    <button type="button" onclick={on_cancel.clone()}
                        class="px-5 py-2 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-200 rounded">
                        {"Cancelar"}
                    </button>
                </div>
            </form>
        }
    });

    html! {
        <section class="max-w-3xl">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Redes sociales"}</h1>
                <button type="button" onclick={on_new}
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded text-sm font-medium">
                    {"Nueva red"}
                </button>
            </div>

            {for editor}

            <ul class="divide-y divide-gray-200 dark:divide-gray-700 bg-white dark:bg-gray-800 rounded-lg shadow">
                {for list.items.iter().enumerate().map(|(index, link)| {
                    let on_edit = {
                        let list = list.clone();
                        Callback::from(move |_: MouseEvent| list.dispatch(RecordAction::StartEdit(index)))
                    };
                    let on_remove = on_delete.reform(move |_: MouseEvent| index);
                    html! {
                        <li key={link.id.clone().unwrap_or_else(|| link.url.clone())} class="flex items-center justify-between p-4">
                            <div class="min-w-0">
                                <p class="font-medium text-gray-900 dark:text-white">{&link.name}</p>
                                <p class="text-sm text-gray-500 dark:text-gray-400 truncate">{&link.url}</p>
                            </div>
                            <div class="flex gap-2 text-sm">
                                <button type="button" onclick={on_edit} class="px-3 py-1 rounded text-indigo-600 hover:bg-indigo-50 dark:hover:bg-indigo-900/30">{"Editar"}</button>
                                <button type="button" onclick={on_remove} class="px-3 py-1 rounded text-red-600 hover:bg-red-50 dark:hover:bg-red-900/30">{"Eliminar"}</button>
                            </div>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
