use super::fields::{TextArea, TextField, optional, split_list};
use super::records::{RecordAction, RecordList};
use crate::pages::{Remote, use_remote_content};
use folio_frontend_common::Spinner;
use folio_frontend_common::auth::use_auth;
use folio_frontend_common::notifications::{Notifier, use_notifier};
use folio_frontend_common::services::ContentService;
use folio_http::types::Project;
use yew::prelude::*;

#[function_component(ProjectsEditor)]
pub fn projects_editor() -> Html {
    let auth = use_auth();
    let notifier = use_notifier();
    let remote = use_remote_content(|service| async move { service.projects().await });
    let list = use_reducer(RecordList::<Project>::default);
    // Raw comma-separated text; parsed on save so typing a comma is not eaten
    let technologies = use_state(String::new);

    {
        let dispatcher = list.dispatcher();
        use_effect_with(remote.clone(), move |remote| {
            if let Remote::Loaded(projects) = remote {
                dispatcher.dispatch(RecordAction::Loaded(projects.clone()));
            }
        });
    }

    let on_new = {
        let list = list.clone();
        let technologies = technologies.clone();
        Callback::from(move |_: MouseEvent| {
            technologies.set(String::new());
            list.dispatch(RecordAction::StartNew);
        })
    };

    let on_cancel = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.dispatch(RecordAction::CancelEdit))
    };

    let on_technologies = {
        let technologies = technologies.clone();
        Callback::from(move |value: String| technologies.set(value))
    };

    let on_submit = {
        let list = list.clone();
        let auth = auth.clone();
        let notifier = notifier.clone();
        let technologies = technologies.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(draft) = list.draft.clone() else {
                return;
            };
            if list.saving {
                return;
            }
            if draft.record.title.trim().is_empty() {
                notifier.warning("Faltan datos", "El título es obligatorio");
                return;
            }
            let project = Project {
                technologies: split_list(&technologies),
                ..draft.record
            };
            list.dispatch(RecordAction::Saving);

            let service = ContentService::new(auth.store().clone());
            let notifier = notifier.clone();
            let dispatcher = list.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                match service.save_project(&project).await {
                    Ok(saved) => {
                        dispatcher.dispatch(RecordAction::Saved(saved));
                        notifier.success("Guardado", "Proyecto guardado");
                    }
                    Err(e) => {
                        tracing::error!("Failed to save project: {e}");
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
            let Some(project) = list.items.get(index).cloned() else {
                return;
            };
            let service = ContentService::new(auth.store().clone());
            let notifier = notifier.clone();
            let dispatcher = list.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                match service.delete_project(&project).await {
                    Ok(()) => {
                        dispatcher.dispatch(RecordAction::Removed(index));
                        notifier.success("Eliminado", &format!("Se eliminó {}", project.title));
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete project: {e}");
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
        let update = |apply: fn(&mut Project, String)| {
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
                <TextField label="Título" value={draft.record.title.clone()}
                    on_change={update(|project, value| project.title = value)} disabled={list.saving} />
                <TextArea label="Descripción" value={draft.record.description.clone()}
                    on_change={update(|project, value| project.description = value)} disabled={list.saving} />
                <TextField label="URL del proyecto" value={draft.record.url.clone().unwrap_or_default()} placeholder="https://..."
                    on_change={update(|project, value| project.url = optional(value))} disabled={list.saving} />
                <TextField label="Repositorio" value={draft.record.repository_url.clone().unwrap_or_default()} placeholder="https://..."
                    on_change={update(|project, value| project.repository_url = optional(value))} disabled={list.saving} />
                <TextField label="URL de la imagen" value={draft.record.image_url.clone().unwrap_or_default()} placeholder="https://..."
                    on_change={update(|project, value| project.image_url = optional(value))} disabled={list.saving} />
                <TextField label="Tecnologías" value={(*technologies).clone()} placeholder="Rust, Yew, WebAssembly"
                    on_change={on_technologies.clone()} disabled={list.saving} />
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
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Proyectos"}</h1>
                <button type="button" onclick={on_new}
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded text-sm font-medium">
                    {"Nuevo proyecto"}
                </button>
            </div>

            {for editor}

            <ul class="divide-y divide-gray-200 dark:divide-gray-700 bg-white dark:bg-gray-800 rounded-lg shadow">
                {for list.items.iter().enumerate().map(|(index, project)| {
                    let on_edit = {
                        let list = list.clone();
                        let technologies = technologies.clone();
                        let joined = project.technologies.join(", ");
                        Callback::from(move |_: MouseEvent| {
                            technologies.set(joined.clone());
                            list.dispatch(RecordAction::StartEdit(index));
                        })
                    };
                    let on_remove = on_delete.reform(move |_: MouseEvent| index);
                    html! {
                        <li key={project.id.clone().unwrap_or_else(|| project.title.clone())} class="flex items-center justify-between p-4">
                            <div class="min-w-0">
                                <p class="font-medium text-gray-900 dark:text-white">{&project.title}</p>
                                <p class="text-sm text-gray-500 dark:text-gray-400 truncate">{project.technologies.join(", ")}</p>
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
