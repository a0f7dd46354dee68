use super::remote::{RemoteView, use_remote_content};
use folio_http::types::Project;
use yew::prelude::*;

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects = use_remote_content(|service| async move { service.projects().await });

    let render = Callback::from(|projects: Vec<Project>| {
        if projects.is_empty() {
            return html! { <p class="text-gray-500 dark:text-gray-400">{"Aún no hay proyectos publicados."}</p> };
        }
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {for projects.into_iter().map(|project| html! {
                    <article key={project.id.clone().unwrap_or_else(|| project.title.clone())}
                        class="bg-white dark:bg-gray-800 rounded-lg shadow overflow-hidden">
                        if let Some(image) = project.image_url.clone() {
                            <img src={image} alt={project.title.clone()} class="w-full h-40 object-cover" />
                        }
                        <div class="p-5">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">{&project.title}</h2>
                            <p class="text-sm text-gray-600 dark:text-gray-300 mb-3">{&project.description}</p>
                            <div class="flex flex-wrap gap-2 mb-3">
                                {for project.technologies.iter().map(|tech| html! {
                                    <span class="px-2 py-0.5 text-xs rounded bg-indigo-50 dark:bg-indigo-900/40 text-indigo-700 dark:text-indigo-300">{tech}</span>
                                })}
                            </div>
                            <div class="flex gap-4 text-sm">
                                if let Some(url) = project.url.clone() {
                                    <a href={url} target="_blank" rel="noopener noreferrer" class="text-indigo-600 dark:text-indigo-400 hover:underline">{"Demo"}</a>
                                }
                                if let Some(repo) = project.repository_url.clone() {
                                    <a href={repo} target="_blank" rel="noopener noreferrer" class="text-indigo-600 dark:text-indigo-400 hover:underline">{"Código"}</a>
                                }
                            </div>
                        </div>
                    </article>
                })}
            </div>
        }
    });

    html! {
        <section>
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-6">{"Proyectos"}</h1>
            <RemoteView<Vec<Project>> remote={projects} {render} />
        </section>
    }
}
