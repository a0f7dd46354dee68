use super::remote::{RemoteView, use_remote_content};
use folio_http::types::SocialLink;
use yew::prelude::*;

#[function_component(SocialPage)]
pub fn social_page() -> Html {
    let links = use_remote_content(|service| async move { service.social_links().await });

    let render = Callback::from(|links: Vec<SocialLink>| {
        if links.is_empty() {
            return html! { <p class="text-gray-500 dark:text-gray-400">{"Aún no hay redes publicadas."}</p> };
        }
        html! {
            <ul class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {for links.into_iter().map(|link| html! {
                    <li key={link.url.clone()}>
                        <a href={link.url.clone()} target="_blank" rel="noopener noreferrer"
                            class="block p-4 bg-white dark:bg-gray-800 rounded-lg shadow hover:shadow-md transition-shadow">
                            <p class="font-semibold text-gray-900 dark:text-white">{&link.name}</p>
                            <p class="text-sm text-indigo-600 dark:text-indigo-400 truncate">{&link.url}</p>
                        </a>
                    </li>
                })}
            </ul>
        }
    });

    html! {
        <section>
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-6">{"Redes sociales"}</h1>
            <RemoteView<Vec<SocialLink>> remote={links} {render} />
        </section>
    }
}
