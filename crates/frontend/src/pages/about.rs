use super::remote::{RemoteView, use_remote_content};
use folio_http::types::AboutMe;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let about = use_remote_content(|service| async move { service.about().await });

    let render = Callback::from(|about: AboutMe| {
        html! {
            <article class="flex flex-col md:flex-row gap-8 items-start">
                if let Some(url) = about.image_url.clone() {
                    <img src={url} alt={about.title.clone()} class="w-48 h-48 rounded-full object-cover shadow" />
                }
                <div>
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">{&about.title}</h1>
                    <p class="text-gray-700 dark:text-gray-300 whitespace-pre-line">{&about.description}</p>
                </div>
            </article>
        }
    });

    html! { <RemoteView<AboutMe> remote={about} {render} /> }
}
