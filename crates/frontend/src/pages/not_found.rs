use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="text-center py-16">
            <h1 class="text-6xl font-bold text-gray-300 dark:text-gray-700 mb-4">{"404"}</h1>
            <p class="text-gray-600 dark:text-gray-400 mb-6">{"Esta página no existe."}</p>
            <Link<Route> to={Route::Home} classes="text-indigo-600 dark:text-indigo-400 hover:underline">
                {"Volver al inicio"}
            </Link<Route>>
        </section>
    }
}
