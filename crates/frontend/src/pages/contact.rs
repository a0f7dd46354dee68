use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <section class="max-w-xl">
            <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">{"Contacto"}</h1>
            <p class="text-gray-700 dark:text-gray-300 mb-6">
                {"¿Tienes una propuesta o una pregunta? Escríbeme por cualquiera de mis redes."}
            </p>
            <Link<Route> to={Route::Social} classes="px-5 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors">
                {"Ver redes sociales"}
            </Link<Route>>
        </section>
    }
}
