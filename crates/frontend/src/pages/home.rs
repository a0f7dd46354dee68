use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="text-center py-16">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-4">
                {"Hola, bienvenido a mi portafolio"}
            </h1>
            <p class="text-lg text-gray-600 dark:text-gray-300 mb-8">
                {"Desarrollo de software, proyectos personales y algo más."}
            </p>
            <div class="flex justify-center gap-4">
                <Link<Route> to={Route::Projects} classes="px-5 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors">
                    {"Ver proyectos"}
                </Link<Route>>
                <Link<Route> to={Route::Contact} classes="px-5 py-3 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 rounded-lg font-medium hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors">
                    {"Contacto"}
                </Link<Route>>
            </div>
        </section>
    }
}
