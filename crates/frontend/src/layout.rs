//! Layout for the public pages

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Home, "Inicio"),
    (Route::About, "Sobre mí"),
    (Route::Social, "Redes"),
    (Route::Projects, "Proyectos"),
    (Route::Contact, "Contacto"),
];

#[derive(Properties, PartialEq)]
pub struct PublicLayoutProps {
    pub children: Children,
}

#[function_component(PublicLayout)]
pub fn public_layout(props: &PublicLayoutProps) -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="bg-white dark:bg-gray-800 shadow-sm">
                <nav class="max-w-5xl mx-auto px-4 py-4 flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes="text-xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                        {"Folio"}
                    </Link<Route>>
                    <div class="flex items-center gap-6">
                        {for NAV_ITEMS.iter().map(|(route, label)| {
                            let classes = if current.as_ref() == Some(route) {
                                "text-sm font-medium text-indigo-600 dark:text-indigo-400"
                            } else {
                                "text-sm font-medium text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white"
                            };
                            html! {
                                <Link<Route> to={route.clone()} classes={classes}>{*label}</Link<Route>>
                            }
                        })}
                    </div>
                </nav>
            </header>
            <main class="flex-1 max-w-5xl w-full mx-auto px-4 py-10">
                {props.children.clone()}
            </main>
            <footer class="py-6 text-center text-xs text-gray-500 dark:text-gray-400">
                <Link<Route> to={Route::Login} classes="hover:underline">{"Admin"}</Link<Route>>
            </footer>
        </div>
    }
}
