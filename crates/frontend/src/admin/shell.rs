//! Admin layout: collapsible sidebar plus content area

use crate::routes::Route;
use folio_frontend_common::auth::use_auth;
use folio_frontend_common::hooks::use_sidebar;
use yew::prelude::*;
use yew_router::prelude::*;

const ADMIN_NAV: [(Route, &str, &str); 3] = [
    (Route::AdminAbout, "Sobre mí", "👤"),
    (Route::AdminSocial, "Redes sociales", "🔗"),
    (Route::AdminProjects, "Proyectos", "📁"),
];

#[derive(Properties, PartialEq)]
pub struct AdminShellProps {
    pub children: Children,
}

#[function_component(AdminShell)]
pub fn admin_shell(props: &AdminShellProps) -> Html {
    let auth = use_auth();
    let sidebar = use_sidebar();
    let current = use_route::<Route>();
    let collapsed = sidebar.is_collapsed();

    let on_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| sidebar.toggle())
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| auth.logout())
    };

    let user_label = auth
        .session
        .user_id
        .clone()
        .or_else(|| auth.store().user_id())
        .unwrap_or_default();
    let role_label = auth
        .session
        .role
        .clone()
        .or_else(|| auth.store().role())
        .unwrap_or_default();

    let width = if collapsed { "w-16" } else { "w-60" };

    html! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-900">
            <aside class={format!("{width} flex flex-col bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 transition-all duration-200")}>
                <div class="flex items-center justify-between p-4 border-b border-gray-200 dark:border-gray-700">
                    if !collapsed {
                        <span class="font-bold text-gray-900 dark:text-white">{"Folio admin"}</span>
                    }
                    <button
                        type="button"
                        onclick={on_toggle}
                        class="p-1 rounded text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-700"
                        aria-label={if collapsed { "Expand sidebar" } else { "Collapse sidebar" }}
                    >
                        { if collapsed { "»" } else { "«" } }
                    </button>
                </div>

                <nav class="flex-1 p-2 space-y-1">
                    {for ADMIN_NAV.iter().map(|(route, label, icon)| {
                        let active = current.as_ref() == Some(route);
                        let classes = if active {
                            "flex items-center gap-3 px-3 py-2 rounded bg-indigo-50 dark:bg-indigo-900/40 text-indigo-700 dark:text-indigo-300 font-medium"
                        } else {
                            "flex items-center gap-3 px-3 py-2 rounded text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                        };
                        html! {
                            <Link<Route> to={route.clone()} classes={classes}>
                                <span>{*icon}</span>
                                if !collapsed {
                                    <span>{*label}</span>
                                }
                            </Link<Route>>
                        }
                    })}
                </nav>

                <div class="p-4 border-t border-gray-200 dark:border-gray-700 text-sm">
                    if !collapsed {
                        <p class="text-gray-900 dark:text-white truncate">{user_label}</p>
                        <p class="text-xs text-gray-500 dark:text-gray-400 mb-2">{role_label}</p>
                    }
                    <button
                        type="button"
                        onclick={on_logout}
                        class="w-full px-3 py-2 rounded text-red-600 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/30 text-left"
                    >
                        { if collapsed { "⎋" } else { "Cerrar sesión" } }
                    </button>
                </div>
            </aside>

            <main class="flex-1 p-8 overflow-auto">
                {props.children.clone()}
            </main>
        </div>
    }
}
