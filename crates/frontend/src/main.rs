mod admin;
mod app;
mod auth_guard;
mod layout;
mod logging;
mod pages;
mod routes;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    yew::Renderer::<App>::new().render();
}
