use crate::routes::{Route, switch};
use folio_frontend_common::{AuthProvider, ToastProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}
