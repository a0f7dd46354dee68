//! Client-side routes

use crate::admin::{AboutEditor, AdminShell, ProjectsEditor, SocialLinksEditor};
use crate::auth_guard::RequireAuth;
use crate::layout::PublicLayout;
use crate::pages::{
    AboutPage, ContactPage, HomePage, LoginPage, NotFoundPage, ProjectsPage, SocialPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/social")]
    Social,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
    #[at("/admin/sobre-mi")]
    AdminAbout,
    #[at("/admin/redes-sociales")]
    AdminSocial,
    #[at("/admin/projects")]
    AdminProjects,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where a successful login lands
    pub const ADMIN_LANDING: Self = Self::AdminAbout;

    /// Routes wrapped by the route guard
    pub const fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Admin | Self::AdminAbout | Self::AdminSocial | Self::AdminProjects
        )
    }
}

pub fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <PublicLayout><HomePage /></PublicLayout> },
        Route::About => html! { <PublicLayout><AboutPage /></PublicLayout> },
        Route::Social => html! { <PublicLayout><SocialPage /></PublicLayout> },
        Route::Projects => html! { <PublicLayout><ProjectsPage /></PublicLayout> },
        Route::Contact => html! { <PublicLayout><ContactPage /></PublicLayout> },
        Route::Login => html! { <LoginPage /> },
        Route::Admin => html! { <Redirect<Route> to={Route::ADMIN_LANDING} /> },
        Route::AdminAbout => html! { <AdminShell><AboutEditor /></AdminShell> },
        Route::AdminSocial => html! { <AdminShell><SocialLinksEditor /></AdminShell> },
        Route::AdminProjects => html! { <AdminShell><ProjectsEditor /></AdminShell> },
        Route::NotFound => html! { <PublicLayout><NotFoundPage /></PublicLayout> },
    };

    if route.is_protected() {
        html! { <RequireAuth>{page}</RequireAuth> }
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_paths() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::AdminAbout.to_path(), "/admin/sobre-mi");
        assert_eq!(Route::AdminSocial.to_path(), "/admin/redes-sociales");
        assert_eq!(Route::AdminProjects.to_path(), "/admin/projects");
    }

    #[test]
    fn test_recognize_paths() {
        assert_eq!(Route::recognize("/admin/redes-sociales"), Some(Route::AdminSocial));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn test_only_admin_routes_are_protected() {
        assert!(Route::AdminProjects.is_protected());
        assert!(Route::Admin.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Projects.is_protected());
        assert!(Route::ADMIN_LANDING.is_protected());
    }
}
