mod about;
mod contact;
mod home;
mod login;
mod not_found;
mod projects;
mod remote;
mod social;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use remote::{Remote, use_remote_content};
pub use social::SocialPage;
