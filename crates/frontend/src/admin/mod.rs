mod about_editor;
mod fields;
mod projects_editor;
mod records;
mod shell;
mod social_editor;

pub use about_editor::AboutEditor;
pub use projects_editor::ProjectsEditor;
pub use shell::AdminShell;
pub use social_editor::SocialLinksEditor;
