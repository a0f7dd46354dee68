//! Custom hooks for the application

pub mod use_sidebar;

pub use use_sidebar::{SidebarHandle, use_sidebar};
