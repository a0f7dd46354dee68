//! Collapsible sidebar state, remembered across reloads

use crate::config::UiConfig;
use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SidebarHandle {
    collapsed: UseStateHandle<bool>,
}

impl SidebarHandle {
    pub fn is_collapsed(&self) -> bool {
        *self.collapsed
    }

    pub fn toggle(&self) {
        self.set_collapsed(!*self.collapsed);
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        if let Err(e) = LocalStorage::set(UiConfig::SIDEBAR_COLLAPSED_KEY, collapsed) {
            tracing::debug!("Could not persist sidebar state: {e}");
        }
        self.collapsed.set(collapsed);
    }
}

#[hook]
pub fn use_sidebar() -> SidebarHandle {
    let collapsed = use_state(|| {
        LocalStorage::get::<bool>(UiConfig::SIDEBAR_COLLAPSED_KEY).unwrap_or(false)
    });
    SidebarHandle { collapsed }
}
