//! Notification sink

use super::toast::{Toast, ToastAction, ToastQueue};
use yew::prelude::*;

/// Where user-facing notifications go
pub trait Notifier {
    fn notify(&self, toast: Toast);

    fn success(&self, title: &str, message: &str) {
        self.notify(Toast::success(title, message));
    }

    fn info(&self, title: &str, message: &str) {
        self.notify(Toast::info(title, message));
    }

    fn warning(&self, title: &str, message: &str) {
        self.notify(Toast::warning(title, message));
    }

    fn error(&self, title: &str, message: &str) {
        self.notify(Toast::error(title, message));
    }
}

/// Forwards notifications into the toast queue
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl ToastNotifier {
    pub const fn new(dispatcher: UseReducerDispatcher<ToastQueue>) -> Self {
        Self { dispatcher }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        self.dispatcher.dispatch(ToastAction::Push(toast));
    }
}
