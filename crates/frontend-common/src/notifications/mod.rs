//! Toast notifications
//!
//! [`Notifier`] is the sink the session logic talks to; [`ToastProvider`] owns
//! the queue and renders it.

mod notifier;
mod provider;
mod toast;

pub use notifier::{Notifier, ToastNotifier};
pub use provider::{ToastProvider, Toaster, use_notifier, use_toasts};
pub use toast::{Toast, ToastAction, ToastKind, ToastQueue};
