//! Toast provider and renderer

use super::notifier::ToastNotifier;
use super::toast::{Toast, ToastAction, ToastQueue};
use crate::config::UiConfig;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<UseReducerHandle<ToastQueue>> context={queue}>
            {props.children.clone()}
            <Toaster />
        </ContextProvider<UseReducerHandle<ToastQueue>>>
    }
}

/// Hook to access the toast queue
#[hook]
pub fn use_toasts() -> UseReducerHandle<ToastQueue> {
    use_context::<UseReducerHandle<ToastQueue>>()
        .expect("Toast context not found. Make sure to wrap your app with ToastProvider")
}

/// Hook returning a notifier bound to the toast queue
#[hook]
pub fn use_notifier() -> ToastNotifier {
    let queue = use_toasts();
    ToastNotifier::new(queue.dispatcher())
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let queue = use_toasts();

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80" aria-live="polite">
            {for queue.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss; dropping the Timeout on unmount cancels it
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(UiConfig::TOAST_TIMEOUT_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let onclick = {
        let id = props.toast.id;
        props.on_dismiss.reform(move |_: MouseEvent| id)
    };

    html! {
        <div class={format!("border rounded-lg shadow-lg p-4 flex items-start gap-3 {}", props.toast.kind.classes())} role="status">
            <div class="flex-1">
                <p class="font-semibold text-sm">{&props.toast.title}</p>
                <p class="text-sm mt-1">{&props.toast.message}</p>
            </div>
            <button {onclick} class="text-sm opacity-70 hover:opacity-100" aria-label="Dismiss">
                {"✕"}
            </button>
        </div>
    }
}
