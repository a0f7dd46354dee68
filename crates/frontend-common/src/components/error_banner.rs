//! Dismissible error message

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class="flex items-start gap-3 p-3 mb-4 bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-700 text-red-700 dark:text-red-300 rounded text-sm" role="alert">
            <svg class="w-5 h-5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                    d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
            </svg>
            <p class="flex-1">{props.message.clone()}</p>
            <button {onclick} type="button" class="opacity-70 hover:opacity-100" aria-label="Dismiss">
                {"✕"}
            </button>
        </div>
    }
}
