//! Loading indicator

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(AttrValue::Static("Cargando..."))]
    pub label: AttrValue,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center gap-4 py-10" role="status" aria-live="polite">
            <span class="w-10 h-10 rounded-full border-4 border-gray-200 dark:border-gray-700 border-t-indigo-500 dark:border-t-indigo-400 animate-spin"></span>
            <span class="text-sm text-gray-600 dark:text-gray-400">{props.label.clone()}</span>
        </div>
    }
}
