//! Labelled inputs for the admin forms

use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-white dark:bg-gray-900 border border-gray-300 dark:border-gray-600 rounded text-gray-900 dark:text-white focus:outline-none focus:border-indigo-500";

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &FieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{props.label.clone()}</span>
            <input
                type="text"
                class={INPUT_CLASS}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </label>
    }
}

#[function_component(TextArea)]
pub fn text_area(props: &FieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{props.label.clone()}</span>
            <textarea
                rows="6"
                class={INPUT_CLASS}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </label>
    }
}

/// Empty input means "not set"
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Comma-separated list, blanks dropped
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_treats_blank_as_unset() {
        assert_eq!(optional("   ".into()), None);
        assert_eq!(optional(" https://x.dev ".into()).as_deref(), Some("https://x.dev"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Rust, Yew,,  wasm "), ["Rust", "Yew", "wasm"]);
        assert!(split_list(" , ").is_empty());
    }
}
