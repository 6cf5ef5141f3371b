//! API key field

use leptos::*;

use super::Card;

/// Password input bound to the board's key
#[component]
pub fn ApiKeyInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <Card
            title="Google AI API Key"
            subtitle="Used for this session only; never stored on the server."
        >
            <label for="api-key" class="sr-only">"API Key"</label>
            <input
                id="api-key"
                type="password"
                autocomplete="off"
                placeholder="Enter your API key"
                class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </Card>
    }
}
