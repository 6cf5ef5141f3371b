//! Card Components

use leptos::*;

/// Titled card with an optional subtitle
#[component]
pub fn Card(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-sm text-gray-500 mt-1">{s}</p> })}
            <div class="mt-4">
                {children()}
            </div>
        </div>
    }
}
