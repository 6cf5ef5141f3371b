//! Preview pane

use leptos::*;
use vectorink_canvas::PreviewPane;

/// Renders whatever the board says the preview should show
///
/// `PreviewPane::Svg` already carries sanitized markup.
#[component]
pub fn SvgPreview(#[prop(into)] pane: Signal<PreviewPane>) -> impl IntoView {
    view! {
        <div class="aspect-[5/4] w-full border rounded-md bg-white flex items-center justify-center overflow-hidden">
            {move || match pane.get() {
                PreviewPane::Vectorizing => view! {
                    <div class="flex flex-col items-center text-gray-500">
                        <div class="w-8 h-8 border-4 border-indigo-500 border-t-transparent rounded-full animate-spin" />
                        <p class="mt-2 text-sm">"Vectorizing..."</p>
                    </div>
                }
                .into_view(),
                PreviewPane::Svg(svg) => view! {
                    <div class="w-full h-full [&>svg]:w-full [&>svg]:h-full" inner_html=svg />
                }
                .into_view(),
                PreviewPane::Placeholder(text) => view! {
                    <p class="text-sm text-gray-500 px-4 text-center">{text}</p>
                }
                .into_view(),
                PreviewPane::Failed(text) => view! {
                    <p class="text-sm text-red-600 px-4 text-center">{text}</p>
                }
                .into_view(),
            }}
        </div>
    }
}
