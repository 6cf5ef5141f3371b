//! Drawing page
//!
//! Draw on the canvas, vectorize the snapshot, preview and download the SVG.

use gloo_storage::{LocalStorage, Storage};
use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use vectorink_canvas::{Board, DrawingSurface, Notice, SvgDownload, INTRO_DISMISSED_KEY};
use wasm_bindgen::{JsCast, JsValue};

use crate::api::ApiClient;
use crate::components::{
    use_toaster, wipe, ApiKeyInput, Card, DrawingCanvas, SurfaceHandle, SvgPreview,
};

/// Drawing page
#[component]
pub fn Home() -> impl IntoView {
    let toaster = use_toaster();

    let intro_dismissed = LocalStorage::get::<bool>(INTRO_DISMISSED_KEY).unwrap_or(false);
    let board = create_rw_signal(Board::new(intro_dismissed));
    let session_id = store_value(uuid::Uuid::new_v4().to_string());

    let surface: SurfaceHandle = Rc::new(RefCell::new(
        DrawingSurface::default().with_on_modified(move || board.update(Board::stroke_completed)),
    ));
    let surface = store_value(surface);
    let canvas_ref = create_node_ref::<Canvas>();

    let notify = move |notice: Option<Notice>| {
        if let Some(notice) = notice {
            toaster.push(notice);
        }
    };

    let on_clear = move |_| {
        surface.with_value(|s| s.borrow_mut().clear());
        if let Some(canvas) = canvas_ref.get() {
            surface.with_value(|s| wipe(&canvas, s.borrow().config()));
        }
        notify(board.try_update(Board::clear));
    };

    let on_vectorize = move |_| {
        match board.try_update(Board::begin_vectorize) {
            Some(Ok(())) => {}
            Some(Err(notice)) => return toaster.push(notice),
            None => return,
        }

        let snapshot = canvas_ref
            .get()
            .and_then(|canvas| canvas.to_data_url_with_type("image/png").ok());
        let Some(data_uri) = snapshot else {
            gloo_console::error!("Failed to capture canvas snapshot");
            return notify(board.try_update(Board::capture_failed));
        };

        let api_key = board.with_untracked(|b| b.api_key().to_string());
        let session = session_id.get_value();
        spawn_local(async move {
            let notice = match ApiClient::new().vectorize(&data_uri, &api_key, &session).await {
                Ok(reply) => board.try_update(|b| b.finish_vectorize(reply.svg_data, reply.error)),
                Err(e) => {
                    gloo_console::error!("Vectorize request failed:", e.clone());
                    board.try_update(|b| b.request_failed(format!("An unexpected error occurred: {}", e)))
                }
            };
            notify(notice);
        });
    };

    let on_download = move |_| match board.with_untracked(Board::download) {
        Ok((file, notice)) => {
            save_file(&file);
            toaster.push(notice);
        }
        Err(notice) => toaster.push(notice),
    };

    let on_dismiss_intro = move |_| {
        board.update(Board::dismiss_intro);
        let _ = LocalStorage::set(INTRO_DISMISSED_KEY, true);
    };

    let pane = Signal::derive(move || board.with(Board::preview));
    let api_key = Signal::derive(move || board.with(|b| b.api_key().to_string()));
    let on_key = Callback::new(move |key: String| board.update(|b| b.set_api_key(key)));

    view! {
        <div class="space-y-6">
            <Show when=move || board.with(Board::show_intro)>
                <div class="relative rounded-lg border border-indigo-200 bg-indigo-50 p-4">
                    <h3 class="font-semibold text-indigo-900">"Welcome to VectorInk!"</h3>
                    <p class="text-sm text-indigo-800 mt-1">
                        "Draw on the canvas, enter your Google AI API key and press Vectorize. \
                         The model redraws your sketch as clean SVG you can preview and download."
                    </p>
                    <button
                        class="absolute top-2 right-2 text-indigo-700 hover:text-indigo-900"
                        aria-label="Dismiss"
                        on:click=on_dismiss_intro
                    >
                        "✕"
                    </button>
                </div>
            </Show>

            <ApiKeyInput value=api_key on_input=on_key />

            <div class="grid gap-6 md:grid-cols-2">
                <Card title="Draw Here" subtitle="Unleash your creativity!">
                    <DrawingCanvas surface=surface node_ref=canvas_ref />
                    <div class="flex gap-2 mt-4">
                        <button
                            class="px-4 py-2 rounded-md border hover:bg-gray-100"
                            on:click=on_clear
                        >
                            "Clear"
                        </button>
                        <button
                            class="flex-1 px-4 py-2 rounded-md bg-indigo-600 text-white disabled:opacity-50"
                            prop:disabled=move || !board.with(Board::can_vectorize)
                            on:click=on_vectorize
                        >
                            {move || if board.with(Board::is_vectorizing) { "Vectorizing..." } else { "Vectorize" }}
                        </button>
                    </div>
                </Card>

                <Card title="Vectorized Output" subtitle="Your SVG masterpiece.">
                    <SvgPreview pane=pane />
                    <button
                        class="w-full mt-4 px-4 py-2 rounded-md border hover:bg-gray-100 disabled:opacity-50"
                        prop:disabled=move || !board.with(Board::can_download)
                        on:click=on_download
                    >
                        "Download SVG"
                    </button>
                </Card>
            </div>
        </div>
    }
}

/// Hand the SVG to the browser as a file download
fn save_file(file: &SvgDownload) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(file.body()));

    let mut opts = web_sys::BlobPropertyBag::new();
    opts.set_type(file.mime());

    if let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&array, &opts) {
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
            if let Ok(a) = document.create_element("a") {
                let _ = a.set_attribute("href", &url);
                let _ = a.set_attribute("download", file.filename());
                if let Some(anchor) = a.dyn_ref::<web_sys::HtmlAnchorElement>() {
                    anchor.click();
                }
            }
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    }
}
