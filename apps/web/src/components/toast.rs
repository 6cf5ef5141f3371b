//! Toast notifications

use gloo_timers::callback::Timeout;
use leptos::*;
use vectorink_canvas::{Notice, NoticeVariant};

const TOAST_MILLIS: u32 = 4_000;

/// Handle for raising toasts from any component
#[derive(Clone, Copy)]
pub struct ToasterContext {
    toasts: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl ToasterContext {
    /// Show a notice and schedule its removal
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push((id, notice)));

        let toasts = self.toasts;
        Timeout::new(TOAST_MILLIS, move || {
            toasts.update(|toasts| toasts.retain(|(toast_id, _)| *toast_id != id));
        })
        .forget();
    }

    fn dismiss(&self, id: u64) {
        self.toasts
            .update(|toasts| toasts.retain(|(toast_id, _)| *toast_id != id));
    }
}

/// Get the toaster provided by [`Toaster`]
pub fn use_toaster() -> ToasterContext {
    expect_context::<ToasterContext>()
}

/// Provides [`ToasterContext`] and renders the toast stack
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let ctx = ToasterContext {
        toasts: create_rw_signal(Vec::new()),
        next_id: store_value(0),
    };
    provide_context(ctx);

    view! {
        {children()}
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || ctx.toasts.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let class = match notice.variant {
                        NoticeVariant::Default => "bg-white border text-gray-900",
                        NoticeVariant::Destructive => "bg-red-600 text-white",
                    };
                    view! {
                        <div
                            class=format!("rounded-lg shadow-lg p-4 cursor-pointer {}", class)
                            role="status"
                            on:click=move |_| ctx.dismiss(id)
                        >
                            <p class="font-semibold">{notice.title}</p>
                            <p class="text-sm mt-1">{notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
