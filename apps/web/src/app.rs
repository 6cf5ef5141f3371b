//! Main Application Component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::Toaster;
use crate::pages::Home;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="VectorInk" />
        <Meta name="description" content="Draw freehand and convert it to SVG" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Toaster>
            <Router>
                <main class="min-h-screen flex flex-col bg-gray-50 text-gray-900">
                    <Header />
                    <div class="flex-1 container mx-auto px-4 py-8 flex flex-col">
                        <Routes>
                            <Route path="/" view=Home />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </div>
                    <footer class="py-4 text-center text-sm text-gray-500">
                        "VectorInk - draw, vectorize, download."
                    </footer>
                </main>
            </Router>
        </Toaster>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="bg-white border-b shadow-sm">
            <div class="container mx-auto px-4 h-16 flex items-center">
                <A href="/" class="text-xl font-bold text-indigo-600">"VectorInk"</A>
            </div>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h1 class="text-6xl font-bold text-gray-400">"404"</h1>
            <p class="text-xl text-gray-600 mt-4">"Page not found"</p>
            <A href="/" class="inline-block mt-8 px-6 py-3 bg-indigo-600 text-white rounded-lg hover:opacity-90">
                "Go Home"
            </A>
        </div>
    }
}
