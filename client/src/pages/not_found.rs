//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-black text-white">
            <h1 class="text-3xl font-semibold">"Page not found"</h1>
            <a href="/" class="border-2 border-white py-2 px-8 rounded-full">"Back to home"</a>
        </main>
    }
}
