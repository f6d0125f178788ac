//! Root component, HTML shell and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the Axum host for every request; `App` is what the
//! browser hydrates. The only app-wide state is the toast queue, provided as
//! context so any section can raise a notification.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::content::site::COMPANY_NAME;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::state::toast::{ToastConfig, ToastState};

/// Document shell for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/logo.webp" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ToastState::new(ToastConfig::default())));

    view! {
        <Stylesheet id="leptos" href="/pkg/supreme_site.css" />
        <Title text=COMPANY_NAME />
        <Meta name="description" content="Soft trims and NVH solutions for seamless rides." />
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
