//! Fixed top navigation bar that slides away while scrolling down.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listens to window scroll and feeds `HeaderState`; the bar translates out of
//! view when the state reports hidden.

use leptos::prelude::*;

use crate::components::icons::{LanguageIcon, LinkedInIcon};
use crate::content::site::{COMPANY_NAME, CONTACT_SECTION_ID, LANGUAGE_LABEL, LINKEDIN_URL, LOGO_SRC};
use crate::state::header::HeaderState;

#[component]
pub fn Header() -> impl IntoView {
    let header = RwSignal::new(HeaderState::default());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = crate::util::scroll::window_scroll_y();
            header.maybe_update(|h| {
                let was_visible = h.visible;
                h.on_scroll(offset) != was_visible
            });
        });
        on_cleanup(move || handle.remove());
    }

    let header_class = move || {
        let slide = if header.with(|h| h.visible) { "translate-y-0" } else { "-translate-y-full" };
        format!("fixed top-0 left-0 w-full bg-white z-50 transition-transform duration-300 shadow-md {slide}")
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto flex items-center justify-between p-5">
                <img src=LOGO_SRC alt=COMPANY_NAME class="h-10 w-auto" />
                <nav class="items-center space-x-8 hidden lg:flex">
                    <a
                        href=format!("#{CONTACT_SECTION_ID}")
                        class="bg-[#5CD6FF] hover:bg-[#5CD6FF70] text-black font-regular py-2 px-7 rounded-full"
                    >
                        "Contact Us"
                    </a>
                    <SocialLink href=LINKEDIN_URL label="LinkedIn">
                        <LinkedInIcon />
                    </SocialLink>
                    <LanguageLabel />
                </nav>
            </div>
        </header>
    }
}

/// External profile link opened in a new tab.
#[component]
fn SocialLink(href: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class="text-gray-700 hover:text-blue-600"
        >
            {children()}
        </a>
    }
}

/// Current site language. Display only.
#[component]
fn LanguageLabel() -> impl IntoView {
    view! {
        <button type="button" class="text-gray-700 hover:text-blue-600 flex items-center gap-2 font-bold">
            <LanguageIcon />
            {LANGUAGE_LABEL}
        </button>
    }
}
