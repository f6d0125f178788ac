//! Site footer: link columns, copyright and head-office address.

use leptos::prelude::*;

use crate::content::site::{
    COMPANY_NAME, FOOTER_BACKGROUND_SRC, FOOTER_COLUMNS, HEAD_OFFICE_ADDRESS, LOGO_SRC, copyright_line,
};
use crate::util::clock::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year());

    let columns = FOOTER_COLUMNS
        .iter()
        .map(|column| {
            let links = column.links.iter().map(|link| view! { <li>{*link}</li> }).collect_view();
            view! {
                <div class="text-left">
                    <h3 class="font-bold mb-2">{column.title}</h3>
                    <ul class="space-y-1">{links}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer
            class="bg-cover bg-center text-gray-700 py-20 px-6 md:px-20"
            style=format!("background-image: url({FOOTER_BACKGROUND_SRC});")
        >
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-start mb-6">
                    <img src=LOGO_SRC alt=COMPANY_NAME class="w-32" />
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 sm:grid-cols-2 gap-6 text-center md:text-left">
                    {columns}
                </div>
                <div class="text-center mt-15 text-sm lg:flex lg:items-center lg:justify-between">
                    <p>{copyright}</p>
                    <p class="hidden lg:block">{HEAD_OFFICE_ADDRESS}</p>
                </div>
            </div>
        </footer>
    }
}
