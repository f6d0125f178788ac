//! "Get in touch" section with the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and field bookkeeping live in `state::contact`. A started
//! submission sleeps `SUBMIT_DELAY_MS`, pushes a success toast and clears the
//! form. The delay is not cancelled if the section unmounts; the late update
//! is then skipped because the signal is already disposed.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::site::{CONTACT_DETAILS, CONTACT_SECTION_ID};
use crate::state::contact::{ContactField, ContactState, InputKind, SubmitOutcome};
use crate::state::toast::ToastState;

#[cfg(feature = "hydrate")]
use crate::state::contact::{SUBMIT_DELAY_MS, SUBMIT_SUCCESS_MESSAGE};

const INPUT_CLASS: &str = "text-white placeholder:text-opacity-90 focus-visible:border-opacity-100 \
     border-white border-opacity-40 transition-all duration-200 tracking-wide ease-in-out border-b-2 \
     border-solid py-2 pr-2 w-full text-base lg:text-lg placeholder:text-white font-normal bg-transparent \
     outline-none focus-visible:outline-none";

#[component]
pub fn Contact() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = contact.try_update(ContactState::begin_submit);
        if outcome != Some(SubmitOutcome::Started) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;
            toasts.try_update(|t| t.success(SUBMIT_SUCCESS_MESSAGE));
            contact.try_update(ContactState::finish_submit);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = toasts;
    };

    let details = CONTACT_DETAILS
        .iter()
        .map(|detail| {
            view! {
                <p>
                    <span class="font-medium text-lg md:text-lg xl:text-xl">{detail.label} ":"</span>
                    <br />
                    {detail.value}
                </p>
            }
        })
        .collect_view();

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| view! { <FormField field=field contact=contact /> })
        .collect_view();

    view! {
        <section id=CONTACT_SECTION_ID class="bg-[#006abc] text-white py-20 px-6 md:px-16">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row gap-10">
                <div class="w-full md:w-1/2">
                    <h2 class="text-3xl font-semibold">"Get in touch"</h2>
                    <div class="h-[2px] w-12 bg-white my-3 md:my-5 lg:my-6 2xl:my-8"></div>
                    <p class="block font-normal text-base md:text-lg 2xl:text-2xl">"For general enquiries"</p>
                    <div class="mt-6 space-y-4">{details}</div>
                </div>

                <form class="w-full md:w-1/2" novalidate on:submit=on_submit>
                    {fields}
                    <button
                        type="submit"
                        class="border-2 border-white py-2 px-8 rounded-full mt-6 hover:bg-white hover:text-blue-600 transition duration-300 disabled:opacity-70"
                        disabled=move || contact.with(|c| c.submitting)
                    >
                        {move || contact.with(ContactState::submit_label)}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// One input (or textarea) with its inline error line.
#[component]
fn FormField(field: ContactField, contact: RwSignal<ContactState>) -> impl IntoView {
    let value = move || contact.with(|c| c.form.get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| contact.update(|c| c.set_field(field, event_target_value(&ev)));
    let error = move || contact.with(|c| c.error(field));

    let control = match field.input_kind() {
        InputKind::TextArea => view! {
            <textarea
                name=field.name()
                placeholder=field.label()
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        kind => {
            let input_type = if kind == InputKind::Email { "email" } else { "text" };
            view! {
                <input
                    type=input_type
                    name=field.name()
                    placeholder=field.label()
                    class=INPUT_CLASS
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="mb-4">
            {control}
            {move || error().map(|message| view! { <p class="text-red-400 text-sm mt-1">{message}</p> })}
        </div>
    }
}
