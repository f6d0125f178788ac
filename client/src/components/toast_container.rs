//! Toast stack rendered once per page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<ToastState>` from context. While any toast is visible a
//! countdown interval advances the queue; it is dropped when the stack empties.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TICK_MS;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let has_toasts = Memo::new(move |_| toasts.with(|t| !t.toasts.is_empty()));

    #[cfg(feature = "hydrate")]
    {
        let countdown = Rc::new(RefCell::new(None::<Interval>));
        Effect::new(move || {
            if !has_toasts.get() {
                countdown.borrow_mut().take();
                return;
            }
            if countdown.borrow().is_some() {
                return;
            }
            let tick = Interval::new(TOAST_TICK_MS, move || toasts.update(|t| t.tick(TOAST_TICK_MS)));
            *countdown.borrow_mut() = Some(tick);
        });
    }

    let stack_class = move || toasts.with(|t| t.config.position.class());

    view! {
        <Show when=move || has_toasts.get()>
            <div class=stack_class role="status" aria-live="polite">
                <For
                    each=move || toasts.get().toasts
                    key=|toast| toast.id
                    children=move |toast| {
                        let id = toast.id;
                        let show_bar = toasts.with_untracked(|t| t.config.show_progress_bar);
                        let bar_style = move || {
                            let fraction = toasts.with(|t| {
                                t.toasts.iter().find(|x| x.id == id).map_or(0.0, |x| t.remaining_fraction(x))
                            });
                            format!("transform: scaleX({fraction:.3});")
                        };
                        view! {
                            <div
                                class=toast.kind.class()
                                on:click=move |_| toasts.update(|t| t.on_click(id))
                                on:mouseenter=move |_| toasts.update(|t| t.set_hovered(id, true))
                                on:mouseleave=move |_| toasts.update(|t| t.set_hovered(id, false))
                            >
                                <p class="toast__message">{toast.message.clone()}</p>
                                <Show when=move || show_bar>
                                    <div class="toast__progress" style=bar_style></div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
