//! Product showcase section: tabbed player on desktop, carousels on mobile.
//!
//! ARCHITECTURE
//! ============
//! Both variants are always rendered and toggled with responsive classes. The
//! desktop player maps DOM media events and a 100ms progress poll onto
//! `ProductState`; window scroll drives the passenger/commercial auto-switch.
//! The mobile carousels live in `product_mobile`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::{PauseIcon, PlayIcon};
use crate::components::product_mobile::ProductMobile;
use crate::components::progress_ring::ProgressRing;
use crate::content::videos::Category;
use crate::state::carousel::MobileCarousels;
use crate::state::product::ProductState;
use crate::util::motion;

#[cfg(feature = "hydrate")]
use crate::state::product::{PROGRESS_POLL_MS, PlaybackCommand};
#[cfg(feature = "hydrate")]
use crate::util::media;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Label used in autoplay warnings for the desktop player.
#[cfg(feature = "hydrate")]
const PLAYER_LABEL: &str = "product";

#[component]
pub fn Product() -> impl IntoView {
    let desktop = RwSignal::new(ProductState::default());
    let mobile = RwSignal::new(MobileCarousels::default());

    view! {
        <ProductDesktop state=desktop />
        <ProductMobile carousels=mobile />
    }
}

#[component]
fn ProductDesktop(state: RwSignal<ProductState>) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Div>::new();
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let category = Memo::new(move |_| state.with(|s| s.category));
    let playing = Memo::new(move |_| state.with(|s| s.playing));
    let progress = Signal::derive(move || state.with(|s| s.progress_percent));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let Some(percent) = crate::util::scroll::element_visible_percent(&section) else {
                return;
            };
            state.maybe_update(|s| s.on_visible_percent(percent));
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "hydrate")]
    {
        let poll = Rc::new(RefCell::new(None::<Interval>));
        Effect::new(move || {
            if !playing.get() {
                poll.borrow_mut().take();
                return;
            }
            if poll.borrow().is_some() {
                return;
            }
            let tick = Interval::new(PROGRESS_POLL_MS, move || {
                if let Some(video) = video_ref.get_untracked() {
                    let (current, duration) = media::position(&video);
                    state.update(|s| s.on_progress_sample(current, duration));
                }
            });
            *poll.borrow_mut() = Some(tick);
        });
    }

    let on_toggle = move |_| {
        let Some(command) = state.try_update(ProductState::toggle_playback) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        if let Some(video) = video_ref.get_untracked() {
            match command {
                PlaybackCommand::Play => media::play(&video, PLAYER_LABEL),
                PlaybackCommand::Pause => media::pause(&video),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = command;
    };

    let on_metadata = move |_| {
        let resume = state.try_update(ProductState::on_metadata_loaded).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        if resume {
            if let Some(video) = video_ref.get_untracked() {
                media::play(&video, PLAYER_LABEL);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = resume;
    };

    let tabs = Category::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <div
                    class="cursor-pointer active:scale-[0.98]"
                    style=move || motion::tab_style(category.get() == tab)
                    on:click=move |_| state.update(|s| s.select_category(tab))
                >
                    <h2 class="text-2xl font-semibold">{tab.title()}</h2>
                    <p class="text-lg mt-2 w-56">{tab.tagline()}</p>
                </div>
            }
        })
        .collect_view();

    // Re-mounted per category so the enter animation replays on every switch.
    let content = move || {
        let videos = category.get().videos();
        let thumbnails = videos
            .iter()
            .enumerate()
            .map(|(index, video)| {
                view! {
                    <button
                        type="button"
                        class=move || motion::thumbnail_class(state.with(|s| s.active_video == index))
                        on:click=move |_| state.update(|s| s.select_video(index))
                    >
                        <img
                            src=video.thumbnail
                            alt=format!("Thumbnail {}", index + 1)
                            class="w-12 h-12 object-cover rounded"
                        />
                        <div>{video.name}</div>
                    </button>
                }
            })
            .collect_view();

        view! {
            <div class=format!("md:w-2/3 flex flex-col items-center gap-6 {}", motion::CONTENT_ENTER_CLASS)>
                <div class=format!(
                    "w-full h-64 bg-black relative overflow-hidden flex justify-center {}",
                    motion::PLAYER_ENTER_CLASS,
                )>
                    <video
                        node_ref=video_ref
                        class="w-auto h-full object-cover"
                        src=move || state.with(|s| s.active_entry().src)
                        autoplay
                        muted
                        playsinline
                        on:play=move |_| state.update(ProductState::on_media_play)
                        on:pause=move |_| state.update(ProductState::on_media_pause)
                        on:ended=move |_| state.update(ProductState::on_media_ended)
                        on:loadedmetadata=on_metadata
                    ></video>
                </div>
                <div class="flex gap-10 items-center">
                    {thumbnails}
                    <button
                        type="button"
                        class="w-16 h-16 relative cursor-pointer"
                        aria-label=move || if playing.get() { "Pause video" } else { "Play video" }
                        on:click=on_toggle
                    >
                        <ProgressRing percent=progress />
                        <div class="absolute inset-0 flex items-center justify-center text-white transition-transform hover:scale-125">
                            {move || {
                                if playing.get() { view! { <PauseIcon /> }.into_any() } else { view! { <PlayIcon /> }.into_any() }
                            }}
                        </div>
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div node_ref=section_ref class="h-screen w-full bg-black text-white py-10 hidden lg:flex">
            <div class="h-full w-full">
                <div class=format!("py-10 px-5 flex flex-col items-center justify-center {}", motion::HEADING_ENTER_CLASS)>
                    <h1 class="text-2xl md:text-5xl text-center font-light leading-snug max-w-3xl">
                        "Evolving the drive with " <strong class="font-bold">"360-degree"</strong>
                        " comprehensive solutions"
                    </h1>
                </div>

                <div class="flex flex-col md:flex-row justify-center items-start px-5 md:px-20 pb-20 gap-8">
                    <div class="flex gap-16">
                        <div class="w-1 h-58 rounded-full bg-gray-500 mt-8 relative">
                            <div
                                class="absolute w-1 rounded-full bg-white"
                                style=move || motion::indicator_style(category.get())
                            ></div>
                        </div>
                        <div class="flex flex-col gap-12 w-full">{tabs}</div>
                    </div>
                    {content}
                </div>
            </div>
        </div>
    }
}
