//! Mobile product carousels, one stacked block per category.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every clip of a category is mounted and cross-faded by opacity. The visible
//! clip is rewound and played once its `loadeddata` flag is set and every other
//! clip is paused; `ended` from the visible clip advances the carousel, dots
//! jump directly.

use leptos::prelude::*;

use crate::content::videos::Category;
use crate::state::carousel::MobileCarousels;
use crate::util::motion;

#[component]
pub fn ProductMobile(carousels: RwSignal<MobileCarousels>) -> impl IntoView {
    view! {
        <div class="relative w-auto mx-auto py-20 block lg:hidden bg-black">
            <h1 class="text-2xl md:text-5xl text-center max-w-3xl leading-relaxed text-white">
                "Evolving the drive with " <strong class="font-semibold">"360-degree"</strong>
                " comprehensive solutions"
            </h1>
            <CategoryCarousel category=Category::Passenger carousels=carousels />
            <div class="mt-10">
                <CategoryCarousel category=Category::Commercial carousels=carousels />
            </div>
        </div>
    }
}

#[component]
fn CategoryCarousel(category: Category, carousels: RwSignal<MobileCarousels>) -> impl IntoView {
    let videos = category.videos();
    let video_refs: Vec<NodeRef<leptos::html::Video>> = videos.iter().map(|_| NodeRef::new()).collect();

    let index = Memo::new(move |_| carousels.with(|c| c.get(category).index));

    #[cfg(feature = "hydrate")]
    {
        let ready = Memo::new(move |_| carousels.with(|c| c.get(category).should_play_current()));
        let video_refs = video_refs.clone();
        Effect::new(move || {
            let current = index.get();
            for (i, node_ref) in video_refs.iter().enumerate() {
                if i != current {
                    if let Some(video) = node_ref.get_untracked() {
                        crate::util::media::pause(&video);
                    }
                }
            }
            if !ready.get() {
                return;
            }
            let Some(node_ref) = video_refs.get(current) else {
                return;
            };
            if let Some(video) = node_ref.get_untracked() {
                crate::util::media::restart(&video, category.key());
            }
        });
    }

    let layers = videos
        .iter()
        .enumerate()
        .map(|(i, video)| {
            view! {
                <video
                    node_ref=video_refs[i]
                    src=video.src
                    class=move || motion::carousel_layer_class(index.get() == i)
                    muted
                    preload="auto"
                    playsinline
                    on:loadeddata=move |_| carousels.update(|c| c.get_mut(category).mark_loaded(i))
                    on:ended=move |_| {
                        carousels.maybe_update(|c| c.get_mut(category).on_ended(i));
                    }
                ></video>
            }
        })
        .collect_view();

    let dots = (0..videos.len())
        .map(|i| {
            view! {
                <button
                    type="button"
                    aria-label=format!("Show {}", videos[i].name)
                    class=move || motion::dot_class(index.get() == i)
                    on:click=move |_| carousels.update(|c| c.get_mut(category).select(i))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div>
            <div class="text-center pt-6">
                <h4 class="text-xl mb-2 font-semibold text-[#00bfff]">{category.title()}</h4>
                <p class="text-white font-sm">{category.tagline()}</p>
            </div>
            <div class="relative w-full aspect-video overflow-hidden rounded-lg flex items-center">{layers}</div>
            <p class="text-white text-lg text-center mt-3">
                {move || carousels.with(|c| c.get(category).current().name)}
            </p>
            <div class="flex justify-center gap-2 mt-3">{dots}</div>
        </div>
    }
}
