//! Full-screen hero with a looping background video.

use leptos::prelude::*;

use crate::content::videos::BANNER_VIDEO;

#[component]
pub fn Banner() -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();

    // `autoplay` alone is not enough after hydration; start it explicitly.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(video) = video_ref.get() {
            crate::util::media::play(&video, "banner");
        }
    });

    view! {
        <section class="relative w-full h-screen flex items-center justify-center overflow-hidden">
            <video
                node_ref=video_ref
                class="absolute top-0 left-0 w-full h-full object-cover"
                autoplay
                muted
                prop:loop=true
                playsinline
            >
                <source src=BANNER_VIDEO type="video/mp4" />
            </video>

            <div class="absolute top-0 left-0 w-full h-full bg-black/50"></div>

            <div class="relative text-center text-white px-6 max-w-4xl">
                <p class="text-sm md:text-lg uppercase pb-2 tracking-wider">"Driven by performance"</p>
                <h1 class="text-3xl md:text-5xl font-semibold mt-2">
                    "Soft trims and " <span class="text-blue-400">"NVH solutions"</span> " "
                    <br class="hidden sm:block" />
                    <span class="text-white font-light">"for seamless rides"</span>
                </h1>
            </div>
        </section>
    }
}
