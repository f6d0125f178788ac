//! `<video>` element glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers may refuse `play()` under their autoplay policy. The rejection is
//! logged as a warning and otherwise ignored; there is no visible fallback.
//! Outside `hydrate` builds every call is a no-op so SSR stays deterministic.

#[cfg(feature = "hydrate")]
use web_sys::HtmlVideoElement;

/// Start playback, logging a rejected play promise under `label`.
#[cfg(feature = "hydrate")]
pub fn play(video: &HtmlVideoElement, label: &'static str) {
    match video.play() {
        Ok(promise) => {
            leptos::task::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("{label} video play was prevented: {err:?}");
                }
            });
        }
        Err(err) => log::warn!("{label} video play failed: {err:?}"),
    }
}

#[cfg(feature = "hydrate")]
pub fn pause(video: &HtmlVideoElement) {
    if let Err(err) = video.pause() {
        log::warn!("video pause failed: {err:?}");
    }
}

/// Rewind to the first frame and play.
#[cfg(feature = "hydrate")]
pub fn restart(video: &HtmlVideoElement, label: &'static str) {
    video.set_current_time(0.0);
    play(video, label);
}

/// Current time and duration, for progress polling.
#[cfg(feature = "hydrate")]
pub fn position(video: &HtmlVideoElement) -> (f64, f64) {
    (video.current_time(), video.duration())
}
