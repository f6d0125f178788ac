//! Circular playback progress indicator.
//!
//! Stroke-dash based SVG ring: the trail is a full circle, the path covers
//! `percent` of the circumference starting at twelve o'clock.

use leptos::prelude::*;

#[cfg(test)]
#[path = "progress_ring_test.rs"]
mod progress_ring_test;

const VIEWBOX: f64 = 100.0;
const STROKE_WIDTH: f64 = 8.0;
const RADIUS: f64 = (VIEWBOX - STROKE_WIDTH) / 2.0;

/// Colors for the ring; text is intentionally not rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingStyle {
    pub path_color: &'static str,
    pub trail_color: &'static str,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self { path_color: "#fff", trail_color: "rgba(255,255,255,0.3)" }
    }
}

fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * RADIUS
}

/// `stroke-dashoffset` that leaves `percent` of the ring drawn.
#[must_use]
pub fn dash_offset(percent: f64) -> f64 {
    let clamped = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    circumference() * (1.0 - clamped / 100.0)
}

#[component]
pub fn ProgressRing(#[prop(into)] percent: Signal<f64>, #[prop(optional)] colors: RingStyle) -> impl IntoView {
    let center = (VIEWBOX / 2.0).to_string();
    let radius = RADIUS.to_string();
    let stroke_width = STROKE_WIDTH.to_string();
    let dash_array = format!("{:.3} {:.3}", circumference(), circumference());

    view! {
        <svg class="w-full h-full -rotate-90" viewBox=format!("0 0 {VIEWBOX} {VIEWBOX}") aria-hidden="true">
            <circle
                cx=center.clone()
                cy=center.clone()
                r=radius.clone()
                fill="none"
                stroke=colors.trail_color
                stroke-width=stroke_width.clone()
            />
            <circle
                cx=center.clone()
                cy=center.clone()
                r=radius.clone()
                fill="none"
                stroke=colors.path_color
                stroke-width=stroke_width.clone()
                stroke-linecap="round"
                stroke-dasharray=dash_array
                stroke-dashoffset=move || format!("{:.3}", dash_offset(percent.get()))
                style="transition: stroke-dashoffset 0.1s linear;"
            />
        </svg>
    }
}
