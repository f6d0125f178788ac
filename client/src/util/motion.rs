//! CSS-transition equivalents of the showcase motion variants.
//!
//! DESIGN
//! ======
//! Each variant is an inline style string; the browser interpolates between
//! them through the `transition` property, so switching a signal is enough to
//! animate. Enter animations use keyframes declared in `style/tailwind.css`.

use crate::content::videos::Category;

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

const TAB_TRANSITION: &str = "transition: color 0.3s ease, transform 0.3s ease;";
/// Spring-like overshoot curve standing in for stiffness 300 / damping 30.
const INDICATOR_TRANSITION: &str = "transition: top 0.45s cubic-bezier(0.34, 1.3, 0.64, 1);";

/// Desktop tab heading style.
#[must_use]
pub fn tab_style(active: bool) -> String {
    let (color, scale) = if active { ("#ffffff", "1.05") } else { ("#333333", "1") };
    format!("color: {color}; transform: scale({scale}); transform-origin: left center; {TAB_TRANSITION}")
}

/// Sliding bar next to the tabs: top half for passenger, bottom half for commercial.
#[must_use]
pub fn indicator_style(category: Category) -> String {
    let top = match category {
        Category::Passenger => "0",
        Category::Commercial => "50%",
    };
    format!("top: {top}; height: 50%; {INDICATOR_TRANSITION}")
}

/// Class applied to content re-mounted on tab change (fade up over 0.4s).
pub const CONTENT_ENTER_CLASS: &str = "motion-fade-up";
/// Class for the section heading entrance (0.8s).
pub const HEADING_ENTER_CLASS: &str = "motion-fade-up-slow";
/// Class for the player frame entrance (scale 0.95 to 1 over 0.5s).
pub const PLAYER_ENTER_CLASS: &str = "motion-zoom-in";

/// Thumbnail opacity class.
#[must_use]
pub fn thumbnail_class(active: bool) -> &'static str {
    if active {
        "p-1 cursor-pointer rounded flex flex-col items-center justify-center opacity-100"
    } else {
        "p-1 cursor-pointer rounded flex flex-col items-center justify-center opacity-50 hover:opacity-100"
    }
}

/// Mobile carousel dot class; the active dot stretches.
#[must_use]
pub fn dot_class(active: bool) -> &'static str {
    if active {
        "h-2.5 rounded-full transition-all duration-300 cursor-pointer bg-[#00bfff] w-8"
    } else {
        "w-2.5 h-2.5 rounded-full transition-all duration-300 cursor-pointer bg-[#00aeef59]"
    }
}

/// Mobile clip layer class; only the current clip is opaque.
#[must_use]
pub fn carousel_layer_class(active: bool) -> &'static str {
    if active {
        "absolute w-full h-auto object-cover transition-opacity duration-500 opacity-100"
    } else {
        "absolute w-full h-auto object-cover transition-opacity duration-500 opacity-0"
    }
}
