//! Current calendar year for the footer copyright.
//!
//! The browser reads its local clock; the server uses UTC. Test builds with
//! neither feature fall back to a fixed year.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
const FALLBACK_YEAR: i32 = 2025;

#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        time::OffsetDateTime::now_utc().year()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        FALLBACK_YEAR
    }
}
