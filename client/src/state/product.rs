//! Desktop product showcase state: active tab, active clip and playback.
//!
//! DESIGN
//! ======
//! The component owns the `<video>` element; this state only records what the
//! element should be doing and mirrors what it reports back through media
//! events. Every category change, manual or scroll-driven, goes through
//! `select_category` so the clip index and progress always reset together.
//!
//! The scroll auto-switch uses an asymmetric band: passenger flips to
//! commercial above 95% visibility, commercial flips back below 75%. Anything
//! in between keeps the current tab so the boundary does not flicker.

use crate::content::videos::{Category, VideoEntry};

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

/// Visible percentage above which the passenger tab yields to commercial.
pub const SWITCH_TO_COMMERCIAL_ABOVE: f64 = 95.0;
/// Visible percentage below which the commercial tab yields to passenger.
pub const SWITCH_TO_PASSENGER_BELOW: f64 = 75.0;
/// Playback progress polling period while a clip is playing.
pub const PROGRESS_POLL_MS: u32 = 100;

/// Imperative request the component forwards to the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductState {
    pub category: Category,
    pub active_video: usize,
    pub playing: bool,
    /// 0.0..=100.0, drives the progress ring.
    pub progress_percent: f64,
}

impl ProductState {
    /// Videos for the active category.
    #[must_use]
    pub fn videos(&self) -> &'static [VideoEntry] {
        self.category.videos()
    }

    /// Entry currently loaded in the desktop player.
    #[must_use]
    pub fn active_entry(&self) -> &'static VideoEntry {
        let videos = self.videos();
        &videos[self.active_video.min(videos.len() - 1)]
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.active_video = 0;
        self.progress_percent = 0.0;
    }

    /// Thumbnail click. Out-of-range indexes are ignored.
    pub fn select_video(&mut self, index: usize) {
        if index >= self.videos().len() {
            return;
        }
        self.active_video = index;
        self.progress_percent = 0.0;
    }

    /// Apply a scroll sample of the section's visible percentage.
    ///
    /// Returns `true` when the sample switched the category.
    pub fn on_visible_percent(&mut self, percent: f64) -> bool {
        let next = match self.category {
            Category::Passenger if percent > SWITCH_TO_COMMERCIAL_ABOVE => Category::Commercial,
            Category::Commercial if percent < SWITCH_TO_PASSENGER_BELOW => Category::Passenger,
            _ => return false,
        };
        self.select_category(next);
        true
    }

    /// Play/pause button. Flips `playing` and returns what the element must do.
    pub fn toggle_playback(&mut self) -> PlaybackCommand {
        let command = if self.playing { PlaybackCommand::Pause } else { PlaybackCommand::Play };
        self.playing = !self.playing;
        command
    }

    pub fn on_media_play(&mut self) {
        self.playing = true;
    }

    pub fn on_media_pause(&mut self) {
        self.playing = false;
    }

    pub fn on_media_ended(&mut self) {
        self.playing = false;
        self.progress_percent = 0.0;
    }

    /// New clip metadata is available. Returns whether playback should resume.
    pub fn on_metadata_loaded(&mut self) -> bool {
        self.progress_percent = 0.0;
        self.playing
    }

    /// Progress poll tick. Samples without a known duration are dropped.
    pub fn on_progress_sample(&mut self, current_time: f64, duration: f64) {
        if let Some(percent) = progress_percent(current_time, duration) {
            self.progress_percent = percent;
        }
    }
}

/// `current / duration` as a percentage, `None` when the duration is unknown.
#[must_use]
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    if !(duration.is_finite() && duration > 0.0) {
        return None;
    }
    Some((current_time / duration * 100.0).clamp(0.0, 100.0))
}
