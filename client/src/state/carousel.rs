//! Mobile auto-advancing video carousels, one per category.
//!
//! DESIGN
//! ======
//! All clips of a category are mounted at once and cross-faded; only the clip
//! at `index` is visible and playing. A clip may start only after it reported
//! `loadeddata`, and it is rewound before every start so each turn plays from
//! the beginning. Hidden clips are paused. When the visible clip ends the index moves to the next clip,
//! wrapping at the end of the list.

use crate::content::videos::{Category, VideoEntry};

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub category: Category,
    pub index: usize,
    /// Per-clip `loadeddata` flags, parallel to `category.videos()`.
    pub loaded: Vec<bool>,
}

impl CarouselState {
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self { category, index: 0, loaded: vec![false; category.videos().len()] }
    }

    #[must_use]
    pub fn videos(&self) -> &'static [VideoEntry] {
        self.category.videos()
    }

    #[must_use]
    pub fn current(&self) -> &'static VideoEntry {
        &self.videos()[self.index]
    }

    pub fn mark_loaded(&mut self, index: usize) {
        if let Some(flag) = self.loaded.get_mut(index) {
            *flag = true;
        }
    }

    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    /// Whether the visible clip is ready to be rewound and played.
    #[must_use]
    pub fn should_play_current(&self) -> bool {
        self.is_loaded(self.index)
    }

    /// Clip `clip` finished. Advances only when it is the visible clip and
    /// it had loaded; a hidden clip that outlived a dot click is ignored.
    ///
    /// Returns `true` if the index moved.
    pub fn on_ended(&mut self, clip: usize) -> bool {
        if clip != self.index || !self.should_play_current() {
            return false;
        }
        self.index = (self.index + 1) % self.videos().len();
        true
    }

    /// Indicator dot click. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.videos().len() {
            self.index = index;
        }
    }
}

/// Independent carousels for both categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileCarousels {
    pub passenger: CarouselState,
    pub commercial: CarouselState,
}

impl Default for MobileCarousels {
    fn default() -> Self {
        Self {
            passenger: CarouselState::new(Category::Passenger),
            commercial: CarouselState::new(Category::Commercial),
        }
    }
}

impl MobileCarousels {
    #[must_use]
    pub fn get(&self, category: Category) -> &CarouselState {
        match category {
            Category::Passenger => &self.passenger,
            Category::Commercial => &self.commercial,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut CarouselState {
        match category {
            Category::Passenger => &mut self.passenger,
            Category::Commercial => &mut self.commercial,
        }
    }
}
