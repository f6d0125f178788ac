//! Header visibility driven by scroll direction.
//!
//! DESIGN
//! ======
//! Each scroll sample is compared with the previous one: scrolling up (or not
//! moving) shows the header, scrolling down hides it. Samples are applied as
//! they arrive, without throttling.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderState {
    pub visible: bool,
    /// Vertical offset seen on the previous scroll event.
    pub last_offset: f64,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self { visible: true, last_offset: 0.0 }
    }
}

impl HeaderState {
    /// Apply a scroll sample and return the resulting visibility.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset <= self.last_offset;
        self.last_offset = offset;
        self.visible
    }
}
