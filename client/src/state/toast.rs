//! Toast notification queue with hover-pausable auto-dismiss.
//!
//! DESIGN
//! ======
//! Each toast carries its own remaining lifetime. The container advances all
//! unpaused toasts by a fixed tick while any are on screen and drops the ones
//! that reach zero, so a hovered toast keeps its remaining time.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Countdown granularity used by the container.
pub const TOAST_TICK_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    #[default]
    BottomCenter,
}

impl ToastPosition {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::BottomCenter => "toast-stack toast-stack--bottom-center",
        }
    }
}

/// Container behavior, fixed per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastConfig {
    pub position: ToastPosition,
    pub auto_close_ms: u32,
    pub show_progress_bar: bool,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::BottomCenter,
            auto_close_ms: 3_000,
            show_progress_bar: true,
            close_on_click: true,
            pause_on_hover: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub remaining_ms: u32,
    pub paused: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub config: ToastConfig,
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self { config, toasts: Vec::new(), next_id: 0 }
    }

    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            remaining_ms: self.config.auto_close_ms,
            paused: false,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Click on a toast body.
    pub fn on_click(&mut self, id: u64) {
        if self.config.close_on_click {
            self.dismiss(id);
        }
    }

    pub fn set_hovered(&mut self, id: u64, hovered: bool) {
        if !self.config.pause_on_hover {
            return;
        }
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.paused = hovered;
        }
    }

    /// Advance unpaused toasts by `elapsed_ms` and drop the expired ones.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for toast in self.toasts.iter_mut().filter(|t| !t.paused) {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.toasts.retain(|t| t.remaining_ms > 0);
    }

    /// Fraction of lifetime left, for the countdown bar.
    #[must_use]
    pub fn remaining_fraction(&self, toast: &Toast) -> f64 {
        if self.config.auto_close_ms == 0 {
            return 0.0;
        }
        f64::from(toast.remaining_ms) / f64::from(self.config.auto_close_ms)
    }
}
