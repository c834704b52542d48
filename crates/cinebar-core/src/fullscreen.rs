//! Fullscreen-aware controls.
//!
//! Controls that change their presentation bounds with the window mode
//! implement [`FullscreenAware`] and subscribe to the
//! [`RevealCoordinator`](crate::reveal::RevealCoordinator).

/// A control that restyles or resizes when fullscreen mode changes.
///
/// Implementations must be idempotent and only adjust presentation (sizes,
/// classes). The fullscreen and popover flags belong to the coordinator.
pub trait FullscreenAware {
    fn on_fullscreen_mode_changed(&self, is_fullscreen: bool, is_mobile_monitor: bool);
}

/// Two-step size bound: a compact size, and a larger one used only in
/// fullscreen on a non-mobile monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    pub windowed: i32,
    pub fullscreen: i32,
}

impl SizePolicy {
    pub const fn new(windowed: i32, fullscreen: i32) -> Self {
        Self {
            windowed,
            fullscreen,
        }
    }

    pub fn max_height(&self, is_fullscreen: bool, is_mobile_monitor: bool) -> i32 {
        if is_fullscreen && !is_mobile_monitor {
            self.fullscreen
        } else {
            self.windowed
        }
    }
}
