// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge resize debouncing with an injected clock.
//!
//! ## Usage
//!
//! 1) Call [`ResizeDebouncer::push`] for every raw resize notification.
//! 2) Call [`ResizeDebouncer::poll`] from a timer or the next frame.
//! 3) When `poll` returns a size, re-resolve layout for it.
//!
//! ```
//! use kurbo::Size;
//! use hotspot_state::ResizeDebouncer;
//!
//! let mut d = ResizeDebouncer::new(300);
//! d.push(Size::new(800.0, 600.0), 1_000);
//! d.push(Size::new(700.0, 600.0), 1_100);
//! assert_eq!(d.poll(1_300), None);
//! assert_eq!(d.poll(1_400), Some(Size::new(700.0, 600.0)));
//! assert_eq!(d.poll(2_000), None);
//! ```
//!
//! Timestamps are caller-supplied milliseconds from any monotonic clock.

use kurbo::Size;

/// Collapses bursts of resize notifications into one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeDebouncer {
    interval_ms: u64,
    pending: Option<(Size, u64)>,
}

impl ResizeDebouncer {
    /// Creates a debouncer that waits `interval_ms` after the last push.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            pending: None,
        }
    }

    /// Records a resize to `viewport` at `now_ms`, restarting the quiet period.
    pub fn push(&mut self, viewport: Size, now_ms: u64) {
        self.pending = Some((viewport, now_ms.saturating_add(self.interval_ms)));
    }

    /// Returns the latest viewport once the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<Size> {
        match self.pending {
            Some((viewport, deadline)) if now_ms >= deadline => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    /// Returns the pending viewport immediately, if any.
    pub fn flush(&mut self) -> Option<Size> {
        self.pending.take().map(|(viewport, _)| viewport)
    }

    /// Returns `true` while a resize is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
