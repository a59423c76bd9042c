// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hotspot_hit::HitMode;
use hotspot_popup::PopupConfig;
use hotspot_view::DEFAULT_MIN_HIT_SIZE;

/// Viewport width at which the wide (desktop) variant takes over by default.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

/// Quiet period after the last resize before layout is re-resolved, in milliseconds.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 300;

/// Tunables for a hotspot map.
///
/// Every field has a default; override with the `with_*` setters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HotspotConfig {
    /// Breakpoint between the narrow and wide variants, used by
    /// [`HotspotController::desktop_mobile`](crate::HotspotController::desktop_mobile).
    /// Datasets built with explicit `min_viewport_width` values keep their own.
    pub breakpoint: f64,
    /// Popup sizing and spacing.
    pub popup: PopupConfig,
    /// Minimum screen-space width/height of a hit target.
    pub min_hit_size: f64,
    /// How polygon regions are hit-tested.
    pub hit_mode: HitMode,
    /// Resize debounce interval.
    pub resize_debounce_ms: u64,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            popup: PopupConfig::default(),
            min_hit_size: DEFAULT_MIN_HIT_SIZE,
            hit_mode: HitMode::default(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl HotspotConfig {
    /// Sets the narrow/wide breakpoint.
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: f64) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Sets the popup configuration.
    #[must_use]
    pub fn with_popup(mut self, popup: PopupConfig) -> Self {
        self.popup = popup;
        self
    }

    /// Sets the minimum hit-target size.
    #[must_use]
    pub fn with_min_hit_size(mut self, size: f64) -> Self {
        self.min_hit_size = size;
        self
    }

    /// Sets the hit mode.
    #[must_use]
    pub fn with_hit_mode(mut self, mode: HitMode) -> Self {
        self.hit_mode = mode;
        self
    }

    /// Sets the resize debounce interval.
    #[must_use]
    pub fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }
}
