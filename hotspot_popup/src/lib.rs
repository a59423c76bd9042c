// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot Popup: place a fixed-size popup next to an anchor without leaving the viewport.
//!
//! The placement rule is a fixed priority, not a search:
//! 1. Center horizontally on the anchor and put the popup just below it.
//! 2. Clamp into `[margin, viewport.width - margin]` horizontally. The right
//!    clamp runs after the left clamp and wins if both apply.
//! 3. If the bottom edge would cross `viewport.height - margin`, flip above the anchor.
//! 4. If the top edge is still above `margin`, center vertically in the viewport.
//!
//! Horizontally the popup is always inside the margins when
//! `viewport.width >= size.width + 2 * margin`. Vertically that only holds when
//! `viewport.height >= size.height + 2 * margin`; otherwise the placement can
//! overflow and [`PopupPlacement`] flags say how it degraded.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hotspot_popup::{PopupRequest, place};
//!
//! let viewport = Size::new(1024.0, 768.0);
//! let req = PopupRequest::new(Point::new(20.0, 700.0), Size::new(384.0, 400.0), viewport);
//! let p = place(&req);
//! assert_eq!((p.left, p.top), (16.0, 280.0));
//! assert!(p.clamped_left && p.flipped_vertically);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

/// Default gap between the popup and the viewport edges.
pub const DEFAULT_MARGIN: f64 = 16.0;
/// Default distance between the anchor and the near edge of the popup.
pub const DEFAULT_VERTICAL_OFFSET: f64 = 20.0;
/// Default maximum popup width.
pub const DEFAULT_MAX_WIDTH: f64 = 384.0;
/// Default popup height used for placement.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Popup sizing and spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopupConfig {
    /// Widest the popup may be; narrower viewports shrink it.
    pub max_width: f64,
    /// Height reserved for the popup when placing it.
    pub height: f64,
    /// Minimum gap to the viewport edges.
    pub margin: f64,
    /// Gap between the anchor and the popup.
    pub vertical_offset: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
        }
    }
}

impl PopupConfig {
    /// Popup size for a viewport: `min(max_width, viewport.width - 2 * margin)` wide.
    #[must_use]
    pub fn size_for_viewport(&self, viewport: Size) -> Size {
        let width = self
            .max_width
            .min(viewport.width - 2.0 * self.margin)
            .max(0.0);
        Size::new(width, self.height)
    }

    /// Builds a request for `anchor` using this configuration.
    #[must_use]
    pub fn request(&self, anchor: Point, viewport: Size) -> PopupRequest {
        PopupRequest {
            anchor,
            size: self.size_for_viewport(viewport),
            viewport,
            margin: self.margin,
            vertical_offset: self.vertical_offset,
        }
    }
}

/// Inputs to [`place`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupRequest {
    /// Anchor in viewport coordinates.
    pub anchor: Point,
    /// Popup size.
    pub size: Size,
    /// Viewport size.
    pub viewport: Size,
    /// Minimum gap to the viewport edges.
    pub margin: f64,
    /// Gap between the anchor and the popup.
    pub vertical_offset: f64,
}

impl PopupRequest {
    /// Creates a request with the default margin and vertical offset.
    #[must_use]
    pub fn new(anchor: Point, size: Size, viewport: Size) -> Self {
        Self {
            anchor,
            size,
            viewport,
            margin: DEFAULT_MARGIN,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
        }
    }

    /// Overrides the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Overrides the vertical offset.
    #[must_use]
    pub fn with_vertical_offset(mut self, offset: f64) -> Self {
        self.vertical_offset = offset;
        self
    }
}

/// Result of [`place`].
///
/// The flags record which fallbacks fired. They are diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupPlacement {
    /// Left edge in viewport coordinates.
    pub left: f64,
    /// Top edge in viewport coordinates.
    pub top: f64,
    /// Popup size the placement was computed for.
    pub size: Size,
    /// The left edge was pushed right to the margin.
    pub clamped_left: bool,
    /// The popup was pulled left to keep its right edge inside the margin.
    pub clamped_right: bool,
    /// The popup did not fit below the anchor and was moved above it.
    pub flipped_vertically: bool,
    /// The popup did not fit above either and was centered vertically.
    pub centered_vertically: bool,
}

impl PopupPlacement {
    /// The popup rectangle in viewport coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.left, self.top), self.size)
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Edge-inclusive containment test in viewport coordinates.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let r = self.rect();
        pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
    }

    /// Returns `true` if the popup crosses the margin band on any side.
    #[must_use]
    pub fn overflows(&self, viewport: Size, margin: f64) -> bool {
        let r = self.rect();
        r.x0 < margin
            || r.y0 < margin
            || r.x1 > viewport.width - margin
            || r.y1 > viewport.height - margin
    }
}

/// Computes the popup position for `req`.
#[must_use]
pub fn place(req: &PopupRequest) -> PopupPlacement {
    let PopupRequest {
        anchor,
        size,
        viewport,
        margin,
        vertical_offset,
    } = *req;

    let mut left = anchor.x - size.width / 2.0;
    let mut top = anchor.y + vertical_offset;

    let mut clamped_left = false;
    let mut clamped_right = false;
    if left < margin {
        left = margin;
        clamped_left = true;
    }
    if left + size.width > viewport.width - margin {
        left = viewport.width - size.width - margin;
        clamped_right = true;
    }

    let mut flipped_vertically = false;
    if top + size.height > viewport.height - margin {
        top = anchor.y - size.height - vertical_offset;
        flipped_vertically = true;
    }

    // Also catches an anchor above the viewport, where the unflipped top is
    // already past the margin.
    let mut centered_vertically = false;
    if top < margin {
        top = (viewport.height - size.height) / 2.0;
        centered_vertically = true;
    }

    let placement = PopupPlacement {
        left,
        top,
        size,
        clamped_left,
        clamped_right,
        flipped_vertically,
        centered_vertically,
    };
    if placement.overflows(viewport, margin) {
        log::debug!(
            "popup {}x{} overflows viewport {}x{} (margin {margin}) at ({left}, {top})",
            size.width,
            size.height,
            viewport.width,
            viewport.height,
        );
    }
    placement
}

/// Stateless placer bound to a [`PopupConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PopupPlacer {
    config: PopupConfig,
}

impl PopupPlacer {
    /// Creates a placer.
    #[must_use]
    pub fn new(config: PopupConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Places a popup sized for `viewport` next to `anchor`.
    #[must_use]
    pub fn place(&self, anchor: Point, viewport: Size) -> PopupPlacement {
        place(&self.config.request(anchor, viewport))
    }
}
