// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authoring helper: turn clicks on the rendered image into natural coordinates.
//!
//! ## Usage
//!
//! 1) Build an [`ImageTransform`] for the image as it is currently displayed.
//! 2) Feed each click to [`CoordinatePicker::pick`].
//! 3) Read back [`CoordinatePicker::rect_from_first_two`] for rectangles, or
//!    [`CoordinatePicker::format_vertices`] for polygon vertex lists.
//!
//! ```
//! use kurbo::{Point, Size};
//! use hotspot_view::{CoordinatePicker, ImageBox, ImageTransform};
//!
//! let t = ImageTransform::new(Size::new(1080.0, 1080.0), ImageBox::new(0.0, 0.0, 540.0, 540.0))
//!     .unwrap();
//! let mut picker = CoordinatePicker::new();
//! picker.pick(&t, Point::new(335.5, 23.5));
//! picker.pick(&t, Point::new(313.0, 47.5));
//! assert_eq!(picker.format_rect().as_deref(), Some("[626, 47, 671, 95]"));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::ImageTransform;

/// One recorded click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    /// Natural-space coordinate, rounded to whole pixels.
    pub natural: Point,
    /// Image-local display position where the click landed.
    pub display: Point,
}

/// Accumulates clicks as natural-space coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinatePicker {
    picks: Vec<Pick>,
}

impl CoordinatePicker {
    /// Creates an empty picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click at absolute viewport point `screen`.
    pub fn pick(&mut self, transform: &ImageTransform, screen: Point) -> Pick {
        let natural = transform.screen_to_natural(screen);
        let pick = Pick {
            natural: Point::new(round_px(natural.x), round_px(natural.y)),
            display: transform.screen_to_local(screen),
        };
        self.picks.push(pick);
        pick
    }

    /// All picks in click order.
    #[must_use]
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Forgets every pick.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Rectangle spanned by the first two picks, normalized so `x0 <= x1`, `y0 <= y1`.
    #[must_use]
    pub fn rect_from_first_two(&self) -> Option<Rect> {
        match self.picks.as_slice() {
            [a, b, ..] => Some(Rect::from_points(a.natural, b.natural)),
            _ => None,
        }
    }

    /// `[x1, y1, x2, y2]` for [`Self::rect_from_first_two`].
    #[must_use]
    pub fn format_rect(&self) -> Option<String> {
        self.rect_from_first_two()
            .map(|r| format!("[{}, {}, {}, {}]", r.x0, r.y0, r.x1, r.y1))
    }

    /// `[x, y], [x, y], ...` for pasting into a polygon definition.
    #[must_use]
    pub fn format_vertices(&self) -> String {
        let parts: Vec<String> = self
            .picks
            .iter()
            .map(|p| format!("[{}, {}]", p.natural.x, p.natural.y))
            .collect();
        parts.join(", ")
    }
}

/// Rounds to a whole pixel; adding `0.0` turns `-0.0` into `0.0` so output never reads `-0`.
fn round_px(v: f64) -> f64 {
    v.round() + 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::ImageBox;

    fn transform() -> ImageTransform {
        ImageTransform::new(
            Size::new(400.0, 400.0),
            ImageBox::new(16.0, 100.0, 300.0, 300.0),
        )
        .unwrap()
    }

    #[test]
    fn picks_round_to_natural_pixels() {
        let t = transform();
        let mut picker = CoordinatePicker::new();
        // 0.75 natural px per screen px; 137.3 local -> 183.07 natural.
        let p = picker.pick(&t, Point::new(16.0 + 137.3, 100.0 + 10.0));
        assert_eq!(p.natural, Point::new(183.0, 13.0));
        assert!((p.display.x - 137.3).abs() < 1e-9);
        assert!((p.display.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rect_needs_two_picks_and_normalizes() {
        let t = transform();
        let mut picker = CoordinatePicker::new();
        assert_eq!(picker.rect_from_first_two(), None);
        picker.pick(&t, Point::new(16.0 + 150.0, 100.0 + 75.0));
        assert_eq!(picker.format_rect(), None);
        picker.pick(&t, Point::new(16.0 + 30.0, 100.0 + 150.0));
        assert_eq!(
            picker.rect_from_first_two(),
            Some(Rect::new(40.0, 100.0, 200.0, 200.0))
        );
        assert_eq!(picker.format_rect().as_deref(), Some("[40, 100, 200, 200]"));
    }

    #[test]
    fn vertices_format_in_click_order() {
        let t = transform();
        let mut picker = CoordinatePicker::new();
        for (x, y) in [(0.0, 0.0), (75.0, 0.0), (75.0, 75.0)] {
            picker.pick(&t, Point::new(16.0 + x, 100.0 + y));
        }
        assert_eq!(picker.format_vertices(), "[0, 0], [100, 0], [100, 100]");
        picker.clear();
        assert!(picker.picks().is_empty());
        assert_eq!(picker.format_vertices(), "");
    }
}
