// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot Hit: screen-space hit targets for a layout variant.
//!
//! Given the active [`LayoutVariant`] and an [`ImageTransform`], this crate
//! derives one axis-aligned screen rectangle per region (for rendering overlay
//! targets) and resolves a pointer position to the region that owns it.
//!
//! - Rect regions map corner to corner.
//! - Polygon regions use the bounding box of their vertices. Any point inside
//!   that box counts as a hit, including corners outside the true outline.
//!   [`HitMode::Precise`] opts into an exact polygon test instead.
//! - Containment is edge-inclusive, and the first region in declaration order
//!   wins when targets overlap.
//!
//! Resolution is a pure query over a snapshot. The index is rebuilt whenever
//! the transform changes and never patched in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hotspot_hit::{HitIndex, HitMode};
//! use hotspot_region::{LayoutVariant, Region, Shape};
//! use hotspot_view::{ImageBox, ImageTransform};
//!
//! let variant = LayoutVariant::new(
//!     "desktop",
//!     0.0,
//!     (1080.0, 1080.0),
//!     vec![Region::new("metro", "MonoRail", Shape::rect(626.0, 47.0, 671.0, 95.0).unwrap(), ())],
//! );
//! let t = ImageTransform::new(Size::new(1080.0, 1080.0), ImageBox::new(0.0, 0.0, 540.0, 540.0))
//!     .unwrap();
//! let index = HitIndex::build(&variant, &t, HitMode::BoundingBox);
//!
//! let hit = index.resolve_local(Point::new(320.0, 30.0)).unwrap();
//! assert_eq!(hit.id.as_str(), "metro");
//! assert!(index.resolve_local(Point::new(10.0, 10.0)).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use hotspot_region::{LayoutVariant, RegionId, Shape, ShapeKind, rect_contains_inclusive};
use hotspot_view::ImageTransform;
use kurbo::{Point, Rect};

/// How polygon regions are tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[non_exhaustive]
pub enum HitMode {
    /// Every region is tested against its screen-space bounding box.
    #[default]
    BoundingBox,
    /// Polygon regions must also contain the point exactly (even-odd rule,
    /// edges inclusive). Rect regions behave as in [`HitMode::BoundingBox`].
    Precise,
}

/// One region's screen-space hit target.
#[derive(Clone, Debug, PartialEq)]
pub struct HitTarget {
    /// Position of the region in its variant's declaration order.
    pub index: usize,
    /// Region id.
    pub id: RegionId,
    /// Shape kind of the underlying region.
    pub kind: ShapeKind,
    /// Target rectangle, image-local (relative to the rendered box origin).
    pub rect: Rect,
    /// `true` when the exact mapped size fell below the minimum and was grown.
    pub floored: bool,
}

impl HitTarget {
    /// Edge-inclusive containment in image-local coordinates.
    #[must_use]
    pub fn contains(&self, local: Point) -> bool {
        rect_contains_inclusive(self.rect, local)
    }
}

/// Derives one hit target per region, in declaration order.
#[must_use]
pub fn screen_rects<D>(variant: &LayoutVariant<D>, transform: &ImageTransform) -> Vec<HitTarget> {
    variant
        .regions
        .iter()
        .enumerate()
        .map(|(index, region)| {
            let bounds = region.shape.bounding_box();
            let exact = transform.natural_rect_to_local_exact(bounds);
            let rect = transform.natural_rect_to_local(bounds);
            HitTarget {
                index,
                id: region.id.clone(),
                kind: region.shape.kind(),
                rect,
                floored: rect != exact,
            }
        })
        .collect()
}

/// Returns the first target containing `local`, edges inclusive.
#[must_use]
pub fn resolve_hit(local: Point, targets: &[HitTarget]) -> Option<&HitTarget> {
    targets.iter().find(|t| t.contains(local))
}

/// Hit targets for one variant under one transform.
#[derive(Clone, Debug)]
pub struct HitIndex {
    targets: Vec<HitTarget>,
    mode: HitMode,
    transform: ImageTransform,
    // Populated only in precise mode, parallel to `targets`.
    shapes: Vec<Shape>,
}

impl HitIndex {
    /// Builds the index for `variant` as displayed through `transform`.
    #[must_use]
    pub fn build<D>(variant: &LayoutVariant<D>, transform: &ImageTransform, mode: HitMode) -> Self {
        let targets = screen_rects(variant, transform);
        let shapes = match mode {
            HitMode::BoundingBox => Vec::new(),
            HitMode::Precise => variant.regions.iter().map(|r| r.shape.clone()).collect(),
        };
        log::debug!(
            "built {} hit targets for variant {:?} ({mode:?})",
            targets.len(),
            variant.name
        );
        Self {
            targets,
            mode,
            transform: transform.clone(),
            shapes,
        }
    }

    /// Targets in declaration order.
    #[must_use]
    pub fn targets(&self) -> &[HitTarget] {
        &self.targets
    }

    /// The hit mode in effect.
    #[must_use]
    pub fn mode(&self) -> HitMode {
        self.mode
    }

    /// Transform the targets were derived from.
    #[must_use]
    pub fn transform(&self) -> &ImageTransform {
        &self.transform
    }

    /// Resolves an image-local point to the owning region, if any.
    #[must_use]
    pub fn resolve_local(&self, local: Point) -> Option<&HitTarget> {
        match self.mode {
            HitMode::BoundingBox => resolve_hit(local, &self.targets),
            HitMode::Precise => {
                let natural = self
                    .transform
                    .screen_to_natural(self.transform.local_to_screen(local));
                self.targets.iter().find(|t| {
                    t.contains(local)
                        && match t.kind {
                            ShapeKind::Rect => true,
                            ShapeKind::Polygon => self.shapes[t.index].contains(natural),
                        }
                })
            }
        }
    }

    /// Resolves an absolute viewport point to the owning region, if any.
    #[must_use]
    pub fn resolve_screen(&self, screen: Point) -> Option<&HitTarget> {
        self.resolve_local(self.transform.screen_to_local(screen))
    }

    /// Target for the region with `id`, if present.
    #[must_use]
    pub fn target(&self, id: &str) -> Option<&HitTarget> {
        self.targets.iter().find(|t| t.id.as_str() == id)
    }
}
