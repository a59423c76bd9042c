// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot Region: region geometry and layout variants for clickable image maps.
//!
//! A hotspot map is a raster image (for example a site plan) with authored
//! regions that open a popup when clicked or tapped. This crate owns the
//! authored data and the pure questions asked of it:
//! - [`Shape`]: rectangles and polygons in the image's *natural* pixel space.
//! - [`Shape::centroid`]: the representative anchor point of a region.
//! - [`LayoutVariant`] / [`VariantSet`]: one region set per breakpoint, and
//!   [`VariantSet::select`] to pick the active one for a viewport width.
//! - Dataset validation, performed once in [`VariantSet::new`].
//!
//! It does **not** know how large the image is on screen. Mapping into screen
//! space lives in `hotspot_view`, hit resolution in `hotspot_hit`, and popup
//! placement in `hotspot_popup`.
//!
//! ## Minimal example
//!
//! ```rust
//! use hotspot_region::{LayoutVariant, Region, Shape, VariantSet};
//!
//! let metro = Region::new(
//!     "metro",
//!     "MonoRail",
//!     Shape::rect(626.0, 47.0, 671.0, 95.0).unwrap(),
//!     String::from("Dholera MonoRail System"),
//! );
//! let abcd = Region::new(
//!     "abcd",
//!     "ABCD Building",
//!     Shape::rect(162.0, 135.0, 182.0, 158.0).unwrap(),
//!     String::from("ABCD Building Complex"),
//! );
//!
//! let set = VariantSet::desktop_mobile(
//!     768.0,
//!     LayoutVariant::new("mobile", 0.0, (400.0, 400.0), vec![abcd]),
//!     LayoutVariant::new("desktop", 0.0, (1080.0, 1080.0), vec![metro]),
//! )
//! .unwrap();
//!
//! let desktop = set.resolve(1280.0);
//! assert_eq!(desktop.name, "desktop");
//! assert_eq!(desktop.regions[0].anchor(), kurbo::Point::new(648.5, 71.0));
//! ```
//!
//! ## Known approximations
//!
//! - Polygon anchors are the mean of the vertices, not the area-weighted
//!   centroid. For irregular outlines the anchor can fall outside the polygon.
//! - Polygon hit targets default to the bounding box of the vertices; see
//!   `hotspot_hit` for the opt-in exact test built on [`Shape::contains`].
//!
//! ## Features
//!
//! - `serde`: (de)serialize datasets. Shapes use a tagged form,
//!   `{"kind": "rect", "x1": .., "y1": .., "x2": .., "y2": ..}` or
//!   `{"kind": "polygon", "vertices": [[x, y], ..]}`, and are validated while decoding.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod region;
mod shape;
mod variant;

pub use error::{DatasetError, ShapeError};
pub use region::{Region, RegionId};
pub use shape::{Polygon, Shape, ShapeKind, rect_contains_inclusive};
pub use variant::{LayoutVariant, VariantSet, select_variant};
