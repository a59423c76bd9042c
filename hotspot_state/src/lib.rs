// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot State: the event-driven core of a clickable image map.
//!
//! All mutable UI state (active breakpoint, loaded image box, open popup) lives
//! in one immutable [`MapState`] snapshot. Named [`MapEvent`]s drive pure
//! transitions via [`MapState::apply`], which returns the next snapshot plus
//! the [`Effect`]s the presentation layer should react to.
//!
//! - Load complete: record the image's render state and invalidate overlays.
//! - Resize: re-resolve the breakpoint and always close an open popup, since
//!   its anchor was computed against a box that may no longer exist. A variant
//!   switch also drops the render state until the new image loads.
//! - Layout change: invalidate overlays; close the popup if the box changed.
//! - Activate: resolve the hit, anchor on the region's centroid, place the popup.
//! - Dismiss / outside press: close the popup.
//!
//! [`HotspotController`] is a thin adapter for host runtimes: it owns the
//! dataset, forwards host notifications as events, caches hit targets for
//! rendering, and debounces resizes with [`ResizeDebouncer`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hotspot_region::{LayoutVariant, Region, Shape, VariantSet};
//! use hotspot_state::{DeviceKind, Effect, HotspotConfig, HotspotController};
//! use hotspot_view::{ImageBox, RenderState};
//!
//! let desktop = LayoutVariant::new(
//!     "desktop",
//!     0.0,
//!     (1080.0, 1080.0),
//!     vec![Region::new(
//!         "metro",
//!         "MonoRail",
//!         Shape::rect(626.0, 47.0, 671.0, 95.0).unwrap(),
//!         String::from("Dholera MonoRail System"),
//!     )],
//! );
//! let variants = VariantSet::new(vec![desktop]).unwrap();
//! let viewport = Size::new(1024.0, 768.0);
//! let mut map = HotspotController::new(variants, HotspotConfig::default(), viewport);
//!
//! // Nothing to hit until the image reports its size.
//! assert!(map.hit_targets().is_none());
//! map.on_load(RenderState::new((1080.0, 1080.0), ImageBox::new(0.0, 0.0, 540.0, 540.0)));
//!
//! let effects = map.on_activate(Point::new(320.0, 30.0), DeviceKind::Pointer);
//! assert!(matches!(effects.as_slice(), [Effect::PopupOpened { .. }]));
//! let (_popup, region) = map.popup().unwrap();
//! assert_eq!(region.title, "MonoRail");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod debounce;
mod state;

pub use config::{DEFAULT_BREAKPOINT, DEFAULT_RESIZE_DEBOUNCE_MS, HotspotConfig};
pub use controller::HotspotController;
pub use debounce::ResizeDebouncer;
pub use state::{DeviceKind, Effect, MapEvent, MapState, OpenPopup, Transition};

// Re-exported so hosts can depend on this crate alone.
pub use hotspot_hit::{HitIndex, HitMode, HitTarget};
pub use hotspot_popup::{PopupConfig, PopupPlacement};
pub use hotspot_region::{DatasetError, LayoutVariant, Region, RegionId, Shape, VariantSet};
pub use hotspot_view::{ImageBox, ImageTransform, RenderState};
