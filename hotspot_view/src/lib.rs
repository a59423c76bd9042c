// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot View: coordinate transforms for responsively scaled images.
//!
//! Regions are authored against an image's *natural* pixel size, but the image
//! is displayed at whatever size the page layout gives it. This crate maps
//! between the two:
//! - [`compute_scale`]: per-axis scale from natural size and rendered box, or
//!   an explicit [`TransformUnavailable`] while the image is not ready.
//! - [`map_point_to_screen`] / [`map_rect_to_screen`]: the raw mappings.
//! - [`ImageTransform`]: a snapshot transform with image-local and absolute
//!   (viewport) variants of each mapping, plus the inverse.
//! - [`CoordinatePicker`]: an authoring aid that records clicks as natural
//!   coordinates.
//!
//! Image-local coordinates are relative to the rendered box's top-left corner;
//! this is the space overlay hit targets are positioned in. Absolute
//! coordinates add the box origin and are what pointer events and popups use.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use hotspot_view::{ImageBox, ImageTransform};
//!
//! // A 1080x1080 map shown at half size, 40px from the top of the viewport.
//! let t = ImageTransform::new(Size::new(1080.0, 1080.0), ImageBox::new(0.0, 40.0, 540.0, 540.0))
//!     .unwrap();
//!
//! let local = t.natural_rect_to_local(Rect::new(626.0, 47.0, 671.0, 95.0));
//! assert_eq!(local, Rect::new(313.0, 23.5, 335.5, 47.5));
//!
//! let anchor = t.natural_to_screen(Point::new(648.5, 71.0));
//! assert_eq!(anchor, Point::new(324.25, 75.5));
//! ```
//!
//! The scale is never cached across dimension changes: build a fresh
//! [`ImageTransform`] whenever the natural size or the rendered box changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod picker;
mod transform;

pub use picker::{CoordinatePicker, Pick};
pub use transform::{
    DEFAULT_MIN_HIT_SIZE, ImageBox, ImageTransform, RenderState, ScaleFactor,
    TransformUnavailable, compute_scale, map_point_to_screen, map_rect_to_screen,
};
