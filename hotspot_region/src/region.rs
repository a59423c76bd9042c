// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

use kurbo::Point;

use crate::Shape;

/// Identifier of a region, unique within its layout variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RegionId(String);

impl RegionId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrows the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for RegionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clickable area on the map image.
///
/// `D` is the opaque payload handed to the presentation layer when the region
/// is activated; it defaults to a plain description string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region<D = String> {
    /// Unique id within the owning variant.
    pub id: RegionId,
    /// Human-readable title, also used as the accessible label of the hit target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Geometry in natural-image pixels.
    pub shape: Shape,
    /// Content shown in the popup.
    pub description: D,
}

impl<D> Region<D> {
    /// Creates a region.
    pub fn new(
        id: impl Into<RegionId>,
        title: impl Into<String>,
        shape: Shape,
        description: D,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            shape,
            description,
        }
    }

    /// Natural-space anchor used to place the popup; see [`Shape::centroid`].
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.shape.centroid()
    }
}
