// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building shapes and validating region datasets.

use alloc::string::String;
use core::fmt;

/// Error returned when shape geometry is malformed.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices.
    TooFewVertices {
        /// Number of vertices that were supplied.
        count: usize,
    },
    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate,
    /// A rectangle whose corners do not satisfy `x1 < x2` and `y1 < y2`.
    EmptyRect {
        /// Left edge as authored.
        x1: f64,
        /// Top edge as authored.
        y1: f64,
        /// Right edge as authored.
        x2: f64,
        /// Bottom edge as authored.
        y2: f64,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon has {count} vertices, at least 3 are required")
            }
            Self::NonFiniteCoordinate => f.write_str("shape coordinate is not finite"),
            Self::EmptyRect { x1, y1, x2, y2 } => write!(
                f,
                "rect ({x1}, {y1}, {x2}, {y2}) is empty; expected x1 < x2 and y1 < y2"
            ),
        }
    }
}

impl core::error::Error for ShapeError {}

/// Error returned when a region dataset is rejected during validation.
///
/// Validation happens once, when a [`VariantSet`](crate::VariantSet) is built,
/// so authoring mistakes surface before the first hit test rather than during one.
#[derive(Clone, Debug, PartialEq)]
pub enum DatasetError {
    /// The dataset contains no layout variants.
    NoVariants,
    /// No variant starts at viewport width `0`, so selection would not be total.
    MissingBaseVariant,
    /// Variants are not sorted by strictly ascending `min_viewport_width`.
    UnorderedBreakpoints {
        /// Name of the first variant found out of order.
        variant: String,
    },
    /// Two variants share the same name.
    DuplicateVariant {
        /// The repeated name.
        variant: String,
    },
    /// A variant declares a non-positive or non-finite natural image size.
    InvalidNaturalSize {
        /// Variant with the bad size.
        variant: String,
    },
    /// Two regions in the same variant share an id.
    DuplicateRegionId {
        /// Variant containing the duplicate.
        variant: String,
        /// The repeated region id.
        region: String,
    },
    /// A region has a coordinate outside `[0, natural_width] x [0, natural_height]`.
    RegionOutOfBounds {
        /// Variant containing the region.
        variant: String,
        /// Offending region id.
        region: String,
    },
    /// A region's shape is malformed.
    InvalidShape {
        /// Variant containing the region.
        variant: String,
        /// Offending region id.
        region: String,
        /// Underlying shape problem.
        source: ShapeError,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVariants => f.write_str("dataset has no layout variants"),
            Self::MissingBaseVariant => {
                f.write_str("dataset has no variant with min_viewport_width = 0")
            }
            Self::UnorderedBreakpoints { variant } => write!(
                f,
                "variant {variant:?} is out of order; breakpoints must be strictly ascending"
            ),
            Self::DuplicateVariant { variant } => {
                write!(f, "variant name {variant:?} is used more than once")
            }
            Self::InvalidNaturalSize { variant } => {
                write!(f, "variant {variant:?} has a non-positive natural image size")
            }
            Self::DuplicateRegionId { variant, region } => {
                write!(f, "region id {region:?} is repeated in variant {variant:?}")
            }
            Self::RegionOutOfBounds { variant, region } => write!(
                f,
                "region {region:?} in variant {variant:?} lies outside the natural image"
            ),
            Self::InvalidShape {
                variant,
                region,
                source,
            } => write!(f, "region {region:?} in variant {variant:?}: {source}"),
        }
    }
}

impl core::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidShape { source, .. } => Some(source),
            _ => None,
        }
    }
}
