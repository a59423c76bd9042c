// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint-selected layout variants.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Rect, Size};

use crate::{DatasetError, Region};

/// One breakpoint's image and region set.
///
/// A variant is active for viewport widths in `[min_viewport_width, next.min_viewport_width)`.
/// Region coordinates are expressed in this variant's natural pixel space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutVariant<D = String> {
    /// Breakpoint name, for example `"mobile"` or `"desktop"`.
    pub name: String,
    /// Inclusive lower bound of the viewport widths this variant covers.
    pub min_viewport_width: f64,
    /// Natural width of the variant's image in pixels.
    pub natural_width: f64,
    /// Natural height of the variant's image in pixels.
    pub natural_height: f64,
    /// Regions in declaration order; earlier regions win overlapping hits.
    pub regions: Vec<Region<D>>,
}

impl<D> LayoutVariant<D> {
    /// Creates a variant.
    pub fn new(
        name: impl Into<String>,
        min_viewport_width: f64,
        natural_size: impl Into<Size>,
        regions: Vec<Region<D>>,
    ) -> Self {
        let natural_size = natural_size.into();
        Self {
            name: name.into(),
            min_viewport_width,
            natural_width: natural_size.width,
            natural_height: natural_size.height,
            regions,
        }
    }

    /// Natural image size declared for this variant.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }

    /// Looks up a region by id.
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Region<D>> {
        self.regions.iter().find(|r| r.id.as_str() == id)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let size = self.natural_size();
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Err(DatasetError::InvalidNaturalSize {
                variant: self.name.clone(),
            });
        }
        let image = Rect::from_origin_size((0.0, 0.0), size);
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.regions.len());
        for region in &self.regions {
            if !seen.insert(region.id.as_str()) {
                return Err(DatasetError::DuplicateRegionId {
                    variant: self.name.clone(),
                    region: region.id.as_str().into(),
                });
            }
            region
                .shape
                .validate()
                .map_err(|source| DatasetError::InvalidShape {
                    variant: self.name.clone(),
                    region: region.id.as_str().into(),
                    source,
                })?;
            let bounds = region.shape.bounding_box();
            if bounds.x0 < image.x0
                || bounds.y0 < image.y0
                || bounds.x1 > image.x1
                || bounds.y1 > image.y1
            {
                return Err(DatasetError::RegionOutOfBounds {
                    variant: self.name.clone(),
                    region: region.id.as_str().into(),
                });
            }
        }
        Ok(())
    }
}

/// Returns the index of the variant active at `viewport_width`.
///
/// `ordered` must be sorted by ascending `min_viewport_width`. The last variant
/// whose lower bound is `<= viewport_width` wins. Returns `None` only when no
/// variant qualifies, which cannot happen once a `0` sentinel is present,
/// except for NaN widths.
#[must_use]
pub fn select_variant<D>(viewport_width: f64, ordered: &[LayoutVariant<D>]) -> Option<usize> {
    ordered
        .iter()
        .rposition(|v| v.min_viewport_width <= viewport_width)
}

/// A validated, ordered set of layout variants.
///
/// Construction checks the whole dataset so that hit testing never has to:
/// - at least one variant, the first starting at width `0`;
/// - strictly ascending breakpoints and unique variant names;
/// - positive natural sizes;
/// - well-formed shapes, including ones built without [`Shape::rect`](crate::Shape::rect);
/// - unique region ids per variant and every region inside its natural image.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSet<D = String> {
    variants: Vec<LayoutVariant<D>>,
}

impl<D> VariantSet<D> {
    /// Validates `variants` and wraps them.
    pub fn new(variants: Vec<LayoutVariant<D>>) -> Result<Self, DatasetError> {
        if let Err(err) = Self::validate(&variants) {
            log::warn!("rejecting region dataset: {err}");
            return Err(err);
        }
        Ok(Self { variants })
    }

    /// Builds the common two-breakpoint layout.
    ///
    /// `narrow` covers widths below `breakpoint` and `wide` everything from
    /// `breakpoint` up. The `min_viewport_width` fields of both variants are
    /// overwritten accordingly.
    pub fn desktop_mobile(
        breakpoint: f64,
        mut narrow: LayoutVariant<D>,
        mut wide: LayoutVariant<D>,
    ) -> Result<Self, DatasetError> {
        narrow.min_viewport_width = 0.0;
        wide.min_viewport_width = breakpoint;
        Self::new(alloc::vec![narrow, wide])
    }

    fn validate(variants: &[LayoutVariant<D>]) -> Result<(), DatasetError> {
        let first = variants.first().ok_or(DatasetError::NoVariants)?;
        if first.min_viewport_width != 0.0 {
            return Err(DatasetError::MissingBaseVariant);
        }
        for pair in variants.windows(2) {
            // Negated so that NaN bounds are also rejected.
            if !(pair[0].min_viewport_width < pair[1].min_viewport_width) {
                return Err(DatasetError::UnorderedBreakpoints {
                    variant: pair[1].name.clone(),
                });
            }
        }
        let mut names: HashSet<&str> = HashSet::with_capacity(variants.len());
        for v in variants {
            if !names.insert(v.name.as_str()) {
                return Err(DatasetError::DuplicateVariant {
                    variant: v.name.clone(),
                });
            }
            v.validate()?;
        }
        Ok(())
    }

    /// Index of the variant active at `viewport_width`.
    ///
    /// Total: widths below every breakpoint, negative widths and NaN all fall
    /// back to the base variant at index `0`.
    #[must_use]
    pub fn select(&self, viewport_width: f64) -> usize {
        select_variant(viewport_width, &self.variants).unwrap_or(0)
    }

    /// Variant active at `viewport_width`.
    #[must_use]
    pub fn resolve(&self, viewport_width: f64) -> &LayoutVariant<D> {
        &self.variants[self.select(viewport_width)]
    }

    /// Variant at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LayoutVariant<D>> {
        self.variants.get(index)
    }

    /// All variants, ascending by breakpoint.
    #[must_use]
    pub fn variants(&self) -> &[LayoutVariant<D>] {
        &self.variants
    }

    /// Number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always `false`: a validated set holds at least the base variant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
