// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Smallest screen-space width/height given to a hit target by default.
///
/// Heavily downscaled regions would otherwise shrink below anything a finger
/// or cursor can land on.
pub const DEFAULT_MIN_HIT_SIZE: f64 = 4.0;

/// The image's on-screen bounding box as reported by the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageBox {
    /// Left edge in viewport pixels.
    pub left: f64,
    /// Top edge in viewport pixels.
    pub top: f64,
    /// Rendered width in pixels.
    pub width: f64,
    /// Rendered height in pixels.
    pub height: f64,
}

impl ImageBox {
    /// Creates a box from its origin and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Rendered size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The box as a [`Rect`] in viewport coordinates.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }
}

impl From<Rect> for ImageBox {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

/// Everything the rendering surface reports about the displayed image.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderState {
    /// Natural (intrinsic) image width in pixels.
    pub natural_width: f64,
    /// Natural (intrinsic) image height in pixels.
    pub natural_height: f64,
    /// Current on-screen bounding box.
    pub image_box: ImageBox,
}

impl RenderState {
    /// Creates a render state.
    #[must_use]
    pub fn new(natural: impl Into<Size>, image_box: ImageBox) -> Self {
        let natural = natural.into();
        Self {
            natural_width: natural.width,
            natural_height: natural.height,
            image_box,
        }
    }

    /// Natural image size.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }
}

/// Natural-to-screen scale along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor {
    /// Horizontal scale, `box.width / natural.width`.
    pub sx: f64,
    /// Vertical scale, `box.height / natural.height`.
    pub sy: f64,
}

/// Why a transform cannot be computed yet.
///
/// Both cases are transient: callers should skip overlays and hit resolution
/// until the next load or layout event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformUnavailable {
    /// The natural size is zero, negative, or not finite (image not decoded yet).
    NaturalSizeUnknown,
    /// The rendered box has no area (image not laid out yet).
    ImageNotLaidOut,
}

impl fmt::Display for TransformUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NaturalSizeUnknown => f.write_str("natural image size is not known yet"),
            Self::ImageNotLaidOut => f.write_str("image has not been laid out with a visible size"),
        }
    }
}

impl core::error::Error for TransformUnavailable {}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Computes the natural-to-screen scale for an image.
pub fn compute_scale(
    natural: Size,
    image_box: ImageBox,
) -> Result<ScaleFactor, TransformUnavailable> {
    if !(positive(natural.width) && positive(natural.height)) {
        return Err(TransformUnavailable::NaturalSizeUnknown);
    }
    if !(positive(image_box.width) && positive(image_box.height)) {
        return Err(TransformUnavailable::ImageNotLaidOut);
    }
    Ok(ScaleFactor {
        sx: image_box.width / natural.width,
        sy: image_box.height / natural.height,
    })
}

/// Maps a natural-space point into image-local screen space (relative to the box origin).
#[must_use]
pub fn map_point_to_screen(p: Point, scale: ScaleFactor) -> Point {
    Point::new(p.x * scale.sx, p.y * scale.sy)
}

/// Maps a natural-space rectangle into image-local screen space.
///
/// Both corners are mapped; if the resulting width or height is below
/// `min_size` it is grown to `min_size` around the mapped center.
#[must_use]
pub fn map_rect_to_screen(rect: Rect, scale: ScaleFactor, min_size: f64) -> Rect {
    let mapped = Rect::from_points(
        map_point_to_screen(rect.origin(), scale),
        map_point_to_screen(Point::new(rect.x1, rect.y1), scale),
    );
    enforce_min_size(mapped, min_size)
}

fn enforce_min_size(r: Rect, min_size: f64) -> Rect {
    if r.width() >= min_size && r.height() >= min_size {
        return r;
    }
    let center = r.center();
    let w = r.width().max(min_size);
    let h = r.height().max(min_size);
    Rect::from_center_size(center, (w, h))
}

/// Natural-to-screen mapping for one rendered image.
///
/// Built from a [`RenderState`] snapshot. Any change to the natural size or the
/// rendered box means building a new transform; nothing here is updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTransform {
    natural: Size,
    image_box: ImageBox,
    scale: ScaleFactor,
    min_size: f64,
    natural_to_screen: Affine,
    screen_to_natural: Affine,
}

impl ImageTransform {
    /// Creates a transform, or reports why the image is not ready.
    pub fn new(natural: Size, image_box: ImageBox) -> Result<Self, TransformUnavailable> {
        let scale = compute_scale(natural, image_box).inspect_err(|why| {
            log::debug!("overlay transform unavailable: {why}");
        })?;
        log::debug!(
            "image scale: natural {}x{}, rendered {}x{} at ({}, {}), scale ({}, {})",
            natural.width,
            natural.height,
            image_box.width,
            image_box.height,
            image_box.left,
            image_box.top,
            scale.sx,
            scale.sy,
        );
        let natural_to_screen = Affine::translate(image_box.origin().to_vec2())
            * Affine::scale_non_uniform(scale.sx, scale.sy);
        Ok(Self {
            natural,
            image_box,
            scale,
            min_size: DEFAULT_MIN_HIT_SIZE,
            natural_to_screen,
            screen_to_natural: natural_to_screen.inverse(),
        })
    }

    /// Creates a transform from a reported render state.
    pub fn from_render_state(state: &RenderState) -> Result<Self, TransformUnavailable> {
        Self::new(state.natural_size(), state.image_box)
    }

    /// Sets the minimum screen-space size used by [`Self::natural_rect_to_local`].
    #[must_use]
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size.max(0.0);
        self
    }

    /// Minimum hit-target size in screen pixels.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Scale factors.
    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Natural image size this transform was built for.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    /// Rendered image box this transform was built for.
    #[must_use]
    pub fn image_box(&self) -> ImageBox {
        self.image_box
    }

    /// Natural point to image-local screen point.
    #[must_use]
    pub fn natural_to_local(&self, p: Point) -> Point {
        map_point_to_screen(p, self.scale)
    }

    /// Natural point to absolute viewport point.
    #[must_use]
    pub fn natural_to_screen(&self, p: Point) -> Point {
        self.natural_to_screen * p
    }

    /// Absolute viewport point back to natural image space.
    #[must_use]
    pub fn screen_to_natural(&self, p: Point) -> Point {
        self.screen_to_natural * p
    }

    /// Absolute viewport point to image-local point.
    #[must_use]
    pub fn screen_to_local(&self, p: Point) -> Point {
        p - self.origin_offset()
    }

    /// Image-local point to absolute viewport point.
    #[must_use]
    pub fn local_to_screen(&self, p: Point) -> Point {
        p + self.origin_offset()
    }

    /// Natural rectangle to image-local screen rectangle, honoring the minimum size.
    #[must_use]
    pub fn natural_rect_to_local(&self, rect: Rect) -> Rect {
        map_rect_to_screen(rect, self.scale, self.min_size)
    }

    /// Natural rectangle to image-local screen rectangle without the minimum size.
    #[must_use]
    pub fn natural_rect_to_local_exact(&self, rect: Rect) -> Rect {
        map_rect_to_screen(rect, self.scale, 0.0)
    }

    /// Natural rectangle to absolute viewport rectangle, honoring the minimum size.
    #[must_use]
    pub fn natural_rect_to_screen(&self, rect: Rect) -> Rect {
        self.natural_rect_to_local(rect) + self.origin_offset()
    }

    /// Returns `true` if `pt` (absolute) lies on the rendered image, edges included.
    #[must_use]
    pub fn screen_point_on_image(&self, pt: Point) -> bool {
        let r = self.image_box.to_rect();
        pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
    }

    fn origin_offset(&self) -> Vec2 {
        self.image_box.origin().to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unavailable_until_loaded_and_laid_out() {
        let laid_out = ImageBox::new(0.0, 0.0, 540.0, 540.0);
        assert_eq!(
            compute_scale(Size::new(0.0, 1080.0), laid_out),
            Err(TransformUnavailable::NaturalSizeUnknown)
        );
        assert_eq!(
            compute_scale(Size::new(1080.0, f64::NAN), laid_out),
            Err(TransformUnavailable::NaturalSizeUnknown)
        );
        assert_eq!(
            compute_scale(Size::new(1080.0, 1080.0), ImageBox::new(10.0, 10.0, 540.0, 0.0)),
            Err(TransformUnavailable::ImageNotLaidOut)
        );
        assert!(ImageTransform::new(Size::new(1080.0, 1080.0), ImageBox::default()).is_err());
    }

    #[test]
    fn rect_mapping_scales_extent() {
        let scale = ScaleFactor { sx: 0.37, sy: 1.9 };
        for &(x1, y1, x2, y2) in &[
            (0.0, 0.0, 10.0, 10.0),
            (626.0, 47.0, 671.0, 95.0),
            (3.5, 900.25, 1000.0, 1079.0),
        ] {
            let r = map_rect_to_screen(Rect::new(x1, y1, x2, y2), scale, 0.0);
            assert!(approx(r.width(), (x2 - x1) * scale.sx));
            assert!(approx(r.height(), (y2 - y1) * scale.sy));
        }
    }

    #[test]
    fn half_scale_maps_known_region() {
        let t = ImageTransform::new(
            Size::new(1080.0, 1080.0),
            ImageBox::new(0.0, 0.0, 540.0, 540.0),
        )
        .unwrap();
        assert_eq!(t.scale(), ScaleFactor { sx: 0.5, sy: 0.5 });
        let r = t.natural_rect_to_local(Rect::new(626.0, 47.0, 671.0, 95.0));
        assert!(approx(r.x0, 313.0));
        assert!(approx(r.y0, 23.5));
        assert!(approx(r.width(), 22.5));
        assert!(approx(r.height(), 24.0));
    }

    #[test]
    fn absolute_mapping_adds_box_origin_and_inverts() {
        let t = ImageTransform::new(
            Size::new(1080.0, 720.0),
            ImageBox::new(32.0, 120.0, 810.0, 540.0),
        )
        .unwrap();
        let p = Point::new(648.5, 71.0);
        let local = t.natural_to_local(p);
        let screen = t.natural_to_screen(p);
        assert!(approx(screen.x, local.x + 32.0));
        assert!(approx(screen.y, local.y + 120.0));
        let back = t.screen_to_natural(screen);
        assert!(approx(back.x, p.x));
        assert!(approx(back.y, p.y));
        assert_eq!(t.screen_to_local(screen), local);
    }

    #[test]
    fn tiny_regions_grow_to_min_size_about_center() {
        let t = ImageTransform::new(
            Size::new(4000.0, 4000.0),
            ImageBox::new(0.0, 0.0, 400.0, 400.0),
        )
        .unwrap()
        .with_min_size(8.0);
        let natural = Rect::new(100.0, 100.0, 120.0, 110.0);
        let exact = t.natural_rect_to_local_exact(natural);
        let floored = t.natural_rect_to_local(natural);
        assert!(approx(exact.width(), 2.0));
        assert!(approx(floored.width(), 8.0));
        assert!(approx(floored.height(), 8.0));
        assert_eq!(floored.center(), exact.center());
    }

    #[test]
    fn image_box_from_rect_normalizes() {
        let b = ImageBox::from(Rect::new(100.0, 50.0, 20.0, 10.0));
        assert_eq!(b, ImageBox::new(20.0, 10.0, 80.0, 40.0));
    }
}
