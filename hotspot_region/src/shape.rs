// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region shapes in natural-image pixel space.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::ShapeError;

/// Inline vertex capacity; authored polygons rarely exceed this.
const INLINE_VERTICES: usize = 12;

/// The geometry of a region, in natural-image pixels.
///
/// Rectangles are stored as a [`Rect`] with `x0 < x1` and `y0 < y1`. Polygons
/// are an ordered ring of at least three vertices and need not be convex.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Closed polygon.
    Polygon(Polygon),
}

/// Discriminant of a [`Shape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Shape::Rect`].
    Rect,
    /// [`Shape::Polygon`].
    Polygon,
}

impl Shape {
    /// Builds a rectangle from its top-left `(x1, y1)` and bottom-right `(x2, y2)` corners.
    pub fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, ShapeError> {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        if x1 >= x2 || y1 >= y2 {
            return Err(ShapeError::EmptyRect { x1, y1, x2, y2 });
        }
        Ok(Self::Rect(Rect::new(x1, y1, x2, y2)))
    }

    /// Builds a polygon from an ordered sequence of vertices.
    pub fn polygon<I, P>(vertices: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Polygon::new(vertices).map(Self::Polygon)
    }

    /// Re-checks the invariants enforced by [`Shape::rect`] and [`Shape::polygon`].
    ///
    /// The enum payloads are public, so a `Shape` built by hand can hold an
    /// inverted or non-finite rectangle; dataset validation runs this on every region.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Self::Rect(r) => Self::rect(r.x0, r.y0, r.x1, r.y1).map(drop),
            Self::Polygon(p) => Polygon::new(p.vertices().iter().copied()).map(drop),
        }
    }

    /// Returns which kind of shape this is.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect(_) => ShapeKind::Rect,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Axis-aligned bounding box of the shape.
    ///
    /// For a rectangle this is the rectangle itself.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Polygon(p) => p.bounding_box(),
        }
    }

    /// Representative anchor point of the shape.
    ///
    /// Rectangles use their midpoint. Polygons use the arithmetic mean of their
    /// vertices, which is *not* the area-weighted centroid: for irregular or
    /// unevenly sampled outlines it can fall outside the polygon. Popup anchors
    /// depend on this exact point, so it is kept as is.
    #[must_use]
    pub fn centroid(&self) -> Point {
        match self {
            Self::Rect(r) => r.center(),
            Self::Polygon(p) => p.vertex_average(),
        }
    }

    /// Returns `true` if `pt` lies inside the shape, boundary included.
    ///
    /// This is the exact test; hit resolution uses the bounding box unless a
    /// caller opts into precise mode.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Rect(r) => rect_contains_inclusive(*r, pt),
            Self::Polygon(p) => p.contains(pt),
        }
    }
}

/// A closed polygon with at least three vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: SmallVec<[Point; INLINE_VERTICES]>,
}

impl Polygon {
    /// Creates a polygon, rejecting fewer than three vertices or non-finite coordinates.
    pub fn new<I, P>(vertices: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let vertices: SmallVec<[Point; INLINE_VERTICES]> =
            vertices.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if vertices.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        Ok(Self { vertices })
    }

    /// The vertices in authored order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let first = self.vertices[0];
        self.vertices
            .iter()
            .skip(1)
            .fold(Rect::from_points(first, first), |acc, &p| acc.union_pt(p))
    }

    /// Arithmetic mean of the vertices.
    #[must_use]
    pub fn vertex_average(&self) -> Point {
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = self.vertices.len() as f64;
        Point::new(sx / n, sy / n)
    }

    /// Even-odd containment test with points on an edge counted as inside.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if on_segment(a, b, pt) {
                return true;
            }
            if (a.y > pt.y) != (b.y > pt.y) {
                let x_cross = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if pt.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Inclusive containment: points on any edge of `r` count as inside.
///
/// [`Rect::contains`] is half-open on the max edges, which would let a click on
/// the right or bottom border fall through.
#[must_use]
pub fn rect_contains_inclusive(r: Rect, pt: Point) -> bool {
    pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
}

fn on_segment(a: Point, b: Point, pt: Point) -> bool {
    const EPS: f64 = 1e-9;
    let cross = (b.x - a.x) * (pt.y - a.y) - (b.y - a.y) * (pt.x - a.x);
    if cross.abs() > EPS * (1.0 + (b - a).hypot()) {
        return false;
    }
    pt.x >= a.x.min(b.x) - EPS
        && pt.x <= a.x.max(b.x) + EPS
        && pt.y >= a.y.min(b.y) - EPS
        && pt.y <= a.y.max(b.y) + EPS
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::vec::Vec;

    use kurbo::Point;
    use serde::{Deserialize, Serialize};

    use super::{Polygon, Shape};
    use crate::ShapeError;

    /// Wire form: `{"kind":"rect","x1":..}` or `{"kind":"polygon","vertices":[[x,y],..]}`.
    #[derive(Serialize, Deserialize)]
    #[serde(tag = "kind", rename_all = "lowercase")]
    pub(super) enum ShapeRepr {
        Rect { x1: f64, y1: f64, x2: f64, y2: f64 },
        Polygon { vertices: Vec<[f64; 2]> },
    }

    impl TryFrom<ShapeRepr> for Shape {
        type Error = ShapeError;

        fn try_from(repr: ShapeRepr) -> Result<Self, Self::Error> {
            match repr {
                ShapeRepr::Rect { x1, y1, x2, y2 } => Self::rect(x1, y1, x2, y2),
                ShapeRepr::Polygon { vertices } => Polygon::new(
                    vertices.into_iter().map(|[x, y]| Point::new(x, y)),
                )
                .map(Self::Polygon),
            }
        }
    }

    impl From<Shape> for ShapeRepr {
        fn from(shape: Shape) -> Self {
            match shape {
                Shape::Rect(r) => Self::Rect {
                    x1: r.x0,
                    y1: r.y0,
                    x2: r.x1,
                    y2: r.y1,
                },
                Shape::Polygon(p) => Self::Polygon {
                    vertices: p.vertices().iter().map(|p| [p.x, p.y]).collect(),
                },
            }
        }
    }

    impl Serialize for Shape {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            ShapeRepr::from(self.clone()).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Shape {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = ShapeRepr::deserialize(deserializer)?;
            Self::try_from(repr).map_err(serde::de::Error::custom)
        }
    }
}
