// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry: scalar abstraction, AABBs, and quadrant addressing.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric scalar abstraction for AABB coordinates.
///
/// Only the arithmetic the tree actually needs: addition for the
/// `{x, y, width, height}` construction surface, subtraction for extents,
/// and midpoints for quadrant splits.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Midpoint between a and b (used for quadrant splits).
    fn mid(a: Self, b: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }
}

/// The four children of an internal node, in fixed traversal order.
///
/// Insertion, retrieval pruning, and the diagnostic walk all rely on this
/// order being deterministic. "Top" is the `min_y` side (screen
/// convention: y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// The `(min_x, min_y)` quadrant.
    TopLeft,
    /// The `(max_x, min_y)` quadrant.
    TopRight,
    /// The `(min_x, max_y)` quadrant.
    BottomLeft,
    /// The `(max_x, max_y)` quadrant.
    BottomRight,
}

impl Quadrant {
    /// All four quadrants, in traversal order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

/// Axis-aligned bounding box in 2D, stored as min/max corners.
///
/// Rects are closed: an edge or corner shared between two rects counts as
/// an intersection. [`Aabb::from_xywh`] adapts the origin-plus-size form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T> {
    /// Minimum x (left).
    pub min_x: T,
    /// Minimum y (top).
    pub min_y: T,
    /// Maximum x (right).
    pub max_x: T,
    /// Maximum y (bottom).
    pub max_y: T,
}

impl<T> Aabb<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Aabb<T> {
    /// Create an AABB from origin and size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::new(x, y, T::add(x, w), T::add(y, h))
    }

    /// Horizontal extent.
    pub fn width(&self) -> T {
        T::sub(self.max_x, self.min_x)
    }

    /// Vertical extent.
    pub fn height(&self) -> T {
        T::sub(self.max_y, self.min_y)
    }

    /// True if either axis is inverted (max < min) or incomparable (NaN).
    ///
    /// Malformed rects would silently corrupt the containment and
    /// intersection tests, so the tree rejects them up front.
    pub fn is_malformed(&self) -> bool {
        !le(self.min_x, self.max_x) || !le(self.min_y, self.max_y)
    }

    /// Whether `other` lies fully inside this AABB (edges included).
    pub fn contains(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(other.max_x, self.max_x)
            && le(self.min_y, other.min_y)
            && le(other.max_y, self.max_y)
    }

    /// Whether the two AABBs overlap, edge-touching included.
    pub fn intersects(&self, other: &Self) -> bool {
        le(self.min_x, other.max_x)
            && le(other.min_x, self.max_x)
            && le(self.min_y, other.max_y)
            && le(other.min_y, self.max_y)
    }

    /// One of the four equal quadrants of this AABB.
    ///
    /// The quadrants share the center lines and exactly partition the
    /// parent. For integer scalars with odd extents the midpoint rounds
    /// down, which keeps the partition exact.
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let cx = T::mid(self.min_x, self.max_x);
        let cy = T::mid(self.min_y, self.max_y);
        match q {
            Quadrant::TopLeft => Self::new(self.min_x, self.min_y, cx, cy),
            Quadrant::TopRight => Self::new(cx, self.min_y, self.max_x, cy),
            Quadrant::BottomLeft => Self::new(self.min_x, cy, cx, self.max_y),
            Quadrant::BottomRight => Self::new(cx, cy, self.max_x, self.max_y),
        }
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn gt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Greater)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xywh_corners() {
        let a = Aabb::<f64>::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a, Aabb::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(a.width(), 30.0);
        assert_eq!(a.height(), 40.0);
    }

    #[test]
    fn containment_includes_edges() {
        let outer = Aabb::<f64>::from_xywh(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&outer), "a rect contains itself");
        assert!(outer.contains(&Aabb::from_xywh(0.0, 0.0, 100.0, 50.0)));
        assert!(!outer.contains(&Aabb::from_xywh(50.0, 50.0, 60.0, 10.0)));
        assert!(!outer.contains(&Aabb::from_xywh(-1.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn intersection_is_inclusive() {
        let a = Aabb::<f64>::from_xywh(0.0, 0.0, 10.0, 10.0);
        // Sharing only an edge still intersects (closed rects).
        assert!(a.intersects(&Aabb::from_xywh(10.0, 0.0, 10.0, 10.0)));
        // Sharing only a corner too.
        assert!(a.intersects(&Aabb::from_xywh(10.0, 10.0, 5.0, 5.0)));
        assert!(!a.intersects(&Aabb::from_xywh(10.1, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn quadrants_partition_f64() {
        let a = Aabb::<f64>::from_xywh(0.0, 0.0, 500.0, 500.0);
        assert_eq!(
            a.quadrant(Quadrant::TopLeft),
            Aabb::new(0.0, 0.0, 250.0, 250.0)
        );
        assert_eq!(
            a.quadrant(Quadrant::TopRight),
            Aabb::new(250.0, 0.0, 500.0, 250.0)
        );
        assert_eq!(
            a.quadrant(Quadrant::BottomLeft),
            Aabb::new(0.0, 250.0, 250.0, 500.0)
        );
        assert_eq!(
            a.quadrant(Quadrant::BottomRight),
            Aabb::new(250.0, 250.0, 500.0, 500.0)
        );
    }

    #[test]
    fn quadrants_partition_odd_i64() {
        let a = Aabb::<i64>::new(0, 0, 5, 5);
        assert_eq!(a.quadrant(Quadrant::TopLeft), Aabb::new(0, 0, 2, 2));
        assert_eq!(a.quadrant(Quadrant::BottomRight), Aabb::new(2, 2, 5, 5));
        // The four quadrants cover the parent between them.
        for q in Quadrant::ALL {
            assert!(a.contains(&a.quadrant(q)), "quadrant stays inside parent");
        }
    }

    #[test]
    fn malformed_extents() {
        assert!(Aabb::<f64>::new(10.0, 0.0, 0.0, 10.0).is_malformed());
        assert!(Aabb::<f64>::from_xywh(0.0, 0.0, -1.0, 10.0).is_malformed());
        assert!(Aabb::<f64>::from_xywh(f64::NAN, 0.0, 1.0, 1.0).is_malformed());
        assert!(!Aabb::<f64>::from_xywh(0.0, 0.0, 0.0, 0.0).is_malformed());
        assert!(!Aabb::<i64>::new(0, 0, 5, 5).is_malformed());
    }
}
