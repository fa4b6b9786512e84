//! Axis-aligned bounding boxes.

use nalgebra::{Point3, Vector3};

use crate::{Axis, Components};

/// An axis-aligned bounding box given by its `min` and `max` corners.
///
/// The corners are not validated: a well-formed box has `min <= max` on every
/// axis, which holds for every box produced by [`Aabb::from_point`],
/// [`Aabb::merge`] and the triangle/tree code built on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Point3<f32>,
    max: Point3<f32>,
}

impl Aabb {
    /// Creates a box from explicit corners.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Creates a zero-volume box around a single point.
    pub fn from_point(point: Point3<f32>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest box enclosing all `points`.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point3<f32>>) -> Option<Self> {
        Self::union_all(points.into_iter().map(Self::from_point))
    }

    /// Folds boxes together with [`Aabb::merge`].
    ///
    /// Returns `None` if the iterator is empty.
    pub fn union_all(boxes: impl IntoIterator<Item = Aabb>) -> Option<Self> {
        let mut boxes = boxes.into_iter();
        let mut result = boxes.next()?;
        for bb in boxes {
            result.merge(&bb);
        }
        Some(result)
    }

    #[inline]
    pub fn min(&self) -> Point3<f32> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point3<f32> {
        self.max
    }

    /// Grows this box to also enclose `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.min = self.min.inf(&other.min);
        self.max = self.max.sup(&other.max);
    }

    /// Returns the union of both boxes.
    #[inline]
    pub fn union(&self, other: &Aabb) -> Aabb {
        let mut result = *self;
        result.merge(other);
        result
    }

    /// Size of the box along each axis (`max - min`).
    #[inline]
    pub fn extent(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Center point of the box.
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Midpoint of the box along a single axis.
    #[inline]
    pub fn center_on(&self, axis: Axis) -> f32 {
        (self.min.axis(axis) + self.max.axis(axis)) * 0.5
    }

    /// Returns `true` if `other` lies entirely inside this box (boundaries included).
    pub fn contains(&self, other: &Aabb) -> bool {
        Axis::ALL.iter().all(|&axis| {
            self.min.axis(axis) <= other.min.axis(axis)
                && other.max.axis(axis) <= self.max.axis(axis)
        })
    }

    /// Axis along which the box is longest.
    ///
    /// X wins only when strictly longer than both Y and Z; otherwise Y wins
    /// when strictly longer than Z; every remaining case, ties included,
    /// picks Z. Tree shape for equal extents depends on this exact order.
    pub fn longest_axis(&self) -> Axis {
        let extent = self.extent();
        if extent.x > extent.y && extent.x > extent.z {
            Axis::X
        } else if extent.y > extent.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}
