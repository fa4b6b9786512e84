//! Coordinate axes and checked component access for vectors and points.

use nalgebra::{Point3, Vector3};

use crate::{BvhError, Result};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of this axis (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = BvhError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(BvhError::AxisOutOfRange(index)),
        }
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

/// Indexed access to the x/y/z components of a 3D value.
///
/// Raw indices are validated on every access; use [`Components::axis`] when
/// the axis is already known to be valid.
pub trait Components {
    /// Returns the component along `axis`.
    fn axis(&self, axis: Axis) -> f32;

    /// Returns a mutable reference to the component along `axis`.
    fn axis_mut(&mut self, axis: Axis) -> &mut f32;

    /// Returns component `index`, where 0, 1 and 2 map to x, y and z.
    ///
    /// Fails with [`BvhError::AxisOutOfRange`] for any other index.
    fn component(&self, index: usize) -> Result<f32> {
        Axis::try_from(index).map(|axis| self.axis(axis))
    }

    /// Mutable counterpart of [`Components::component`].
    fn component_mut(&mut self, index: usize) -> Result<&mut f32> {
        let axis = Axis::try_from(index)?;
        Ok(self.axis_mut(axis))
    }
}

impl Components for Vector3<f32> {
    #[inline]
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    fn axis_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl Components for Point3<f32> {
    #[inline]
    fn axis(&self, axis: Axis) -> f32 {
        self.coords.axis(axis)
    }

    #[inline]
    fn axis_mut(&mut self, axis: Axis) -> &mut f32 {
        self.coords.axis_mut(axis)
    }
}
