//! BVH (Bounding Volume Hierarchy) construction over triangle soups.
//!
//! Geometry uses nalgebra's `Point3<f32>` and `Vector3<f32>`; [`Components`]
//! adds checked index access on top of them.

mod aabb;
mod axis;
pub mod bvh;
mod error;
mod triangle;

pub use aabb::Aabb;
pub use axis::{Axis, Components};
pub use bvh::{
    build, build_with, BuildOptions, BvhNode, BvhTree, BvhVisitor, CollectingVisitor,
    DegenerateSplit, FnVisitor,
};
pub use error::{BvhError, Result};
pub use triangle::Triangle;
