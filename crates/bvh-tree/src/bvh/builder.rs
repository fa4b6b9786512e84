//! Top-down BVH construction by spatial median splits.
//!
//! Each node's box is the union of its triangles' boxes. The node is split
//! on its longest axis at the box midpoint, and every triangle goes to the
//! side its own box center falls on (`<=` goes left). Recursion stops once
//! a partition holds at most one triangle.

use log::{debug, log_enabled, trace, warn, Level};

use crate::{Aabb, Triangle};

use super::node::BvhNode;

/// What to do when a spatial split sends every triangle to the same side.
///
/// Such a split hands the child the exact same input again, so the plain
/// spatial median rule would recurse forever. This happens for stacked
/// duplicate triangles or when coordinates are NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateSplit {
    /// Split the triangles into two halves by input order.
    #[default]
    IndexMedian,
    /// Stop and keep all remaining triangles in one leaf.
    Leaf,
}

/// Options for [`build_with`].
///
/// Inputs on which the spatial median rule terminates produce the same tree
/// for every option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    pub degenerate: DegenerateSplit,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback used for one-sided splits.
    pub fn with_degenerate(mut self, degenerate: DegenerateSplit) -> Self {
        self.degenerate = degenerate;
        self
    }
}

/// Builds a BVH over `triangles` with the default options.
///
/// Returns `None` for an empty input. The vector is consumed and
/// redistributed into the tree's leaves.
pub fn build(triangles: Vec<Triangle>) -> Option<BvhNode> {
    build_with(triangles, &BuildOptions::default())
}

/// Builds a BVH over `triangles`.
pub fn build_with(triangles: Vec<Triangle>, options: &BuildOptions) -> Option<BvhNode> {
    let count = triangles.len();
    let root = build_node(triangles, options);

    if log_enabled!(Level::Debug) {
        if let Some(ref root) = root {
            debug!(
                "Built BVH over {} triangles; depth={}, leaves={}",
                count,
                root.depth(),
                root.leaf_count()
            );
        } else {
            debug!("Built empty BVH");
        }
    }

    root
}

/// Recursively builds a node from a list of triangles.
fn build_node(triangles: Vec<Triangle>, options: &BuildOptions) -> Option<BvhNode> {
    let bounds = Aabb::union_all(triangles.iter().map(Triangle::bounding_box))?;

    if triangles.len() <= 1 {
        return Some(BvhNode::leaf(bounds, triangles));
    }

    let axis = bounds.longest_axis();
    let split_at = bounds.center_on(axis);

    let (mut left, mut right): (Vec<_>, Vec<_>) = triangles
        .into_iter()
        .partition(|triangle| triangle.bounding_box().center_on(axis) <= split_at);

    trace!(
        "Splitting {} triangles on {:?} at {}; left={}, right={}",
        left.len() + right.len(),
        axis,
        split_at,
        left.len(),
        right.len()
    );

    if left.is_empty() || right.is_empty() {
        let mut all = if left.is_empty() { right } else { left };

        warn!(
            "Spatial split on {:?} at {} did not separate {} triangles; falling back to {:?}",
            axis,
            split_at,
            all.len(),
            options.degenerate
        );

        match options.degenerate {
            DegenerateSplit::Leaf => return Some(BvhNode::leaf(bounds, all)),
            DegenerateSplit::IndexMedian => {
                right = all.split_off(all.len() / 2);
                left = all;
            }
        }
    }

    Some(BvhNode::interior(
        bounds,
        build_node(left, options),
        build_node(right, options),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn make_triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    fn unit_at(offset: f32) -> Triangle {
        make_triangle(
            [offset, offset, offset],
            [offset + 1.0, offset, offset],
            [offset, offset + 1.0, offset],
        )
    }

    #[test]
    fn empty_input_builds_nothing() {
        assert!(build(vec![]).is_none());
    }

    #[test]
    fn single_triangle_is_leaf() {
        let tri = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let root = build(vec![tri.clone()]).unwrap();

        assert!(root.is_leaf());
        assert_eq!(root.triangles(), &[tri]);
        assert_eq!(root.bounds().min(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(root.bounds().max(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn split_boundary_goes_left() {
        // Box spans x in [0, 4]; split at 2. The middle triangle's center is exactly 2.
        let low = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.1, 0.0]);
        let mid = make_triangle([1.5, 0.0, 0.0], [2.5, 0.0, 0.0], [1.5, 0.1, 0.0]);
        let high = make_triangle([3.0, 0.0, 0.0], [4.0, 0.0, 0.0], [3.0, 0.1, 0.0]);

        let root = build(vec![high.clone(), mid.clone(), low.clone()]).unwrap();
        let left = root.left().unwrap();
        let right = root.right().unwrap();

        assert_eq!(left.triangle_count(), 2);
        assert_eq!(right.triangles(), &[high]);

        // left holds [mid, low] in input order; its own split separates them
        assert_eq!(left.left().unwrap().triangles(), &[low]);
        assert_eq!(left.right().unwrap().triangles(), &[mid]);
    }

    #[test]
    fn duplicates_fall_back_to_index_median() {
        let tri = unit_at(0.0);
        let root = build(vec![tri.clone(), tri.clone(), tri.clone()]).unwrap();

        assert_eq!(root.triangle_count(), 3);
        assert_eq!(root.leaf_count(), 3);
        assert_eq!(root.left().unwrap().triangle_count(), 1);
        assert_eq!(root.right().unwrap().triangle_count(), 2);
    }

    #[test]
    fn duplicates_with_leaf_fallback_stay_together() {
        let tri = unit_at(0.0);
        let options = BuildOptions::new().with_degenerate(DegenerateSplit::Leaf);
        let root = build_with(vec![tri.clone(), tri.clone()], &options).unwrap();

        assert!(root.is_leaf());
        assert_eq!(root.triangles().len(), 2);
    }

    #[test]
    fn nan_coordinates_still_terminate() {
        let nan = make_triangle([f32::NAN; 3], [f32::NAN; 3], [f32::NAN; 3]);
        let root = build(vec![nan.clone(), nan.clone(), unit_at(1.0)]).unwrap();

        assert_eq!(root.triangle_count(), 3);
    }

    #[test]
    fn options_do_not_change_separable_input() {
        let triangles: Vec<_> = (0..8).map(|i| unit_at(i as f32 * 3.0)).collect();

        let by_index = build(triangles.clone()).unwrap();
        let by_leaf = build_with(
            triangles,
            &BuildOptions::new().with_degenerate(DegenerateSplit::Leaf),
        )
        .unwrap();

        assert_eq!(by_index, by_leaf);
        assert_eq!(by_index.leaf_count(), 8);
    }
}
