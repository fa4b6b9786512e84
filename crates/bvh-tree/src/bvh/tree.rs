//! BVH container and traversal.

use crate::{Aabb, Triangle};

use super::builder::{build_with, BuildOptions};
use super::node::BvhNode;
use super::visitor::BvhVisitor;

/// A bounding volume hierarchy over a set of triangles.
///
/// # Construction
///
/// ```ignore
/// use bvh_tree::{BvhTree, Triangle};
///
/// let triangles: Vec<Triangle> = /* ... */;
/// let tree = BvhTree::from_triangles(triangles);
/// ```
///
/// # Traversal
///
/// The tree does not answer ray or overlap queries itself. Consumers either
/// walk [`BvhTree::root`] directly or pass a [`BvhVisitor`] to
/// [`BvhTree::traverse`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BvhTree {
    root: Option<BvhNode>,
}

impl BvhTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree with the given options.
    ///
    /// Returns an empty tree if the input is empty.
    pub fn build(triangles: Vec<Triangle>, options: &BuildOptions) -> Self {
        Self {
            root: build_with(triangles, options),
        }
    }

    /// Builds a tree using the default [`BuildOptions`].
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self::build(triangles, &BuildOptions::default())
    }

    /// Returns `true` if the tree contains no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BvhNode> {
        self.root.as_ref()
    }

    /// Takes the root node out of the tree.
    pub fn into_root(self) -> Option<BvhNode> {
        self.root
    }

    /// Returns the box enclosing every triangle in the tree.
    pub fn bounds(&self) -> Option<&Aabb> {
        self.root.as_ref().map(BvhNode::bounds)
    }

    /// Returns the total number of triangles in the tree.
    pub fn triangle_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.triangle_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.node_count())
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.leaf_count())
    }

    /// Walks the tree depth-first, parents before children and left before right.
    pub fn traverse<V: BvhVisitor>(&self, visitor: &mut V) {
        if let Some(ref root) = self.root {
            root.traverse(visitor);
        }
    }

    /// Collects all triangles in the tree, in leaf order from left to right.
    pub fn collect_triangles(&self) -> Vec<Triangle> {
        let mut result = Vec::with_capacity(self.triangle_count());
        collect_triangles_recursive(self.root.as_ref(), &mut result);
        result
    }
}

impl From<Vec<Triangle>> for BvhTree {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self::from_triangles(triangles)
    }
}

impl FromIterator<Triangle> for BvhTree {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

/// Recursively collects all triangles from a node subtree.
fn collect_triangles_recursive(node: Option<&BvhNode>, result: &mut Vec<Triangle>) {
    if let Some(n) = node {
        result.extend(n.triangles().iter().cloned());
        collect_triangles_recursive(n.left(), result);
        collect_triangles_recursive(n.right(), result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bvh::visitor::{CollectingVisitor, FnVisitor};
    use nalgebra::Point3;

    fn make_triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    fn demo_triangles() -> Vec<Triangle> {
        vec![
            make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            make_triangle([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]),
            make_triangle([-1.0, -1.0, -1.0], [-2.0, -2.0, -2.0], [-3.0, -3.0, -3.0]),
        ]
    }

    #[test]
    fn empty_tree() {
        let tree = BvhTree::new();
        assert!(tree.is_empty());
        assert!(tree.bounds().is_none());
        assert_eq!(tree.triangle_count(), 0);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn build_empty() {
        let tree = BvhTree::from_triangles(vec![]);
        assert!(tree.is_empty());
        assert_eq!(tree, BvhTree::new());
    }

    #[test]
    fn build_single_triangle() {
        let tree = BvhTree::from_triangles(vec![make_triangle(
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        )]);

        assert!(!tree.is_empty());
        assert_eq!(tree.triangle_count(), 1);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn demo_scene_shape() {
        let tree = BvhTree::from_triangles(demo_triangles());

        // root splits {origin, negative} from {positive}, then origin from negative
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 3);

        let bounds = tree.bounds().unwrap();
        assert_eq!(bounds.min(), Point3::new(-3.0, -3.0, -3.0));
        assert_eq!(bounds.max(), Point3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn traverse_is_pre_order() {
        let tree = BvhTree::from_triangles(demo_triangles());

        let mut order = Vec::new();
        tree.traverse(&mut FnVisitor::new(|node: &BvhNode, depth| {
            order.push((depth, node.is_leaf()));
        }));

        assert_eq!(
            order,
            vec![(0, false), (1, false), (2, true), (2, true), (1, true)]
        );
    }

    #[test]
    fn traverse_collects_every_triangle_once() {
        let input = demo_triangles();
        let tree = BvhTree::from_triangles(input.clone());

        let mut visitor = CollectingVisitor::new();
        tree.traverse(&mut visitor);
        let collected = visitor.into_triangles();

        assert_eq!(collected.len(), input.len());
        for tri in &input {
            assert!(collected.contains(tri));
        }
        assert_eq!(collected, tree.collect_triangles());
    }

    #[test]
    fn collect_from_iterator() {
        let tree: BvhTree = demo_triangles().into_iter().collect();
        assert_eq!(tree.triangle_count(), 3);
    }
}
