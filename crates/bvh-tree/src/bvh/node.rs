//! BVH node implementation.

use crate::{Aabb, Triangle};

use super::visitor::BvhVisitor;

/// A node in the bounding volume hierarchy.
///
/// Every node owns the box enclosing all geometry beneath it. Leaves hold
/// the triangles directly; interior nodes hold none and delegate their
/// geometry to up to two exclusively owned children.
///
/// Nodes are immutable once built. Dropping a node drops its whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct BvhNode {
    /// Union of the bounding boxes of every triangle in this subtree.
    bounds: Aabb,

    /// Triangles stored at this node. Always empty for interior nodes.
    triangles: Vec<Triangle>,

    left: Option<Box<BvhNode>>,

    right: Option<Box<BvhNode>>,
}

impl BvhNode {
    /// Creates a leaf holding `triangles`.
    pub(crate) fn leaf(bounds: Aabb, triangles: Vec<Triangle>) -> Self {
        Self {
            bounds,
            triangles,
            left: None,
            right: None,
        }
    }

    /// Creates an interior node over the given subtrees.
    pub(crate) fn interior(bounds: Aabb, left: Option<BvhNode>, right: Option<BvhNode>) -> Self {
        Self {
            bounds,
            triangles: Vec::new(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns the bounding box of this subtree.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Returns the triangles stored directly at this node.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns a reference to the left child subtree.
    #[inline]
    pub fn left(&self) -> Option<&BvhNode> {
        self.left.as_deref()
    }

    /// Returns a reference to the right child subtree.
    #[inline]
    pub fn right(&self) -> Option<&BvhNode> {
        self.right.as_deref()
    }

    /// Iterates over the present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &BvhNode> {
        self.left().into_iter().chain(self.right())
    }

    /// Checks if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the total number of triangles in this subtree.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() + self.children().map(BvhNode::triangle_count).sum::<usize>()
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        1 + self.children().map(BvhNode::depth).max().unwrap_or(0)
    }

    /// Returns the number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(BvhNode::node_count).sum::<usize>()
    }

    /// Walks this subtree depth-first, parents before children and left before right.
    ///
    /// This node is visited at depth 0.
    pub fn traverse<V: BvhVisitor>(&self, visitor: &mut V) {
        self.traverse_at(0, visitor);
    }

    fn traverse_at<V: BvhVisitor>(&self, depth: usize, visitor: &mut V) {
        visitor.visit(self, depth);
        for child in self.children() {
            child.traverse_at(depth + 1, visitor);
        }
    }

    /// Returns the number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children().map(BvhNode::leaf_count).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bvh::visitor::FnVisitor;
    use nalgebra::Point3;

    fn make_triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    fn leaf_of(triangle: Triangle) -> BvhNode {
        BvhNode::leaf(triangle.bounding_box(), vec![triangle])
    }

    #[test]
    fn leaf_has_no_children() {
        let node = leaf_of(make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));

        assert!(node.is_leaf());
        assert_eq!(node.triangle_count(), 1);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.node_count(), 1);
        assert_eq!(node.leaf_count(), 1);
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn interior_holds_no_triangles() {
        let a = leaf_of(make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        let b = leaf_of(make_triangle([2.0, 2.0, 2.0], [3.0, 2.0, 2.0], [2.0, 3.0, 2.0]));
        let bounds = a.bounds().union(b.bounds());

        let node = BvhNode::interior(bounds, Some(a), Some(b));

        assert!(!node.is_leaf());
        assert!(node.triangles().is_empty());
        assert_eq!(node.triangle_count(), 2);
        assert_eq!(node.node_count(), 3);
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn single_child_is_not_a_leaf() {
        let a = leaf_of(make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        let bounds = *a.bounds();

        let node = BvhNode::interior(bounds, None, Some(a));

        assert!(!node.is_leaf());
        assert!(node.left().is_none());
        assert!(node.right().is_some());
        assert_eq!(node.children().count(), 1);
    }

    #[test]
    fn depth_follows_deepest_branch() {
        let tri = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let bounds = tri.bounding_box();

        let inner = BvhNode::interior(bounds, Some(leaf_of(tri.clone())), None);
        let root = BvhNode::interior(bounds, Some(inner), Some(leaf_of(tri)));

        // root -> inner -> leaf (depth 3)
        assert_eq!(root.depth(), 3);
        assert_eq!(root.leaf_count(), 2);
    }

    #[test]
    fn subtree_traversal_starts_at_zero() {
        let tri = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let bounds = tri.bounding_box();
        let inner = BvhNode::interior(bounds, Some(leaf_of(tri.clone())), Some(leaf_of(tri)));
        let root = BvhNode::interior(bounds, Some(inner), None);

        let mut depths = Vec::new();
        root.left()
            .unwrap()
            .traverse(&mut FnVisitor::new(|_: &BvhNode, depth| depths.push(depth)));

        assert_eq!(depths, vec![0, 1, 1]);
    }
}
