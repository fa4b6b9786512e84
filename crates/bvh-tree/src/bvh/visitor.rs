//! Visitor pattern for BVH traversal.
//!
//! Visitors let downstream consumers (renderers, debug dumps, query code)
//! walk the hierarchy without coupling the traversal to a specific use case.

use crate::Triangle;

use super::node::BvhNode;

/// Visitor for processing nodes during BVH traversal.
pub trait BvhVisitor {
    /// Called once per node, parents before children.
    ///
    /// `depth` is 0 for the root.
    fn visit(&mut self, node: &BvhNode, depth: usize);
}

/// A simple visitor that collects the triangles of every visited leaf.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Triangle>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.collected
    }

    /// Returns a reference to the collected triangles.
    pub fn triangles(&self) -> &[Triangle] {
        &self.collected
    }
}

impl BvhVisitor for CollectingVisitor {
    fn visit(&mut self, node: &BvhNode, _depth: usize) {
        self.collected.extend(node.triangles().iter().cloned());
    }
}

/// A visitor that calls a closure for each node.
pub struct FnVisitor<F>
where
    F: FnMut(&BvhNode, usize),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&BvhNode, usize),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BvhVisitor for FnVisitor<F>
where
    F: FnMut(&BvhNode, usize),
{
    fn visit(&mut self, node: &BvhNode, depth: usize) {
        (self.func)(node, depth);
    }
}
