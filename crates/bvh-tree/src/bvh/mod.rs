//! Bounding Volume Hierarchy over triangles.
//!
//! The hierarchy is built once, top-down, from a flat triangle list:
//!
//! - every node stores the union box of the triangles beneath it
//! - a node with at most one triangle becomes a leaf
//! - otherwise the node is split on its longest axis at the box midpoint
//!   and each triangle follows its own box center
//!
//! # Example
//!
//! ```ignore
//! use bvh_tree::{BvhTree, Triangle};
//! use bvh_tree::bvh::CollectingVisitor;
//!
//! let triangles: Vec<Triangle> = /* create triangles */;
//! let tree = BvhTree::from_triangles(triangles);
//!
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse(&mut visitor);
//! let triangles_in_leaf_order = visitor.into_triangles();
//! ```
//!
//! # Architecture
//!
//! - [`BvhTree`]: The main container holding the root node
//! - [`BvhNode`]: Nodes storing a bounding box and, at leaves, triangles
//! - [`build`] / [`build_with`]: The recursive builder
//! - [`BuildOptions`]: Fallback policy for splits that separate nothing
//! - [`BvhVisitor`]: Visitor trait for custom traversal behavior

mod builder;
mod node;
mod tree;
mod visitor;

pub use builder::{build, build_with, BuildOptions, DegenerateSplit};
pub use node::BvhNode;
pub use tree::BvhTree;
pub use visitor::{BvhVisitor, CollectingVisitor, FnVisitor};
