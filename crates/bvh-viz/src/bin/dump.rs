//! Prints the demo triangles and the BVH built over them.

use bvh_tree::{Aabb, BvhNode, BvhTree, FnVisitor, Triangle};
use bvh_viz::demo_triangles;

fn print_box(bounds: &Aabb, indent: &str) {
    let (min, max) = (bounds.min(), bounds.max());
    println!("{indent}Bounding box:");
    println!("{indent}  Min: ({}, {}, {})", min.x, min.y, min.z);
    println!("{indent}  Max: ({}, {}, {})", max.x, max.y, max.z);
}

fn print_triangle(index: usize, triangle: &Triangle) {
    println!("Triangle {}:", index + 1);
    for (i, v) in triangle.vertices().iter().enumerate() {
        println!("  Vertex {}: ({}, {}, {})", i, v.x, v.y, v.z);
    }
    print_box(&triangle.bounding_box(), "");
    println!();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let triangles = demo_triangles();
    for (i, triangle) in triangles.iter().enumerate() {
        print_triangle(i, triangle);
    }

    let tree = BvhTree::from_triangles(triangles);
    log::info!(
        "Built BVH: {} nodes, {} leaves, depth {}",
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );

    tree.traverse(&mut FnVisitor::new(|node: &BvhNode, depth| {
        let indent = "  ".repeat(depth);
        let kind = if node.is_leaf() { "leaf" } else { "interior" };
        println!("{indent}Node at depth {depth} ({kind}):");
        print_box(node.bounds(), &indent);
        println!("{indent}Number of triangles: {}", node.triangles().len());
    }));
}
