//! BVH navigation utilities for interactive visualization.

use bvh_tree::{BvhNode, BvhTree, BvhVisitor};
use macroquad::prelude::*;

use crate::{depth_color, draw_aabb, draw_triangle};

/// Direction taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Interactive navigator for exploring tree structure.
pub struct TreeNavigator {
    path: Vec<Direction>,
    show_boxes: bool,
}

impl Default for TreeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            show_boxes: true,
        }
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Returns the current depth in the tree.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Attempts to navigate into a child. Returns true if successful.
    pub fn go(&mut self, tree: &BvhTree, direction: Direction) -> bool {
        let has_child = self.current_node(tree).is_some_and(|node| match direction {
            Direction::Left => node.left().is_some(),
            Direction::Right => node.right().is_some(),
        });
        if has_child {
            self.path.push(direction);
        }
        has_child
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root node.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update(&mut self, tree: &BvhTree) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::L) {
            changed = self.go(tree, Direction::Left);
        }
        if is_key_pressed(KeyCode::R) {
            changed = self.go(tree, Direction::Right);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::T) && !self.path.is_empty() {
            self.go_root();
            changed = true;
        }
        if is_key_pressed(KeyCode::B) {
            self.show_boxes = !self.show_boxes;
            changed = true;
        }

        changed
    }

    /// Returns a reference to the current node, if the tree is non-empty.
    pub fn current_node<'a>(&self, tree: &'a BvhTree) -> Option<&'a BvhNode> {
        tree.root().and_then(|root| get_node_at_path(root, &self.path))
    }

    /// Renders the triangles of the current subtree and, if enabled, its boxes.
    pub fn render(&self, tree: &BvhTree) {
        if let Some(node) = self.current_node(tree) {
            node.traverse(&mut RenderVisitor {
                show_boxes: self.show_boxes,
            });
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui(&self, tree: &BvhTree, y_offset: f32) {
        let Some(node) = self.current_node(tree) else {
            draw_text("Empty tree", 10.0, y_offset, 18.0, WHITE);
            return;
        };

        let path_str = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|d| match d {
                    Direction::Left => "L",
                    Direction::Right => "R",
                })
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        let bounds = node.bounds();
        let (min, max) = (bounds.min(), bounds.max());

        draw_text(
            &format!(
                "Subtree: {} triangles, {} leaves",
                node.triangle_count(),
                node.leaf_count()
            ),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_str, self.path.len()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "Box: ({:.2}, {:.2}, {:.2}) - ({:.2}, {:.2}, {:.2})",
                min.x, min.y, min.z, max.x, max.y, max.z
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            GRAY,
        );
        draw_text(
            &format!(
                "Children: {}{}{}",
                if node.left().is_some() { "[L]eft " } else { "" },
                if node.right().is_some() { "[R]ight " } else { "" },
                if node.is_leaf() { "(leaf)" } else { "" }
            ),
            10.0,
            y_offset + 60.0,
            18.0,
            if node.is_leaf() { ORANGE } else { GREEN },
        );
        draw_text(
            "[P]arent | [T]op | [B]oxes",
            10.0,
            y_offset + 80.0,
            16.0,
            DARKGRAY,
        );
    }
}

/// Draws every visited node's box and every leaf's triangles.
struct RenderVisitor {
    show_boxes: bool,
}

impl BvhVisitor for RenderVisitor {
    fn visit(&mut self, node: &BvhNode, depth: usize) {
        if self.show_boxes {
            draw_aabb(node.bounds(), depth_color(depth));
        }
        for triangle in node.triangles() {
            draw_triangle(triangle);
        }
    }
}

/// Navigates to a node following the path, returns None if path is invalid.
fn get_node_at_path<'a>(root: &'a BvhNode, path: &[Direction]) -> Option<&'a BvhNode> {
    let mut current = root;
    for dir in path {
        current = match dir {
            Direction::Left => current.left()?,
            Direction::Right => current.right()?,
        };
    }
    Some(current)
}
