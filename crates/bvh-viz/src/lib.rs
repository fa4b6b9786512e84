//! Shared visualization utilities for BVH examples.

use std::hash::{Hash, Hasher};

use bvh_tree::{Aabb, Triangle};
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use nalgebra::{Point3, Vector3};

pub mod navigator;
pub use navigator::TreeNavigator;

/// Colors for node boxes, cycled by depth.
const DEPTH_COLORS: [Color; 6] = [WHITE, YELLOW, ORANGE, PINK, SKYBLUE, LIME];

/// Generates a deterministic color from a triangle's vertices using hashing.
pub fn triangle_color(triangle: &Triangle) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for v in triangle.vertices() {
        v.x.to_bits().hash(&mut hasher);
        v.y.to_bits().hash(&mut hasher);
        v.z.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    // Extract RGB from hash bytes, keeping a minimum brightness
    let r = (((hash >> 16) & 0xFF) as u8).max(40);
    let g = (((hash >> 8) & 0xFF) as u8).max(40);
    let b = ((hash & 0xFF) as u8).max(40);

    Color::from_rgba(r, g, b, 255)
}

/// Returns the wireframe color for a node box at `depth`.
pub fn depth_color(depth: usize) -> Color {
    DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}

fn to_vec3(p: Point3<f32>) -> Vec3 {
    vec3(p.x, p.y, p.z)
}

/// Draws a single triangle as a mesh, both faces visible.
pub fn draw_triangle(triangle: &Triangle) {
    let color = triangle_color(triangle);

    let vertices: Vec<Vertex> = triangle
        .vertices()
        .iter()
        .map(|p| Vertex::new2(to_vec3(*p), vec2(0.0, 0.0), color))
        .collect();

    let mesh = Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 1],
        texture: None,
    };

    draw_mesh(&mesh);
}

/// Draws the twelve edges of a box.
pub fn draw_aabb(bounds: &Aabb, color: Color) {
    let center = to_vec3(bounds.center());
    let extent = bounds.extent();
    draw_cube_wires(center, vec3(extent.x, extent.y, extent.z), color);
}

/// The scene used by the console dump and the default window.
pub fn demo_triangles() -> Vec<Triangle> {
    vec![
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ),
        Triangle::new(
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(3.0, 3.0, 3.0),
        ),
        Triangle::new(
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(-2.0, -2.0, -2.0),
            Point3::new(-3.0, -3.0, -3.0),
        ),
    ]
}

/// Generates the 12 triangles covering an axis-aligned cube.
pub fn cube_triangles(center: Point3<f32>, size: f32) -> Vec<Triangle> {
    let half = size / 2.0;

    // 8 corners of the cube
    let corners = [
        center + Vector3::new(-half, -half, -half), // 0: left-bottom-back
        center + Vector3::new(half, -half, -half),  // 1: right-bottom-back
        center + Vector3::new(half, half, -half),   // 2: right-top-back
        center + Vector3::new(-half, half, -half),  // 3: left-top-back
        center + Vector3::new(-half, -half, half),  // 4: left-bottom-front
        center + Vector3::new(half, -half, half),   // 5: right-bottom-front
        center + Vector3::new(half, half, half),    // 6: right-top-front
        center + Vector3::new(-half, half, half),   // 7: left-top-front
    ];

    // 6 faces with counter-clockwise winding (viewed from outside)
    let faces: [[usize; 4]; 6] = [
        [4, 5, 6, 7], // front (+Z)
        [1, 0, 3, 2], // back (-Z)
        [0, 4, 7, 3], // left (-X)
        [5, 1, 2, 6], // right (+X)
        [7, 6, 2, 3], // top (+Y)
        [0, 1, 5, 4], // bottom (-Y)
    ];

    faces
        .iter()
        .flat_map(|[a, b, c, d]| {
            [
                Triangle::new(corners[*a], corners[*b], corners[*c]),
                Triangle::new(corners[*a], corners[*c], corners[*d]),
            ]
        })
        .collect()
}

/// Simple orbit camera for 3D scene navigation.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Creates a new orbit camera with the given configuration.
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: vec3(0.0, 0.0, 0.0),
            zoom_speed: 5.0,
            min_distance: 2.0,
            max_distance: 200.0,
        }
    }

    /// Sets the zoom configuration (speed and distance limits).
    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Centers the camera on a box, e.g. the root bounds of a tree.
    pub fn with_target(mut self, bounds: &Aabb) -> Self {
        self.target = to_vec3(bounds.center());
        self
    }

    /// Updates camera state from user input (mouse drag, scroll, arrow keys).
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        // Clamp pitch to avoid gimbal lock
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance -= scroll * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        if is_key_down(KeyCode::Left) {
            self.yaw += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += 0.02;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= 0.02;
        }
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    /// Converts to macroquad's Camera3D for rendering.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }
}
