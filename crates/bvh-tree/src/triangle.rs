//! Triangle representation for BVH construction.

use nalgebra::{Point3, Vector3};

use crate::Aabb;

/// A triangle in 3D space, defined by three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f32>; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>; 3] {
        &self.vertices
    }

    /// Computes the axis-aligned bounding box of the triangle.
    ///
    /// The box is recomputed on every call.
    pub fn bounding_box(&self) -> Aabb {
        let [a, b, c] = &self.vertices;
        Aabb::new(a.inf(b).inf(c), a.sup(b).sup(c))
    }

    /// Computes the (unnormalized) normal vector of the triangle.
    ///
    /// The direction follows the right-hand rule based on vertex winding.
    pub fn normal(&self) -> Vector3<f32> {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a))
    }

    /// Computes the centroid (center of mass) of the triangle.
    pub fn centroid(&self) -> Point3<f32> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }
}

impl From<[Point3<f32>; 3]> for Triangle {
    fn from(vertices: [Point3<f32>; 3]) -> Self {
        Self { vertices }
    }
}

impl From<&Triangle> for Aabb {
    fn from(triangle: &Triangle) -> Self {
        triangle.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let tri = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let bb = tri.bounding_box();

        assert_eq!(bb.min(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn bounding_box_ignores_vertex_order() {
        let a = make_triangle([3.0, -1.0, 2.0], [-2.0, 4.0, 0.0], [1.0, 1.0, -5.0]);
        let b = make_triangle([1.0, 1.0, -5.0], [3.0, -1.0, 2.0], [-2.0, 4.0, 0.0]);

        assert_eq!(a.bounding_box(), b.bounding_box());
        assert_eq!(a.bounding_box().min(), Point3::new(-2.0, -1.0, -5.0));
        assert_eq!(a.bounding_box().max(), Point3::new(3.0, 4.0, 2.0));
    }

    #[test]
    fn collinear_triangle_has_flat_box() {
        let tri = make_triangle([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);
        let bb = tri.bounding_box();

        assert_eq!(bb.min(), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(bb.max(), Point3::new(3.0, 3.0, 3.0));
        assert_eq!(tri.normal(), Vector3::zeros());
    }

    #[test]
    fn normal_follows_winding() {
        let tri = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(tri.normal(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let tri = make_triangle([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 3.0]);
        assert_relative_eq!(tri.centroid(), Point3::new(1.0, 1.0, 1.0));
    }
}
