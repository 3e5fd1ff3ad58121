//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane, then expresses the hit point in a 2D
//! basis of that plane and solves for the planar coordinates `(beta, gamma)`
//! along the two edges leaving the first vertex.

use whitted_math::{LocalGeo, Point3, Ray, UnitNormal, Vector3};

use crate::shape::{plane_basis, Shape, ShapeHit, PARALLEL_EPSILON};

/// Below this |det| the 2x2 planar system is treated as singular.
const SINGULAR_EPSILON: f64 = 1e-4;

/// A triangle primitive.
///
/// The face normal is `(c - a) x (b - a)`. Hits are not checked against
/// the ray's parametric range, so a triangle behind the origin or past
/// `t_max` still reports a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    a: Point3,
    b: Point3,
    c: Point3,
    /// Pre-computed face normal (unit length)
    normal: Vector3,
    /// In-plane axes
    x_axis: Vector3,
    y_axis: Vector3,
    /// Edges a->b and a->c projected on the in-plane axes
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        let edge1 = b - a;
        let edge2 = c - a;
        let normal = edge2.cross(edge1).normalize();
        // Horizontal triangles rely on the world-X fallback and stay hittable
        let (x_axis, y_axis) = plane_basis(normal);

        Self {
            a,
            b,
            c,
            normal,
            x_axis,
            y_axis,
            ax: edge1.dot(x_axis),
            ay: edge1.dot(y_axis),
            bx: edge2.dot(x_axis),
            by: edge2.dot(y_axis),
        }
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn normal(&self) -> UnitNormal {
        UnitNormal::new(self.normal)
    }

    /// Solve `p = beta * e1 + gamma * e2` in the plane basis.
    ///
    /// A near-singular system pins `gamma` at 0.5 and solves `beta` alone.
    fn planar_coordinates(&self, px: f64, py: f64) -> (f64, f64) {
        let (ax, ay, bx, by) = (self.ax, self.ay, self.bx, self.by);

        let det = by * ax - bx * ay;
        let gamma = if det.abs() > SINGULAR_EPSILON {
            (py * ax - px * ay) / det
        } else {
            0.5
        };

        let beta = if ax != 0.0 {
            (px - gamma * bx) / ax
        } else {
            (py - gamma * by) / ay
        };

        (beta, gamma)
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let divisor = ray.direction().dot(self.normal);
        if divisor.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.a - ray.origin()).dot(self.normal) / divisor;
        let position = ray.at(t);

        let p = position - self.a;
        let (beta, gamma) = self.planar_coordinates(p.dot(self.x_axis), p.dot(self.y_axis));

        let inside = (0.0..=1.0).contains(&beta)
            && (0.0..=1.0).contains(&gamma)
            && beta + gamma <= 1.0;
        if !inside {
            return None;
        }

        Some(ShapeHit {
            t_hit: (ray.direction() * t).length(),
            local: LocalGeo::new(position, UnitNormal::new(self.normal)),
        })
    }
}
