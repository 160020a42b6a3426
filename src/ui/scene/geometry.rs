// SPDX-License-Identifier: MPL-2.0
//! Wireframe geometry for the decorative scene.
//!
//! Meshes are plain vertex/edge lists rotated and projected on the CPU each
//! frame. The shapes mirror the landing page's floating polyhedra: an
//! octahedron, a torus, and an icosahedron.

use std::f32::consts::PI;

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotates the point around the X axis.
    #[must_use]
    pub fn rotate_x(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotates the point around the Y axis.
    #[must_use]
    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Projects the point to 2D with a simple perspective divide.
    ///
    /// `focal` controls the strength of the perspective; larger values look
    /// closer to an orthographic projection.
    #[must_use]
    pub fn project(self, focal: f32) -> (f32, f32) {
        let scale = focal / (focal + self.z);
        (self.x * scale, self.y * scale)
    }
}

/// A mesh reduced to vertices and the index pairs connecting them.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
}

impl Wireframe {
    /// Builds a wireframe from raw parts.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a vertex out of bounds.
    #[must_use]
    pub fn new(vertices: Vec<Vec3>, edges: Vec<(usize, usize)>) -> Self {
        for &(a, b) in &edges {
            assert!(
                a < vertices.len() && b < vertices.len(),
                "edge ({a}, {b}) references a vertex outside 0..{}",
                vertices.len()
            );
        }
        Self { vertices, edges }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Regular octahedron with unit circumradius.
    #[must_use]
    pub fn octahedron() -> Self {
        let vertices = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        // Every axis-tip connects to the four tips of the other two axes
        let edges = vec![
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 4),
            (2, 5),
            (3, 4),
            (3, 5),
        ];
        Self::new(vertices, edges)
    }

    /// Torus with the given radii, discretized into a segment grid.
    #[must_use]
    pub fn torus(major_radius: f32, minor_radius: f32, tubular: usize, radial: usize) -> Self {
        assert!(tubular >= 3 && radial >= 3, "torus needs at least 3x3 segments");

        let mut vertices = Vec::with_capacity(tubular * radial);
        for i in 0..tubular {
            let u = i as f32 / tubular as f32 * 2.0 * PI;
            for j in 0..radial {
                let v = j as f32 / radial as f32 * 2.0 * PI;
                let ring = major_radius + minor_radius * v.cos();
                vertices.push(Vec3::new(
                    ring * u.cos(),
                    minor_radius * v.sin(),
                    ring * u.sin(),
                ));
            }
        }

        let mut edges = Vec::with_capacity(tubular * radial * 2);
        for i in 0..tubular {
            for j in 0..radial {
                let current = i * radial + j;
                let next_radial = i * radial + (j + 1) % radial;
                let next_tubular = ((i + 1) % tubular) * radial + j;
                edges.push((current, next_radial));
                edges.push((current, next_tubular));
            }
        }

        Self::new(vertices, edges)
    }

    /// Regular icosahedron with unit-ish circumradius.
    #[must_use]
    pub fn icosahedron() -> Self {
        // Golden-ratio rectangles
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let norm = (1.0 + phi * phi).sqrt();
        let a = 1.0 / norm;
        let b = phi / norm;

        let vertices = vec![
            Vec3::new(-a, b, 0.0),
            Vec3::new(a, b, 0.0),
            Vec3::new(-a, -b, 0.0),
            Vec3::new(a, -b, 0.0),
            Vec3::new(0.0, -a, b),
            Vec3::new(0.0, a, b),
            Vec3::new(0.0, -a, -b),
            Vec3::new(0.0, a, -b),
            Vec3::new(b, 0.0, -a),
            Vec3::new(b, 0.0, a),
            Vec3::new(-b, 0.0, -a),
            Vec3::new(-b, 0.0, a),
        ];

        let edges = vec![
            (0, 1),
            (0, 5),
            (0, 7),
            (0, 10),
            (0, 11),
            (1, 5),
            (1, 7),
            (1, 8),
            (1, 9),
            (2, 3),
            (2, 4),
            (2, 6),
            (2, 10),
            (2, 11),
            (3, 4),
            (3, 6),
            (3, 8),
            (3, 9),
            (4, 5),
            (4, 9),
            (4, 11),
            (5, 9),
            (5, 11),
            (6, 7),
            (6, 8),
            (6, 10),
            (7, 8),
            (7, 10),
            (8, 9),
            (10, 11),
        ];

        Self::new(vertices, edges)
    }
}
