//! Triangle meshes in object space, shared by the rasterizer and ray-caster.
//!
//! All builders produce counter-clockwise winding when viewed from outside,
//! so the face normal `(b - a) × (c - a)` points away from the solid.

use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Mesh {
    positions: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    bounding_radius: f32,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        let bounding_radius = positions.iter().map(|p| p.length()).fold(0.0, f32::max);
        Self {
            positions,
            indices,
            bounding_radius,
        }
    }

    /// Flat rectangle in the XY plane facing +Z, centered on the origin.
    pub fn plane(width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        let positions = vec![
            Vec3::new(-hw, -hh, 0.0),
            Vec3::new(hw, -hh, 0.0),
            Vec3::new(hw, hh, 0.0),
            Vec3::new(-hw, hh, 0.0),
        ];
        Self::new(positions, vec![[0, 1, 2], [0, 2, 3]])
    }

    /// Axis-aligned box centered on the origin.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let h = Vec3::new(width, height, depth) * 0.5;
        // corner i: bit 0 -> +x, bit 1 -> +y, bit 2 -> +z
        let positions = (0..8u32)
            .map(|i| {
                Vec3::new(
                    if i & 1 != 0 { h.x } else { -h.x },
                    if i & 2 != 0 { h.y } else { -h.y },
                    if i & 4 != 0 { h.z } else { -h.z },
                )
            })
            .collect::<Vec<_>>();
        let quads: [[u32; 4]; 6] = [
            [0, 2, 6, 4],
            [1, 3, 7, 5],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
            [0, 1, 3, 2],
            [4, 5, 7, 6],
        ];
        let mut indices = Vec::with_capacity(12);
        for [a, b, c, d] in quads {
            indices.push([a, b, c]);
            indices.push([a, c, d]);
        }
        let mut mesh = Self::new(positions, indices);
        mesh.orient_outward();
        mesh
    }

    /// Regular dodecahedron with circumradius `radius`.
    pub fn dodecahedron(radius: f32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let r = 1.0 / t;
        let mut positions = Vec::with_capacity(20);
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    positions.push(Vec3::new(x, y, z));
                }
            }
        }
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                positions.push(Vec3::new(0.0, a * r, b * t));
                positions.push(Vec3::new(a * r, b * t, 0.0));
                positions.push(Vec3::new(a * t, 0.0, b * r));
            }
        }
        let positions: Vec<Vec3> = positions.into_iter().map(|p| p.normalize() * radius).collect();

        // Each pentagonal face is centered on one icosahedron direction.
        let mut normals = Vec::with_capacity(12);
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                normals.push(Vec3::new(0.0, a * t, b).normalize());
                normals.push(Vec3::new(a, 0.0, b * t).normalize());
                normals.push(Vec3::new(a * t, b, 0.0).normalize());
            }
        }

        let mut indices = Vec::with_capacity(36);
        for n in normals {
            let best = positions.iter().map(|p| p.dot(n)).fold(f32::MIN, f32::max);
            let u = n.any_orthonormal_vector();
            let v = n.cross(u);
            let mut face: Vec<(f32, u32)> = positions
                .iter()
                .enumerate()
                .filter(|(_, p)| (p.dot(n) - best).abs() < 1e-3 * radius.max(1.0))
                .map(|(i, p)| (p.dot(v).atan2(p.dot(u)), i as u32))
                .collect();
            face.sort_by(|a, b| a.0.total_cmp(&b.0));
            for k in 1..face.len().saturating_sub(1) {
                indices.push([face[0].1, face[k].1, face[k + 1].1]);
            }
        }
        let mut mesh = Self::new(positions, indices);
        mesh.orient_outward();
        mesh
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Distance from the origin to the farthest vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.iter().map(move |&[a, b, c]| {
            [
                self.positions[a as usize],
                self.positions[b as usize],
                self.positions[c as usize],
            ]
        })
    }

    // Convex, origin-centered solids only.
    fn orient_outward(&mut self) {
        for tri in &mut self.indices {
            let [a, b, c] = tri.map(|i| self.positions[i as usize]);
            let normal = (b - a).cross(c - a);
            if normal.dot(a + b + c) < 0.0 {
                tri.swap(1, 2);
            }
        }
    }
}
