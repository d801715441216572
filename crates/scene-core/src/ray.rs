use crate::camera::Camera;
use crate::constants::RAY_EPSILON;
use crate::scene::{ObjectId, Scene, Side};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub object: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

pub type Hits = SmallVec<[Hit; 8]>;

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through a point given in normalized device
    /// coordinates.
    pub fn from_camera(ndc: Vec2, camera: &Camera) -> Self {
        let inv = camera.view_projection().inverse();
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self::new(camera.eye, far - camera.eye)
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Distance along the ray to the sphere surface, or `None` if the sphere is
/// missed or entirely behind the origin. From inside the sphere this is the
/// exit distance.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

/// Möller–Trumbore ray/triangle test. With `Side::Front` only triangles
/// wound counter-clockwise toward the ray origin are hit.
#[inline]
pub fn ray_triangle(origin: Vec3, dir: Vec3, tri: [Vec3; 3], side: Side) -> Option<f32> {
    let [a, b, c] = tri;
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    let facing = match side {
        Side::Front => det > RAY_EPSILON,
        Side::Double => det.abs() > RAY_EPSILON,
    };
    if !facing {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

impl Scene {
    /// Every object the ray hits, nearest first. Equal distances keep scene
    /// traversal order.
    pub fn raycast(&self, ray: &Ray) -> Hits {
        let mut hits = Hits::new();
        for (id, object) in self.iter() {
            // Broad phase in world space; meshes are centered on their origin.
            let radius = object.mesh.bounding_radius();
            if ray_sphere(ray.origin, ray.dir, object.position, radius).is_none() {
                continue;
            }
            let to_local = object.model_matrix().inverse();
            let origin = to_local.transform_point3(ray.origin);
            let dir = to_local.transform_vector3(ray.dir);
            let side = object.material.side;
            let nearest = object
                .mesh
                .triangles()
                .filter_map(|tri| ray_triangle(origin, dir, tri, side))
                .fold(None, |best: Option<f32>, t| Some(best.map_or(t, |b| b.min(t))));
            if let Some(distance) = nearest {
                hits.push(Hit {
                    object: id,
                    distance,
                    point: ray.at(distance),
                });
            }
        }
        // stable: ties stay in traversal order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        self.raycast(ray).into_iter().next()
    }
}
