use crate::color::Color;
use crate::mesh::Mesh;
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};

/// Index into the scene's object table. Objects are never removed, so an id
/// handed out by a scene stays valid for that scene's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// Which faces a ray may hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub opacity: f32,
    pub transparent: bool,
    pub side: Side,
}

impl Material {
    pub fn lambert(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            opacity: 1.0,
            transparent: false,
            side: Side::Front,
        }
    }

    pub fn transparent(mut self, opacity: f32) -> Self {
        self.transparent = true;
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: Option<String>,
    pub mesh: Mesh,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Quat,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl SceneObject {
    pub fn new(mesh: Mesh, material: Material) -> Self {
        Self {
            name: None,
            mesh,
            material,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// Object-to-world transform.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Unit vector from the scene origin toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// Owns every renderable object for the lifetime of the program.
#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    names: FnvHashMap<String, ObjectId>,
    pub ambient: AmbientLight,
    pub light: DirectionalLight,
    pub clear_color: Color,
    /// Point the camera orbits and looks at.
    pub origin: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            names: FnvHashMap::default(),
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 0.0,
            },
            light: DirectionalLight {
                color: Color::WHITE,
                intensity: 0.0,
                position: Vec3::Y,
                cast_shadow: false,
            },
            clear_color: Color::BLACK,
            origin: Vec3::ZERO,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object; a later object with the same name shadows the earlier
    /// one in [`Scene::object_by_name`].
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        if let Some(name) = &object.name {
            self.names.insert(name.clone(), id);
        }
        self.objects.push(object);
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    pub fn object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    /// Iterate objects in traversal (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    /// Shift an object's position by `delta`. Addition is the only position
    /// write the animator performs, so its steps commute with anything else
    /// that translates the same object.
    pub fn translate(&mut self, id: ObjectId, delta: Vec3) {
        if let Some(o) = self.objects.get_mut(id.0) {
            o.position += delta;
        }
    }

    pub fn emissive(&self, id: ObjectId) -> Option<Color> {
        self.get(id).map(|o| o.material.emissive)
    }

    pub fn set_emissive(&mut self, id: ObjectId, emissive: Color) {
        if let Some(o) = self.get_mut(id) {
            o.material.emissive = emissive;
        }
    }
}
