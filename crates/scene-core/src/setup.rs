//! Static scene construction: ground plane, tunable cube, a row of solids,
//! lights and the starting camera.

use crate::animator::TranslationAnimation;
use crate::camera::Camera;
use crate::color::Color;
use crate::config::{ConfigError, SceneConfig};
use crate::constants::*;
use crate::controls::apply_controls;
use crate::mesh::Mesh;
use crate::scene::{AmbientLight, DirectionalLight, Material, ObjectId, Scene, SceneObject};
use glam::{Quat, Vec3};

pub struct SceneSetup {
    pub scene: Scene,
    pub camera: Camera,
    pub plane: ObjectId,
    pub cube: ObjectId,
    pub solids: Vec<ObjectId>,
}

impl SceneSetup {
    /// Animation over the row of solids as configured.
    pub fn solid_animation(&self, config: &SceneConfig) -> TranslationAnimation {
        let a = &config.animation;
        TranslationAnimation::new(
            self.solids.iter().copied(),
            a.direction,
            a.speed,
            a.duration_ticks,
            a.easing,
        )
    }
}

pub fn build_scene(config: &SceneConfig, aspect: f32) -> Result<SceneSetup, ConfigError> {
    config.validate()?;

    let mut scene = Scene::new();
    scene.ambient = AmbientLight {
        color: Color::WHITE,
        intensity: AMBIENT_INTENSITY,
    };
    scene.light = DirectionalLight {
        color: Color::WHITE,
        intensity: LIGHT_INTENSITY,
        position: Vec3::from(LIGHT_POSITION),
        cast_shadow: true,
    };

    let solids = (0..config.solid_count)
        .map(|i| {
            let solid = SceneObject::new(
                Mesh::dodecahedron(SOLID_RADIUS),
                Material::lambert(Color::from_hex(SOLID_COLOR_HEX)),
            )
            .named(format!("solid-{i}"))
            .at(Vec3::new(i as f32 * config.solid_spacing, config.solid_height, 0.0));
            scene.add(solid)
        })
        .collect::<Vec<_>>();

    let plane = scene.add(
        SceneObject::new(
            Mesh::plane(PLANE_SIZE[0], PLANE_SIZE[1]),
            Material::lambert(Color::from_hex(PLANE_COLOR_HEX)),
        )
        .named("plane")
        .at(Vec3::new(0.0, PLANE_Y, 0.0))
        .rotated(Quat::from_rotation_x(-0.5 * std::f32::consts::PI))
        .with_shadows(false, true),
    );

    let mut cube_material = Material::lambert(Color::from_hex(CUBE_COLOR_HEX)).transparent(1.0);
    apply_controls(&mut cube_material, &config.controls);
    let cube = scene.add(
        SceneObject::new(Mesh::cuboid(CUBE_SIZE[0], CUBE_SIZE[1], CUBE_SIZE[2]), cube_material)
            .named(CUBE_NAME)
            .with_shadows(true, false),
    );

    let mut camera = Camera::new(
        config.camera_eye,
        config.fov_degrees,
        aspect,
        config.znear,
        config.zfar,
    );
    camera.look_at(scene.origin);

    log::info!(
        "[setup] objects={} solids={} camera=({:.1},{:.1},{:.1})",
        scene.len(),
        solids.len(),
        camera.eye.x,
        camera.eye.y,
        camera.eye.z
    );

    Ok(SceneSetup {
        scene,
        camera,
        plane,
        cube,
        solids,
    })
}
