use glam::Vec3;
use scene_core::{
    AnimationStatus, Color, Easing, Material, Mesh, ObjectId, Scene, SceneObject,
    TranslationAnimation,
};

fn scene_with(n: usize) -> (Scene, Vec<ObjectId>) {
    let mut scene = Scene::new();
    let ids = (0..n)
        .map(|i| {
            scene.add(
                SceneObject::new(Mesh::dodecahedron(1.0), Material::lambert(Color::WHITE))
                    .at(Vec3::new(i as f32 * 5.0, 0.0, 0.0)),
            )
        })
        .collect();
    (scene, ids)
}

fn position(scene: &Scene, id: ObjectId) -> Vec3 {
    scene.get(id).expect("object").position
}

#[test]
fn full_run_displaces_every_object_by_ticks_times_step() {
    let (mut scene, ids) = scene_with(4);
    let mut anim =
        TranslationAnimation::new(ids.clone(), Vec3::NEG_Y, 0.05, 600, Easing::Linear);
    let mut steps = 0;
    while anim.step(&mut scene) == AnimationStatus::Running {
        steps += 1;
    }
    assert_eq!(steps + 1, 600);
    assert_eq!(anim.ticks_done(), 600);
    assert_eq!(anim.status(), AnimationStatus::Finished);
    for (i, id) in ids.iter().enumerate() {
        let p = position(&scene, *id);
        assert!((p.y - -30.0).abs() < 2e-3, "object {i} y = {}", p.y);
        assert!((p.x - i as f32 * 5.0).abs() < 1e-5);
    }
}

#[test]
fn finished_animation_does_not_restart() {
    let (mut scene, ids) = scene_with(1);
    let mut anim = TranslationAnimation::new(ids.clone(), Vec3::Y, 1.0, 3, Easing::Linear);
    for _ in 0..10 {
        anim.step(&mut scene);
    }
    assert_eq!(anim.ticks_done(), 3);
    assert!((position(&scene, ids[0]).y - 3.0).abs() < 1e-6);
}

#[test]
fn cancelling_midway_keeps_applied_steps() {
    let (mut scene, ids) = scene_with(2);
    let mut anim =
        TranslationAnimation::new(ids.clone(), Vec3::NEG_Y, 0.05, 600, Easing::Linear);
    let token = anim.cancel_token();
    for _ in 0..300 {
        assert_eq!(anim.step(&mut scene), AnimationStatus::Running);
    }
    token.cancel();
    assert_eq!(anim.step(&mut scene), AnimationStatus::Cancelled);
    assert_eq!(anim.step(&mut scene), AnimationStatus::Cancelled);
    assert_eq!(anim.ticks_done(), 300);
    for id in ids {
        assert!((position(&scene, id).y - -15.0).abs() < 2e-3);
    }
}

#[test]
fn direct_cancel_reports_cancelled_status() {
    let (mut scene, ids) = scene_with(1);
    let mut anim = TranslationAnimation::new(ids, Vec3::X, 1.0, 10, Easing::Linear);
    anim.step(&mut scene);
    anim.cancel();
    assert_eq!(anim.status(), AnimationStatus::Cancelled);
    assert!(anim.status().is_done());
}

#[test]
fn direction_is_normalized() {
    let (_, ids) = scene_with(1);
    let anim = TranslationAnimation::new(ids, Vec3::new(3.0, 0.0, 4.0), 2.0, 1, Easing::Linear);
    assert!((anim.step_delta() - Vec3::new(1.2, 0.0, 1.6)).length() < 1e-6);
}

#[test]
fn zero_direction_moves_nothing() {
    let (mut scene, ids) = scene_with(1);
    let start = position(&scene, ids[0]);
    let mut anim = TranslationAnimation::new(ids.clone(), Vec3::ZERO, 1.0, 5, Easing::Linear);
    while !anim.step(&mut scene).is_done() {}
    assert_eq!(position(&scene, ids[0]), start);
}

#[test]
fn speed_is_shaped_once_by_easing() {
    let (_, ids) = scene_with(1);
    let anim = TranslationAnimation::new(ids, Vec3::X, 0.5, 10, Easing::InQuad);
    assert!((anim.step_delta().x - 0.25).abs() < 1e-6);
}

#[test]
fn zero_duration_is_finished_immediately() {
    let (mut scene, ids) = scene_with(1);
    let start = position(&scene, ids[0]);
    let mut anim = TranslationAnimation::new(ids.clone(), Vec3::X, 1.0, 0, Easing::Linear);
    assert_eq!(anim.status(), AnimationStatus::Finished);
    assert_eq!(anim.step(&mut scene), AnimationStatus::Finished);
    assert_eq!(position(&scene, ids[0]), start);
}

#[test]
fn steps_commute_with_other_translations() {
    let (mut a, ids) = scene_with(1);
    let (mut b, _) = scene_with(1);
    let nudge = Vec3::new(0.25, 0.5, -1.0);

    let mut anim_a = TranslationAnimation::new(ids.clone(), Vec3::NEG_Y, 0.5, 4, Easing::Linear);
    anim_a.step(&mut a);
    a.translate(ids[0], nudge);
    while !anim_a.step(&mut a).is_done() {}

    let mut anim_b = TranslationAnimation::new(ids.clone(), Vec3::NEG_Y, 0.5, 4, Easing::Linear);
    while !anim_b.step(&mut b).is_done() {}
    b.translate(ids[0], nudge);

    assert!((position(&a, ids[0]) - position(&b, ids[0])).length() < 1e-6);
}
