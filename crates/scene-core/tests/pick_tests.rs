use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{
    Color, Cursor, HighlightState, Material, Mesh, ObjectId, PickState, Ray, Scene, SceneObject,
    Transition, HIGHLIGHT_EMISSIVE_HEX,
};

struct Fixture {
    scene: Scene,
    a: ObjectId,
    b: ObjectId,
}

fn fixture() -> Fixture {
    let mut scene = Scene::new();
    let mut mat_a = Material::lambert(Color::from_hex(0x336699));
    mat_a.emissive = Color::from_hex(0x111111);
    let mut mat_b = Material::lambert(Color::from_hex(0x996633));
    mat_b.emissive = Color::from_hex(0x222222);
    let a = scene.add(SceneObject::new(Mesh::cuboid(2.0, 2.0, 2.0), mat_a).named("a"));
    let b = scene.add(
        SceneObject::new(Mesh::cuboid(2.0, 2.0, 2.0), mat_b)
            .named("b")
            .at(Vec3::new(5.0, 0.0, 0.0)),
    );
    Fixture { scene, a, b }
}

fn ray_at_x(x: f32) -> Ray {
    Ray::new(Vec3::new(x, 0.0, 10.0), Vec3::NEG_Z)
}

fn highlight() -> Color {
    Color::from_hex(HIGHLIGHT_EMISSIVE_HEX)
}

#[test]
fn hover_a_then_b_then_nothing_walks_expected_states() {
    let Fixture { mut scene, a, b } = fixture();
    let mut pick = PickState::default();
    assert_eq!(pick.state(), HighlightState::Idle);

    let t1 = pick.hover(&mut scene, &ray_at_x(0.0));
    assert_eq!(t1, Some(Transition { from: None, to: Some(a) }));
    assert_eq!(
        pick.state(),
        HighlightState::Highlighted {
            object: a,
            saved_emissive: Color::from_hex(0x111111)
        }
    );
    assert_eq!(scene.emissive(a), Some(highlight()));

    let t2 = pick.hover(&mut scene, &ray_at_x(5.0));
    assert_eq!(t2, Some(Transition { from: Some(a), to: Some(b) }));
    assert_eq!(scene.emissive(a), Some(Color::from_hex(0x111111)));
    assert_eq!(scene.emissive(b), Some(highlight()));

    let t3 = pick.hover(&mut scene, &ray_at_x(20.0));
    assert_eq!(t3, Some(Transition { from: Some(b), to: None }));
    assert_eq!(pick.state(), HighlightState::Idle);
    assert_eq!(scene.emissive(b), Some(Color::from_hex(0x222222)));
}

#[test]
fn cursor_follows_transitions() {
    let Fixture { mut scene, .. } = fixture();
    let mut pick = PickState::default();
    let enter = pick.hover(&mut scene, &ray_at_x(0.0)).expect("enter");
    assert_eq!(enter.cursor(), Cursor::Interactive);
    let leave = pick.hover(&mut scene, &ray_at_x(-20.0)).expect("leave");
    assert_eq!(leave.cursor(), Cursor::Default);
}

#[test]
fn hovering_same_object_is_a_no_op() {
    let Fixture { mut scene, a, .. } = fixture();
    let mut pick = PickState::default();
    pick.hover(&mut scene, &ray_at_x(0.0));
    let before = pick.state();
    for dx in [0.1, -0.2, 0.3] {
        assert_eq!(pick.hover(&mut scene, &ray_at_x(dx)), None);
    }
    assert_eq!(pick.state(), before);
    assert_eq!(scene.emissive(a), Some(highlight()));
}

#[test]
fn empty_space_while_idle_reports_nothing() {
    let Fixture { mut scene, .. } = fixture();
    let mut pick = PickState::default();
    assert_eq!(pick.hover(&mut scene, &ray_at_x(40.0)), None);
    assert_eq!(pick.state(), HighlightState::Idle);
}

#[test]
fn nearest_object_wins_when_several_are_hit() {
    let mut scene = Scene::new();
    let far = scene.add(SceneObject::new(
        Mesh::cuboid(2.0, 2.0, 2.0),
        Material::lambert(Color::WHITE),
    ));
    let near = scene.add(
        SceneObject::new(Mesh::cuboid(2.0, 2.0, 2.0), Material::lambert(Color::WHITE))
            .at(Vec3::new(0.0, 0.0, 4.0)),
    );
    let mut pick = PickState::default();
    let t = pick.hover(&mut scene, &ray_at_x(0.0)).expect("hit");
    assert_eq!(t.to, Some(near));
    assert_ne!(t.to, Some(far));
}

#[test]
fn press_recolors_selection_without_changing_state() {
    let Fixture { mut scene, a, .. } = fixture();
    let mut pick = PickState::default();
    let mut rng = StdRng::seed_from_u64(7);
    pick.hover(&mut scene, &ray_at_x(0.0));
    let state = pick.state();

    let color = pick.press(&mut scene, &mut rng).expect("selection");
    assert_eq!(pick.state(), state);
    assert_eq!(pick.selected(), Some(a));
    assert_eq!(scene.emissive(a), Some(color));
    assert!(color.to_hex() < 0x00ff00);
    assert_eq!(color.r, 0.0);

    // leaving still restores the pre-highlight value
    pick.hover(&mut scene, &ray_at_x(40.0));
    assert_eq!(scene.emissive(a), Some(Color::from_hex(0x111111)));
}

#[test]
fn press_while_idle_does_nothing() {
    let Fixture { mut scene, a, b } = fixture();
    let mut pick = PickState::default();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pick.press(&mut scene, &mut rng), None);
    assert_eq!(scene.emissive(a), Some(Color::from_hex(0x111111)));
    assert_eq!(scene.emissive(b), Some(Color::from_hex(0x222222)));
}

#[test]
fn re_entering_does_not_capture_highlight_as_saved_value() {
    let Fixture { mut scene, a, b } = fixture();
    let mut pick = PickState::default();
    for _ in 0..3 {
        pick.update(&mut scene, Some(a));
        pick.update(&mut scene, Some(b));
    }
    pick.clear(&mut scene);
    assert_eq!(scene.emissive(a), Some(Color::from_hex(0x111111)));
    assert_eq!(scene.emissive(b), Some(Color::from_hex(0x222222)));
}

#[test]
fn unknown_object_id_falls_back_to_idle() {
    let Fixture { mut scene, a, .. } = fixture();
    let mut pick = PickState::default();
    pick.update(&mut scene, Some(a));
    let t = pick.update(&mut scene, Some(ObjectId(99)));
    assert_eq!(t, Some(Transition { from: Some(a), to: None }));
    assert_eq!(scene.emissive(a), Some(Color::from_hex(0x111111)));
}
