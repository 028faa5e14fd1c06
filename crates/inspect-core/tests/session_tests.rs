use glam::{EulerRot, Quat, Vec2, Vec3};
use inspect_core::transform::yaw_pitch_roll;
use inspect_core::{
    Camera, Collider, DetailPointRegistry, DisplayUpdate, InspectSpec, InspectionSession,
    InteractionError, ObjectSpec, PanelCoordinator, PanelState, PanelWiring, PointVisibility,
    Scene, SessionSettings, SubjectId,
};

struct Fixture {
    scene: Scene,
    points: DetailPointRegistry,
    panels: PanelCoordinator,
    session: InspectionSession,
    out: Vec<DisplayUpdate>,
}

fn fixture(settings: SessionSettings) -> Fixture {
    Fixture {
        scene: Scene::new(),
        points: DetailPointRegistry::new(),
        panels: PanelCoordinator::new(PanelWiring::default()),
        session: InspectionSession::new(settings),
        out: Vec::new(),
    }
}

fn settings(distance: f32, height: f32) -> SessionSettings {
    SessionSettings {
        inspect_distance: distance,
        height_offset: height,
        rotation_speed: 100.0,
    }
}

fn camera() -> Camera {
    Camera::looking(Vec3::new(0.0, 1.6, 0.0), Vec3::Z)
}

impl Fixture {
    fn spawn(&mut self, spec: ObjectSpec) -> SubjectId {
        spec.spawn(&mut self.scene, &mut self.points)
    }

    fn start(&mut self, id: SubjectId, cam: &Camera) -> Result<(), InteractionError> {
        self.session.start(
            id,
            cam,
            &mut self.scene,
            &mut self.points,
            &mut self.panels,
            &mut self.out,
        )
    }

    fn end(&mut self) -> Result<(), InteractionError> {
        self.session
            .end(&mut self.scene, &mut self.points, &mut self.panels, &mut self.out)
    }
}

fn statue() -> ObjectSpec {
    ObjectSpec::new("Statue", "Marble, 2nd century")
        .at(Vec3::new(0.0, 0.0, 5.0))
        .collider(Collider::cuboid(Vec3::new(0.3, 1.0, 0.3)))
        .inspectable(
            InspectSpec::new("A marble statue")
                .pivot(Vec3::new(0.0, 0.5, 0.0))
                .point(1, "Head", Vec3::new(0.0, 0.9, 0.2))
                .point(2, "Base", Vec3::new(0.0, -0.9, 0.2)),
        )
}

#[test]
fn start_places_pivot_in_front_of_camera() {
    let mut f = fixture(settings(2.0, 0.3));
    let id = f.spawn(statue());
    f.start(id, &camera()).unwrap();

    // camera.position + forward * 2 + up * 0.3
    let expected = Vec3::new(0.0, 1.6, 0.0) + Vec3::Z * 2.0 + Vec3::Y * 0.3;
    let pivot = f.scene.get(id).unwrap().pivot_world().unwrap();
    assert!(
        pivot.abs_diff_eq(expected, 1e-5),
        "pivot {:?} expected {:?}",
        pivot,
        expected
    );
    // Origin sits one pivot offset below the anchor.
    let origin = f.scene.get(id).unwrap().transform.position;
    assert!(origin.abs_diff_eq(expected - Vec3::new(0.0, 0.5, 0.0), 1e-5));
}

#[test]
fn start_turns_subject_to_face_camera() {
    let mut f = fixture(settings(2.0, 0.0));
    let id = f.spawn(statue());
    f.start(id, &camera()).unwrap();

    let forward = f.scene.get(id).unwrap().transform.forward();
    // Identity pitch/roll are kept, so the forward axis is horizontal and
    // points back at the camera.
    assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-5), "forward {:?}", forward);
}

#[test]
fn start_preserves_pitch_and_roll() {
    let mut f = fixture(settings(2.0, 0.0));
    let original = Quat::from_euler(EulerRot::YXZ, 0.4, 0.3, -0.2);
    let id = f.spawn(statue().rotated(original));
    f.start(id, &camera()).unwrap();

    let (_, pitch, roll) = yaw_pitch_roll(f.scene.get(id).unwrap().transform.rotation);
    assert!((pitch - 0.3).abs() < 1e-4, "pitch {}", pitch);
    assert!((roll + 0.2).abs() < 1e-4, "roll {}", roll);
}

#[test]
fn start_near_vertical_orientation_stays_finite() {
    for pitch_deg in [85.0_f32, 89.9, 90.0, -90.0] {
        let mut f = fixture(settings(2.0, 0.0));
        let original = Quat::from_euler(EulerRot::YXZ, 0.7, pitch_deg.to_radians(), 0.3);
        let id = f.spawn(statue().rotated(original));
        let before = f.scene.get(id).unwrap().transform;
        f.start(id, &camera()).unwrap();

        let rot = f.scene.get(id).unwrap().transform.rotation;
        assert!(rot.is_finite(), "pitch {} gave {:?}", pitch_deg, rot);
        assert!(rot.is_normalized());
        let (_, pitch, _) = yaw_pitch_roll(rot);
        assert!(
            (pitch - pitch_deg.to_radians()).abs() < 1e-2,
            "pitch {} drifted to {}",
            pitch_deg,
            pitch.to_degrees()
        );

        f.end().unwrap();
        assert_eq!(f.scene.get(id).unwrap().transform, before);
    }
}

#[test]
fn start_then_end_restores_exact_transform() {
    let mut f = fixture(settings(2.0, 0.3));
    let original_rot = Quat::from_euler(EulerRot::YXZ, 1.1, -0.35, 0.05);
    let id = f.spawn(statue().at(Vec3::new(3.25, 0.125, 7.5)).rotated(original_rot));
    let before = f.scene.get(id).unwrap().transform;

    f.start(id, &camera()).unwrap();
    for i in 0..10 {
        let delta = Vec2::new(13.0 - i as f32 * 3.0, 7.0 + i as f32);
        f.session.rotate(delta, 0.016, &mut f.scene).unwrap();
    }
    assert_ne!(f.scene.get(id).unwrap().transform, before);
    f.end().unwrap();

    // Bitwise equal, not approximately equal.
    let after = f.scene.get(id).unwrap().transform;
    assert_eq!(after.position.to_array(), before.position.to_array());
    assert_eq!(after.rotation.to_array(), before.rotation.to_array());
}

#[test]
fn rotation_keeps_pivot_fixed() {
    let mut f = fixture(settings(2.0, 0.3));
    let id = f.spawn(statue());
    f.start(id, &camera()).unwrap();
    let pivot_before = f.scene.get(id).unwrap().pivot_world().unwrap();

    f.session
        .rotate(Vec2::new(40.0, -25.0), 0.02, &mut f.scene)
        .unwrap();
    f.session
        .rotate(Vec2::new(-10.0, 60.0), 0.02, &mut f.scene)
        .unwrap();

    let object = f.scene.get(id).unwrap();
    assert!(object.pivot_world().unwrap().abs_diff_eq(pivot_before, 1e-4));
    // Origin is off the pivot, so it must have swung around it.
    assert!(!object
        .transform
        .position
        .abs_diff_eq(pivot_before - Vec3::new(0.0, 0.5, 0.0), 1e-3));
}

#[test]
fn rotation_angles_follow_drag() {
    let mut f = fixture(settings(2.0, 0.0));
    let id = f.spawn(statue());
    f.start(id, &camera()).unwrap();

    // Horizontal drag is pure yaw of -dx * speed * dt.
    f.session
        .rotate(Vec2::new(10.0, 0.0), 0.1, &mut f.scene)
        .unwrap();
    let active = f.session.active().unwrap();
    assert!((active.accumulated_yaw + 100.0).abs() < 1e-4);
    assert_eq!(active.accumulated_pitch, 0.0);

    // Vertical drag is pure pitch of dy * speed * dt.
    f.session
        .rotate(Vec2::new(0.0, 5.0), 0.1, &mut f.scene)
        .unwrap();
    let active = f.session.active().unwrap();
    assert!((active.accumulated_pitch - 50.0).abs() < 1e-4);
}

#[test]
fn start_while_active_is_rejected() {
    let mut f = fixture(settings(2.0, 0.0));
    let a = f.spawn(statue());
    let b = f.spawn(statue().at(Vec3::new(2.0, 0.0, 6.0)));
    f.start(a, &camera()).unwrap();
    let b_before = f.scene.get(b).unwrap().transform;

    let err = f.start(b, &camera()).unwrap_err();
    assert!(matches!(err, InteractionError::InvalidStateTransition { .. }));
    assert_eq!(f.session.subject(), Some(a));
    assert_eq!(f.scene.get(b).unwrap().transform, b_before);
}

#[test]
fn end_while_idle_changes_nothing() {
    let mut f = fixture(settings(2.0, 0.0));
    f.spawn(statue());
    f.panels.show_location("Sala 2", &mut f.out).unwrap();
    let flag = f.session.flag_reader();
    f.out.clear();

    let err = f.end().unwrap_err();
    assert!(matches!(err, InteractionError::InvalidStateTransition { .. }));
    assert_eq!(f.panels.active(), PanelState::Location);
    assert!(!flag.is_inspecting());
    assert!(f.out.is_empty());
}

#[test]
fn flag_tracks_session_lifecycle() {
    let mut f = fixture(settings(2.0, 0.0));
    let id = f.spawn(statue());
    let flag = f.session.flag_reader();
    assert!(!flag.is_inspecting());

    f.start(id, &camera()).unwrap();
    assert!(flag.is_inspecting());
    assert_eq!(f.panels.active(), PanelState::Object);

    f.end().unwrap();
    assert!(!flag.is_inspecting());
    assert_eq!(f.panels.active(), PanelState::Normal);
}

#[test]
fn start_and_end_toggle_detail_points() {
    let mut f = fixture(settings(2.0, 0.0));
    let id = f.spawn(statue());
    let ids = f.scene.get(id).unwrap().point_ids().to_vec();
    assert_eq!(ids.len(), 2);
    for p in &ids {
        assert_eq!(f.points.get(*p).unwrap().visibility(), PointVisibility::Hidden);
    }

    f.start(id, &camera()).unwrap();
    for p in &ids {
        assert_eq!(f.points.get(*p).unwrap().visibility(), PointVisibility::Visible);
    }
    f.points.select(ids[0], &mut f.out).unwrap();

    f.end().unwrap();
    for p in &ids {
        assert_eq!(f.points.get(*p).unwrap().visibility(), PointVisibility::Hidden);
    }
    assert_eq!(f.points.selected(), None);
}

#[test]
fn non_inspectable_target_cannot_start() {
    let mut f = fixture(settings(2.0, 0.0));
    let id = f.spawn(ObjectSpec::new("Bench", "Oak").at(Vec3::new(0.0, 0.0, 3.0)));
    let err = f.start(id, &camera()).unwrap_err();
    assert_eq!(err, InteractionError::NotInspectable("Bench".to_string()));
    assert!(!f.session.is_active());
}

#[test]
fn rotate_while_idle_is_rejected() {
    let mut f = fixture(settings(2.0, 0.0));
    f.spawn(statue());
    let err = f
        .session
        .rotate(Vec2::new(5.0, 5.0), 0.016, &mut f.scene)
        .unwrap_err();
    assert!(matches!(err, InteractionError::InvalidStateTransition { .. }));
}

#[test]
fn detail_point_from_other_subject_is_not_routed() {
    let mut f = fixture(settings(2.0, 0.0));
    let a = f.spawn(statue());
    let b = f.spawn(statue().at(Vec3::new(4.0, 0.0, 4.0)));
    f.start(a, &camera()).unwrap();

    let err = f
        .session
        .show_detail_point(b, 1, "Head", &mut f.panels, &mut f.out)
        .unwrap_err();
    assert!(matches!(err, InteractionError::InvalidStateTransition { .. }));
    assert_eq!(f.panels.active(), PanelState::Object);

    f.session
        .show_detail_point(a, 1, "Head", &mut f.panels, &mut f.out)
        .unwrap();
    assert_eq!(f.panels.active(), PanelState::PartDetail);
}
