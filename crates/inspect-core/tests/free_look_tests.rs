use glam::{Vec2, Vec3};
use inspect_core::{
    Camera, FreeLook, InspectionFlag, PointerEvent, PointerPhase, PointerSource, ReticleConfig,
    ReticleGate, ReticleMode, Viewport,
};

const VP: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn gate(mode: ReticleMode) -> ReticleGate {
    ReticleGate::new(ReticleConfig { radius: 50.0, mode })
}

fn ev(phase: PointerPhase, pos: Vec2, source: PointerSource) -> PointerEvent {
    PointerEvent {
        phase,
        position: pos,
        source,
    }
}

#[test]
fn drag_from_reticle_does_not_look_when_gated() {
    let flag = InspectionFlag::new();
    let mut look = FreeLook::new(2.0, flag.reader());
    let g = gate(ReticleMode::Gated);
    let c = VP.center();

    look.update(Some(&ev(PointerPhase::Begin, c, PointerSource::Touch)), &g, VP);
    assert!(!look.update(
        Some(&ev(PointerPhase::Move, c + Vec2::new(25.0, 0.0), PointerSource::Touch)),
        &g,
        VP
    ));
    assert_eq!(look.yaw_deg, 0.0);
}

#[test]
fn drag_outside_reticle_looks_when_gated() {
    let flag = InspectionFlag::new();
    let mut look = FreeLook::new(2.0, flag.reader());
    let g = gate(ReticleMode::Gated);
    let start = Vec2::new(50.0, 50.0);

    look.update(Some(&ev(PointerPhase::Begin, start, PointerSource::Touch)), &g, VP);
    // The drag may cross the reticle once it has started outside.
    assert!(look.update(
        Some(&ev(PointerPhase::Move, VP.center(), PointerSource::Touch)),
        &g,
        VP
    ));
    // Right and down from the top-left corner: turn right, look down.
    assert!(look.yaw_deg < 0.0);
    assert!(look.pitch_deg > 0.0);
    let f = look.forward();
    assert!(f.x < 0.0 && f.y < 0.0, "{:?}", f);
}

#[test]
fn pitch_is_clamped_short_of_vertical() {
    let flag = InspectionFlag::new();
    let mut look = FreeLook::new(2.0, flag.reader());
    let g = gate(ReticleMode::Free);
    let mut pos = Vec2::new(400.0, 6000.0);
    look.update(Some(&ev(PointerPhase::Begin, pos, PointerSource::Pointer)), &g, VP);
    for _ in 0..50 {
        pos.y -= 100.0;
        look.update(Some(&ev(PointerPhase::Move, pos, PointerSource::Pointer)), &g, VP);
    }
    assert_eq!(look.pitch_deg, -89.0);

    let mut camera = Camera::looking(Vec3::ZERO, Vec3::Z);
    look.apply(&mut camera);
    let f = camera.forward();
    assert!(f.is_finite());
    assert!(f.y > 0.99);
    assert!(camera.right().is_finite());
}

#[test]
fn forward_follows_yaw() {
    let flag = InspectionFlag::new();
    let mut look = FreeLook::new(1.0, flag.reader());
    assert!(look.forward().abs_diff_eq(Vec3::Z, 1e-6));
    look.yaw_deg = 90.0;
    assert!(look.forward().abs_diff_eq(Vec3::X, 1e-6));
}

#[test]
fn no_pointer_no_change() {
    let flag = InspectionFlag::new();
    let mut look = FreeLook::new(2.0, flag.reader());
    assert!(!look.update(None, &gate(ReticleMode::Free), VP));
}
