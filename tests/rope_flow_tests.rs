use glam::Vec3;
use rope_swing::{CharacterFrame, PolylineBuffer, RopeController, RopeOptions, RopeScene};

fn options() -> RopeOptions {
    RopeOptions {
        segments: 20,
        rope_sag: 1.0,
        swing_speed: 10.0,
        swing_radius: 5.0,
        initial_phase: 0.0,
    }
}

#[test]
fn test_frame_loop_keeps_endpoints_on_anchors() {
    let mut rope = RopeController::new(options()).expect("Optionen sollten gültig sein");
    let mut sink = PolylineBuffer::new();

    for frame_index in 0..240 {
        let time = frame_index as f32 / 60.0;
        let bob = (time * 2.0).sin() * 0.2;
        let left = Vec3::new(-0.5, 1.5 + bob, 0.0);
        let right = Vec3::new(0.5, 1.5 + bob, 0.0);
        let scene = RopeScene::new(left, right, CharacterFrame::IDENTITY);

        rope.tick(1.0 / 60.0, &scene, &mut sink);

        assert_eq!(sink.len(), 20);
        assert_eq!(sink.positions()[0], left);
        assert_eq!(sink.positions()[19], right);
    }
}

#[test]
fn test_missing_references_are_self_healing() {
    let mut rope = RopeController::new(options()).unwrap();
    let mut sink = PolylineBuffer::new();
    let complete = RopeScene::new(
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        CharacterFrame::IDENTITY,
    );

    rope.tick(0.01, &complete, &mut sink);
    let angle_after_first = rope.angle();
    assert_eq!(sink.len(), 20);

    // Referenz fällt weg: Winkel friert ein, Senke behält den alten Stand
    let incomplete = RopeScene {
        left_hold: None,
        ..complete.clone()
    };
    rope.tick(0.01, &incomplete, &mut sink);
    assert_eq!(rope.angle(), angle_after_first);

    // Referenz wieder da: Ticks laufen normal weiter
    rope.tick(0.01, &complete, &mut sink);
    assert!(rope.angle() > angle_after_first);
}

#[test]
fn test_animation_event_resyncs_cycle() {
    let mut rope = RopeController::new(options()).unwrap();
    let mut sink = PolylineBuffer::new();
    let scene = RopeScene::new(
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        CharacterFrame::IDENTITY,
    );

    for _ in 0..30 {
        rope.tick(1.0 / 60.0, &scene, &mut sink);
    }

    // Animations-Event im selben Frame vor dem Tick
    rope.set_phase(0.5);
    rope.tick(1.0 / 60.0, &scene, &mut sink);

    let expected = std::f32::consts::PI + 10.0 / 60.0;
    assert!((rope.angle() - expected).abs() < 1e-4);
}

#[test]
fn test_worked_example_full_flow() {
    let mut rope = RopeController::new(RopeOptions {
        segments: 3,
        swing_radius: 5.0,
        ..options()
    })
    .unwrap();
    let mut sink = PolylineBuffer::new();
    let scene = RopeScene::new(
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        CharacterFrame::IDENTITY,
    );

    // dt = 0 hält den Winkel auf der Startphase 0
    rope.tick(0.0, &scene, &mut sink);

    assert_eq!(sink.positions()[0], Vec3::ZERO);
    assert!((sink.positions()[1] - Vec3::new(5.0, 2.0, 0.0)).length() < 1e-4);
    assert_eq!(sink.positions()[2], Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn test_scene_completeness_probe() {
    let complete = RopeScene::new(Vec3::ZERO, Vec3::X, CharacterFrame::IDENTITY);
    assert!(complete.is_complete());

    let incomplete = RopeScene {
        character: None,
        ..complete
    };
    assert!(!incomplete.is_complete());
}
