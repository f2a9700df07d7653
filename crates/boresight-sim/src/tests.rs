//! Tests for the frame engine, command handling, and snapshots.

use boresight_core::commands::PlayerCommand;
use boresight_core::config::SceneConfig;
use boresight_core::enums::{Control, PoleAngle};
use boresight_core::types::{Orientation, Position3};

use crate::engine::SceneEngine;

// ---- Determinism ----

#[test]
fn test_determinism_same_commands() {
    let mut engine_a = SceneEngine::new(SceneConfig::default());
    let mut engine_b = SceneEngine::new(SceneConfig::default());

    let commands = [
        PlayerCommand::SetControl {
            control: Control::YawIncrease,
            held: true,
        },
        PlayerCommand::SetControl {
            control: Control::TargetPosX,
            held: true,
        },
        PlayerCommand::SetControl {
            control: Control::TargetNegX,
            held: true,
        },
    ];
    engine_a.queue_commands(commands.clone());
    engine_b.queue_commands(commands);

    for _ in 0..300 {
        let json_a = serde_json::to_string(&engine_a.step()).unwrap();
        let json_b = serde_json::to_string(&engine_b.step()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with identical input");
    }
}

#[test]
fn test_idle_frames_are_identical() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let first = engine.step();
    let second = engine.step();
    assert_eq!(first.output, second.output);
    assert_eq!(second.time.frame, 2);
}

// ---- Initial scene ----

#[test]
fn test_initial_snapshot_matches_scenario() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let snap = engine.frame(0.0);

    assert_eq!(snap.observer, Position3::new(0.0, 0.0, 2.0));
    assert_eq!(snap.target, Position3::new(8.0, 6.0, 4.0));
    assert!((snap.range - 104f64.sqrt()).abs() < 1e-12);
    assert!((snap.output.angles.j - 0.641_913).abs() < 1e-4);
    assert!((snap.output.angles.G - 5.644_571).abs() < 1e-4);
    assert_eq!(snap.pole_angle, PoleAngle::Reference);
    assert_eq!(snap.hud_rings.len(), 3);
    assert_eq!(snap.readout.len(), 2);
    assert!(snap.readout[0].starts_with("AzT=53.1 deg"));
    assert!(!snap.paused);
}

// ---- Controls ----

#[test]
fn test_held_control_integrates_per_frame() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::ObserverPosZ,
        held: true,
    });
    for _ in 0..60 {
        engine.frame(1.0 / 60.0);
    }
    // 5 units/s for one second
    assert!((engine.observer().z - 7.0).abs() < 1e-9);

    engine.queue_command(PlayerCommand::SetControl {
        control: Control::ObserverPosZ,
        held: false,
    });
    engine.frame(1.0);
    assert!((engine.observer().z - 7.0).abs() < 1e-9);
}

#[test]
fn test_roll_control_swings_marker_at_constant_radius() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let start = engine.frame(0.0);
    let center = start.hud_center;
    let radius = start.output.hud.distance_to(&center);

    engine.queue_command(PlayerCommand::SetControl {
        control: Control::RollIncrease,
        held: true,
    });
    let snap = engine.frame(0.5);
    assert!((snap.output.hud.distance_to(&center) - radius).abs() < 1e-9);
    assert!((snap.output.hud.x - start.output.hud.x).abs() > 1.0);
    assert_eq!(snap.output.angles, start.output.angles);
}

#[test]
fn test_invalid_dt_counts_as_zero() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::TargetPosY,
        held: true,
    });
    engine.frame(f64::NAN);
    engine.frame(-1.0);
    engine.frame(f64::INFINITY);
    assert_eq!(engine.target(), SceneConfig::default().target);
    assert_eq!(engine.time().elapsed_secs, 0.0);
}

// ---- Placement and reset ----

#[test]
fn test_target_on_nose_with_included_closure() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let orientation = Orientation::from_degrees(-35.0, 12.0, 70.0);
    let observer = Position3::new(3.0, -4.0, 1.0);
    let fwd = boresight_geometry::forward_vector(orientation.yaw, orientation.pitch, orientation.roll);

    engine.queue_commands([
        PlayerCommand::SetPoleAngle {
            pole_angle: PoleAngle::Included,
        },
        PlayerCommand::SetOrientation { orientation },
        PlayerCommand::SetObserver { position: observer },
        PlayerCommand::SetTarget {
            position: observer.offset(fwd * 12.0),
        },
    ]);
    let snap = engine.frame(0.0);
    assert!(snap.output.angles.j < 1e-6);
    assert!(snap.output.sine_rule_guarded);
    assert!(snap.output.hud.distance_to(&snap.hud_center) < 1e-3);
    assert_eq!(snap.pole_angle, PoleAngle::Included);
}

#[test]
fn test_reset_restores_initial_scene() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let initial = engine.frame(0.0);

    engine.queue_commands([
        PlayerCommand::SetTarget {
            position: Position3::new(-1.0, -1.0, -1.0),
        },
        PlayerCommand::SetPoleAngle {
            pole_angle: PoleAngle::Included,
        },
        PlayerCommand::SetControl {
            control: Control::PitchIncrease,
            held: true,
        },
    ]);
    engine.frame(0.25);
    engine.queue_command(PlayerCommand::Reset);
    let snap = engine.frame(0.25);

    assert_eq!(snap.target, initial.target);
    assert_eq!(snap.orientation, initial.orientation);
    assert_eq!(snap.pole_angle, PoleAngle::Reference);
    assert!(engine.scene().held.is_empty());
}

// ---- Pause ----

#[test]
fn test_pause_resume() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::YawIncrease,
        held: true,
    });
    engine.step();

    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.step();
    assert!(snap.paused);
    let paused_frame = snap.time.frame;
    let paused_yaw = snap.orientation.yaw;

    let snap = engine.step();
    assert_eq!(snap.time.frame, paused_frame);
    assert_eq!(snap.orientation.yaw, paused_yaw);

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.step();
    assert!(!snap.paused);
    assert!(snap.time.frame > paused_frame);
    assert!(snap.orientation.yaw > paused_yaw);
}

#[test]
fn test_angles_not_wrapped() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::YawIncrease,
        held: true,
    });
    // 45 deg/s for 10 s = 450 deg
    engine.frame(10.0);
    let expected = 470f64.to_radians();
    assert!((engine.orientation().yaw - expected).abs() < 1e-9);
}
