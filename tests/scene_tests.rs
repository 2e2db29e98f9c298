mod support;

use beltloop::{
    BeltError,
    float_types::Real,
    motion::DriveMotion,
    placement::ToothPlacement,
    scene::{Channel, RecordingHost, SceneCommand, SceneHost, SceneOptions, assemble_scene},
    sprocket::Sprocket,
};
use geo::Polygon as GeoPolygon;
use nalgebra::Point2;

use crate::support::reference_layout;

#[test]
fn commands_arrive_in_build_order() {
    let layout = reference_layout();
    let mut host = RecordingHost::new();
    assemble_scene(&mut host, &layout, &SceneOptions::default()).unwrap();

    let cmds = &host.commands;
    // clear, path, teeth, two sprockets, 2 keys × 3 channels, 3 materials
    assert_eq!(cmds.len(), 1 + 1 + 1 + 2 + 6 + 3);
    assert_eq!(cmds[0], SceneCommand::ClearScene);

    match &cmds[1] {
        SceneCommand::PathCurve { name, points } => {
            assert_eq!(name, "BeltPath");
            assert_eq!(points.len(), layout.path.len());
        },
        other => panic!("expected the path curve, got {other:?}"),
    }
    match &cmds[2] {
        SceneCommand::ToothArray { name, curve, placements } => {
            assert_eq!(name, "BeltTeeth");
            assert_eq!(curve, "BeltPath");
            assert_eq!(placements.len(), 150);
        },
        other => panic!("expected the tooth array, got {other:?}"),
    }
    match (&cmds[3], &cmds[4]) {
        (
            SceneCommand::Sprocket { name: a, teeth: ta, outline_points: pa, .. },
            SceneCommand::Sprocket { name: b, teeth: tb, .. },
        ) => {
            assert_eq!((a.as_str(), b.as_str()), ("SprocketA", "SprocketB"));
            assert_eq!((*ta, *tb), (94, 47));
            assert_eq!(*pa, 8 * 94 + 1);
        },
        other => panic!("expected two sprockets, got {other:?}"),
    }

    let keys: Vec<_> = cmds[5..11]
        .iter()
        .map(|c| match c {
            SceneCommand::Keyframe { object, channel, frame, .. } => (object.as_str(), *channel, *frame),
            other => panic!("expected a keyframe, got {other:?}"),
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("BeltTeeth", Channel::PathOffset, 1),
            ("SprocketA", Channel::Rotation, 1),
            ("SprocketB", Channel::Rotation, 1),
            ("BeltTeeth", Channel::PathOffset, 250),
            ("SprocketA", Channel::Rotation, 250),
            ("SprocketB", Channel::Rotation, 250),
        ]
    );

    let materials: Vec<_> = cmds[11..]
        .iter()
        .map(|c| match c {
            SceneCommand::Material { object, material } => (object.as_str(), material.as_str()),
            other => panic!("expected a material, got {other:?}"),
        })
        .collect();
    assert_eq!(
        materials,
        vec![("BeltTeeth", "Belt"), ("SprocketA", "Sprocket"), ("SprocketB", "Sprocket")]
    );
    assert_eq!(host.objects(), ["BeltPath", "BeltTeeth", "SprocketA", "SprocketB"]);
}

#[test]
fn final_keyframes_carry_one_loop_of_travel() {
    let layout = reference_layout();
    let mut host = RecordingHost::new();
    assemble_scene(&mut host, &layout, &SceneOptions::default()).unwrap();

    let last_values: Vec<Real> = host.commands[8..11]
        .iter()
        .filter_map(|c| match c {
            SceneCommand::Keyframe { value, .. } => Some(*value),
            _ => None,
        })
        .collect();
    assert_eq!(last_values.len(), 3);
    assert_eq!(last_values[0], 1500.0);
    assert!((last_values[1] - 10.0).abs() < 1e-12);
    assert!((last_values[2] - 20.0).abs() < 1e-12);
}

#[test]
fn assembling_twice_starts_from_a_clear_scene() {
    let layout = reference_layout();
    let mut host = RecordingHost::new();
    let options = SceneOptions::default();
    assemble_scene(&mut host, &layout, &options).unwrap();
    assemble_scene(&mut host, &layout, &options).unwrap();
    assert_eq!(host.objects().len(), 4);
}

#[test]
fn duplicate_object_names_are_a_host_error() {
    let layout = reference_layout();
    let mut host = RecordingHost::new();
    let options = SceneOptions {
        sprocket_b_name: "SprocketA".to_string(),
        ..SceneOptions::default()
    };
    let err = assemble_scene(&mut host, &layout, &options).unwrap_err();
    match err {
        BeltError::Host { operation, message } => {
            assert_eq!(operation, "add_sprocket");
            assert!(message.contains("SprocketA"));
        },
        other => panic!("unexpected error {other:?}"),
    }
    // nothing after the failing call was issued
    assert!(!host.commands.iter().any(|c| matches!(c, SceneCommand::Keyframe { .. })));
}

#[test]
fn invalid_motion_fails_before_touching_the_host() {
    let layout = reference_layout();
    let mut host = RecordingHost::new();
    let options = SceneOptions {
        motion: DriveMotion {
            frame_start: 10,
            frame_end: 10,
            travel: None,
        },
        ..SceneOptions::default()
    };
    assert!(matches!(
        assemble_scene(&mut host, &layout, &options),
        Err(BeltError::Configuration(_))
    ));
    assert!(host.commands.is_empty());
}

/// Host that accepts everything except materials.
#[derive(Default)]
struct NoMaterials {
    calls: usize,
}

impl SceneHost for NoMaterials {
    fn clear_scene(&mut self) -> Result<(), BeltError> {
        self.calls += 1;
        Ok(())
    }

    fn add_path_curve(&mut self, _name: &str, _points: &[Point2<Real>]) -> Result<(), BeltError> {
        self.calls += 1;
        Ok(())
    }

    fn add_tooth_array(&mut self, _name: &str, _curve: &str, _placements: &[ToothPlacement]) -> Result<(), BeltError> {
        self.calls += 1;
        Ok(())
    }

    fn add_sprocket(&mut self, _name: &str, _sprocket: &Sprocket, _outline: &GeoPolygon<Real>) -> Result<(), BeltError> {
        self.calls += 1;
        Ok(())
    }

    fn insert_keyframe(&mut self, _object: &str, _channel: Channel, _frame: i32, _value: Real) -> Result<(), BeltError> {
        self.calls += 1;
        Ok(())
    }

    fn assign_material(&mut self, object: &str, _material: &str) -> Result<(), BeltError> {
        Err(BeltError::Host {
            operation: "assign_material",
            message: format!("no material slot on `{object}`"),
        })
    }
}

#[test]
fn host_failures_propagate_unchanged() {
    let layout = reference_layout();
    let mut host = NoMaterials::default();
    let err = assemble_scene(&mut host, &layout, &SceneOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "host rejected `assign_material`: no material slot on `BeltTeeth`");
    // clear, path, teeth, two sprockets, six keyframes
    assert_eq!(host.calls, 11);
}
