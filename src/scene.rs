//! Driving a 3D host application
//!
//! The host owns the scene graph and looks objects up by name. All of that
//! lives behind [`SceneHost`]; [`assemble_scene`] only decides what to build
//! and in which order, from a finished [`BeltLayout`].

use crate::belt::BeltLayout;
use crate::errors::BeltError;
use crate::float_types::Real;
use crate::motion::DriveMotion;
use crate::placement::{ToothPlacement, place_evenly};
use crate::sprocket::{Sprocket, sprockets_for};
use geo::Polygon as GeoPolygon;
use nalgebra::Point2;
use tracing::{debug, info_span};

/// Animated property of a scene object. Keys are interpolated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Offset of the tooth array along its path curve
    PathOffset,
    /// Rotation about the axis normal to the belt plane
    Rotation,
}

/// Operations the host application must provide.
pub trait SceneHost {
    /// Removes every object and orphaned data block.
    fn clear_scene(&mut self) -> Result<(), BeltError>;

    /// Creates a closed curve object through `points`.
    fn add_path_curve(&mut self, name: &str, points: &[Point2<Real>]) -> Result<(), BeltError>;

    /// Instances the extruded tooth unit at each placement, bound to the
    /// curve named `curve` so it can follow it.
    fn add_tooth_array(
        &mut self,
        name: &str,
        curve: &str,
        placements: &[ToothPlacement],
    ) -> Result<(), BeltError>;

    /// Creates a sprocket object from its outline.
    fn add_sprocket(
        &mut self,
        name: &str,
        sprocket: &Sprocket,
        outline: &GeoPolygon<Real>,
    ) -> Result<(), BeltError>;

    fn insert_keyframe(
        &mut self,
        object: &str,
        channel: Channel,
        frame: i32,
        value: Real,
    ) -> Result<(), BeltError>;

    fn assign_material(&mut self, object: &str, material: &str) -> Result<(), BeltError>;
}

/// Object and material names plus animation and tessellation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub path_name: String,
    pub teeth_name: String,
    pub sprocket_a_name: String,
    pub sprocket_b_name: String,
    pub belt_material: String,
    pub sprocket_material: String,
    pub motion: DriveMotion,
    pub segments_per_tooth: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            path_name: "BeltPath".to_string(),
            teeth_name: "BeltTeeth".to_string(),
            sprocket_a_name: "SprocketA".to_string(),
            sprocket_b_name: "SprocketB".to_string(),
            belt_material: "Belt".to_string(),
            sprocket_material: "Sprocket".to_string(),
            motion: DriveMotion::default(),
            segments_per_tooth: 8,
        }
    }
}

/// Builds the whole drive in `host`: clear, belt path, tooth array, both
/// sprockets, linear keyframes, materials. Stops at the first failure.
pub fn assemble_scene<H: SceneHost + ?Sized>(
    host: &mut H,
    layout: &BeltLayout,
    options: &SceneOptions,
) -> Result<(), BeltError> {
    let _span = info_span!("assemble_scene", teeth = layout.config.tooth_count).entered();

    // Everything fallible that does not touch the host goes first
    let placements = place_evenly(layout, layout.config.tooth_count)?;
    let [sprocket_a, sprocket_b] = sprockets_for(layout)?;
    let outline_a = sprocket_a.outline(options.segments_per_tooth)?;
    let outline_b = sprocket_b.outline(options.segments_per_tooth)?;
    let keyframes = options.motion.keyframes(layout)?;

    host.clear_scene()?;

    let points: Vec<Point2<Real>> = layout.path.points().collect();
    host.add_path_curve(&options.path_name, &points)?;
    debug!(points = points.len(), "belt path curve added");

    host.add_tooth_array(&options.teeth_name, &options.path_name, &placements)?;
    debug!(count = placements.len(), "tooth array added");

    host.add_sprocket(&options.sprocket_a_name, &sprocket_a, &outline_a)?;
    host.add_sprocket(&options.sprocket_b_name, &sprocket_b, &outline_b)?;

    for key in &keyframes {
        host.insert_keyframe(&options.teeth_name, Channel::PathOffset, key.frame, key.belt_offset)?;
        host.insert_keyframe(&options.sprocket_a_name, Channel::Rotation, key.frame, key.rotation_a)?;
        host.insert_keyframe(&options.sprocket_b_name, Channel::Rotation, key.frame, key.rotation_b)?;
    }

    host.assign_material(&options.teeth_name, &options.belt_material)?;
    host.assign_material(&options.sprocket_a_name, &options.sprocket_material)?;
    host.assign_material(&options.sprocket_b_name, &options.sprocket_material)?;
    Ok(())
}

/// One call made on a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    ClearScene,
    PathCurve {
        name: String,
        points: Vec<Point2<Real>>,
    },
    ToothArray {
        name: String,
        curve: String,
        placements: Vec<ToothPlacement>,
    },
    Sprocket {
        name: String,
        teeth: usize,
        center: Point2<Real>,
        outline_points: usize,
    },
    Keyframe {
        object: String,
        channel: Channel,
        frame: i32,
        value: Real,
    },
    Material {
        object: String,
        material: String,
    },
}

/// Host that records calls instead of building anything. Object names must
/// be unique and keyframes/materials must target an existing object, as in a
/// real host.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub commands: Vec<SceneCommand>,
    objects: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the objects currently in the scene.
    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    fn create(&mut self, operation: &'static str, name: &str) -> Result<(), BeltError> {
        if self.objects.iter().any(|o| o == name) {
            return Err(BeltError::Host {
                operation,
                message: format!("object `{name}` already exists"),
            });
        }
        self.objects.push(name.to_string());
        Ok(())
    }

    fn lookup(&self, operation: &'static str, name: &str) -> Result<(), BeltError> {
        if self.objects.iter().any(|o| o == name) {
            Ok(())
        } else {
            Err(BeltError::Host {
                operation,
                message: format!("object `{name}` not found"),
            })
        }
    }
}

impl SceneHost for RecordingHost {
    fn clear_scene(&mut self) -> Result<(), BeltError> {
        self.objects.clear();
        self.commands.push(SceneCommand::ClearScene);
        Ok(())
    }

    fn add_path_curve(&mut self, name: &str, points: &[Point2<Real>]) -> Result<(), BeltError> {
        self.create("add_path_curve", name)?;
        self.commands.push(SceneCommand::PathCurve {
            name: name.to_string(),
            points: points.to_vec(),
        });
        Ok(())
    }

    fn add_tooth_array(
        &mut self,
        name: &str,
        curve: &str,
        placements: &[ToothPlacement],
    ) -> Result<(), BeltError> {
        self.lookup("add_tooth_array", curve)?;
        self.create("add_tooth_array", name)?;
        self.commands.push(SceneCommand::ToothArray {
            name: name.to_string(),
            curve: curve.to_string(),
            placements: placements.to_vec(),
        });
        Ok(())
    }

    fn add_sprocket(
        &mut self,
        name: &str,
        sprocket: &Sprocket,
        outline: &GeoPolygon<Real>,
    ) -> Result<(), BeltError> {
        self.create("add_sprocket", name)?;
        self.commands.push(SceneCommand::Sprocket {
            name: name.to_string(),
            teeth: sprocket.teeth,
            center: sprocket.center,
            outline_points: outline.exterior().0.len(),
        });
        Ok(())
    }

    fn insert_keyframe(
        &mut self,
        object: &str,
        channel: Channel,
        frame: i32,
        value: Real,
    ) -> Result<(), BeltError> {
        self.lookup("insert_keyframe", object)?;
        self.commands.push(SceneCommand::Keyframe {
            object: object.to_string(),
            channel,
            frame,
            value,
        });
        Ok(())
    }

    fn assign_material(&mut self, object: &str, material: &str) -> Result<(), BeltError> {
        self.lookup("assign_material", object)?;
        self.commands.push(SceneCommand::Material {
            object: object.to_string(),
            material: material.to_string(),
        });
        Ok(())
    }
}
