// main.rs
//
// Walks through a complete drive: layout, tooth placement, sprockets,
// keyframes, a dry run of the host calls, and an SVG of the result.

use beltloop::belt::closed_form_center_distance;
use beltloop::motion::DriveMotion;
use beltloop::placement::{place_evenly, place_on_ring, ring_radius};
use beltloop::scene::{RecordingHost, SceneOptions, assemble_scene};
use beltloop::sprocket::sprockets_for;
use beltloop::{BeltConfig, BeltLayout};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1) 150 teeth of 10mm around a 300mm and a 150mm pulley
    let config = BeltConfig::new(10.0, 150, 300.0, 150.0);
    let layout = BeltLayout::compute(&config)?;
    let estimate = closed_form_center_distance(config.belt_length(), config.diameter_a, config.diameter_b)?;
    info!(
        center_distance = layout.center_distance,
        closed_form_estimate = estimate,
        wrap_length = layout.wrap_length(),
        teeth_on_a = layout.teeth_on_a,
        teeth_on_b = layout.teeth_on_b,
        "drive"
    );

    // 2) a belt too short for its pulleys is refused
    match BeltLayout::compute(&BeltConfig::new(10.0, 50, 300.0, 150.0)) {
        Ok(short) => warn!(center_distance = short.center_distance, "short belt unexpectedly fit"),
        Err(err) => info!(%err, "short belt rejected"),
    }

    // 3) tooth units: along the loop, and on a plain ring of the same length
    let along = place_evenly(&layout, config.tooth_count)?;
    let ring = place_on_ring(config.tooth_pitch, config.tooth_count)?;
    info!(
        along = along.len(),
        ring = ring.len(),
        ring_radius = ring_radius(config.tooth_pitch, config.tooth_count),
        "tooth placements"
    );

    // 4) keyframes for one full loop of travel
    let [start, end] = DriveMotion::default().keyframes(&layout)?;
    info!(
        frames = ?(start.frame, end.frame),
        rotation_a = end.rotation_a,
        rotation_b = end.rotation_b,
        "motion"
    );

    // 5) dry run of every host call
    let mut host = RecordingHost::new();
    assemble_scene(&mut host, &layout, &SceneOptions::default())?;
    info!(commands = host.commands.len(), objects = ?host.objects(), "scene dry run");

    // 6) drawing
    let outlines = sprockets_for(&layout)?
        .iter()
        .map(|s| s.outline(8))
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "svg-io")]
    {
        std::fs::create_dir_all("svg")?;
        beltloop::io::write_svg("svg/belt_drive.svg", &layout, &outlines)?;
        info!("wrote svg/belt_drive.svg");
    }
    #[cfg(not(feature = "svg-io"))]
    info!(outlines = outlines.len(), "svg-io disabled, skipping drawing");

    Ok(())
}
