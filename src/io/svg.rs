use crate::belt::BeltLayout;
use crate::float_types::Real;
use geo::Polygon as GeoPolygon;
use nalgebra::Point2;
use std::fmt::Write as _;
use std::path::Path as FsPath;
use svg::Document;
use svg::node::element::{Circle, Group, Path};

const MARGIN_RATIO: Real = 0.05;

/// Export the drive as an SVG document string.
///
/// Draws the pulley pitch circles (dashed), the given sprocket outlines and
/// the belt path. The y axis is flipped so the drive reads the same way as in
/// the belt plane (y up).
///
/// ```rust
/// # use beltloop::{BeltConfig, BeltLayout, io::to_svg};
/// let layout = BeltLayout::compute(&BeltConfig::new(10.0, 150, 300.0, 150.0)).unwrap();
/// let svg = to_svg(&layout, &[]);
/// assert!(svg.contains("<svg"));
/// ```
pub fn to_svg(layout: &BeltLayout, sprocket_outlines: &[GeoPolygon<Real>]) -> String {
    let (min, max) = bounds(layout);
    let size = max - min;
    let margin = MARGIN_RATIO * size.x.max(size.y);
    let stroke = format!("{:.4}", 0.004 * size.x.max(size.y));

    let mut drawing = Group::new().set("transform", "scale(1,-1)");

    for pulley in [&layout.pulley_a, &layout.pulley_b] {
        drawing = drawing.add(
            Circle::new()
                .set("cx", format!("{:.4}", pulley.center.x))
                .set("cy", format!("{:.4}", pulley.center.y))
                .set("r", format!("{:.4}", pulley.radius))
                .set("fill", "none")
                .set("stroke", "gray")
                .set("stroke-dasharray", "4 2")
                .set("stroke-width", stroke.clone()),
        );
    }

    for outline in sprocket_outlines {
        let points: Vec<Point2<Real>> = outline
            .exterior()
            .coords()
            .map(|c| Point2::new(c.x, c.y))
            .collect();
        drawing = drawing.add(
            Path::new()
                .set("d", path_data(&points))
                .set("fill", "lightgray")
                .set("stroke", "black")
                .set("stroke-width", stroke.clone()),
        );
    }

    let belt: Vec<Point2<Real>> = layout.path.points().collect();
    drawing = drawing.add(
        Path::new()
            .set("d", path_data(&belt))
            .set("fill", "none")
            .set("stroke", "steelblue")
            .set("stroke-width", format!("{:.4}", 0.012 * size.x.max(size.y))),
    );

    // viewBox in flipped coordinates: y runs from -max.y to -min.y
    let view_box = format!(
        "{:.4} {:.4} {:.4} {:.4}",
        min.x - margin,
        -max.y - margin,
        size.x + 2.0 * margin,
        size.y + 2.0 * margin
    );

    Document::new()
        .set("viewBox", view_box)
        .add(drawing)
        .to_string()
}

/// Writes [`to_svg`] output to `path`.
pub fn write_svg<P: AsRef<FsPath>>(
    path: P,
    layout: &BeltLayout,
    sprocket_outlines: &[GeoPolygon<Real>],
) -> std::io::Result<()> {
    std::fs::write(path, to_svg(layout, sprocket_outlines))
}

fn bounds(layout: &BeltLayout) -> (Point2<Real>, Point2<Real>) {
    let mut min = Point2::new(Real::MAX, Real::MAX);
    let mut max = Point2::new(Real::MIN, Real::MIN);
    for pulley in [&layout.pulley_a, &layout.pulley_b] {
        let r = nalgebra::Vector2::new(pulley.radius, pulley.radius);
        min = min.inf(&(pulley.center - r));
        max = max.sup(&(pulley.center + r));
    }
    (min, max)
}

fn path_data(points: &[Point2<Real>]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{:.4},{:.4} ", p.x, p.y);
    }
    d.push('Z');
    d
}
