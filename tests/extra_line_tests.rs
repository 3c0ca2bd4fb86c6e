use approx::assert_abs_diff_eq;
use bar_charts::core::{DrawArea, Point};
use bar_charts::extensions::{
    ExtraLine, ExtraLinePoint, ExtraLineProbe, ExtraLineStyle, LineSpacing,
};

fn line(values: &[f64], spacing: LineSpacing) -> ExtraLine {
    ExtraLine::new(
        "Overlay",
        values
            .iter()
            .enumerate()
            .map(|(index, value)| ExtraLinePoint::new(*value, format!("e{index}")))
            .collect(),
    )
    .with_style(ExtraLineStyle {
        line_spacing: spacing,
        ..ExtraLineStyle::default()
    })
}

#[test]
fn bar_spacing_centers_points_in_slots() {
    let line = line(&[5.0, 15.0, 10.0], LineSpacing::Bar);
    let points = line.project_points(DrawArea::new(90.0, 100.0));

    assert_eq!(points.len(), 3);
    assert_abs_diff_eq!(points[0].x, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].x, 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].y, 50.0, epsilon = 1e-9);
}

#[test]
fn line_spacing_snaps_to_nearest_point() {
    let line = line(&[1.0, 2.0, 3.0], LineSpacing::Line);
    let area = DrawArea::new(100.0, 100.0);

    let hit = line
        .point_and_location(Point::new(30.0, 0.0), area)
        .expect("hit");
    assert_eq!(hit.description, "e1");
    assert_abs_diff_eq!(hit.location.x, 50.0, epsilon = 1e-9);

    let hit = line
        .point_and_location(Point::new(80.0, 0.0), area)
        .expect("hit");
    assert_eq!(hit.description, "e2");
    assert_abs_diff_eq!(hit.location.x, 100.0, epsilon = 1e-9);

    assert!(line.point_and_location(Point::new(-30.0, 0.0), area).is_none());
    assert!(line.point_and_location(Point::new(130.0, 0.0), area).is_none());
}

#[test]
fn flat_line_sits_mid_height() {
    let line = line(&[4.0, 4.0], LineSpacing::Bar);
    let points = line.project_points(DrawArea::new(100.0, 60.0));
    assert!(points.iter().all(|point| (point.y - 30.0).abs() <= 1e-9));
}

#[test]
fn single_point_line_spacing_falls_back_to_slot_center() {
    let line = line(&[7.0], LineSpacing::Line);
    let hit = line
        .point_and_location(Point::new(10.0, 0.0), DrawArea::new(100.0, 100.0))
        .expect("hit");
    assert_abs_diff_eq!(hit.location.x, 50.0, epsilon = 1e-9);
}

#[test]
fn hit_carries_legend_tag() {
    let line = line(&[1.0, 2.0], LineSpacing::Bar).with_legend_tag("goal");
    let hit = line
        .point_and_location(Point::new(75.0, 0.0), DrawArea::new(100.0, 100.0))
        .expect("hit");
    assert_eq!(hit.legend_tag, "goal");
    assert_abs_diff_eq!(hit.value, 2.0);
}

#[test]
fn validation_rejects_non_finite_values() {
    let line = line(&[1.0, f64::NAN], LineSpacing::Bar);
    let err = line.validate().expect_err("must reject");
    assert!(format!("{err}").contains("finite"));
}
