use bar_charts::api::{
    AxisLabelConfig, BarChartConfig, BarChartData, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot,
    ExtraLineSupport, Touchable,
};
use bar_charts::core::{
    Animation, AnimationCurve, BarOrientation, BarStyle, Baseline, Color, DataPoint, DataSet,
    DrawArea, Fill, GradientStop, Point, Topline, UnitPoint,
};
use bar_charts::extensions::{ExtraLine, ExtraLinePoint};
use bar_charts::interaction::{MarkerOverlay, TouchPhase};

#[test]
fn empty_json_takes_defaults() {
    let config = BarChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, BarChartConfig::default());
    assert_eq!(config.orientation, BarOrientation::Standard);
    assert!(config.should_animate);
    assert_eq!(config.no_data_text, "No Data");
}

#[test]
fn json_config_reads_policies_and_partial_style() {
    let config = BarChartConfig::from_json_str(
        r#"{
            "orientation": "Horizontal",
            "baseline": "Zero",
            "topline": { "Maximum": 100.0 },
            "bar_style": { "bar_width": 0.4 },
            "animation": { "curve": "EaseOut" }
        }"#,
    )
    .expect("parse");

    assert_eq!(config.orientation, BarOrientation::Horizontal);
    assert_eq!(config.baseline, Baseline::Zero);
    assert_eq!(config.topline, Topline::Maximum(100.0));
    assert!((config.bar_style.bar_width - 0.4).abs() <= 1e-12);
    assert_eq!(config.animation.curve, AnimationCurve::EaseOut);
    assert_eq!(config.animation.duration_ms, Animation::default().duration_ms);
}

#[test]
fn json_config_is_validated() {
    let err = BarChartConfig::from_json_str(r#"{ "bar_style": { "bar_width": 1.5 } }"#)
        .expect_err("must reject");
    assert!(format!("{err}").contains("bar width"));

    let err = BarChartConfig::from_json_str(r#"{ "axis_labels": { "value_label_count": 1 } }"#)
        .expect_err("must reject");
    assert!(format!("{err}").contains("label count"));

    let err = BarChartConfig::from_json_str("not json").expect_err("must reject");
    assert!(format!("{err}").contains("failed to parse"));
}

#[test]
fn gradient_style_survives_json() {
    let config = BarChartConfig::horizontal()
        .with_bar_style(BarStyle::default().with_fill(Fill::GradientStops {
            stops: vec![
                GradientStop::new(Color::rgb(0.0, 0.0, 1.0), 0.0),
                GradientStop::new(Color::rgb(0.0, 1.0, 0.0), 1.0),
            ],
            start: UnitPoint::BOTTOM,
            end: UnitPoint::TOP,
        }))
        .with_axis_labels(AxisLabelConfig::default().with_value_label_decimals(2));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = BarChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn unordered_gradient_stops_are_rejected() {
    let style = BarStyle::default().with_fill(Fill::GradientStops {
        stops: vec![
            GradientStop::new(Color::RED, 0.8),
            GradientStop::new(Color::BLACK, 0.2),
        ],
        start: UnitPoint::LEADING,
        end: UnitPoint::TRAILING,
    });
    let err = BarChartData::new(
        DataSet::default(),
        BarChartConfig::default().with_bar_style(style),
    )
    .expect_err("must reject");
    assert!(format!("{err}").contains("ordered"));
}

#[test]
fn snapshot_round_trips_through_json_contract() {
    let points = vec![
        DataPoint::new(3.0, "a").with_legend_tag("a-tag"),
        DataPoint::new(6.0, "b"),
    ];
    let mut chart = BarChartData::horizontal(DataSet::new(points).with_legend_title("Sales"))
        .expect("chart");
    chart
        .set_extra_line(Some(ExtraLine::new(
            "Goal",
            vec![ExtraLinePoint::new(4.0, "g1"), ExtraLinePoint::new(5.0, "g2")],
        )))
        .expect("extra line");
    let mut overlay = MarkerOverlay::default();
    chart.process_touch_interaction(&mut overlay, Point::new(10.0, 10.0), DrawArea::new(60.0, 60.0));

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.touch_phase, TouchPhase::Armed);
    assert_eq!(snapshot.touch_points_len, 2);
    assert_eq!(snapshot.legends.len(), 2);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}")));
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);

    let rebuilt = BarChartData::from_snapshot(parsed).expect("rebuild");
    assert_eq!(rebuilt.points(), chart.points());
    assert_eq!(rebuilt.extra_line(), chart.extra_line());
    assert!(rebuilt.touch_point_data().is_empty());
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let chart = BarChartData::standard(DataSet::new(vec![DataPoint::new(1.0, "a")]))
        .expect("chart");
    let json = chart
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace(
            &format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );

    let err = ChartSnapshot::from_json_compat_str(&json).expect_err("must reject");
    assert!(format!("{err}").contains("unsupported snapshot schema version"));
}
