use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use bar_charts::api::{
    BarChartConfig, BarChartData, ChartContext, ChartEvent, ChartKind, ChartName, DataHelper,
    ExtraLineSupport, Touchable,
};
use bar_charts::core::{BarStyle, Baseline, DataPoint, DataSet, DrawArea, Point, Topline};
use bar_charts::extensions::{ExtraLine, ExtraLinePoint};
use bar_charts::interaction::{BarMarkerType, MarkerKind, MarkerOverlay, TouchPhase};
use rust_decimal::Decimal;

fn data_set(values: &[f64]) -> DataSet {
    DataSet::new(
        values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(*value, format!("p{index}")))
            .collect(),
    )
}

fn recorder(chart: &mut BarChartData) -> Rc<RefCell<Vec<ChartEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    chart.subscribe(move |event: &ChartEvent, _context: ChartContext| {
        sink.borrow_mut().push(event.clone());
    });
    log
}

#[test]
fn value_policies_derive_bounds_from_data() {
    let mut chart = BarChartData::standard(data_set(&[10.0, 20.0, 30.0])).expect("chart");
    assert_abs_diff_eq!(chart.min_value(), 10.0);
    assert_abs_diff_eq!(chart.max_value(), 30.0);
    assert_abs_diff_eq!(chart.range(), 20.0);
    assert_abs_diff_eq!(chart.average(), 20.0);

    chart.set_baseline(Baseline::Zero).expect("baseline");
    assert_abs_diff_eq!(chart.min_value(), 0.0);

    chart
        .set_baseline(Baseline::MinimumWithMaximum(5.0))
        .expect("baseline");
    assert_abs_diff_eq!(chart.min_value(), 5.0);
    chart
        .set_baseline(Baseline::MinimumWithMaximum(15.0))
        .expect("baseline");
    assert_abs_diff_eq!(chart.min_value(), 10.0);

    chart.set_topline(Topline::Maximum(50.0)).expect("topline");
    assert_abs_diff_eq!(chart.max_value(), 50.0);
    chart.set_topline(Topline::Maximum(20.0)).expect("topline");
    assert_abs_diff_eq!(chart.max_value(), 30.0);
}

#[test]
fn topline_changes_horizontal_touch_scaling() {
    let config = BarChartConfig::horizontal().with_topline(Topline::Maximum(60.0));
    let chart = BarChartData::new(data_set(&[10.0, 20.0, 30.0]), config).expect("chart");

    let hits = chart.resolve_touch(Point::new(0.0, 45.0), DrawArea::new(120.0, 90.0));
    assert_eq!(hits.len(), 1);
    assert_abs_diff_eq!(hits[0].location.x, 40.0, epsilon = 1e-9);
}

#[test]
fn non_finite_policy_values_are_rejected() {
    let mut chart = BarChartData::standard(data_set(&[1.0])).expect("chart");
    let err = chart
        .set_topline(Topline::Maximum(f64::INFINITY))
        .expect_err("must reject");
    assert!(format!("{err}").contains("topline"));
    assert_eq!(chart.topline(), Topline::MaximumValue);
}

#[test]
fn all_zero_and_empty_data_have_no_data() {
    let zero = BarChartData::horizontal(data_set(&[0.0, 0.0, 0.0])).expect("chart");
    assert!(!zero.has_data());
    assert!(
        zero.resolve_touch(Point::new(10.0, 10.0), DrawArea::new(100.0, 90.0))
            .is_empty()
    );

    let config = BarChartConfig::default().with_topline(Topline::Maximum(10.0));
    let empty = BarChartData::new(DataSet::default(), config).expect("chart");
    assert!(!empty.has_data());
}

#[test]
fn non_finite_data_is_rejected() {
    let err = BarChartData::standard(data_set(&[1.0, f64::NAN])).expect_err("must reject");
    assert!(format!("{err}").contains("data point 1"));
}

#[test]
fn decimal_points_convert_to_values() {
    let point = DataPoint::from_decimal(Decimal::new(1250, 2), "decimal").expect("decimal");
    assert_abs_diff_eq!(point.value(), 12.5);
}

#[test]
fn chart_kind_follows_orientation() {
    let standard = BarChartData::standard(data_set(&[1.0])).expect("chart");
    let horizontal = BarChartData::horizontal(data_set(&[1.0])).expect("chart");
    assert_eq!(standard.chart_name(), ChartName::Bar);
    assert_eq!(horizontal.chart_name(), ChartName::HorizontalBar);
}

#[test]
fn mutations_notify_subscribers_in_order() {
    let mut chart = BarChartData::standard(data_set(&[1.0, 2.0])).expect("chart");
    let order = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let order = Rc::clone(&order);
        chart.subscribe(move |_event: &ChartEvent, _context: ChartContext| {
            order.borrow_mut().push(id);
        });
    }

    chart.set_should_animate(false);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn subscribers_observe_new_state() {
    let mut chart = BarChartData::standard(data_set(&[1.0])).expect("chart");
    let contexts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&contexts);
    chart.subscribe(move |_event: &ChartEvent, context: ChartContext| {
        sink.borrow_mut().push(context);
    });

    chart
        .set_data_set(data_set(&[4.0, 8.0, 2.0]))
        .expect("data set");

    let contexts = contexts.borrow();
    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].points_len, 3);
    assert_abs_diff_eq!(contexts[0].max_value, 8.0);
    assert!(contexts[0].has_data);
}

#[test]
fn every_mutation_publishes_an_event() {
    let mut chart = BarChartData::standard(data_set(&[1.0])).expect("chart");
    let log = recorder(&mut chart);

    chart.set_data_set(data_set(&[1.0, 2.0])).expect("data");
    chart
        .set_bar_style(BarStyle::default().with_bar_width(0.5))
        .expect("style");
    chart.set_should_animate(false);
    chart.set_no_data_text("Nothing yet");
    chart.set_baseline(Baseline::Zero).expect("baseline");
    chart
        .set_touch_marker_type(BarMarkerType::None)
        .expect("marker");
    chart
        .set_extra_line(Some(ExtraLine::new(
            "avg",
            vec![ExtraLinePoint::new(1.5, "avg")],
        )))
        .expect("extra line");

    let log = log.borrow();
    assert_eq!(log.len(), 7);
    assert_eq!(log[0], ChartEvent::DataSetReplaced { points_len: 2 });
    assert_eq!(log[1], ChartEvent::BarStyleChanged);
    assert_eq!(
        log[2],
        ChartEvent::AnimationChanged {
            should_animate: false
        }
    );
    assert_eq!(log[3], ChartEvent::NoDataTextChanged);
    assert_eq!(log[4], ChartEvent::ValuePolicyChanged { min: 0.0, max: 2.0 });
    assert_eq!(log[5], ChartEvent::TouchMarkerTypeChanged);
    assert_eq!(log[6], ChartEvent::ExtraLineChanged { present: true });
}

#[test]
fn rejected_mutations_do_not_notify() {
    let mut chart = BarChartData::standard(data_set(&[1.0])).expect("chart");
    let log = recorder(&mut chart);

    assert!(
        chart
            .set_bar_style(BarStyle::default().with_bar_width(1.5))
            .is_err()
    );
    assert!(chart.set_data_set(data_set(&[f64::INFINITY])).is_err());
    assert!(log.borrow().is_empty());
    assert_abs_diff_eq!(chart.bar_style().bar_width, 0.7);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut chart = BarChartData::standard(data_set(&[1.0])).expect("chart");
    let log = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&log);
    let id = chart.subscribe(move |_event: &ChartEvent, _context: ChartContext| {
        *sink.borrow_mut() += 1;
    });

    chart.set_should_animate(false);
    assert!(chart.unsubscribe(id));
    assert!(!chart.unsubscribe(id));
    chart.set_should_animate(true);

    assert_eq!(*log.borrow(), 1);
    assert_eq!(chart.subscriber_count(), 0);
}

#[test]
fn touch_interaction_updates_markers_and_retained_points() {
    let mut chart = BarChartData::horizontal(data_set(&[10.0, 20.0, 30.0])).expect("chart");
    let log = recorder(&mut chart);
    let mut overlay = MarkerOverlay::default();
    let area = DrawArea::new(100.0, 90.0);

    chart.process_touch_interaction(&mut overlay, Point::new(10.0, 45.0), area);

    assert_eq!(chart.touch_phase(), TouchPhase::Armed);
    assert_eq!(chart.touch_point_data().len(), 1);
    assert_eq!(chart.touch_point_data()[0].description(), "p1");
    assert_eq!(overlay.markers().len(), 1);
    assert_eq!(overlay.markers()[0].marker_type, BarMarkerType::default());
    assert_abs_diff_eq!(overlay.markers()[0].location.y, 45.0, epsilon = 1e-9);

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    let touched = log[0].touched_points();
    assert_eq!(touched.len(), 1);
    assert_eq!(touched[0].kind, MarkerKind::Bar);
}

#[test]
fn touch_miss_clears_marker_overlay() {
    let mut chart = BarChartData::horizontal(data_set(&[10.0, 20.0, 30.0])).expect("chart");
    let mut overlay = MarkerOverlay::default();
    let area = DrawArea::new(100.0, 90.0);

    chart.process_touch_interaction(&mut overlay, Point::new(10.0, 45.0), area);
    assert!(overlay.is_visible());

    chart.process_touch_interaction(&mut overlay, Point::new(10.0, 200.0), area);
    assert!(!overlay.is_visible());
    assert!(chart.touch_point_data().is_empty());
    assert_eq!(chart.touch_phase(), TouchPhase::Idle);
}

#[test]
fn extra_line_touch_produces_two_markers() {
    let mut chart = BarChartData::horizontal(data_set(&[10.0, 20.0, 30.0])).expect("chart");
    chart
        .set_extra_line(Some(
            ExtraLine::new(
                "Target",
                vec![
                    ExtraLinePoint::new(5.0, "a"),
                    ExtraLinePoint::new(15.0, "b"),
                    ExtraLinePoint::new(10.0, "c"),
                ],
            )
            .with_legend_tag("target"),
        ))
        .expect("extra line");
    let mut overlay = MarkerOverlay::default();

    chart.process_touch_interaction(
        &mut overlay,
        Point::new(50.0, 45.0),
        DrawArea::new(100.0, 90.0),
    );

    assert_eq!(overlay.markers().len(), 2);
    let retained = chart.touch_point_data();
    assert_eq!(retained.len(), 2);
    assert_eq!(retained[0].description(), "p1");
    assert_eq!(retained[1].description(), "b");
    assert_eq!(retained[1].legend_tag(), Some("target"));
}

#[test]
fn touch_did_finish_resets_and_notifies() {
    let mut chart = BarChartData::standard(data_set(&[10.0, 20.0])).expect("chart");
    let mut overlay = MarkerOverlay::default();
    chart.process_touch_interaction(
        &mut overlay,
        Point::new(10.0, 10.0),
        DrawArea::new(100.0, 100.0),
    );
    let log = recorder(&mut chart);

    chart.touch_did_finish();
    assert!(chart.touch_point_data().is_empty());
    assert_eq!(chart.touch_phase(), TouchPhase::Idle);

    chart.touch_did_finish();
    assert!(chart.touch_point_data().is_empty());
    assert_eq!(*log.borrow(), vec![ChartEvent::TouchEnded, ChartEvent::TouchEnded]);
}
