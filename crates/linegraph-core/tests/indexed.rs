// File: crates/linegraph-core/tests/indexed.rs
// Purpose: Indexed chart series: degenerate segments and the shared, auto-expanding X maximum.

use linegraph_core::{Axis, Bound, ChartStyle, IndexedChart, Point, RectF};

fn chart() -> IndexedChart {
    let mut chart = IndexedChart::new(ChartStyle::default());
    chart.set_max_y(10.0).unwrap();
    chart.set_graph_area(RectF::new(0.0, 0.0, 100.0, 100.0));
    chart
}

fn max_x_label(chart: &IndexedChart) -> String {
    chart.value_label(Axis::X, Bound::Max).unwrap().text.clone()
}

#[test]
fn empty_series_has_no_segments() {
    let mut c = chart();
    let id = c.add_series(Vec::new()).unwrap();
    assert_eq!(c.flush(), 1);
    assert!(c.series(id).unwrap().segments().is_empty());
    assert_eq!(c.max_x(), 0);
}

#[test]
fn single_value_draws_one_degenerate_segment() {
    let mut c = chart();
    let id = c.add_series(vec![5.0]).unwrap();
    c.flush();
    let segs = c.series(id).unwrap().segments();
    assert_eq!(segs.len(), 1);
    let dot = c.scene().line(segs[0]).unwrap();
    assert!(dot.is_degenerate());
    // No X span: the dot sits on the left edge of the graph area.
    assert_eq!(dot.point1, Point::new(0.0, 50.0));
}

#[test]
fn values_are_plotted_by_position_without_sorting() {
    let mut c = chart();
    let id = c.add_series(vec![10.0, 0.0, 5.0]).unwrap();
    c.flush();
    assert_eq!(c.series(id).unwrap().data(), &[10.0, 0.0, 5.0]);
    let pts: Vec<(Point, Point)> = c
        .series(id)
        .unwrap()
        .segments()
        .iter()
        .map(|&s| {
            let l = c.scene().line(s).unwrap();
            (l.point1, l.point2)
        })
        .collect();
    assert_eq!(
        pts,
        vec![
            (Point::new(0.0, 0.0), Point::new(50.0, 100.0)),
            (Point::new(50.0, 100.0), Point::new(100.0, 50.0)),
        ]
    );
}

#[test]
fn longer_series_expands_shared_max_and_dirties_everyone() {
    let mut c = chart();
    let short = c.add_series((0..11).map(f64::from).collect()).unwrap();
    assert_eq!(c.max_x(), 10);
    c.flush();
    assert_eq!(c.is_dirty(short), Some(false));

    let long = c.add_series((0..21).map(|i| f64::from(i) * 0.5).collect()).unwrap();
    assert_eq!(c.max_x(), 20);
    assert_eq!(max_x_label(&c), "20");
    assert_eq!(c.is_dirty(short), Some(true), "existing series must re-map onto the wider axis");
    assert_eq!(c.is_dirty(long), Some(true));
    assert_eq!(c.flush(), 2);

    // The short series now ends halfway across the area.
    let last = *c.series(short).unwrap().segments().last().unwrap();
    assert_eq!(c.scene().line(last).unwrap().point2.x, 50.0);
}

#[test]
fn shorter_series_leaves_max_and_others_alone() {
    let mut c = chart();
    let long = c.add_series(vec![1.0; 8]).unwrap();
    c.flush();
    let short = c.add_series(vec![2.0; 3]).unwrap();
    assert_eq!(c.max_x(), 7);
    assert_eq!(c.is_dirty(long), Some(false));
    assert_eq!(c.is_dirty(short), Some(true));
    assert_eq!(c.flush(), 1);
}

#[test]
fn removing_the_longest_series_recomputes_max() {
    let mut c = chart();
    let a = c.add_series(vec![1.0; 5]).unwrap();
    let b = c.add_series(vec![1.0; 9]).unwrap();
    c.flush();
    assert_eq!(c.max_x(), 8);

    assert!(c.remove_series(b));
    assert_eq!(c.max_x(), 4);
    assert_eq!(max_x_label(&c), "4");
    assert_eq!(c.is_dirty(a), Some(true));

    assert!(c.remove_series(a));
    assert_eq!(c.max_x(), 0);
    assert_eq!(max_x_label(&c), "0");
    assert!(!c.remove_series(a));
}

#[test]
fn removing_a_shorter_series_keeps_max() {
    let mut c = chart();
    let a = c.add_series(vec![1.0; 5]).unwrap();
    let b = c.add_series(vec![1.0; 2]).unwrap();
    c.flush();
    assert!(c.remove_series(b));
    assert_eq!(c.max_x(), 4);
    assert_eq!(c.is_dirty(a), Some(false));
}

#[test]
fn reassigned_data_grows_but_never_shrinks_max() {
    let mut c = chart();
    let id = c.add_series(vec![0.0; 3]).unwrap();
    c.set_series_data(id, vec![0.0; 12]).unwrap();
    assert_eq!(c.max_x(), 11);

    c.set_series_data(id, vec![0.0; 2]).unwrap();
    assert_eq!(c.max_x(), 11);
    c.flush();
    let seg = c.series(id).unwrap().segments()[0];
    let l = c.scene().line(seg).unwrap();
    assert_eq!(l.point2.x, (100.0_f64 / 11.0) as f32);
}

#[test]
fn y_bound_change_dirties_every_series() {
    let mut c = chart();
    let a = c.add_series(vec![1.0, 2.0]).unwrap();
    let b = c.add_series(vec![3.0]).unwrap();
    c.flush();
    c.set_min_y(-10.0).unwrap();
    assert_eq!((c.is_dirty(a), c.is_dirty(b)), (Some(true), Some(true)));
    assert_eq!(c.flush(), 2);
}
