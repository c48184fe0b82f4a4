// File: crates/linegraph-core/tests/continuous.rs
// Purpose: Continuous chart series: sorting, segment reconciliation, dirty batching, removal.

use linegraph_core::{ChartError, ChartStyle, Color, ContinuousChart, Point, RectF, SeriesId};

/// Chart over `[0,10]` on both axes projected into a 100x100 square at the origin.
fn square_chart() -> ContinuousChart {
    let mut chart = ContinuousChart::new(ChartStyle::default());
    chart.set_max_x(10.0).unwrap();
    chart.set_max_y(10.0).unwrap();
    chart.set_graph_area(RectF::new(0.0, 0.0, 100.0, 100.0));
    chart
}

fn endpoints(chart: &ContinuousChart, id: SeriesId) -> Vec<(Point, Point)> {
    chart
        .series(id)
        .unwrap()
        .segments()
        .iter()
        .map(|&seg| {
            let l = chart.scene().line(seg).expect("segment node");
            (l.point1, l.point2)
        })
        .collect()
}

#[test]
fn unsorted_data_is_stored_and_drawn_in_x_order() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(5.0, 1.0), (1.0, 2.0), (3.0, 3.0)]).unwrap();
    assert_eq!(chart.series(id).unwrap().data(), &[(1.0, 2.0), (3.0, 3.0), (5.0, 1.0)]);

    assert_eq!(chart.flush(), 1);
    assert_eq!(
        endpoints(&chart, id),
        vec![
            (Point::new(10.0, 80.0), Point::new(30.0, 70.0)),
            (Point::new(30.0, 70.0), Point::new(50.0, 90.0)),
        ]
    );
}

#[test]
fn segments_are_children_of_the_background() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
    chart.flush();
    let back = chart.background();
    for &seg in chart.series(id).unwrap().segments() {
        assert_eq!(chart.scene().parent(seg), Some(back));
        assert!(chart.scene().children(back).contains(&seg));
    }
}

#[test]
fn segment_count_follows_point_count() {
    let mut chart = square_chart();
    let empty = chart.add_series(Vec::new()).unwrap();
    let single = chart.add_series(vec![(4.0, 4.0)]).unwrap();
    let many = chart.add_series((0..6).map(|i| (i as f64, i as f64)).collect()).unwrap();
    assert_eq!(chart.flush(), 3);

    assert!(chart.series(empty).unwrap().segments().is_empty());
    let dot = endpoints(&chart, single);
    assert_eq!(dot, vec![(Point::new(40.0, 60.0), Point::new(40.0, 60.0))]);
    assert_eq!(chart.series(many).unwrap().segments().len(), 5);
}

#[test]
fn new_series_uses_style_defaults_or_explicit_stroke() {
    let mut chart = square_chart();
    let plain = chart.add_series(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
    let red = Color::from_argb(255, 255, 100, 100);
    let custom = chart.add_series_with(vec![(0.0, 1.0), (1.0, 0.0)], red, 7.0).unwrap();
    chart.flush();

    let style = ChartStyle::default();
    let l = chart.scene().line(chart.series(plain).unwrap().segments()[0]).unwrap();
    assert_eq!((l.color, l.thickness), (style.line_stroke, style.line_thickness));
    let l = chart.scene().line(chart.series(custom).unwrap().segments()[0]).unwrap();
    assert_eq!((l.color, l.thickness), (red, 7.0));
}

#[test]
fn several_mutations_between_flushes_rebuild_once() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(1.0, 1.0), (2.0, 2.0)]).unwrap();
    assert_eq!(chart.flush(), 1);
    assert_eq!(chart.flush(), 0);

    chart.set_min_y(-1.0).unwrap();
    chart.set_max_y(5.0).unwrap();
    chart.set_series_data(id, vec![(3.0, 3.0), (0.0, 0.0), (9.0, 1.0)]).unwrap();
    assert_eq!(chart.is_dirty(id), Some(true));
    assert_eq!(chart.flush(), 1);
    assert_eq!(chart.is_dirty(id), Some(false));
    assert_eq!(chart.series(id).unwrap().segments().len(), 2);
    assert_eq!(chart.flush(), 0);
}

#[test]
fn only_dirty_series_are_rebuilt() {
    let mut chart = square_chart();
    let a = chart.add_series(vec![(1.0, 1.0), (2.0, 2.0)]).unwrap();
    let b = chart.add_series(vec![(1.0, 3.0), (2.0, 4.0)]).unwrap();
    chart.flush();
    let b_segments = chart.series(b).unwrap().segments().to_vec();

    chart.set_series_data(a, vec![(0.0, 0.0), (5.0, 5.0), (6.0, 6.0)]).unwrap();
    assert_eq!(chart.is_dirty(b), Some(false));
    assert_eq!(chart.flush(), 1);
    assert_eq!(chart.series(b).unwrap().segments(), b_segments.as_slice());
}

#[test]
fn rebuild_replaces_every_segment_without_leaking_nodes() {
    let mut chart = square_chart();
    let base = chart.scene().len();
    let id = chart.add_series(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
    chart.flush();
    let first = chart.series(id).unwrap().segments().to_vec();
    assert_eq!(chart.scene().len(), base + 2);

    for n in [10usize, 1, 0, 4] {
        chart.set_series_data(id, (0..n).map(|i| (i as f64, 1.0)).collect()).unwrap();
        chart.flush();
        let expected = match n {
            0 => 0,
            1 => 1,
            n => n - 1,
        };
        assert_eq!(chart.series(id).unwrap().segments().len(), expected);
        assert_eq!(chart.scene().len(), base + expected);
    }

    let last = chart.series(id).unwrap().segments();
    assert!(first.iter().all(|s| !last.contains(s)));
    assert!(first.iter().all(|&s| !chart.scene().contains(s)));
}

#[test]
fn graph_area_change_dirties_and_moves_geometry() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(0.0, 0.0), (10.0, 10.0)]).unwrap();
    chart.flush();

    chart.set_graph_area(RectF::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(chart.is_dirty(id), Some(false), "same area is a no-op");

    chart.set_graph_area(RectF::new(50.0, 20.0, 200.0, 50.0));
    assert_eq!(chart.is_dirty(id), Some(true));
    chart.flush();
    assert_eq!(endpoints(&chart, id), vec![(Point::new(50.0, 70.0), Point::new(250.0, 20.0))]);
}

#[test]
fn color_and_thickness_apply_in_place_without_rebuild() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
    chart.flush();
    let before = chart.series(id).unwrap().segments().to_vec();

    let green = Color::from_argb(255, 0, 200, 0);
    chart.set_series_color(id, green).unwrap();
    chart.set_series_thickness(id, 1.5).unwrap();
    assert_eq!(chart.is_dirty(id), Some(false));
    assert_eq!(chart.flush(), 0);

    let series = chart.series(id).unwrap();
    assert_eq!(series.segments(), before.as_slice());
    assert_eq!((series.color(), series.thickness()), (green, 1.5));
    for &seg in series.segments() {
        let l = chart.scene().line(seg).unwrap();
        assert_eq!((l.color, l.thickness), (green, 1.5));
    }
}

#[test]
fn later_rebuilds_keep_the_current_stroke() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
    let blue = Color::from_argb(255, 0, 0, 255);
    chart.set_series_color(id, blue).unwrap();
    chart.set_series_thickness(id, 9.0).unwrap();
    chart.flush();
    let l = chart.scene().line(chart.series(id).unwrap().segments()[0]).unwrap();
    assert_eq!((l.color, l.thickness), (blue, 9.0));
}

#[test]
fn removed_series_leaves_nothing_behind() {
    let mut chart = square_chart();
    let keep = chart.add_series(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
    let gone = chart.add_series(vec![(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]).unwrap();
    chart.flush();
    let segments = chart.series(gone).unwrap().segments().to_vec();

    assert!(chart.remove_series(gone));
    assert!(!chart.contains_series(gone));
    assert_eq!(chart.series_ids(), vec![keep]);
    for seg in &segments {
        assert!(!chart.scene().contains(*seg));
        assert!(!chart.scene().children(chart.background()).contains(seg));
    }

    assert!(!chart.remove_series(gone));
    assert_eq!(chart.set_series_data(gone, vec![(1.0, 1.0)]), Err(ChartError::NotFound(gone)));
    assert_eq!(chart.set_series_color(gone, Color::from_argb(255, 1, 2, 3)), Err(ChartError::NotFound(gone)));
    assert_eq!(chart.set_series_thickness(gone, 2.0), Err(ChartError::NotFound(gone)));
    assert_eq!(chart.is_dirty(gone), None);
}

#[test]
fn invalid_data_is_rejected_without_side_effects() {
    let mut chart = square_chart();
    let id = chart.add_series(vec![(1.0, 1.0), (2.0, 2.0)]).unwrap();
    chart.flush();

    let err = chart.set_series_data(id, vec![(0.0, f64::NAN)]).unwrap_err();
    assert!(matches!(err, ChartError::InvalidArgument(_)));
    assert_eq!(chart.series(id).unwrap().data(), &[(1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(chart.is_dirty(id), Some(false));

    assert!(chart.add_series(vec![(f64::INFINITY, 0.0)]).is_err());
    assert_eq!(chart.series_count(), 1);
}
