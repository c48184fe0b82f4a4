// File: crates/linegraph-examples/src/bin/lines.rs
// Summary: Minimal example that renders one continuous and one indexed line chart to PNG.

use linegraph_core::{ChartStyle, Color, ContinuousChart, IndexedChart, RectF, RenderOptions};

fn main() {
    // Continuous: points are sorted by X before they are drawn
    let data = vec![
        (3.0, 1.8),
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (5.0, 2.0),
        (4.0, 1.4),
    ];

    let mut chart = ContinuousChart::new(ChartStyle::default());
    chart.set_max_x(5.0).expect("x range");
    chart.set_max_y(2.2).expect("y range");
    chart.set_label_x("Time");
    chart.set_label_y("Level");
    chart.add_series(data).expect("series");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_lines.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());

    // Indexed: X is the sample position, shared by every series on the chart
    let mut indexed = IndexedChart::new(ChartStyle::dark());
    indexed.set_graph_area(RectF::new(100.0, 40.0, 260.0, 260.0));
    indexed.set_min_y(-1.0).expect("y range");
    indexed.add_series((0..40).map(|i| (i as f64 * 0.3).sin()).collect()).expect("series");
    indexed
        .add_series_with((0..25).map(|i| (i as f64 * 0.3).cos() * 0.5).collect(), Color::from_argb(255, 255, 160, 60), 2.0)
        .expect("series");

    let out = std::path::PathBuf::from("target/out/example_indexed.png");
    indexed.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
