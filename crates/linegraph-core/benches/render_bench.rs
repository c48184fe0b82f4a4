use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use linegraph_core::{ChartStyle, ContinuousChart, RenderOptions};

fn build_chart_xy(n: usize) -> ContinuousChart {
    let mut ch = ContinuousChart::new(ChartStyle::default());
    let data = (0..n)
        .map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect();
    ch.set_max_x((n - 1) as f64).ok();
    ch.set_min_y(-12.0).ok();
    ch.set_max_y(12.0).ok();
    ch.add_series(data).ok();
    ch.flush();
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let mut ch = build_chart_xy(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
