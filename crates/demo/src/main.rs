// File: crates/demo/src/main.rs
// Summary: Demo loads x,y CSV data and renders it as a continuous and an indexed line chart.

use anyhow::{Context, Result};
use linegraph_core::{theme, ChartStyle, ContinuousChart, IndexedChart, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/samples.csv".to_string());
    let style = match args.next() {
        Some(name) => {
            let style = theme::find(&name);
            if !style.name.eq_ignore_ascii_case(&name) {
                warn!(requested = %name, using = style.name, "unknown theme");
            }
            style
        }
        None => ChartStyle::default(),
    };

    let path = resolve_path(&raw)?;
    info!(input = %path.display(), theme = style.name, "loading samples");

    let points = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if points.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }
    let (min_x, max_x) = minmax(points.iter().map(|p| p.0));
    let (min_y, max_y) = minmax(points.iter().map(|p| p.1));
    info!(rows = points.len(), min_x, max_x, min_y, max_y, "loaded samples");

    let opts = RenderOptions { background: style.background, ..RenderOptions::default() };

    // 1) Continuous: X taken from the data
    let mut chart = ContinuousChart::new(style.clone());
    chart.set_label_x("X");
    chart.set_label_y("Y");
    set_bounds(&mut chart, (min_x, max_x), (min_y, max_y));
    chart.add_series(points.clone())?;
    let out = out_name_with(&path, "continuous");
    chart.render_to_png(&opts, &out)?;
    info!(output = %out.display(), "wrote chart");

    // 2) Indexed: Y values by row position
    let mut indexed = IndexedChart::new(style);
    indexed.set_label_x("Row");
    indexed.set_label_y("Y");
    if let Err(e) = fit_y(&mut indexed, min_y, max_y) {
        warn!(error = %e, "keeping default Y range");
    }
    indexed.add_series(points.iter().map(|p| p.1).collect())?;
    let out = out_name_with(&path, "indexed");
    indexed.render_to_png(&opts, &out)?;
    info!(output = %out.display(), max_x = indexed.max_x(), "wrote chart");

    Ok(())
}

fn set_bounds(chart: &mut ContinuousChart, x: (f64, f64), y: (f64, f64)) {
    // Widen a degenerate span so the range stays valid.
    let (x0, x1) = if x.0 < x.1 { x } else { (x.0 - 0.5, x.0 + 0.5) };
    // Max first when growing upward keeps min < max at every step.
    let result = if x0 >= chart.x_range().max() {
        chart.set_max_x(x1).and_then(|_| chart.set_min_x(x0))
    } else {
        chart.set_min_x(x0).and_then(|_| chart.set_max_x(x1))
    };
    if let Err(e) = result {
        warn!(error = %e, "keeping default X range");
    }
    if let Err(e) = fit_y(chart, y.0, y.1) {
        warn!(error = %e, "keeping default Y range");
    }
}

fn fit_y<M: linegraph_core::Mapping>(
    chart: &mut linegraph_core::ChartSurface<M>,
    min: f64,
    max: f64,
) -> linegraph_core::Result<()> {
    let (lo, hi) = if min < max { (min, max) } else { (min - 0.5, min + 0.5) };
    if lo >= chart.y_range().max() {
        chart.set_max_y(hi)?;
        chart.set_min_y(lo)
    } else {
        chart.set_min_y(lo)?;
        chart.set_max_y(hi)
    }
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/linegraph_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("linegraph_{}_{}.png", stem, suffix));
    out
}

/// Load `x,y` rows. Header names are matched loosely; without a usable
/// header the first two columns are taken.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "t", "index"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "v", "close"]).unwrap_or(1);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "ignored rows without two finite numbers");
    }
    Ok(out)
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
