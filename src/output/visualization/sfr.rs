//! Star formation rate sweep plots
//!
//! Overlays the SFR per free-fall time of several sweeps against the swept
//! parameter, on a linear or logarithmic y axis.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sflaws::models::{KM2005, PN2011};
//! use sflaws::output::visualization::{plot_sfr_sweep, PlotConfig, NO_TITLE};
//! use sflaws::sweep::{SweepParameter, SweepResult};
//!
//! let machs: Vec<f64> = (1..=30).map(f64::from).collect();
//! let results = vec![
//!     SweepResult::compute(&KM2005::default(), SweepParameter::Mach, &machs).unwrap(),
//!     SweepResult::compute(&PN2011::default(), SweepParameter::Mach, &machs).unwrap(),
//! ];
//!
//! plot_sfr_sweep(&results, "sfr_vs_mach.png", Some(&PlotConfig::sfr_sweep(NO_TITLE))).unwrap();
//! ```

use plotters::coord::CoordTranslate;
use plotters::prelude::*;
use std::error::Error;

use crate::sweep::SweepResult;
use super::config::{PlotConfig, NO_TITLE};

/// One curve ready to draw
struct Curve<'a> {
    label: &'a str,
    points: Vec<(f64, f64)>,
    color: RGBColor,
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot SFR_ff of several sweeps, labeled by law name
///
/// Each curve uses [`PlotConfig::law_color`]. Sweeps without a closed-form
/// SFR_ff are skipped.
pub fn plot_sfr_sweep(
    results: &[SweepResult],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let series: Vec<(&str, &SweepResult)> =
        results.iter().map(|r| (r.law.as_str(), r)).collect();

    let default_config = PlotConfig::sfr_sweep(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let curves = series
        .iter()
        .filter_map(|(label, result)| {
            curve_points(result, config.log_y).map(|points| Curve {
                label: *label,
                points,
                color: config.law_color(&result.law),
            })
        })
        .collect();

    plot_curves(curves, output_path, config)
}

/// Plot SFR_ff of several sweeps with custom labels
///
/// Curves are colored by position (see [`PlotConfig::multi_series_colors`]),
/// so several sweeps of the same law stay distinguishable.
///
/// # Example
///
/// ```rust,ignore
/// let series = vec![("M=4 b=1/3", &low), ("M=25 b=0.7", &high)];
/// plot_sfr_sweep_labeled(&series, "burkhart_alpha.png", Some(&config))?;
/// ```
pub fn plot_sfr_sweep_labeled(
    series: &[(&str, &SweepResult)],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::sfr_sweep(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let curves = series
        .iter()
        .enumerate()
        .filter_map(|(idx, (label, result))| {
            curve_points(result, config.log_y).map(|points| Curve {
                label: *label,
                points,
                color: config.get_series_color(idx),
            })
        })
        .collect();

    plot_curves(curves, output_path, config)
}

/// Drawable points of a sweep, `None` without an SFR_ff column
fn curve_points(result: &SweepResult, log_y: bool) -> Option<Vec<(f64, f64)>> {
    let Some(sfr) = result.sfr_ff.as_ref() else {
        log::warn!("{}: no SFR_ff to plot, skipping", result.law);
        return None;
    };

    let points = result
        .values
        .iter()
        .zip(sfr.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite() && (!log_y || **y > 0.0))
        .map(|(x, y)| (*x, *y))
        .collect();

    Some(points)
}

fn plot_curves(
    curves: Vec<Curve<'_>>,
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    if curves.iter().all(|c| c.points.is_empty()) {
        return Err("No SFR values to plot".into());
    }

    let (x_min, x_max) = bounds(curves.iter().flat_map(|c| c.points.iter().map(|p| p.0)));
    let (y_min, y_max) = bounds(curves.iter().flat_map(|c| c.points.iter().map(|p| p.1)));

    let x_range = if x_max > x_min { x_min..x_max } else { (x_min - 0.5)..(x_max + 0.5) };

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_sfr_impl(backend, &curves, config, x_range, (y_min, y_max))
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_sfr_impl(backend, &curves, config, x_range, (y_min, y_max))
        }
    }
}

/// Implementation for SFR plotting with concrete backend
fn plot_sfr_impl<DB: DrawingBackend>(
    backend: DB,
    curves: &[Curve<'_>],
    config: &PlotConfig,
    x_range: std::ops::Range<f64>,
    (y_min, y_max): (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70);

    if config.log_y {
        let mut chart =
            builder.build_cartesian_2d(x_range, ((y_min / 2.0)..(y_max * 2.0)).log_scale())?;

        if config.show_grid {
            chart.configure_mesh()
                .x_desc(&config.xlabel)
                .y_desc(&config.ylabel)
                .x_label_formatter(&|x| format!("{:.2}", x))
                .y_label_formatter(&|y| format!("{:.0e}", y))
                .draw()?;
        }
        draw_curves(&mut chart, curves, config)?;
    } else {
        let y_low = y_min.min(0.0);
        let mut chart = builder.build_cartesian_2d(x_range, y_low..(y_max * 1.1))?;

        if config.show_grid {
            chart.configure_mesh()
                .x_desc(&config.xlabel)
                .y_desc(&config.ylabel)
                .x_label_formatter(&|x| format!("{:.2}", x))
                .y_label_formatter(&|y| format!("{:.3}", y))
                .draw()?;
        }
        draw_curves(&mut chart, curves, config)?;
    }

    root.present()?;

    Ok(())
}

/// Draw every curve with its legend entry
fn draw_curves<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    curves: &[Curve<'_>],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    CT: CoordTranslate<From = (f64, f64)>,
{
    for curve in curves {
        let color = curve.color;

        chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Finite min and max of the values
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

// =================================================================================================
// Tests
// =================================================================================================
