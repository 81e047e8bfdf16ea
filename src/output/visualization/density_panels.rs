//! Mach × Beta density panels
//!
//! One panel per (Mach, Beta) pair: the lognormal overdensity profile on
//! log-log axes, the collapsing region above `exp(scrit)` filled, and a
//! vertical marker at the log-mean overdensity. Rows vary Beta, columns vary
//! Mach.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sflaws::models::KM2005;
//! use sflaws::output::visualization::{plot_density_panels, PlotConfig};
//! use sflaws::physics::density::overdensity_grid;
//!
//! let grid = overdensity_grid(1e4, 10.0, 2000);
//! let config = PlotConfig::density_panels("KM2005");
//!
//! plot_density_panels(
//!     &KM2005::default(),
//!     &[5.0, 10.0, 20.0],
//!     &[f64::INFINITY, 2.0, 1.25],
//!     &grid,
//!     "KM2005_machbetaplots.png",
//!     Some(&config),
//! ).unwrap();
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::physics::{DensityProfile, StarFormationLaw};
use super::config::PlotConfig;

/// Lower bound of the profile axis
const PROFILE_MIN: f64 = 1e-6;

/// Upper bound of the profile axis
const PROFILE_MAX: f64 = 1.5;

/// Decades shown on each side of the log-mean overdensity
const PANEL_DECADES: i32 = 6;

// =================================================================================================
// Profiles
// =================================================================================================

/// Density profiles of every panel, row-major (Beta rows, Mach columns)
///
/// `law` is rebuilt for each panel with its Mach and Beta; every other
/// parameter is kept.
pub fn density_panel_profiles(
    law: &dyn StarFormationLaw,
    machs: &[f64],
    betas: &[f64],
    overdensity: &[f64],
) -> Vec<DensityProfile> {
    let base = *law.cloud();

    betas
        .iter()
        .flat_map(|beta| machs.iter().map(move |mach| (*mach, *beta)))
        .map(|(mach, beta)| {
            let panel_law = law.rebuild(base.with_mach(mach).with_beta(beta));
            DensityProfile::from_law(panel_law.as_ref(), overdensity)
        })
        .collect()
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot a grid of density panels for one law
///
/// # Arguments
///
/// * `law` - Law whose cloud parameters are the base of every panel
/// * `machs` - Mach number of each column
/// * `betas` - Plasma beta of each row
/// * `overdensity` - Overdensity grid (see [`overdensity_grid`](crate::physics::density::overdensity_grid))
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
pub fn plot_density_panels(
    law: &dyn StarFormationLaw,
    machs: &[f64],
    betas: &[f64],
    overdensity: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if machs.is_empty() || betas.is_empty() {
        return Err("No panels provided".into());
    }
    if overdensity.is_empty() {
        return Err("Empty overdensity grid".into());
    }

    let profiles = density_panel_profiles(law, machs, betas, overdensity);
    let captions: Vec<String> = betas
        .iter()
        .flat_map(|beta| machs.iter().map(move |mach| format!("M={} β={}", mach, beta)))
        .collect();

    log::debug!(
        "Plotting {} density panels of {} to {}",
        profiles.len(),
        law.name(),
        output_path
    );

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::density_panels(law.name());
    let config = config.unwrap_or(&default_config);
    let layout = (betas.len(), machs.len());

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_panels_impl(backend, &profiles, &captions, layout, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_panels_impl(backend, &profiles, &captions, layout, config)
        }
    }
}

/// Implementation for panel plotting with concrete backend
fn plot_panels_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[DensityProfile],
    captions: &[String],
    layout: (usize, usize),
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let root = root.titled(&config.title, ("sans-serif", 36).into_font())?;
    let areas = root.split_evenly(layout);

    for ((area, profile), caption) in areas.iter().zip(profiles).zip(captions) {
        draw_panel(area, profile, caption, config)?;
    }

    root.present()?;

    Ok(())
}

/// Draw one panel
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    profile: &DensityProfile,
    caption: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let color = config.law_color(profile.law);
    let marker = profile.mean_marker();
    let span = 10f64.powi(PANEL_DECADES);

    let (x_min, x_max) = if marker.is_finite() && marker > 0.0 {
        (marker / span, marker * span)
    } else {
        (1.0 / span, span)
    };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20).into_font())
        .margin(8)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(
            (x_min..x_max).log_scale(),
            (PROFILE_MIN..PROFILE_MAX).log_scale(),
        )?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .x_labels(5)
            .y_labels(4)
            .x_label_formatter(&|x| format!("{:.0e}", x))
            .y_label_formatter(&|y| format!("{:.0e}", y))
            .draw()?;
    }

    let visible = |(x, p): &(f64, f64)| {
        *x >= x_min && *x <= x_max && p.is_finite() && *p > PROFILE_MIN
    };

    // Collapsing region
    let above: Vec<(f64, f64)> = profile.above_threshold().into_iter().filter(visible).collect();
    if !above.is_empty() {
        chart.draw_series(AreaSeries::new(
            above,
            PROFILE_MIN,
            color.mix(config.fill_opacity).filled(),
        ))?;
    }

    chart.draw_series(LineSeries::new(
        profile
            .overdensity
            .iter()
            .copied()
            .zip(profile.profile.iter().copied())
            .filter(visible),
        ShapeStyle::from(&color).stroke_width(config.line_width),
    ))?;

    // Log-mean marker
    if marker.is_finite() && marker > 0.0 {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(marker, PROFILE_MIN), (marker, 1.0)],
            BLACK.mix(0.5).stroke_width(3),
        )))?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
