//! Example: Density PDF panels over Mach number and magnetization
//!
//! For KM2005 and PN2011, draws a 3×3 grid of density panels:
//!
//! - Columns: Mach 5, 10, 20
//! - Rows: β = ∞ (hydro), 2, 1.25
//!
//! Each panel shows the lognormal PDF of the overdensity, shaded above the
//! collapse threshold `exp(scrit)`.
//!
//! **Cloud** (every other parameter at the law defaults):
//! - b = 0.4 (mixed forcing)
//! - α_vir = 1.0
//! - mean density 10⁴ cm⁻³, grid spanning ±10 decades

use sflaws::{
    models::{KM2005, PN2011},
    output::{plot_density_panels, PlotConfig},
    physics::{density::overdensity_grid, StarFormationLaw},
    output::visualization::density_panel_profiles,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Density PDF Panels - Mach × Beta");
    println!("═══════════════════════════════════════════════════════\n");

    let machs = [5.0, 10.0, 20.0];
    let betas = [f64::INFINITY, 2.0, 1.25];
    let overdensity = overdensity_grid(1e4, 10.0, 10_000);

    let laws: [Box<dyn StarFormationLaw>; 2] =
        [Box::new(KM2005::default()), Box::new(PN2011::default())];

    for law in &laws {
        println!("{}:", law.name());
        println!(
            "{:>6} {:>8} {:>10} {:>14} {:>14} {:>10}",
            "Mach", "Beta", "sigma_s", "threshold", "log10(thresh)", "scrit"
        );
        println!("{:-<67}", "");

        for profile in density_panel_profiles(law.as_ref(), &machs, &betas, &overdensity) {
            println!(
                "{:>6.1} {:>8.2} {:>10.4} {:>14.4e} {:>14.4} {:>10.4}",
                profile.mach,
                profile.beta,
                profile.sigma_s,
                profile.threshold(),
                profile.threshold().log10(),
                profile.scrit
            );
        }

        let output = format!("{}_machbetaplots.png", law.name());
        let config = PlotConfig::density_panels(law.name());
        plot_density_panels(law.as_ref(), &machs, &betas, &overdensity, &output, Some(&config))?;
        println!("\n  ✓ Saved {}\n", output);
    }

    Ok(())
}
