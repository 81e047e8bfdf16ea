//! Example: Burkhart2018 star formation rate versus power-law slope
//!
//! Sweeps the slope α of the high-density tail over [1, 3] for four clouds:
//!
//! - Mach 4 and 25
//! - b = 1/3 (solenoidal) and 0.7 (mostly compressive)
//!
//! α = 1 is a pole of the tail normalization: the first point is not
//! finite and is left out of the plot.
//!
//! The absolute rate is then given for clouds of 10², 10³ and 10⁴ M☉ at the
//! reference density (500 Da cm⁻³).

use sflaws::{
    models::Burkhart2018,
    output::{plot_sfr_sweep_labeled, PlotConfig},
    physics::{constants, LawData, StarFormationLaw},
    sweep::SweepResult,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Burkhart2018 - SFR_ff vs tail slope");
    println!("═══════════════════════════════════════════════════════\n");

    let alphas = LawData::linspace(1.0, 3.0, 50).to_vec();
    let clouds = [(4.0, 1.0 / 3.0), (25.0, 1.0 / 3.0), (4.0, 0.7), (25.0, 0.7)];

    let mut sweeps = Vec::with_capacity(clouds.len());
    for (mach, b) in clouds {
        let cloud = Burkhart2018::default_cloud().with_mach(mach).with_b(b);
        let result = SweepResult::compute_with("alpha", &alphas, |alpha| {
            Burkhart2018::new(cloud).with_alpha(alpha)
        })?;
        sweeps.push((format!("M={} b={:.2}", mach, b), result));
    }

    println!("{:<16} {:>12} {:>12} {:>12}", "Cloud", "alpha=1.5", "alpha=2", "alpha=3");
    println!("{:-<55}", "");
    for (label, result) in &sweeps {
        let cloud = result.cloud;
        let at = |alpha: f64| {
            Burkhart2018::new(cloud).with_alpha(alpha).sfr_ff().unwrap_or(f64::NAN)
        };
        println!("{:<16} {:>12.4e} {:>12.4e} {:>12.4e}", label, at(1.5), at(2.0), at(3.0));
    }

    let series: Vec<(&str, &SweepResult)> =
        sweeps.iter().map(|(label, result)| (label.as_str(), result)).collect();

    let mut config = PlotConfig::sfr_sweep("Burkhart2018");
    config.xlabel = "alpha".to_string();
    config.log_y = true;
    plot_sfr_sweep_labeled(&series, "Burkhart2018_alpha.png", Some(&config))?;
    println!("\n  ✓ Saved Burkhart2018_alpha.png\n");

    // ====== Absolute rates ======

    let t_ff = constants::free_fall_time(constants::reference_density());
    let sfr_ff = Burkhart2018::default().sfr_ff()?;

    println!("Reference cloud:");
    println!("  t_ff   : {:.4e} s ({:.3} Myr)", t_ff, t_ff / constants::YEAR / 1e6);
    println!("  SFR_ff : {:.4e} (default parameters)\n", sfr_ff);

    println!("{:>12} {:>16}", "Mass [M☉]", "SFR [M☉/yr]");
    println!("{:-<29}", "");
    for mass in [1e2, 1e3, 1e4] {
        println!("{:>12.0e} {:>16.4e}", mass, constants::star_formation_rate(sfr_ff, mass, t_ff));
    }

    Ok(())
}
