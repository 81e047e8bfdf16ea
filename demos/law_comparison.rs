//! Example: All laws over the same Mach range
//!
//! Evaluates every law at its default cloud for Mach 1 to 30, prints the
//! thresholds and rates, then writes:
//!
//! - `laws_mach.csv`: one column group per law
//! - `laws_mach.png`: SFR_ff of the laws that have one
//!
//! HC2011 and HC2011_multiff only provide thresholds; their SFR_ff columns
//! are absent.

use sflaws::{
    models::LawKind,
    output::{export_comparison_csv, plot_sfr_sweep, CsvConfig, PlotConfig},
    output::export::CsvMetadata,
    physics::LawData,
    sweep::{SweepParameter, SweepResult},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Star Formation Laws - Mach sweep");
    println!("═══════════════════════════════════════════════════════\n");

    let machs = LawData::linspace(1.0, 30.0, 59).to_vec();

    let start = Instant::now();
    let results = LawKind::ALL
        .into_iter()
        .map(|kind| {
            let law = kind.build(kind.default_cloud());
            SweepResult::compute(law.as_ref(), SweepParameter::Mach, &machs)
        })
        .collect::<Result<Vec<_>, _>>()?;
    println!("Evaluated {} laws × {} Mach numbers in {:.2?}\n", results.len(), machs.len(), start.elapsed());

    // ====== Table at a few Mach numbers ======

    println!("{:<16} {:>6} {:>10} {:>10} {:>12}", "Law", "Mach", "sigma_s", "scrit", "SFR_ff");
    println!("{:-<58}", "");
    for result in &results {
        for (i, mach) in result.values.iter().enumerate() {
            if ![5.0, 10.0, 20.0].contains(mach) {
                continue;
            }
            let sfr = match &result.sfr_ff {
                Some(sfr) => format!("{:.4e}", sfr[i]),
                None => "-".to_string(),
            };
            println!(
                "{:<16} {:>6.1} {:>10.4} {:>10.4} {:>12}",
                result.law, mach, result.sigma_s[i], result.scrit[i], sfr
            );
        }
    }

    // ====== Output ======

    let mut metadata = CsvMetadata::default();
    metadata.swept_parameter = Some("Mach".to_string());
    metadata.add_custom("Laws".to_string(), LawKind::ALL.map(|k| k.name()).join(", "));
    export_comparison_csv(&results, "laws_mach.csv", Some(&CsvConfig::default().with_metadata(metadata)))?;
    println!("\n  ✓ Saved laws_mach.csv");

    plot_sfr_sweep(&results, "laws_mach.png", Some(&PlotConfig::sfr_sweep("SFR_ff vs Mach")))?;
    println!("  ✓ Saved laws_mach.png\n");

    Ok(())
}
