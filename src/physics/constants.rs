//! Physical constants (CGS) and free-fall time
//!
//! Used to turn a dimensionless SFR_ff into an absolute star formation
//! rate for a cloud of given mass and mean density.

use std::f64::consts::PI;

/// Gravitational constant [cm³ g⁻¹ s⁻²]
pub const G: f64 = 6.674_30e-8;

/// Atomic mass unit [g]
pub const DALTON: f64 = 1.660_539_066_60e-24;

/// Solar mass [g]
pub const SOLAR_MASS: f64 = 1.988_409_870_698_051e33;

/// Julian year [s]
pub const YEAR: f64 = 365.25 * 86_400.0;

/// Mean number density of the reference cloud [Da cm⁻³]
pub const REFERENCE_NUMBER_DENSITY: f64 = 500.0;

/// Convert a number density [cm⁻³] to a mass density [g cm⁻³]
pub fn mass_density_from_number_density(number_density: f64, particle_mass: f64) -> f64 {
    number_density * particle_mass
}

/// Mass density of the reference cloud (500 Da cm⁻³) [g cm⁻³]
pub fn reference_density() -> f64 {
    mass_density_from_number_density(REFERENCE_NUMBER_DENSITY, DALTON)
}

/// Free-fall time of a uniform sphere [s]
///
/// ```text
/// t_ff = sqrt(3π / (32 G ρ))
/// ```
///
/// # Example
///
/// ```rust
/// use sflaws::physics::constants::{free_fall_time, reference_density, YEAR};
///
/// let t_ff = free_fall_time(reference_density());
/// let myr = t_ff / YEAR / 1e6;
/// assert!((myr - 2.31).abs() < 0.01);
/// ```
pub fn free_fall_time(density: f64) -> f64 {
    (3.0 * PI / (32.0 * G * density)).sqrt()
}

/// Absolute star formation rate [M☉ yr⁻¹]
///
/// `SFR = SFR_ff · M / t_ff`, with the cloud mass in solar masses and the
/// free-fall time in seconds.
pub fn star_formation_rate(sfr_ff: f64, mass_msun: f64, free_fall_time: f64) -> f64 {
    sfr_ff * mass_msun / (free_fall_time / YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_free_fall_time() {
        let t_ff = free_fall_time(reference_density());
        assert_relative_eq!(reference_density(), 8.302695333e-22, max_relative = 1e-9);
        assert_relative_eq!(t_ff, 7.290346358961967e13, max_relative = 1e-9);
    }

    #[test]
    fn test_free_fall_time_scaling() {
        // t_ff ∝ ρ^(-1/2)
        let ratio = free_fall_time(1e-20) / free_fall_time(4e-20);
        assert_relative_eq!(ratio, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_star_formation_rate() {
        let t_ff = free_fall_time(reference_density());
        let sfr = star_formation_rate(0.1, 1e4, t_ff);
        assert_relative_eq!(sfr, 4.3286832265803786e-4, max_relative = 1e-9);
    }
}
