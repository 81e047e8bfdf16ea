//! Reference values of every law at its default parameters
//!
//! Computed independently in double precision from the published
//! expressions.

// KM2005: M=10, β=∞, b=0.4, α_vir=1, ε=0.3, φ_t=1/3, φ_x=0.12
pub const KM2005_SIGMA_S: f64 = 2.833213344056216;
pub const KM2005_SCRIT: f64 = 1.0446649728526092;
pub const KM2005_SFR: f64 = 0.7673889428700016;

// KM2005 with β=2
pub const KM2005_BETA2_SIGMA_S: f64 = 2.4567357728213044;
pub const KM2005_BETA2_SCRIT: f64 = 1.7378121534125546;
pub const KM2005_BETA2_SFR: f64 = 0.6289354425721811;

// PN2011: φ_t=1/1.5, θ=0.65
pub const PN2011_SCRIT: f64 = 2.763673358581829;
pub const PN2011_SFR: f64 = 0.41690248837123894;
pub const PN2011_BETA2_SCRIT: f64 = 2.141375510180457;
pub const PN2011_BETA2_SFR: f64 = 0.3080469776689663;

// HC2011: φ_t=1/0.24, y_cut=1.3
pub const HC2011_SCRIT: f64 = -0.6581400161047297;
pub const HC2011_MULTIFF_SCRIT: f64 = -4.449876855658373;

// Burkhart2018: M=10, β=20, ε=0.2, α=2
pub const BURKHART_SIGMA_S: f64 = 2.787360039560094;
pub const BURKHART_SCRIT: f64 = 1.989355179248462;
pub const BURKHART_SFR: f64 = 1.767613745927399e-05;

// Burkhart2018 along alpha at the default cloud
pub const BURKHART_ALPHA_SFR: [(f64, f64); 4] = [
    (1.5, 0.010780030809889787),
    (2.0, 1.767613745927399e-05),
    (2.5, 3.516769579101367e-09),
    (3.0, 8.768289114510492e-14),
];

// Burkhart2018 at the corners of the alpha plot, α=2
pub const BURKHART_MACH4_SOLENOIDAL_SFR: f64 = 0.07852613226543383;
pub const BURKHART_MACH25_MIXED_SFR: f64 = 1.5952364287452694e-16;
