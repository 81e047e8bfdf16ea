//! Names of the cloud parameters a sweep can vary

use std::fmt;
use std::str::FromStr;

use crate::physics::CloudParameters;

/// Cloud parameter varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepParameter {
    /// Turbulent sonic Mach number
    Mach,
    /// Plasma beta
    Beta,
    /// Turbulence forcing parameter
    B,
    /// Virial parameter
    AlphaVir,
    /// Core-to-star efficiency
    Epsilon,
    /// Free-fall time scaling
    PhiT,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 6] = [
        SweepParameter::Mach,
        SweepParameter::Beta,
        SweepParameter::B,
        SweepParameter::AlphaVir,
        SweepParameter::Epsilon,
        SweepParameter::PhiT,
    ];

    /// Column and axis name
    pub fn name(&self) -> &'static str {
        match self {
            SweepParameter::Mach => "Mach",
            SweepParameter::Beta => "Beta",
            SweepParameter::B => "b",
            SweepParameter::AlphaVir => "alpha_vir",
            SweepParameter::Epsilon => "epsilon",
            SweepParameter::PhiT => "phi_t",
        }
    }

    /// Copy of `cloud` with this parameter set to `value`
    pub fn apply(&self, cloud: CloudParameters, value: f64) -> CloudParameters {
        match self {
            SweepParameter::Mach => cloud.with_mach(value),
            SweepParameter::Beta => cloud.with_beta(value),
            SweepParameter::B => cloud.with_b(value),
            SweepParameter::AlphaVir => cloud.with_alpha_vir(value),
            SweepParameter::Epsilon => cloud.with_epsilon(value),
            SweepParameter::PhiT => cloud.with_phi_t(value),
        }
    }

    /// Current value of this parameter in `cloud`
    pub fn get(&self, cloud: &CloudParameters) -> f64 {
        match self {
            SweepParameter::Mach => cloud.mach,
            SweepParameter::Beta => cloud.beta,
            SweepParameter::B => cloud.b,
            SweepParameter::AlphaVir => cloud.alpha_vir,
            SweepParameter::Epsilon => cloud.epsilon,
            SweepParameter::PhiT => cloud.phi_t,
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepParameter::ALL
            .into_iter()
            .find(|parameter| parameter.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown cloud parameter: {}", s))
    }
}
