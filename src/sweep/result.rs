//! Results of a one-dimensional sweep, ready for export and plotting

use crate::error::LawError;
use crate::physics::{CloudParameters, LawData, LawQuantity, StarFormationLaw};

use super::{evaluate, evaluate_with, SweepParameter};

/// All quantities of one law along a 1-D parameter sweep
///
/// # Example
///
/// ```rust
/// use sflaws::models::{HC2011, KM2005};
/// use sflaws::sweep::{SweepParameter, SweepResult};
///
/// let machs = [5.0, 10.0, 20.0];
///
/// let km = SweepResult::compute(&KM2005::default(), SweepParameter::Mach, &machs).unwrap();
/// assert_eq!(km.sfr_ff.as_ref().map(Vec::len), Some(3));
///
/// // No closed-form SFR_ff: the column is absent, thresholds are still there
/// let hc = SweepResult::compute(&HC2011::default(), SweepParameter::Mach, &machs).unwrap();
/// assert!(hc.sfr_ff.is_none());
/// assert_eq!(hc.scrit.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Name of the law
    pub law: String,
    /// Name of the swept parameter
    pub parameter: String,
    /// Cloud parameters every point shares, apart from the swept one
    pub cloud: CloudParameters,
    /// Swept parameter values
    pub values: Vec<f64>,
    /// Turbulent variance at each value
    pub sigma_s: Vec<f64>,
    /// Critical log-density at each value
    pub scrit: Vec<f64>,
    /// SFR per free-fall time, `None` when the law has no closed form
    pub sfr_ff: Option<Vec<f64>>,
}

impl SweepResult {
    /// Sweep one cloud parameter of `law`
    ///
    /// # Errors
    /// Any [`LawError`] other than a missing SFR_ff formula.
    pub fn compute(
        law: &dyn StarFormationLaw,
        parameter: SweepParameter,
        values: &[f64],
    ) -> Result<Self, LawError> {
        let data = LawData::from(values);
        let column = |quantity| evaluate(law, quantity, parameter, &data).map(|d| d.to_vec());

        Ok(Self {
            law: law.name().to_string(),
            parameter: parameter.name().to_string(),
            cloud: *law.cloud(),
            values: values.to_vec(),
            sigma_s: column(LawQuantity::SigmaS)?,
            scrit: column(LawQuantity::Scrit)?,
            sfr_ff: optional(column(LawQuantity::SfrFf))?,
        })
    }

    /// Sweep a law-specific constant, `factory` building the law at each value
    ///
    /// `cloud` is taken from the law built at the first value.
    pub fn compute_with<L, F>(parameter: &str, values: &[f64], factory: F) -> Result<Self, LawError>
    where
        L: StarFormationLaw,
        F: Fn(f64) -> L + Sync + Send,
    {
        let data = LawData::from(values);
        let column = |quantity| evaluate_with(&data, &factory, quantity).map(|d| d.to_vec());

        let (law, cloud) = match values.first() {
            Some(first) => {
                let law = factory(*first);
                (law.name().to_string(), *law.cloud())
            }
            None => (String::new(), CloudParameters::default()),
        };

        Ok(Self {
            law,
            parameter: parameter.to_string(),
            cloud,
            values: values.to_vec(),
            sigma_s: column(LawQuantity::SigmaS)?,
            scrit: column(LawQuantity::Scrit)?,
            sfr_ff: optional(column(LawQuantity::SfrFf))?,
        })
    }

    /// Number of sweep points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Column of `quantity`, `None` for a missing SFR_ff
    pub fn column(&self, quantity: LawQuantity) -> Option<Vec<f64>> {
        match quantity {
            LawQuantity::SigmaS => Some(self.sigma_s.clone()),
            LawQuantity::Scrit => Some(self.scrit.clone()),
            LawQuantity::CriticalDensity => Some(self.scrit.iter().map(|s| s.exp()).collect()),
            LawQuantity::SfrFf => self.sfr_ff.clone(),
        }
    }
}

/// Turn a missing formula into `None`, keep other errors
fn optional(column: Result<Vec<f64>, LawError>) -> Result<Option<Vec<f64>>, LawError> {
    match column {
        Ok(values) => Ok(Some(values)),
        Err(e) if e.is_not_implemented() => Ok(None),
        Err(e) => Err(e),
    }
}
