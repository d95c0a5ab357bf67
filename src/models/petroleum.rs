//! Petroleum density/temperature compensation models.
//!
//! [`VolumeCorrection`] is the [`twine_core::Model`] adapter. It takes
//! [`uom`] quantities, converts them to kg/m³ and °C, and delegates to the
//! computational core, whose API is re-exported here for callers that work
//! with plain numbers.

mod core;

pub use self::core::{
    CompensationConfig, CompensationError, CompensationRegime, CompensationResult,
    MeasurementSample, NoopObserver, Observer, OilCategory, Projection, RegimeCoefficients,
    STANDARD_TEMP_15, STANDARD_TEMP_20, SolveStatus, Solution, TracingObserver, alpha,
    calc_compensated_density, calc_compensated_density_with, classify_regime, com_modulus,
    compute_final_vcf, exp_factor, project_to_20c, refine_product_regime, solve_density_15,
};

use twine_core::Model;
use uom::si::{
    f64::{MassDensity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Input to the [`VolumeCorrection`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeCorrectionInput {
    pub category: OilCategory,

    /// Density observed at [`reference_temperature`](Self::reference_temperature).
    pub reference_density: Constrained<MassDensity, StrictlyPositive>,

    pub reference_temperature: ThermodynamicTemperature,

    /// Temperature of the volume to be corrected.
    pub actual_temperature: ThermodynamicTemperature,
}

/// Output of the [`VolumeCorrection`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeCorrectionOutput {
    pub density_20c: MassDensity,
    pub density_15c: MassDensity,
    pub vcf_20: f64,
    pub regime: CompensationRegime,
    pub status: SolveStatus,
}

/// Volume correction model for petroleum products.
///
/// # Example
///
/// ```
/// use petro_vcf::{
///     models::petroleum::{CompensationConfig, OilCategory, VolumeCorrection, VolumeCorrectionInput},
///     support::constraint::StrictlyPositive,
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let model = VolumeCorrection::new(CompensationConfig::default());
/// let input = VolumeCorrectionInput {
///     category: OilCategory::Lubricant,
///     reference_density: StrictlyPositive::new(
///         MassDensity::new::<kilogram_per_cubic_meter>(880.0),
///     )
///     .unwrap(),
///     reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(40.0),
///     actual_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
/// };
///
/// let output = model.call(&input).unwrap();
/// assert!((output.vcf_20 - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VolumeCorrection<O = TracingObserver> {
    config: CompensationConfig,
    observer: O,
}

impl VolumeCorrection {
    /// Creates a model that traces through [`tracing`].
    #[must_use]
    pub fn new(config: CompensationConfig) -> Self {
        Self {
            config,
            observer: TracingObserver,
        }
    }
}

impl Default for VolumeCorrection {
    fn default() -> Self {
        Self::new(CompensationConfig::default())
    }
}

impl<O: Observer> VolumeCorrection<O> {
    /// Creates a model that reports ticks and traces to `observer`.
    #[must_use]
    pub fn with_observer(config: CompensationConfig, observer: O) -> Self {
        Self { config, observer }
    }

    #[must_use]
    pub fn config(&self) -> &CompensationConfig {
        &self.config
    }
}

impl<O: Observer> Model for VolumeCorrection<O> {
    type Input = VolumeCorrectionInput;
    type Output = VolumeCorrectionOutput;
    type Error = CompensationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let sample = MeasurementSample {
            density: input
                .reference_density
                .as_ref()
                .get::<kilogram_per_cubic_meter>(),
            temperature: input.reference_temperature.get::<degree_celsius>(),
        };

        let result = calc_compensated_density_with(
            input.category,
            sample,
            input.actual_temperature.get::<degree_celsius>(),
            &self.config,
            &self.observer,
        )?;

        Ok(VolumeCorrectionOutput {
            density_20c: MassDensity::new::<kilogram_per_cubic_meter>(result.density_20c),
            density_15c: MassDensity::new::<kilogram_per_cubic_meter>(result.density_15),
            vcf_20: result.vcf_20,
            regime: result.regime,
            status: result.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_density::gram_per_cubic_centimeter, thermodynamic_temperature::kelvin};

    fn input(
        category: OilCategory,
        density: MassDensity,
        reference: ThermodynamicTemperature,
        actual: ThermodynamicTemperature,
    ) -> VolumeCorrectionInput {
        VolumeCorrectionInput {
            category,
            reference_density: StrictlyPositive::new(density).unwrap(),
            reference_temperature: reference,
            actual_temperature: actual,
        }
    }

    #[test]
    fn matches_core_computation() {
        let model = VolumeCorrection::new(CompensationConfig::default());
        let output = model
            .call(&input(
                OilCategory::Crude,
                MassDensity::new::<kilogram_per_cubic_meter>(900.0),
                ThermodynamicTemperature::new::<degree_celsius>(20.0),
                ThermodynamicTemperature::new::<degree_celsius>(35.0),
            ))
            .unwrap();

        let expected = calc_compensated_density(OilCategory::Crude, 900.0, 20.0, 35.0).unwrap();
        assert_relative_eq!(
            output.density_20c.get::<kilogram_per_cubic_meter>(),
            expected.density_20c,
            max_relative = 1e-12
        );
        assert_relative_eq!(output.vcf_20, expected.vcf_20, max_relative = 1e-12);
        assert_eq!(output.regime, CompensationRegime::Crude);
    }

    #[test]
    fn converts_units_at_boundary() {
        let model = VolumeCorrection::with_observer(CompensationConfig::default(), NoopObserver);

        let in_si = model
            .call(&input(
                OilCategory::RefinedProduct,
                MassDensity::new::<kilogram_per_cubic_meter>(750.0),
                ThermodynamicTemperature::new::<degree_celsius>(25.0),
                ThermodynamicTemperature::new::<degree_celsius>(30.0),
            ))
            .unwrap();

        let in_other_units = model
            .call(&input(
                OilCategory::RefinedProduct,
                MassDensity::new::<gram_per_cubic_centimeter>(0.75),
                ThermodynamicTemperature::new::<kelvin>(298.15),
                ThermodynamicTemperature::new::<kelvin>(303.15),
            ))
            .unwrap();

        assert_eq!(in_si.regime, in_other_units.regime);
        assert_relative_eq!(
            in_si.density_20c.get::<kilogram_per_cubic_meter>(),
            in_other_units.density_20c.get::<kilogram_per_cubic_meter>(),
            max_relative = 1e-9
        );
        assert_relative_eq!(in_si.vcf_20, in_other_units.vcf_20, max_relative = 1e-9);
    }

    #[test]
    fn propagates_regime_errors() {
        let model = VolumeCorrection::with_observer(CompensationConfig::default(), NoopObserver);
        let result = model.call(&input(
            OilCategory::RefinedProduct,
            MassDensity::new::<kilogram_per_cubic_meter>(1500.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        ));

        assert!(matches!(
            result,
            Err(CompensationError::NoMatchingRegime { .. })
        ));
    }
}
