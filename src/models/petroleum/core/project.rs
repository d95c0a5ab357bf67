use super::{CompensationRegime, STANDARD_TEMP_15, STANDARD_TEMP_20, alpha, exp_factor};

/// Raw projection of a 15°C density to 20°C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Raw 20°C density, before the compensation-modulus correction, in kg/m³.
    pub density_20c: f64,

    /// Volume correction factor from 15°C to 20°C.
    pub vcf_15_to_20: f64,
}

/// Projects a 15°C density to 20°C using the regime's expansion coefficient.
#[must_use]
pub fn project_to_20c(regime: CompensationRegime, density_15: f64) -> Projection {
    let alpha = alpha(regime, density_15);
    let vcf_15_to_20 = exp_factor(alpha, STANDARD_TEMP_20 - STANDARD_TEMP_15);

    Projection {
        density_20c: density_15 * vcf_15_to_20,
        vcf_15_to_20,
    }
}

/// Computes the VCF converting a volume at `sample_temp` to its 20°C equivalent.
///
/// `density_20` is the raw projected density from [`project_to_20c`].
#[must_use]
pub fn compute_final_vcf(
    regime: CompensationRegime,
    sample_temp: f64,
    density_15: f64,
    density_20: f64,
) -> f64 {
    let alpha = alpha(regime, density_15);
    density_15 * exp_factor(alpha, sample_temp - STANDARD_TEMP_15) / density_20
}
