use super::{
    CompensationConfig, CompensationError, CompensationRegime, Observer, OilCategory,
    STANDARD_TEMP_15, STANDARD_TEMP_20, SolveStatus, Solution, TracingObserver, classify_regime,
    com_modulus, compute_final_vcf, project_to_20c, refine_product_regime, solve_density_15,
};

/// A density observed at a stated temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSample {
    /// Observed density, in kg/m³.
    pub density: f64,

    /// Temperature at which the density was observed, in °C.
    pub temperature: f64,
}

/// Result of a density compensation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompensationResult {
    /// Standard density at 20°C, in kg/m³.
    pub density_20c: f64,

    /// Factor converting a volume at the actual temperature to its 20°C equivalent.
    pub vcf_20: f64,

    /// Compensation chart the result was computed with.
    pub regime: CompensationRegime,

    /// Settled 15°C standard density, in kg/m³.
    pub density_15: f64,

    /// Status of the final 15°C density solve.
    ///
    /// [`SolveStatus::MaxIters`] here is a warning: the values above are the
    /// solver's best estimate.
    pub status: SolveStatus,
}

/// Computes the 20°C standard density and VCF with default settings.
///
/// Diagnostic traces are forwarded to [`tracing`].
///
/// # Errors
///
/// Returns [`CompensationError::NoMatchingRegime`] if a refined product's
/// 15°C density lies outside every supported band.
///
/// # Example
///
/// ```
/// use petro_vcf::models::petroleum::{CompensationRegime, OilCategory, calc_compensated_density};
///
/// let result = calc_compensated_density(OilCategory::RefinedProduct, 889.87, 30.0, 30.0).unwrap();
/// assert_eq!(result.regime, CompensationRegime::Diesel);
/// ```
pub fn calc_compensated_density(
    category: OilCategory,
    reference_density: f64,
    reference_temp: f64,
    actual_temp: f64,
) -> Result<CompensationResult, CompensationError> {
    let sample = MeasurementSample {
        density: reference_density,
        temperature: reference_temp,
    };
    calc_compensated_density_with(
        category,
        sample,
        actual_temp,
        &CompensationConfig::default(),
        &TracingObserver,
    )
}

/// Computes the 20°C standard density and VCF with explicit settings and hooks.
///
/// Refined products are solved twice: once in the provisional gasoline
/// regime to find which density band they belong to, then again from the
/// original sample in the selected regime.
///
/// # Errors
///
/// Returns [`CompensationError::NoMatchingRegime`] if a refined product's
/// 15°C density lies outside every supported band, or
/// [`CompensationError::NonConvergence`] if a solve hits the iteration cap
/// and `config.fail_on_max_iters` is set.
pub fn calc_compensated_density_with(
    category: OilCategory,
    sample: MeasurementSample,
    actual_temp: f64,
    config: &CompensationConfig,
    observer: &impl Observer,
) -> Result<CompensationResult, CompensationError> {
    let solve = |regime| {
        let solution =
            solve_density_15(regime, sample.density, sample.temperature, config, observer);
        check_convergence(&solution, config)?;
        Ok::<_, CompensationError>(solution)
    };

    let mut regime = classify_regime(category);
    observer.on_trace(&format!("compensate: {category:?} starts with {regime} chart"));

    if category == OilCategory::RefinedProduct {
        let probe = solve(regime)?;
        regime = refine_product_regime(probe.density)?;
        observer.on_trace(&format!(
            "compensate: probe rho15={} selects {regime} chart",
            probe.density
        ));
    }

    let solution = solve(regime)?;
    let density_15 = solution.density;

    let projection = project_to_20c(regime, density_15);
    observer.on_trace(&format!("compensate: raw rho20={}", projection.density_20c));

    let vcf_20 = compute_final_vcf(regime, actual_temp, density_15, projection.density_20c);

    Ok(CompensationResult {
        density_20c: projection.density_20c * com_modulus(STANDARD_TEMP_15, STANDARD_TEMP_20),
        vcf_20,
        regime,
        density_15,
        status: solution.status,
    })
}

fn check_convergence(
    solution: &Solution,
    config: &CompensationConfig,
) -> Result<(), CompensationError> {
    match solution.status {
        SolveStatus::MaxIters { residual } if config.fail_on_max_iters => {
            Err(CompensationError::NonConvergence {
                residual,
                iters: solution.iters,
            })
        }
        _ => Ok(()),
    }
}
