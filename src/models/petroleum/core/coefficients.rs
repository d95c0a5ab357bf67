use super::CompensationRegime;

/// Regression constants for one compensation chart.
///
/// The expansion coefficient is `α = K0/ρ² + K1/ρ + A` with `ρ` in kg/m³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeCoefficients {
    pub k0: f64,
    pub k1: f64,
    pub a: f64,
}

impl RegimeCoefficients {
    const CRUDE: Self = Self::new(613.9723, 0.0, 0.0);
    const GASOLINE: Self = Self::new(346.4228, 0.4388, 0.0);
    const TRANSITION: Self = Self::new(2680.321, 0.0, -0.003_363_12);
    const JET_FUEL: Self = Self::new(594.5418, 0.0, 0.0);
    const DIESEL: Self = Self::new(186.9696, 0.4862, 0.0);
    const LUBE: Self = Self::new(0.0, 0.6278, 0.0);

    const fn new(k0: f64, k1: f64, a: f64) -> Self {
        Self { k0, k1, a }
    }

    /// Returns the constants for a regime.
    #[must_use]
    pub fn for_regime(regime: CompensationRegime) -> Self {
        match regime {
            CompensationRegime::Crude => Self::CRUDE,
            CompensationRegime::Gasoline => Self::GASOLINE,
            CompensationRegime::Transition => Self::TRANSITION,
            CompensationRegime::JetFuel => Self::JET_FUEL,
            CompensationRegime::Diesel => Self::DIESEL,
            CompensationRegime::Lube => Self::LUBE,
        }
    }

    /// Returns the constants for a raw chart code.
    ///
    /// Unknown codes fall back to the gasoline chart.
    #[must_use]
    pub fn for_chart_code(code: u8) -> Self {
        CompensationRegime::ALL
            .into_iter()
            .find(|regime| regime.chart_code() == code)
            .map_or(Self::GASOLINE, Self::for_regime)
    }

    /// Evaluates the expansion coefficient at the given density.
    ///
    /// A zero density yields a non-finite value rather than an error.
    #[must_use]
    pub fn alpha(&self, density: f64) -> f64 {
        self.k0 / (density * density) + self.k1 / density + self.a
    }
}

/// Computes the expansion coefficient for a regime at the given density.
#[must_use]
pub fn alpha(regime: CompensationRegime, density: f64) -> f64 {
    RegimeCoefficients::for_regime(regime).alpha(density)
}
