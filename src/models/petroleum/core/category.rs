use std::fmt;

use super::CompensationError;

/// Coarse oil category supplied by the caller.
///
/// The discriminants are the category codes used by field instruments.
/// Use [`OilCategory::try_from`] to validate a raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OilCategory {
    Crude = 0,
    RefinedProduct = 1,
    Lubricant = 2,
}

impl TryFrom<u8> for OilCategory {
    type Error = CompensationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Crude),
            1 => Ok(Self::RefinedProduct),
            2 => Ok(Self::Lubricant),
            _ => Err(CompensationError::InvalidOilCategory { code }),
        }
    }
}

/// One of the six density/temperature compensation charts.
///
/// The discriminants are the legacy chart codes, see
/// [`RegimeCoefficients::for_chart_code`](super::RegimeCoefficients::for_chart_code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompensationRegime {
    Crude = 0x10,
    Gasoline = 0x11,
    Transition = 0x12,
    JetFuel = 0x13,
    Diesel = 0x14,
    Lube = 0x15,
}

impl CompensationRegime {
    /// Every regime, in chart-code order.
    pub const ALL: [Self; 6] = [
        Self::Crude,
        Self::Gasoline,
        Self::Transition,
        Self::JetFuel,
        Self::Diesel,
        Self::Lube,
    ];

    /// Returns the legacy chart code for this regime.
    #[must_use]
    pub fn chart_code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for CompensationRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Crude => "crude",
            Self::Gasoline => "gasoline",
            Self::Transition => "transition",
            Self::JetFuel => "jet fuel",
            Self::Diesel => "diesel",
            Self::Lube => "lube",
        };
        f.write_str(name)
    }
}

/// Maps an oil category to its initial compensation regime.
///
/// Refined products map to [`CompensationRegime::Gasoline`] provisionally;
/// the true regime comes from [`refine_product_regime`] once a 15°C density
/// is known.
#[must_use]
pub fn classify_regime(category: OilCategory) -> CompensationRegime {
    match category {
        OilCategory::Crude => CompensationRegime::Crude,
        OilCategory::RefinedProduct => CompensationRegime::Gasoline,
        OilCategory::Lubricant => CompensationRegime::Lube,
    }
}

/// Density bands for refined products, in kg/m³, checked in order.
///
/// Each band is half-open: `[lower, upper)`.
const PRODUCT_BANDS: [(f64, f64, CompensationRegime); 4] = [
    (838.3, 1163.5, CompensationRegime::Diesel),
    (787.5, 838.3, CompensationRegime::JetFuel),
    (770.3, 787.5, CompensationRegime::Transition),
    (610.6, 770.3, CompensationRegime::Gasoline),
];

/// Selects the regime for a refined product from its 15°C density.
///
/// # Errors
///
/// Returns [`CompensationError::NoMatchingRegime`] if the density falls
/// outside every supported band (including `NaN`).
pub fn refine_product_regime(density_15: f64) -> Result<CompensationRegime, CompensationError> {
    PRODUCT_BANDS
        .iter()
        .find(|(lower, upper, _)| (*lower..*upper).contains(&density_15))
        .map(|&(_, _, regime)| regime)
        .ok_or(CompensationError::NoMatchingRegime { density_15 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes() {
        assert_eq!(OilCategory::try_from(0), Ok(OilCategory::Crude));
        assert_eq!(OilCategory::try_from(1), Ok(OilCategory::RefinedProduct));
        assert_eq!(OilCategory::try_from(2), Ok(OilCategory::Lubricant));
        assert_eq!(
            OilCategory::try_from(9),
            Err(CompensationError::InvalidOilCategory { code: 9 })
        );
    }

    #[test]
    fn classification() {
        assert_eq!(classify_regime(OilCategory::Crude), CompensationRegime::Crude);
        assert_eq!(
            classify_regime(OilCategory::RefinedProduct),
            CompensationRegime::Gasoline
        );
        assert_eq!(classify_regime(OilCategory::Lubricant), CompensationRegime::Lube);
    }

    #[test]
    fn product_band_edges() {
        use CompensationRegime::*;

        assert_eq!(refine_product_regime(610.6), Ok(Gasoline));
        assert_eq!(refine_product_regime(770.2999), Ok(Gasoline));
        assert_eq!(refine_product_regime(770.3), Ok(Transition));
        assert_eq!(refine_product_regime(787.5), Ok(JetFuel));
        assert_eq!(refine_product_regime(838.3), Ok(Diesel));
        assert_eq!(refine_product_regime(1163.4999), Ok(Diesel));
    }

    #[test]
    fn product_out_of_range() {
        for density_15 in [0.0, 610.5999, 1163.5, 1500.0] {
            assert_eq!(
                refine_product_regime(density_15),
                Err(CompensationError::NoMatchingRegime { density_15 })
            );
        }
        assert!(refine_product_regime(f64::NAN).is_err());
    }

    #[test]
    fn chart_codes() {
        let codes: Vec<u8> = CompensationRegime::ALL
            .iter()
            .map(|r| r.chart_code())
            .collect();
        assert_eq!(codes, vec![0x10, 0x11, 0x12, 0x13, 0x14, 0x15]);
    }
}
