//! # Petro VCF
//!
//! Temperature-corrected density and Volume Correction Factor (VCF) for
//! petroleum products, built as a [Twine](https://github.com/isentropic-dev/twine)
//! model.
//!
//! Given a density observed at some temperature, the crate solves for the
//! oil's standard density at 15°C, projects it to 20°C, and reports the factor
//! that converts a volume measured at the actual temperature to its 20°C
//! equivalent.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] adapter and the numeric core it wraps.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use petro_vcf::models::petroleum::{OilCategory, calc_compensated_density};
//!
//! let result = calc_compensated_density(OilCategory::Crude, 900.0, 20.0, 35.0).unwrap();
//! assert!((result.density_20c - 900.0).abs() < 0.01);
//! assert!(result.vcf_20 < 1.0);
//! ```

pub mod models;
pub mod support;
