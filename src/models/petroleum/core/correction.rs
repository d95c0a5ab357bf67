/// Standard reference temperature for the 15°C density basis, in °C.
pub const STANDARD_TEMP_15: f64 = 15.0;

/// Standard reference temperature for reported densities and VCFs, in °C.
pub const STANDARD_TEMP_20: f64 = 20.0;

/// Computes the second-order compensation modulus between two temperatures.
///
/// `1 − 2.3e-5·Δ − 2e-8·Δ²` with `Δ = real_temp − std_temp`.
///
/// Converts an observed density to the apparent density on the standard
/// basis, and corrects the raw projected 20°C density to its true value.
#[must_use]
pub fn com_modulus(real_temp: f64, std_temp: f64) -> f64 {
    let delta = real_temp - std_temp;
    1.0 - 2.3e-5 * delta - 2e-8 * delta * delta
}

/// Computes the volumetric expansion ratio `exp(−α·Δt·(1 + 0.8·α·Δt))`.
#[must_use]
pub fn exp_factor(alpha: f64, delta_temp: f64) -> f64 {
    let a_dt = alpha * delta_temp;
    (-a_dt * (1.0 + 0.8 * a_dt)).exp()
}
